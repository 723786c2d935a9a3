pub mod home;
pub mod properties;
pub mod property_detail;

pub use home::{home_page, HomeState, HomeVm};
pub use properties::{properties_page, ListingVm};
pub use property_detail::{not_found_page, property_detail_page, property_not_found_page, DetailVm};
