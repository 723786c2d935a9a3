pub mod catalog;
pub mod clusters;
pub mod content;
pub mod currency;
pub mod filter;
pub mod i18n;
pub mod leads;
pub mod preferences;
pub mod property;
pub mod selection;

pub use catalog::Catalog;
pub use filter::{filter, FilterCategory, FilterCriteria, StatusTab};
pub use leads::{Acknowledgement, Lead, LeadError, LeadKind, LeadSink, LogLeadSink};
pub use preferences::Preferences;
pub use property::Property;
pub use selection::SelectionState;
