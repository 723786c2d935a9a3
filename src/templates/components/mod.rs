pub mod cluster_card;
pub mod contact;
pub mod error;
pub mod filters;
pub mod lead_forms;
pub mod property_card;
pub mod property_modal;

pub use cluster_card::cluster_card;
pub use contact::{whatsapp_button, whatsapp_link};
pub use lead_forms::{ebook_form, enquiry_form, lead_confirmation, newsletter_form, report_form};
pub use property_card::property_card;
pub use property_modal::property_modal;
