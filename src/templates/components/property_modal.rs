use crate::domain::currency::group_thousands;
use crate::domain::selection::{next_index, prev_index};
use crate::domain::{Preferences, Property};
use crate::templates::components::contact::{interest_message, whatsapp_link};
use crate::templates::components::lead_forms::{enquiry_form, FormState};
use maud::{html, Markup};

/// Links the modal needs from the page that hosts it.
pub struct ModalLinks<'a> {
    pub close: String,
    /// Builds the link that shows carousel image `n`.
    pub image: &'a dyn Fn(usize) -> String,
    pub details: String,
}

/// Quick-view overlay with an image carousel and the enquiry form.
pub fn property_modal(
    p: &Property,
    prefs: &Preferences,
    image_index: usize,
    links: &ModalLinks,
    whatsapp_number: &str,
) -> Markup {
    let gallery = p.gallery();
    let current = if image_index < gallery.len() { image_index } else { 0 };

    html! {
        div class="modal" role="dialog" aria-modal="true" aria-label=(p.title) {
            a class="modal-backdrop" href=(links.close) aria-label="Close" {}
            div class="modal-panel" {
                a class="modal-close" href=(links.close) aria-label="Close" { "×" }

                div class="carousel" {
                    img src=(gallery[current]) alt=(p.title);
                    div class="badges" {
                        span class="badge" { (p.city) }
                        @if p.is_off_plan() {
                            span class="badge badge-gold" { "Off-Plan" }
                        }
                        span class="badge badge-roi" { (p.roi) "% ROI" }
                    }
                    @if gallery.len() > 1 {
                        a class="carousel-prev" href=((links.image)(prev_index(current, gallery.len()))) aria-label="Previous image" { "‹" }
                        a class="carousel-next" href=((links.image)(next_index(current, gallery.len()))) aria-label="Next image" { "›" }
                        div class="carousel-dots" {
                            @for i in 0..gallery.len() {
                                a href=((links.image)(i))
                                  class=(if i == current { "dot active" } else { "dot" })
                                  aria-label=(format!("Image {}", i + 1)) {}
                            }
                        }
                    }
                }

                div class="modal-content" {
                    div class="modal-details" {
                        h2 { (p.title) }
                        p class="location" { (p.location) }
                        p class="price" { (prefs.price(p.price)) }
                        ul class="stats" {
                            li { strong { (p.bedrooms) } " Beds" }
                            li { strong { (p.bathrooms) } " Baths" }
                            li { strong { (group_thousands(p.area as u64)) } " sqft" }
                            li { strong { (p.roi) "%" } " ROI" }
                        }
                        p { (p.description) }
                        ul class="features" {
                            @for f in &p.features {
                                li { (f) }
                            }
                        }
                        @if let Some(dev) = &p.developer {
                            p class="developer" { "Developer: " strong { (dev) } }
                        }
                        a class="btn btn-outline" href=(links.details) { "View Full Details" }
                    }
                    aside class="modal-lead" {
                        h3 { "Interested?" }
                        (enquiry_form(&p.id, &FormState::default()))
                        a class="btn btn-whatsapp" target="_blank" rel="noopener noreferrer"
                          href=(whatsapp_link(whatsapp_number, Some(interest_message(&p.title).as_str()))) {
                            "WhatsApp"
                        }
                    }
                }
            }
        }
    }
}
