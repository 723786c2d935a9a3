use crate::domain::currency::group_thousands;
use crate::domain::{Preferences, Property};
use maud::{html, Markup};

/// Listing tile. `href` is where the tile leads; `active` marks the selected one.
pub fn property_card(p: &Property, prefs: &Preferences, href: &str, active: bool) -> Markup {
    html! {
        article class=(if active { "property-card active" } else { "property-card" }) data-id=(p.id) {
            a href=(href) {
                div class="property-card-media" {
                    img src=(p.image) alt=(p.title) loading="lazy";
                    div class="badges" {
                        span class="badge" { (p.city) }
                        @if p.is_off_plan() {
                            span class="badge badge-gold" { "Off-Plan" }
                        }
                    }
                    span class="badge badge-roi" { (p.roi) "% ROI" }
                }
                div class="property-card-body" {
                    p class="price" { (prefs.price(p.price)) }
                    h3 { (p.title) }
                    p class="location" { (p.location) }
                    p class="specs" {
                        span { (p.bedrooms) " Beds" }
                        span { (group_thousands(p.area as u64)) " sqft" }
                    }
                }
            }
        }
    }
}
