// templates/pages/property_detail.rs

use crate::domain::currency::group_thousands;
use crate::domain::Property;
use crate::templates::components::contact::{interest_message, whatsapp_link};
use crate::templates::components::lead_forms::{enquiry_form, report_form, FormState};
use crate::templates::components::property_card;
use crate::templates::{desktop_layout, PageContext};
use maud::{html, Markup};

/// Tiles shown in the image grid beside the banner video.
const GRID_TILES: usize = 4;

pub struct DetailVm<'a> {
    pub property: &'a Property,
    /// Own gallery followed by a few other listings' primary images.
    pub showcase: Vec<&'a str>,
    pub image_index: usize,
    pub similar: Vec<&'a Property>,
    pub next: Option<&'a Property>,
}

/// Even ids get the 360° walkthrough, odd ids the showcase reel.
fn banner_video(p: &Property) -> &'static str {
    match p.id.parse::<u64>() {
        Ok(n) if n % 2 == 0 => "/static/video/apartment-360.mp4",
        _ => "/static/video/luxury-showcase.mp4",
    }
}

pub fn property_detail_page(ctx: &PageContext, vm: &DetailVm) -> Markup {
    let prefs = &ctx.prefs;
    let p = vm.property;
    let image_href = |i: usize| {
        let pairs = if i == 0 { vec![] } else { vec![("img", i.to_string())] };
        prefs.link(&format!("/property/{}", p.id), pairs)
    };
    let main_image = vm.showcase.get(vm.image_index).copied().unwrap_or(p.image.as_str());
    let whatsapp = whatsapp_link(&ctx.config.whatsapp_number, Some(interest_message(&p.title).as_str()));

    desktop_layout(
        &p.title,
        ctx,
        html! {
            main class="property-detail" {
                nav class="detail-nav" {
                    a href=(prefs.path("/properties")) { "← BACK TO SEARCH" }
                    @if let Some(next) = vm.next {
                        a href=(prefs.path(&format!("/property/{}", next.id))) class="next-property" { "NEXT PROPERTY ›" }
                    }
                }

                section class="detail-gallery" {
                    video class="banner" src=(banner_video(p)) autoplay muted loop playsinline {}
                    img class="main-image" src=(main_image) alt=(p.title);
                    div class="gallery-grid" {
                        @for (i, src) in vm.showcase.iter().enumerate().take(GRID_TILES) {
                            a href=(image_href(i))
                              class=(if i == vm.image_index { "tile active" } else { "tile" }) {
                                img src=(src) alt=(format!("View {}", i + 1)) loading="lazy";
                                @if i == GRID_TILES - 1 {
                                    span class="counter" { (vm.image_index + 1) "/" (vm.showcase.len()) }
                                }
                            }
                        }
                    }
                }

                p class="property-id" { "Property-ID " (p.display_id()) " | " (p.city) }

                div class="detail-layout" {
                    div class="detail-main" {
                        div class="price-row" {
                            h1 class="price" { (prefs.price(p.price)) }
                            @if p.is_off_plan() {
                                span class="badge badge-primary" { "Off-Plan" }
                            }
                        }
                        h2 { (p.title) }
                        p class="location" { (p.location) }

                        ul class="stats" {
                            li { strong { (p.bedrooms) } " Bedrooms" }
                            li { strong { (p.bathrooms) } " Bathrooms" }
                            li { strong { (group_thousands(p.area as u64)) } " sqft" }
                            li { strong { (p.roi) "%" } " ROI" }
                            li { strong { (p.kind) } " Type" }
                        }

                        section class="description" {
                            h3 { "About this property" }
                            p { (p.description) }
                        }

                        @if !p.features.is_empty() {
                            section class="features" {
                                h3 { "Features & Amenities" }
                                ul {
                                    @for f in &p.features {
                                        li { (f) }
                                    }
                                }
                            }
                        }

                        @if let Some(dev) = &p.developer {
                            div class="developer" {
                                div {
                                    small { "Developer" }
                                    p { (dev) }
                                }
                                @if let Some(date) = &p.completion_date {
                                    div class="completion" {
                                        small { "Completion" }
                                        p { (date) }
                                    }
                                }
                            }
                        }
                    }

                    aside class="detail-sidebar" {
                        h3 { "Interested in this property?" }
                        p class="microcopy" { "Fill the form & our agent will contact you within 24 hours." }
                        (enquiry_form(&p.id, &FormState::default()))
                        div class="sidebar-actions" {
                            a class="btn btn-outline" href=(whatsapp) target="_blank" rel="noopener noreferrer" { "WhatsApp" }
                            a class="btn btn-outline" href=(whatsapp_link(&ctx.config.whatsapp_number, Some(format!("Please send me the brochure for {}", p.title).as_str())))
                              target="_blank" rel="noopener noreferrer" { "Brochure" }
                        }
                    }
                }

                section class="report-banner" {
                    p class="eyebrow" { "Free Investment Guide" }
                    h3 { "Get Our Exclusive Property Investment Report" }
                    p {
                        "Discover top-performing markets, ROI projections, and expert insights for "
                        (p.city) " real estate. Download our complimentary report now."
                    }
                    (report_form(p.city.as_str(), &FormState::default()))
                }

                @if !vm.similar.is_empty() {
                    section class="similar" {
                        h3 { "Similar Properties" }
                        div class="card-grid" {
                            @for s in &vm.similar {
                                (property_card(s, prefs, &prefs.path(&format!("/property/{}", s.id)), false))
                            }
                        }
                    }
                }
            }
        },
    )
}

/// Shown for unknown property ids, with status 404.
pub fn property_not_found_page(ctx: &PageContext) -> Markup {
    desktop_layout(
        "Property not found",
        ctx,
        html! {
            main class="not-found" {
                p { "Property not found." }
                a href=(ctx.prefs.path("/properties")) { "← Back to listings" }
            }
        },
    )
}

/// Generic page for unknown routes.
pub fn not_found_page(ctx: &PageContext) -> Markup {
    desktop_layout(
        "Page not found",
        ctx,
        html! {
            main class="not-found" {
                h1 { "404" }
                p { "Page not found." }
                a href=(ctx.prefs.path("/")) { "← Back to home" }
            }
        },
    )
}
