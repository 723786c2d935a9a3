// templates/pages/properties.rs

use crate::domain::clusters::Cluster;
use crate::domain::content::GLOBE_PINS;
use crate::domain::currency::group_thousands;
use crate::domain::property::City;
use crate::domain::{FilterCriteria, Preferences, Property, SelectionState};
use crate::templates::components::error::empty_state;
use crate::templates::components::filters::{category_bar, country_chips, criteria_href, search_bar, status_tabs};
use crate::templates::components::property_modal::ModalLinks;
use crate::templates::components::{cluster_card, property_card, property_modal};
use crate::templates::{desktop_layout, PageContext};
use maud::{html, Markup};

pub struct ListingVm<'a> {
    pub criteria: FilterCriteria,
    pub visible: Vec<&'a Property>,
    pub selection: SelectionState<'a>,
    pub clusters: Vec<Cluster<'a>>,
    pub modal_img: usize,
}

impl<'a> ListingVm<'a> {
    /// Listing link that keeps the criteria and the given selection/modal state.
    fn href(
        &self,
        prefs: &Preferences,
        selected: Option<&str>,
        img: usize,
        modal: Option<(&str, usize)>,
    ) -> String {
        let mut pairs: Vec<(&str, String)> = self.criteria.to_pairs();
        if let Some(id) = selected {
            pairs.push(("selected", id.to_string()));
            if img != 0 {
                pairs.push(("img", img.to_string()));
            }
        }
        if let Some((id, n)) = modal {
            pairs.push(("modal", id.to_string()));
            if n != 0 {
                pairs.push(("modal_img", n.to_string()));
            }
        }
        prefs.link("/properties", pairs)
    }

    fn selected_id(&self) -> Option<&'a str> {
        self.selection.selected().map(|p| p.id.as_str())
    }

    /// Selection and gallery position, kept across filter changes.
    fn carried(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(id) = self.selected_id() {
            pairs.push(("selected", id.to_string()));
            let img = self.selection.image_index();
            if img != 0 {
                pairs.push(("img", img.to_string()));
            }
        }
        pairs
    }
}

pub fn properties_page(ctx: &PageContext, vm: &ListingVm) -> Markup {
    let prefs = &ctx.prefs;
    let carried = vm.carried();

    desktop_layout(
        "Properties",
        ctx,
        html! {
            main class="listing" {
                section class="listing-filters" {
                    (search_bar(prefs, &vm.criteria, &carried))
                    (country_chips(prefs, &vm.criteria, &carried))
                    (category_bar(prefs, &vm.criteria, &carried))
                    (status_tabs(prefs, &vm.criteria, &carried))
                }

                div class="listing-layout" {
                    section class="listing-column" {
                        p class="result-count" {
                            (vm.visible.len())
                            @if vm.visible.len() == 1 { " property" } @else { " properties" }
                        }
                        @if vm.visible.is_empty() {
                            (empty_state("No properties match your criteria."))
                            a class="btn btn-outline" href=(prefs.path("/properties")) { "Clear filters" }
                        } @else {
                            div class="listing-cards" {
                                @for p in &vm.visible {
                                    @let active = vm.selected_id() == Some(p.id.as_str());
                                    (property_card(p, prefs, &vm.href(prefs, Some(p.id.as_str()), 0, None), active))
                                }
                            }
                        }
                    }

                    section class="listing-side" {
                        (globe(prefs, &vm.criteria))
                        (detail_panel(ctx, vm))
                    }
                }

                @if !vm.clusters.is_empty() {
                    section class="clusters" {
                        h3 { "Market Clusters" }
                        div class="cluster-grid" {
                            @for c in &vm.clusters {
                                @let href = criteria_href(prefs, &FilterCriteria { city: Some(c.city), ..vm.criteria.clone() }, &carried);
                                (cluster_card(c, &href))
                            }
                        }
                    }
                }

                @if let Some(p) = vm.selection.modal() {
                    @let selected = vm.selected_id();
                    @let img = vm.selection.image_index();
                    @let image = |n: usize| vm.href(prefs, selected, img, Some((p.id.as_str(), n)));
                    (property_modal(
                        p,
                        prefs,
                        vm.modal_img,
                        &ModalLinks {
                            close: vm.href(prefs, selected, img, None),
                            image: &image,
                            details: prefs.path(&format!("/property/{}", p.id)),
                        },
                        &ctx.config.whatsapp_number,
                    ))
                }
            }
        },
    )
}

/// Flat stand-in for the globe: one link per market pin, placed by
/// equirectangular projection of its coordinates.
fn globe(prefs: &Preferences, criteria: &FilterCriteria) -> Markup {
    html! {
        div class="globe" {
            @for pin in GLOBE_PINS.iter() {
                @let x = (pin.lng + 180.0) / 360.0 * 100.0;
                @let y = (90.0 - pin.lat) / 180.0 * 100.0;
                a href=(pin_href(prefs, criteria, pin.city))
                  class=(if criteria.city == Some(pin.city) { "globe-pin active" } else { "globe-pin" })
                  style=(format!("left: {x:.1}%; top: {y:.1}%"))
                  data-lat=(pin.lat) data-lng=(pin.lng) {
                    span class="flag" { (pin.flag) }
                    span class="pin-label" { (pin.city) }
                }
            }
        }
    }
}

/// Pins replace the city filter and pick that city's first listing,
/// so the current selection is not carried.
fn pin_href(prefs: &Preferences, criteria: &FilterCriteria, city: City) -> String {
    let mut pairs = FilterCriteria { city: None, ..criteria.clone() }.to_pairs();
    pairs.push(("pin", city.as_str().to_string()));
    prefs.link("/properties", pairs)
}

fn detail_panel(ctx: &PageContext, vm: &ListingVm) -> Markup {
    let prefs = &ctx.prefs;
    let Some(p) = vm.selection.selected() else {
        return html! {};
    };
    let gallery = p.gallery();
    let active = vm.selection.image_index();

    html! {
        aside class="detail-panel" data-id=(p.id) {
            @if let Some(src) = vm.selection.active_image() {
                img class="detail-image" src=(src) alt=(p.title);
            }
            @if gallery.len() > 1 {
                div class="thumbnails" {
                    @for (i, src) in gallery.iter().enumerate() {
                        a href=(vm.href(prefs, Some(p.id.as_str()), i, None))
                          class=(if i == active { "thumb active" } else { "thumb" }) {
                            img src=(src) alt=(format!("{} image {}", p.title, i + 1)) loading="lazy";
                        }
                    }
                }
            }
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
            div class="detail-actions" {
                a class="btn btn-outline" href=(vm.href(prefs, Some(p.id.as_str()), active, Some((p.id.as_str(), 0)))) { "Quick View" }
                a class="btn btn-primary" href=(prefs.path(&format!("/property/{}", p.id))) { "View Full Details" }
            }
        }
    }
}
