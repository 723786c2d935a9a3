// templates/pages/home.rs

use crate::domain::content::{
    upcoming_events, EbookPage, BLOG_POSTS, EBOOK_PAGES, MARKETS, STATS, TESTIMONIALS,
};
use crate::domain::property::City;
use crate::domain::{FilterCriteria, Preferences, Property};
use crate::request::QueryParams;
use crate::templates::components::filters::{city_options, criteria_href};
use crate::templates::components::lead_forms::{ebook_form, FormState};
use crate::templates::components::property_modal::ModalLinks;
use crate::templates::components::{property_card, property_modal};
use crate::templates::{desktop_layout, PageContext};
use maud::{html, Markup};

/// Number of cards in the home-page grid.
pub const GRID_LIMIT: usize = 6;

/// Page state carried in the home-page query string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HomeState {
    pub grid_city: Option<City>,
    pub testimonial: usize,
    /// 0 is the ebook cover; 1.. are its pages.
    pub ebook_page: usize,
    pub modal: Option<String>,
    pub modal_img: usize,
}

impl HomeState {
    pub fn from_params(params: &QueryParams) -> Self {
        Self {
            grid_city: params.get("grid_city").and_then(City::parse),
            testimonial: params.index("t").unwrap_or(0) % TESTIMONIALS.len(),
            ebook_page: params.index("page").unwrap_or(0).min(EBOOK_PAGES.len()),
            modal: params.get("modal").map(str::to_string),
            modal_img: params.index("modal_img").unwrap_or(0),
        }
    }

    fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(city) = self.grid_city {
            pairs.push(("grid_city", city.as_str().to_string()));
        }
        if self.testimonial != 0 {
            pairs.push(("t", self.testimonial.to_string()));
        }
        if self.ebook_page != 0 {
            pairs.push(("page", self.ebook_page.to_string()));
        }
        if let Some(id) = &self.modal {
            pairs.push(("modal", id.clone()));
            if self.modal_img != 0 {
                pairs.push(("modal_img", self.modal_img.to_string()));
            }
        }
        pairs
    }

    fn href(&self, prefs: &Preferences, anchor: &str) -> String {
        format!("{}#{anchor}", prefs.link("/", self.to_pairs()))
    }
}

pub struct HomeVm<'a> {
    pub state: HomeState,
    pub featured: Vec<&'a Property>,
    pub grid: Vec<&'a Property>,
    pub modal: Option<&'a Property>,
}

pub fn home_page(ctx: &PageContext, vm: &HomeVm) -> Markup {
    let prefs = &ctx.prefs;

    desktop_layout(
        "Luxury Real Estate",
        ctx,
        html! {
            main class="home" {
                (hero(prefs))
                (about(prefs))
                (featured(prefs, vm))
                (grid(prefs, vm))
                (why_us(prefs))
                (testimonials(prefs, &vm.state))
                (ebook(prefs, &vm.state))
                (cta_banner(prefs))
                (blog())
                (global_markets(prefs))
                (events())

                @if let Some(p) = vm.modal {
                    @let close = HomeState { modal: None, modal_img: 0, ..vm.state.clone() }.href(prefs, "grid");
                    @let image = |n: usize| HomeState { modal_img: n, ..vm.state.clone() }.href(prefs, "grid");
                    (property_modal(
                        p,
                        prefs,
                        vm.state.modal_img,
                        &ModalLinks {
                            close,
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

fn hero(prefs: &Preferences) -> Markup {
    html! {
        section class="hero" {
            video src="/static/video/hero.mp4" autoplay muted loop playsinline {}
            div class="hero-content" {
                h1 { (prefs.t("hero.title1")) " " em { (prefs.t("hero.title2")) } }
                p { (prefs.t("hero.subtitle")) }
            }
            form class="hero-search" method="get" action="/properties" {
                h3 { (prefs.t("search.title")) }
                label {
                    (prefs.t("search.looking_for"))
                    input type="text" name="q" placeholder="e.g. Villa, Penthouse...";
                }
                label {
                    (prefs.t("search.location"))
                    select name="city" {
                        option value="" { (prefs.t("search.all_locations")) }
                        (city_options(None))
                    }
                }
                @for (key, value) in prefs.to_pairs() {
                    input type="hidden" name=(key) value=(value);
                }
                button type="submit" class="btn btn-primary" { (prefs.t("search.button")) }
                div class="quick-cities" {
                    span { "Quick:" }
                    @for city in City::ALL {
                        a href=(criteria_href(prefs, &FilterCriteria { city: Some(city), ..FilterCriteria::default() }, &[])) { (city) }
                    }
                }
            }
        }
    }
}

fn about(prefs: &Preferences) -> Markup {
    html! {
        section class="about" {
            h2 { "Your investment journey, " em { "our expertise" } }
            p { "Each listing offers unique features, exceptional quality, and prime locations." }
            div class="about-cards" {
                div class="about-card" {
                    img src="/static/img/property-1.jpg" alt="Kingdom International Real Estate" loading="lazy";
                    p { "Big things can happen in small spaces." }
                    a class="btn btn-outline" href=(prefs.path("/properties")) { "Details" }
                }
                div class="about-card" {
                    img src="/static/img/property-2.jpg" alt="Modern property" loading="lazy";
                    p { "Pricing Start at " (prefs.price(256_000)) }
                    a class="btn" href=(prefs.path("/properties")) { "Explore" }
                }
            }
        }
    }
}

fn featured(prefs: &Preferences, vm: &HomeVm) -> Markup {
    html! {
        section class="featured" id="featured" {
            h2 { "Explore Top Property" }
            p { "We blend design, technology, and trust to connect people with spaces they'll love." }
            div class="card-grid" {
                @for p in &vm.featured {
                    (property_card(p, prefs, &prefs.path(&format!("/property/{}", p.id)), false))
                }
            }
            a class="btn btn-outline" href=(prefs.path("/properties")) { "View All" }
        }
    }
}

fn grid(prefs: &Preferences, vm: &HomeVm) -> Markup {
    let state = &vm.state;
    html! {
        section class="property-grid" id="grid" {
            h2 { (prefs.t("grid.title1")) " " em { (prefs.t("grid.title2")) } }
            p { (prefs.t("grid.subtitle")) }

            nav class="city-tabs" {
                a href=(HomeState { grid_city: None, ..state.clone() }.href(prefs, "grid"))
                  class=(if state.grid_city.is_none() { "tab active" } else { "tab" }) { "All" }
                @for city in City::ALL {
                    a href=(HomeState { grid_city: Some(city), ..state.clone() }.href(prefs, "grid"))
                      class=(if state.grid_city == Some(city) { "tab active" } else { "tab" }) { (city) }
                }
            }

            @if vm.grid.is_empty() {
                div class="empty-state" { p { "No properties available in this market yet." } }
            } @else {
                div class="card-grid" {
                    @for p in &vm.grid {
                        @let open = HomeState { modal: Some(p.id.clone()), modal_img: 0, ..state.clone() };
                        (property_card(p, prefs, &open.href(prefs, "grid"), false))
                    }
                }
            }
            a class="btn btn-primary" href=(prefs.path("/properties")) { (prefs.t("grid.view_all")) }
        }
    }
}

fn why_us(prefs: &Preferences) -> Markup {
    html! {
        section class="why-us" {
            h2 { "Where Vision " em { "Meets Value" } }
            p {
                "Kingdom International connects discerning investors with strategically positioned "
                "properties across the world's most dynamic markets."
            }
            div class="stats" {
                @for stat in STATS.iter() {
                    div class="stat" {
                        strong { (stat.prefix) (stat.value) (stat.suffix) }
                        span { (stat.label) }
                    }
                }
            }
            a class="btn btn-outline" href=(prefs.path("/properties")) { "Start Investing" }
        }
    }
}

fn testimonials(prefs: &Preferences, state: &HomeState) -> Markup {
    let count = TESTIMONIALS.len();
    let current = &TESTIMONIALS[state.testimonial % count];
    let prev = HomeState { testimonial: (state.testimonial + count - 1) % count, ..state.clone() };
    let next = HomeState { testimonial: (state.testimonial + 1) % count, ..state.clone() };

    html! {
        section class="testimonials" id="testimonials" {
            h2 { "What Our Clients Say" }
            div class="testimonial" {
                img class="side" src=(current.image_left) alt="" loading="lazy";
                blockquote {
                    p { "“" (current.quote) "”" }
                    footer {
                        img class="avatar" src=(current.avatar) alt=(current.name);
                        strong { (current.name) }
                        span { (current.role) }
                    }
                }
                img class="side" src=(current.image_right) alt="" loading="lazy";
            }
            nav class="testimonial-nav" {
                a href=(prev.href(prefs, "testimonials")) aria-label="Previous testimonial" { "‹" }
                span { (state.testimonial % count + 1) " / " (count) }
                a href=(next.href(prefs, "testimonials")) aria-label="Next testimonial" { "›" }
            }
        }
    }
}

fn ebook(prefs: &Preferences, state: &HomeState) -> Markup {
    let last = EBOOK_PAGES.len();
    html! {
        section class="ebook" id="ebook" {
            div class="ebook-pitch" {
                p class="eyebrow" { "Free Download, Limited Time" }
                h2 { "The Ultimate Property " em { "Investment Guide" } }
                p {
                    "Discover the secrets top investors use to build multi-million dollar property "
                    "portfolios across the world's fastest-growing markets."
                }
                ul class="benefits" {
                    li { "Market analysis for Dubai, London & Riyadh" }
                    li { "ROI projections & rental yield data" }
                    li { "Tax-efficient investment strategies" }
                }
                p class="microcopy" { "Join 2,500+ investors who already downloaded this guide." }
                (ebook_form(&FormState::default()))
            }
            div class="ebook-preview" {
                @if state.ebook_page == 0 {
                    div class="ebook-cover" {
                        small { "Ultimate Guide" }
                        h3 { "Property Investment" }
                        span { "Kingdom International" }
                    }
                } @else {
                    @match &EBOOK_PAGES[state.ebook_page - 1] {
                        EbookPage::Contents { title, entries } => {
                            div class="ebook-page" {
                                h4 { (title) }
                                ol { @for e in entries.iter() { li { (e) } } }
                            }
                        }
                        EbookPage::Chapter { chapter, title, text } => {
                            div class="ebook-page" {
                                small { (chapter) }
                                h4 { (title) }
                                p { (text) }
                            }
                        }
                    }
                }
                nav class="ebook-nav" {
                    @if state.ebook_page > 0 {
                        a href=(HomeState { ebook_page: state.ebook_page - 1, ..state.clone() }.href(prefs, "ebook")) { "‹ Prev" }
                    }
                    span { (state.ebook_page) " / " (last) }
                    @if state.ebook_page < last {
                        a href=(HomeState { ebook_page: state.ebook_page + 1, ..state.clone() }.href(prefs, "ebook")) { "Next ›" }
                    }
                }
            }
        }
    }
}

fn cta_banner(prefs: &Preferences) -> Markup {
    html! {
        section class="cta-banner" {
            h2 { "Find Your Dream Home Today" }
            p { "From modern apartments to luxury estates, your perfect home awaits." }
            a class="btn btn-primary" href=(prefs.path("/properties")) { "Explore Homes" }
        }
    }
}

fn blog() -> Markup {
    html! {
        section class="blog" id="blog" {
            h2 { "Latest Insights" }
            p { "Expert advice, market analysis, and lifestyle inspiration for discerning property seekers." }
            div class="blog-track" {
                @for post in BLOG_POSTS.iter() {
                    article class="blog-card" data-id=(post.id) {
                        img src=(post.image) alt=(post.title) loading="lazy";
                        span class="badge" { (post.category) }
                        time { (post.date) }
                        h3 { (post.title) }
                        p { (post.excerpt) }
                    }
                }
            }
        }
    }
}

fn global_markets(prefs: &Preferences) -> Markup {
    html! {
        section class="global-map" id="markets" {
            h2 { "Global Reach" }
            p { "Five strategic markets. One unified investment platform." }
            div class="map" {
                @for m in MARKETS.iter() {
                    @let criteria = FilterCriteria { query: Some(m.name.to_string()), ..FilterCriteria::default() };
                    a class="map-pin" href=(criteria_href(prefs, &criteria, &[]))
                      style=(format!("left: {}%; top: {}%", m.x, m.y)) {
                        span class="pin-label" { (m.name) }
                    }
                }
            }
            div class="markets" {
                @for m in MARKETS.iter() {
                    div class="market" {
                        h4 { (m.name) }
                        p { "Avg. ROI " strong { (m.roi) } }
                        p { (m.districts) }
                        p { (m.listings) " active listings" }
                    }
                }
            }
        }
    }
}

fn events() -> Markup {
    html! {
        section class="events" id="events" {
            h2 { "Upcoming Events" }
            p { "Join us at exclusive property exhibitions, investment seminars, and networking events worldwide." }
            div class="event-list" {
                @for e in upcoming_events() {
                    article class="event-card" {
                        img src=(e.image) alt=(e.title) loading="lazy";
                        span class=(format!("badge {}", e.category.badge_class())) { (e.category.as_str()) }
                        h3 { (e.title) }
                        p class="event-when" {
                            @if let Some(date) = e.date_parsed() {
                                time datetime=(date.format("%Y-%m-%d").to_string()) { (e.date) }
                            } @else {
                                (e.date)
                            }
                            " · " (e.time)
                        }
                        p class="event-where" { (e.location) ", " (e.city) }
                        p { (e.description) }
                    }
                }
            }
        }
    }
}
