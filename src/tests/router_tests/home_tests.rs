use crate::tests::utils::{body_string, get, init_test_state};

fn card_count(body: &str) -> usize {
    body.matches("<article class=\"property-card").count()
}

#[test]
fn home_page_loads_successfully() {
    let state = init_test_state();
    let resp = get(&state, "/");

    assert_eq!(resp.status(), 200);
    let body = body_string(resp);

    assert!(body.contains("<!DOCTYPE html>"));
    assert!(body.contains("Discover Your"));
    assert!(body.contains("Explore Top Property"));
    assert!(body.contains("Upcoming Events"));
    // 3 featured + a full grid of 6
    assert_eq!(card_count(&body), 9);
}

#[test]
fn grid_city_tab_narrows_the_grid() {
    let state = init_test_state();
    let body = body_string(get(&state, "/?grid_city=Dubai"));

    // 3 featured + the two Dubai listings
    assert_eq!(card_count(&body), 5);
    assert!(body.contains("href=\"/?grid_city=Dubai#grid\" class=\"tab active\""));
}

#[test]
fn empty_market_shows_placeholder() {
    let state = init_test_state();
    let body = body_string(get(&state, "/?grid_city=New+York"));

    assert!(body.contains("No properties available in this market yet."));
    assert_eq!(card_count(&body), 3);
}

#[test]
fn preferences_change_prices_language_and_links() {
    let state = init_test_state();
    let body = body_string(get(&state, "/?currency=GBP&lang=ar"));

    assert!(body.contains("dir=\"rtl\""));
    assert!(body.contains("اكتشف"));
    // One Hyde Park, 12.5M USD
    assert!(body.contains("£9.9M"));
    assert!(body.contains("href=\"/properties?currency=GBP&amp;lang=ar\""));
}

#[test]
fn unknown_preferences_fall_back_to_defaults() {
    let state = init_test_state();
    let body = body_string(get(&state, "/?currency=EUR&lang=xx"));

    assert!(body.contains("dir=\"ltr\""));
    assert!(body.contains("$12.5M"));
}

#[test]
fn testimonial_index_wraps() {
    let state = init_test_state();
    let body = body_string(get(&state, "/?t=4"));

    assert!(body.contains("James Whitfield"));
    assert!(!body.contains("Ahmed Al Maktoum"));
}

#[test]
fn modal_opens_over_the_grid() {
    let state = init_test_state();

    let closed = body_string(get(&state, "/"));
    assert!(!closed.contains("role=\"dialog\""));

    let open = body_string(get(&state, "/?modal=2"));
    assert!(open.contains("role=\"dialog\""));
    assert!(open.contains("href=\"/property/2\""));
}

#[test]
fn ebook_pages_flip() {
    let state = init_test_state();

    let cover = body_string(get(&state, "/"));
    assert!(cover.contains("ebook-cover"));

    let chapter = body_string(get(&state, "/?page=3"));
    assert!(chapter.contains("Chapter 2"));
    assert!(chapter.contains("London Prime Hotspots"));
}
