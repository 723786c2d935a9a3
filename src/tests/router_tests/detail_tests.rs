use crate::tests::utils::{body_string, get, init_test_state};

#[test]
fn unknown_property_renders_not_found_branch() {
    let state = init_test_state();
    let resp = get(&state, "/property/999");

    assert_eq!(resp.status(), 404);
    let body = body_string(resp);

    assert!(body.contains("Property not found."));
    assert!(body.contains("<a href=\"/properties\">← Back to listings</a>"));
}

#[test]
fn detail_page_shows_listing() {
    let state = init_test_state();
    let resp = get(&state, "/property/1");

    assert_eq!(resp.status(), 200);
    let body = body_string(resp);

    assert!(body.contains("Property-ID 000001 | London"));
    assert!(body.contains("$12.5M"));
    assert!(body.contains("Wine Cellar"));
    assert!(body.contains("Candy &amp; Candy"));
    assert!(body.contains("href=\"/property/2\" class=\"next-property\""));
    assert!(body.contains(
        "https://wa.me/1234567890?text=Hi%2C+I%27m+interested+in+The+Residences+at+One+Hyde+Park"
    ));
}

#[test]
fn similar_listings_prefer_the_same_city() {
    let state = init_test_state();
    let body = body_string(get(&state, "/property/1"));

    let similar = body.split("class=\"similar\"").nth(1).unwrap();
    assert!(similar.contains("Belgravia Georgian Townhouse"));
    assert_eq!(similar.matches("<article class=\"property-card").count(), 1);
}

#[test]
fn next_property_wraps_to_first() {
    let state = init_test_state();
    let body = body_string(get(&state, "/property/6"));

    assert!(body.contains("href=\"/property/1\" class=\"next-property\""));
}

#[test]
fn off_plan_listing_shows_badge_and_developer() {
    let state = init_test_state();
    let body = body_string(get(&state, "/property/3"));

    assert!(body.contains("Off-Plan"));
    assert!(body.contains("Developer"));
    assert!(body.contains("Completion"));
}

#[test]
fn gallery_index_picks_main_image() {
    let state = init_test_state();

    // 2 own images, then other listings' primaries
    let body = body_string(get(&state, "/property/2?img=2"));
    assert!(body.contains("<img class=\"main-image\" src=\"/static/img/property-1.jpg\""));

    let body = body_string(get(&state, "/property/2?img=40"));
    assert!(body.contains("<img class=\"main-image\" src=\"/static/img/property-2.jpg\""));
}

#[test]
fn detail_prices_follow_currency() {
    let state = init_test_state();
    let body = body_string(get(&state, "/property/1?currency=AED"));

    assert!(body.contains("د.إ45.9M"));
    assert!(body.contains("href=\"/properties?currency=AED\""));
}

#[test]
fn unknown_route_is_a_404_page() {
    let state = init_test_state();
    let resp = get(&state, "/no/such/page");

    assert_eq!(resp.status(), 404);
    assert!(body_string(resp).contains("Page not found."));
}
