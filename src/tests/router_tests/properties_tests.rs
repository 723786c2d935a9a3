use crate::tests::utils::{body_string, get, init_test_state};

fn card_count(body: &str) -> usize {
    body.matches("<article class=\"property-card").count()
}

#[test]
fn listing_shows_whole_catalog_and_selects_first() {
    let state = init_test_state();
    let resp = get(&state, "/properties");

    assert_eq!(resp.status(), 200);
    let body = body_string(resp);

    assert_eq!(card_count(&body), 6);
    assert!(body.contains("<aside class=\"detail-panel\" data-id=\"1\">"));
    assert!(body.contains("<article class=\"property-card active\" data-id=\"1\">"));
    assert_eq!(body.matches("<article class=\"cluster-card\"").count(), 4);
}

#[test]
fn villa_query_matches_two_listings() {
    let state = init_test_state();
    let body = body_string(get(&state, "/properties?q=villa"));

    assert_eq!(card_count(&body), 2);
    assert!(body.contains("Palm Jumeirah Signature Villa"));
    assert!(body.contains("Bosphorus Waterfront Estate"));
    assert!(!body.contains("Belgravia Georgian Townhouse"));
}

#[test]
fn commercial_shows_empty_state() {
    let state = init_test_state();
    let body = body_string(get(&state, "/properties?category=commercial"));

    assert!(body.contains("No properties match your criteria."));
    assert_eq!(card_count(&body), 0);
    assert!(!body.contains("class=\"detail-panel\""));
    assert!(!body.contains("class=\"cluster-card\""));
    // subtypes of the chosen category are offered
    assert!(body.contains("Office Spaces"));
}

#[test]
fn ultra_premium_keeps_listings_from_five_million() {
    let state = init_test_state();
    let body = body_string(get(&state, "/properties?category=ultra-premium"));

    assert_eq!(card_count(&body), 4);
    assert!(!body.contains("Riyadh Gate Tower Residence"));
    assert!(!body.contains("DAMAC Towers"));
}

#[test]
fn for_rent_tab() {
    let state = init_test_state();
    let body = body_string(get(&state, "/properties?status=for-rent"));

    assert_eq!(card_count(&body), 1);
    assert!(body.contains("data-id=\"6\""));
}

#[test]
fn unknown_filter_values_are_ignored() {
    let state = init_test_state();
    let body = body_string(get(&state, "/properties?city=Paris&status=sold&category=castles"));

    assert_eq!(card_count(&body), 6);
}

#[test]
fn globe_pin_filters_city_and_selects_its_first_listing() {
    let state = init_test_state();
    let body = body_string(get(&state, "/properties?pin=Turkey"));

    assert_eq!(card_count(&body), 1);
    assert!(body.contains("<aside class=\"detail-panel\" data-id=\"6\">"));
    assert!(body.contains("class=\"globe-pin active\""));
}

#[test]
fn explicit_selection_and_gallery_index() {
    let state = init_test_state();
    let body = body_string(get(&state, "/properties?selected=4&img=1"));

    assert!(body.contains("<aside class=\"detail-panel\" data-id=\"4\">"));
    assert!(body.contains("<img class=\"detail-image\" src=\"/static/img/property-1.jpg\""));
}

#[test]
fn out_of_range_gallery_index_is_ignored() {
    let state = init_test_state();
    let body = body_string(get(&state, "/properties?selected=4&img=9"));

    assert!(body.contains("<img class=\"detail-image\" src=\"/static/img/property-4.jpg\""));
}

#[test]
fn modal_does_not_change_selection() {
    let state = init_test_state();
    let body = body_string(get(&state, "/properties?selected=1&modal=3&modal_img=1"));

    assert!(body.contains("role=\"dialog\""));
    assert!(body.contains("<aside class=\"detail-panel\" data-id=\"1\">"));
    // second image of listing 3
    assert!(body.contains("<div class=\"carousel\"><img src=\"/static/img/property-1.jpg\""));
}

#[test]
fn links_carry_filters_and_preferences() {
    let state = init_test_state();
    let body = body_string(get(&state, "/properties?city=Dubai&currency=SAR"));

    assert_eq!(card_count(&body), 2);
    assert!(body.contains("href=\"/properties?city=Dubai&amp;selected=3&amp;currency=SAR\""));
    // 8.75M USD in riyals
    assert!(body.contains("﷼32.8M"));
}

/// The href of the first `<a ...>` whose markup ends with `tail`, unescaped.
fn link_before(body: &str, tail: &str) -> String {
    let end = body.find(tail).expect("link not rendered");
    let start = body[..end].rfind("href=\"").expect("no href") + "href=\"".len();
    let len = body[start..].find('"').unwrap();
    body[start..start + len].replace("&amp;", "&")
}

#[test]
fn selection_survives_a_status_tab_change() {
    let state = init_test_state();
    let body = body_string(get(&state, "/properties?selected=5&img=1"));

    let for_sale = link_before(&body, "class=\"tab\">For Sale</a>");
    assert_eq!(for_sale, "/properties?status=for-sale&selected=5&img=1");

    let body = body_string(get(&state, &for_sale));
    // listing 5 is a project, so it drops out of the cards but stays selected
    assert_eq!(card_count(&body), 3);
    assert!(body.contains("<aside class=\"detail-panel\" data-id=\"5\">"));
    assert!(body.contains("<img class=\"detail-image\" src=\"/static/img/property-3.jpg\""));
}

#[test]
fn chips_and_search_keep_the_selection() {
    let state = init_test_state();
    let body = body_string(get(&state, "/properties?selected=4"));

    let london = link_before(&body, "</span> UK</a>");
    assert_eq!(london, "/properties?city=London&selected=4");
    assert!(body.contains("<input type=\"hidden\" name=\"selected\" value=\"4\">"));

    let body = body_string(get(&state, &london));
    assert_eq!(card_count(&body), 2);
    assert!(body.contains("<aside class=\"detail-panel\" data-id=\"4\">"));
}

#[test]
fn globe_pin_replaces_the_selection() {
    let state = init_test_state();
    let body = body_string(get(&state, "/properties?selected=4"));

    let dubai = link_before(&body, "<span class=\"pin-label\">Dubai</span>");
    assert_eq!(dubai, "/properties?pin=Dubai");
}
