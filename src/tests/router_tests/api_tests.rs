use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, init_test_state};
use astra::Body;
use http::{Method, Request};
use serde_json::Value;

fn get_json(uri: &str) -> Value {
    let state = init_test_state();
    let resp = get(&state, uri);
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap().to_str().unwrap(),
        "application/json"
    );
    serde_json::from_str(&body_string(resp)).unwrap()
}

#[test]
fn api_properties_applies_filters() {
    let json = get_json("/api/properties?category=ultra-premium");

    assert_eq!(json["count"], 4);
    let ids: Vec<&str> = json["properties"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["1", "2", "4", "6"]);
}

#[test]
fn api_properties_formats_prices_in_currency() {
    let json = get_json("/api/properties?q=villa&currency=GBP");

    assert_eq!(json["currency"], "GBP");
    assert_eq!(json["properties"][0]["type"], "Villa");
    assert_eq!(json["properties"][0]["price"], 8_750_000);
    assert_eq!(json["properties"][0]["display_price"], "£6.9M");
    assert_eq!(json["properties"][1]["status"], "ready");
    assert_eq!(json["properties"][1]["city"], "Turkey");
}

#[test]
fn api_clusters_group_by_city() {
    let json = get_json("/api/clusters");

    assert_eq!(json["count"], 4);
    let clusters = json["clusters"].as_array().unwrap();
    let cities: Vec<&str> = clusters.iter().map(|c| c["city"].as_str().unwrap()).collect();
    assert_eq!(cities, vec!["London", "Dubai", "Riyadh", "Turkey"]);

    for c in clusters {
        assert!(c["available_units"].as_u64().unwrap() >= 2);
        let sold = c["units_sold"].as_u64().unwrap();
        assert!((60..120).contains(&sold));
    }
}

#[test]
fn api_clusters_of_empty_result() {
    let json = get_json("/api/clusters?category=commercial");
    assert_eq!(json["count"], 0);
}

#[test]
fn health_check() {
    let state = init_test_state();
    let resp = get(&state, "/health");

    assert_eq!(resp.status(), 200);
    assert_eq!(body_string(resp), "ok");
}

#[test]
fn unsupported_method_is_not_found() {
    let state = init_test_state();
    let req = Request::builder()
        .method(Method::DELETE)
        .uri("/properties")
        .body(Body::empty())
        .unwrap();

    assert!(matches!(handle(req, &state), Err(ServerError::NotFound)));
}
