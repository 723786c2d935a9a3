// src/handlers/api.rs
use super::preferences;
use crate::domain::clusters::{aggregate, Cluster};
use crate::domain::{filter, FilterCriteria, Property};
use crate::request::QueryParams;
use crate::responses::{json_response, ResultResp};
use crate::state::AppState;
use astra::Request;
use serde::Serialize;

#[derive(Serialize)]
struct ListingItem<'a> {
    #[serde(flatten)]
    property: &'a Property,
    display_price: String,
}

#[derive(Serialize)]
struct ListingResponse<'a> {
    count: usize,
    currency: &'static str,
    properties: Vec<ListingItem<'a>>,
}

#[derive(Serialize)]
struct ClusterResponse<'a> {
    count: usize,
    clusters: Vec<Cluster<'a>>,
}

/// The filtered listing, taking the same query parameters as `/properties`.
pub fn properties(req: &Request, state: &AppState) -> ResultResp {
    let params = QueryParams::from_request(req);
    let prefs = preferences(&params, state);
    let criteria = FilterCriteria::from_params(&params);

    let properties: Vec<ListingItem> = filter(state.catalog.properties(), &criteria)
        .into_iter()
        .map(|p| ListingItem {
            property: p,
            display_price: prefs.price(p.price),
        })
        .collect();

    json_response(&ListingResponse {
        count: properties.len(),
        currency: prefs.currency.code,
        properties,
    })
}

pub fn clusters(req: &Request, state: &AppState) -> ResultResp {
    let params = QueryParams::from_request(req);
    let criteria = FilterCriteria::from_params(&params);
    let visible = filter(state.catalog.properties(), &criteria);
    let clusters = aggregate(&visible, &mut rand::thread_rng());

    json_response(&ClusterResponse {
        count: clusters.len(),
        clusters,
    })
}
