// src/handlers/pages.rs
use super::preferences;
use crate::domain::clusters::aggregate;
use crate::domain::property::City;
use crate::domain::{filter, FilterCriteria, SelectionState};
use crate::request::QueryParams;
use crate::responses::{html_response, html_response_with_status, ResultResp};
use crate::state::AppState;
use crate::templates::pages::{
    home_page, not_found_page, properties_page, property_detail_page, property_not_found_page,
    DetailVm, HomeState, HomeVm, ListingVm,
};
use crate::templates::PageContext;
use astra::Request;

const FEATURED_COUNT: usize = 3;
const SIMILAR_COUNT: usize = 3;

fn context<'a>(path: &'a str, params: &'a QueryParams, state: &'a AppState) -> PageContext<'a> {
    PageContext {
        prefs: preferences(params, state),
        config: &state.config,
        path,
        params,
    }
}

pub fn home(req: &Request, state: &AppState) -> ResultResp {
    let params = QueryParams::from_request(req);
    let ctx = context("/", &params, state);
    let home_state = HomeState::from_params(&params);

    let grid_criteria = FilterCriteria {
        city: home_state.grid_city,
        ..FilterCriteria::default()
    };
    let mut grid = filter(state.catalog.properties(), &grid_criteria);
    grid.truncate(crate::templates::pages::home::GRID_LIMIT);

    let modal = home_state.modal.as_deref().and_then(|id| state.catalog.find(id));

    let vm = HomeVm {
        featured: state.catalog.properties().iter().take(FEATURED_COUNT).collect(),
        grid,
        modal,
        state: home_state,
    };
    html_response(home_page(&ctx, &vm))
}

/// The listing page. Query state is applied in a fixed order: criteria,
/// explicit selection, globe pin, filtering, gallery index, fallback
/// selection, modal, clusters.
pub fn properties(req: &Request, state: &AppState) -> ResultResp {
    let params = QueryParams::from_request(req);
    let ctx = context("/properties", &params, state);
    let catalog = &state.catalog;

    let mut criteria = FilterCriteria::from_params(&params);
    let mut selection = SelectionState::default();

    if let Some(p) = params.get("selected").and_then(|id| catalog.find(id)) {
        selection.select(p);
    }
    if let Some(city) = params.get("pin").and_then(City::parse) {
        selection.select_city_pin(&mut criteria, catalog, city);
    }

    let visible = filter(catalog.properties(), &criteria);

    if let Some(idx) = params.index("img") {
        selection.set_image(idx);
    }
    selection.reconcile(&visible);

    if let Some(p) = params.get("modal").and_then(|id| catalog.find(id)) {
        selection.open_modal(p);
    }

    let clusters = aggregate(&visible, &mut rand::thread_rng());

    tracing::debug!(
        visible = visible.len(),
        clusters = clusters.len(),
        selected = selection.selected().map(|p| p.id.as_str()).unwrap_or("-"),
        "listing filtered"
    );

    let vm = ListingVm {
        criteria,
        visible,
        selection,
        clusters,
        modal_img: params.index("modal_img").unwrap_or(0),
    };
    html_response(properties_page(&ctx, &vm))
}

pub fn property_detail(req: &Request, state: &AppState, id: &str) -> ResultResp {
    let params = QueryParams::from_request(req);
    let path = format!("/property/{id}");
    let ctx = context(&path, &params, state);
    let catalog = &state.catalog;

    let Some(property) = catalog.find(id) else {
        tracing::debug!(id, "unknown property");
        return html_response_with_status(404, property_not_found_page(&ctx));
    };

    let showcase = catalog.showcase_images(property);
    let image_index = params
        .index("img")
        .filter(|&i| i < showcase.len())
        .unwrap_or(0);

    let vm = DetailVm {
        property,
        showcase,
        image_index,
        similar: catalog.similar_to(property, SIMILAR_COUNT),
        next: catalog.next_after(id),
    };
    html_response(property_detail_page(&ctx, &vm))
}

pub fn not_found(req: &Request, state: &AppState) -> ResultResp {
    let params = QueryParams::from_request(req);
    let ctx = context(req.uri().path(), &params, state);
    html_response_with_status(404, not_found_page(&ctx))
}
