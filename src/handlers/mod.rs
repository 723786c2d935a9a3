pub mod api;
pub mod leads;
pub mod pages;

use crate::domain::Preferences;
use crate::request::QueryParams;
use crate::state::AppState;

fn preferences(params: &QueryParams, state: &AppState) -> Preferences {
    Preferences::from_params(params, state.config.default_currency)
}
