use crate::config::SiteConfig;
use crate::responses::error_to_response;
use crate::router::handle;
use crate::state::AppState;
use astra::{Request, Server};

mod config;
mod domain;
mod errors;
mod handlers;
mod request;
mod responses;
mod router;
mod state;
mod telemetry;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    dotenvy::dotenv().ok();
    telemetry::init_tracing();

    let config = match SiteConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let addr = config.bind_addr;
    let workers = config.max_workers;
    let state = match AppState::new(config) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!(error = %e, "invalid catalog");
            std::process::exit(1);
        }
    };
    tracing::info!(%addr, workers, listings = state.catalog.len(), "starting server");

    let server = Server::bind(&addr).max_workers(workers);

    let result = server.serve(move |req: Request, _info| {
        let method = req.method().clone();
        let path = req.uri().path().to_owned();

        let resp = match handle(req, &state) {
            Ok(resp) => resp,
            Err(err) => error_to_response(err),
        };

        tracing::info!(%method, %path, status = resp.status().as_u16(), "request");
        resp
    });

    if let Err(e) = result {
        tracing::error!(error = %e, "server ended with error");
    }

    tracing::info!("server shut down cleanly");
}
