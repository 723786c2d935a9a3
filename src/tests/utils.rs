use crate::config::SiteConfig;
use crate::domain::{Acknowledgement, Lead, LeadError, LeadSink};
use crate::router::handle;
use crate::state::AppState;
use astra::{Body, Response};
use http::{Method, Request};
use std::io::Read;
use std::sync::{Arc, Mutex};

/// Site state with the seeded catalog and default config.
pub fn init_test_state() -> AppState {
    AppState::new(SiteConfig::default()).expect("seeded catalog is valid")
}

/// Captures leads instead of logging them; optionally refuses everything.
#[derive(Default)]
pub struct RecordingSink {
    pub leads: Mutex<Vec<Lead>>,
    pub refuse: bool,
}

impl LeadSink for Arc<RecordingSink> {
    fn submit(&self, lead: Lead) -> Result<Acknowledgement, LeadError> {
        if self.refuse {
            return Err(LeadError::Rejected("sink offline".into()));
        }
        let mut leads = self.leads.lock().unwrap();
        leads.push(lead.clone());
        Ok(Acknowledgement {
            reference: format!("TEST-{}", leads.len()),
            kind: lead.kind,
            email: lead.email,
        })
    }
}

pub fn state_with_sink(sink: Arc<RecordingSink>) -> AppState {
    init_test_state().with_leads(Box::new(sink))
}

pub fn get(state: &AppState, uri: &str) -> Response {
    let req = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    handle(req, state).expect("Failed to handle request")
}

pub fn post_form(state: &AppState, uri: &str, form: &str) -> Response {
    let req = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(form.as_bytes().to_vec()))
        .unwrap();

    handle(req, state).expect("Failed to handle request")
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}
