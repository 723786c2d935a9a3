use crate::domain::LeadKind;
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, init_test_state, post_form, state_with_sink, RecordingSink};
use astra::Body;
use http::{Method, Request};
use std::sync::Arc;

#[test]
fn enquiry_is_acknowledged_with_a_partial() {
    let sink = Arc::new(RecordingSink::default());
    let state = state_with_sink(sink.clone());

    let resp = post_form(
        &state,
        "/property/1/enquiry",
        "name=Layla+Haddad&email=layla%40example.com&phone=%2B971500000000&message=Viewing+please",
    );
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Thank you!"));
    assert!(body.contains("TEST-1"));
    assert!(!body.contains("<!DOCTYPE html>"));
    assert!(!body.contains("<html"));

    let leads = sink.leads.lock().unwrap();
    assert_eq!(leads.len(), 1);
    assert_eq!(leads[0].kind, LeadKind::Enquiry);
    assert_eq!(leads[0].property_id.as_deref(), Some("1"));
    assert_eq!(leads[0].phone.as_deref(), Some("+971500000000"));
}

#[test]
fn invalid_enquiry_rerenders_form_with_errors() {
    let sink = Arc::new(RecordingSink::default());
    let state = state_with_sink(sink.clone());

    let resp = post_form(&state, "/property/2/enquiry", "email=layla%40example.com");
    assert_eq!(resp.status(), 422);

    let body = body_string(resp);
    assert!(body.contains("Please enter your name."));
    assert!(body.contains("id=\"enquiry-form\""));
    assert!(body.contains("value=\"layla@example.com\""));
    assert!(sink.leads.lock().unwrap().is_empty());
}

#[test]
fn enquiry_for_unknown_property_is_not_found() {
    let state = init_test_state();
    let req = Request::builder()
        .method(Method::POST)
        .uri("/property/999/enquiry")
        .body(Body::from("name=A&email=a%40b.co".as_bytes().to_vec()))
        .unwrap();

    assert!(matches!(handle(req, &state), Err(ServerError::NotFound)));
}

#[test]
fn ebook_capture_with_default_sink() {
    let state = init_test_state();
    let resp = post_form(&state, "/leads/ebook", "name=Sam&email=sam%40example.com");

    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Check your email for the download link."));
    assert!(body.contains("KI-000001"));
}

#[test]
fn newsletter_rejects_malformed_email() {
    let state = init_test_state();
    let resp = post_form(&state, "/leads/newsletter", "email=not-an-email&lang=fr");

    assert_eq!(resp.status(), 422);
    let body = body_string(resp);
    assert!(body.contains("Please enter a valid email address."));
    // the form keeps the visitor's language
    assert!(body.contains("S'abonner"));
}

#[test]
fn report_lead_keeps_city() {
    let sink = Arc::new(RecordingSink::default());
    let state = state_with_sink(sink.clone());

    let resp = post_form(&state, "/leads/report", "city=Dubai&email=investor%40example.com");
    assert_eq!(resp.status(), 200);

    let leads = sink.leads.lock().unwrap();
    assert_eq!(leads[0].kind, LeadKind::Report);
    assert_eq!(leads[0].city.as_deref(), Some("Dubai"));
}

#[test]
fn refused_lead_is_reported_to_the_visitor() {
    let sink = Arc::new(RecordingSink {
        refuse: true,
        ..RecordingSink::default()
    });
    let state = state_with_sink(sink);

    let resp = post_form(&state, "/leads/newsletter", "email=a%40b.co");
    assert_eq!(resp.status(), 503);
    assert!(body_string(resp).contains("We could not send this right now."));
}
