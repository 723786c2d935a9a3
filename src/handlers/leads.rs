// src/handlers/leads.rs
use super::preferences;
use crate::domain::{Lead, LeadError, LeadKind};
use crate::errors::ServerError;
use crate::request::QueryParams;
use crate::responses::{html_response, html_response_with_status, ResultResp};
use crate::state::AppState;
use crate::templates::components::lead_forms::FormState;
use crate::templates::components::{
    ebook_form, enquiry_form, lead_confirmation, newsletter_form, report_form,
};
use astra::Request;
use maud::Markup;

/// Status for a form that failed validation; htmx swaps the fragment back in.
const UNPROCESSABLE: u16 = 422;

pub fn enquiry(req: &mut Request, state: &AppState, id: &str) -> ResultResp {
    let property = state.catalog.find(id).ok_or(ServerError::NotFound)?;
    let form = QueryParams::from_form(req)?;

    let lead = Lead::from_form(LeadKind::Enquiry, &form).map(|l| l.for_property(&property.id));
    respond(state, &form, lead, |st| enquiry_form(&property.id, st))
}

pub fn ebook(req: &mut Request, state: &AppState) -> ResultResp {
    let form = QueryParams::from_form(req)?;
    respond(state, &form, Lead::from_form(LeadKind::Ebook, &form), ebook_form)
}

pub fn newsletter(req: &mut Request, state: &AppState) -> ResultResp {
    let form = QueryParams::from_form(req)?;
    let prefs = preferences(&form, state);
    respond(state, &form, Lead::from_form(LeadKind::Newsletter, &form), |st| {
        newsletter_form(&prefs, st)
    })
}

pub fn report(req: &mut Request, state: &AppState) -> ResultResp {
    let form = QueryParams::from_form(req)?;
    let city = form.text("city").to_string();
    respond(state, &form, Lead::from_form(LeadKind::Report, &form), |st| {
        report_form(&city, st)
    })
}

/// Hands a valid lead to the sink and renders the confirmation, or
/// re-renders the form with its errors.
fn respond<F>(state: &AppState, form: &QueryParams, lead: Result<Lead, LeadError>, rerender: F) -> ResultResp
where
    F: Fn(&FormState) -> Markup,
{
    match lead.and_then(|lead| state.leads.submit(lead)) {
        Ok(ack) => {
            tracing::debug!(reference = %ack.reference, kind = ack.kind.as_str(), "lead acknowledged");
            html_response(lead_confirmation(&ack))
        }
        Err(err) => {
            let status = match &err {
                LeadError::Invalid(_) => {
                    tracing::debug!(error = %err, "lead form rejected");
                    UNPROCESSABLE
                }
                LeadError::Rejected(reason) => {
                    tracing::warn!(reason = %reason, "lead sink refused submission");
                    503
                }
            };
            html_response_with_status(status, rerender(&FormState::failed(form, &err)))
        }
    }
}
