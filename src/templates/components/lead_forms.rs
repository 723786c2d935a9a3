use crate::domain::{Acknowledgement, LeadError, LeadKind, Preferences};
use crate::request::QueryParams;
use maud::{html, Markup};

/// Values and errors to re-render a form with after a failed submit.
#[derive(Default)]
pub struct FormState<'a> {
    pub values: Option<&'a QueryParams>,
    pub error: Option<&'a LeadError>,
}

impl<'a> FormState<'a> {
    pub fn failed(values: &'a QueryParams, error: &'a LeadError) -> Self {
        Self {
            values: Some(values),
            error: Some(error),
        }
    }

    fn value(&self, field: &str) -> &'a str {
        self.values.map(|v| v.text(field)).unwrap_or("")
    }

    fn field_error(&self, field: &str) -> Markup {
        html! {
            @if let Some(msg) = self.error.and_then(|e| e.message_for(field)) {
                p class="field-error" role="alert" { (msg) }
            }
        }
    }

    fn rejected(&self) -> Markup {
        html! {
            @if let Some(LeadError::Rejected(_)) = self.error {
                p class="form-error" role="alert" { "We could not send this right now. Please try again." }
            }
        }
    }
}

pub fn enquiry_form(property_id: &str, state: &FormState) -> Markup {
    let action = format!("/property/{property_id}/enquiry");
    html! {
        form id="enquiry-form" class="lead-form"
            method="post" action=(action) hx-post=(action)
            hx-target="this" hx-swap="outerHTML" hx-disabled-elt="button"
        {
            input type="text" name="name" placeholder="Full Name" value=(state.value("name")) required;
            (state.field_error("name"))
            input type="email" name="email" placeholder="Email Address" value=(state.value("email")) required;
            (state.field_error("email"))
            input type="tel" name="phone" placeholder="Phone Number" value=(state.value("phone"));
            textarea name="message" rows="3" placeholder="I'm interested in this property..." {
                (state.value("message"))
            }
            (state.field_error("message"))
            (state.rejected())
            button type="submit" class="btn btn-primary" { "Send Enquiry" }
        }
    }
}

pub fn ebook_form(state: &FormState) -> Markup {
    html! {
        form id="ebook-form" class="lead-form"
            method="post" action="/leads/ebook" hx-post="/leads/ebook"
            hx-target="this" hx-swap="outerHTML" hx-disabled-elt="button"
        {
            input type="text" name="name" placeholder="Your Name" maxlength="100" value=(state.value("name")) required;
            (state.field_error("name"))
            input type="email" name="email" placeholder="Your Email" maxlength="255" value=(state.value("email")) required;
            (state.field_error("email"))
            (state.rejected())
            button type="submit" class="btn btn-gold" { "Get Your Free Copy Now" }
            p class="microcopy" { "No spam. Unsubscribe anytime." }
        }
    }
}

pub fn newsletter_form(prefs: &Preferences, state: &FormState) -> Markup {
    html! {
        form id="newsletter-form" class="lead-form inline"
            method="post" action="/leads/newsletter" hx-post="/leads/newsletter"
            hx-target="this" hx-swap="outerHTML" hx-disabled-elt="button"
        {
            @for (key, value) in prefs.to_pairs() {
                input type="hidden" name=(key) value=(value);
            }
            input type="email" name="email" placeholder="Your email address" value=(state.value("email")) required;
            (state.field_error("email"))
            (state.rejected())
            button type="submit" class="btn btn-primary" { (prefs.t("newsletter.subscribe")) }
        }
    }
}

/// The investment-report capture on the detail page; `city` names the market.
pub fn report_form(city: &str, state: &FormState) -> Markup {
    html! {
        form id="report-form" class="lead-form inline"
            method="post" action="/leads/report" hx-post="/leads/report"
            hx-target="this" hx-swap="outerHTML" hx-disabled-elt="button"
        {
            input type="hidden" name="city" value=(city);
            input type="email" name="email" placeholder="Enter your email" value=(state.value("email")) required;
            (state.field_error("email"))
            (state.rejected())
            button type="submit" class="btn btn-primary" { "Download" }
        }
    }
}

/// Swapped in place of a form once the lead is accepted.
pub fn lead_confirmation(ack: &Acknowledgement) -> Markup {
    let (heading, detail) = match ack.kind {
        LeadKind::Enquiry => ("Thank you!", "Our agent will contact you within 24 hours."),
        LeadKind::Ebook => ("You're in!", "Check your email for the download link."),
        LeadKind::Newsletter => ("Subscribed!", "You'll hear from us with the next market update."),
        LeadKind::Report => ("Report on its way!", "Check your email for the download link."),
    };

    html! {
        div class="lead-confirmation" role="status" {
            p class="lead-confirmation-heading" { (heading) }
            p { (detail) }
            p class="microcopy" { "Sent to " strong { (ack.email) } ". Reference " (ack.reference) "." }
        }
    }
}
