// src/domain/leads.rs

use crate::request::QueryParams;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;

const MAX_FIELD_CHARS: usize = 2_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadKind {
    Enquiry,
    Ebook,
    Newsletter,
    Report,
}

impl LeadKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeadKind::Enquiry => "enquiry",
            LeadKind::Ebook => "ebook",
            LeadKind::Newsletter => "newsletter",
            LeadKind::Report => "report",
        }
    }

    fn requires_name(&self) -> bool {
        matches!(self, LeadKind::Enquiry | LeadKind::Ebook)
    }
}

/// A contact request captured by one of the site's forms.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Lead {
    pub kind: LeadKind,
    pub name: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub message: Option<String>,
    /// Listing the lead was raised from, if any.
    pub property_id: Option<String>,
    /// Market the investment report was requested for.
    pub city: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Error)]
pub enum LeadError {
    #[error("{} invalid field(s)", .0.len())]
    Invalid(Vec<FieldError>),

    #[error("lead could not be recorded: {0}")]
    Rejected(String),
}

impl LeadError {
    pub fn message_for(&self, field: &str) -> Option<&'static str> {
        match self {
            LeadError::Invalid(errors) => errors.iter().find(|e| e.field == field).map(|e| e.message),
            LeadError::Rejected(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Acknowledgement {
    pub reference: String,
    pub kind: LeadKind,
    pub email: String,
}

impl Lead {
    /// Reads and validates `name`, `email`, `phone` and `message` from a
    /// submitted form.
    pub fn from_form(kind: LeadKind, form: &QueryParams) -> Result<Lead, LeadError> {
        let mut errors = Vec::new();

        let name = optional(form.text("name"));
        if kind.requires_name() && name.is_none() {
            errors.push(FieldError {
                field: "name",
                message: "Please enter your name.",
            });
        }

        let email = form.text("email");
        if email.is_empty() {
            errors.push(FieldError {
                field: "email",
                message: "Please enter your email address.",
            });
        } else if !looks_like_email(email) {
            errors.push(FieldError {
                field: "email",
                message: "Please enter a valid email address.",
            });
        }

        let message = optional(form.text("message"));
        if message.as_deref().map_or(false, |m| m.chars().count() > MAX_FIELD_CHARS) {
            errors.push(FieldError {
                field: "message",
                message: "Message is too long.",
            });
        }

        if !errors.is_empty() {
            return Err(LeadError::Invalid(errors));
        }

        Ok(Lead {
            kind,
            name,
            email: email.to_string(),
            phone: optional(form.text("phone")),
            message,
            property_id: None,
            city: optional(form.text("city")),
        })
    }

    pub fn for_property(mut self, id: &str) -> Self {
        self.property_id = Some(id.to_string());
        self
    }
}

fn optional(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

fn looks_like_email(raw: &str) -> bool {
    if raw.chars().any(char::is_whitespace) {
        return false;
    }
    match raw.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.split('.').count() >= 2
                && domain.split('.').all(|part| !part.is_empty())
        }
        None => false,
    }
}

/// Where captured leads go.
pub trait LeadSink {
    fn submit(&self, lead: Lead) -> Result<Acknowledgement, LeadError>;
}

/// Writes each lead to the log and acknowledges it. Nothing leaves the process.
#[derive(Debug, Default)]
pub struct LogLeadSink {
    next_reference: AtomicU64,
}

impl LeadSink for LogLeadSink {
    fn submit(&self, lead: Lead) -> Result<Acknowledgement, LeadError> {
        let n = self.next_reference.fetch_add(1, Ordering::Relaxed) + 1;
        let reference = format!("KI-{n:06}");

        tracing::info!(
            reference = %reference,
            kind = lead.kind.as_str(),
            email = %lead.email,
            property = lead.property_id.as_deref().unwrap_or("-"),
            city = lead.city.as_deref().unwrap_or("-"),
            "lead captured"
        );

        Ok(Acknowledgement {
            reference,
            kind: lead.kind,
            email: lead.email,
        })
    }
}
