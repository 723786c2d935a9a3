use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};
use maud::Markup;

pub fn html_response(markup: Markup) -> ResultResp {
    html_response_with_status(200, markup)
}

/// Used for 404 pages and for form fragments that fail validation.
pub fn html_response_with_status(status: u16, markup: Markup) -> ResultResp {
    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(markup.into_string()))
        .map_err(|e| ServerError::InternalError(format!("html response: {e}")))
}

pub fn text_response(text: &'static str) -> ResultResp {
    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", mime::TEXT_PLAIN_UTF_8.as_ref())
        .body(Body::from(text))
        .map_err(|e| ServerError::InternalError(format!("text response: {e}")))
}
