use crate::errors::ServerError;
use crate::templates::components::error::error_page;
use astra::{Body, Response, ResponseBuilder};

pub type ResultResp = Result<Response, ServerError>;

/// Convert a ServerError into a proper HTML response
pub fn error_to_response(err: ServerError) -> Response {
    let status = err.status();
    let message = match &err {
        ServerError::NotFound => "Page not found.".to_string(),
        ServerError::BadRequest(msg) => msg.clone(),
        // details stay in the log
        ServerError::InternalError(_) => "Something went wrong on our side.".to_string(),
    };

    if status >= 500 {
        tracing::error!(error = %err, "request failed");
    } else {
        tracing::debug!(error = %err, "request rejected");
    }

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(error_page(status, &message).into_string()))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
