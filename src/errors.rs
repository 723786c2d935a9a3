// errors.rs
use thiserror::Error;

/// Errors originating from the server logic
/// (routing, missing resources, bad input) or from downstream layers.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Internal Server Error: {0}")]
    InternalError(String),
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::InternalError(_) => 500,
        }
    }
}
