use astra::Response;
// errors.rs
use std::fmt;

/// Errors that escape a handler. API failures are rendered by the handlers
/// themselves and never end up here.
#[derive(Debug)]
pub enum ServerError {
    NotFound,
    BadRequest(String),
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::NotFound => write!(f, "Not Found"),
            ServerError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            ServerError::InternalError => write!(f, "Internal Server Error"),
        }
    }
}

impl std::error::Error for ServerError {}
