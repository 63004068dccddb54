pub mod rest;
pub mod sample;

pub use rest::RestApi;
pub use sample::SampleCatalog;

use crate::domain::{BookingRequest, FilterState, Listing, ListingPage};
use std::error::Error;
use std::fmt;

/// Everything the pages need from the listings backend.
pub trait ListingApi: Send + Sync {
    fn list_listings(&self, query: &ListingQuery) -> Result<ListingPage, ApiError>;
    fn get_listing(&self, id: i64) -> Result<Listing, ApiError>;
    fn available_slots(&self, listing_id: i64, date: &str) -> Result<Vec<String>, ApiError>;
    fn create_booking(&self, booking: &BookingRequest) -> Result<(), ApiError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListingQuery {
    pub filters: FilterState,
    pub page: u32,
    pub per_page: u32,
}

impl ListingQuery {
    pub fn api_pairs(&self) -> Vec<(&'static str, String)> {
        self.filters.api_pairs(self.page, self.per_page)
    }
}

#[derive(Debug)]
pub enum ApiError {
    Network(String),
    /// Non-2xx answer, with the `{"error": ...}` message when the body had one.
    Status { code: u16, message: Option<String> },
    Decode(String),
    /// 2xx answer whose body was `{"error": ...}`.
    Rejected(String),
}

impl ApiError {
    /// Message written by the backend for the user, if any.
    pub fn user_message(&self) -> Option<&str> {
        match self {
            ApiError::Status {
                message: Some(msg), ..
            } => Some(msg),
            ApiError::Rejected(msg) => Some(msg),
            _ => None,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {msg}"),
            ApiError::Status { code, message } => match message {
                Some(msg) => write!(f, "API returned {code}: {msg}"),
                None => write!(f, "API returned {code}"),
            },
            ApiError::Decode(msg) => write!(f, "JSON decode error: {msg}"),
            ApiError::Rejected(msg) => write!(f, "API rejected request: {msg}"),
        }
    }
}

impl Error for ApiError {}
