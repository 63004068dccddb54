// rest.rs
use crate::api::{ApiError, ListingApi, ListingQuery};
use crate::domain::{BookingRequest, Listing, ListingPage};
use reqwest::blocking::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;
use url::Url;

const USER_AGENT: &str = concat!("urbannest-web/", env!("CARGO_PKG_VERSION"));

/// Blocking client for the listings REST API.
pub struct RestApi {
    client: Client,
    base_url: Url,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Deserialize)]
struct SlotsBody {
    #[serde(default)]
    horarios_disponiveis: Vec<String>,
}

impl RestApi {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let mut base_url = Url::parse(base_url)
            .map_err(|e| ApiError::Network(format!("invalid API base url '{base_url}': {e}")))?;

        // join() drops the last path segment unless it ends with '/'
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    fn url(&self, path: &str, pairs: &[(&str, String)]) -> Result<Url, ApiError> {
        endpoint_url(&self.base_url, path, pairs)
    }

    fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        debug!(%url, "GET");
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode(resp)
    }
}

pub fn endpoint_url(base: &Url, path: &str, pairs: &[(&str, String)]) -> Result<Url, ApiError> {
    let mut url = base
        .join(path.trim_start_matches('/'))
        .map_err(|e| ApiError::Network(format!("bad endpoint '{path}': {e}")))?;

    if !pairs.is_empty() {
        url.query_pairs_mut()
            .extend_pairs(pairs.iter().map(|(k, v)| (*k, v.as_str())));
    }

    Ok(url)
}

fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    let status = resp.status();
    let body = resp
        .text()
        .map_err(|e| ApiError::Network(format!("reading body failed: {e}")))?;

    let error_message = serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .map(|b| b.error);

    if !status.is_success() {
        return Err(ApiError::Status {
            code: status.as_u16(),
            message: error_message,
        });
    }

    if let Some(msg) = error_message {
        return Err(ApiError::Rejected(msg));
    }

    serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
}

impl ListingApi for RestApi {
    fn list_listings(&self, query: &ListingQuery) -> Result<ListingPage, ApiError> {
        let url = self.url("api/imoveis", &query.api_pairs())?;
        self.get_json(url)
    }

    fn get_listing(&self, id: i64) -> Result<Listing, ApiError> {
        let url = self.url(&format!("api/imoveis/{id}"), &[])?;
        self.get_json(url)
    }

    fn available_slots(&self, listing_id: i64, date: &str) -> Result<Vec<String>, ApiError> {
        let url = self.url(
            "api/agendamentos/horarios-disponiveis",
            &[
                ("imovel_id", listing_id.to_string()),
                ("data_visita", date.to_string()),
            ],
        )?;
        let body: SlotsBody = self.get_json(url)?;
        Ok(body.horarios_disponiveis)
    }

    fn create_booking(&self, booking: &BookingRequest) -> Result<(), ApiError> {
        let url = self.url("api/agendamentos", &[])?;
        debug!(%url, imovel_id = booking.imovel_id, "POST");

        let resp = self
            .client
            .post(url)
            .json(booking)
            .send()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        decode::<serde_json::Value>(resp).map(|_| ())
    }
}
