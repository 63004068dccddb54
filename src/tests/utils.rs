use crate::api::{ApiError, ListingApi, ListingQuery, SampleCatalog};
use crate::app::App;
use crate::domain::{BookingRequest, Listing, ListingPage};
use crate::domain::listing::fixtures::listing;
use crate::maps::{MapError, MapProvider, MapWidget, UnconfiguredMaps};
use crate::router::handle;
use astra::{Body, Response};
use http::{Method, Request};
use std::io::Read;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// App over the seeded in-memory catalog, with a map that fails instantly.
pub fn sample_app(per_page: u32) -> App {
    App::new(
        Box::new(SampleCatalog::seeded()),
        Box::new(UnconfiguredMaps::new(Duration::ZERO)),
        per_page,
    )
}

/// Calls seen by a [`RecordingApi`], e.g. `list search=Casa&page=1`.
#[derive(Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<String>>>);

impl CallLog {
    fn push(&self, call: String) {
        self.0.lock().unwrap().push(call);
    }

    pub fn all(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }

    pub fn count(&self, prefix: &str) -> usize {
        self.all().iter().filter(|c| c.starts_with(prefix)).count()
    }
}

/// Wraps the sample catalog, records every call, and can be told to fail
/// everything with a network error.
pub struct RecordingApi {
    inner: SampleCatalog,
    log: CallLog,
    failing: bool,
}

impl RecordingApi {
    fn fail_if_needed(&self) -> Result<(), ApiError> {
        if self.failing {
            Err(ApiError::Network("connection refused".into()))
        } else {
            Ok(())
        }
    }
}

impl ListingApi for RecordingApi {
    fn list_listings(&self, query: &ListingQuery) -> Result<ListingPage, ApiError> {
        let pairs: Vec<String> = query
            .api_pairs()
            .into_iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect();
        self.log.push(format!("list {}", pairs.join("&")));
        self.fail_if_needed()?;
        self.inner.list_listings(query)
    }

    fn get_listing(&self, id: i64) -> Result<Listing, ApiError> {
        self.log.push(format!("get {id}"));
        self.fail_if_needed()?;
        self.inner.get_listing(id)
    }

    fn available_slots(&self, listing_id: i64, date: &str) -> Result<Vec<String>, ApiError> {
        self.log.push(format!("slots {listing_id} {date}"));
        self.fail_if_needed()?;
        self.inner.available_slots(listing_id, date)
    }

    fn create_booking(&self, booking: &BookingRequest) -> Result<(), ApiError> {
        self.log.push(format!("book {} {}", booking.imovel_id, booking.hora_visita));
        self.fail_if_needed()?;
        self.inner.create_booking(booking)
    }
}

/// App whose API calls end up in the returned log.
pub fn recording_app(per_page: u32, failing: bool) -> (App, CallLog) {
    let log = CallLog::default();
    let api = RecordingApi {
        inner: SampleCatalog::seeded(),
        log: log.clone(),
        failing,
    };
    let app = App::new(
        Box::new(api),
        Box::new(UnconfiguredMaps::new(Duration::ZERO)),
        per_page,
    );
    (app, log)
}

/// Map provider that counts how often it was asked, then fails.
#[derive(Clone, Default)]
pub struct CountingMaps(Arc<AtomicUsize>);

impl CountingMaps {
    pub fn calls(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

impl MapProvider for CountingMaps {
    fn load(&self, _latitude: f64, _longitude: f64) -> Result<MapWidget, MapError> {
        self.0.fetch_add(1, Ordering::SeqCst);
        Err(MapError::NotConfigured)
    }
}

/// Sample catalog behind a map provider whose calls can be counted.
pub fn counting_maps_app() -> (App, CountingMaps) {
    let maps = CountingMaps::default();
    let app = App::new(
        Box::new(SampleCatalog::seeded()),
        Box::new(maps.clone()),
        6,
    );
    (app, maps)
}

/// Backend that ignores the filters and always answers with the same
/// first page: three listings of 2, 3 and 4 bedrooms out of ten in total.
pub struct FixedPageApi;

impl ListingApi for FixedPageApi {
    fn list_listings(&self, _query: &ListingQuery) -> Result<ListingPage, ApiError> {
        Ok(ListingPage {
            listings: vec![
                listing(1, "casa", 3000.0, 2),
                listing(2, "casa", 3500.0, 3),
                listing(3, "casa", 4000.0, 4),
            ],
            total: 10,
            pages: 2,
        })
    }

    fn get_listing(&self, id: i64) -> Result<Listing, ApiError> {
        Ok(listing(id, "casa", 3000.0, 2))
    }

    fn available_slots(&self, _listing_id: i64, _date: &str) -> Result<Vec<String>, ApiError> {
        Ok(Vec::new())
    }

    fn create_booking(&self, _booking: &BookingRequest) -> Result<(), ApiError> {
        Ok(())
    }
}

pub fn fixed_page_app() -> App {
    App::new(
        Box::new(FixedPageApi),
        Box::new(UnconfiguredMaps::new(Duration::ZERO)),
        3,
    )
}

pub fn get(app: &App, uri: &str) -> Response {
    let req = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    handle(req, app).unwrap_or_else(|e| panic!("GET {uri} failed: {e}"))
}

pub fn get_htmx(app: &App, uri: &str) -> Response {
    let req = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header("HX-Request", "true")
        .body(Body::empty())
        .unwrap();
    handle(req, app).unwrap_or_else(|e| panic!("GET {uri} failed: {e}"))
}

pub fn get_with_headers(app: &App, uri: &str, headers: &[(&str, &str)]) -> Response {
    let mut builder = Request::builder().method(Method::GET).uri(uri);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    let req = builder.body(Body::empty()).unwrap();
    handle(req, app).unwrap_or_else(|e| panic!("GET {uri} failed: {e}"))
}

pub fn post_form(app: &App, uri: &str, form: &str) -> Response {
    let req = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .header("HX-Request", "true")
        .body(Body::from(form.as_bytes().to_vec()))
        .unwrap();
    handle(req, app).unwrap_or_else(|e| panic!("POST {uri} failed: {e}"))
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}
