// src/maps.rs

use crate::domain::Listing;
use std::fmt;
use std::thread;
use std::time::Duration;
use tracing::warn;

/// A map ready to be embedded in the detail page.
#[derive(Debug, Clone, PartialEq)]
pub struct MapWidget {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MapError {
    NotConfigured,
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapError::NotConfigured => write!(f, "Google Maps API não configurada"),
        }
    }
}

impl std::error::Error for MapError {}

/// External mapping service.
pub trait MapProvider: Send + Sync {
    fn load(&self, latitude: f64, longitude: f64) -> Result<MapWidget, MapError>;
}

/// Provider used when no mapping API key is set up: waits out the usual
/// script-load time, then fails.
pub struct UnconfiguredMaps {
    delay: Duration,
}

impl UnconfiguredMaps {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl MapProvider for UnconfiguredMaps {
    fn load(&self, _latitude: f64, _longitude: f64) -> Result<MapWidget, MapError> {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        Err(MapError::NotConfigured)
    }
}

/// What the map area of the detail page shows.
#[derive(Debug, Clone, PartialEq)]
pub enum MapSection {
    Widget(MapWidget),
    /// Loading failed; the address stands in for the map.
    Fallback { address: String, reason: String },
    /// The listing has no coordinates.
    NoLocation,
}

pub fn resolve_map(provider: &dyn MapProvider, listing: &Listing) -> MapSection {
    let Some((lat, lng)) = listing.coordinates.pair() else {
        return MapSection::NoLocation;
    };

    match provider.load(lat, lng) {
        Ok(widget) => MapSection::Widget(widget),
        Err(e) => {
            warn!(listing_id = listing.id, error = %e, "map failed to load, showing address");
            MapSection::Fallback {
                address: listing.address.formatted.clone(),
                reason: e.to_string(),
            }
        }
    }
}
