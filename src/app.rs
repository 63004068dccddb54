use crate::api::{ListingApi, RestApi, SampleCatalog};
use crate::config::{Backend, Settings};
use crate::maps::{MapProvider, UnconfiguredMaps};
use anyhow::{Context, Result};
use std::time::Duration;
use tracing::info;

/// Shared, read-only context handed to every request handler.
pub struct App {
    pub api: Box<dyn ListingApi>,
    pub maps: Box<dyn MapProvider>,
    pub per_page: u32,
}

impl App {
    pub fn new(api: Box<dyn ListingApi>, maps: Box<dyn MapProvider>, per_page: u32) -> Self {
        Self {
            api,
            maps,
            per_page,
        }
    }

    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let api: Box<dyn ListingApi> = match settings.backend {
            Backend::Rest => {
                info!(base_url = %settings.api_base_url, "using listings REST API");
                let api = RestApi::new(
                    &settings.api_base_url,
                    Duration::from_secs(settings.request_timeout_secs),
                )
                .context("Failed to build API client")?;
                Box::new(api)
            }
            Backend::Sample => {
                info!("using bundled sample catalog");
                Box::new(SampleCatalog::seeded())
            }
        };

        let maps = UnconfiguredMaps::new(Duration::from_millis(settings.map_delay_ms));

        Ok(Self::new(api, Box::new(maps), settings.per_page))
    }
}
