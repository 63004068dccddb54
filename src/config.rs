use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;

pub const CONFIG_PATH: &str = "config.yaml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// The REST API at `api_base_url`.
    Rest,
    /// Bundled in-memory catalog, no API needed.
    Sample,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_backend")]
    pub backend: Backend,
    #[serde(default = "default_per_page")]
    pub per_page: u32,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_map_delay_ms")]
    pub map_delay_ms: u64,
    #[serde(default = "default_max_workers")]
    pub max_workers: usize,
    #[serde(default = "default_tracing_level")]
    pub tracing_level: String,
}

fn default_bind_address() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_api_base_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_backend() -> Backend {
    Backend::Rest
}

fn default_per_page() -> u32 {
    6
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_map_delay_ms() -> u64 {
    1000
}

fn default_max_workers() -> usize {
    8
}

fn default_tracing_level() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            api_base_url: default_api_base_url(),
            backend: default_backend(),
            per_page: default_per_page(),
            request_timeout_secs: default_request_timeout_secs(),
            map_delay_ms: default_map_delay_ms(),
            max_workers: default_max_workers(),
            tracing_level: default_tracing_level(),
        }
    }
}

impl Settings {
    /// Reads `config.yaml` when present, then applies environment overrides.
    pub fn load() -> Result<Self> {
        let mut settings = match fs::read_to_string(CONFIG_PATH) {
            Ok(raw) => Self::from_yaml(&raw)
                .with_context(|| format!("Failed to parse {CONFIG_PATH}"))?,
            Err(_) => Settings::default(),
        };

        settings.apply_env()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_yaml(raw: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(raw)?)
    }

    fn apply_env(&mut self) -> Result<()> {
        if let Ok(addr) = env::var("BIND_ADDRESS") {
            self.bind_address = addr;
        }

        if let Ok(url) = env::var("API_BASE_URL") {
            self.api_base_url = url;
        }

        if let Ok(backend) = env::var("BACKEND") {
            self.backend = match backend.to_lowercase().as_str() {
                "rest" => Backend::Rest,
                "sample" => Backend::Sample,
                other => anyhow::bail!("Unknown BACKEND '{other}' (expected rest or sample)"),
            };
        }

        if let Ok(per_page) = env::var("PER_PAGE") {
            self.per_page = per_page
                .parse()
                .context("Failed to parse PER_PAGE environment variable")?;
        }

        if let Ok(timeout) = env::var("REQUEST_TIMEOUT_SECS") {
            self.request_timeout_secs = timeout
                .parse()
                .context("Failed to parse REQUEST_TIMEOUT_SECS environment variable")?;
        }

        if let Ok(delay) = env::var("MAP_DELAY_MS") {
            self.map_delay_ms = delay
                .parse()
                .context("Failed to parse MAP_DELAY_MS environment variable")?;
        }

        if let Ok(level) = env::var("TRACING_LEVEL") {
            self.tracing_level = level;
        }

        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.per_page == 0 {
            anyhow::bail!("per_page must be at least 1");
        }

        if self.backend == Backend::Rest && self.api_base_url.trim().is_empty() {
            anyhow::bail!("api_base_url is required when backend is rest");
        }

        self.bind_address
            .parse::<std::net::SocketAddr>()
            .with_context(|| format!("Invalid bind_address '{}'", self.bind_address))?;

        Ok(())
    }
}
