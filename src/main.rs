use crate::app::App;
use crate::config::Settings;
use crate::responses::html_error_response;
use crate::router::handle;
use anyhow::{Context, Result};
use astra::{Request, Response, Server};
use std::net::SocketAddr;
use std::time::Instant;

mod api;
mod app;
mod config;
mod domain;
mod errors;
mod forms;
mod handlers;
mod maps;
mod responses;
mod router;
mod templates;
mod urls;

#[cfg(test)]
mod tests;

fn main() -> Result<()> {
    let settings = Settings::load().context("Failed to load configuration")?;

    init_tracing(&settings.tracing_level);

    let app = App::from_settings(&settings)?;

    let addr: SocketAddr = settings
        .bind_address
        .parse()
        .with_context(|| format!("Invalid bind address '{}'", settings.bind_address))?;
    tracing::info!("Starting UrbanNest at http://{addr}");

    let server = Server::bind(&addr).max_workers(settings.max_workers);

    let result = server.serve(move |req: Request, _info| respond(req, &app));

    result.context("Server ended with error")?;

    tracing::info!("Server shut down cleanly.");
    Ok(())
}

/// Routes one request and turns handler errors into error pages.
fn respond(req: Request, app: &App) -> Response {
    let started = Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let resp = match handle(req, app) {
        Ok(resp) => resp,
        Err(err) => {
            tracing::warn!(%method, %uri, error = %err, "request failed");
            html_error_response(err)
        }
    };

    tracing::info!(
        %method,
        %uri,
        status = resp.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "request"
    );
    resp
}

/// `RUST_LOG` wins; otherwise the configured level.
fn init_tracing(configured: &str) {
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .init();
        tracing::info!("Logging level set from RUST_LOG environment variable");
        return;
    }

    let level = match configured.to_lowercase().as_str() {
        "trace" => tracing::Level::TRACE,
        "debug" => tracing::Level::DEBUG,
        "info" => tracing::Level::INFO,
        "warn" => tracing::Level::WARN,
        "error" => tracing::Level::ERROR,
        other => {
            eprintln!("Invalid tracing level '{other}', using 'info'");
            tracing::Level::INFO
        }
    };

    tracing_subscriber::fmt().with_max_level(level).init();
    tracing::info!("Logging level set to: {level}");
}
