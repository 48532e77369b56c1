use std::sync::Arc;

use anyhow::Result;
use axum::{
    http::{header, HeaderValue},
    response::Redirect,
    routing::get,
    Router,
};
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use enrol_common::Config;
use supabase_client::SupabaseClient;

mod components;
mod pages;
mod phase;

pub struct AppState {
    pub store: SupabaseClient,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("enrol_web=info".parse()?))
        .init();

    let config = Config::from_env();

    let state = Arc::new(AppState {
        store: SupabaseClient::new(config.supabase_url, config.supabase_anon_key),
    });

    let app = Router::new()
        // Each center's form lives at its own path; the bare domain lands
        // on Cabramatta.
        .route("/", get(|| async { Redirect::to("/cabra") }))
        .route("/health", get(|| async { "ok" }))
        .route("/cabra", get(pages::cabra_page).post(pages::cabra_submit))
        .route(
            "/liverpool",
            get(pages::liverpool_page).post(pages::liverpool_submit),
        )
        .with_state(state)
        // Privacy headers: submissions carry PII, nothing may cache
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::PRAGMA,
            HeaderValue::from_static("no-cache"),
        ))
        // Logging layer: method + path + status + latency only (no form
        // bodies, no query params, no IP)
        .layer(
            tower_http::trace::TraceLayer::new_for_http().make_span_with(
                |request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                },
            ),
        );

    let addr = format!("{}:{}", config.web_host, config.web_port);
    info!("Enrolment form starting on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
