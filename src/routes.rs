//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host only renders the page and serves its assets: Leptos SSR at `/`,
//! compiled WASM/JS/CSS under `/pkg`, and a health probe. There is no API.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::config::LeptosOptions;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Full application router.
pub fn app(options: LeptosOptions) -> Router {
    let routes = generate_route_list(site::app::App);
    let site_root = PathBuf::from(options.site_root.as_ref());

    let leptos_router = Router::new()
        .leptos_routes(&options, routes, {
            let opts = options.clone();
            move || site::app::shell(opts.clone())
        })
        .with_state(options);

    Router::new()
        .route("/healthz", get(healthz))
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .fallback_service(ServeDir::new(site_root))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
