//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! `/api/*` is forwarded to the school backend, `/healthz` answers liveness
//! probes, and everything else is rendered by the Leptos app. The compiled
//! WASM/CSS bundle is served from `/pkg`.

pub mod proxy;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{any, get};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ConfigError;
use crate::state::AppState;


/// Backend-facing routes: health check and the API proxy.
fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/{*path}", any(proxy::forward))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// Full portal router: API routes + Leptos SSR + static bundle.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn app(state: AppState) -> Result<Router, ConfigError> {
    let conf = get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
