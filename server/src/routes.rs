//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the `/api` forwarder and health check next to the Leptos SSR routes
//! under a single Axum router. Compiled WASM, JS and CSS are served from the
//! site root's `/pkg` directory.

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::routing::{any, get};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::proxy::{self, ProxyState};

/// API forwarder plus health check.
pub fn api_routes(proxy: ProxyState) -> Router {
    Router::new()
        .route("/api/{*rest}", any(proxy::forward))
        .route("/healthz", get(healthz))
        .with_state(proxy)
}

/// Full application: API routes, Leptos SSR pages and static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[workspace.metadata.leptos]` section) or the upstream HTTP
/// client cannot be built.
pub fn app(config: &ServerConfig) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(storefront::app::App);
    let proxy = ProxyState::new(config).map_err(|e| e.to_string())?;

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || storefront::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(proxy)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .fallback(redirect_home)
        .layer(TraceLayer::new_for_http()))
}

async fn redirect_home() -> Redirect {
    Redirect::temporary("/")
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
