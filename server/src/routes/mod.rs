//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Two routers run side by side. The API router answers the landing page's
//! status probe and is reached cross-origin, so it carries the CORS layer.
//! The site router renders the Leptos app with SSR and serves the hydration
//! bundle under `/pkg`.

pub mod greeting;

use std::net::SocketAddr;
use std::path::PathBuf;

use axum::Router;
use axum::http::HeaderValue;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// API routes probed by the landing page.
///
/// Credentials are allowed, so methods and headers mirror the request
/// instead of answering with a wildcard.
pub fn api_routes(cors_origins: Vec<HeaderValue>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(cors_origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    Router::new()
        .route("/", get(greeting::root))
        .route("/health", get(greeting::health))
        .route("/api/hello", get(greeting::hello))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Leptos SSR frontend plus its static assets, and the address to bind it to.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section or `LEPTOS_*` env).
pub fn site_app() -> Result<(Router, SocketAddr), String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let site_addr = leptos_options.site_addr;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // Hydration bundle (WASM, JS, CSS) lives under the site root's /pkg.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    let router = leptos_router
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(TraceLayer::new_for_http());
    Ok((router, site_addr))
}
