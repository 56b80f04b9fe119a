mod config;
mod routes;

use tokio::net::TcpListener;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid configuration");

    let api = routes::api_routes(config.cors_origins.clone());
    let api_listener = TcpListener::bind(config.api_addr)
        .await
        .expect("failed to bind API listener");
    tracing::info!(addr = %config.api_addr, origins = config.cors_origins.len(), "magna galactica API listening");
    let api_server = async move { axum::serve(api_listener, api).await };

    // Site rendering is non-fatal: without Leptos configuration only the API runs.
    match routes::site_app() {
        Ok((site, site_addr)) => {
            let site_listener = TcpListener::bind(site_addr)
                .await
                .expect("failed to bind site listener");
            tracing::info!(addr = %site_addr, "magna galactica site listening");
            let site_server = async move { axum::serve(site_listener, site).await };

            let (api_result, site_result) = tokio::join!(api_server, site_server);
            api_result.expect("API server failed");
            site_result.expect("site server failed");
        }
        Err(e) => {
            tracing::warn!(error = %e, "site not configured, serving API only");
            api_server.await.expect("API server failed");
        }
    }
}
