mod config;
mod routes;
mod state;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::PortalConfig::from_env().expect("invalid configuration");
    let port = config.port;
    let backend_url = config.backend_url.clone();

    let state = state::AppState::new(config).expect("http client init failed");
    let app = routes::app(state).expect("router init failed");

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, %backend_url, "portal listening");
    axum::serve(listener, app).await.expect("server failed");
}
