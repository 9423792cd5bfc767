use axum::http::Method;
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use addrbook_addresses::DbState;

pub mod config;

use config::Config;

pub async fn run_server() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    // Open the configured database and run migrations
    let db_state = DbState::init(&config.storage_config()).await?;

    // Create CORS layer
    let cors = CorsLayer::new()
        .allow_origin(config.cors_origin.parse::<axum::http::HeaderValue>()?)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    // Create the router with CORS and request tracing
    let app = addrbook_api::create_addresses_router()
        .with_state(db_state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Create socket address
    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));

    info!("Server listening on {}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
