use axum::{
    routing::{get, post},
    Router,
};
use dotenvy::dotenv;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

mod db;
mod engine;
mod error;
mod handlers;
mod middleware;
mod models;
mod services;
mod store;

use engine::ReconciliationEngine;
use services::whitelist_api::WhitelistClient;
use store::MySqlRegistrationStore;

// Application State
pub struct AppState {
    pub engine: ReconciliationEngine<MySqlRegistrationStore, WhitelistClient>,
    pub store: Arc<MySqlRegistrationStore>,
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let pool = db::establish_connection().await;

    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    let api_url = std::env::var("WHITELIST_API_URL").expect("WHITELIST_API_URL must be set");

    let store = Arc::new(MySqlRegistrationStore::new(pool));
    let api = Arc::new(WhitelistClient::new(api_url));
    let engine = ReconciliationEngine::new(store.clone(), api);

    let state = Arc::new(AppState { engine, store });

    let admin_routes = Router::new()
        .route("/api/registrations", get(handlers::registration::list_registrations))
        .route(
            "/api/registrations/:account_id",
            axum::routing::delete(handlers::registration::delete_registration),
        )
        .route_layer(axum::middleware::from_fn(middleware::auth_middleware));

    let app = Router::new()
        .route("/", get(root))
        .route("/api/commands/whitelist", post(handlers::command::whitelist_command))
        .merge(admin_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let host = std::env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("SERVER_PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("{}:{}", host, port)
        .parse::<SocketAddr>()
        .expect("Invalid address");

    tracing::info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

async fn root() -> &'static str {
    "Whitelist Bridge API"
}
