// Employee intake server
// One form page, one record endpoint, one validation contract shared with the browser

pub mod config;
pub mod database;
pub mod error;
pub mod form_page;
pub mod handlers;

use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::warn;

pub use config::Config;
pub use database::{Database, Employee};
pub use error::ApiError;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub wasm_module: Arc<str>,
}

impl AppState {
    pub fn new(db: Database, config: &Config) -> Self {
        Self {
            db,
            wasm_module: Arc::from(config.client.wasm_module.as_str()),
        }
    }
}

/// CORS for a separately hosted UI
fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    if origins.is_empty() || origins.iter().any(|o| o == "*") {
        return layer.allow_origin(AllowOrigin::any());
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(allowed))
}

/// Build the application router
pub fn router(state: AppState, config: &Config) -> Router {
    Router::new()
        .route("/", get(form_page::form_page))
        .route("/api/employeeadd", post(handlers::add_employee))
        .route("/api/contract", get(handlers::contract_rules))
        .route("/health", get(handlers::health))
        .nest_service("/static", ServeDir::new(&config.client.static_dir))
        .layer(cors_layer(&config.cors.allowed_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
