// Axum Server Module
//
// Purpose: HTML search page (Askama + htmx) plus a small JSON API over the
// same search gateway.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};

use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    trace::TraceLayer,
};

use std::sync::Arc;

use crate::config::GatewayConfig;
use crate::controller::SearchQuery;
use crate::search_gateway::PlantSearchGateway;
use crate::web::handlers::pages::{self, SearchParams};

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<PlantSearchGateway>,
}

impl AppState {
    pub fn new(config: GatewayConfig) -> anyhow::Result<Self> {
        tracing::info!("Initializing plant search gateway ({})", config.base_url);
        let gateway = Arc::new(PlantSearchGateway::new(config)?);

        Ok(Self { gateway })
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // HTML pages
        .route("/", get(pages::home_page))
        .route("/search", get(pages::search_page))

        // Health check
        .route("/health", get(health_check))

        // JSON API
        .route("/api/plants/search", get(search_plants))

        .fallback(not_found)

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new()) // gzip + brotli compression
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http()) // Request logging
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Same lookup as the HTML page, without the top-3 cap.
/// Reports whether the records came from the API or the fallback set.
async fn search_plants(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<serde_json::Value>, AppError> {
    let query = SearchQuery::parse(&params.q)
        .ok_or_else(|| AppError::BadRequest("query must not be empty".to_string()))?;

    let outcome = state.gateway.search_detailed(query.as_str()).await;

    Ok(Json(serde_json::json!({
        "rows": outcome.records.len(),
        "source": outcome.source,
        "data": outcome.records,
    })))
}

async fn not_found() -> AppError {
    AppError::NotFound("no such route".to_string())
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
enum AppError {
    BadRequest(String),
    NotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
