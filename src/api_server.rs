// Axum API Server Module
//
// Purpose: REST API wrapping the predictor process, the footprint scorer and
// the prediction history store.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use chrono::Utc;
use moka::future::Cache;
use serde::Serialize;
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::config::ServerConfig;
use crate::history::HistorySummary;
use crate::input::PredictionRequest;
use crate::predictor::{FeatureVector, PredictorError, PredictorRunner, RawEstimate};
use crate::report::AnalyticsReport;
use crate::scorer::FootprintScorer;
use crate::store::{JsonlStore, MemoryStore, PredictionRecord, PredictionStore};

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub predictor: Arc<PredictorRunner>,
    pub scorer: FootprintScorer,
    pub store: Arc<dyn PredictionStore>,
    /// Raw estimates keyed by predictor argument vector
    pub estimate_cache: Cache<String, RawEstimate>,
}

impl AppState {
    /// Build state from configuration, opening the configured store
    pub fn new(config: &ServerConfig) -> anyhow::Result<Self> {
        let store: Arc<dyn PredictionStore> = match &config.store_path {
            Some(path) => {
                tracing::info!("Opening JSON lines history store at {}", path);
                Arc::new(JsonlStore::open(path)?)
            }
            None => {
                tracing::info!("Using in-memory history store");
                Arc::new(MemoryStore::new())
            }
        };
        Ok(Self::with_store(config, store))
    }

    /// Build state around an existing store
    pub fn with_store(config: &ServerConfig, store: Arc<dyn PredictionStore>) -> Self {
        tracing::info!("Initializing Moka estimate cache...");
        let estimate_cache = Cache::builder()
            .max_capacity(config.estimate_cache_capacity)
            .time_to_live(config.estimate_cache_ttl)
            .build();

        Self {
            predictor: Arc::new(PredictorRunner::new(config.predictor.clone())),
            scorer: FootprintScorer::new(config.trajectory_base_year),
            store,
            estimate_cache,
        }
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))

        // Prediction + analytics report
        .route("/predict", post(predict))

        // History endpoints
        .route("/history/:user_id", get(get_history))
        .route("/history/:user_id/summary", get(get_history_summary))

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339()
    }))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PredictResponse<'a> {
    success: bool,
    prediction: f64,
    persisted: bool,
    #[serde(flatten)]
    report: &'a AnalyticsReport,
}

async fn predict(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<serde_json::Value>, AppError> {
    // Content type is not enforced; bodies without attributes get all defaults
    let request = PredictionRequest::from_body(&body)
        .map_err(|e| AppError::BadRequest(format!("Invalid JSON body: {}", e)))?;
    let input = request.resolve();
    let features = FeatureVector::from_input(&input);
    let cache_key = features.cache_key();

    let estimate = match state.estimate_cache.get(&cache_key).await {
        Some(cached) => {
            tracing::debug!("Cache hit for predictor estimate");
            cached
        }
        None => {
            let estimate = state.predictor.estimate(&features).await?;
            state.estimate_cache.insert(cache_key, estimate).await;
            estimate
        }
    };

    let report = state.scorer.score(estimate, &input);
    tracing::info!(
        "Prediction {:.2} kg -> score {} ({})",
        estimate.kg(), report.score, report.badge
    );

    // A failed write never discards the computed report
    let persisted = match request.user_id.as_deref() {
        Some(user_id) => {
            let record = PredictionRecord::new(user_id, &input, estimate, &report, Utc::now());
            let store = state.store.clone();
            match tokio::task::spawn_blocking(move || store.insert(record)).await {
                Ok(Ok(())) => true,
                Ok(Err(e)) => {
                    tracing::warn!("Failed to persist prediction for {}: {:#}", user_id, e);
                    false
                }
                Err(e) => {
                    tracing::warn!("Persistence task failed for {}: {}", user_id, e);
                    false
                }
            }
        }
        None => {
            tracing::warn!("Prediction request without userId; not persisted");
            false
        }
    };

    let response = PredictResponse {
        success: true,
        prediction: estimate.kg(),
        persisted,
        report: &report,
    };
    let body = serde_json::to_value(&response)
        .map_err(|e| AppError::Internal(format!("JSON encode error: {}", e)))?;

    Ok(Json(body))
}

async fn get_history(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let predictions = load_history(&state, user_id).await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "predictions": predictions,
    })))
}

async fn get_history_summary(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let predictions = load_history(&state, user_id).await?;
    let summary = HistorySummary::from_history(&predictions);

    Ok(Json(serde_json::json!({
        "success": true,
        "summary": summary,
    })))
}

async fn load_history(state: &AppState, user_id: String) -> Result<Vec<PredictionRecord>, AppError> {
    let store = state.store.clone();
    tokio::task::spawn_blocking(move || store.history(&user_id))
        .await
        .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))?
        .map_err(|e| AppError::Store(format!("{:#}", e)))
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Engine(PredictorError),
    Store(String),
    Internal(String),
}

impl From<PredictorError> for AppError {
    fn from(e: PredictorError) -> Self {
        AppError::Engine(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => {
                tracing::warn!("Rejected request: {}", msg);
                (StatusCode::BAD_REQUEST, "Invalid JSON body".to_string())
            }
            AppError::Engine(PredictorError::Timeout(limit)) => {
                tracing::error!("ML engine timed out after {:?}", limit);
                (StatusCode::GATEWAY_TIMEOUT, "ML Engine Timeout".to_string())
            }
            AppError::Engine(e) => {
                tracing::error!("ML engine error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "ML Engine Error".to_string())
            }
            AppError::Store(msg) => {
                tracing::error!("History store error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "History Store Error".to_string())
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        let body = Json(serde_json::json!({
            "success": false,
            "message": message
        }));

        (status, body).into_response()
    }
}
