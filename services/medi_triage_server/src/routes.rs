use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::Json;
use axum::routing::{get, post};
use axum::Router;
use medi_triage::{assess, find_guide, HealthInput, MeasurementGuide, RiskAssessment};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};
use tower_http::catch_panic::CatchPanicLayer;

use crate::config::{ConfigError, ServerConfig};
use crate::cors::cors_layer;
use crate::error::{panic_response, ApiError};
use crate::state::AppState;

pub const SERVICE_NAME: &str = "health-risk-analyzer-api";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConsentRequest {
    pub consent: bool,
    #[serde(default = "default_locale")]
    pub locale: String,
}

fn default_locale() -> String {
    "EN".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ConsentResponse {
    pub status: String,
    pub message: String,
}

/// Routes without CORS, for embedding or tests.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/api/v1/analyze", post(analyze))
        .route("/api/v1/consent", post(consent))
        .route("/api/v1/info/:info_type", get(info))
        .layer(CatchPanicLayer::custom(panic_response))
        .with_state(state)
}

/// The full application as served by the binary.
pub fn app(config: &ServerConfig) -> Result<Router, ConfigError> {
    let cors = cors_layer(&config.cors)?;
    Ok(router(AppState::from_config(config)).layer(cors))
}

async fn root() -> Json<JsonValue> {
    Json(json!({
        "status": "ok",
        "message": "Health Risk Analyzer API is running",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn health() -> Json<JsonValue> {
    Json(json!({
        "status": "healthy",
        "service": SERVICE_NAME,
    }))
}

async fn analyze(
    State(state): State<AppState>,
    payload: Result<Json<HealthInput>, JsonRejection>,
) -> Result<Json<RiskAssessment>, ApiError> {
    let Json(input) = payload?;
    log::info!(
        "Received health data: {}, HR: {:?}, Temp: {:?}, SpO2: {:?}",
        input.symptom_preview(50),
        input.heart_rate,
        input.temperature,
        input.spo2
    );

    input.validate()?;

    let mut noise = state.noise();
    let assessment = assess(&input, &mut noise);
    log::info!(
        "Analysis result: {} - {}",
        assessment.level,
        assessment.message
    );
    Ok(Json(assessment))
}

async fn consent(
    payload: Result<Json<ConsentRequest>, JsonRejection>,
) -> Result<Json<ConsentResponse>, ApiError> {
    let Json(req) = payload?;
    if !req.consent {
        return Err(ApiError::ConsentRequired);
    }
    log::info!("Consent recorded: {}, Locale: {}", req.consent, req.locale);
    Ok(Json(ConsentResponse {
        status: "accepted".to_string(),
        message: format!("Consent recorded successfully. Locale: {}", req.locale),
    }))
}

async fn info(Path(info_type): Path<String>) -> Result<Json<&'static MeasurementGuide>, ApiError> {
    find_guide(&info_type)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Info type '{info_type}' not found")))
}
