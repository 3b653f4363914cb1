use crate::config::Config;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use palletcalc_core::{CycleInput, CycleResult, Parameter, calculate_cycle_with};
use palletcalc_report::{Advisory, OutputFormat, Report, ReportError, advisories, render};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Overlay a JSON object of parameter values onto the configured parameters.
    fn input_from(&self, body: &Map<String, Value>) -> Result<CycleInput, AppError> {
        let mut input = self.config.parameters;
        for (key, value) in body {
            let parameter: Parameter = key
                .parse()
                .map_err(|err| AppError::BadRequest(format!("{err}")))?;
            let value = value.as_f64().ok_or_else(|| {
                AppError::BadRequest(format!("{parameter} must be a number"))
            })?;
            parameter.set(&mut input, value);
        }
        Ok(input)
    }
}

/// Response of a calculation
#[derive(Serialize)]
pub struct CalculateResponse {
    pub input: CycleInput,
    pub result: CycleResult,
    pub advisories: Vec<Advisory>,
}

#[derive(Deserialize)]
pub struct ReportQuery {
    pub format: Option<String>,
}

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/defaults", get(defaults))
        .route("/api/calculate", post(calculate))
        .route("/api/report", post(report))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Parameters a calculation starts from
async fn defaults(State(state): State<AppState>) -> Json<CycleInput> {
    Json(state.config.parameters)
}

async fn calculate(
    State(state): State<AppState>,
    Json(body): Json<Map<String, Value>>,
) -> Result<Json<CalculateResponse>, AppError> {
    let input = state.input_from(&body)?;
    let result = calculate_cycle_with(&input, &state.config.calculation.options());
    let advisories = advisories(&input, &result);

    Ok(Json(CalculateResponse {
        input,
        result,
        advisories,
    }))
}

async fn report(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
    Json(body): Json<Map<String, Value>>,
) -> Result<impl IntoResponse, AppError> {
    let format = match query.format.as_deref() {
        Some(format) => format.parse::<OutputFormat>()?,
        None => OutputFormat::default(),
    };

    let input = state.input_from(&body)?;
    let result = calculate_cycle_with(&input, &state.config.calculation.options());
    let body = render(&Report::new(&input, &result), format)?;

    Ok(([(header::CONTENT_TYPE, format.content_type())], body))
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Internal(String),
}

impl From<ReportError> for AppError {
    fn from(err: ReportError) -> Self {
        match err {
            ReportError::UnknownFormat(_) => AppError::BadRequest(err.to_string()),
            err => AppError::Internal(err.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            AppError::Internal(msg) => {
                tracing::error!("request failed: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, msg).into_response()
            }
        }
    }
}
