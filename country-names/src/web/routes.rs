//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tracing::warn;

use crate::names::NameError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/countries", get(list_countries))
        .route("/countries/:code", get(get_country))
        .route("/lookup", get(lookup))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List all supported countries.
async fn list_countries(State(state): State<AppState>) -> Json<CountryListResponse> {
    let countries = state
        .names
        .countries()
        .into_iter()
        .map(CountryResult::from)
        .collect();

    Json(CountryListResponse {
        locale: state.names.locale().to_string(),
        countries,
    })
}

/// Resolve a code given in the path.
async fn get_country(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<CountryResult>, AppError> {
    let resolved = state.names.resolve_with_code(&code)?;
    Ok(Json(CountryResult::from(resolved)))
}

/// Resolve a code given as `?code=`.
async fn lookup(
    State(state): State<AppState>,
    Query(req): Query<LookupRequest>,
) -> Result<Json<CountryResult>, AppError> {
    let code = req.code.ok_or(NameError::InvalidArgument)?;
    let resolved = state.names.resolve_with_code(&code)?;
    Ok(Json(CountryResult::from(resolved)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
}

impl From<NameError> for AppError {
    fn from(e: NameError) -> Self {
        match e {
            NameError::InvalidArgument => AppError::BadRequest {
                message: e.to_string(),
            },
            NameError::NotFound { .. } => AppError::NotFound {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
        };

        warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
