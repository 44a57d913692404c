//! HTTP management API over the registry store.
//!
//! CRUD on individual records plus the maintenance operations
//! `_truncate`, `_rebuild`, and `_cron`. All responses are JSON; error
//! bodies are `{"error": string}` or `{"errors": [string]}` for
//! multi-field validation failures.

use crate::ingest::{IngestionReport, Ingestor};
use crate::parse::AddressRecord;
use crate::store::{RegistryStore, StoreError};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::error;

/// Shared handler state, constructed once at process start.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RegistryStore>,
    pub ingestor: Arc<Ingestor>,
}

/// API-level failures, each with a fixed status and body shape.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed client input; one message per failed field.
    #[error("validation failed")]
    Validation(Vec<String>),

    /// The request body was not parsable JSON.
    #[error("invalid request body format : \"{0}\"")]
    MalformedBody(String),

    /// No record under the requested address.
    #[error("not found")]
    NotFound,

    /// Backing store failure.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "errors": errors }))).into_response()
            }
            ApiError::MalformedBody(_) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": self.to_string() })),
            )
                .into_response(),
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": "not found" })),
            )
                .into_response(),
            ApiError::Store(err) => {
                error!(error = %err, "Store operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": err.to_string() })),
                )
                    .into_response()
            }
        }
    }
}

/// Client payload for create and update. Both fields are checked
/// explicitly so a single request can report every missing field at once.
#[derive(Debug, Deserialize)]
struct IpPayload {
    #[serde(default)]
    address: Option<String>,
    #[serde(default)]
    name: Option<String>,
}

fn parse_payload(body: &str) -> Result<IpPayload, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::MalformedBody(e.to_string()))
}

fn validate(payload: IpPayload) -> Result<AddressRecord, ApiError> {
    let mut errors = Vec::new();
    if payload.address.as_deref().map_or(true, str::is_empty) {
        errors.push("address is a required field".to_string());
    }
    if payload.name.as_deref().map_or(true, str::is_empty) {
        errors.push("name is a required field".to_string());
    }

    match (payload.address, payload.name) {
        (Some(address), Some(name)) if errors.is_empty() => {
            Ok(AddressRecord { address, name })
        }
        _ => Err(ApiError::Validation(errors)),
    }
}

/// Build the management router over `state`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ips", post(create_ip).get(list_ips))
        .route("/ips/_truncate", post(truncate))
        .route("/ips/_rebuild", post(rebuild))
        .route("/ips/_cron", post(cron))
        .route(
            "/ips/:address",
            get(get_ip).put(update_ip).delete(delete_ip),
        )
        .with_state(state)
}

async fn create_ip(
    State(state): State<AppState>,
    body: String,
) -> Result<impl IntoResponse, ApiError> {
    let record = validate(parse_payload(&body)?)?;
    state.store.put(record.clone()).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

async fn get_ip(
    State(state): State<AppState>,
    Path(address): Path<String>,
) -> Result<Json<AddressRecord>, ApiError> {
    let record = state.store.get(&address).await?.ok_or(ApiError::NotFound)?;
    Ok(Json(record))
}

async fn update_ip(
    State(state): State<AppState>,
    Path(address): Path<String>,
    body: String,
) -> Result<Json<AddressRecord>, ApiError> {
    // Update requires the record to pre-exist.
    state.store.get(&address).await?.ok_or(ApiError::NotFound)?;

    let validated = validate(parse_payload(&body)?)?;
    // The address is pinned to the path parameter, not the body.
    let record = AddressRecord {
        address,
        name: validated.name,
    };
    state.store.put(record.clone()).await?;
    Ok(Json(record))
}

async fn delete_ip(
    State(state): State<AppState>,
    Path(address): Path<String>,
) -> Result<StatusCode, ApiError> {
    if state.store.delete(&address).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound)
    }
}

async fn list_ips(
    State(state): State<AppState>,
) -> Result<Json<Vec<AddressRecord>>, ApiError> {
    Ok(Json(state.store.scan().await?))
}

async fn truncate(State(state): State<AppState>) -> Result<Json<serde_json::Value>, ApiError> {
    // The store has a real bulk primitive, so truncate is one atomic
    // replace with the empty set rather than scan-then-per-key-delete.
    state.store.bulk_replace(Vec::new()).await?;
    Ok(Json(json!({ "message": "registry truncated" })))
}

async fn rebuild(State(state): State<AppState>) -> Result<Json<IngestionReport>, ApiError> {
    let report = state.ingestor.run().await?;
    Ok(Json(report))
}

async fn cron(State(state): State<AppState>) -> Result<Json<IngestionReport>, ApiError> {
    state.store.bulk_replace(Vec::new()).await?;
    let report = state.ingestor.run().await?;
    Ok(Json(report))
}
