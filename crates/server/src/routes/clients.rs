use std::collections::BTreeMap;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::auth::{authorize, AppState};
use crate::errors::ApiError;
use models::{Client, Metrics, Plan, Role, ServiceName};

#[derive(Debug, Deserialize)]
pub struct SubscribeInput {
    #[serde(default)]
    pub name: String,
    pub plan: Plan,
}

#[derive(Serialize)]
pub struct SubscribeOutput {
    pub message: &'static str,
    #[serde(rename = "clientId")]
    pub client_id: u64,
}

/// Create a subscription. Public, no payment: the demo just allocates the
/// next client id.
pub async fn subscribe(
    State(state): State<AppState>,
    body: Result<Json<SubscribeInput>, JsonRejection>,
) -> Result<Json<SubscribeOutput>, ApiError> {
    let Json(input) = body?;
    if input.name.trim().is_empty() {
        return Err(ApiError::Validation("name and plan are required".into()));
    }
    let client = state.clients.create(input.name, input.plan).await;
    Ok(Json(SubscribeOutput {
        message: "Subscription created",
        client_id: client.id,
    }))
}

#[derive(Serialize)]
pub struct DashboardOutput {
    pub client: Client,
    pub metrics: Metrics,
}

/// Dashboard read for the owning client. The ownership check runs before
/// the existence lookup, so a foreign id is Forbidden even when it does not
/// exist. A paused client can still see its own dashboard.
pub async fn dashboard(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    headers: HeaderMap,
) -> Result<Json<DashboardOutput>, ApiError> {
    let session = authorize(&state, &headers, Some(Role::Client)).await?;
    if session.client_id != Some(id) {
        return Err(ApiError::Forbidden);
    }
    let client = state
        .clients
        .get(id)
        .await
        .ok_or_else(|| ApiError::NotFound("Client not found".into()))?;
    Ok(Json(DashboardOutput {
        client,
        metrics: Metrics::sample(),
    }))
}

#[derive(Debug, Deserialize)]
pub struct ToggleInput {
    pub service: ServiceName,
    pub enabled: bool,
}

#[derive(Serialize)]
pub struct ToggleOutput {
    pub message: &'static str,
    pub services: BTreeMap<ServiceName, bool>,
}

/// Flip one service flag on the owning client.
pub async fn toggle_service(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    headers: HeaderMap,
    body: Result<Json<ToggleInput>, JsonRejection>,
) -> Result<Json<ToggleOutput>, ApiError> {
    let session = authorize(&state, &headers, Some(Role::Client)).await?;
    if session.client_id != Some(id) {
        return Err(ApiError::Forbidden);
    }
    let Json(input) = body?;
    let services = state
        .clients
        .toggle_service(id, input.service, input.enabled)
        .await?;
    Ok(Json(ToggleOutput {
        message: "Service updated",
        services,
    }))
}
