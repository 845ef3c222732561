use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;
use serde::Serialize;

use crate::auth::{authorize, AppState};
use crate::errors::ApiError;
use models::{Client, Role};
use service::AdminAction;

#[derive(Serialize)]
pub struct StatusOutput {
    pub message: String,
    pub client: Client,
}

/// Pause or resume a client. Unknown id wins over an invalid action, as the
/// original demo replied.
pub async fn set_client_status(
    State(state): State<AppState>,
    Path((id, action)): Path<(u64, String)>,
    headers: HeaderMap,
) -> Result<Json<StatusOutput>, ApiError> {
    authorize(&state, &headers, Some(Role::Admin)).await?;
    if state.clients.get(id).await.is_none() {
        return Err(ApiError::NotFound("Client not found".into()));
    }
    let action: AdminAction = action.parse()?;
    let client = state.clients.set_status(id, action).await?;
    Ok(Json(StatusOutput {
        message: format!("Client {}", action.past_tense()),
        client,
    }))
}

#[derive(Serialize)]
pub struct ClientsOutput {
    pub clients: Vec<Client>,
}

pub async fn list_clients(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<ClientsOutput>, ApiError> {
    authorize(&state, &headers, Some(Role::Admin)).await?;
    let clients = state.clients.list().await;
    Ok(Json(ClientsOutput { clients }))
}
