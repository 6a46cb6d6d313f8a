//! TransactionType API endpoints

use api_types::transaction_type::{TransactionTypeNew, TransactionTypeUpdate, TransactionTypeView};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use catalog::transaction_types;

use crate::{ServerError, server::ServerState};

pub async fn list(
    State(state): State<ServerState>,
) -> Result<Json<Vec<TransactionTypeView>>, ServerError> {
    let models = state.catalog.list_transaction_types().await?;
    Ok(Json(models.into_iter().map(view).collect()))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<TransactionTypeView>, ServerError> {
    let model = state.catalog.transaction_type(&id).await?;
    Ok(Json(view(model)))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<TransactionTypeNew>,
) -> Result<(StatusCode, Json<TransactionTypeView>), ServerError> {
    let model = state.catalog.create_transaction_type(&payload.name).await?;
    Ok((StatusCode::CREATED, Json(view(model))))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<TransactionTypeUpdate>,
) -> Result<Json<TransactionTypeView>, ServerError> {
    let model = state
        .catalog
        .update_transaction_type(&id, &payload.name)
        .await?;
    Ok(Json(view(model)))
}

pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ServerError> {
    state.catalog.delete_transaction_type(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub(crate) fn view(model: transaction_types::Model) -> TransactionTypeView {
    TransactionTypeView {
        id: model.id,
        name: model.name,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}
