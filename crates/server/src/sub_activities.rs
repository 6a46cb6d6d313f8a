//! SubActivity API endpoints

use api_types::sub_activity::{
    SubActivityDetail, SubActivityNew, SubActivitySummary, SubActivityUpdate, SubActivityView,
};
use api_types::transaction_type::TransactionTypeRef;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use catalog::{SubActivityDraft, SubActivityPatch, sub_activities, transaction_types};

use crate::{ServerError, activities, server::ServerState};

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<SubActivityDetail>, ServerError> {
    let (model, transaction_type, activity) = state.catalog.sub_activity(&id).await?;
    Ok(Json(SubActivityDetail {
        id: model.id,
        transaction_type: transaction_type.map(crate::transaction_types::view),
        activity: activity.map(activities::view),
        pricing_method: model.pricing_method,
        portal_item_name_en: model.portal_item_name_en,
        portal_item_name_ar: model.portal_item_name_ar,
        is_active: model.is_active,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<SubActivityNew>,
) -> Result<(StatusCode, Json<SubActivityView>), ServerError> {
    let model = state
        .catalog
        .create_sub_activity(SubActivityDraft {
            transaction_type_id: payload.transaction_type,
            activity_id: payload.activity,
            pricing_method: payload.pricing_method,
            portal_item_name_en: payload.portal_item_name_en,
            portal_item_name_ar: payload.portal_item_name_ar,
            is_active: payload.is_active,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(view(model))))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<SubActivityUpdate>,
) -> Result<Json<SubActivityView>, ServerError> {
    let model = state
        .catalog
        .update_sub_activity(
            &id,
            SubActivityPatch {
                transaction_type_id: payload.transaction_type,
                activity_id: payload.activity,
                pricing_method: payload.pricing_method,
                portal_item_name_en: payload.portal_item_name_en,
                portal_item_name_ar: payload.portal_item_name_ar,
                is_active: payload.is_active,
            },
        )
        .await?;
    Ok(Json(view(model)))
}

pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ServerError> {
    state.catalog.delete_sub_activity(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_by_activity(
    State(state): State<ServerState>,
    Path(activity_id): Path<String>,
) -> Result<Json<Vec<SubActivitySummary>>, ServerError> {
    let rows = state
        .catalog
        .sub_activities_by_activity(&activity_id)
        .await?;
    Ok(Json(rows.into_iter().map(summary).collect()))
}

pub(crate) fn view(model: sub_activities::Model) -> SubActivityView {
    SubActivityView {
        id: model.id,
        transaction_type: model.transaction_type_id,
        activity: model.activity_id,
        pricing_method: model.pricing_method,
        portal_item_name_en: model.portal_item_name_en,
        portal_item_name_ar: model.portal_item_name_ar,
        is_active: model.is_active,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

fn summary(
    (model, transaction_type): (sub_activities::Model, Option<transaction_types::Model>),
) -> SubActivitySummary {
    SubActivitySummary {
        id: model.id,
        portal_item_name_en: model.portal_item_name_en,
        portal_item_name_ar: model.portal_item_name_ar,
        pricing_method: model.pricing_method,
        is_active: model.is_active,
        transaction_type: transaction_type.map(|model| TransactionTypeRef {
            id: model.id,
            name: model.name,
        }),
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}
