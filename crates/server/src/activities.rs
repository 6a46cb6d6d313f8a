//! Activity API endpoints

use api_types::activity::{ActivityDetail, ActivityNew, ActivityUpdate, ActivityView};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use catalog::{ActivityDraft, ActivityPatch, activities, sub_activities};

use crate::{ServerError, server::ServerState};

pub async fn list(
    State(state): State<ServerState>,
) -> Result<Json<Vec<ActivityView>>, ServerError> {
    let models = state.catalog.list_activities().await?;
    Ok(Json(models.into_iter().map(view).collect()))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<ActivityDetail>, ServerError> {
    let (model, subs) = state.catalog.activity(&id).await?;
    Ok(Json(detail(model, subs)))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ActivityNew>,
) -> Result<(StatusCode, Json<ActivityView>), ServerError> {
    let model = state.catalog.create_activity(draft(payload)).await?;
    Ok((StatusCode::CREATED, Json(view(model))))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<ActivityUpdate>,
) -> Result<Json<ActivityDetail>, ServerError> {
    let (model, subs) = state.catalog.update_activity(&id, patch(payload)).await?;
    Ok(Json(detail(model, subs)))
}

pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ServerError> {
    state.catalog.delete_activity(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

fn draft(payload: ActivityNew) -> ActivityDraft {
    ActivityDraft {
        act_srl: payload.act_srl,
        transaction_type_id: payload.activity_transaction_type,
        activity_name_en: payload.activity_name_en,
        activity_name_ar: payload.activity_name_ar,
        activity_code: payload.activity_code,
        portal_activity_name_en: payload.portal_activity_name_en,
        portal_activity_name_ar: payload.portal_activity_name_ar,
        is_with_items: payload.is_with_items,
        finance_effect: payload.finance_effect,
        sign: payload.sign,
        is_ops_active: payload.is_ops_active,
        is_portal_active: payload.is_portal_active,
        is_in_order_screen: payload.is_in_order_screen,
        is_active: payload.is_active,
    }
}

fn patch(payload: ActivityUpdate) -> ActivityPatch {
    ActivityPatch {
        act_srl: payload.act_srl,
        transaction_type_id: payload.activity_transaction_type,
        activity_name_en: payload.activity_name_en,
        activity_name_ar: payload.activity_name_ar,
        activity_code: payload.activity_code,
        portal_activity_name_en: payload.portal_activity_name_en,
        portal_activity_name_ar: payload.portal_activity_name_ar,
        is_with_items: payload.is_with_items,
        finance_effect: payload.finance_effect,
        sign: payload.sign,
        is_ops_active: payload.is_ops_active,
        is_portal_active: payload.is_portal_active,
        is_in_order_screen: payload.is_in_order_screen,
        is_active: payload.is_active,
    }
}

pub(crate) fn view(model: activities::Model) -> ActivityView {
    ActivityView {
        id: model.id,
        act_srl: model.act_srl,
        activity_transaction_type: model.transaction_type_id,
        activity_name_en: model.activity_name_en,
        activity_name_ar: model.activity_name_ar,
        activity_code: model.activity_code,
        portal_activity_name_en: model.portal_activity_name_en,
        portal_activity_name_ar: model.portal_activity_name_ar,
        is_with_items: model.is_with_items,
        finance_effect: model.finance_effect,
        sign: model.sign,
        is_ops_active: model.is_ops_active,
        is_portal_active: model.is_portal_active,
        is_in_order_screen: model.is_in_order_screen,
        is_active: model.is_active,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

fn detail(model: activities::Model, subs: Vec<sub_activities::Model>) -> ActivityDetail {
    ActivityDetail {
        activity: view(model),
        sub_activities: subs
            .into_iter()
            .map(crate::sub_activities::view)
            .collect(),
    }
}
