use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::{http::StatusCode, Json};
use validator::Validate;

use crate::dto::charge_dto::CreateChargeRequest;
use crate::dto::common_dto::Pagination;
use crate::handler::parse_object_id;
use crate::service::charge_service::ChargeService;
use crate::util::error::HandlerError;

pub async fn create_charge_handler(
    State(service): State<Arc<ChargeService>>,
    Json(payload): Json<CreateChargeRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    payload
        .validate()
        .map_err(|e| HandlerError::validation(format!("Validation error: {}", e)))?;
    let created = service.create_charge(payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get_charge_handler(
    State(service): State<Arc<ChargeService>>,
    Path((id,)): Path<(String,)>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "charge")?;
    Ok(Json(service.get_charge(id).await?))
}

pub async fn update_charge_handler(
    State(service): State<Arc<ChargeService>>,
    Path((id,)): Path<(String,)>,
    Json(payload): Json<CreateChargeRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "charge")?;
    payload
        .validate()
        .map_err(|e| HandlerError::validation(format!("Validation error: {}", e)))?;
    Ok(Json(service.update_charge(id, payload).await?))
}

pub async fn delete_charge_handler(
    State(service): State<Arc<ChargeService>>,
    Path((id,)): Path<(String,)>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "charge")?;
    service.delete_charge(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_charges_handler(
    State(service): State<Arc<ChargeService>>,
    Query(pagination): Query<Pagination>,
) -> Result<impl IntoResponse, HandlerError> {
    let charges = service
        .list_charges(pagination.page(), pagination.limit())
        .await?;
    Ok(Json(charges))
}
