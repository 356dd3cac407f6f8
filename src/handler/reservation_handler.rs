use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::{http::StatusCode, Json};
use validator::Validate;

use crate::dto::common_dto::Pagination;
use crate::dto::reservation_dto::CreateReservationRequest;
use crate::handler::parse_object_id;
use crate::service::reservation_service::ReservationService;
use crate::util::error::HandlerError;

pub async fn create_reservation_handler(
    State(service): State<Arc<ReservationService>>,
    Json(payload): Json<CreateReservationRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    payload
        .validate()
        .map_err(|e| HandlerError::validation(format!("Validation error: {}", e)))?;
    let created = service.create_reservation(payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get_reservation_handler(
    State(service): State<Arc<ReservationService>>,
    Path((id,)): Path<(String,)>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "reservation")?;
    Ok(Json(service.get_reservation(id).await?))
}

pub async fn update_reservation_handler(
    State(service): State<Arc<ReservationService>>,
    Path((id,)): Path<(String,)>,
    Json(payload): Json<CreateReservationRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "reservation")?;
    payload
        .validate()
        .map_err(|e| HandlerError::validation(format!("Validation error: {}", e)))?;
    Ok(Json(service.update_reservation(id, payload).await?))
}

pub async fn delete_reservation_handler(
    State(service): State<Arc<ReservationService>>,
    Path((id,)): Path<(String,)>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "reservation")?;
    service.delete_reservation(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_reservations_handler(
    State(service): State<Arc<ReservationService>>,
    Query(pagination): Query<Pagination>,
) -> Result<impl IntoResponse, HandlerError> {
    let reservations = service
        .list_reservations(pagination.page(), pagination.limit())
        .await?;
    Ok(Json(reservations))
}
