use std::sync::Arc;

use axum::extract::{Multipart, Path, Query, State};
use axum::response::IntoResponse;
use axum::{http::StatusCode, Json};
use validator::Validate;

use crate::dto::common_dto::{DeleteDocumentRequest, Pagination};
use crate::dto::vehicle_dto::CreateVehicleRequest;
use crate::handler::{parse_multipart, parse_object_id};
use crate::service::vehicle_service::VehicleService;
use crate::util::error::HandlerError;

pub async fn create_vehicle_handler(
    State(service): State<Arc<VehicleService>>,
    multipart: Multipart,
) -> Result<impl IntoResponse, HandlerError> {
    let payload = parse_multipart::<CreateVehicleRequest>(multipart).await?;
    payload
        .data
        .validate()
        .map_err(|e| HandlerError::validation(format!("Validation error: {}", e)))?;
    let created = service.create_vehicle(payload.data, payload.files).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get_vehicle_handler(
    State(service): State<Arc<VehicleService>>,
    Path((id,)): Path<(String,)>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "vehicle")?;
    Ok(Json(service.get_vehicle(id).await?))
}

pub async fn update_vehicle_handler(
    State(service): State<Arc<VehicleService>>,
    Path((id,)): Path<(String,)>,
    multipart: Multipart,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "vehicle")?;
    let payload = parse_multipart::<CreateVehicleRequest>(multipart).await?;
    payload
        .data
        .validate()
        .map_err(|e| HandlerError::validation(format!("Validation error: {}", e)))?;
    let keep = match payload.keep_documents {
        Some(urls) => urls,
        None => service
            .get_vehicle(id)
            .await?
            .documents
            .into_iter()
            .map(|d| d.url)
            .collect(),
    };
    let updated = service
        .update_vehicle(id, payload.data, keep, payload.files)
        .await?;
    Ok(Json(updated))
}

pub async fn delete_vehicle_handler(
    State(service): State<Arc<VehicleService>>,
    Path((id,)): Path<(String,)>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "vehicle")?;
    service.delete_vehicle(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_vehicles_handler(
    State(service): State<Arc<VehicleService>>,
    Query(pagination): Query<Pagination>,
) -> Result<impl IntoResponse, HandlerError> {
    let vehicles = service
        .list_vehicles(pagination.page(), pagination.limit())
        .await?;
    Ok(Json(vehicles))
}

pub async fn list_vehicles_by_status_handler(
    State(service): State<Arc<VehicleService>>,
    Path((status,)): Path<(String,)>,
) -> Result<impl IntoResponse, HandlerError> {
    Ok(Json(service.vehicles_with_status(&status).await?))
}

pub async fn detach_vehicle_document_handler(
    State(service): State<Arc<VehicleService>>,
    Path((id,)): Path<(String,)>,
    Json(payload): Json<DeleteDocumentRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "vehicle")?;
    payload
        .validate()
        .map_err(|e| HandlerError::validation(format!("Validation error: {}", e)))?;
    Ok(Json(service.detach_document(id, &payload.document_url).await?))
}
