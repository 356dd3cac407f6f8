use std::sync::Arc;

use axum::extract::{Multipart, Path, Query, State};
use axum::response::IntoResponse;
use axum::{http::StatusCode, Json};
use validator::Validate;

use crate::dto::common_dto::{DeleteDocumentRequest, Pagination};
use crate::dto::incident_dto::{CreateAccidentRequest, CreateInfractionRequest};
use crate::handler::{parse_multipart, parse_object_id};
use crate::service::incident_service::IncidentService;
use crate::util::error::HandlerError;

// --- Accidents ---

pub async fn create_accident_handler(
    State(service): State<Arc<IncidentService>>,
    multipart: Multipart,
) -> Result<impl IntoResponse, HandlerError> {
    let payload = parse_multipart::<CreateAccidentRequest>(multipart).await?;
    payload
        .data
        .validate()
        .map_err(|e| HandlerError::validation(format!("Validation error: {}", e)))?;
    let created = service.create_accident(payload.data, payload.files).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get_accident_handler(
    State(service): State<Arc<IncidentService>>,
    Path((id,)): Path<(String,)>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "accident")?;
    Ok(Json(service.get_accident(id).await?))
}

pub async fn update_accident_handler(
    State(service): State<Arc<IncidentService>>,
    Path((id,)): Path<(String,)>,
    multipart: Multipart,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "accident")?;
    let payload = parse_multipart::<CreateAccidentRequest>(multipart).await?;
    payload
        .data
        .validate()
        .map_err(|e| HandlerError::validation(format!("Validation error: {}", e)))?;
    let keep = match payload.keep_documents {
        Some(urls) => urls,
        None => service
            .get_accident(id)
            .await?
            .documents
            .into_iter()
            .map(|d| d.url)
            .collect(),
    };
    let updated = service
        .update_accident(id, payload.data, keep, payload.files)
        .await?;
    Ok(Json(updated))
}

pub async fn delete_accident_handler(
    State(service): State<Arc<IncidentService>>,
    Path((id,)): Path<(String,)>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "accident")?;
    service.delete_accident(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_accidents_handler(
    State(service): State<Arc<IncidentService>>,
    Query(pagination): Query<Pagination>,
) -> Result<impl IntoResponse, HandlerError> {
    let accidents = service
        .list_accidents(pagination.page(), pagination.limit())
        .await?;
    Ok(Json(accidents))
}

pub async fn detach_accident_document_handler(
    State(service): State<Arc<IncidentService>>,
    Path((id,)): Path<(String,)>,
    Json(payload): Json<DeleteDocumentRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "accident")?;
    payload
        .validate()
        .map_err(|e| HandlerError::validation(format!("Validation error: {}", e)))?;
    Ok(Json(
        service.detach_accident_document(id, &payload.document_url).await?,
    ))
}

// --- Infractions ---

pub async fn create_infraction_handler(
    State(service): State<Arc<IncidentService>>,
    multipart: Multipart,
) -> Result<impl IntoResponse, HandlerError> {
    let payload = parse_multipart::<CreateInfractionRequest>(multipart).await?;
    payload
        .data
        .validate()
        .map_err(|e| HandlerError::validation(format!("Validation error: {}", e)))?;
    let created = service.create_infraction(payload.data, payload.files).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get_infraction_handler(
    State(service): State<Arc<IncidentService>>,
    Path((id,)): Path<(String,)>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "infraction")?;
    Ok(Json(service.get_infraction(id).await?))
}

pub async fn update_infraction_handler(
    State(service): State<Arc<IncidentService>>,
    Path((id,)): Path<(String,)>,
    multipart: Multipart,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "infraction")?;
    let payload = parse_multipart::<CreateInfractionRequest>(multipart).await?;
    payload
        .data
        .validate()
        .map_err(|e| HandlerError::validation(format!("Validation error: {}", e)))?;
    let keep = match payload.keep_documents {
        Some(urls) => urls,
        None => service
            .get_infraction(id)
            .await?
            .documents
            .into_iter()
            .map(|d| d.url)
            .collect(),
    };
    let updated = service
        .update_infraction(id, payload.data, keep, payload.files)
        .await?;
    Ok(Json(updated))
}

pub async fn delete_infraction_handler(
    State(service): State<Arc<IncidentService>>,
    Path((id,)): Path<(String,)>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "infraction")?;
    service.delete_infraction(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_infractions_handler(
    State(service): State<Arc<IncidentService>>,
    Query(pagination): Query<Pagination>,
) -> Result<impl IntoResponse, HandlerError> {
    let infractions = service
        .list_infractions(pagination.page(), pagination.limit())
        .await?;
    Ok(Json(infractions))
}

pub async fn detach_infraction_document_handler(
    State(service): State<Arc<IncidentService>>,
    Path((id,)): Path<(String,)>,
    Json(payload): Json<DeleteDocumentRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "infraction")?;
    payload
        .validate()
        .map_err(|e| HandlerError::validation(format!("Validation error: {}", e)))?;
    Ok(Json(
        service
            .detach_infraction_document(id, &payload.document_url)
            .await?,
    ))
}
