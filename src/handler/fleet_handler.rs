use std::sync::Arc;

use axum::extract::{Multipart, Path, Query, State};
use axum::response::IntoResponse;
use axum::{http::StatusCode, Json};
use validator::Validate;

use crate::dto::common_dto::{DeleteDocumentRequest, Pagination};
use crate::dto::fleet_dto::{
    CreateInspectionRequest, CreateInsuranceRequest, CreateInterventionRequest, CreateTraiteRequest,
};
use crate::handler::{parse_multipart, parse_object_id};
use crate::service::fleet_service::FleetService;
use crate::util::error::HandlerError;

// --- Inspections ---

pub async fn create_inspection_handler(
    State(service): State<Arc<FleetService>>,
    multipart: Multipart,
) -> Result<impl IntoResponse, HandlerError> {
    let payload = parse_multipart::<CreateInspectionRequest>(multipart).await?;
    payload
        .data
        .validate()
        .map_err(|e| HandlerError::validation(format!("Validation error: {}", e)))?;
    let created = service.create_inspection(payload.data, payload.files).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get_inspection_handler(
    State(service): State<Arc<FleetService>>,
    Path((id,)): Path<(String,)>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "inspection")?;
    Ok(Json(service.get_inspection(id).await?))
}

pub async fn update_inspection_handler(
    State(service): State<Arc<FleetService>>,
    Path((id,)): Path<(String,)>,
    multipart: Multipart,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "inspection")?;
    let payload = parse_multipart::<CreateInspectionRequest>(multipart).await?;
    payload
        .data
        .validate()
        .map_err(|e| HandlerError::validation(format!("Validation error: {}", e)))?;
    let keep = match payload.keep_documents {
        Some(urls) => urls,
        None => service
            .get_inspection(id)
            .await?
            .documents
            .into_iter()
            .map(|d| d.url)
            .collect(),
    };
    let updated = service
        .update_inspection(id, payload.data, keep, payload.files)
        .await?;
    Ok(Json(updated))
}

pub async fn delete_inspection_handler(
    State(service): State<Arc<FleetService>>,
    Path((id,)): Path<(String,)>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "inspection")?;
    service.delete_inspection(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_inspections_handler(
    State(service): State<Arc<FleetService>>,
    Query(pagination): Query<Pagination>,
) -> Result<impl IntoResponse, HandlerError> {
    let inspections = service
        .list_inspections(pagination.page(), pagination.limit())
        .await?;
    Ok(Json(inspections))
}

pub async fn detach_inspection_document_handler(
    State(service): State<Arc<FleetService>>,
    Path((id,)): Path<(String,)>,
    Json(payload): Json<DeleteDocumentRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "inspection")?;
    payload
        .validate()
        .map_err(|e| HandlerError::validation(format!("Validation error: {}", e)))?;
    Ok(Json(
        service
            .detach_inspection_document(id, &payload.document_url)
            .await?,
    ))
}

// --- Insurances ---

pub async fn create_insurance_handler(
    State(service): State<Arc<FleetService>>,
    multipart: Multipart,
) -> Result<impl IntoResponse, HandlerError> {
    let payload = parse_multipart::<CreateInsuranceRequest>(multipart).await?;
    payload
        .data
        .validate()
        .map_err(|e| HandlerError::validation(format!("Validation error: {}", e)))?;
    let created = service.create_insurance(payload.data, payload.files).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get_insurance_handler(
    State(service): State<Arc<FleetService>>,
    Path((id,)): Path<(String,)>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "insurance")?;
    Ok(Json(service.get_insurance(id).await?))
}

pub async fn update_insurance_handler(
    State(service): State<Arc<FleetService>>,
    Path((id,)): Path<(String,)>,
    multipart: Multipart,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "insurance")?;
    let payload = parse_multipart::<CreateInsuranceRequest>(multipart).await?;
    payload
        .data
        .validate()
        .map_err(|e| HandlerError::validation(format!("Validation error: {}", e)))?;
    let keep = match payload.keep_documents {
        Some(urls) => urls,
        None => service
            .get_insurance(id)
            .await?
            .documents
            .into_iter()
            .map(|d| d.url)
            .collect(),
    };
    let updated = service
        .update_insurance(id, payload.data, keep, payload.files)
        .await?;
    Ok(Json(updated))
}

pub async fn delete_insurance_handler(
    State(service): State<Arc<FleetService>>,
    Path((id,)): Path<(String,)>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "insurance")?;
    service.delete_insurance(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_insurances_handler(
    State(service): State<Arc<FleetService>>,
    Query(pagination): Query<Pagination>,
) -> Result<impl IntoResponse, HandlerError> {
    let insurances = service
        .list_insurances(pagination.page(), pagination.limit())
        .await?;
    Ok(Json(insurances))
}

pub async fn detach_insurance_document_handler(
    State(service): State<Arc<FleetService>>,
    Path((id,)): Path<(String,)>,
    Json(payload): Json<DeleteDocumentRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "insurance")?;
    payload
        .validate()
        .map_err(|e| HandlerError::validation(format!("Validation error: {}", e)))?;
    Ok(Json(
        service
            .detach_insurance_document(id, &payload.document_url)
            .await?,
    ))
}

// --- Interventions ---

pub async fn create_intervention_handler(
    State(service): State<Arc<FleetService>>,
    multipart: Multipart,
) -> Result<impl IntoResponse, HandlerError> {
    let payload = parse_multipart::<CreateInterventionRequest>(multipart).await?;
    payload
        .data
        .validate()
        .map_err(|e| HandlerError::validation(format!("Validation error: {}", e)))?;
    let created = service
        .create_intervention(payload.data, payload.files)
        .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get_intervention_handler(
    State(service): State<Arc<FleetService>>,
    Path((id,)): Path<(String,)>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "intervention")?;
    Ok(Json(service.get_intervention(id).await?))
}

pub async fn update_intervention_handler(
    State(service): State<Arc<FleetService>>,
    Path((id,)): Path<(String,)>,
    multipart: Multipart,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "intervention")?;
    let payload = parse_multipart::<CreateInterventionRequest>(multipart).await?;
    payload
        .data
        .validate()
        .map_err(|e| HandlerError::validation(format!("Validation error: {}", e)))?;
    let keep = match payload.keep_documents {
        Some(urls) => urls,
        None => service
            .get_intervention(id)
            .await?
            .documents
            .into_iter()
            .map(|d| d.url)
            .collect(),
    };
    let updated = service
        .update_intervention(id, payload.data, keep, payload.files)
        .await?;
    Ok(Json(updated))
}

pub async fn delete_intervention_handler(
    State(service): State<Arc<FleetService>>,
    Path((id,)): Path<(String,)>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "intervention")?;
    service.delete_intervention(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_interventions_handler(
    State(service): State<Arc<FleetService>>,
    Query(pagination): Query<Pagination>,
) -> Result<impl IntoResponse, HandlerError> {
    let interventions = service
        .list_interventions(pagination.page(), pagination.limit())
        .await?;
    Ok(Json(interventions))
}

pub async fn detach_intervention_document_handler(
    State(service): State<Arc<FleetService>>,
    Path((id,)): Path<(String,)>,
    Json(payload): Json<DeleteDocumentRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "intervention")?;
    payload
        .validate()
        .map_err(|e| HandlerError::validation(format!("Validation error: {}", e)))?;
    Ok(Json(
        service
            .detach_intervention_document(id, &payload.document_url)
            .await?,
    ))
}

// --- Traites ---

pub async fn create_traite_handler(
    State(service): State<Arc<FleetService>>,
    Json(payload): Json<CreateTraiteRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    payload
        .validate()
        .map_err(|e| HandlerError::validation(format!("Validation error: {}", e)))?;
    let created = service.create_traite(payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get_traite_handler(
    State(service): State<Arc<FleetService>>,
    Path((id,)): Path<(String,)>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "traite")?;
    Ok(Json(service.get_traite(id).await?))
}

pub async fn update_traite_handler(
    State(service): State<Arc<FleetService>>,
    Path((id,)): Path<(String,)>,
    Json(payload): Json<CreateTraiteRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "traite")?;
    payload
        .validate()
        .map_err(|e| HandlerError::validation(format!("Validation error: {}", e)))?;
    Ok(Json(service.update_traite(id, payload).await?))
}

pub async fn delete_traite_handler(
    State(service): State<Arc<FleetService>>,
    Path((id,)): Path<(String,)>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "traite")?;
    service.delete_traite(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_traites_handler(
    State(service): State<Arc<FleetService>>,
    Query(pagination): Query<Pagination>,
) -> Result<impl IntoResponse, HandlerError> {
    let traites = service
        .list_traites(pagination.page(), pagination.limit())
        .await?;
    Ok(Json(traites))
}
