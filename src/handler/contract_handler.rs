use std::sync::Arc;

use axum::extract::{Multipart, Path, Query, State};
use axum::response::IntoResponse;
use axum::{http::StatusCode, Json};
use validator::Validate;

use crate::dto::common_dto::{DeleteDocumentRequest, Pagination};
use crate::dto::contract_dto::{CreateContractRequest, UpdateContractStatusRequest};
use crate::handler::{parse_multipart, parse_object_id};
use crate::service::contract_service::{ContractService, ContractServiceImpl};
use crate::util::error::HandlerError;

pub async fn create_contract_handler(
    State(service): State<Arc<ContractServiceImpl>>,
    multipart: Multipart,
) -> Result<impl IntoResponse, HandlerError> {
    let payload = parse_multipart::<CreateContractRequest>(multipart).await?;
    payload
        .data
        .validate()
        .map_err(|e| HandlerError::validation(format!("Validation error: {}", e)))?;
    let created = service.create_contract(payload.data, payload.files).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get_contract_handler(
    State(service): State<Arc<ContractServiceImpl>>,
    Path((id,)): Path<(String,)>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "contract")?;
    Ok(Json(service.get_contract(id).await?))
}

pub async fn update_contract_handler(
    State(service): State<Arc<ContractServiceImpl>>,
    Path((id,)): Path<(String,)>,
    multipart: Multipart,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "contract")?;
    let payload = parse_multipart::<CreateContractRequest>(multipart).await?;
    payload
        .data
        .validate()
        .map_err(|e| HandlerError::validation(format!("Validation error: {}", e)))?;

    // Absent keepDocuments means "keep everything already stored".
    let keep = match payload.keep_documents {
        Some(urls) => urls,
        None => service
            .get_contract(id)
            .await?
            .documents
            .into_iter()
            .map(|d| d.url)
            .collect(),
    };
    let updated = service
        .update_contract(id, payload.data, keep, payload.files)
        .await?;
    Ok(Json(updated))
}

pub async fn update_contract_status_handler(
    State(service): State<Arc<ContractServiceImpl>>,
    Path((id,)): Path<(String,)>,
    Json(payload): Json<UpdateContractStatusRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "contract")?;
    payload
        .validate()
        .map_err(|e| HandlerError::validation(format!("Validation error: {}", e)))?;
    Ok(Json(service.update_status(id, &payload.status).await?))
}

pub async fn delete_contract_handler(
    State(service): State<Arc<ContractServiceImpl>>,
    Path((id,)): Path<(String,)>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "contract")?;
    service.delete_contract(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_contracts_handler(
    State(service): State<Arc<ContractServiceImpl>>,
    Query(pagination): Query<Pagination>,
) -> Result<impl IntoResponse, HandlerError> {
    let contracts = service
        .list_contracts(pagination.page(), pagination.limit())
        .await?;
    Ok(Json(contracts))
}

pub async fn list_client_contracts_handler(
    State(service): State<Arc<ContractServiceImpl>>,
    Path((client,)): Path<(String,)>,
) -> Result<impl IntoResponse, HandlerError> {
    let client = parse_object_id(&client, "client")?;
    Ok(Json(service.contracts_of_client(client).await?))
}

pub async fn list_vehicle_contracts_handler(
    State(service): State<Arc<ContractServiceImpl>>,
    Path((vehicle,)): Path<(String,)>,
) -> Result<impl IntoResponse, HandlerError> {
    let vehicle = parse_object_id(&vehicle, "vehicle")?;
    Ok(Json(service.contracts_of_vehicle(vehicle).await?))
}

pub async fn detach_contract_document_handler(
    State(service): State<Arc<ContractServiceImpl>>,
    Path((id,)): Path<(String,)>,
    Json(payload): Json<DeleteDocumentRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "contract")?;
    payload
        .validate()
        .map_err(|e| HandlerError::validation(format!("Validation error: {}", e)))?;
    Ok(Json(service.detach_document(id, &payload.document_url).await?))
}
