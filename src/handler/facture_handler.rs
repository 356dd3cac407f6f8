use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::{http::StatusCode, Json};
use validator::Validate;

use crate::dto::common_dto::Pagination;
use crate::dto::facture_dto::CreateFactureRequest;
use crate::handler::parse_object_id;
use crate::service::facture_service::{FactureService, FactureServiceImpl};
use crate::util::error::HandlerError;

pub async fn create_facture_handler(
    State(service): State<Arc<FactureServiceImpl>>,
    Json(payload): Json<CreateFactureRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    payload
        .validate()
        .map_err(|e| HandlerError::validation(format!("Validation error: {}", e)))?;
    let created = service.create_facture(payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get_facture_handler(
    State(service): State<Arc<FactureServiceImpl>>,
    Path((id,)): Path<(String,)>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "facture")?;
    Ok(Json(service.get_facture(id).await?))
}

pub async fn update_facture_handler(
    State(service): State<Arc<FactureServiceImpl>>,
    Path((id,)): Path<(String,)>,
    Json(payload): Json<CreateFactureRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "facture")?;
    payload
        .validate()
        .map_err(|e| HandlerError::validation(format!("Validation error: {}", e)))?;
    Ok(Json(service.update_facture(id, payload).await?))
}

pub async fn delete_facture_handler(
    State(service): State<Arc<FactureServiceImpl>>,
    Path((id,)): Path<(String,)>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "facture")?;
    service.delete_facture(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_factures_handler(
    State(service): State<Arc<FactureServiceImpl>>,
    Query(pagination): Query<Pagination>,
) -> Result<impl IntoResponse, HandlerError> {
    let factures = service
        .list_factures(pagination.page(), pagination.limit())
        .await?;
    Ok(Json(factures))
}

pub async fn list_client_factures_handler(
    State(service): State<Arc<FactureServiceImpl>>,
    Path((client,)): Path<(String,)>,
) -> Result<impl IntoResponse, HandlerError> {
    let client = parse_object_id(&client, "client")?;
    Ok(Json(service.factures_of_client(client).await?))
}

pub async fn list_contract_factures_handler(
    State(service): State<Arc<FactureServiceImpl>>,
    Path((contract,)): Path<(String,)>,
) -> Result<impl IntoResponse, HandlerError> {
    let contract = parse_object_id(&contract, "contract")?;
    Ok(Json(service.factures_of_contract(contract).await?))
}
