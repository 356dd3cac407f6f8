use std::sync::Arc;

use axum::extract::{Multipart, Path, Query, State};
use axum::response::IntoResponse;
use axum::{http::StatusCode, Json};
use validator::Validate;

use crate::dto::common_dto::{DeleteDocumentRequest, Pagination};
use crate::dto::customer_dto::CreateCustomerRequest;
use crate::handler::{parse_multipart, parse_object_id};
use crate::service::customer_service::CustomerService;
use crate::util::error::HandlerError;

pub async fn create_customer_handler(
    State(service): State<Arc<CustomerService>>,
    multipart: Multipart,
) -> Result<impl IntoResponse, HandlerError> {
    let payload = parse_multipart::<CreateCustomerRequest>(multipart).await?;
    payload
        .data
        .validate()
        .map_err(|e| HandlerError::validation(format!("Validation error: {}", e)))?;
    let created = service.create_customer(payload.data, payload.files).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get_customer_handler(
    State(service): State<Arc<CustomerService>>,
    Path((id,)): Path<(String,)>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "customer")?;
    Ok(Json(service.get_customer(id).await?))
}

pub async fn update_customer_handler(
    State(service): State<Arc<CustomerService>>,
    Path((id,)): Path<(String,)>,
    multipart: Multipart,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "customer")?;
    let payload = parse_multipart::<CreateCustomerRequest>(multipart).await?;
    payload
        .data
        .validate()
        .map_err(|e| HandlerError::validation(format!("Validation error: {}", e)))?;
    let keep = match payload.keep_documents {
        Some(urls) => urls,
        None => service
            .get_customer(id)
            .await?
            .documents
            .into_iter()
            .map(|d| d.url)
            .collect(),
    };
    let updated = service
        .update_customer(id, payload.data, keep, payload.files)
        .await?;
    Ok(Json(updated))
}

pub async fn delete_customer_handler(
    State(service): State<Arc<CustomerService>>,
    Path((id,)): Path<(String,)>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "customer")?;
    service.delete_customer(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_customers_handler(
    State(service): State<Arc<CustomerService>>,
    Query(pagination): Query<Pagination>,
) -> Result<impl IntoResponse, HandlerError> {
    let customers = service
        .list_customers(pagination.page(), pagination.limit())
        .await?;
    Ok(Json(customers))
}

pub async fn detach_customer_document_handler(
    State(service): State<Arc<CustomerService>>,
    Path((id,)): Path<(String,)>,
    Json(payload): Json<DeleteDocumentRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "customer")?;
    payload
        .validate()
        .map_err(|e| HandlerError::validation(format!("Validation error: {}", e)))?;
    Ok(Json(service.detach_document(id, &payload.document_url).await?))
}
