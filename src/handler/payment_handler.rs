use std::sync::Arc;

use axum::extract::{Multipart, Path, Query, State};
use axum::response::IntoResponse;
use axum::{http::StatusCode, Json};
use serde::Deserialize;
use validator::Validate;

use crate::dto::common_dto::{DeleteDocumentRequest, Pagination};
use crate::dto::payment_dto::CreatePaymentRequest;
use crate::handler::{parse_multipart, parse_object_id};
use crate::model::client_payment::PaymentTarget;
use crate::service::payment_service::{PaymentService, PaymentServiceImpl};
use crate::util::error::HandlerError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentTargetQuery {
    pub payment_for: PaymentTarget,
    pub target: String,
}

pub async fn record_payment_handler(
    State(service): State<Arc<PaymentServiceImpl>>,
    multipart: Multipart,
) -> Result<impl IntoResponse, HandlerError> {
    let payload = parse_multipart::<CreatePaymentRequest>(multipart).await?;
    payload
        .data
        .validate()
        .map_err(|e| HandlerError::validation(format!("Validation error: {}", e)))?;
    let created = service.record_payment(payload.data, payload.files).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get_payment_handler(
    State(service): State<Arc<PaymentServiceImpl>>,
    Path((id,)): Path<(String,)>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "payment")?;
    Ok(Json(service.get_payment(id).await?))
}

pub async fn update_payment_handler(
    State(service): State<Arc<PaymentServiceImpl>>,
    Path((id,)): Path<(String,)>,
    multipart: Multipart,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "payment")?;
    let payload = parse_multipart::<CreatePaymentRequest>(multipart).await?;
    payload
        .data
        .validate()
        .map_err(|e| HandlerError::validation(format!("Validation error: {}", e)))?;
    let keep = match payload.keep_documents {
        Some(urls) => urls,
        None => service
            .get_payment(id)
            .await?
            .documents
            .into_iter()
            .map(|d| d.url)
            .collect(),
    };
    let updated = service
        .update_payment(id, payload.data, keep, payload.files)
        .await?;
    Ok(Json(updated))
}

pub async fn delete_payment_handler(
    State(service): State<Arc<PaymentServiceImpl>>,
    Path((id,)): Path<(String,)>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "payment")?;
    service.delete_payment(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_payments_handler(
    State(service): State<Arc<PaymentServiceImpl>>,
    Query(pagination): Query<Pagination>,
) -> Result<impl IntoResponse, HandlerError> {
    let payments = service
        .list_payments(pagination.page(), pagination.limit())
        .await?;
    Ok(Json(payments))
}

pub async fn list_target_payments_handler(
    State(service): State<Arc<PaymentServiceImpl>>,
    Query(query): Query<PaymentTargetQuery>,
) -> Result<impl IntoResponse, HandlerError> {
    let target_id = parse_object_id(&query.target, "target")?;
    Ok(Json(
        service.payments_of_target(query.payment_for, target_id).await?,
    ))
}

pub async fn detach_payment_document_handler(
    State(service): State<Arc<PaymentServiceImpl>>,
    Path((id,)): Path<(String,)>,
    Json(payload): Json<DeleteDocumentRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "payment")?;
    payload
        .validate()
        .map_err(|e| HandlerError::validation(format!("Validation error: {}", e)))?;
    Ok(Json(service.detach_document(id, &payload.document_url).await?))
}
