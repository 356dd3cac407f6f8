use std::sync::Arc;

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handler::payment_handler::{
    delete_payment_handler, detach_payment_document_handler, get_payment_handler,
    list_payments_handler, list_target_payments_handler, record_payment_handler,
    update_payment_handler,
};
use crate::service::payment_service::PaymentServiceImpl;

pub fn payment_router(service: Arc<PaymentServiceImpl>) -> Router {
    Router::new()
        .route("/payments", post(record_payment_handler))
        .route("/payments", get(list_payments_handler))
        .route("/payments/search", get(list_target_payments_handler))
        .route("/payments/{id}", get(get_payment_handler))
        .route("/payments/{id}", put(update_payment_handler))
        .route("/payments/{id}", delete(delete_payment_handler))
        .route("/payments/{id}/documents", delete(detach_payment_document_handler))
        .with_state(service)
}
