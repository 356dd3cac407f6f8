use std::sync::Arc;

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handler::customer_handler::{
    create_customer_handler, delete_customer_handler, detach_customer_document_handler,
    get_customer_handler, list_customers_handler, update_customer_handler,
};
use crate::service::customer_service::CustomerService;

pub fn customer_router(service: Arc<CustomerService>) -> Router {
    Router::new()
        .route("/customers", post(create_customer_handler))
        .route("/customers", get(list_customers_handler))
        .route("/customers/{id}", get(get_customer_handler))
        .route("/customers/{id}", put(update_customer_handler))
        .route("/customers/{id}", delete(delete_customer_handler))
        .route("/customers/{id}/documents", delete(detach_customer_document_handler))
        .with_state(service)
}
