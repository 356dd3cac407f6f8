use std::sync::Arc;

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handler::charge_handler::{
    create_charge_handler, delete_charge_handler, get_charge_handler, list_charges_handler,
    update_charge_handler,
};
use crate::service::charge_service::ChargeService;

pub fn charge_router(service: Arc<ChargeService>) -> Router {
    Router::new()
        .route("/charges", post(create_charge_handler))
        .route("/charges", get(list_charges_handler))
        .route("/charges/{id}", get(get_charge_handler))
        .route("/charges/{id}", put(update_charge_handler))
        .route("/charges/{id}", delete(delete_charge_handler))
        .with_state(service)
}
