use std::sync::Arc;

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handler::vehicle_handler::{
    create_vehicle_handler, delete_vehicle_handler, detach_vehicle_document_handler,
    get_vehicle_handler, list_vehicles_by_status_handler, list_vehicles_handler,
    update_vehicle_handler,
};
use crate::service::vehicle_service::VehicleService;

pub fn vehicle_router(service: Arc<VehicleService>) -> Router {
    Router::new()
        .route("/vehicles", post(create_vehicle_handler))
        .route("/vehicles", get(list_vehicles_handler))
        .route("/vehicles/status/{status}", get(list_vehicles_by_status_handler))
        .route("/vehicles/{id}", get(get_vehicle_handler))
        .route("/vehicles/{id}", put(update_vehicle_handler))
        .route("/vehicles/{id}", delete(delete_vehicle_handler))
        .route("/vehicles/{id}/documents", delete(detach_vehicle_document_handler))
        .with_state(service)
}
