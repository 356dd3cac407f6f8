use std::sync::Arc;

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handler::incident_handler::{
    create_accident_handler, create_infraction_handler, delete_accident_handler,
    delete_infraction_handler, detach_accident_document_handler,
    detach_infraction_document_handler, get_accident_handler, get_infraction_handler,
    list_accidents_handler, list_infractions_handler, update_accident_handler,
    update_infraction_handler,
};
use crate::service::incident_service::IncidentService;

pub fn incident_router(service: Arc<IncidentService>) -> Router {
    Router::new()
        .route("/accidents", post(create_accident_handler))
        .route("/accidents", get(list_accidents_handler))
        .route("/accidents/{id}", get(get_accident_handler))
        .route("/accidents/{id}", put(update_accident_handler))
        .route("/accidents/{id}", delete(delete_accident_handler))
        .route("/accidents/{id}/documents", delete(detach_accident_document_handler))
        .route("/infractions", post(create_infraction_handler))
        .route("/infractions", get(list_infractions_handler))
        .route("/infractions/{id}", get(get_infraction_handler))
        .route("/infractions/{id}", put(update_infraction_handler))
        .route("/infractions/{id}", delete(delete_infraction_handler))
        .route("/infractions/{id}/documents", delete(detach_infraction_document_handler))
        .with_state(service)
}
