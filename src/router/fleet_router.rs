use std::sync::Arc;

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handler::fleet_handler::{
    create_inspection_handler, create_insurance_handler, create_intervention_handler,
    create_traite_handler, delete_inspection_handler, delete_insurance_handler,
    delete_intervention_handler, delete_traite_handler, detach_inspection_document_handler,
    detach_insurance_document_handler, detach_intervention_document_handler,
    get_inspection_handler, get_insurance_handler, get_intervention_handler, get_traite_handler,
    list_inspections_handler, list_insurances_handler, list_interventions_handler,
    list_traites_handler, update_inspection_handler, update_insurance_handler,
    update_intervention_handler, update_traite_handler,
};
use crate::service::fleet_service::FleetService;

pub fn fleet_router(service: Arc<FleetService>) -> Router {
    Router::new()
        .route("/inspections", post(create_inspection_handler))
        .route("/inspections", get(list_inspections_handler))
        .route("/inspections/{id}", get(get_inspection_handler))
        .route("/inspections/{id}", put(update_inspection_handler))
        .route("/inspections/{id}", delete(delete_inspection_handler))
        .route("/inspections/{id}/documents", delete(detach_inspection_document_handler))
        .route("/insurances", post(create_insurance_handler))
        .route("/insurances", get(list_insurances_handler))
        .route("/insurances/{id}", get(get_insurance_handler))
        .route("/insurances/{id}", put(update_insurance_handler))
        .route("/insurances/{id}", delete(delete_insurance_handler))
        .route("/insurances/{id}/documents", delete(detach_insurance_document_handler))
        .route("/interventions", post(create_intervention_handler))
        .route("/interventions", get(list_interventions_handler))
        .route("/interventions/{id}", get(get_intervention_handler))
        .route("/interventions/{id}", put(update_intervention_handler))
        .route("/interventions/{id}", delete(delete_intervention_handler))
        .route("/interventions/{id}/documents", delete(detach_intervention_document_handler))
        .route("/traites", post(create_traite_handler))
        .route("/traites", get(list_traites_handler))
        .route("/traites/{id}", get(get_traite_handler))
        .route("/traites/{id}", put(update_traite_handler))
        .route("/traites/{id}", delete(delete_traite_handler))
        .with_state(service)
}
