use std::sync::Arc;

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handler::facture_handler::{
    create_facture_handler, delete_facture_handler, get_facture_handler,
    list_client_factures_handler, list_contract_factures_handler, list_factures_handler,
    update_facture_handler,
};
use crate::service::facture_service::FactureServiceImpl;

pub fn facture_router(service: Arc<FactureServiceImpl>) -> Router {
    Router::new()
        .route("/factures", post(create_facture_handler))
        .route("/factures", get(list_factures_handler))
        .route("/factures/{id}", get(get_facture_handler))
        .route("/factures/{id}", put(update_facture_handler))
        .route("/factures/{id}", delete(delete_facture_handler))
        .route("/factures/client/{client}", get(list_client_factures_handler))
        .route("/factures/contract/{contract}", get(list_contract_factures_handler))
        .with_state(service)
}
