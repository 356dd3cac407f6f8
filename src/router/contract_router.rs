use std::sync::Arc;

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handler::contract_handler::{
    create_contract_handler, delete_contract_handler, detach_contract_document_handler,
    get_contract_handler, list_client_contracts_handler, list_contracts_handler,
    list_vehicle_contracts_handler, update_contract_handler, update_contract_status_handler,
};
use crate::service::contract_service::ContractServiceImpl;

pub fn contract_router(service: Arc<ContractServiceImpl>) -> Router {
    Router::new()
        .route("/contracts", post(create_contract_handler))
        .route("/contracts", get(list_contracts_handler))
        .route("/contracts/{id}", get(get_contract_handler))
        .route("/contracts/{id}", put(update_contract_handler))
        .route("/contracts/{id}", delete(delete_contract_handler))
        .route("/contracts/{id}/status", put(update_contract_status_handler))
        .route("/contracts/{id}/documents", delete(detach_contract_document_handler))
        .route("/contracts/client/{client}", get(list_client_contracts_handler))
        .route("/contracts/vehicle/{vehicle}", get(list_vehicle_contracts_handler))
        .with_state(service)
}
