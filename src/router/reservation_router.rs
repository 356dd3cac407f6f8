use std::sync::Arc;

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handler::reservation_handler::{
    create_reservation_handler, delete_reservation_handler, get_reservation_handler,
    list_reservations_handler, update_reservation_handler,
};
use crate::service::reservation_service::ReservationService;

pub fn reservation_router(service: Arc<ReservationService>) -> Router {
    Router::new()
        .route("/reservations", post(create_reservation_handler))
        .route("/reservations", get(list_reservations_handler))
        .route("/reservations/{id}", get(get_reservation_handler))
        .route("/reservations/{id}", put(update_reservation_handler))
        .route("/reservations/{id}", delete(delete_reservation_handler))
        .with_state(service)
}
