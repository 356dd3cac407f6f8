pub mod charge_router;
pub mod contract_router;
pub mod customer_router;
pub mod facture_router;
pub mod fleet_router;
pub mod incident_router;
pub mod payment_router;
pub mod reservation_router;
pub mod user_router;
pub mod vehicle_router;
