pub mod accident_repo;
pub mod charge_repo;
pub mod contract_repo;
pub mod customer_repo;
pub mod facture_repo;
pub mod fleet_repo;
pub mod infraction_repo;
pub mod mongo;
pub mod payment_repo;
pub mod repository_error;
pub mod reservation_repo;
pub mod user_repo;
pub mod vehicle_repo;
