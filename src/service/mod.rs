use bson::oid::ObjectId;

use crate::util::error::ServiceError;

pub mod charge_service;
pub mod contract_service;
pub mod customer_service;
pub mod documents;
pub mod facture_service;
pub mod fleet_service;
pub mod incident_service;
pub mod payment_service;
pub mod reservation_service;
pub mod user_service;
pub mod vehicle_service;

/// Parses a 24-hex ObjectId reference coming from a request body.
pub(crate) fn parse_oid(value: &str, what: &str) -> Result<ObjectId, ServiceError> {
    ObjectId::parse_str(value)
        .map_err(|_| ServiceError::InvalidInput(format!("Invalid {} id '{}'", what, value)))
}
