pub mod charge_dto;
pub mod common_dto;
pub mod contract_dto;
pub mod customer_dto;
pub mod facture_dto;
pub mod fleet_dto;
pub mod incident_dto;
pub mod payment_dto;
pub mod reservation_dto;
pub mod user_dto;
pub mod vehicle_dto;

use validator::ValidationError;

/// Rejects text that is non-empty but contains only whitespace. Empty
/// strings are left to the `length` rule of each field.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if !value.is_empty() && value.trim().is_empty() {
        return Err(ValidationError::new("not_blank"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_blank_rejects_whitespace_only_text() {
        assert!(not_blank("   ").is_err());
        assert!(not_blank("\t\n").is_err());
        assert!(not_blank("Alger centre").is_ok());
        assert!(not_blank("").is_ok());
    }
}
