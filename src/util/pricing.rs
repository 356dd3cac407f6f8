//! Pricing and VAT arithmetic for contracts and factures.
//!
//! Every derived financial field stored by this backend (contract duration,
//! total, remaining balance, facture VAT breakdown) is produced by the
//! functions in this module, so the edit and create flows of each resource
//! can never disagree about the numbers. The functions never clamp: a
//! negative total or remaining balance is a validation failure the caller
//! must reject, not a value to silently floor at zero.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Tolerance for comparing monetary amounts, well below a cent so float
/// noise from the arithmetic above never flips a balance comparison.
pub const MONEY_EPSILON: f64 = 1e-6;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PricingError {
    #[error("Return date precedes departure date")]
    InvalidDateRange,

    #[error("Unparseable date: {0}")]
    InvalidDate(String),

    #[error("Unparseable time: {0}")]
    InvalidTime(String),
}

/// VAT breakdown of a facture. Always satisfies
/// `total_ttc == montant_ht + tva_amount` and
/// `tva_amount == montant_ht * tva_percentage / 100` (up to float rounding).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VatBreakdown {
    pub montant_ht: f64,
    pub tva_percentage: f64,
    pub tva_amount: f64,
    pub total_ttc: f64,
}

/// Rental duration in whole days: ceiling of the elapsed time, minimum 1.
/// A return before the departure is an error, never a negative duration.
pub fn duration_days(departure: NaiveDateTime, ret: NaiveDateTime) -> Result<u32, PricingError> {
    if ret < departure {
        return Err(PricingError::InvalidDateRange);
    }
    let secs = (ret - departure).num_seconds();
    let days = (secs as f64 / 86_400.0).ceil() as u32;
    Ok(days.max(1))
}

pub fn contract_total(price_per_day: f64, duration: u32, discount: f64) -> f64 {
    price_per_day * duration as f64 - discount
}

pub fn remaining(total: f64, advance: f64) -> f64 {
    total - advance
}

/// Forward derivation: HT amount and percentage are authoritative.
pub fn invoice_from_ht(montant_ht: f64, tva_percentage: f64) -> VatBreakdown {
    let tva_amount = montant_ht * tva_percentage / 100.0;
    VatBreakdown {
        montant_ht,
        tva_percentage,
        tva_amount,
        total_ttc: montant_ht + tva_amount,
    }
}

/// Back-derivation used when the operator types the VAT amount directly:
/// the percentage is recomputed from the HT amount. This is intentionally
/// not symmetric with [`invoice_from_ht`]; editing the percentage never
/// re-derives from a previously typed amount.
pub fn invoice_from_tva_amount(montant_ht: f64, tva_amount: f64) -> VatBreakdown {
    let tva_percentage = if montant_ht != 0.0 {
        tva_amount / montant_ht * 100.0
    } else {
        0.0
    };
    VatBreakdown {
        montant_ht,
        tva_percentage,
        tva_amount,
        total_ttc: montant_ht + tva_amount,
    }
}

/// Back-solves the HT amount from a known tax-inclusive total, typically the
/// total of the contract being invoiced.
pub fn invoice_from_total(total_ttc: f64, tva_percentage: f64) -> VatBreakdown {
    let montant_ht = if tva_percentage != 0.0 {
        total_ttc / (1.0 + tva_percentage / 100.0)
    } else {
        total_ttc
    };
    VatBreakdown {
        montant_ht,
        tva_percentage,
        tva_amount: total_ttc - montant_ht,
        total_ttc,
    }
}

/// Parses the date strings the admin UI submits: plain `YYYY-MM-DD` or a
/// full RFC 3339 timestamp.
pub fn parse_date(value: &str) -> Result<NaiveDateTime, PricingError> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date.and_hms_opt(0, 0, 0).unwrap_or_default());
    }
    chrono::DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.naive_utc())
        .map_err(|_| PricingError::InvalidDate(value.to_string()))
}

/// Combines a date with an optional `HH:MM` time (contract departures carry
/// a separate time field).
pub fn parse_date_time(date: &str, time: Option<&str>) -> Result<NaiveDateTime, PricingError> {
    let base = parse_date(date)?;
    match time {
        Some(t) => {
            let parsed = NaiveTime::parse_from_str(t, "%H:%M")
                .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M:%S"))
                .map_err(|_| PricingError::InvalidTime(t.to_string()))?;
            Ok(base.date().and_time(parsed))
        }
        None => Ok(base),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn date(s: &str) -> NaiveDateTime {
        parse_date(s).unwrap()
    }

    #[test]
    fn test_duration_whole_days() {
        assert_eq!(duration_days(date("2025-08-01"), date("2025-08-04")).unwrap(), 3);
    }

    #[test]
    fn test_duration_same_day_is_one() {
        assert_eq!(duration_days(date("2025-08-01"), date("2025-08-01")).unwrap(), 1);
    }

    #[test]
    fn test_duration_partial_day_rounds_up() {
        let departure = parse_date_time("2025-08-01", Some("08:00")).unwrap();
        let ret = parse_date_time("2025-08-03", Some("18:30")).unwrap();
        assert_eq!(duration_days(departure, ret).unwrap(), 3);
    }

    #[test]
    fn test_duration_inverted_range_is_error() {
        assert_eq!(
            duration_days(date("2025-08-04"), date("2025-08-01")),
            Err(PricingError::InvalidDateRange)
        );
    }

    #[test]
    fn test_contract_total_scenario() {
        // 300/day over 3 days with a 50 discount
        let total = contract_total(300.0, 3, 50.0);
        assert!((total - 850.0).abs() < EPS);
        assert!((remaining(total, 200.0) - 650.0).abs() < EPS);
    }

    #[test]
    fn test_contract_total_does_not_clamp() {
        assert!(contract_total(10.0, 1, 100.0) < 0.0);
        assert!(remaining(100.0, 150.0) < 0.0);
    }

    #[test]
    fn test_invoice_from_ht_fixture() {
        let b = invoice_from_ht(180.0, 11.11);
        assert!((b.tva_amount - 20.0).abs() < 0.01);
        assert!((b.total_ttc - 200.0).abs() < 0.01);
    }

    #[test]
    fn test_invoice_from_ht_identity() {
        let b = invoice_from_ht(1234.56, 19.0);
        assert!((b.total_ttc - (b.montant_ht + b.tva_amount)).abs() < EPS);
        assert!((b.tva_amount - b.montant_ht * 19.0 / 100.0).abs() < EPS);
    }

    #[test]
    fn test_vat_amount_round_trip_recovers_percentage() {
        let forward = invoice_from_ht(180.0, 11.11);
        let back = invoice_from_tva_amount(180.0, forward.tva_amount);
        assert!((back.tva_percentage - 11.11).abs() < 1e-6);
        assert!((back.total_ttc - forward.total_ttc).abs() < EPS);
    }

    #[test]
    fn test_invoice_from_tva_amount_zero_ht() {
        let b = invoice_from_tva_amount(0.0, 25.0);
        assert_eq!(b.tva_percentage, 0.0);
        assert!((b.total_ttc - 25.0).abs() < EPS);
    }

    #[test]
    fn test_invoice_from_total_fixture() {
        let b = invoice_from_total(100.0, 20.0);
        assert!((b.montant_ht - 83.33).abs() < 0.01);
        assert!((b.tva_amount - 16.67).abs() < 0.01);
        assert!((b.montant_ht + b.tva_amount - 100.0).abs() < EPS);
    }

    #[test]
    fn test_invoice_from_total_zero_percentage() {
        let b = invoice_from_total(250.0, 0.0);
        assert_eq!(b.montant_ht, 250.0);
        assert_eq!(b.tva_amount, 0.0);
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        assert!(parse_date("pas-une-date").is_err());
        assert!(parse_date_time("2025-08-01", Some("25h99")).is_err());
    }
}
