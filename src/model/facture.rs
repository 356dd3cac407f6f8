use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::model::impl_entity;

/// Invoice. The VAT triple (`montantHT`, `tvaPercentage`, `tvaAmount`) and
/// `totalTTC` always satisfy the identities enforced by
/// [`crate::util::pricing`]; the facture service recomputes them from
/// whichever primitives the request supplies.
#[allow(non_snake_case)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Facture {
    #[serde(rename = "_id")]
    pub id: Option<ObjectId>,
    pub client: ObjectId,
    pub contract: Option<ObjectId>,
    pub invoiceDate: String,
    pub dueDate: Option<String>,
    pub montantHT: f64,
    pub tvaPercentage: f64,
    pub tvaAmount: f64,
    pub totalTTC: f64,
    pub paymentType: String,
    pub amountPaid: f64,
    pub status: String,
    pub createdAt: Option<String>,
    pub updatedAt: Option<String>,
}

pub const FACTURE_PAID: &str = "payee";
pub const FACTURE_PARTIALLY_PAID: &str = "partiellement_payee";
pub const FACTURE_UNPAID: &str = "impayee";

impl_entity!(Facture, "factures");
