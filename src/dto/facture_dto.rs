use serde::{Deserialize, Serialize};
use validator::Validate;

/// Invoice payload. Exactly which of the VAT primitives are supplied
/// decides how the service derives the rest: `montantHt` plus either
/// `tvaPercentage` or `tvaAmount` derives forward to `totalTtc`, while
/// `totalTtc` plus `tvaPercentage` back-derives `montantHt`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateFactureRequest {
    #[validate(length(equal = 24))]
    pub client: String,

    #[validate(length(equal = 24))]
    pub contract: Option<String>,

    #[validate(length(min = 1))]
    pub invoice_date: String,

    pub due_date: Option<String>,

    #[validate(range(min = 0.0))]
    pub montant_ht: Option<f64>,

    #[validate(range(min = 0.0, max = 100.0))]
    pub tva_percentage: Option<f64>,

    #[validate(range(min = 0.0))]
    pub tva_amount: Option<f64>,

    #[validate(range(min = 0.0))]
    pub total_ttc: Option<f64>,

    #[validate(length(min = 1, max = 50))]
    pub payment_type: String,

    #[validate(range(min = 0.0))]
    pub amount_paid: Option<f64>,
}
