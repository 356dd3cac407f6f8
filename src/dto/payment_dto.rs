use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::model::client_payment::PaymentTarget;

/// Payment payload. `remainingAmount` is never accepted from the
/// client; the payment service computes it from the target's balance.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentRequest {
    pub payment_for: PaymentTarget,

    #[validate(length(equal = 24))]
    pub contract: Option<String>,

    #[validate(length(equal = 24))]
    pub facture: Option<String>,

    #[validate(length(equal = 24))]
    pub accident: Option<String>,

    #[validate(length(min = 1))]
    pub payment_date: String,

    #[validate(range(min = 0.0))]
    pub amount_paid: f64,

    #[validate(length(min = 1, max = 50))]
    pub payment_type: String,
}
