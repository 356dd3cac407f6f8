use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::dto::not_blank;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateChargeRequest {
    #[validate(length(min = 1, max = 200), custom(function = not_blank))]
    pub label: String,

    #[validate(length(min = 1))]
    pub charge_date: String,

    #[validate(range(min = 0.0))]
    pub amount: f64,

    pub category: Option<String>,

    #[validate(custom(function = not_blank))]
    pub description: Option<String>,
}
