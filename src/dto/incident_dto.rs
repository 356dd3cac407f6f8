use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::dto::not_blank;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccidentRequest {
    #[validate(length(equal = 24))]
    pub vehicle: String,

    #[validate(length(equal = 24))]
    pub contract: Option<String>,

    #[validate(length(min = 1))]
    pub accident_date: String,

    #[validate(length(min = 1, max = 200), custom(function = not_blank))]
    pub location: String,

    #[validate(custom(function = not_blank))]
    pub description: Option<String>,

    #[validate(range(min = 0.0))]
    pub repair_cost: Option<f64>,

    #[validate(length(min = 2, max = 50))]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateInfractionRequest {
    #[validate(length(equal = 24))]
    pub vehicle: String,

    #[validate(length(equal = 24))]
    pub client: Option<String>,

    #[validate(length(min = 1))]
    pub infraction_date: String,

    #[validate(length(min = 1, max = 100), custom(function = not_blank))]
    pub kind: String,

    #[validate(custom(function = not_blank))]
    pub location: Option<String>,

    #[validate(range(min = 0.0))]
    pub amount: f64,

    #[validate(length(min = 2, max = 50))]
    pub status: Option<String>,
}
