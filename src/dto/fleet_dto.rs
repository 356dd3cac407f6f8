use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::dto::not_blank;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateInspectionRequest {
    #[validate(length(equal = 24))]
    pub vehicle: String,

    #[validate(length(min = 1))]
    pub inspection_date: String,

    pub expiry_date: Option<String>,

    #[validate(custom(function = not_blank))]
    pub center: Option<String>,

    #[validate(range(min = 0.0))]
    pub cost: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateInsuranceRequest {
    #[validate(length(equal = 24))]
    pub vehicle: String,

    #[validate(length(min = 1, max = 100), custom(function = not_blank))]
    pub company: String,

    pub policy_number: Option<String>,

    #[validate(length(min = 1))]
    pub start_date: String,

    #[validate(length(min = 1))]
    pub end_date: String,

    #[validate(range(min = 0.0))]
    pub cost: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateInterventionRequest {
    #[validate(length(equal = 24))]
    pub vehicle: String,

    #[validate(length(min = 1))]
    pub intervention_date: String,

    #[validate(length(min = 1, max = 100), custom(function = not_blank))]
    pub kind: String,

    pub mileage: Option<u64>,

    #[validate(range(min = 0.0))]
    pub cost: Option<f64>,

    #[validate(custom(function = not_blank))]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTraiteRequest {
    #[validate(length(equal = 24))]
    pub vehicle: String,

    #[validate(length(min = 1))]
    pub due_date: String,

    #[validate(range(min = 0.0))]
    pub amount: f64,

    pub bank: Option<String>,

    #[validate(length(min = 2, max = 50))]
    pub status: Option<String>,
}
