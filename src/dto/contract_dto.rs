use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::dto::not_blank;
use crate::model::contract::{Equipment, SecondDriver};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContractExtensionRequest {
    #[validate(range(min = 1))]
    pub additional_duration: u32,

    #[validate(range(min = 0.0))]
    pub price_per_day: f64,
}

/// Create and full-update payload for contracts. Derived fields
/// (`duration`, `total`, `remaining`) are never accepted here; the
/// contract service recomputes them from these primitives.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateContractRequest {
    #[validate(length(equal = 24))]
    pub client: String,

    #[validate(length(equal = 24))]
    pub vehicle: String,

    #[validate(length(min = 1))]
    pub contract_date: String,

    #[validate(length(min = 1))]
    pub departure_date: String,

    pub departure_time: Option<String>,

    #[validate(length(min = 1))]
    pub return_date: String,

    #[validate(range(min = 0.0))]
    pub price_per_day: f64,

    #[validate(range(min = 0.0))]
    pub discount: Option<f64>,

    #[validate(range(min = 0.0))]
    pub guarantee: Option<f64>,

    #[validate(length(min = 1, max = 50))]
    pub payment_type: String,

    #[validate(range(min = 0.0))]
    pub advance: Option<f64>,

    #[validate(custom(function = not_blank))]
    pub pickup_location: Option<String>,

    #[validate(custom(function = not_blank))]
    pub return_location: Option<String>,

    pub second_driver: Option<SecondDriver>,
    pub equipment: Option<Equipment>,

    #[validate(nested)]
    pub extension: Option<ContractExtensionRequest>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateContractStatusRequest {
    #[validate(length(min = 2, max = 50))]
    pub status: String,
}
