use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::model::impl_entity;

/// Agency operating expense (rent, utilities, supplies...).
#[allow(non_snake_case)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Charge {
    #[serde(rename = "_id")]
    pub id: Option<ObjectId>,
    pub label: String,
    pub chargeDate: String,
    pub amount: f64,
    pub category: Option<String>,
    pub description: Option<String>,
    pub createdAt: Option<String>,
    pub updatedAt: Option<String>,
}

impl_entity!(Charge, "charges");
