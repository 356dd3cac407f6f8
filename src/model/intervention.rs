use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::model::document::Document;
use crate::model::impl_entity;

/// Maintenance intervention on a vehicle (oil change, brakes, bodywork...).
#[allow(non_snake_case)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Intervention {
    #[serde(rename = "_id")]
    pub id: Option<ObjectId>,
    pub vehicle: ObjectId,
    pub interventionDate: String,
    pub kind: String,
    pub mileage: Option<u64>,
    pub cost: f64,
    pub description: Option<String>,
    #[serde(default)]
    pub documents: Vec<Document>,
    pub createdAt: Option<String>,
    pub updatedAt: Option<String>,
}

impl_entity!(Intervention, "interventions");
