use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::model::document::Document;
use crate::model::impl_entity;

/// Periodic technical inspection record for a vehicle.
#[allow(non_snake_case)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleInspection {
    #[serde(rename = "_id")]
    pub id: Option<ObjectId>,
    pub vehicle: ObjectId,
    pub inspectionDate: String,
    pub expiryDate: Option<String>,
    pub center: Option<String>,
    pub cost: f64,
    #[serde(default)]
    pub documents: Vec<Document>,
    pub createdAt: Option<String>,
    pub updatedAt: Option<String>,
}

impl_entity!(VehicleInspection, "vehicle_inspections");
