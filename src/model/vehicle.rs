use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::model::document::Document;
use crate::model::impl_entity;

/// Fleet vehicle. `status` uses the French values the admin UI stores:
/// `disponible`, `louee`, `en_maintenance`.
#[allow(non_snake_case)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    #[serde(rename = "_id")]
    pub id: Option<ObjectId>,
    pub brand: String,
    pub model: String,
    pub year: Option<u32>,
    pub registrationNumber: String,
    pub chassisNumber: Option<String>,
    pub color: Option<String>,
    pub fuelType: Option<String>,
    pub mileage: Option<u64>,
    pub dailyPrice: f64,
    pub status: String,
    #[serde(default)]
    pub documents: Vec<Document>,
    pub createdAt: Option<String>,
    pub updatedAt: Option<String>,
}

pub const VEHICLE_AVAILABLE: &str = "disponible";
pub const VEHICLE_RENTED: &str = "louee";
pub const VEHICLE_IN_MAINTENANCE: &str = "en_maintenance";

impl_entity!(Vehicle, "vehicles");
