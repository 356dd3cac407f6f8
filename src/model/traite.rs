use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::model::impl_entity;

/// Bank draft instalment on a financed vehicle.
#[allow(non_snake_case)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Traite {
    #[serde(rename = "_id")]
    pub id: Option<ObjectId>,
    pub vehicle: ObjectId,
    pub dueDate: String,
    pub amount: f64,
    pub bank: Option<String>,
    pub status: String,
    pub createdAt: Option<String>,
    pub updatedAt: Option<String>,
}

impl_entity!(Traite, "traites");
