use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::model::document::Document;
use crate::model::impl_entity;

#[allow(non_snake_case)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Accident {
    #[serde(rename = "_id")]
    pub id: Option<ObjectId>,
    pub vehicle: ObjectId,
    pub contract: Option<ObjectId>,
    pub accidentDate: String,
    pub location: String,
    pub description: Option<String>,
    #[serde(default)]
    pub repairCost: f64,
    pub status: String,
    #[serde(default)]
    pub documents: Vec<Document>,
    pub createdAt: Option<String>,
    pub updatedAt: Option<String>,
}

impl_entity!(Accident, "accidents");
