use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::model::document::Document;
use crate::model::impl_entity;

/// Traffic infraction (fine) received for a vehicle, charged back to the
/// client renting it at the time.
#[allow(non_snake_case)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Infraction {
    #[serde(rename = "_id")]
    pub id: Option<ObjectId>,
    pub vehicle: ObjectId,
    pub client: Option<ObjectId>,
    pub infractionDate: String,
    pub kind: String,
    pub location: Option<String>,
    pub amount: f64,
    pub status: String,
    #[serde(default)]
    pub documents: Vec<Document>,
    pub createdAt: Option<String>,
    pub updatedAt: Option<String>,
}

impl_entity!(Infraction, "infractions");
