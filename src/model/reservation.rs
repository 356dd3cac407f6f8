use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::model::impl_entity;

#[allow(non_snake_case)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    #[serde(rename = "_id")]
    pub id: Option<ObjectId>,
    pub client: ObjectId,
    pub vehicle: ObjectId,
    pub startDate: String,
    pub endDate: String,
    pub status: String,
    pub note: Option<String>,
    pub createdAt: Option<String>,
    pub updatedAt: Option<String>,
}

impl_entity!(Reservation, "reservations");
