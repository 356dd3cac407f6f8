use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::model::document::Document;
use crate::model::impl_entity;

#[allow(non_snake_case)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    #[serde(rename = "_id")]
    pub id: Option<ObjectId>,
    pub firstName: String,
    pub lastName: String,
    pub birthDate: Option<String>,
    pub phone: String,
    pub email: Option<String>,
    pub address: Option<String>,
    pub wilaya: Option<String>,
    pub nationalId: Option<String>,
    pub licenseNumber: String,
    pub licenseDeliveryDate: Option<String>,
    pub licenseExpiryDate: Option<String>,
    #[serde(default)]
    pub documents: Vec<Document>,
    pub createdAt: Option<String>,
    pub updatedAt: Option<String>,
}

impl_entity!(Customer, "customers");
