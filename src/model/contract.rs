use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::model::document::Document;
use crate::model::impl_entity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractStatus {
    EnCours,
    Retournee,
}

#[allow(non_snake_case)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecondDriver {
    pub fullName: String,
    pub birthDate: Option<String>,
    pub licenseNumber: String,
    pub licenseDate: Option<String>,
}

#[allow(non_snake_case)]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Equipment {
    #[serde(default)]
    pub spareWheel: bool,
    #[serde(default)]
    pub jack: bool,
    #[serde(default)]
    pub radio: bool,
    #[serde(default)]
    pub babySeat: bool,
}

/// Contract prolongation: extra rental days billed at their own daily rate.
#[allow(non_snake_case)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractExtension {
    pub additionalDuration: u32,
    pub pricePerDay: f64,
}

/// Rental contract. `duration`, `total` and `remaining` are derived fields
/// recomputed by the contract service from the primitive inputs on every
/// create and update; they are stored for listing but never trusted from
/// the client.
#[allow(non_snake_case)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contract {
    #[serde(rename = "_id")]
    pub id: Option<ObjectId>,
    pub client: ObjectId,
    pub vehicle: ObjectId,
    pub contractDate: String,
    pub departureDate: String,
    pub departureTime: Option<String>,
    pub returnDate: String,
    pub duration: u32,
    pub pricePerDay: f64,
    pub discount: f64,
    pub total: f64,
    pub guarantee: f64,
    pub paymentType: String,
    pub advance: f64,
    pub remaining: f64,
    pub status: ContractStatus,
    pub pickupLocation: Option<String>,
    pub returnLocation: Option<String>,
    pub secondDriver: Option<SecondDriver>,
    pub equipment: Option<Equipment>,
    pub extension: Option<ContractExtension>,
    #[serde(default)]
    pub documents: Vec<Document>,
    pub createdAt: Option<String>,
    pub updatedAt: Option<String>,
}

impl_entity!(Contract, "contracts");
