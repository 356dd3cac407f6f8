use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::model::document::Document;
use crate::model::impl_entity;

/// What a client payment settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentTarget {
    Contract,
    Facture,
    Accident,
}

/// Payment received from a client against a contract, a facture or accident
/// repair costs. `remainingAmount` is computed server-side from the target
/// entity's balance at the time of payment.
#[allow(non_snake_case)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientPayment {
    #[serde(rename = "_id")]
    pub id: Option<ObjectId>,
    pub paymentFor: PaymentTarget,
    pub contract: Option<ObjectId>,
    pub facture: Option<ObjectId>,
    pub accident: Option<ObjectId>,
    pub paymentDate: String,
    pub amountPaid: f64,
    pub remainingAmount: f64,
    pub paymentType: String,
    #[serde(default)]
    pub documents: Vec<Document>,
    pub createdAt: Option<String>,
    pub updatedAt: Option<String>,
}

impl_entity!(ClientPayment, "client_payments");
