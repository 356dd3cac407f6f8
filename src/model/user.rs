use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::model::impl_entity;

/// Back-office account. Session/token handling lives outside this service;
/// only the credential storage is handled here.
#[allow(non_snake_case)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: Option<ObjectId>,
    pub username: String,
    pub email: String,
    pub role: String,
    pub passwordHash: String,
    pub createdAt: Option<String>,
    pub updatedAt: Option<String>,
}

impl_entity!(User, "users");
