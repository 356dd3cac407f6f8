use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::model::user::User;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 3, max = 50))]
    pub username: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 2, max = 50))]
    pub role: String,

    #[validate(length(min = 8, max = 128))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 3, max = 50))]
    pub username: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 2, max = 50))]
    pub role: String,

    /// Omitted to keep the current password.
    #[validate(length(min = 8, max = 128))]
    pub password: Option<String>,
}

/// User without the password hash, the only shape handlers return.
#[allow(non_snake_case)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Option<String>,
    pub username: String,
    pub email: String,
    pub role: String,
    pub createdAt: Option<String>,
    pub updatedAt: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            id: user.id.map(|id| id.to_hex()),
            username: user.username,
            email: user.email,
            role: user.role,
            createdAt: user.createdAt,
            updatedAt: user.updatedAt,
        }
    }
}
