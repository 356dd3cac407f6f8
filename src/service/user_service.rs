use bson::oid::ObjectId;
use mongodb::Database;
use tracing::{info, instrument};

use crate::dto::user_dto::{CreateUserRequest, UpdateUserRequest, UserResponse};
use crate::model::user::User;
use crate::repository::user_repo::UserRepository;
use crate::util::error::ServiceError;
use crate::util::password;

pub struct UserService {
    pub repo: UserRepository,
}

impl UserService {
    pub fn new(db: &Database) -> Self {
        UserService {
            repo: UserRepository::new(db),
        }
    }

    async fn check_unique(&self, username: &str, email: &str, skip: Option<ObjectId>) -> Result<(), ServiceError> {
        let same_name = self.repo.find_by_username(username).await?;
        if same_name.iter().any(|u| u.id != skip) {
            return Err(ServiceError::Conflict(format!(
                "Username '{}' is already taken",
                username
            )));
        }
        let same_email = self.repo.find_by_email(email).await?;
        if same_email.iter().any(|u| u.id != skip) {
            return Err(ServiceError::Conflict(format!(
                "Email '{}' is already registered",
                email
            )));
        }
        Ok(())
    }

    fn hashed(password: &str) -> Result<String, ServiceError> {
        password::validate_password_strength(password)
            .map_err(|issues| ServiceError::InvalidInput(issues.join("; ")))?;
        password::hash_password(password)
            .map_err(|e| ServiceError::InternalError(e.to_string()))
    }

    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn create_user(&self, request: CreateUserRequest) -> Result<UserResponse, ServiceError> {
        info!("Creating user account");
        self.check_unique(&request.username, &request.email, None).await?;
        let user = User {
            id: None,
            username: request.username.clone(),
            email: request.email.clone(),
            role: request.role.clone(),
            passwordHash: Self::hashed(&request.password)?,
            createdAt: None,
            updatedAt: None,
        };
        Ok(self.repo.create(user).await?.into())
    }

    pub async fn get_user(&self, id: ObjectId) -> Result<UserResponse, ServiceError> {
        Ok(self.repo.get_by_id(id).await?.into())
    }

    #[instrument(skip(self, request), fields(id = %id))]
    pub async fn update_user(
        &self,
        id: ObjectId,
        request: UpdateUserRequest,
    ) -> Result<UserResponse, ServiceError> {
        let existing = self.repo.get_by_id(id).await?;
        self.check_unique(&request.username, &request.email, Some(id)).await?;
        let password_hash = match &request.password {
            Some(p) => Self::hashed(p)?,
            None => existing.passwordHash.clone(),
        };
        let user = User {
            id: None,
            username: request.username.clone(),
            email: request.email.clone(),
            role: request.role.clone(),
            passwordHash: password_hash,
            createdAt: existing.createdAt.clone(),
            updatedAt: None,
        };
        Ok(self.repo.update(id, user).await?.into())
    }

    pub async fn delete_user(&self, id: ObjectId) -> Result<(), ServiceError> {
        Ok(self.repo.delete(id).await?)
    }

    pub async fn list_users(&self, page: u32, limit: u32) -> Result<Vec<UserResponse>, ServiceError> {
        let users = self.repo.list(page, limit).await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }
}
