use bson::{doc, oid::ObjectId};
use mongodb::Database;
use tracing::info;

use crate::model::user::User;
use crate::repository::mongo::MongoCrud;
use crate::repository::repository_error::RepositoryResult;

pub struct UserRepository {
    crud: MongoCrud<User>,
}

impl UserRepository {
    pub fn new(db: &Database) -> Self {
        UserRepository {
            crud: MongoCrud::new(db),
        }
    }

    #[tracing::instrument(skip(self, user), fields(username = %user.username))]
    pub async fn create(&self, user: User) -> RepositoryResult<User> {
        info!("Creating user account");
        self.crud.create(user).await
    }

    pub async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<User> {
        self.crud.get_by_id(id).await
    }

    pub async fn update(&self, id: ObjectId, user: User) -> RepositoryResult<User> {
        self.crud.update(id, user).await
    }

    pub async fn delete(&self, id: ObjectId) -> RepositoryResult<()> {
        self.crud.delete(id).await
    }

    pub async fn list(&self, page: u32, limit: u32) -> RepositoryResult<Vec<User>> {
        self.crud.list(page, limit).await
    }

    pub async fn find_by_email(&self, email: &str) -> RepositoryResult<Vec<User>> {
        self.crud.find_by(doc! { "email": email }).await
    }

    pub async fn find_by_username(&self, username: &str) -> RepositoryResult<Vec<User>> {
        self.crud.find_by(doc! { "username": username }).await
    }
}
