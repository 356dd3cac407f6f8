use bson::oid::ObjectId;
use mongodb::Database;
use tracing::info;

use crate::model::charge::Charge;
use crate::repository::mongo::MongoCrud;
use crate::repository::repository_error::RepositoryResult;

pub struct ChargeRepository {
    crud: MongoCrud<Charge>,
}

impl ChargeRepository {
    pub fn new(db: &Database) -> Self {
        ChargeRepository {
            crud: MongoCrud::new(db),
        }
    }

    #[tracing::instrument(skip(self, charge), fields(label = %charge.label))]
    pub async fn create(&self, charge: Charge) -> RepositoryResult<Charge> {
        info!("Recording charge");
        self.crud.create(charge).await
    }

    pub async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<Charge> {
        self.crud.get_by_id(id).await
    }

    pub async fn update(&self, id: ObjectId, charge: Charge) -> RepositoryResult<Charge> {
        self.crud.update(id, charge).await
    }

    pub async fn delete(&self, id: ObjectId) -> RepositoryResult<()> {
        self.crud.delete(id).await
    }

    pub async fn list(&self, page: u32, limit: u32) -> RepositoryResult<Vec<Charge>> {
        self.crud.list(page, limit).await
    }

    pub async fn count(&self) -> RepositoryResult<u64> {
        self.crud.count().await
    }
}
