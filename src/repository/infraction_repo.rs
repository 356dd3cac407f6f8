use bson::{doc, oid::ObjectId};
use mongodb::Database;
use tracing::info;

use crate::model::document::Document;
use crate::model::infraction::Infraction;
use crate::repository::mongo::MongoCrud;
use crate::repository::repository_error::RepositoryResult;

pub struct InfractionRepository {
    crud: MongoCrud<Infraction>,
}

impl InfractionRepository {
    pub fn new(db: &Database) -> Self {
        InfractionRepository {
            crud: MongoCrud::new(db),
        }
    }

    #[tracing::instrument(skip(self, infraction), fields(vehicle = %infraction.vehicle))]
    pub async fn create(&self, infraction: Infraction) -> RepositoryResult<Infraction> {
        info!("Recording infraction");
        self.crud.create(infraction).await
    }

    pub async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<Infraction> {
        self.crud.get_by_id(id).await
    }

    pub async fn update(&self, id: ObjectId, infraction: Infraction) -> RepositoryResult<Infraction> {
        self.crud.update(id, infraction).await
    }

    pub async fn set_documents(&self, id: ObjectId, documents: &[Document]) -> RepositoryResult<()> {
        self.crud.set_documents(id, documents).await
    }

    pub async fn delete(&self, id: ObjectId) -> RepositoryResult<()> {
        self.crud.delete(id).await
    }

    pub async fn list(&self, page: u32, limit: u32) -> RepositoryResult<Vec<Infraction>> {
        self.crud.list(page, limit).await
    }

    pub async fn find_by_vehicle(&self, vehicle: ObjectId) -> RepositoryResult<Vec<Infraction>> {
        self.crud.find_by(doc! { "vehicle": vehicle }).await
    }

    pub async fn count(&self) -> RepositoryResult<u64> {
        self.crud.count().await
    }
}
