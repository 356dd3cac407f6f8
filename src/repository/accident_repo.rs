use bson::{doc, oid::ObjectId};
use mongodb::Database;
use tracing::info;

use crate::model::accident::Accident;
use crate::model::document::Document;
use crate::repository::mongo::MongoCrud;
use crate::repository::repository_error::RepositoryResult;

pub struct AccidentRepository {
    crud: MongoCrud<Accident>,
}

impl AccidentRepository {
    pub fn new(db: &Database) -> Self {
        AccidentRepository {
            crud: MongoCrud::new(db),
        }
    }

    #[tracing::instrument(skip(self, accident), fields(vehicle = %accident.vehicle))]
    pub async fn create(&self, accident: Accident) -> RepositoryResult<Accident> {
        info!("Recording accident");
        self.crud.create(accident).await
    }

    pub async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<Accident> {
        self.crud.get_by_id(id).await
    }

    pub async fn update(&self, id: ObjectId, accident: Accident) -> RepositoryResult<Accident> {
        self.crud.update(id, accident).await
    }

    pub async fn set_documents(&self, id: ObjectId, documents: &[Document]) -> RepositoryResult<()> {
        self.crud.set_documents(id, documents).await
    }

    pub async fn delete(&self, id: ObjectId) -> RepositoryResult<()> {
        self.crud.delete(id).await
    }

    pub async fn list(&self, page: u32, limit: u32) -> RepositoryResult<Vec<Accident>> {
        self.crud.list(page, limit).await
    }

    pub async fn find_by_vehicle(&self, vehicle: ObjectId) -> RepositoryResult<Vec<Accident>> {
        self.crud.find_by(doc! { "vehicle": vehicle }).await
    }

    pub async fn count(&self) -> RepositoryResult<u64> {
        self.crud.count().await
    }
}
