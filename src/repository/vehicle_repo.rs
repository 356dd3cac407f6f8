use bson::{doc, oid::ObjectId};
use mongodb::Database;
use tracing::info;

use crate::model::document::Document;
use crate::model::vehicle::Vehicle;
use crate::repository::mongo::MongoCrud;
use crate::repository::repository_error::RepositoryResult;

pub struct VehicleRepository {
    crud: MongoCrud<Vehicle>,
}

impl VehicleRepository {
    pub fn new(db: &Database) -> Self {
        VehicleRepository {
            crud: MongoCrud::new(db),
        }
    }

    #[tracing::instrument(skip(self, vehicle), fields(registration = %vehicle.registrationNumber))]
    pub async fn create(&self, vehicle: Vehicle) -> RepositoryResult<Vehicle> {
        info!("Creating new vehicle");
        self.crud.create(vehicle).await
    }

    pub async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<Vehicle> {
        self.crud.get_by_id(id).await
    }

    pub async fn update(&self, id: ObjectId, vehicle: Vehicle) -> RepositoryResult<Vehicle> {
        self.crud.update(id, vehicle).await
    }

    #[tracing::instrument(skip(self), fields(id = %id, status = status))]
    pub async fn update_status(&self, id: ObjectId, status: &str) -> RepositoryResult<()> {
        info!("Updating vehicle status");
        self.crud.update_fields(id, doc! { "status": status }).await
    }

    pub async fn set_documents(&self, id: ObjectId, documents: &[Document]) -> RepositoryResult<()> {
        self.crud.set_documents(id, documents).await
    }

    pub async fn delete(&self, id: ObjectId) -> RepositoryResult<()> {
        self.crud.delete(id).await
    }

    pub async fn list(&self, page: u32, limit: u32) -> RepositoryResult<Vec<Vehicle>> {
        self.crud.list(page, limit).await
    }

    pub async fn find_by_registration(&self, registration: &str) -> RepositoryResult<Vec<Vehicle>> {
        self.crud
            .find_by(doc! { "registrationNumber": registration })
            .await
    }

    pub async fn find_by_status(&self, status: &str) -> RepositoryResult<Vec<Vehicle>> {
        self.crud.find_by(doc! { "status": status }).await
    }

    pub async fn count(&self) -> RepositoryResult<u64> {
        self.crud.count().await
    }
}
