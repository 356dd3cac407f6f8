//! Repositories for the vehicle upkeep collections. Inspections, insurances
//! and interventions carry attachments; traites are plain records.

use bson::{doc, oid::ObjectId};
use mongodb::Database;
use tracing::info;

use crate::model::document::Document;
use crate::model::intervention::Intervention;
use crate::model::traite::Traite;
use crate::model::vehicle_inspection::VehicleInspection;
use crate::model::vehicle_insurance::VehicleInsurance;
use crate::repository::mongo::MongoCrud;
use crate::repository::repository_error::RepositoryResult;

pub struct InspectionRepository {
    crud: MongoCrud<VehicleInspection>,
}

impl InspectionRepository {
    pub fn new(db: &Database) -> Self {
        InspectionRepository {
            crud: MongoCrud::new(db),
        }
    }

    #[tracing::instrument(skip(self, inspection), fields(vehicle = %inspection.vehicle))]
    pub async fn create(&self, inspection: VehicleInspection) -> RepositoryResult<VehicleInspection> {
        info!("Recording vehicle inspection");
        self.crud.create(inspection).await
    }

    pub async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<VehicleInspection> {
        self.crud.get_by_id(id).await
    }

    pub async fn update(
        &self,
        id: ObjectId,
        inspection: VehicleInspection,
    ) -> RepositoryResult<VehicleInspection> {
        self.crud.update(id, inspection).await
    }

    pub async fn set_documents(&self, id: ObjectId, documents: &[Document]) -> RepositoryResult<()> {
        self.crud.set_documents(id, documents).await
    }

    pub async fn delete(&self, id: ObjectId) -> RepositoryResult<()> {
        self.crud.delete(id).await
    }

    pub async fn list(&self, page: u32, limit: u32) -> RepositoryResult<Vec<VehicleInspection>> {
        self.crud.list(page, limit).await
    }

    pub async fn find_by_vehicle(&self, vehicle: ObjectId) -> RepositoryResult<Vec<VehicleInspection>> {
        self.crud.find_by(doc! { "vehicle": vehicle }).await
    }
}

pub struct InsuranceRepository {
    crud: MongoCrud<VehicleInsurance>,
}

impl InsuranceRepository {
    pub fn new(db: &Database) -> Self {
        InsuranceRepository {
            crud: MongoCrud::new(db),
        }
    }

    #[tracing::instrument(skip(self, insurance), fields(vehicle = %insurance.vehicle))]
    pub async fn create(&self, insurance: VehicleInsurance) -> RepositoryResult<VehicleInsurance> {
        info!("Recording vehicle insurance");
        self.crud.create(insurance).await
    }

    pub async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<VehicleInsurance> {
        self.crud.get_by_id(id).await
    }

    pub async fn update(
        &self,
        id: ObjectId,
        insurance: VehicleInsurance,
    ) -> RepositoryResult<VehicleInsurance> {
        self.crud.update(id, insurance).await
    }

    pub async fn set_documents(&self, id: ObjectId, documents: &[Document]) -> RepositoryResult<()> {
        self.crud.set_documents(id, documents).await
    }

    pub async fn delete(&self, id: ObjectId) -> RepositoryResult<()> {
        self.crud.delete(id).await
    }

    pub async fn list(&self, page: u32, limit: u32) -> RepositoryResult<Vec<VehicleInsurance>> {
        self.crud.list(page, limit).await
    }

    pub async fn find_by_vehicle(&self, vehicle: ObjectId) -> RepositoryResult<Vec<VehicleInsurance>> {
        self.crud.find_by(doc! { "vehicle": vehicle }).await
    }
}

pub struct InterventionRepository {
    crud: MongoCrud<Intervention>,
}

impl InterventionRepository {
    pub fn new(db: &Database) -> Self {
        InterventionRepository {
            crud: MongoCrud::new(db),
        }
    }

    #[tracing::instrument(skip(self, intervention), fields(vehicle = %intervention.vehicle))]
    pub async fn create(&self, intervention: Intervention) -> RepositoryResult<Intervention> {
        info!("Recording vehicle intervention");
        self.crud.create(intervention).await
    }

    pub async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<Intervention> {
        self.crud.get_by_id(id).await
    }

    pub async fn update(&self, id: ObjectId, intervention: Intervention) -> RepositoryResult<Intervention> {
        self.crud.update(id, intervention).await
    }

    pub async fn set_documents(&self, id: ObjectId, documents: &[Document]) -> RepositoryResult<()> {
        self.crud.set_documents(id, documents).await
    }

    pub async fn delete(&self, id: ObjectId) -> RepositoryResult<()> {
        self.crud.delete(id).await
    }

    pub async fn list(&self, page: u32, limit: u32) -> RepositoryResult<Vec<Intervention>> {
        self.crud.list(page, limit).await
    }

    pub async fn find_by_vehicle(&self, vehicle: ObjectId) -> RepositoryResult<Vec<Intervention>> {
        self.crud.find_by(doc! { "vehicle": vehicle }).await
    }
}

pub struct TraiteRepository {
    crud: MongoCrud<Traite>,
}

impl TraiteRepository {
    pub fn new(db: &Database) -> Self {
        TraiteRepository {
            crud: MongoCrud::new(db),
        }
    }

    #[tracing::instrument(skip(self, traite), fields(vehicle = %traite.vehicle))]
    pub async fn create(&self, traite: Traite) -> RepositoryResult<Traite> {
        info!("Recording traite");
        self.crud.create(traite).await
    }

    pub async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<Traite> {
        self.crud.get_by_id(id).await
    }

    pub async fn update(&self, id: ObjectId, traite: Traite) -> RepositoryResult<Traite> {
        self.crud.update(id, traite).await
    }

    pub async fn delete(&self, id: ObjectId) -> RepositoryResult<()> {
        self.crud.delete(id).await
    }

    pub async fn list(&self, page: u32, limit: u32) -> RepositoryResult<Vec<Traite>> {
        self.crud.list(page, limit).await
    }

    pub async fn find_by_vehicle(&self, vehicle: ObjectId) -> RepositoryResult<Vec<Traite>> {
        self.crud.find_by(doc! { "vehicle": vehicle }).await
    }
}
