//! Vehicle upkeep: technical inspections, insurance policies, workshop
//! interventions and traites (vehicle financing installments).

use std::sync::Arc;

use bson::oid::ObjectId;
use mongodb::Database;
use tracing::{info, instrument};

use crate::dto::common_dto::UploadedFile;
use crate::dto::fleet_dto::{
    CreateInspectionRequest, CreateInsuranceRequest, CreateInterventionRequest, CreateTraiteRequest,
};
use crate::model::intervention::Intervention;
use crate::model::traite::Traite;
use crate::model::vehicle_inspection::VehicleInspection;
use crate::model::vehicle_insurance::VehicleInsurance;
use crate::repository::fleet_repo::{
    InspectionRepository, InsuranceRepository, InterventionRepository, TraiteRepository,
};
use crate::repository::vehicle_repo::VehicleRepository;
use crate::service::documents;
use crate::service::parse_oid;
use crate::util::error::ServiceError;
use crate::util::minio::ObjectStore;

pub struct FleetService {
    pub inspection_repo: InspectionRepository,
    pub insurance_repo: InsuranceRepository,
    pub intervention_repo: InterventionRepository,
    pub traite_repo: TraiteRepository,
    pub vehicle_repo: VehicleRepository,
    pub store: Arc<dyn ObjectStore>,
}

impl FleetService {
    pub fn new(db: &Database, store: Arc<dyn ObjectStore>) -> Self {
        FleetService {
            inspection_repo: InspectionRepository::new(db),
            insurance_repo: InsuranceRepository::new(db),
            intervention_repo: InterventionRepository::new(db),
            traite_repo: TraiteRepository::new(db),
            vehicle_repo: VehicleRepository::new(db),
            store,
        }
    }

    async fn checked_vehicle(&self, raw: &str) -> Result<ObjectId, ServiceError> {
        let id = parse_oid(raw, "vehicle")?;
        self.vehicle_repo.get_by_id(id).await?;
        Ok(id)
    }

    // --- Inspections ---

    #[instrument(skip(self, request, files))]
    pub async fn create_inspection(
        &self,
        request: CreateInspectionRequest,
        files: Vec<UploadedFile>,
    ) -> Result<VehicleInspection, ServiceError> {
        info!("Recording vehicle inspection");
        let vehicle = self.checked_vehicle(&request.vehicle).await?;
        let inspection = VehicleInspection {
            id: None,
            vehicle,
            inspectionDate: request.inspection_date.clone(),
            expiryDate: request.expiry_date.clone(),
            center: request.center.clone(),
            cost: request.cost.unwrap_or(0.0),
            documents: Vec::new(),
            createdAt: None,
            updatedAt: None,
        };
        let mut created = self.inspection_repo.create(inspection).await?;
        if !files.is_empty() {
            let id = created
                .id
                .ok_or_else(|| ServiceError::InternalError("Created inspection has no id".into()))?;
            let docs =
                documents::upload_files(self.store.as_ref(), "inspections", &id, &files).await?;
            self.inspection_repo.set_documents(id, &docs).await?;
            created.documents = docs;
        }
        Ok(created)
    }

    pub async fn get_inspection(&self, id: ObjectId) -> Result<VehicleInspection, ServiceError> {
        Ok(self.inspection_repo.get_by_id(id).await?)
    }

    pub async fn update_inspection(
        &self,
        id: ObjectId,
        request: CreateInspectionRequest,
        keep_urls: Vec<String>,
        files: Vec<UploadedFile>,
    ) -> Result<VehicleInspection, ServiceError> {
        let existing = self.inspection_repo.get_by_id(id).await?;
        let vehicle = self.checked_vehicle(&request.vehicle).await?;
        let mut updated = VehicleInspection {
            id: None,
            vehicle,
            inspectionDate: request.inspection_date.clone(),
            expiryDate: request.expiry_date.clone(),
            center: request.center.clone(),
            cost: request.cost.unwrap_or(0.0),
            documents: Vec::new(),
            createdAt: existing.createdAt.clone(),
            updatedAt: None,
        };
        let (docs, dropped) = documents::replace_documents(
            self.store.as_ref(),
            "inspections",
            &id,
            existing.documents,
            &keep_urls,
            &files,
        )
        .await?;
        updated.documents = docs;
        let saved = self.inspection_repo.update(id, updated).await?;
        documents::remove_all(self.store.as_ref(), &dropped).await;
        Ok(saved)
    }

    pub async fn delete_inspection(&self, id: ObjectId) -> Result<(), ServiceError> {
        let inspection = self.inspection_repo.get_by_id(id).await?;
        self.inspection_repo.delete(id).await?;
        documents::remove_all(self.store.as_ref(), &inspection.documents).await;
        Ok(())
    }

    pub async fn list_inspections(
        &self,
        page: u32,
        limit: u32,
    ) -> Result<Vec<VehicleInspection>, ServiceError> {
        Ok(self.inspection_repo.list(page, limit).await?)
    }

    pub async fn detach_inspection_document(
        &self,
        id: ObjectId,
        url: &str,
    ) -> Result<VehicleInspection, ServiceError> {
        let inspection = self.inspection_repo.get_by_id(id).await?;
        let docs =
            documents::detach_document(self.store.as_ref(), inspection.documents, url).await?;
        self.inspection_repo.set_documents(id, &docs).await?;
        Ok(self.inspection_repo.get_by_id(id).await?)
    }

    // --- Insurances ---

    #[instrument(skip(self, request, files))]
    pub async fn create_insurance(
        &self,
        request: CreateInsuranceRequest,
        files: Vec<UploadedFile>,
    ) -> Result<VehicleInsurance, ServiceError> {
        info!("Recording vehicle insurance");
        let vehicle = self.checked_vehicle(&request.vehicle).await?;
        let insurance = VehicleInsurance {
            id: None,
            vehicle,
            company: request.company.clone(),
            policyNumber: request.policy_number.clone(),
            startDate: request.start_date.clone(),
            endDate: request.end_date.clone(),
            cost: request.cost.unwrap_or(0.0),
            documents: Vec::new(),
            createdAt: None,
            updatedAt: None,
        };
        let mut created = self.insurance_repo.create(insurance).await?;
        if !files.is_empty() {
            let id = created
                .id
                .ok_or_else(|| ServiceError::InternalError("Created insurance has no id".into()))?;
            let docs =
                documents::upload_files(self.store.as_ref(), "insurances", &id, &files).await?;
            self.insurance_repo.set_documents(id, &docs).await?;
            created.documents = docs;
        }
        Ok(created)
    }

    pub async fn get_insurance(&self, id: ObjectId) -> Result<VehicleInsurance, ServiceError> {
        Ok(self.insurance_repo.get_by_id(id).await?)
    }

    pub async fn update_insurance(
        &self,
        id: ObjectId,
        request: CreateInsuranceRequest,
        keep_urls: Vec<String>,
        files: Vec<UploadedFile>,
    ) -> Result<VehicleInsurance, ServiceError> {
        let existing = self.insurance_repo.get_by_id(id).await?;
        let vehicle = self.checked_vehicle(&request.vehicle).await?;
        let mut updated = VehicleInsurance {
            id: None,
            vehicle,
            company: request.company.clone(),
            policyNumber: request.policy_number.clone(),
            startDate: request.start_date.clone(),
            endDate: request.end_date.clone(),
            cost: request.cost.unwrap_or(0.0),
            documents: Vec::new(),
            createdAt: existing.createdAt.clone(),
            updatedAt: None,
        };
        let (docs, dropped) = documents::replace_documents(
            self.store.as_ref(),
            "insurances",
            &id,
            existing.documents,
            &keep_urls,
            &files,
        )
        .await?;
        updated.documents = docs;
        let saved = self.insurance_repo.update(id, updated).await?;
        documents::remove_all(self.store.as_ref(), &dropped).await;
        Ok(saved)
    }

    pub async fn delete_insurance(&self, id: ObjectId) -> Result<(), ServiceError> {
        let insurance = self.insurance_repo.get_by_id(id).await?;
        self.insurance_repo.delete(id).await?;
        documents::remove_all(self.store.as_ref(), &insurance.documents).await;
        Ok(())
    }

    pub async fn list_insurances(
        &self,
        page: u32,
        limit: u32,
    ) -> Result<Vec<VehicleInsurance>, ServiceError> {
        Ok(self.insurance_repo.list(page, limit).await?)
    }

    pub async fn detach_insurance_document(
        &self,
        id: ObjectId,
        url: &str,
    ) -> Result<VehicleInsurance, ServiceError> {
        let insurance = self.insurance_repo.get_by_id(id).await?;
        let docs =
            documents::detach_document(self.store.as_ref(), insurance.documents, url).await?;
        self.insurance_repo.set_documents(id, &docs).await?;
        Ok(self.insurance_repo.get_by_id(id).await?)
    }

    // --- Interventions ---

    #[instrument(skip(self, request, files))]
    pub async fn create_intervention(
        &self,
        request: CreateInterventionRequest,
        files: Vec<UploadedFile>,
    ) -> Result<Intervention, ServiceError> {
        info!("Recording vehicle intervention");
        let vehicle = self.checked_vehicle(&request.vehicle).await?;
        let intervention = Intervention {
            id: None,
            vehicle,
            interventionDate: request.intervention_date.clone(),
            kind: request.kind.clone(),
            mileage: request.mileage,
            cost: request.cost.unwrap_or(0.0),
            description: request.description.clone(),
            documents: Vec::new(),
            createdAt: None,
            updatedAt: None,
        };
        let mut created = self.intervention_repo.create(intervention).await?;
        if !files.is_empty() {
            let id = created.id.ok_or_else(|| {
                ServiceError::InternalError("Created intervention has no id".into())
            })?;
            let docs =
                documents::upload_files(self.store.as_ref(), "interventions", &id, &files).await?;
            self.intervention_repo.set_documents(id, &docs).await?;
            created.documents = docs;
        }
        Ok(created)
    }

    pub async fn get_intervention(&self, id: ObjectId) -> Result<Intervention, ServiceError> {
        Ok(self.intervention_repo.get_by_id(id).await?)
    }

    pub async fn update_intervention(
        &self,
        id: ObjectId,
        request: CreateInterventionRequest,
        keep_urls: Vec<String>,
        files: Vec<UploadedFile>,
    ) -> Result<Intervention, ServiceError> {
        let existing = self.intervention_repo.get_by_id(id).await?;
        let vehicle = self.checked_vehicle(&request.vehicle).await?;
        let mut updated = Intervention {
            id: None,
            vehicle,
            interventionDate: request.intervention_date.clone(),
            kind: request.kind.clone(),
            mileage: request.mileage,
            cost: request.cost.unwrap_or(0.0),
            description: request.description.clone(),
            documents: Vec::new(),
            createdAt: existing.createdAt.clone(),
            updatedAt: None,
        };
        let (docs, dropped) = documents::replace_documents(
            self.store.as_ref(),
            "interventions",
            &id,
            existing.documents,
            &keep_urls,
            &files,
        )
        .await?;
        updated.documents = docs;
        let saved = self.intervention_repo.update(id, updated).await?;
        documents::remove_all(self.store.as_ref(), &dropped).await;
        Ok(saved)
    }

    pub async fn delete_intervention(&self, id: ObjectId) -> Result<(), ServiceError> {
        let intervention = self.intervention_repo.get_by_id(id).await?;
        self.intervention_repo.delete(id).await?;
        documents::remove_all(self.store.as_ref(), &intervention.documents).await;
        Ok(())
    }

    pub async fn list_interventions(
        &self,
        page: u32,
        limit: u32,
    ) -> Result<Vec<Intervention>, ServiceError> {
        Ok(self.intervention_repo.list(page, limit).await?)
    }

    pub async fn detach_intervention_document(
        &self,
        id: ObjectId,
        url: &str,
    ) -> Result<Intervention, ServiceError> {
        let intervention = self.intervention_repo.get_by_id(id).await?;
        let docs =
            documents::detach_document(self.store.as_ref(), intervention.documents, url).await?;
        self.intervention_repo.set_documents(id, &docs).await?;
        Ok(self.intervention_repo.get_by_id(id).await?)
    }

    // --- Traites ---

    #[instrument(skip(self, request))]
    pub async fn create_traite(&self, request: CreateTraiteRequest) -> Result<Traite, ServiceError> {
        info!("Recording traite");
        let vehicle = self.checked_vehicle(&request.vehicle).await?;
        let traite = Traite {
            id: None,
            vehicle,
            dueDate: request.due_date.clone(),
            amount: request.amount,
            bank: request.bank.clone(),
            status: request.status.clone().unwrap_or_else(|| "impayee".to_string()),
            createdAt: None,
            updatedAt: None,
        };
        Ok(self.traite_repo.create(traite).await?)
    }

    pub async fn get_traite(&self, id: ObjectId) -> Result<Traite, ServiceError> {
        Ok(self.traite_repo.get_by_id(id).await?)
    }

    pub async fn update_traite(
        &self,
        id: ObjectId,
        request: CreateTraiteRequest,
    ) -> Result<Traite, ServiceError> {
        let existing = self.traite_repo.get_by_id(id).await?;
        let vehicle = self.checked_vehicle(&request.vehicle).await?;
        let updated = Traite {
            id: None,
            vehicle,
            dueDate: request.due_date.clone(),
            amount: request.amount,
            bank: request.bank.clone(),
            status: request
                .status
                .clone()
                .unwrap_or_else(|| existing.status.clone()),
            createdAt: existing.createdAt.clone(),
            updatedAt: None,
        };
        Ok(self.traite_repo.update(id, updated).await?)
    }

    pub async fn delete_traite(&self, id: ObjectId) -> Result<(), ServiceError> {
        Ok(self.traite_repo.delete(id).await?)
    }

    pub async fn list_traites(&self, page: u32, limit: u32) -> Result<Vec<Traite>, ServiceError> {
        Ok(self.traite_repo.list(page, limit).await?)
    }
}
