//! Accidents and traffic infractions, both tied to a vehicle and both
//! carrying supporting documents (constat, proces-verbal, photos).

use std::sync::Arc;

use bson::oid::ObjectId;
use mongodb::Database;
use tracing::{info, instrument};

use crate::dto::common_dto::UploadedFile;
use crate::dto::incident_dto::{CreateAccidentRequest, CreateInfractionRequest};
use crate::model::accident::Accident;
use crate::model::infraction::Infraction;
use crate::repository::accident_repo::AccidentRepository;
use crate::repository::infraction_repo::InfractionRepository;
use crate::repository::vehicle_repo::VehicleRepository;
use crate::service::documents;
use crate::service::parse_oid;
use crate::util::error::ServiceError;
use crate::util::minio::ObjectStore;

pub struct IncidentService {
    pub accident_repo: AccidentRepository,
    pub infraction_repo: InfractionRepository,
    pub vehicle_repo: VehicleRepository,
    pub store: Arc<dyn ObjectStore>,
}

impl IncidentService {
    pub fn new(db: &Database, store: Arc<dyn ObjectStore>) -> Self {
        IncidentService {
            accident_repo: AccidentRepository::new(db),
            infraction_repo: InfractionRepository::new(db),
            vehicle_repo: VehicleRepository::new(db),
            store,
        }
    }

    async fn build_accident(&self, request: &CreateAccidentRequest) -> Result<Accident, ServiceError> {
        let vehicle = parse_oid(&request.vehicle, "vehicle")?;
        self.vehicle_repo.get_by_id(vehicle).await?;
        let contract = match &request.contract {
            Some(raw) => Some(parse_oid(raw, "contract")?),
            None => None,
        };
        Ok(Accident {
            id: None,
            vehicle,
            contract,
            accidentDate: request.accident_date.clone(),
            location: request.location.clone(),
            description: request.description.clone(),
            repairCost: request.repair_cost.unwrap_or(0.0),
            status: request.status.clone().unwrap_or_else(|| "declare".to_string()),
            documents: Vec::new(),
            createdAt: None,
            updatedAt: None,
        })
    }

    async fn build_infraction(
        &self,
        request: &CreateInfractionRequest,
    ) -> Result<Infraction, ServiceError> {
        let vehicle = parse_oid(&request.vehicle, "vehicle")?;
        self.vehicle_repo.get_by_id(vehicle).await?;
        let client = match &request.client {
            Some(raw) => Some(parse_oid(raw, "client")?),
            None => None,
        };
        Ok(Infraction {
            id: None,
            vehicle,
            client,
            infractionDate: request.infraction_date.clone(),
            kind: request.kind.clone(),
            location: request.location.clone(),
            amount: request.amount,
            status: request.status.clone().unwrap_or_else(|| "impayee".to_string()),
            documents: Vec::new(),
            createdAt: None,
            updatedAt: None,
        })
    }

    // --- Accidents ---

    #[instrument(skip(self, request, files))]
    pub async fn create_accident(
        &self,
        request: CreateAccidentRequest,
        files: Vec<UploadedFile>,
    ) -> Result<Accident, ServiceError> {
        info!("Recording accident");
        let mut created = self
            .accident_repo
            .create(self.build_accident(&request).await?)
            .await?;
        if !files.is_empty() {
            let id = created
                .id
                .ok_or_else(|| ServiceError::InternalError("Created accident has no id".into()))?;
            let docs = documents::upload_files(self.store.as_ref(), "accidents", &id, &files).await?;
            self.accident_repo.set_documents(id, &docs).await?;
            created.documents = docs;
        }
        Ok(created)
    }

    pub async fn get_accident(&self, id: ObjectId) -> Result<Accident, ServiceError> {
        Ok(self.accident_repo.get_by_id(id).await?)
    }

    pub async fn update_accident(
        &self,
        id: ObjectId,
        request: CreateAccidentRequest,
        keep_urls: Vec<String>,
        files: Vec<UploadedFile>,
    ) -> Result<Accident, ServiceError> {
        let existing = self.accident_repo.get_by_id(id).await?;
        let mut updated = self.build_accident(&request).await?;
        let (docs, dropped) = documents::replace_documents(
            self.store.as_ref(),
            "accidents",
            &id,
            existing.documents,
            &keep_urls,
            &files,
        )
        .await?;
        updated.documents = docs;
        updated.createdAt = existing.createdAt.clone();
        let saved = self.accident_repo.update(id, updated).await?;
        documents::remove_all(self.store.as_ref(), &dropped).await;
        Ok(saved)
    }

    pub async fn delete_accident(&self, id: ObjectId) -> Result<(), ServiceError> {
        let accident = self.accident_repo.get_by_id(id).await?;
        self.accident_repo.delete(id).await?;
        documents::remove_all(self.store.as_ref(), &accident.documents).await;
        Ok(())
    }

    pub async fn list_accidents(&self, page: u32, limit: u32) -> Result<Vec<Accident>, ServiceError> {
        Ok(self.accident_repo.list(page, limit).await?)
    }

    pub async fn detach_accident_document(
        &self,
        id: ObjectId,
        url: &str,
    ) -> Result<Accident, ServiceError> {
        let accident = self.accident_repo.get_by_id(id).await?;
        let docs = documents::detach_document(self.store.as_ref(), accident.documents, url).await?;
        self.accident_repo.set_documents(id, &docs).await?;
        Ok(self.accident_repo.get_by_id(id).await?)
    }

    // --- Infractions ---

    #[instrument(skip(self, request, files))]
    pub async fn create_infraction(
        &self,
        request: CreateInfractionRequest,
        files: Vec<UploadedFile>,
    ) -> Result<Infraction, ServiceError> {
        info!("Recording infraction");
        let mut created = self
            .infraction_repo
            .create(self.build_infraction(&request).await?)
            .await?;
        if !files.is_empty() {
            let id = created
                .id
                .ok_or_else(|| ServiceError::InternalError("Created infraction has no id".into()))?;
            let docs =
                documents::upload_files(self.store.as_ref(), "infractions", &id, &files).await?;
            self.infraction_repo.set_documents(id, &docs).await?;
            created.documents = docs;
        }
        Ok(created)
    }

    pub async fn get_infraction(&self, id: ObjectId) -> Result<Infraction, ServiceError> {
        Ok(self.infraction_repo.get_by_id(id).await?)
    }

    pub async fn update_infraction(
        &self,
        id: ObjectId,
        request: CreateInfractionRequest,
        keep_urls: Vec<String>,
        files: Vec<UploadedFile>,
    ) -> Result<Infraction, ServiceError> {
        let existing = self.infraction_repo.get_by_id(id).await?;
        let mut updated = self.build_infraction(&request).await?;
        let (docs, dropped) = documents::replace_documents(
            self.store.as_ref(),
            "infractions",
            &id,
            existing.documents,
            &keep_urls,
            &files,
        )
        .await?;
        updated.documents = docs;
        updated.createdAt = existing.createdAt.clone();
        let saved = self.infraction_repo.update(id, updated).await?;
        documents::remove_all(self.store.as_ref(), &dropped).await;
        Ok(saved)
    }

    pub async fn delete_infraction(&self, id: ObjectId) -> Result<(), ServiceError> {
        let infraction = self.infraction_repo.get_by_id(id).await?;
        self.infraction_repo.delete(id).await?;
        documents::remove_all(self.store.as_ref(), &infraction.documents).await;
        Ok(())
    }

    pub async fn list_infractions(
        &self,
        page: u32,
        limit: u32,
    ) -> Result<Vec<Infraction>, ServiceError> {
        Ok(self.infraction_repo.list(page, limit).await?)
    }

    pub async fn detach_infraction_document(
        &self,
        id: ObjectId,
        url: &str,
    ) -> Result<Infraction, ServiceError> {
        let infraction = self.infraction_repo.get_by_id(id).await?;
        let docs =
            documents::detach_document(self.store.as_ref(), infraction.documents, url).await?;
        self.infraction_repo.set_documents(id, &docs).await?;
        Ok(self.infraction_repo.get_by_id(id).await?)
    }
}
