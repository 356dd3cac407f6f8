use std::sync::Arc;

use async_trait::async_trait;
use bson::oid::ObjectId;
use mongodb::Database;
use tracing::{info, instrument, warn};

use crate::dto::common_dto::UploadedFile;
use crate::dto::contract_dto::CreateContractRequest;
use crate::model::contract::{Contract, ContractExtension, ContractStatus};
use crate::model::vehicle;
use crate::repository::contract_repo::{ContractRepository, MongoContractRepository};
use crate::repository::customer_repo::CustomerRepository;
use crate::repository::vehicle_repo::VehicleRepository;
use crate::service::documents;
use crate::service::parse_oid;
use crate::util::error::ServiceError;
use crate::util::minio::ObjectStore;
use crate::util::pricing;

const RESOURCE: &str = "contracts";

#[async_trait]
pub trait ContractService: Send + Sync {
    async fn create_contract(
        &self,
        request: CreateContractRequest,
        files: Vec<UploadedFile>,
    ) -> Result<Contract, ServiceError>;
    async fn get_contract(&self, id: ObjectId) -> Result<Contract, ServiceError>;
    async fn update_contract(
        &self,
        id: ObjectId,
        request: CreateContractRequest,
        keep_urls: Vec<String>,
        files: Vec<UploadedFile>,
    ) -> Result<Contract, ServiceError>;
    async fn update_status(&self, id: ObjectId, status: &str) -> Result<Contract, ServiceError>;
    async fn delete_contract(&self, id: ObjectId) -> Result<(), ServiceError>;
    async fn list_contracts(&self, page: u32, limit: u32) -> Result<Vec<Contract>, ServiceError>;
    async fn contracts_of_client(&self, client: ObjectId) -> Result<Vec<Contract>, ServiceError>;
    async fn contracts_of_vehicle(&self, vehicle: ObjectId) -> Result<Vec<Contract>, ServiceError>;
    async fn detach_document(&self, id: ObjectId, url: &str) -> Result<Contract, ServiceError>;
}

pub struct ContractServiceImpl {
    pub contract_repo: MongoContractRepository,
    pub customer_repo: CustomerRepository,
    pub vehicle_repo: VehicleRepository,
    pub store: Arc<dyn ObjectStore>,
}

impl ContractServiceImpl {
    pub fn new(db: &Database, store: Arc<dyn ObjectStore>) -> Self {
        ContractServiceImpl {
            contract_repo: MongoContractRepository::new(db),
            customer_repo: CustomerRepository::new(db),
            vehicle_repo: VehicleRepository::new(db),
            store,
        }
    }

    /// Recomputes every derived field of a contract from the request
    /// primitives. Client-supplied totals are never trusted.
    fn priced_contract(
        &self,
        request: &CreateContractRequest,
        client: ObjectId,
        vehicle: ObjectId,
    ) -> Result<Contract, ServiceError> {
        let departure = pricing::parse_date_time(
            &request.departure_date,
            request.departure_time.as_deref(),
        )?;
        let ret = pricing::parse_date_time(&request.return_date, None)?;
        let duration = pricing::duration_days(departure, ret)?;

        let discount = request.discount.unwrap_or(0.0);
        let advance = request.advance.unwrap_or(0.0);
        let mut total = pricing::contract_total(request.price_per_day, duration, discount);
        if total < 0.0 {
            return Err(ServiceError::InvalidInput(
                "Discount exceeds the contract price".to_string(),
            ));
        }

        let extension = request.extension.as_ref().map(|ext| ContractExtension {
            additionalDuration: ext.additional_duration,
            pricePerDay: ext.price_per_day,
        });
        if let Some(ext) = &extension {
            total += pricing::contract_total(ext.pricePerDay, ext.additionalDuration, 0.0);
        }

        let remaining = pricing::remaining(total, advance);
        if remaining < 0.0 {
            return Err(ServiceError::InvalidInput(
                "Advance exceeds the contract total".to_string(),
            ));
        }

        Ok(Contract {
            id: None,
            client,
            vehicle,
            contractDate: request.contract_date.clone(),
            departureDate: request.departure_date.clone(),
            departureTime: request.departure_time.clone(),
            returnDate: request.return_date.clone(),
            duration,
            pricePerDay: request.price_per_day,
            discount,
            total,
            guarantee: request.guarantee.unwrap_or(0.0),
            paymentType: request.payment_type.clone(),
            advance,
            remaining,
            status: ContractStatus::EnCours,
            pickupLocation: request.pickup_location.clone(),
            returnLocation: request.return_location.clone(),
            secondDriver: request.second_driver.clone(),
            equipment: request.equipment.clone(),
            extension,
            documents: Vec::new(),
            createdAt: None,
            updatedAt: None,
        })
    }

    async fn require_available_vehicle(&self, id: ObjectId) -> Result<(), ServiceError> {
        let v = self.vehicle_repo.get_by_id(id).await?;
        if v.status != vehicle::VEHICLE_AVAILABLE {
            return Err(ServiceError::Conflict(format!(
                "Vehicle {} is not available (status '{}')",
                id.to_hex(),
                v.status
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl ContractService for ContractServiceImpl {
    #[instrument(skip(self, request, files))]
    async fn create_contract(
        &self,
        request: CreateContractRequest,
        files: Vec<UploadedFile>,
    ) -> Result<Contract, ServiceError> {
        info!("Creating rental contract");
        let client = parse_oid(&request.client, "client")?;
        let vehicle_id = parse_oid(&request.vehicle, "vehicle")?;

        // Both references must exist and the vehicle must be rentable.
        self.customer_repo.get_by_id(client).await?;
        self.require_available_vehicle(vehicle_id).await?;

        let contract = self.priced_contract(&request, client, vehicle_id)?;
        let mut created = self.contract_repo.create(contract).await?;

        if !files.is_empty() {
            let id = created
                .id
                .ok_or_else(|| ServiceError::InternalError("Created contract has no id".into()))?;
            let docs = documents::upload_files(self.store.as_ref(), RESOURCE, &id, &files).await?;
            self.contract_repo.set_documents(id, &docs).await?;
            created.documents = docs;
        }

        self.vehicle_repo
            .update_status(vehicle_id, vehicle::VEHICLE_RENTED)
            .await?;
        Ok(created)
    }

    async fn get_contract(&self, id: ObjectId) -> Result<Contract, ServiceError> {
        Ok(self.contract_repo.get_by_id(id).await?)
    }

    #[instrument(skip(self, request, keep_urls, files), fields(id = %id))]
    async fn update_contract(
        &self,
        id: ObjectId,
        request: CreateContractRequest,
        keep_urls: Vec<String>,
        files: Vec<UploadedFile>,
    ) -> Result<Contract, ServiceError> {
        info!("Updating rental contract");
        let existing = self.contract_repo.get_by_id(id).await?;
        let client = parse_oid(&request.client, "client")?;
        let vehicle_id = parse_oid(&request.vehicle, "vehicle")?;
        self.customer_repo.get_by_id(client).await?;

        // Swapping the vehicle on a running contract frees the old one.
        let vehicle_changed = vehicle_id != existing.vehicle;
        if vehicle_changed {
            self.require_available_vehicle(vehicle_id).await?;
        }

        let mut updated = self.priced_contract(&request, client, vehicle_id)?;
        updated.status = existing.status;
        let (docs, dropped) = documents::replace_documents(
            self.store.as_ref(),
            RESOURCE,
            &id,
            existing.documents,
            &keep_urls,
            &files,
        )
        .await?;
        updated.documents = docs;
        updated.createdAt = existing.createdAt.clone();

        let saved = self.contract_repo.update(id, updated).await?;
        documents::remove_all(self.store.as_ref(), &dropped).await;

        if vehicle_changed && saved.status == ContractStatus::EnCours {
            self.vehicle_repo
                .update_status(existing.vehicle, vehicle::VEHICLE_AVAILABLE)
                .await?;
            self.vehicle_repo
                .update_status(vehicle_id, vehicle::VEHICLE_RENTED)
                .await?;
        }
        Ok(saved)
    }

    #[instrument(skip(self), fields(id = %id, status = status))]
    async fn update_status(&self, id: ObjectId, status: &str) -> Result<Contract, ServiceError> {
        let target = match status {
            "en_cours" => ContractStatus::EnCours,
            "retournee" => ContractStatus::Retournee,
            other => {
                return Err(ServiceError::InvalidInput(format!(
                    "Unknown contract status '{}'",
                    other
                )))
            }
        };

        let current = self.contract_repo.get_by_id(id).await?;
        if current.status == target {
            return Ok(current);
        }

        // Returning a contract frees the vehicle; reopening takes it back.
        match target {
            ContractStatus::Retournee => {
                self.vehicle_repo
                    .update_status(current.vehicle, vehicle::VEHICLE_AVAILABLE)
                    .await?;
            }
            ContractStatus::EnCours => {
                self.require_available_vehicle(current.vehicle).await?;
                self.vehicle_repo
                    .update_status(current.vehicle, vehicle::VEHICLE_RENTED)
                    .await?;
            }
        }
        Ok(self.contract_repo.update_status(id, target).await?)
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn delete_contract(&self, id: ObjectId) -> Result<(), ServiceError> {
        let contract = self.contract_repo.get_by_id(id).await?;
        self.contract_repo.delete(id).await?;

        documents::remove_all(self.store.as_ref(), &contract.documents).await;

        if contract.status == ContractStatus::EnCours {
            if let Err(e) = self
                .vehicle_repo
                .update_status(contract.vehicle, vehicle::VEHICLE_AVAILABLE)
                .await
            {
                warn!("Contract deleted but vehicle status not reset: {}", e);
            }
        }
        Ok(())
    }

    async fn list_contracts(&self, page: u32, limit: u32) -> Result<Vec<Contract>, ServiceError> {
        Ok(self.contract_repo.list(page, limit).await?)
    }

    async fn contracts_of_client(&self, client: ObjectId) -> Result<Vec<Contract>, ServiceError> {
        Ok(self.contract_repo.find_by_client(client).await?)
    }

    async fn contracts_of_vehicle(&self, vehicle: ObjectId) -> Result<Vec<Contract>, ServiceError> {
        Ok(self.contract_repo.find_by_vehicle(vehicle).await?)
    }

    async fn detach_document(&self, id: ObjectId, url: &str) -> Result<Contract, ServiceError> {
        let contract = self.contract_repo.get_by_id(id).await?;
        let docs = documents::detach_document(self.store.as_ref(), contract.documents, url).await?;
        self.contract_repo.set_documents(id, &docs).await?;
        self.contract_repo.get_by_id(id).await.map_err(Into::into)
    }
}
