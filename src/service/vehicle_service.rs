use std::sync::Arc;

use bson::oid::ObjectId;
use mongodb::Database;
use tracing::{info, instrument};

use crate::dto::common_dto::UploadedFile;
use crate::dto::vehicle_dto::CreateVehicleRequest;
use crate::model::vehicle::{
    Vehicle, VEHICLE_AVAILABLE, VEHICLE_IN_MAINTENANCE, VEHICLE_RENTED,
};
use crate::repository::vehicle_repo::VehicleRepository;
use crate::service::documents;
use crate::util::error::ServiceError;
use crate::util::minio::ObjectStore;

const RESOURCE: &str = "vehicles";

fn validate_status(status: &str) -> Result<(), ServiceError> {
    match status {
        VEHICLE_AVAILABLE | VEHICLE_RENTED | VEHICLE_IN_MAINTENANCE => Ok(()),
        other => Err(ServiceError::InvalidInput(format!(
            "Unknown vehicle status '{}'",
            other
        ))),
    }
}

pub struct VehicleService {
    pub repo: VehicleRepository,
    pub store: Arc<dyn ObjectStore>,
}

impl VehicleService {
    pub fn new(db: &Database, store: Arc<dyn ObjectStore>) -> Self {
        VehicleService {
            repo: VehicleRepository::new(db),
            store,
        }
    }

    fn from_request(request: &CreateVehicleRequest, status: String) -> Vehicle {
        Vehicle {
            id: None,
            brand: request.brand.clone(),
            model: request.model.clone(),
            year: request.year,
            registrationNumber: request.registration_number.clone(),
            chassisNumber: request.chassis_number.clone(),
            color: request.color.clone(),
            fuelType: request.fuel_type.clone(),
            mileage: request.mileage,
            dailyPrice: request.daily_price,
            status,
            documents: Vec::new(),
            createdAt: None,
            updatedAt: None,
        }
    }

    #[instrument(skip(self, request, files), fields(registration = %request.registration_number))]
    pub async fn create_vehicle(
        &self,
        request: CreateVehicleRequest,
        files: Vec<UploadedFile>,
    ) -> Result<Vehicle, ServiceError> {
        info!("Creating vehicle");
        let status = request
            .status
            .clone()
            .unwrap_or_else(|| VEHICLE_AVAILABLE.to_string());
        validate_status(&status)?;

        let duplicates = self
            .repo
            .find_by_registration(&request.registration_number)
            .await?;
        if !duplicates.is_empty() {
            return Err(ServiceError::Conflict(format!(
                "A vehicle with registration '{}' already exists",
                request.registration_number
            )));
        }

        let mut created = self.repo.create(Self::from_request(&request, status)).await?;
        if !files.is_empty() {
            let id = created
                .id
                .ok_or_else(|| ServiceError::InternalError("Created vehicle has no id".into()))?;
            let docs = documents::upload_files(self.store.as_ref(), RESOURCE, &id, &files).await?;
            self.repo.set_documents(id, &docs).await?;
            created.documents = docs;
        }
        Ok(created)
    }

    pub async fn get_vehicle(&self, id: ObjectId) -> Result<Vehicle, ServiceError> {
        Ok(self.repo.get_by_id(id).await?)
    }

    #[instrument(skip(self, request, keep_urls, files), fields(id = %id))]
    pub async fn update_vehicle(
        &self,
        id: ObjectId,
        request: CreateVehicleRequest,
        keep_urls: Vec<String>,
        files: Vec<UploadedFile>,
    ) -> Result<Vehicle, ServiceError> {
        let existing = self.repo.get_by_id(id).await?;
        let status = request.status.clone().unwrap_or_else(|| existing.status.clone());
        validate_status(&status)?;

        let mut updated = Self::from_request(&request, status);
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
        let saved = self.repo.update(id, updated).await?;
        documents::remove_all(self.store.as_ref(), &dropped).await;
        Ok(saved)
    }

    pub async fn delete_vehicle(&self, id: ObjectId) -> Result<(), ServiceError> {
        let vehicle = self.repo.get_by_id(id).await?;
        if vehicle.status == VEHICLE_RENTED {
            return Err(ServiceError::Conflict(
                "Cannot delete a vehicle with a running contract".to_string(),
            ));
        }
        self.repo.delete(id).await?;
        documents::remove_all(self.store.as_ref(), &vehicle.documents).await;
        Ok(())
    }

    pub async fn list_vehicles(&self, page: u32, limit: u32) -> Result<Vec<Vehicle>, ServiceError> {
        Ok(self.repo.list(page, limit).await?)
    }

    pub async fn vehicles_with_status(&self, status: &str) -> Result<Vec<Vehicle>, ServiceError> {
        validate_status(status)?;
        Ok(self.repo.find_by_status(status).await?)
    }

    pub async fn detach_document(&self, id: ObjectId, url: &str) -> Result<Vehicle, ServiceError> {
        let vehicle = self.repo.get_by_id(id).await?;
        let docs = documents::detach_document(self.store.as_ref(), vehicle.documents, url).await?;
        self.repo.set_documents(id, &docs).await?;
        Ok(self.repo.get_by_id(id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_status_accepts_known_values() {
        assert!(validate_status("disponible").is_ok());
        assert!(validate_status("louee").is_ok());
        assert!(validate_status("en_maintenance").is_ok());
    }

    #[test]
    fn test_validate_status_rejects_unknown_value() {
        assert!(matches!(
            validate_status("vendu"),
            Err(ServiceError::InvalidInput(_))
        ));
    }
}
