use std::sync::Arc;

use bson::oid::ObjectId;
use mongodb::Database;
use tracing::{info, instrument};

use crate::dto::common_dto::UploadedFile;
use crate::dto::customer_dto::CreateCustomerRequest;
use crate::model::customer::Customer;
use crate::repository::customer_repo::CustomerRepository;
use crate::service::documents;
use crate::util::error::ServiceError;
use crate::util::minio::ObjectStore;

const RESOURCE: &str = "customers";

pub struct CustomerService {
    pub repo: CustomerRepository,
    pub store: Arc<dyn ObjectStore>,
}

impl CustomerService {
    pub fn new(db: &Database, store: Arc<dyn ObjectStore>) -> Self {
        CustomerService {
            repo: CustomerRepository::new(db),
            store,
        }
    }

    fn from_request(request: &CreateCustomerRequest) -> Customer {
        Customer {
            id: None,
            firstName: request.first_name.clone(),
            lastName: request.last_name.clone(),
            birthDate: request.birth_date.clone(),
            phone: request.phone.clone(),
            email: request.email.clone(),
            address: request.address.clone(),
            wilaya: request.wilaya.clone(),
            nationalId: request.national_id.clone(),
            licenseNumber: request.license_number.clone(),
            licenseDeliveryDate: request.license_delivery_date.clone(),
            licenseExpiryDate: request.license_expiry_date.clone(),
            documents: Vec::new(),
            createdAt: None,
            updatedAt: None,
        }
    }

    #[instrument(skip(self, request, files))]
    pub async fn create_customer(
        &self,
        request: CreateCustomerRequest,
        files: Vec<UploadedFile>,
    ) -> Result<Customer, ServiceError> {
        info!("Creating customer");
        let duplicates = self.repo.find_by_license(&request.license_number).await?;
        if !duplicates.is_empty() {
            return Err(ServiceError::Conflict(format!(
                "A customer with license '{}' already exists",
                request.license_number
            )));
        }

        let mut created = self.repo.create(Self::from_request(&request)).await?;
        if !files.is_empty() {
            let id = created
                .id
                .ok_or_else(|| ServiceError::InternalError("Created customer has no id".into()))?;
            let docs = documents::upload_files(self.store.as_ref(), RESOURCE, &id, &files).await?;
            self.repo.set_documents(id, &docs).await?;
            created.documents = docs;
        }
        Ok(created)
    }

    pub async fn get_customer(&self, id: ObjectId) -> Result<Customer, ServiceError> {
        Ok(self.repo.get_by_id(id).await?)
    }

    #[instrument(skip(self, request, keep_urls, files), fields(id = %id))]
    pub async fn update_customer(
        &self,
        id: ObjectId,
        request: CreateCustomerRequest,
        keep_urls: Vec<String>,
        files: Vec<UploadedFile>,
    ) -> Result<Customer, ServiceError> {
        let existing = self.repo.get_by_id(id).await?;
        let mut updated = Self::from_request(&request);
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

    pub async fn delete_customer(&self, id: ObjectId) -> Result<(), ServiceError> {
        let customer = self.repo.get_by_id(id).await?;
        self.repo.delete(id).await?;
        documents::remove_all(self.store.as_ref(), &customer.documents).await;
        Ok(())
    }

    pub async fn list_customers(&self, page: u32, limit: u32) -> Result<Vec<Customer>, ServiceError> {
        Ok(self.repo.list(page, limit).await?)
    }

    pub async fn detach_document(&self, id: ObjectId, url: &str) -> Result<Customer, ServiceError> {
        let customer = self.repo.get_by_id(id).await?;
        let docs = documents::detach_document(self.store.as_ref(), customer.documents, url).await?;
        self.repo.set_documents(id, &docs).await?;
        Ok(self.repo.get_by_id(id).await?)
    }
}
