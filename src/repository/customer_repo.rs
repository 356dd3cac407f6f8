use bson::{doc, oid::ObjectId};
use mongodb::Database;
use tracing::info;

use crate::model::customer::Customer;
use crate::model::document::Document;
use crate::repository::mongo::MongoCrud;
use crate::repository::repository_error::RepositoryResult;

pub struct CustomerRepository {
    crud: MongoCrud<Customer>,
}

impl CustomerRepository {
    pub fn new(db: &Database) -> Self {
        CustomerRepository {
            crud: MongoCrud::new(db),
        }
    }

    #[tracing::instrument(skip(self, customer), fields(license = %customer.licenseNumber))]
    pub async fn create(&self, customer: Customer) -> RepositoryResult<Customer> {
        info!("Creating new customer");
        self.crud.create(customer).await
    }

    pub async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<Customer> {
        self.crud.get_by_id(id).await
    }

    pub async fn update(&self, id: ObjectId, customer: Customer) -> RepositoryResult<Customer> {
        self.crud.update(id, customer).await
    }

    pub async fn set_documents(&self, id: ObjectId, documents: &[Document]) -> RepositoryResult<()> {
        self.crud.set_documents(id, documents).await
    }

    pub async fn delete(&self, id: ObjectId) -> RepositoryResult<()> {
        self.crud.delete(id).await
    }

    pub async fn list(&self, page: u32, limit: u32) -> RepositoryResult<Vec<Customer>> {
        self.crud.list(page, limit).await
    }

    pub async fn find_by_license(&self, license: &str) -> RepositoryResult<Vec<Customer>> {
        self.crud.find_by(doc! { "licenseNumber": license }).await
    }

    pub async fn count(&self) -> RepositoryResult<u64> {
        self.crud.count().await
    }
}
