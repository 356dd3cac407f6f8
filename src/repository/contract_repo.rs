use async_trait::async_trait;
use bson::{doc, oid::ObjectId};
use mongodb::Database;
use tracing::{error, info};

use crate::model::contract::{Contract, ContractStatus};
use crate::model::document::Document;
use crate::repository::mongo::MongoCrud;
use crate::repository::repository_error::RepositoryResult;

#[async_trait]
pub trait ContractRepository: Send + Sync {
    async fn create(&self, contract: Contract) -> RepositoryResult<Contract>;
    async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<Contract>;
    async fn update(&self, id: ObjectId, contract: Contract) -> RepositoryResult<Contract>;
    async fn update_status(&self, id: ObjectId, status: ContractStatus) -> RepositoryResult<Contract>;
    async fn set_documents(&self, id: ObjectId, documents: &[Document]) -> RepositoryResult<()>;
    async fn delete(&self, id: ObjectId) -> RepositoryResult<()>;
    async fn list(&self, page: u32, limit: u32) -> RepositoryResult<Vec<Contract>>;
    async fn find_by_client(&self, client: ObjectId) -> RepositoryResult<Vec<Contract>>;
    async fn find_by_vehicle(&self, vehicle: ObjectId) -> RepositoryResult<Vec<Contract>>;
    async fn count(&self) -> RepositoryResult<u64>;
}

pub struct MongoContractRepository {
    crud: MongoCrud<Contract>,
}

impl MongoContractRepository {
    pub fn new(db: &Database) -> Self {
        MongoContractRepository {
            crud: MongoCrud::new(db),
        }
    }
}

#[async_trait]
impl ContractRepository for MongoContractRepository {
    #[tracing::instrument(skip(self, contract), fields(client = %contract.client, vehicle = %contract.vehicle))]
    async fn create(&self, contract: Contract) -> RepositoryResult<Contract> {
        info!("Creating new contract");
        let res = self.crud.create(contract).await;
        match &res {
            Ok(c) => info!(contract_id = ?c.id, "Contract created successfully"),
            Err(e) => error!("Failed to create contract: {}", e),
        }
        res
    }

    #[tracing::instrument(skip(self), fields(id = %id))]
    async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<Contract> {
        self.crud.get_by_id(id).await
    }

    #[tracing::instrument(skip(self, contract), fields(id = %id))]
    async fn update(&self, id: ObjectId, contract: Contract) -> RepositoryResult<Contract> {
        info!("Updating contract");
        let res = self.crud.update(id, contract).await;
        match &res {
            Ok(_) => info!("Contract updated successfully"),
            Err(e) => error!("Failed to update contract: {}", e),
        }
        res
    }

    #[tracing::instrument(skip(self), fields(id = %id, status = ?status))]
    async fn update_status(&self, id: ObjectId, status: ContractStatus) -> RepositoryResult<Contract> {
        info!("Updating contract status");
        let status_bson = bson::to_bson(&status)
            .map_err(crate::repository::repository_error::RepositoryError::from)?;
        self.crud.update_fields(id, doc! { "status": status_bson }).await?;
        self.crud.get_by_id(id).await
    }

    async fn set_documents(&self, id: ObjectId, documents: &[Document]) -> RepositoryResult<()> {
        self.crud.set_documents(id, documents).await
    }

    #[tracing::instrument(skip(self), fields(id = %id))]
    async fn delete(&self, id: ObjectId) -> RepositoryResult<()> {
        info!("Deleting contract");
        let res = self.crud.delete(id).await;
        match &res {
            Ok(_) => info!("Contract deleted successfully"),
            Err(e) => error!("Failed to delete contract: {}", e),
        }
        res
    }

    #[tracing::instrument(skip(self), fields(page = page, limit = limit))]
    async fn list(&self, page: u32, limit: u32) -> RepositoryResult<Vec<Contract>> {
        self.crud.list(page, limit).await
    }

    async fn find_by_client(&self, client: ObjectId) -> RepositoryResult<Vec<Contract>> {
        self.crud.find_by(doc! { "client": client }).await
    }

    async fn find_by_vehicle(&self, vehicle: ObjectId) -> RepositoryResult<Vec<Contract>> {
        self.crud.find_by(doc! { "vehicle": vehicle }).await
    }

    async fn count(&self) -> RepositoryResult<u64> {
        self.crud.count().await
    }
}
