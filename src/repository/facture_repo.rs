use async_trait::async_trait;
use bson::{doc, oid::ObjectId};
use mongodb::Database;
use tracing::{error, info};

use crate::model::facture::Facture;
use crate::repository::mongo::MongoCrud;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};

#[async_trait]
pub trait FactureRepository: Send + Sync {
    async fn create(&self, facture: Facture) -> RepositoryResult<Facture>;
    async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<Facture>;
    async fn update(&self, id: ObjectId, facture: Facture) -> RepositoryResult<Facture>;
    async fn update_payment(
        &self,
        id: ObjectId,
        amount_paid: f64,
        status: &str,
    ) -> RepositoryResult<Facture>;
    async fn delete(&self, id: ObjectId) -> RepositoryResult<()>;
    async fn list(&self, page: u32, limit: u32) -> RepositoryResult<Vec<Facture>>;
    async fn find_by_contract(&self, contract: ObjectId) -> RepositoryResult<Vec<Facture>>;
    async fn find_by_client(&self, client: ObjectId) -> RepositoryResult<Vec<Facture>>;
    async fn count(&self) -> RepositoryResult<u64>;
}

pub struct MongoFactureRepository {
    crud: MongoCrud<Facture>,
}

impl MongoFactureRepository {
    pub fn new(db: &Database) -> Self {
        MongoFactureRepository {
            crud: MongoCrud::new(db),
        }
    }
}

#[async_trait]
impl FactureRepository for MongoFactureRepository {
    #[tracing::instrument(skip(self, facture))]
    async fn create(&self, facture: Facture) -> RepositoryResult<Facture> {
        info!("Creating new facture");
        let res = self.crud.create(facture).await;
        match &res {
            Ok(f) => info!(facture_id = ?f.id, "Facture created successfully"),
            Err(e) => error!("Failed to create facture: {}", e),
        }
        res
    }

    #[tracing::instrument(skip(self), fields(id = %id))]
    async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<Facture> {
        self.crud.get_by_id(id).await
    }

    #[tracing::instrument(skip(self, facture), fields(id = %id))]
    async fn update(&self, id: ObjectId, facture: Facture) -> RepositoryResult<Facture> {
        info!("Updating facture");
        let res = self.crud.update(id, facture).await;
        match &res {
            Ok(_) => info!("Facture updated successfully"),
            Err(e) => error!("Failed to update facture: {}", e),
        }
        res
    }

    #[tracing::instrument(skip(self), fields(id = %id, status = status))]
    async fn update_payment(
        &self,
        id: ObjectId,
        amount_paid: f64,
        status: &str,
    ) -> RepositoryResult<Facture> {
        info!("Updating facture payment state");
        if amount_paid < 0.0 {
            return Err(RepositoryError::ValidationError(
                "amountPaid cannot be negative".into(),
            ));
        }
        self.crud
            .update_fields(id, doc! { "amountPaid": amount_paid, "status": status })
            .await?;
        self.crud.get_by_id(id).await
    }

    #[tracing::instrument(skip(self), fields(id = %id))]
    async fn delete(&self, id: ObjectId) -> RepositoryResult<()> {
        info!("Deleting facture");
        self.crud.delete(id).await
    }

    async fn list(&self, page: u32, limit: u32) -> RepositoryResult<Vec<Facture>> {
        self.crud.list(page, limit).await
    }

    async fn find_by_contract(&self, contract: ObjectId) -> RepositoryResult<Vec<Facture>> {
        self.crud.find_by(doc! { "contract": contract }).await
    }

    async fn find_by_client(&self, client: ObjectId) -> RepositoryResult<Vec<Facture>> {
        self.crud.find_by(doc! { "client": client }).await
    }

    async fn count(&self) -> RepositoryResult<u64> {
        self.crud.count().await
    }
}
