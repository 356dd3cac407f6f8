use bson::{doc, oid::ObjectId};
use mongodb::Database;
use tracing::info;

use crate::model::client_payment::{ClientPayment, PaymentTarget};
use crate::model::document::Document;
use crate::repository::mongo::MongoCrud;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};

pub struct PaymentRepository {
    crud: MongoCrud<ClientPayment>,
}

impl PaymentRepository {
    pub fn new(db: &Database) -> Self {
        PaymentRepository {
            crud: MongoCrud::new(db),
        }
    }

    #[tracing::instrument(skip(self, payment), fields(target = ?payment.paymentFor))]
    pub async fn create(&self, payment: ClientPayment) -> RepositoryResult<ClientPayment> {
        info!("Recording client payment");
        self.crud.create(payment).await
    }

    pub async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<ClientPayment> {
        self.crud.get_by_id(id).await
    }

    pub async fn update(&self, id: ObjectId, payment: ClientPayment) -> RepositoryResult<ClientPayment> {
        self.crud.update(id, payment).await
    }

    pub async fn set_documents(&self, id: ObjectId, documents: &[Document]) -> RepositoryResult<()> {
        self.crud.set_documents(id, documents).await
    }

    pub async fn delete(&self, id: ObjectId) -> RepositoryResult<()> {
        self.crud.delete(id).await
    }

    pub async fn list(&self, page: u32, limit: u32) -> RepositoryResult<Vec<ClientPayment>> {
        self.crud.list(page, limit).await
    }

    /// Payments recorded against one contract, facture or accident.
    pub async fn find_by_target(
        &self,
        target: PaymentTarget,
        target_id: ObjectId,
    ) -> RepositoryResult<Vec<ClientPayment>> {
        let field = match target {
            PaymentTarget::Contract => "contract",
            PaymentTarget::Facture => "facture",
            PaymentTarget::Accident => "accident",
        };
        let target_bson = bson::to_bson(&target).map_err(RepositoryError::from)?;
        self.crud
            .find_by(doc! { "paymentFor": target_bson, field: target_id })
            .await
    }

    pub async fn count(&self) -> RepositoryResult<u64> {
        self.crud.count().await
    }
}
