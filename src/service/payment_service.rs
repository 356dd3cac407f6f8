use std::sync::Arc;

use async_trait::async_trait;
use bson::oid::ObjectId;
use mongodb::Database;
use tracing::{info, instrument, warn};

use crate::dto::common_dto::UploadedFile;
use crate::dto::payment_dto::CreatePaymentRequest;
use crate::model::client_payment::{ClientPayment, PaymentTarget};
use crate::repository::accident_repo::AccidentRepository;
use crate::repository::contract_repo::{ContractRepository, MongoContractRepository};
use crate::repository::facture_repo::{FactureRepository, MongoFactureRepository};
use crate::repository::payment_repo::PaymentRepository;
use crate::service::documents;
use crate::service::facture_service::facture_status;
use crate::service::parse_oid;
use crate::util::error::ServiceError;
use crate::util::minio::ObjectStore;
use crate::util::pricing;

const RESOURCE: &str = "payments";

#[async_trait]
pub trait PaymentService: Send + Sync {
    async fn record_payment(
        &self,
        request: CreatePaymentRequest,
        files: Vec<UploadedFile>,
    ) -> Result<ClientPayment, ServiceError>;
    async fn get_payment(&self, id: ObjectId) -> Result<ClientPayment, ServiceError>;
    async fn update_payment(
        &self,
        id: ObjectId,
        request: CreatePaymentRequest,
        keep_urls: Vec<String>,
        files: Vec<UploadedFile>,
    ) -> Result<ClientPayment, ServiceError>;
    async fn delete_payment(&self, id: ObjectId) -> Result<(), ServiceError>;
    async fn list_payments(&self, page: u32, limit: u32) -> Result<Vec<ClientPayment>, ServiceError>;
    async fn payments_of_target(
        &self,
        target: PaymentTarget,
        target_id: ObjectId,
    ) -> Result<Vec<ClientPayment>, ServiceError>;
    async fn detach_document(&self, id: ObjectId, url: &str) -> Result<ClientPayment, ServiceError>;
}

pub struct PaymentServiceImpl {
    pub payment_repo: PaymentRepository,
    pub contract_repo: MongoContractRepository,
    pub facture_repo: MongoFactureRepository,
    pub accident_repo: AccidentRepository,
    pub store: Arc<dyn ObjectStore>,
}

impl PaymentServiceImpl {
    pub fn new(db: &Database, store: Arc<dyn ObjectStore>) -> Self {
        PaymentServiceImpl {
            payment_repo: PaymentRepository::new(db),
            contract_repo: MongoContractRepository::new(db),
            facture_repo: MongoFactureRepository::new(db),
            accident_repo: AccidentRepository::new(db),
            store,
        }
    }

    /// Applies the payment to its target and returns the balance left
    /// after it. Overpaying a target is rejected, never clamped.
    /// `exclude` skips a payment row when summing accident payments, so
    /// an update does not count the row it is replacing.
    async fn settle_target(
        &self,
        target: PaymentTarget,
        target_id: ObjectId,
        amount: f64,
        exclude: Option<ObjectId>,
    ) -> Result<f64, ServiceError> {
        match target {
            PaymentTarget::Contract => {
                let mut contract = self.contract_repo.get_by_id(target_id).await?;
                if amount > contract.remaining + pricing::MONEY_EPSILON {
                    return Err(ServiceError::InvalidInput(format!(
                        "Payment of {} exceeds the contract balance of {}",
                        amount, contract.remaining
                    )));
                }
                contract.advance += amount;
                contract.remaining = pricing::remaining(contract.total, contract.advance);
                let remaining = contract.remaining;
                self.contract_repo.update(target_id, contract).await?;
                Ok(remaining)
            }
            PaymentTarget::Facture => {
                let facture = self.facture_repo.get_by_id(target_id).await?;
                let balance = facture.totalTTC - facture.amountPaid;
                if amount > balance + pricing::MONEY_EPSILON {
                    return Err(ServiceError::InvalidInput(format!(
                        "Payment of {} exceeds the facture balance of {}",
                        amount, balance
                    )));
                }
                let paid = facture.amountPaid + amount;
                self.facture_repo
                    .update_payment(target_id, paid, facture_status(paid, facture.totalTTC))
                    .await?;
                Ok(facture.totalTTC - paid)
            }
            PaymentTarget::Accident => {
                let accident = self.accident_repo.get_by_id(target_id).await?;
                let paid_so_far: f64 = self
                    .payment_repo
                    .find_by_target(PaymentTarget::Accident, target_id)
                    .await?
                    .iter()
                    .filter(|p| exclude.is_none() || p.id != exclude)
                    .map(|p| p.amountPaid)
                    .sum();
                let balance = accident.repairCost - paid_so_far;
                if amount > balance + pricing::MONEY_EPSILON {
                    return Err(ServiceError::InvalidInput(format!(
                        "Payment of {} exceeds the remaining repair cost of {}",
                        amount, balance
                    )));
                }
                Ok(balance - amount)
            }
        }
    }

    /// Undoes the balance feedback of a payment being deleted.
    async fn reverse_target(&self, payment: &ClientPayment) -> Result<(), ServiceError> {
        match payment.paymentFor {
            PaymentTarget::Contract => {
                let Some(id) = payment.contract else { return Ok(()) };
                let mut contract = self.contract_repo.get_by_id(id).await?;
                contract.advance = (contract.advance - payment.amountPaid).max(0.0);
                contract.remaining = pricing::remaining(contract.total, contract.advance);
                self.contract_repo.update(id, contract).await?;
            }
            PaymentTarget::Facture => {
                let Some(id) = payment.facture else { return Ok(()) };
                let facture = self.facture_repo.get_by_id(id).await?;
                let paid = (facture.amountPaid - payment.amountPaid).max(0.0);
                self.facture_repo
                    .update_payment(id, paid, facture_status(paid, facture.totalTTC))
                    .await?;
            }
            PaymentTarget::Accident => {
                // Accident balances are derived from the payment list itself.
            }
        }
        Ok(())
    }

    fn stored_target_id(payment: &ClientPayment) -> Option<ObjectId> {
        match payment.paymentFor {
            PaymentTarget::Contract => payment.contract,
            PaymentTarget::Facture => payment.facture,
            PaymentTarget::Accident => payment.accident,
        }
    }

    fn target_id(
        target: PaymentTarget,
        request: &CreatePaymentRequest,
    ) -> Result<ObjectId, ServiceError> {
        let (raw, what) = match target {
            PaymentTarget::Contract => (&request.contract, "contract"),
            PaymentTarget::Facture => (&request.facture, "facture"),
            PaymentTarget::Accident => (&request.accident, "accident"),
        };
        let raw = raw.as_deref().ok_or_else(|| {
            ServiceError::InvalidInput(format!("paymentFor '{}' requires a {} id", what, what))
        })?;
        parse_oid(raw, what)
    }
}

#[async_trait]
impl PaymentService for PaymentServiceImpl {
    #[instrument(skip(self, request, files), fields(target = ?request.payment_for))]
    async fn record_payment(
        &self,
        request: CreatePaymentRequest,
        files: Vec<UploadedFile>,
    ) -> Result<ClientPayment, ServiceError> {
        info!("Recording client payment");
        if request.amount_paid <= 0.0 {
            return Err(ServiceError::InvalidInput(
                "Payment amount must be positive".to_string(),
            ));
        }

        let target = request.payment_for;
        let target_id = Self::target_id(target, &request)?;
        let remaining = self
            .settle_target(target, target_id, request.amount_paid, None)
            .await?;

        let payment = ClientPayment {
            id: None,
            paymentFor: target,
            contract: (target == PaymentTarget::Contract).then_some(target_id),
            facture: (target == PaymentTarget::Facture).then_some(target_id),
            accident: (target == PaymentTarget::Accident).then_some(target_id),
            paymentDate: request.payment_date.clone(),
            amountPaid: request.amount_paid,
            remainingAmount: remaining,
            paymentType: request.payment_type.clone(),
            documents: Vec::new(),
            createdAt: None,
            updatedAt: None,
        };
        let mut created = self.payment_repo.create(payment).await?;

        if !files.is_empty() {
            let id = created
                .id
                .ok_or_else(|| ServiceError::InternalError("Created payment has no id".into()))?;
            let docs = documents::upload_files(self.store.as_ref(), RESOURCE, &id, &files).await?;
            self.payment_repo.set_documents(id, &docs).await?;
            created.documents = docs;
        }
        Ok(created)
    }

    async fn get_payment(&self, id: ObjectId) -> Result<ClientPayment, ServiceError> {
        Ok(self.payment_repo.get_by_id(id).await?)
    }

    #[instrument(skip(self, request, keep_urls, files), fields(id = %id))]
    async fn update_payment(
        &self,
        id: ObjectId,
        request: CreatePaymentRequest,
        keep_urls: Vec<String>,
        files: Vec<UploadedFile>,
    ) -> Result<ClientPayment, ServiceError> {
        if request.amount_paid <= 0.0 {
            return Err(ServiceError::InvalidInput(
                "Payment amount must be positive".to_string(),
            ));
        }
        let existing = self.payment_repo.get_by_id(id).await?;
        let target = request.payment_for;
        let target_id = Self::target_id(target, &request)?;

        // Undo the old amount before applying the new one, restoring it
        // if the new amount no longer fits the target balance.
        self.reverse_target(&existing).await?;
        let remaining = match self
            .settle_target(target, target_id, request.amount_paid, Some(id))
            .await
        {
            Ok(remaining) => remaining,
            Err(e) => {
                if let Some(old_target) = Self::stored_target_id(&existing) {
                    if let Err(restore) = self
                        .settle_target(existing.paymentFor, old_target, existing.amountPaid, Some(id))
                        .await
                    {
                        warn!("Could not restore payment feedback: {}", restore);
                    }
                }
                return Err(e);
            }
        };

        let mut updated = ClientPayment {
            id: Some(id),
            paymentFor: target,
            contract: (target == PaymentTarget::Contract).then_some(target_id),
            facture: (target == PaymentTarget::Facture).then_some(target_id),
            accident: (target == PaymentTarget::Accident).then_some(target_id),
            paymentDate: request.payment_date.clone(),
            amountPaid: request.amount_paid,
            remainingAmount: remaining,
            paymentType: request.payment_type.clone(),
            documents: Vec::new(),
            createdAt: existing.createdAt.clone(),
            updatedAt: None,
        };
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
        let saved = self.payment_repo.update(id, updated).await?;
        documents::remove_all(self.store.as_ref(), &dropped).await;
        Ok(saved)
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn delete_payment(&self, id: ObjectId) -> Result<(), ServiceError> {
        let payment = self.payment_repo.get_by_id(id).await?;
        if let Err(e) = self.reverse_target(&payment).await {
            warn!("Could not reverse payment feedback: {}", e);
        }
        self.payment_repo.delete(id).await?;
        documents::remove_all(self.store.as_ref(), &payment.documents).await;
        Ok(())
    }

    async fn list_payments(&self, page: u32, limit: u32) -> Result<Vec<ClientPayment>, ServiceError> {
        Ok(self.payment_repo.list(page, limit).await?)
    }

    async fn payments_of_target(
        &self,
        target: PaymentTarget,
        target_id: ObjectId,
    ) -> Result<Vec<ClientPayment>, ServiceError> {
        Ok(self.payment_repo.find_by_target(target, target_id).await?)
    }

    async fn detach_document(&self, id: ObjectId, url: &str) -> Result<ClientPayment, ServiceError> {
        let payment = self.payment_repo.get_by_id(id).await?;
        let docs = documents::detach_document(self.store.as_ref(), payment.documents, url).await?;
        self.payment_repo.set_documents(id, &docs).await?;
        Ok(self.payment_repo.get_by_id(id).await?)
    }
}
