use async_trait::async_trait;
use bson::oid::ObjectId;
use mongodb::Database;
use tracing::{info, instrument};

use crate::dto::facture_dto::CreateFactureRequest;
use crate::model::facture::{Facture, FACTURE_PAID, FACTURE_PARTIALLY_PAID, FACTURE_UNPAID};
use crate::repository::contract_repo::{ContractRepository, MongoContractRepository};
use crate::repository::customer_repo::CustomerRepository;
use crate::repository::facture_repo::{FactureRepository, MongoFactureRepository};
use crate::service::parse_oid;
use crate::util::error::ServiceError;
use crate::util::pricing::{self, VatBreakdown};

/// Payment status derived from how much of the TTC total is settled.
pub fn facture_status(amount_paid: f64, total_ttc: f64) -> &'static str {
    if amount_paid <= 0.0 {
        FACTURE_UNPAID
    } else if amount_paid + pricing::MONEY_EPSILON >= total_ttc {
        FACTURE_PAID
    } else {
        FACTURE_PARTIALLY_PAID
    }
}

/// Completes the VAT quadruple from whichever primitives the request
/// carries. HT plus a percentage or an absolute VAT amount derives
/// forward; a TTC total plus a percentage back-derives the HT base.
fn resolve_vat(request: &CreateFactureRequest) -> Result<VatBreakdown, ServiceError> {
    match (
        request.montant_ht,
        request.tva_percentage,
        request.tva_amount,
        request.total_ttc,
    ) {
        (Some(ht), Some(pct), None, _) => Ok(pricing::invoice_from_ht(ht, pct)),
        (Some(ht), None, Some(amount), _) => Ok(pricing::invoice_from_tva_amount(ht, amount)),
        (None, Some(pct), None, Some(ttc)) => Ok(pricing::invoice_from_total(ttc, pct)),
        (Some(ht), None, None, _) => Ok(pricing::invoice_from_ht(ht, 0.0)),
        _ => Err(ServiceError::InvalidInput(
            "Provide montantHt with tvaPercentage or tvaAmount, or totalTtc with tvaPercentage"
                .to_string(),
        )),
    }
}

#[async_trait]
pub trait FactureService: Send + Sync {
    async fn create_facture(&self, request: CreateFactureRequest) -> Result<Facture, ServiceError>;
    async fn get_facture(&self, id: ObjectId) -> Result<Facture, ServiceError>;
    async fn update_facture(
        &self,
        id: ObjectId,
        request: CreateFactureRequest,
    ) -> Result<Facture, ServiceError>;
    async fn delete_facture(&self, id: ObjectId) -> Result<(), ServiceError>;
    async fn list_factures(&self, page: u32, limit: u32) -> Result<Vec<Facture>, ServiceError>;
    async fn factures_of_client(&self, client: ObjectId) -> Result<Vec<Facture>, ServiceError>;
    async fn factures_of_contract(&self, contract: ObjectId) -> Result<Vec<Facture>, ServiceError>;
}

pub struct FactureServiceImpl {
    pub facture_repo: MongoFactureRepository,
    pub customer_repo: CustomerRepository,
    pub contract_repo: MongoContractRepository,
}

impl FactureServiceImpl {
    pub fn new(db: &Database) -> Self {
        FactureServiceImpl {
            facture_repo: MongoFactureRepository::new(db),
            customer_repo: CustomerRepository::new(db),
            contract_repo: MongoContractRepository::new(db),
        }
    }

    async fn build_facture(&self, request: &CreateFactureRequest) -> Result<Facture, ServiceError> {
        let client = parse_oid(&request.client, "client")?;
        self.customer_repo.get_by_id(client).await?;

        let contract = match &request.contract {
            Some(raw) => {
                let id = parse_oid(raw, "contract")?;
                self.contract_repo.get_by_id(id).await?;
                Some(id)
            }
            None => None,
        };

        let vat = resolve_vat(request)?;
        let amount_paid = request.amount_paid.unwrap_or(0.0);
        if amount_paid > vat.total_ttc + pricing::MONEY_EPSILON {
            return Err(ServiceError::InvalidInput(
                "amountPaid exceeds the invoice total".to_string(),
            ));
        }

        Ok(Facture {
            id: None,
            client,
            contract,
            invoiceDate: request.invoice_date.clone(),
            dueDate: request.due_date.clone(),
            montantHT: vat.montant_ht,
            tvaPercentage: vat.tva_percentage,
            tvaAmount: vat.tva_amount,
            totalTTC: vat.total_ttc,
            paymentType: request.payment_type.clone(),
            amountPaid: amount_paid,
            status: facture_status(amount_paid, vat.total_ttc).to_string(),
            createdAt: None,
            updatedAt: None,
        })
    }
}

#[async_trait]
impl FactureService for FactureServiceImpl {
    #[instrument(skip(self, request))]
    async fn create_facture(&self, request: CreateFactureRequest) -> Result<Facture, ServiceError> {
        info!("Creating facture");
        let facture = self.build_facture(&request).await?;
        Ok(self.facture_repo.create(facture).await?)
    }

    async fn get_facture(&self, id: ObjectId) -> Result<Facture, ServiceError> {
        Ok(self.facture_repo.get_by_id(id).await?)
    }

    #[instrument(skip(self, request), fields(id = %id))]
    async fn update_facture(
        &self,
        id: ObjectId,
        request: CreateFactureRequest,
    ) -> Result<Facture, ServiceError> {
        let existing = self.facture_repo.get_by_id(id).await?;
        let mut facture = self.build_facture(&request).await?;
        if request.amount_paid.is_none() {
            // Payments already recorded survive an invoice edit.
            facture.amountPaid = existing.amountPaid;
            facture.status = facture_status(facture.amountPaid, facture.totalTTC).to_string();
        }
        facture.createdAt = existing.createdAt.clone();
        Ok(self.facture_repo.update(id, facture).await?)
    }

    async fn delete_facture(&self, id: ObjectId) -> Result<(), ServiceError> {
        Ok(self.facture_repo.delete(id).await?)
    }

    async fn list_factures(&self, page: u32, limit: u32) -> Result<Vec<Facture>, ServiceError> {
        Ok(self.facture_repo.list(page, limit).await?)
    }

    async fn factures_of_client(&self, client: ObjectId) -> Result<Vec<Facture>, ServiceError> {
        Ok(self.facture_repo.find_by_client(client).await?)
    }

    async fn factures_of_contract(&self, contract: ObjectId) -> Result<Vec<Facture>, ServiceError> {
        Ok(self.facture_repo.find_by_contract(contract).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_request() -> CreateFactureRequest {
        CreateFactureRequest {
            client: "64b64c3f2f9b256e80f1a001".to_string(),
            contract: None,
            invoice_date: "2025-03-01".to_string(),
            due_date: None,
            montant_ht: None,
            tva_percentage: None,
            tva_amount: None,
            total_ttc: None,
            payment_type: "espece".to_string(),
            amount_paid: None,
        }
    }

    #[test]
    fn test_resolve_vat_prefers_amount_over_percentage_entry() {
        let mut req = base_request();
        req.montant_ht = Some(180.0);
        req.tva_amount = Some(20.0);
        let vat = resolve_vat(&req).unwrap();
        assert!((vat.total_ttc - 200.0).abs() < 1e-9);
        assert!((vat.tva_percentage - 100.0 * 20.0 / 180.0).abs() < 1e-9);
    }

    #[test]
    fn test_resolve_vat_back_derives_ht_from_total() {
        let mut req = base_request();
        req.total_ttc = Some(100.0);
        req.tva_percentage = Some(20.0);
        let vat = resolve_vat(&req).unwrap();
        assert!((vat.montant_ht - 83.333333).abs() < 1e-4);
        assert!((vat.tva_amount - 16.666667).abs() < 1e-4);
    }

    #[test]
    fn test_resolve_vat_rejects_empty_request() {
        let req = base_request();
        assert!(matches!(
            resolve_vat(&req),
            Err(ServiceError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_facture_status_thresholds() {
        assert_eq!(facture_status(0.0, 200.0), FACTURE_UNPAID);
        assert_eq!(facture_status(50.0, 200.0), FACTURE_PARTIALLY_PAID);
        assert_eq!(facture_status(200.0, 200.0), FACTURE_PAID);
    }

    #[test]
    fn test_facture_status_tolerates_float_noise_at_invoice_scale() {
        // Summing instalments leaves noise far above one ULP; a balance
        // settled to within a fraction of a cent counts as paid.
        let paid = 3.0_f64 * (200.0 / 3.0);
        assert_eq!(facture_status(paid, 200.0), FACTURE_PAID);
        assert_eq!(facture_status(200.0 - 1e-9, 200.0), FACTURE_PAID);
        assert_eq!(facture_status(199.99, 200.0), FACTURE_PARTIALLY_PAID);
    }
}
