use bson::oid::ObjectId;
use mongodb::Database;
use tracing::{info, instrument};

use crate::dto::charge_dto::CreateChargeRequest;
use crate::model::charge::Charge;
use crate::repository::charge_repo::ChargeRepository;
use crate::util::error::ServiceError;

pub struct ChargeService {
    pub repo: ChargeRepository,
}

impl ChargeService {
    pub fn new(db: &Database) -> Self {
        ChargeService {
            repo: ChargeRepository::new(db),
        }
    }

    fn from_request(request: &CreateChargeRequest) -> Charge {
        Charge {
            id: None,
            label: request.label.clone(),
            chargeDate: request.charge_date.clone(),
            amount: request.amount,
            category: request.category.clone(),
            description: request.description.clone(),
            createdAt: None,
            updatedAt: None,
        }
    }

    #[instrument(skip(self, request), fields(label = %request.label))]
    pub async fn create_charge(&self, request: CreateChargeRequest) -> Result<Charge, ServiceError> {
        info!("Recording charge");
        Ok(self.repo.create(Self::from_request(&request)).await?)
    }

    pub async fn get_charge(&self, id: ObjectId) -> Result<Charge, ServiceError> {
        Ok(self.repo.get_by_id(id).await?)
    }

    pub async fn update_charge(
        &self,
        id: ObjectId,
        request: CreateChargeRequest,
    ) -> Result<Charge, ServiceError> {
        let existing = self.repo.get_by_id(id).await?;
        let mut updated = Self::from_request(&request);
        updated.createdAt = existing.createdAt.clone();
        Ok(self.repo.update(id, updated).await?)
    }

    pub async fn delete_charge(&self, id: ObjectId) -> Result<(), ServiceError> {
        Ok(self.repo.delete(id).await?)
    }

    pub async fn list_charges(&self, page: u32, limit: u32) -> Result<Vec<Charge>, ServiceError> {
        Ok(self.repo.list(page, limit).await?)
    }
}
