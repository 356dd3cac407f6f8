use bson::oid::ObjectId;
use mongodb::Database;
use tracing::{info, instrument};

use crate::dto::reservation_dto::CreateReservationRequest;
use crate::model::reservation::Reservation;
use crate::repository::customer_repo::CustomerRepository;
use crate::repository::reservation_repo::ReservationRepository;
use crate::repository::vehicle_repo::VehicleRepository;
use crate::service::parse_oid;
use crate::util::error::ServiceError;
use crate::util::pricing;

pub struct ReservationService {
    pub repo: ReservationRepository,
    pub customer_repo: CustomerRepository,
    pub vehicle_repo: VehicleRepository,
}

impl ReservationService {
    pub fn new(db: &Database) -> Self {
        ReservationService {
            repo: ReservationRepository::new(db),
            customer_repo: CustomerRepository::new(db),
            vehicle_repo: VehicleRepository::new(db),
        }
    }

    async fn build(&self, request: &CreateReservationRequest) -> Result<Reservation, ServiceError> {
        let client = parse_oid(&request.client, "client")?;
        let vehicle = parse_oid(&request.vehicle, "vehicle")?;
        self.customer_repo.get_by_id(client).await?;
        self.vehicle_repo.get_by_id(vehicle).await?;

        // Same date window rule as contracts: the end may not precede the start.
        let start = pricing::parse_date(&request.start_date)?;
        let end = pricing::parse_date(&request.end_date)?;
        if end < start {
            return Err(ServiceError::InvalidInput(
                "endDate precedes startDate".to_string(),
            ));
        }

        Ok(Reservation {
            id: None,
            client,
            vehicle,
            startDate: request.start_date.clone(),
            endDate: request.end_date.clone(),
            status: request
                .status
                .clone()
                .unwrap_or_else(|| "en_attente".to_string()),
            note: request.note.clone(),
            createdAt: None,
            updatedAt: None,
        })
    }

    #[instrument(skip(self, request))]
    pub async fn create_reservation(
        &self,
        request: CreateReservationRequest,
    ) -> Result<Reservation, ServiceError> {
        info!("Creating reservation");
        let reservation = self.build(&request).await?;
        Ok(self.repo.create(reservation).await?)
    }

    pub async fn get_reservation(&self, id: ObjectId) -> Result<Reservation, ServiceError> {
        Ok(self.repo.get_by_id(id).await?)
    }

    pub async fn update_reservation(
        &self,
        id: ObjectId,
        request: CreateReservationRequest,
    ) -> Result<Reservation, ServiceError> {
        let existing = self.repo.get_by_id(id).await?;
        let mut updated = self.build(&request).await?;
        updated.createdAt = existing.createdAt.clone();
        Ok(self.repo.update(id, updated).await?)
    }

    pub async fn delete_reservation(&self, id: ObjectId) -> Result<(), ServiceError> {
        Ok(self.repo.delete(id).await?)
    }

    pub async fn list_reservations(
        &self,
        page: u32,
        limit: u32,
    ) -> Result<Vec<Reservation>, ServiceError> {
        Ok(self.repo.list(page, limit).await?)
    }
}
