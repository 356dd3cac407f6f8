use bson::{doc, oid::ObjectId};
use mongodb::Database;
use tracing::info;

use crate::model::reservation::Reservation;
use crate::repository::mongo::MongoCrud;
use crate::repository::repository_error::RepositoryResult;

pub struct ReservationRepository {
    crud: MongoCrud<Reservation>,
}

impl ReservationRepository {
    pub fn new(db: &Database) -> Self {
        ReservationRepository {
            crud: MongoCrud::new(db),
        }
    }

    #[tracing::instrument(skip(self, reservation), fields(client = %reservation.client, vehicle = %reservation.vehicle))]
    pub async fn create(&self, reservation: Reservation) -> RepositoryResult<Reservation> {
        info!("Creating reservation");
        self.crud.create(reservation).await
    }

    pub async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<Reservation> {
        self.crud.get_by_id(id).await
    }

    pub async fn update(&self, id: ObjectId, reservation: Reservation) -> RepositoryResult<Reservation> {
        self.crud.update(id, reservation).await
    }

    pub async fn delete(&self, id: ObjectId) -> RepositoryResult<()> {
        self.crud.delete(id).await
    }

    pub async fn list(&self, page: u32, limit: u32) -> RepositoryResult<Vec<Reservation>> {
        self.crud.list(page, limit).await
    }

    pub async fn find_by_vehicle(&self, vehicle: ObjectId) -> RepositoryResult<Vec<Reservation>> {
        self.crud.find_by(doc! { "vehicle": vehicle }).await
    }

    pub async fn count(&self) -> RepositoryResult<u64> {
        self.crud.count().await
    }
}
