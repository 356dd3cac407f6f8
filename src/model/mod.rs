pub mod accident;
pub mod charge;
pub mod client_payment;
pub mod contract;
pub mod customer;
pub mod document;
pub mod facture;
pub mod infraction;
pub mod intervention;
pub mod reservation;
pub mod traite;
pub mod user;
pub mod vehicle;
pub mod vehicle_inspection;
pub mod vehicle_insurance;

use bson::oid::ObjectId;

/// Implemented by every stored entity so the generic Mongo CRUD layer can
/// assign ids and maintain the `createdAt`/`updatedAt` timestamps.
pub trait Entity:
    serde::Serialize + serde::de::DeserializeOwned + Clone + Unpin + Send + Sync
{
    const COLLECTION: &'static str;

    fn id(&self) -> Option<ObjectId>;
    fn set_id(&mut self, id: ObjectId);
    fn touch_created(&mut self, now: String);
    fn touch_updated(&mut self, now: String);
}

macro_rules! impl_entity {
    ($ty:ident, $collection:literal) => {
        impl crate::model::Entity for $ty {
            const COLLECTION: &'static str = $collection;

            fn id(&self) -> Option<bson::oid::ObjectId> {
                self.id
            }

            fn set_id(&mut self, id: bson::oid::ObjectId) {
                self.id = Some(id);
            }

            fn touch_created(&mut self, now: String) {
                self.createdAt = Some(now);
            }

            fn touch_updated(&mut self, now: String) {
                self.updatedAt = Some(now);
            }
        }
    };
}

pub(crate) use impl_entity;
