//! Shared MongoDB plumbing: one client for the whole application and a
//! generic CRUD core the per-entity repositories wrap. Fourteen collections
//! share the same insert/find/update/delete shape; only the domain queries
//! differ.

use bson::{doc, oid::ObjectId, Bson};
use futures::stream::StreamExt;
use mongodb::options::{ClientOptions, Credential, FindOptions, ResolverConfig};
use mongodb::{Client, Collection, Database};
use tracing::{error, info};

use crate::config::mongo_conf::MongoConfig;
use crate::model::document::Document;
use crate::model::Entity;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};

/// Builds the shared database handle from configuration.
pub async fn connect(config: &MongoConfig) -> Result<Database, mongodb::error::Error> {
    let mut client_options =
        ClientOptions::parse_with_resolver_config(&config.uri, ResolverConfig::cloudflare()).await?;
    client_options.app_name = Some("AutolocBackend".to_string());
    client_options.max_pool_size = Some(config.pool_size);
    client_options.connect_timeout =
        Some(std::time::Duration::from_secs(config.connection_timeout_secs));

    if let (Some(ref username), Some(ref password)) = (&config.username, &config.password) {
        client_options.credential = Some(
            Credential::builder()
                .username(username.clone())
                .password(password.clone())
                .build(),
        );
    }

    let client = Client::with_options(client_options)?;
    info!("Connected to MongoDB database '{}'", config.database);
    Ok(client.database(&config.database))
}

pub struct MongoCrud<T: Entity> {
    collection: Collection<T>,
}

impl<T: Entity> MongoCrud<T> {
    pub fn new(db: &Database) -> Self {
        MongoCrud {
            collection: db.collection::<T>(T::COLLECTION),
        }
    }

    pub async fn create(&self, entity: T) -> RepositoryResult<T> {
        let mut new_entity = entity;
        new_entity.set_id(ObjectId::new());
        let now = chrono::Utc::now().to_rfc3339();
        new_entity.touch_created(now.clone());
        new_entity.touch_updated(now);

        match self.collection.insert_one(new_entity.clone(), None).await {
            Ok(_) => Ok(new_entity),
            Err(e) => {
                error!("Failed to insert into {}: {}", T::COLLECTION, e);
                Err(RepositoryError::from(e))
            }
        }
    }

    pub async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<T> {
        let filter = doc! { "_id": id };
        match self.collection.find_one(filter, None).await {
            Ok(Some(entity)) => Ok(entity),
            Ok(None) => Err(RepositoryError::not_found(format!(
                "No {} document for ID: {}",
                T::COLLECTION,
                id
            ))),
            Err(e) => {
                error!("Failed to fetch from {}: {}", T::COLLECTION, e);
                Err(RepositoryError::from(e))
            }
        }
    }

    pub async fn update(&self, id: ObjectId, entity: T) -> RepositoryResult<T> {
        let mut updated = entity;
        updated.touch_updated(chrono::Utc::now().to_rfc3339());

        let mut document = bson::to_document(&updated)?;
        document.remove("_id");
        // Never clobber the creation timestamp with a null from a
        // freshly-built entity.
        if matches!(document.get("createdAt"), Some(Bson::Null)) {
            document.remove("createdAt");
        }

        let filter = doc! { "_id": id };
        let update = doc! { "$set": document };
        match self.collection.update_one(filter, update, None).await {
            Ok(result) if result.matched_count > 0 => Ok(updated),
            Ok(_) => Err(RepositoryError::not_found(format!(
                "No {} document to update for ID: {}",
                T::COLLECTION,
                id
            ))),
            Err(e) => {
                error!("Failed to update {}: {}", T::COLLECTION, e);
                Err(RepositoryError::from(e))
            }
        }
    }

    /// Partial `$set` update; refreshes `updatedAt` alongside.
    pub async fn update_fields(&self, id: ObjectId, mut set: bson::Document) -> RepositoryResult<()> {
        set.insert("updatedAt", chrono::Utc::now().to_rfc3339());
        let filter = doc! { "_id": id };
        let update = doc! { "$set": set };
        match self.collection.update_one(filter, update, None).await {
            Ok(result) if result.matched_count > 0 => Ok(()),
            Ok(_) => Err(RepositoryError::not_found(format!(
                "No {} document to update for ID: {}",
                T::COLLECTION,
                id
            ))),
            Err(e) => Err(RepositoryError::from(e)),
        }
    }

    /// Replaces the embedded document list. The transient `isNew` marker is
    /// stripped before writing; it must never be persisted.
    pub async fn set_documents(&self, id: ObjectId, documents: &[Document]) -> RepositoryResult<()> {
        let persisted: Vec<Document> = documents.iter().map(Document::persisted).collect();
        let value = bson::to_bson(&persisted)?;
        self.update_fields(id, doc! { "documents": value }).await
    }

    pub async fn delete(&self, id: ObjectId) -> RepositoryResult<()> {
        let filter = doc! { "_id": id };
        match self.collection.delete_one(filter, None).await {
            Ok(result) if result.deleted_count > 0 => Ok(()),
            Ok(_) => Err(RepositoryError::not_found(format!(
                "No {} document to delete for ID: {}",
                T::COLLECTION,
                id
            ))),
            Err(e) => {
                error!("Failed to delete from {}: {}", T::COLLECTION, e);
                Err(RepositoryError::from(e))
            }
        }
    }

    pub async fn list(&self, page: u32, limit: u32) -> RepositoryResult<Vec<T>> {
        let options = FindOptions::builder()
            .skip(skip_for(page, limit))
            .limit(limit as i64)
            .build();
        self.find_with(None, Some(options)).await
    }

    pub async fn find_by(&self, filter: bson::Document) -> RepositoryResult<Vec<T>> {
        self.find_with(Some(filter), None).await
    }

    async fn find_with(
        &self,
        filter: Option<bson::Document>,
        options: Option<FindOptions>,
    ) -> RepositoryResult<Vec<T>> {
        let mut cursor = self.collection.find(filter, options).await.map_err(|e| {
            error!("Failed to query {}: {}", T::COLLECTION, e);
            RepositoryError::from(e)
        })?;
        let mut entities = Vec::new();
        while let Some(result) = cursor.next().await {
            entities.push(result.map_err(RepositoryError::from)?);
        }
        Ok(entities)
    }

    pub async fn count(&self) -> RepositoryResult<u64> {
        self.collection
            .count_documents(None, None)
            .await
            .map_err(RepositoryError::from)
    }
}

/// Number of documents to skip for a 1-based page. Widened to u64 before
/// multiplying so an arbitrary page query parameter cannot overflow.
fn skip_for(page: u32, limit: u32) -> u64 {
    (page.max(1) as u64 - 1) * limit as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_for_pages() {
        assert_eq!(skip_for(1, 20), 0);
        assert_eq!(skip_for(3, 20), 40);
        assert_eq!(skip_for(0, 20), 0);
    }

    #[test]
    fn test_skip_for_huge_page_does_not_overflow() {
        assert_eq!(skip_for(u32::MAX, u32::MAX), (u32::MAX as u64 - 1) * u32::MAX as u64);
    }
}
