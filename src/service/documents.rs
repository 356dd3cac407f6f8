//! Attachment lifecycle shared by every document-bearing resource.
//!
//! Uploads land under `<resource>/<entity id>/<uuid><ext>` in the object
//! store and the resulting public URL is what the entity persists. A
//! single detach is two-phase through [`DocumentDraft`]: staged in the
//! draft, committed only after the store confirmed the delete, and rolled
//! back into the visible list when the delete fails. A full replacement
//! defers the blob deletes until the caller persisted the new list.

use bson::oid::ObjectId;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::dto::common_dto::UploadedFile;
use crate::model::document::Document;
use crate::util::attachments::DocumentDraft;
use crate::util::error::ServiceError;
use crate::util::minio::ObjectStore;

/// Storage key for one uploaded file, namespaced by resource and entity.
pub fn object_key(resource: &str, id: &ObjectId, filename: &str) -> String {
    let ext = std::path::Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e))
        .unwrap_or_default();
    format!("{}/{}/{}{}", resource, id.to_hex(), Uuid::new_v4(), ext)
}

/// Uploads the given files and returns their persisted document entries.
/// Fails on the first upload error; already-uploaded files of the same
/// batch stay in the store but are not referenced by any entity.
pub async fn upload_files<S: ObjectStore + ?Sized>(
    store: &S,
    resource: &str,
    id: &ObjectId,
    files: &[UploadedFile],
) -> Result<Vec<Document>, ServiceError> {
    let mut documents = Vec::with_capacity(files.len());
    for file in files {
        let key = object_key(resource, id, &file.filename);
        store
            .put_object(&key, file.content.clone(), Some(&file.content_type))
            .await?;
        info!(object = %key, "Uploaded attachment");
        documents.push(Document {
            name: file.filename.clone(),
            content_type: file.content_type.clone(),
            size: file.size as u64,
            url: store.url_for(&key),
            is_new: false,
        });
    }
    Ok(documents)
}

/// Drives every pending deletion of the draft through the store. A failed
/// delete restores the document into the visible list and aborts, so the
/// caller persists only removals the store actually performed.
pub async fn commit_removals<S: ObjectStore + ?Sized>(
    store: &S,
    draft: &mut DocumentDraft,
) -> Result<(), ServiceError> {
    let pending: Vec<Document> = draft.pending_deletions().to_vec();
    for doc in pending {
        let Some(key) = store.key_for(&doc.url) else {
            // Foreign URL, nothing to delete in our store.
            warn!(url = %doc.url, "Document URL does not belong to the object store, dropping entry only");
            draft.commit_removal(&doc.url);
            continue;
        };
        match store.remove_object(&key).await {
            Ok(()) => draft.commit_removal(&doc.url),
            Err(e) => {
                error!(object = %key, "Failed to delete attachment, restoring it: {}", e);
                draft.restore(&doc);
                return Err(ServiceError::InternalError(format!(
                    "Failed to delete document '{}': {}",
                    doc.name, e
                )));
            }
        }
    }
    Ok(())
}

/// Full replacement of an entity's document set on update: stored documents
/// absent from `keep_urls` are dropped from the returned list, then
/// `new_files` are uploaded and appended. The dropped documents come back
/// as the second element; callers delete them with [`remove_all`] only
/// after the entity write has committed, so a failed delete can orphan a
/// blob but the entity never references one that is gone.
pub async fn replace_documents<S: ObjectStore + ?Sized>(
    store: &S,
    resource: &str,
    id: &ObjectId,
    existing: Vec<Document>,
    keep_urls: &[String],
    new_files: &[UploadedFile],
) -> Result<(Vec<Document>, Vec<Document>), ServiceError> {
    let mut draft = DocumentDraft::from_existing(existing);
    draft.retain_existing(keep_urls);
    let dropped = draft.pending_deletions().to_vec();

    let mut documents = draft.to_existing_list();
    documents.extend(upload_files(store, resource, id, new_files).await?);
    Ok((documents, dropped))
}

/// Detaches one document by URL and deletes it from the store. Returns the
/// document list to persist on the entity.
pub async fn detach_document<S: ObjectStore + ?Sized>(
    store: &S,
    existing: Vec<Document>,
    url: &str,
) -> Result<Vec<Document>, ServiceError> {
    let mut draft = DocumentDraft::from_existing(existing);
    if draft.remove_document(url).is_none() {
        return Err(ServiceError::NotFound(format!(
            "No document with url '{}'",
            url
        )));
    }
    commit_removals(store, &mut draft).await?;
    Ok(draft.to_existing_list())
}

/// Best-effort cleanup when an entity is deleted. Orphaned objects are
/// logged, never fatal.
pub async fn remove_all<S: ObjectStore + ?Sized>(store: &S, documents: &[Document]) {
    for doc in documents {
        let Some(key) = store.key_for(&doc.url) else {
            continue;
        };
        if let Err(e) = store.remove_object(&key).await {
            warn!(object = %key, "Failed to delete attachment of removed entity: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// In-memory store that can be told to fail deletions.
    struct MockStore {
        fail_removes: bool,
        removed: Mutex<Vec<String>>,
        uploaded: Mutex<Vec<String>>,
    }

    impl MockStore {
        fn new(fail_removes: bool) -> Self {
            MockStore {
                fail_removes,
                removed: Mutex::new(Vec::new()),
                uploaded: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ObjectStore for MockStore {
        async fn put_object(
            &self,
            object_name: &str,
            _data: Vec<u8>,
            _content_type: Option<&str>,
        ) -> Result<(), crate::util::minio::MinioError> {
            self.uploaded.lock().unwrap().push(object_name.to_string());
            Ok(())
        }

        async fn remove_object(&self, object_name: &str) -> Result<(), crate::util::minio::MinioError> {
            if self.fail_removes {
                return Err(crate::util::minio::MinioError::OperationError(
                    "simulated failure".to_string(),
                ));
            }
            self.removed.lock().unwrap().push(object_name.to_string());
            Ok(())
        }

        fn url_for(&self, object_name: &str) -> String {
            format!("http://store.local/bucket/{}", object_name)
        }

        fn key_for(&self, url: &str) -> Option<String> {
            url.strip_prefix("http://store.local/bucket/").map(String::from)
        }
    }

    fn stored_doc(key: &str) -> Document {
        Document {
            name: key.rsplit('/').next().unwrap().to_string(),
            content_type: "application/pdf".to_string(),
            size: 64,
            url: format!("http://store.local/bucket/{}", key),
            is_new: false,
        }
    }

    #[test]
    fn test_object_key_keeps_extension_and_namespaces_by_entity() {
        let id = ObjectId::new();
        let key = object_key("contracts", &id, "permis de conduire.jpg");
        assert!(key.starts_with(&format!("contracts/{}/", id.to_hex())));
        assert!(key.ends_with(".jpg"));
    }

    #[test]
    fn test_object_key_without_extension() {
        let id = ObjectId::new();
        let key = object_key("vehicles", &id, "carte_grise");
        assert!(!key.ends_with('.'));
        assert_eq!(key.matches('/').count(), 2);
    }

    #[tokio::test]
    async fn test_commit_removals_deletes_and_commits() {
        let store = MockStore::new(false);
        let doc = stored_doc("contracts/abc/constat.pdf");
        let mut draft = DocumentDraft::from_existing(vec![doc.clone()]);
        draft.remove_document(&doc.url);

        commit_removals(&store, &mut draft).await.unwrap();

        assert!(draft.pending_deletions().is_empty());
        assert_eq!(
            store.removed.lock().unwrap().as_slice(),
            ["contracts/abc/constat.pdf"]
        );
    }

    #[tokio::test]
    async fn test_failed_store_delete_restores_document() {
        let store = MockStore::new(true);
        let doc = stored_doc("contracts/abc/constat.pdf");
        let mut draft = DocumentDraft::from_existing(vec![doc.clone()]);
        draft.remove_document(&doc.url);

        let res = commit_removals(&store, &mut draft).await;

        assert!(res.is_err());
        assert!(draft.pending_deletions().is_empty());
        assert_eq!(draft.documents().len(), 1);
        assert_eq!(draft.documents()[0].url, doc.url);
    }

    #[tokio::test]
    async fn test_replace_documents_applies_keep_list_and_uploads() {
        let store = MockStore::new(false);
        let id = ObjectId::new();
        let keep = stored_doc("contracts/abc/permis.jpg");
        let drop = stored_doc("contracts/abc/assurance.pdf");
        let new_file = UploadedFile {
            filename: "vignette.png".to_string(),
            content_type: "image/png".to_string(),
            content: vec![0; 16],
            size: 16,
        };

        let (docs, dropped) = replace_documents(
            &store,
            "contracts",
            &id,
            vec![keep.clone(), drop.clone()],
            &[keep.url.clone()],
            &[new_file],
        )
        .await
        .unwrap();

        assert_eq!(docs.len(), 2);
        assert!(docs.iter().any(|d| d.url == keep.url));
        assert!(docs.iter().any(|d| d.name == "vignette.png"));
        assert!(docs.iter().all(|d| !d.is_new));
        assert_eq!(dropped.len(), 1);
        assert_eq!(dropped[0].url, drop.url);
        assert_eq!(store.uploaded.lock().unwrap().len(), 1);
        // Dropped blobs are only deleted once the caller has persisted the
        // new list, never inside the replacement itself.
        assert!(store.removed.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_detach_document_unknown_url_is_not_found() {
        let store = MockStore::new(false);
        let res = detach_document(&store, vec![], "http://store.local/bucket/x.pdf").await;
        assert!(matches!(res, Err(ServiceError::NotFound(_))));
    }
}
