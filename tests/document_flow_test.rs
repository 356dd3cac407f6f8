use std::sync::Mutex;

use async_trait::async_trait;
use bson::oid::ObjectId;

use autoloc_backend::dto::common_dto::UploadedFile;
use autoloc_backend::model::document::Document;
use autoloc_backend::service::documents;
use autoloc_backend::util::attachments::DocumentDraft;
use autoloc_backend::util::minio::{MinioError, ObjectStore};

const BASE: &str = "http://localhost:9000/autoloc-documents/";

/// Store stub tracking calls, with a switch to make deletes fail.
struct RecordingStore {
    fail_removes: bool,
    removed: Mutex<Vec<String>>,
    uploaded: Mutex<Vec<String>>,
}

impl RecordingStore {
    fn new(fail_removes: bool) -> Self {
        RecordingStore {
            fail_removes,
            removed: Mutex::new(Vec::new()),
            uploaded: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ObjectStore for RecordingStore {
    async fn put_object(
        &self,
        object_name: &str,
        _data: Vec<u8>,
        _content_type: Option<&str>,
    ) -> Result<(), MinioError> {
        self.uploaded.lock().unwrap().push(object_name.to_string());
        Ok(())
    }

    async fn remove_object(&self, object_name: &str) -> Result<(), MinioError> {
        if self.fail_removes {
            return Err(MinioError::OperationError("delete refused".to_string()));
        }
        self.removed.lock().unwrap().push(object_name.to_string());
        Ok(())
    }

    fn url_for(&self, object_name: &str) -> String {
        format!("{}{}", BASE, object_name)
    }

    fn key_for(&self, url: &str) -> Option<String> {
        url.strip_prefix(BASE).map(String::from)
    }
}

fn stored(key: &str) -> Document {
    Document {
        name: key.rsplit('/').next().unwrap().to_string(),
        content_type: "application/pdf".to_string(),
        size: 128,
        url: format!("{}{}", BASE, key),
        is_new: false,
    }
}

fn upload(name: &str) -> UploadedFile {
    UploadedFile {
        filename: name.to_string(),
        content_type: "image/jpeg".to_string(),
        content: vec![0xFF; 32],
        size: 32,
    }
}

#[tokio::test]
async fn test_update_keeps_listed_documents_and_uploads_new_ones() {
    let store = RecordingStore::new(false);
    let id = ObjectId::new();
    let keep = stored("customers/abc/permis.pdf");
    let drop = stored("customers/abc/ancienne_carte.pdf");

    let (docs, dropped) = documents::replace_documents(
        &store,
        "customers",
        &id,
        vec![keep.clone(), drop.clone()],
        &[keep.url.clone()],
        &[upload("nouvelle_carte.jpg")],
    )
    .await
    .unwrap();

    assert_eq!(docs.len(), 2);
    assert!(docs.iter().any(|d| d.url == keep.url));
    assert_eq!(dropped.len(), 1);
    assert_eq!(dropped[0].url, drop.url);
    let uploaded = store.uploaded.lock().unwrap();
    assert_eq!(uploaded.len(), 1);
    assert!(uploaded[0].starts_with(&format!("customers/{}/", id.to_hex())));
    assert!(uploaded[0].ends_with(".jpg"));
}

#[tokio::test]
async fn test_replaced_list_never_references_deleted_blobs() {
    // A store that refuses deletes must not leave the persisted list
    // pointing at blobs that are gone: replacement only drops entries
    // from the list, the blob deletes happen after the entity write.
    let store = RecordingStore::new(true);
    let id = ObjectId::new();
    let doc = stored("vehicles/abc/assurance.pdf");

    let (docs, dropped) = documents::replace_documents(
        &store,
        "vehicles",
        &id,
        vec![doc.clone()],
        &[],
        &[upload("vignette.jpg")],
    )
    .await
    .unwrap();

    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0].name, "vignette.jpg");
    assert_eq!(dropped.len(), 1);
    assert!(store.removed.lock().unwrap().is_empty());

    // The post-write cleanup is best effort; a refused delete only
    // orphans the blob.
    documents::remove_all(&store, &dropped).await;
    assert!(store.removed.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_detach_document_round_trip() {
    let store = RecordingStore::new(false);
    let doc = stored("contracts/abc/contrat.pdf");

    let docs = documents::detach_document(&store, vec![doc.clone()], &doc.url)
        .await
        .unwrap();

    assert!(docs.is_empty());
    assert_eq!(
        store.removed.lock().unwrap().as_slice(),
        ["contracts/abc/contrat.pdf"]
    );
}

#[tokio::test]
async fn test_draft_restore_after_failed_commit_matches_store_state() {
    let store = RecordingStore::new(true);
    let doc = stored("accidents/abc/constat.pdf");
    let mut draft = DocumentDraft::from_existing(vec![doc.clone()]);
    draft.remove_document(&doc.url);

    let res = documents::commit_removals(&store, &mut draft).await;

    assert!(res.is_err());
    // The document is visible again and no deletion is left pending.
    assert_eq!(draft.documents().len(), 1);
    assert!(draft.pending_deletions().is_empty());
}

#[tokio::test]
async fn test_upload_files_builds_persisted_entries() {
    let store = RecordingStore::new(false);
    let id = ObjectId::new();

    let docs = documents::upload_files(&store, "payments", &id, &[upload("recu.jpg")])
        .await
        .unwrap();

    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0].name, "recu.jpg");
    assert_eq!(docs[0].size, 32);
    assert!(!docs[0].is_new);
    assert!(docs[0].url.starts_with(BASE));
}
