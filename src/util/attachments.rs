//! Draft document list for an entity being created or edited.
//!
//! The admin UI edits attachments in place: already-stored documents can be
//! dropped from the keep-list, fresh files are staged before any upload
//! happens. The entity-level update fully replaces the stored document set,
//! so the draft must track three things: the visible list, the raw staged
//! bytes, and removals of persisted documents that still need a storage
//! round-trip. Removing a persisted document is two-phase: it is staged
//! here, committed only once the store confirmed the delete, and restored
//! into the visible list if the delete failed.

use uuid::Uuid;

use crate::model::document::Document;

/// A file added to the draft but not yet uploaded. `reference` doubles as
/// the temporary `url` of the matching [`Document`] entry.
#[derive(Debug, Clone)]
pub struct StagedFile {
    pub reference: String,
    pub filename: String,
    pub content_type: String,
    pub content: Vec<u8>,
}

#[derive(Debug, Default)]
pub struct DocumentDraft {
    documents: Vec<Document>,
    staged: Vec<StagedFile>,
    pending_deletions: Vec<Document>,
}

impl DocumentDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a draft from the documents currently stored on the entity.
    pub fn from_existing(documents: Vec<Document>) -> Self {
        DocumentDraft {
            documents: documents.iter().map(Document::persisted).collect(),
            staged: Vec::new(),
            pending_deletions: Vec::new(),
        }
    }

    /// Stages a new file and appends its draft document entry, returning the
    /// temporary reference under which both are tracked.
    pub fn add_file(&mut self, filename: &str, content_type: &str, content: Vec<u8>) -> String {
        let reference = format!("staged://{}", Uuid::new_v4());
        self.documents.push(Document {
            name: filename.to_string(),
            content_type: content_type.to_string(),
            size: content.len() as u64,
            url: reference.clone(),
            is_new: true,
        });
        self.staged.push(StagedFile {
            reference: reference.clone(),
            filename: filename.to_string(),
            content_type: content_type.to_string(),
            content,
        });
        reference
    }

    /// Removes the document with the given url from the visible list. A
    /// still-staged document disappears entirely; a persisted one moves to
    /// the pending-deletions set awaiting the storage round-trip.
    pub fn remove_document(&mut self, url: &str) -> Option<Document> {
        let pos = self.documents.iter().position(|d| d.url == url)?;
        let doc = self.documents.remove(pos);
        if doc.is_new {
            self.staged.retain(|f| f.reference != doc.url);
        } else {
            self.pending_deletions.push(doc.clone());
        }
        Some(doc)
    }

    /// Stages removals for every persisted document absent from the
    /// keep-list. Omitting a stored document from an update is equivalent
    /// to deleting it.
    pub fn retain_existing(&mut self, keep_urls: &[String]) {
        let dropped: Vec<String> = self
            .documents
            .iter()
            .filter(|d| !d.is_new && !keep_urls.contains(&d.url))
            .map(|d| d.url.clone())
            .collect();
        for url in dropped {
            self.remove_document(&url);
        }
    }

    /// The store confirmed the delete; forget the pending entry.
    pub fn commit_removal(&mut self, url: &str) {
        self.pending_deletions.retain(|d| d.url != url);
    }

    /// The store delete failed; put the document back in the visible list
    /// so local state never drifts from server state.
    pub fn restore(&mut self, doc: &Document) {
        self.pending_deletions.retain(|d| d.url != doc.url);
        if !self.documents.iter().any(|d| d.url == doc.url) {
            self.documents.push(doc.persisted());
        }
    }

    /// The "documents to keep" list an update must submit: every visible
    /// document that is already persisted.
    pub fn to_existing_list(&self) -> Vec<Document> {
        self.documents.iter().filter(|d| !d.is_new).cloned().collect()
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn staged_files(&self) -> &[StagedFile] {
        &self.staged
    }

    pub fn pending_deletions(&self) -> &[Document] {
        &self.pending_deletions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored_doc(name: &str) -> Document {
        Document {
            name: name.to_string(),
            content_type: "application/pdf".to_string(),
            size: 1024,
            url: format!("http://127.0.0.1:9000/autoloc/contracts/abc/{}", name),
            is_new: false,
        }
    }

    #[test]
    fn test_add_then_remove_restores_initial_state() {
        let mut draft = DocumentDraft::new();
        let reference = draft.add_file("permis.jpg", "image/jpeg", vec![1, 2, 3]);
        assert_eq!(draft.documents().len(), 1);
        assert_eq!(draft.staged_files().len(), 1);
        assert!(draft.documents()[0].is_new);

        let removed = draft.remove_document(&reference).expect("staged doc present");
        assert!(removed.is_new);
        assert!(draft.documents().is_empty());
        assert!(draft.staged_files().is_empty());
        assert!(draft.pending_deletions().is_empty());
    }

    #[test]
    fn test_removing_persisted_doc_stages_deletion() {
        let doc = stored_doc("contrat.pdf");
        let mut draft = DocumentDraft::from_existing(vec![doc.clone()]);

        draft.remove_document(&doc.url).expect("doc present");
        assert!(draft.documents().is_empty());
        assert_eq!(draft.pending_deletions().len(), 1);

        draft.commit_removal(&doc.url);
        assert!(draft.pending_deletions().is_empty());
    }

    #[test]
    fn test_failed_deletion_restores_document() {
        let doc = stored_doc("constat.pdf");
        let mut draft = DocumentDraft::from_existing(vec![doc.clone()]);

        let removed = draft.remove_document(&doc.url).expect("doc present");
        // Simulated store failure: the removal is rolled back.
        draft.restore(&removed);

        assert_eq!(draft.documents().len(), 1);
        assert_eq!(draft.documents()[0].url, doc.url);
        assert!(draft.pending_deletions().is_empty());
    }

    #[test]
    fn test_keep_list_drives_removals() {
        let keep = stored_doc("carte_grise.pdf");
        let drop = stored_doc("assurance.pdf");
        let mut draft = DocumentDraft::from_existing(vec![keep.clone(), drop.clone()]);
        draft.add_file("vignette.jpg", "image/jpeg", vec![0; 10]);

        draft.retain_existing(&[keep.url.clone()]);

        assert_eq!(draft.pending_deletions().len(), 1);
        assert_eq!(draft.pending_deletions()[0].url, drop.url);
        // Visible list keeps the kept doc and the staged upload.
        assert_eq!(draft.documents().len(), 2);
        assert_eq!(draft.to_existing_list().len(), 1);
        assert_eq!(draft.to_existing_list()[0].url, keep.url);
    }

    #[test]
    fn test_existing_list_clears_transient_flag() {
        let mut raw = stored_doc("facture.pdf");
        raw.is_new = true; // a client echoing the flag back must not persist it
        let draft = DocumentDraft::from_existing(vec![raw]);
        assert_eq!(draft.to_existing_list().len(), 1);
        assert!(!draft.to_existing_list()[0].is_new);
    }
}
