use serde::{Deserialize, Serialize};

/// Metadata of a file attached to an entity (scanned licence, contract
/// paper, accident report photo...). Embedded in the owning entity; the
/// bytes themselves live in object storage under `url`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub name: String,
    #[serde(rename = "type")]
    pub content_type: String,
    pub size: u64,
    pub url: String,
    /// Transient edit-draft marker: `true` means the file exists only in
    /// the current draft and has not been uploaded yet. Never persisted;
    /// repository writes go through [`Document::persisted`].
    #[serde(default, rename = "isNew", skip_serializing_if = "std::ops::Not::not")]
    pub is_new: bool,
}

impl Document {
    /// Copy of this document with the transient draft marker cleared, as it
    /// must be stored server-side.
    pub fn persisted(&self) -> Document {
        Document {
            is_new: false,
            ..self.clone()
        }
    }
}
