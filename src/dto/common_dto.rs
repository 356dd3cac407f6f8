use serde::{Deserialize, Serialize};
use validator::Validate;

/// File part extracted from a multipart request.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub filename: String,
    pub content_type: String,
    pub content: Vec<u8>,
    pub size: usize,
}

/// Query-string pagination. Pages are 1-based; callers that omit the
/// parameters get the first page at the default size.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Pagination {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl Pagination {
    pub const DEFAULT_LIMIT: u32 = 20;

    pub fn page(&self) -> u32 {
        self.page.unwrap_or(1).max(1)
    }

    pub fn limit(&self) -> u32 {
        self.limit.unwrap_or(Self::DEFAULT_LIMIT).clamp(1, 100)
    }
}

/// Body of `DELETE /{id}/documents`: the stored URL of the attachment
/// to detach and delete.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DeleteDocumentRequest {
    #[validate(length(min = 1))]
    pub document_url: String,
}
