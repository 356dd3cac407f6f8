use axum::extract::Multipart;
use bson::oid::ObjectId;
use bytes::BytesMut;
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use crate::dto::common_dto::UploadedFile;
use crate::util::error::HandlerError;

pub mod charge_handler;
pub mod contract_handler;
pub mod customer_handler;
pub mod facture_handler;
pub mod fleet_handler;
pub mod incident_handler;
pub mod payment_handler;
pub mod reservation_handler;
pub mod user_handler;
pub mod vehicle_handler;

pub(crate) fn parse_object_id(id: &str, what: &str) -> Result<ObjectId, HandlerError> {
    ObjectId::parse_str(id)
        .map_err(|_| HandlerError::bad_request(format!("Invalid {} id", what)))
}

/// Decoded multipart body: the `json` field, every `file*` part, and the
/// optional `keepDocuments` URL list driving attachment removal on updates.
pub struct MultipartPayload<T> {
    pub data: T,
    pub files: Vec<UploadedFile>,
    pub keep_documents: Option<Vec<String>>,
}

/// Reads a multipart request the way the admin UI sends it: one `json`
/// field with the request payload, any number of `file`/`file0`/... parts,
/// and for updates a `keepDocuments` field listing the stored URLs to keep.
pub async fn parse_multipart<T: DeserializeOwned>(
    mut multipart: Multipart,
) -> Result<MultipartPayload<T>, HandlerError> {
    let mut data: Option<T> = None;
    let mut files: Vec<UploadedFile> = Vec::new();
    let mut keep_documents: Option<Vec<String>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| HandlerError::bad_request(format!("Failed to read multipart field: {}", e)))?
    {
        let name = field.name().map(|s| s.to_string()).unwrap_or_default();
        debug!("Processing multipart field '{}'", name);

        if name == "json" {
            let bytes = field.bytes().await.map_err(|e| {
                HandlerError::bad_request(format!("Failed to read json field: {}", e))
            })?;
            let parsed: T = serde_json::from_slice(&bytes).map_err(|e| {
                error!("Invalid JSON payload: {}", e);
                HandlerError::bad_request(format!("Invalid JSON: {}", e))
            })?;
            data = Some(parsed);
        } else if name == "keepDocuments" {
            let bytes = field.bytes().await.map_err(|e| {
                HandlerError::bad_request(format!("Failed to read keepDocuments field: {}", e))
            })?;
            let urls: Vec<String> = serde_json::from_slice(&bytes).map_err(|e| {
                HandlerError::bad_request(format!("Invalid keepDocuments list: {}", e))
            })?;
            keep_documents = Some(urls);
        } else if name.starts_with("file") {
            let filename = field.file_name().map(|s| s.to_string()).unwrap_or_default();
            let content_type = field
                .content_type()
                .map(|s| s.to_string())
                .unwrap_or_else(|| "application/octet-stream".to_string());

            let mut buf = BytesMut::new();
            let mut stream = field;
            while let Some(chunk) = stream.chunk().await.map_err(|e| {
                HandlerError::bad_request(format!("Failed to read file chunk: {}", e))
            })? {
                buf.extend_from_slice(&chunk);
            }
            debug!("Received file '{}' ({} bytes)", filename, buf.len());
            files.push(UploadedFile {
                filename,
                content_type,
                size: buf.len(),
                content: buf.to_vec(),
            });
        }
    }

    let data = data.ok_or_else(|| HandlerError::bad_request("Missing json field"))?;
    Ok(MultipartPayload {
        data,
        files,
        keep_documents,
    })
}
