pub mod attachments;
pub mod error;
pub mod logger;
pub mod minio;
pub mod password;
pub mod pricing;
