//! Error types for the editor

use storefront_document::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid page: {0}")]
    Validation(#[from] ValidationError),
}
