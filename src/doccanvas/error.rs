use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum DocError {
    #[error("Document not found: {0}")]
    DocumentNotFound(Uuid),

    #[error("Page {index} out of range (document has {pages} pages)")]
    PageOutOfRange { index: usize, pages: usize },

    #[error("Element not found: {0}")]
    ElementNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, DocError>;
