use pagesmith_compiler_html::CompileError;
use pagesmith_model::ValidationError;
use thiserror::Error;

/// Failure inside a storage collaborator
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid page record: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No stored page with id '{0}'")]
    Missing(String),

    #[error("Page id '{0}' cannot be used as a file name")]
    InvalidId(String),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

#[derive(Error, Debug)]
pub enum PublishError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("Slug already taken: {0}")]
    SlugConflict(String),

    #[error("Invalid slug: '{0}'")]
    InvalidSlug(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Persistence failure: {0}")]
    Persistence(#[from] StoreError),

    #[error(transparent)]
    Compile(#[from] CompileError),

    #[error("Failed to encode export: {0}")]
    Export(#[from] serde_json::Error),
}

impl PublishError {
    pub(crate) fn page_not_found(id: &str) -> Self {
        PublishError::NotFound {
            kind: "Page",
            id: id.to_string(),
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
pub type PublishResult<T> = Result<T, PublishError>;
