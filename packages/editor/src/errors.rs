//! Error types for the editor

use pagesmith_model::ContentError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Mutation error: {0}")]
    Mutation(#[from] MutationError),
}

/// A mutation that names existing nodes but cannot be applied.
///
/// Mutations that reference missing ids are not errors; they apply as
/// no-ops.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MutationError {
    #[error("Invalid content for section '{section_id}': {source}")]
    InvalidContent {
        section_id: String,
        source: ContentError,
    },

    #[error("Duplicate id: {0}")]
    DuplicateId(String),
}
