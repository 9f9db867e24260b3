//! Error types for the document model

use crate::Locale;
use thiserror::Error;

/// Rejection of a malformed export envelope or section payload
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Invalid JSON: {0}")]
    Malformed(String),

    #[error("Invalid JSON: missing sections array")]
    MissingSections,

    #[error("Invalid JSON: missing theme")]
    MissingTheme,

    #[error("Invalid theme: {0}")]
    InvalidTheme(String),

    #[error("Section at index {index} is missing `{field}`")]
    MissingSectionField { index: usize, field: &'static str },

    #[error("Section '{section_id}' is missing '{locale}' content")]
    MissingLocale { section_id: String, locale: Locale },

    #[error("Section '{section_id}' has invalid '{locale}' content: {message}")]
    InvalidContent {
        section_id: String,
        locale: Locale,
        message: String,
    },

    #[error("Id '{0}' is used more than once")]
    DuplicateId(String),

    #[error("Element '{element_id}' has invalid content: {message}")]
    InvalidElement { element_id: String, message: String },
}

/// A partial content update that does not fit the section's schema
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContentError {
    #[error("Content patch must be a JSON object")]
    NotAnObject,

    #[error("Content does not match the {kind} schema: {message}")]
    Schema { kind: String, message: String },
}

pub type ModelResult<T> = Result<T, ValidationError>;
