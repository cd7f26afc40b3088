use thiserror::Error;

/// Errors produced by document analysis.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyzeError {
    /// The input was empty or whitespace-only; the parser never ran.
    #[error("empty input")]
    EmptyInput,

    /// The input was not valid JSON.
    #[error("invalid JSON: {0}")]
    InvalidJson(String),
}

/// Error for the typed diff entry point.
///
/// The session-facing [`crate::diff::compare`] collapses this into the
/// literal sentinel text instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiffInputError {
    /// One side of the comparison was not valid JSON.
    #[error("invalid JSON: {0}")]
    InvalidJson(String),
}

/// A mock template failed to parse.
///
/// Displays as `Error: {message}`, the exact text reported inline in place
/// of the generated result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Error: {0}")]
pub struct MockTemplateError(pub String);
