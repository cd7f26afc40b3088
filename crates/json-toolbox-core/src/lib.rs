//! Core primitives for json-toolbox.
//!
//! The pipeline: raw text goes through [`analyze`] (usually on the
//! [`worker::AnalyzerWorker`] thread) into a document plus [`Stats`]; the
//! [`session::DocumentSession`] installs the result and maintains a
//! [`tree::TreeState`] arena of per-container interaction state. Sorting,
//! mock generation and diffing operate synchronously.

pub mod analyze;
pub mod diff;
pub mod error;
pub mod mock;
pub mod session;
pub mod sort;
pub mod tree;
pub mod worker;

pub use analyze::{analyze, to_pretty, Analysis, Stats};
pub use diff::{compare, diff_documents, DIFF_ERROR_TEXT};
pub use error::{AnalyzeError, DiffInputError, MockTemplateError};
pub use mock::{generate_mock, try_generate_mock};
pub use session::DocumentSession;
pub use sort::{sort_keys, SortDirection};
pub use tree::{copy_text, NodeId, TreeState, COPY_FEEDBACK_DURATION};
pub use worker::{AnalyzeRequest, AnalyzeResponse, AnalyzerWorker};

/// Returns the crate version at compile time.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
