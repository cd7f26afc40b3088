//! Template-driven mock JSON generation.
//!
//! A template document describes the shape of the data to synthesize:
//! object keys and array lengths are preserved, while every scalar leaf is
//! replaced with a freshly generated value of the same runtime kind.

pub mod mock;
pub mod scalar;

pub use mock::{mock, mock_many, MAX_MOCK_COUNT};
pub use scalar::{fake, ScalarKind};
