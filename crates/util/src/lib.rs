//! json-toolbox-util - Utility functions for json-toolbox
//!
//! Leaf helpers shared by the analysis and generation crates: UTF-8 and
//! structural byte sizing, human-readable byte formatting, and the object
//! key comparator used for document sorting.

pub mod byte_size;
pub mod format_bytes;
pub mod key_cmp;

// Re-exports for convenience
pub use byte_size::{structural_byte_size, utf8_size};
pub use format_bytes::format_byte_size;
pub use key_cmp::key_cmp;
