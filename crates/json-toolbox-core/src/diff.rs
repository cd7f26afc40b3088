use serde_json::Value;
use similar::TextDiff;

use crate::analyze::to_pretty;
use crate::error::DiffInputError;

/// Sentinel returned by [`compare`] when either side fails to parse.
pub const DIFF_ERROR_TEXT: &str = "Error: Invalid JSON";

/// Unified patch between the pretty-printed forms of two JSON texts.
///
/// Both sides are parsed and re-serialized before diffing, so formatting
/// differences in the inputs never show up in the patch.
pub fn diff_documents(left: &str, right: &str) -> Result<String, DiffInputError> {
    let left_doc: Value =
        serde_json::from_str(left).map_err(|err| DiffInputError::InvalidJson(err.to_string()))?;
    let right_doc: Value =
        serde_json::from_str(right).map_err(|err| DiffInputError::InvalidJson(err.to_string()))?;
    let left_pretty = to_pretty(&left_doc);
    let right_pretty = to_pretty(&right_doc);
    let diff = TextDiff::from_lines(left_pretty.as_str(), right_pretty.as_str());
    Ok(diff
        .unified_diff()
        .context_radius(3)
        .header("json", "json")
        .to_string())
}

/// Patch text between two JSON texts, or the literal [`DIFF_ERROR_TEXT`]
/// when either side fails to parse.
pub fn compare(left: &str, right: &str) -> String {
    diff_documents(left, right).unwrap_or_else(|_| DIFF_ERROR_TEXT.to_string())
}
