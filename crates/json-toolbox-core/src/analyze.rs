use serde_json::Value;

use json_toolbox_util::{format_byte_size, utf8_size};

use crate::error::AnalyzeError;

/// Structural statistics for one analyzed document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stats {
    /// Characters in the pretty-printed serialization.
    pub char_count: usize,
    /// Maximum container nesting; the root container sits at 0.
    pub depth: usize,
    /// Object keys across all levels.
    pub key_count: usize,
    /// Array nodes across all levels.
    pub array_count: usize,
    /// Object nodes across all levels.
    pub object_count: usize,
    /// Structural byte size: UTF-8 lengths of object keys and string
    /// leaves. Distinct from `raw_byte_size`.
    pub byte_size: usize,
    /// UTF-8 byte length of the raw input text.
    pub raw_byte_size: usize,
    /// `byte_size` rendered for display.
    pub formatted_byte_size: String,
}

/// Result of a successful analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub document: Value,
    /// Two-space pretty print of `document`.
    pub formatted: String,
    pub stats: Stats,
}

/// Pretty-print a document with two-space indentation.
///
/// Serializing an in-memory `Value` cannot fail.
pub fn to_pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_default()
}

/// Parse `raw` and compute structural statistics in a single traversal.
///
/// Empty or whitespace-only input is rejected before the parser runs. A
/// bare scalar document is valid and yields depth 0 and all-zero counts.
pub fn analyze(raw: &str) -> Result<Analysis, AnalyzeError> {
    if raw.trim().is_empty() {
        return Err(AnalyzeError::EmptyInput);
    }
    let document: Value =
        serde_json::from_str(raw).map_err(|err| AnalyzeError::InvalidJson(err.to_string()))?;
    let formatted = to_pretty(&document);

    let mut acc = Acc::default();
    walk(&document, 0, &mut acc);

    let stats = Stats {
        char_count: formatted.chars().count(),
        depth: acc.depth,
        key_count: acc.key_count,
        array_count: acc.array_count,
        object_count: acc.object_count,
        byte_size: acc.byte_size,
        raw_byte_size: utf8_size(raw),
        formatted_byte_size: format_byte_size(acc.byte_size),
    };
    Ok(Analysis {
        document,
        formatted,
        stats,
    })
}

#[derive(Default)]
struct Acc {
    depth: usize,
    key_count: usize,
    array_count: usize,
    object_count: usize,
    byte_size: usize,
}

fn walk(value: &Value, depth: usize, acc: &mut Acc) {
    match value {
        Value::Array(items) => {
            acc.array_count += 1;
            acc.depth = acc.depth.max(depth);
            for item in items {
                child(item, depth, acc);
            }
        }
        Value::Object(fields) => {
            acc.object_count += 1;
            acc.depth = acc.depth.max(depth);
            acc.key_count += fields.len();
            for (key, item) in fields {
                acc.byte_size += utf8_size(key);
                child(item, depth, acc);
            }
        }
        // Scalar root: nothing to count.
        _ => {}
    }
}

fn child(value: &Value, parent_depth: usize, acc: &mut Acc) {
    match value {
        Value::Array(_) | Value::Object(_) => walk(value, parent_depth + 1, acc),
        Value::String(s) => acc.byte_size += utf8_size(s),
        _ => {}
    }
}
