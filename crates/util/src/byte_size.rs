use serde_json::Value;

/// Computes the UTF-8 size of a string in bytes.
///
/// # Examples
///
/// ```
/// use json_toolbox_util::byte_size::utf8_size;
///
/// assert_eq!(utf8_size("hello"), 5);
/// assert_eq!(utf8_size("héllo"), 6); // é is 2 bytes in UTF-8
/// ```
pub fn utf8_size(s: &str) -> usize {
    s.len()
}

/// Computes the structural byte size of a document.
///
/// Only object keys and string leaves reached inside a container count,
/// each as its UTF-8 byte length. Numbers, booleans, null, container
/// punctuation and a bare scalar root all contribute zero.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use json_toolbox_util::byte_size::structural_byte_size;
///
/// // "a" + "b" + "c", no string leaves
/// assert_eq!(structural_byte_size(&json!({"a": 1, "b": {"c": 2}})), 3);
/// // "k" + "hi"
/// assert_eq!(structural_byte_size(&json!({"k": "hi"})), 3);
/// // bare scalar roots are not counted
/// assert_eq!(structural_byte_size(&json!("hi")), 0);
/// ```
pub fn structural_byte_size(value: &Value) -> usize {
    match value {
        Value::Array(items) => items.iter().map(entry_size).sum(),
        Value::Object(fields) => fields
            .iter()
            .map(|(key, item)| utf8_size(key) + entry_size(item))
            .sum(),
        _ => 0,
    }
}

fn entry_size(value: &Value) -> usize {
    match value {
        Value::String(s) => utf8_size(s),
        Value::Array(_) | Value::Object(_) => structural_byte_size(value),
        _ => 0,
    }
}
