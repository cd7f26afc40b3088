use serde_json::{Map, Value};

use crate::scalar::{fake, ScalarKind};

/// Upper bound on the number of documents generated per request.
pub const MAX_MOCK_COUNT: usize = 100;

/// Generate one document mirroring the template's shape.
///
/// Objects keep their keys, arrays keep their length, and each scalar leaf
/// is replaced by a fresh value of the same runtime kind. String leaves
/// always regenerate as words; a date-looking string is indistinguishable
/// from any other string by type.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use json_toolbox_random::mock;
///
/// let generated = mock(&json!({"name": "", "age": 0}));
/// assert!(generated["name"].is_string());
/// assert!(generated["age"].is_i64());
/// ```
pub fn mock(template: &Value) -> Value {
    match template {
        Value::Array(items) => Value::Array(items.iter().map(mock).collect()),
        Value::Object(fields) => {
            let mut out = Map::new();
            for (key, item) in fields {
                out.insert(key.clone(), mock(item));
            }
            Value::Object(out)
        }
        Value::String(_) => fake(ScalarKind::String),
        Value::Number(_) => fake(ScalarKind::Number),
        Value::Bool(_) => fake(ScalarKind::Boolean),
        Value::Null => Value::Null,
    }
}

/// Generate `count` independent documents from one template.
///
/// `count` is clamped to `1..=MAX_MOCK_COUNT` before generation.
pub fn mock_many(template: &Value, count: usize) -> Vec<Value> {
    let count = count.clamp(1, MAX_MOCK_COUNT);
    (0..count).map(|_| mock(template)).collect()
}
