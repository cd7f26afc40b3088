use serde_json::Value;

use json_toolbox_random::mock_many;

use crate::analyze::to_pretty;
use crate::error::MockTemplateError;

/// Generate mock documents from a template text.
///
/// The template's shape is mirrored with synthesized scalar leaves. One
/// generated document serializes bare; two or more serialize as a JSON
/// array. `count` is clamped to the generator's 1..=100 range.
pub fn try_generate_mock(template: &str, count: usize) -> Result<String, MockTemplateError> {
    let template: Value =
        serde_json::from_str(template).map_err(|err| MockTemplateError(err.to_string()))?;
    let documents = mock_many(&template, count);
    if let [single] = documents.as_slice() {
        Ok(to_pretty(single))
    } else {
        Ok(to_pretty(&Value::Array(documents)))
    }
}

/// [`try_generate_mock`], with template failures reported inline as
/// `Error: {message}` in place of the result.
pub fn generate_mock(template: &str, count: usize) -> String {
    try_generate_mock(template, count).unwrap_or_else(|err| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_document_serializes_bare() {
        let out = try_generate_mock(r#"{"name":"","age":0}"#, 1).expect("valid template");
        let doc: Value = serde_json::from_str(&out).expect("output is JSON");
        assert!(doc.is_object());
        assert!(doc["name"].is_string());
        assert!(doc["age"].is_i64());
    }

    #[test]
    fn multiple_documents_serialize_as_an_array() {
        let out = try_generate_mock(r#"{"name":"","age":0}"#, 3).expect("valid template");
        let docs: Value = serde_json::from_str(&out).expect("output is JSON");
        let docs = docs.as_array().expect("array output");
        assert_eq!(docs.len(), 3);
        for doc in docs {
            assert!(doc["name"].is_string());
            assert!(doc["age"].is_i64());
        }
    }

    #[test]
    fn template_parse_failure_reports_inline() {
        let out = generate_mock("{broken", 2);
        assert!(out.starts_with("Error: "));
    }
}
