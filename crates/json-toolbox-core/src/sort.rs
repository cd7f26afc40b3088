use serde_json::{Map, Value};

use json_toolbox_util::key_cmp;

/// Key ordering applied to every object in a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
    /// Restore the caller-supplied pre-sort document unchanged.
    Original,
}

/// Produce a copy of `document` with every object's keys reordered.
///
/// Pure and recursive: arrays keep their element order, scalars pass
/// through, and children sort with the same direction as their parent.
/// `Original` deep-copies its input as-is; retaining the pre-sort
/// snapshot to pass here is the owning session's job, not the sorter's.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use json_toolbox_core::sort::{sort_keys, SortDirection};
///
/// let doc = json!({"b": 1, "a": 2});
/// let sorted = sort_keys(&doc, SortDirection::Ascending);
/// assert_eq!(serde_json::to_string(&sorted).unwrap(), r#"{"a":2,"b":1}"#);
/// ```
pub fn sort_keys(document: &Value, direction: SortDirection) -> Value {
    match direction {
        SortDirection::Original => document.clone(),
        SortDirection::Ascending | SortDirection::Descending => sorted(document, direction),
    }
}

fn sorted(value: &Value, direction: SortDirection) -> Value {
    match value {
        Value::Array(items) => {
            Value::Array(items.iter().map(|item| sorted(item, direction)).collect())
        }
        Value::Object(fields) => {
            let mut pairs: Vec<(&String, &Value)> = fields.iter().collect();
            pairs.sort_by(|(a, _), (b, _)| {
                if direction == SortDirection::Descending {
                    key_cmp(b, a)
                } else {
                    key_cmp(a, b)
                }
            });
            let mut out = Map::new();
            for (key, item) in pairs {
                out.insert(key.clone(), sorted(item, direction));
            }
            Value::Object(out)
        }
        _ => value.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn keys(value: &Value) -> Vec<&str> {
        value
            .as_object()
            .map(|fields| fields.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    #[test]
    fn ascending_reorders_keys() {
        let doc = json!({"b": 1, "a": 2});
        let sorted = sort_keys(&doc, SortDirection::Ascending);
        assert_eq!(keys(&sorted), ["a", "b"]);
        assert_eq!(sorted["a"], json!(2));
        assert_eq!(sorted["b"], json!(1));
    }

    #[test]
    fn descending_reorders_keys() {
        let doc = json!({"a": 2, "b": 1});
        let sorted = sort_keys(&doc, SortDirection::Descending);
        assert_eq!(keys(&sorted), ["b", "a"]);
    }

    #[test]
    fn children_use_the_parent_direction() {
        let doc = json!({"z": {"b": 1, "a": 2}, "y": 0});
        let sorted = sort_keys(&doc, SortDirection::Ascending);
        assert_eq!(keys(&sorted), ["y", "z"]);
        assert_eq!(keys(&sorted["z"]), ["a", "b"]);
    }

    #[test]
    fn arrays_keep_element_order_but_recurse() {
        let doc = json!([{"b": 1, "a": 2}, 3, "x"]);
        let sorted = sort_keys(&doc, SortDirection::Ascending);
        assert_eq!(keys(&sorted[0]), ["a", "b"]);
        assert_eq!(sorted[1], json!(3));
        assert_eq!(sorted[2], json!("x"));
    }

    #[test]
    fn original_is_a_deep_copy() {
        let doc = json!({"b": 1, "a": {"d": 1, "c": 2}});
        let restored = sort_keys(&doc, SortDirection::Original);
        assert_eq!(restored, doc);
        assert_eq!(keys(&restored), ["b", "a"]);
        assert_eq!(keys(&restored["a"]), ["d", "c"]);
    }

    #[test]
    fn ascending_then_descending_fully_reverses() {
        let doc = json!({"m": {"x": 1, "a": 2}, "a": 1, "z": 3});
        let asc = sort_keys(&doc, SortDirection::Ascending);
        let desc = sort_keys(&asc, SortDirection::Descending);
        assert_eq!(keys(&desc), ["z", "m", "a"]);
        assert_eq!(keys(&desc["m"]), ["x", "a"]);
    }

    #[test]
    fn scalars_pass_through() {
        assert_eq!(sort_keys(&json!(7), SortDirection::Ascending), json!(7));
        assert_eq!(sort_keys(&json!("s"), SortDirection::Descending), json!("s"));
    }
}
