use json_toolbox_core::{analyze, sort_keys, SortDirection};
use json_toolbox_random::mock;
use json_toolbox_util::structural_byte_size;
use proptest::prelude::*;
use serde_json::{Map, Value};

fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-1_000_000i64..1_000_000).prop_map(Value::from),
        "[a-z]{0,8}".prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 32, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,6}", inner, 0..6).prop_map(|fields| {
                let mut out = Map::new();
                for (key, value) in fields {
                    out.insert(key, value);
                }
                Value::Object(out)
            }),
        ]
    })
}

fn assert_sorted(value: &Value, direction: SortDirection) {
    match value {
        Value::Object(fields) => {
            let keys: Vec<&String> = fields.keys().collect();
            let mut expected = keys.clone();
            expected.sort();
            if direction == SortDirection::Descending {
                expected.reverse();
            }
            assert_eq!(keys, expected);
            for child in fields.values() {
                assert_sorted(child, direction);
            }
        }
        Value::Array(items) => {
            for item in items {
                assert_sorted(item, direction);
            }
        }
        _ => {}
    }
}

fn max_depth(value: &Value, level: usize) -> usize {
    match value {
        Value::Array(items) => items
            .iter()
            .filter(|item| item.is_array() || item.is_object())
            .map(|item| max_depth(item, level + 1))
            .fold(level, usize::max),
        Value::Object(fields) => fields
            .values()
            .filter(|item| item.is_array() || item.is_object())
            .map(|item| max_depth(item, level + 1))
            .fold(level, usize::max),
        _ => 0,
    }
}

fn count_nodes(value: &Value) -> (usize, usize, usize) {
    match value {
        Value::Array(items) => items.iter().fold((0, 1, 0), |acc, item| {
            let (o, a, k) = count_nodes(item);
            (acc.0 + o, acc.1 + a, acc.2 + k)
        }),
        Value::Object(fields) => fields.values().fold((1, 0, fields.len()), |acc, item| {
            let (o, a, k) = count_nodes(item);
            (acc.0 + o, acc.1 + a, acc.2 + k)
        }),
        _ => (0, 0, 0),
    }
}

fn same_shape(template: &Value, generated: &Value) -> bool {
    match (template, generated) {
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(t, g)| same_shape(t, g))
        }
        (Value::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && a.iter()
                    .zip(b)
                    .all(|((ka, va), (kb, vb))| ka == kb && same_shape(va, vb))
        }
        (Value::String(_), Value::String(_)) => true,
        (Value::Number(_), Value::Number(_)) => true,
        (Value::Bool(_), Value::Bool(_)) => true,
        (Value::Null, Value::Null) => true,
        _ => false,
    }
}

proptest! {
    #[test]
    fn analysis_matches_the_structural_oracles(doc in arb_json()) {
        let raw = serde_json::to_string(&doc).expect("serializable");
        let analysis = analyze(&raw).expect("round-tripped document parses");
        let stats = &analysis.stats;
        prop_assert_eq!(stats.byte_size, structural_byte_size(&doc));
        prop_assert_eq!(stats.depth, max_depth(&doc, 0));
        let (objects, arrays, keys) = count_nodes(&doc);
        prop_assert_eq!(stats.object_count, objects);
        prop_assert_eq!(stats.array_count, arrays);
        prop_assert_eq!(stats.key_count, keys);
        prop_assert_eq!(stats.raw_byte_size, raw.len());
    }

    #[test]
    fn sort_orders_every_object_and_keeps_content(doc in arb_json(), descending in any::<bool>()) {
        let direction = if descending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        let sorted = sort_keys(&doc, direction);
        assert_sorted(&sorted, direction);
        // object equality ignores key order, so this checks pure content
        prop_assert_eq!(&sorted, &doc);
    }

    #[test]
    fn original_direction_is_identity(doc in arb_json()) {
        let restored = sort_keys(&doc, SortDirection::Original);
        prop_assert_eq!(
            serde_json::to_string(&restored).expect("serializable"),
            serde_json::to_string(&doc).expect("serializable")
        );
    }

    #[test]
    fn mock_preserves_shape_and_scalar_kinds(template in arb_json()) {
        let generated = mock(&template);
        prop_assert!(same_shape(&template, &generated));
    }
}
