//! Fold-merge mechanics for configuration documents.
//!
//! Fragments are combined pairwise, accumulator first, so a later fragment
//! overrides whatever an earlier one set. The merge operates on the generic
//! [`serde_json::Value`] tree and is independent of where the fragments came
//! from.

use serde_json::{Map, Value};

/// Overlay `fragment` onto `target`, updating `target` in place.
///
/// Behaviour:
/// - Objects merge recursively: absent keys are inserted, present keys are
///   overlaid.
/// - When both sides hold arrays, the result is their union: elements of the
///   incoming array are appended unless an equal element is already present.
///   Equality is deep structural equality, so object elements deduplicate
///   too. Duplicates already inside the target array are retained.
/// - An explicit `null` in the fragment leaves an existing value untouched,
///   but is inserted where the key is absent.
/// - Any other pairing, scalar over scalar or a type mismatch, replaces the
///   existing value with the fragment's.
///
/// # Examples
///
/// ```rust
/// use embed_config::merge::merge_value;
/// use serde_json::json;
///
/// let mut acc = json!({"region": "eu-west-1", "features": ["alpha"]});
/// merge_value(&mut acc, json!({"region": "us-east-1", "features": ["alpha", "beta"]}));
/// assert_eq!(acc, json!({"region": "us-east-1", "features": ["alpha", "beta"]}));
/// ```
pub fn merge_value(target: &mut Value, fragment: Value) {
    match fragment {
        Value::Object(map) => merge_object(target, map),
        Value::Array(items) => match target {
            Value::Array(existing) => union_into(existing, items),
            _ => *target = Value::Array(items),
        },
        other => *target = other,
    }
}

/// Merge the object `map` into `target`, converting non-object targets first.
fn merge_object(target: &mut Value, map: Map<String, Value>) {
    if !target.is_object() {
        *target = Value::Object(Map::new());
    }

    let Some(target_map) = target.as_object_mut() else {
        return;
    };

    for (key, value) in map {
        match target_map.get_mut(&key) {
            // An explicit null never displaces a value an earlier fragment set.
            Some(_) if value.is_null() => {}
            Some(existing) => merge_value(existing, value),
            None => {
                target_map.insert(key, value);
            }
        }
    }
}

/// Append each incoming element that has no equal counterpart in `existing`.
fn union_into(existing: &mut Vec<Value>, incoming: Vec<Value>) {
    for item in incoming {
        if !existing.contains(&item) {
            existing.push(item);
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::{Value, json};

    use super::merge_value;

    #[rstest]
    #[case(json!({"x": 1, "y": 1}), json!({"x": 2}), json!({"x": 2, "y": 1}))]
    #[case(json!({"list": [1, 2]}), json!({"list": [2, 3]}), json!({"list": [1, 2, 3]}))]
    #[case(json!({"a": {"b": 1}}), json!({"a": {"c": 2}}), json!({"a": {"b": 1, "c": 2}}))]
    #[case(json!({"a": {"b": 1}}), json!({"a": 5}), json!({"a": 5}))]
    #[case(json!({"a": [1]}), json!({"a": {"b": 1}}), json!({"a": {"b": 1}}))]
    fn overlays_fragment_onto_accumulator(
        #[case] mut acc: Value,
        #[case] fragment: Value,
        #[case] expected: Value,
    ) {
        merge_value(&mut acc, fragment);
        assert_eq!(acc, expected);
    }

    #[test]
    fn null_keeps_existing_value_but_fills_absent_keys() {
        let mut acc = json!({"kept": 1});
        merge_value(&mut acc, json!({"kept": null, "added": null}));
        assert_eq!(acc, json!({"kept": 1, "added": null}));
    }

    #[test]
    fn array_union_deduplicates_object_elements_structurally() {
        let mut acc = json!({"servers": [{"host": "a"}, {"host": "b"}]});
        merge_value(&mut acc, json!({"servers": [{"host": "b"}, {"host": "c"}]}));
        assert_eq!(
            acc,
            json!({"servers": [{"host": "a"}, {"host": "b"}, {"host": "c"}]})
        );
    }

    #[test]
    fn duplicates_already_in_the_accumulator_are_retained() {
        let mut acc = json!({"list": [1, 1]});
        merge_value(&mut acc, json!({"list": [1, 2]}));
        assert_eq!(acc, json!({"list": [1, 1, 2]}));
    }

    #[test]
    fn overwritten_keys_keep_their_original_position() {
        let mut acc = json!({"first": 1, "second": 2});
        merge_value(&mut acc, json!({"second": 20, "third": 3}));
        let keys: Vec<&str> = acc
            .as_object()
            .expect("merged root stays an object")
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, ["first", "second", "third"]);
    }
}
