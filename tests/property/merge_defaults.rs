//! Property-based tests for `merge_defaults`

use boilerplate::manifest::{merge_defaults, ConfigTree};
use proptest::prelude::*;
use serde_json::{json, Value};

fn arb_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(|n| json!(n)),
        "[a-z]{0,6}".prop_map(Value::String),
        prop::collection::vec(any::<u8>().prop_map(|n| json!(n)), 0..3).prop_map(Value::Array),
    ]
}

/// Small key alphabet so generated trees overlap often.
fn arb_value() -> impl Strategy<Value = Value> {
    arb_leaf().prop_recursive(3, 24, 4, |inner| {
        prop::collection::btree_map("[a-d]", inner, 0..4)
            .prop_map(|map| Value::Object(map.into_iter().collect()))
    })
}

fn arb_tree() -> impl Strategy<Value = ConfigTree> {
    prop::collection::btree_map("[a-d]", arb_value(), 0..5)
        .prop_map(|map| map.into_iter().collect())
}

/// Every key path present in `defaults` but missing from `target`.
fn missing_paths(defaults: &ConfigTree, target: &ConfigTree, prefix: &str, out: &mut Vec<String>) {
    for (key, default) in defaults {
        let path = format!("{}/{}", prefix, key);
        match (target.get(key), default) {
            (None, _) => out.push(path),
            (Some(Value::Object(t)), Value::Object(d)) => missing_paths(d, t, &path, out),
            _ => {}
        }
    }
}

fn lookup<'a>(tree: &'a ConfigTree, path: &str) -> Option<&'a Value> {
    let mut segments = path.trim_start_matches('/').split('/');
    let mut current = tree.get(segments.next()?)?;
    for segment in segments {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}

/// Collect `(path, value)` for every non-object leaf of `tree`.
fn leaves(tree: &ConfigTree, prefix: &str, out: &mut Vec<(String, Value)>) {
    for (key, value) in tree {
        let path = format!("{}/{}", prefix, key);
        match value {
            Value::Object(map) => leaves(map, &path, out),
            other => out.push((path, other.clone())),
        }
    }
}

proptest! {
    #[test]
    fn merging_twice_equals_merging_once(defaults in arb_tree(), target in arb_tree()) {
        let mut once = target.clone();
        merge_defaults(&defaults, &mut once);

        let mut twice = once.clone();
        let changed = merge_defaults(&defaults, &mut twice);

        prop_assert!(!changed);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn existing_leaves_are_never_clobbered(defaults in arb_tree(), target in arb_tree()) {
        let mut before = Vec::new();
        leaves(&target, "", &mut before);

        let mut merged = target.clone();
        merge_defaults(&defaults, &mut merged);

        for (path, value) in before {
            prop_assert_eq!(lookup(&merged, &path), Some(&value));
        }
    }

    #[test]
    fn missing_keys_are_filled_from_defaults(defaults in arb_tree(), target in arb_tree()) {
        let mut missing = Vec::new();
        missing_paths(&defaults, &target, "", &mut missing);

        let mut merged = target.clone();
        merge_defaults(&defaults, &mut merged);

        for path in missing {
            prop_assert_eq!(lookup(&merged, &path), lookup(&defaults, &path));
        }
    }

    #[test]
    fn change_flag_matches_added_keys(defaults in arb_tree(), target in arb_tree()) {
        let mut missing = Vec::new();
        missing_paths(&defaults, &target, "", &mut missing);

        let mut merged = target.clone();
        let changed = merge_defaults(&defaults, &mut merged);

        prop_assert_eq!(changed, !missing.is_empty());
        prop_assert_eq!(changed, merged != target);
    }
}

#[test]
fn documented_scenarios() {
    let cases = [
        (json!({"a": 1, "b": {"c": 2}}), json!({}), true, json!({"a": 1, "b": {"c": 2}})),
        (json!({"a": 1}), json!({"a": 5}), false, json!({"a": 5})),
        (
            json!({"a": 1, "b": {"c": 2, "d": 3}}),
            json!({"b": {"c": 9}}),
            true,
            json!({"a": 1, "b": {"c": 9, "d": 3}}),
        ),
        (json!({}), json!({"x": 1}), false, json!({"x": 1})),
    ];

    for (defaults, target, expected_changed, expected) in cases {
        let defaults = defaults.as_object().unwrap().clone();
        let mut target = target.as_object().unwrap().clone();
        assert_eq!(merge_defaults(&defaults, &mut target), expected_changed);
        assert_eq!(Value::Object(target), expected);
    }
}
