//! Default filling for manifest trees.
//!
//! Fills keys that are missing from a target tree with values from a defaults
//! tree, recursing into nested objects. Values already present in the target
//! always win: scalars and arrays are never replaced, and a default object never
//! overrides a target scalar with the same key.

use serde_json::{Map, Value};

/// A string-keyed manifest tree (or a subtree such as `scripts`).
pub type ConfigTree = Map<String, Value>;

/// Merge `defaults` into `target` without overwriting existing values.
///
/// Returns `true` if any key was added at any depth.
///
/// # Example
/// ```
/// use serde_json::{json, Value};
/// use boilerplate::manifest::{merge_defaults, ConfigTree};
///
/// let defaults: ConfigTree = json!({"a": 1, "b": {"c": 2, "d": 3}})
///     .as_object().unwrap().clone();
/// let mut target: ConfigTree = json!({"b": {"c": 9}}).as_object().unwrap().clone();
///
/// assert!(merge_defaults(&defaults, &mut target));
/// assert_eq!(Value::Object(target), json!({"b": {"c": 9, "d": 3}, "a": 1}));
/// ```
pub fn merge_defaults(defaults: &ConfigTree, target: &mut ConfigTree) -> bool {
    let mut changed = false;
    for (key, default_value) in defaults {
        match target.get_mut(key) {
            None => {
                target.insert(key.clone(), default_value.clone());
                changed = true;
            }
            Some(Value::Object(existing)) => {
                // A non-object default has nothing to contribute to an existing subtree.
                if let Value::Object(nested_defaults) = default_value {
                    changed |= merge_defaults(nested_defaults, existing);
                }
            }
            Some(_) => {}
        }
    }
    changed
}
