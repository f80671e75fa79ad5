//! Free-form profile attributes

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Caller-defined profile attributes of an account.
///
/// Keys have no fixed schema. A missing key is distinct from an empty value:
/// writing a blank value removes the key instead of storing an empty string.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileAttributes {
    values: HashMap<String, String>,
}

impl ProfileAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored value for `name`, or `None` if it was never set.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Upsert `value` under `name`, or remove `name` when `value` is blank.
    ///
    /// Returns the previous value, if any.
    pub fn set(&mut self, name: &str, value: &str) -> Option<String> {
        if value.trim().is_empty() {
            self.values.remove(name)
        } else {
            self.values.insert(name.to_string(), value.to_string())
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over `(name, value)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
