use serde::de::DeserializeOwned;
use toml::{Table, Value};

use super::source::{deep_merge, key_path, lookup, merge_at_path};
use super::ConfigError;

/// The local side of a layered lookup.
///
/// Keys are dot-delimited paths such as `database.host`. Missing values come
/// back empty rather than as errors.
pub trait LocalStore {
    fn get_string(&self, key: &str) -> String;

    fn get_string_slice(&self, key: &str) -> Vec<String>;

    fn set_default(&mut self, key: &str, value: Value);
}

/// Merged configuration values with a separate defaults layer underneath.
///
/// Explicit values always win over defaults, key by key.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    values: Table,
    defaults: Table,
}

impl Settings {
    pub(crate) fn from_table(values: Table) -> Self {
        Self {
            values,
            defaults: Table::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        lookup(&self.values, key).or_else(|| lookup(&self.defaults, key))
    }

    /// Whether `key` has an explicit value, ignoring defaults.
    pub fn is_set(&self, key: &str) -> bool {
        lookup(&self.values, key).is_some()
    }

    /// Deserializes defaults overlaid with explicit values.
    pub fn try_deserialize<T: DeserializeOwned>(&self) -> Result<T, ConfigError> {
        let mut merged = self.defaults.clone();
        deep_merge(&mut merged, self.values.clone());
        Ok(Value::Table(merged).try_into()?)
    }
}

impl LocalStore for Settings {
    fn get_string(&self, key: &str) -> String {
        self.get(key).and_then(scalar_to_string).unwrap_or_default()
    }

    fn get_string_slice(&self, key: &str) -> Vec<String> {
        match self.get(key) {
            Some(Value::Array(items)) => items.iter().filter_map(scalar_to_string).collect(),
            Some(Value::String(s)) => s.split_whitespace().map(str::to_owned).collect(),
            _ => Vec::new(),
        }
    }

    fn set_default(&mut self, key: &str, value: Value) {
        merge_at_path(&mut self.defaults, &key_path(key), value);
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Integer(i) => Some(i.to_string()),
        Value::Float(f) => Some(f.to_string()),
        Value::Boolean(b) => Some(b.to_string()),
        Value::Datetime(dt) => Some(dt.to_string()),
        Value::Array(_) | Value::Table(_) => None,
    }
}
