use std::collections::HashMap;

use super::{ParameterError, ParameterStore};

/// In-process parameter store, for tests and local development.
///
/// Values are returned as stored whether or not decryption is requested.
#[derive(Debug, Clone, Default)]
pub struct MemoryParameterStore {
    parameters: HashMap<String, String>,
}

impl MemoryParameterStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.parameters.insert(name.into(), value.into())
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.parameters.remove(name)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MemoryParameterStore {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            parameters: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl ParameterStore for MemoryParameterStore {
    fn get_parameter(&self, name: &str, _with_decryption: bool) -> Result<String, ParameterError> {
        self.parameters
            .get(name)
            .cloned()
            .ok_or_else(|| ParameterError::NotFound(name.to_owned()))
    }
}
