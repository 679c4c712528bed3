//! Remote-first lookups with local fallback.

mod fallback;
mod path;

pub use path::translate_path;

use toml::Value;

use crate::config::LocalStore;
use crate::parameter::ParameterStore;
use fallback::{resolve, Resolution};

/// Environment variable naming the remote namespace root.
pub const PREFIX_ENV_VAR: &str = "PARAMETER_STORE_PREFIX";

/// Namespace root used when [`PREFIX_ENV_VAR`] is unset or empty.
pub const DEFAULT_PREFIX: &str = "parameters";

/// Reads the namespace root from [`PREFIX_ENV_VAR`], defaulting to
/// [`DEFAULT_PREFIX`].
pub fn prefix_from_env() -> String {
    prefix_or_default(std::env::var(PREFIX_ENV_VAR).ok())
}

fn prefix_or_default(value: Option<String>) -> String {
    value
        .filter(|prefix| !prefix.is_empty())
        .unwrap_or_else(|| DEFAULT_PREFIX.to_owned())
}

/// Configuration accessors that consult a remote [`ParameterStore`] before a
/// [`LocalStore`].
///
/// A key such as `database.host` is looked up remotely at
/// `/{prefix}/database/host`. Any remote failure, whether the parameter is
/// missing or the service is unhealthy, falls through to the local store
/// under the original key. Accessors never return errors; remote failures
/// are only visible in the logs.
///
/// ## Example
///
/// ```
/// use dragon_params::{MemoryParameterStore, ParameterConfig, Settings};
///
/// let remote = MemoryParameterStore::new()
///     .with_parameter("/prefix/test/foo", "Bar,Baz,Alice,Bob");
///
/// let mut config = ParameterConfig::new(remote, Settings::default(), "prefix");
/// config.set_default("test.missing", "fallback".into());
///
/// assert_eq!(
///     config.get_string_slice("test.foo"),
///     vec!["Bar", "Baz", "Alice", "Bob"]
/// );
/// assert_eq!(config.get_string("test.missing"), "fallback");
/// ```
#[derive(Debug)]
pub struct ParameterConfig<P, L> {
    prefix: String,
    store: P,
    local: L,
}

impl<P: ParameterStore, L: LocalStore> ParameterConfig<P, L> {
    pub fn new(store: P, local: L, prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            store,
            local,
        }
    }

    /// Like [`new`](Self::new), with the prefix taken from [`prefix_from_env`].
    pub fn from_env(store: P, local: L) -> Self {
        Self::new(store, local, prefix_from_env())
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn set_prefix(&mut self, prefix: impl Into<String>) {
        self.prefix = prefix.into();
    }

    pub fn local(&self) -> &L {
        &self.local
    }

    pub fn local_mut(&mut self) -> &mut L {
        &mut self.local
    }

    pub fn set_default(&mut self, key: &str, value: Value) {
        self.local.set_default(key, value);
    }

    /// Returns the remote value verbatim, or the local store's value for `key`.
    pub fn get_string(&self, key: &str) -> String {
        match self.resolve(key) {
            Resolution::Found(value) => value,
            Resolution::NotFound | Resolution::Failed(_) => self.local.get_string(key),
        }
    }

    /// Returns the remote value split on `,`, or the local store's list for
    /// `key`. Remote items are not trimmed.
    pub fn get_string_slice(&self, key: &str) -> Vec<String> {
        match self.resolve(key) {
            Resolution::Found(value) => value.split(',').map(str::to_owned).collect(),
            Resolution::NotFound | Resolution::Failed(_) => self.local.get_string_slice(key),
        }
    }

    fn resolve(&self, key: &str) -> Resolution {
        resolve(&self.store, &translate_path(&self.prefix, key))
    }
}
