use std::path::Path;

use toml::Table;

use super::env::EnvSource;
use super::file::FileSource;
use super::settings::Settings;
use super::source::{merge_entry, ConfigSource};
use super::ConfigError;

/// Builder for the local [`Settings`] store.
///
/// Sources are merged in registration order, with later sources overriding
/// earlier ones. Nested tables are merged recursively; other values
/// (including arrays) are replaced entirely.
///
/// ## Example
///
/// ```no_run
/// use dragon_params::{Config, LocalStore};
///
/// // defaults file -> env overrides -> local file overrides env
/// let settings = Config::builder()
///     .with_file("config/default.toml", true)
///     .with_env("MYAPP", "__")
///     .with_file("config/local.toml", false)
///     .build()?;
///
/// let host = settings.get_string("database.host");
/// # Ok::<(), dragon_params::ConfigError>(())
/// ```
#[derive(Debug, Default)]
#[must_use = "builders do nothing until .build() is called"]
pub struct Config {
    sources: Vec<Box<dyn ConfigSource>>,
}

impl Config {
    pub fn builder() -> Self {
        Self::default()
    }

    /// Adds a TOML file. See [`FileSource`].
    pub fn with_file(self, path: impl AsRef<Path>, required: bool) -> Self {
        self.with_source(FileSource::new(path, required))
    }

    /// Adds environment variables under `prefix`. See [`EnvSource`].
    ///
    /// With `MYAPP__DATABASE__HOST=localhost`, `with_env("MYAPP", "__")` sets
    /// `database.host`.
    pub fn with_env(self, prefix: impl Into<String>, separator: impl Into<String>) -> Self {
        self.with_source(EnvSource::new(prefix, separator))
    }

    pub fn with_source(mut self, source: impl ConfigSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// Loads and merges every source into a [`Settings`] store.
    pub fn build(self) -> Result<Settings, ConfigError> {
        let mut merged = Table::new();

        for source in &self.sources {
            for entry in source.entries()? {
                merge_entry(&mut merged, entry);
            }
        }

        Ok(Settings::from_table(merged))
    }
}
