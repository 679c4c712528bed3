//! Local hierarchical configuration store.

mod builder;
mod env;
mod error;
mod file;
mod settings;
mod source;

pub use builder::Config;
pub use env::EnvSource;
pub use error::ConfigError;
pub use file::FileSource;
pub use settings::{LocalStore, Settings};
pub use source::{ConfigEntry, ConfigSource};
