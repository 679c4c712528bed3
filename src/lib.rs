//! Configuration values layered over a remote parameter store.
//!
//! A [`ParameterConfig`] answers string and string-list lookups by asking a
//! [`ParameterStore`] first and falling back to a [`LocalStore`] (usually
//! [`Settings`] built with [`Config`]) whenever the remote side can't supply
//! a value.
//!
//! ```
//! use dragon_params::{Config, LocalStore, MemoryParameterStore, ParameterConfig};
//!
//! let remote = MemoryParameterStore::new()
//!     .with_parameter("/myapp/database/host", "db.internal");
//!
//! let mut local = Config::builder().build()?;
//! local.set_default("database.port", 5432.into());
//!
//! let config = ParameterConfig::new(remote, local, "myapp");
//! assert_eq!(config.get_string("database.host"), "db.internal");
//! assert_eq!(config.get_string("database.port"), "5432");
//! # Ok::<(), dragon_params::ConfigError>(())
//! ```

pub mod config;
pub mod parameter;
pub mod resolver;

pub use config::{Config, ConfigError, LocalStore, Settings};
pub use parameter::{MemoryParameterStore, ParameterError, ParameterStore};
pub use resolver::{translate_path, ParameterConfig, DEFAULT_PREFIX, PREFIX_ENV_VAR};
