//! Remote parameter store client seam.

mod error;
mod memory;

use std::sync::Arc;

pub use error::ParameterError;
pub use memory::MemoryParameterStore;

/// A remote key-value service holding configuration and secret values.
///
/// Implementations own transport concerns (authentication, timeouts,
/// retries) and report failures through [`ParameterError`] so callers can
/// tell a missing parameter apart from an unhealthy service.
pub trait ParameterStore: Send + Sync + std::fmt::Debug {
    /// Fetches the value stored at the absolute path `name`, decrypting
    /// secure values when `with_decryption` is set.
    fn get_parameter(&self, name: &str, with_decryption: bool) -> Result<String, ParameterError>;
}

impl<T: ParameterStore + ?Sized> ParameterStore for &T {
    fn get_parameter(&self, name: &str, with_decryption: bool) -> Result<String, ParameterError> {
        (**self).get_parameter(name, with_decryption)
    }
}

impl<T: ParameterStore + ?Sized> ParameterStore for Box<T> {
    fn get_parameter(&self, name: &str, with_decryption: bool) -> Result<String, ParameterError> {
        (**self).get_parameter(name, with_decryption)
    }
}

impl<T: ParameterStore + ?Sized> ParameterStore for Arc<T> {
    fn get_parameter(&self, name: &str, with_decryption: bool) -> Result<String, ParameterError> {
        (**self).get_parameter(name, with_decryption)
    }
}
