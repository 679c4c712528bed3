use thiserror::Error;

/// Why a remote parameter lookup produced no value.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ParameterError {
    #[error("parameter not found: {0}")]
    NotFound(String),

    #[error("parameter store internal server error: {0}")]
    InternalServer(String),

    /// Anything the client couldn't classify: auth, network, malformed responses.
    #[error(transparent)]
    Other(Box<dyn std::error::Error + Send + Sync>),
}

impl ParameterError {
    pub fn other(error: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Other(error.into())
    }
}
