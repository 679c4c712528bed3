use crate::parameter::{ParameterError, ParameterStore};

/// Outcome of a single remote lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Resolution {
    Found(String),
    NotFound,
    /// The remote side failed for a reason other than a missing parameter.
    Failed(String),
}

/// Looks up `path` with decryption and classifies the result.
///
/// Every failure is logged here; callers decide what a miss means.
pub(crate) fn resolve<S: ParameterStore + ?Sized>(store: &S, path: &str) -> Resolution {
    match store.get_parameter(path, true) {
        Ok(value) => Resolution::Found(value),
        Err(ParameterError::NotFound(_)) => {
            tracing::debug!(path, "parameter not found in parameter store");
            Resolution::NotFound
        }
        Err(ParameterError::InternalServer(detail)) => {
            tracing::warn!(path, error = %detail, "parameter store returned internal server error");
            Resolution::Failed(format!(
                "parameter store returned internal server error: {detail}"
            ))
        }
        Err(error) => {
            tracing::warn!(path, %error, "unable to read parameter from parameter store");
            Resolution::Failed(format!("unknown error retrieving parameter: {error}"))
        }
    }
}
