/// Error type returned by this crate.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// A configuration value broke a validation rule.
    #[error("invalid configuration: {0}")]
    Config(String),
    /// A required call argument was missing or blank.
    #[error("invalid argument `{name}`: {message}")]
    Argument {
        /// Name of the offending argument.
        name: &'static str,
        /// Human readable reason.
        message: String,
    },
    /// The client was used after `dispose`.
    #[error("service client has been disposed")]
    Disposed,
    /// The caller's cancellation token fired while the operation was suspended.
    #[error("operation was cancelled")]
    Cancelled,
}

impl ServiceError {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub(crate) fn argument(name: &'static str, message: impl Into<String>) -> Self {
        Self::Argument {
            name,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ServiceError;

    #[test]
    fn display_includes_argument_name() {
        let err = ServiceError::argument("data", "Data cannot be null or empty");
        assert_eq!(
            err.to_string(),
            "invalid argument `data`: Data cannot be null or empty"
        );
    }

    #[test]
    fn display_wraps_config_message() {
        let err = ServiceError::config("API key is required");
        assert_eq!(err.to_string(), "invalid configuration: API key is required");
    }
}
