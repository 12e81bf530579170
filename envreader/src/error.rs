//! Error types for environment variable lookups

/// Errors that can occur when reading configuration from the environment.
///
/// Malformed integers and booleans are never reported here: those lookups
/// fall back to the caller's default instead.
#[derive(Debug, thiserror::Error)]
pub enum EnvError {
    /// Required environment variable is not set.
    ///
    /// Produced when a string lookup finds no variable and the caller
    /// supplied an empty default.
    #[error("environment variable '{name}' is required but not set")]
    Missing {
        /// Name of the missing environment variable
        name: String,
    },

    /// Environment variable is set but its value is not valid UTF-8.
    #[error("environment variable '{name}' is set but is not valid unicode")]
    NotUnicode {
        /// Name of the offending environment variable
        name: String,
    },

    /// Failed to convert the value with a custom deserializer.
    #[error("failed to parse environment variable '{name}' as {type_name}: {message}")]
    Parse {
        /// Name of the environment variable being parsed
        name: String,
        /// Fully qualified type name that parsing was attempted for
        type_name: String,
        /// Error message from the deserializer
        message: String,
    },
}

impl EnvError {
    /// Create a missing environment variable error
    pub fn missing(name: impl Into<String>) -> Self {
        Self::Missing { name: name.into() }
    }

    /// Create a parse error (used by macro-generated code)
    #[doc(hidden)]
    pub fn parse_error<T>(name: impl Into<String>, message: impl std::fmt::Display) -> Self {
        Self::Parse {
            name: name.into(),
            type_name: std::any::type_name::<T>().to_string(),
            message: message.to_string(),
        }
    }

    /// Name of the environment variable this error is about.
    pub fn name(&self) -> &str {
        match self {
            Self::Missing { name } | Self::NotUnicode { name } | Self::Parse { name, .. } => name,
        }
    }
}
