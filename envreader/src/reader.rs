//! Typed lookups with default fallback

use std::env::VarError;

use crate::error::EnvError;
use crate::source::{ReadEnv, SystemEnv};

/// Default handed to [`EnvReader::get_string`] by [`EnvReader::get_bool`].
const BOOL_LOOKUP_DEFAULT: &str = "0";

/// Reads configuration values from an environment provider.
///
/// Every lookup is independent and read-only; an `EnvReader` holds no state
/// besides the provider itself.
///
/// ```rust
/// use envreader::{EnvReader, MapEnv};
///
/// let reader = EnvReader::new(
///     MapEnv::new()
///         .with_var("DATABASE_URL", " postgres://localhost/db ")
///         .with_var("WORKERS", "8")
///         .with_var("DEBUG", "true")
///         .with_var("ALLOWED_HOSTS", "a.example,b.example"),
/// );
///
/// assert_eq!(reader.get_string("DATABASE_URL", "").unwrap(), "postgres://localhost/db");
/// assert_eq!(reader.get_int("WORKERS", 1), 8);
/// assert!(reader.get_bool("DEBUG", false));
/// assert_eq!(
///     reader.get_string_list("ALLOWED_HOSTS", vec![], ",").unwrap(),
///     vec!["a.example", "b.example"],
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct EnvReader<E = SystemEnv> {
    env: E,
}

impl EnvReader<SystemEnv> {
    /// Reader bound to the process environment.
    pub fn system() -> Self {
        Self { env: SystemEnv }
    }
}

impl<E: ReadEnv> EnvReader<E> {
    pub fn new(env: E) -> Self {
        Self { env }
    }

    pub fn env(&self) -> &E {
        &self.env
    }

    /// Look up `name` as a string.
    ///
    /// A set variable is returned with surrounding whitespace trimmed. When
    /// the variable is absent the non-empty `default` is returned verbatim;
    /// an empty `default` marks the variable as required and yields
    /// [`EnvError::Missing`].
    ///
    /// # Errors
    ///
    /// - [`EnvError::Missing`] if the variable is absent and `default` is empty
    /// - [`EnvError::NotUnicode`] if the value is not valid UTF-8
    pub fn get_string(&self, name: &str, default: &str) -> Result<String, EnvError> {
        match self.env.var(name) {
            Ok(value) => Ok(value.trim().to_string()),
            Err(VarError::NotUnicode(_)) => Err(EnvError::NotUnicode {
                name: name.to_string(),
            }),
            Err(VarError::NotPresent) if default.is_empty() => Err(EnvError::missing(name)),
            Err(VarError::NotPresent) => Ok(default.to_string()),
        }
    }

    /// Look up `name` as a base-10 signed integer.
    ///
    /// The raw value is parsed without trimming. Absent or unparseable
    /// values yield `default`; an empty value never counts as missing.
    pub fn get_int(&self, name: &str, default: i64) -> i64 {
        let raw = match self.env.var(name) {
            Ok(raw) => raw,
            Err(VarError::NotPresent) => return default,
            Err(err @ VarError::NotUnicode(_)) => {
                tracing::debug!(name, error = %err, default, "integer fallback");
                return default;
            }
        };
        match raw.parse::<i64>() {
            Ok(value) => value,
            Err(err) => {
                tracing::debug!(name, value = %raw, error = %err, default, "integer fallback");
                default
            }
        }
    }

    /// Look up `name` as a boolean.
    ///
    /// Recognized tokens are `1 t T TRUE true True` and
    /// `0 f F FALSE false False`. Empty or unrecognized values yield
    /// `default`.
    ///
    /// An absent variable resolves through the string lookup's `"0"`
    /// fallback and therefore returns `false` even when `default` is `true`.
    pub fn get_bool(&self, name: &str, default: bool) -> bool {
        let value = match self.get_string(name, BOOL_LOOKUP_DEFAULT) {
            Ok(value) => value,
            Err(err) => {
                tracing::debug!(name, error = %err, default, "boolean fallback");
                return default;
            }
        };
        if value.is_empty() {
            return default;
        }
        match parse_bool(&value) {
            Some(parsed) => parsed,
            None => {
                tracing::debug!(name, value = %value, default, "boolean fallback");
                default
            }
        }
    }

    /// Look up `name` and split it on `separator`.
    ///
    /// Elements are not trimmed and empty elements are kept. An empty
    /// `separator` yields one element per character. A variable that is set
    /// but blank yields `default`.
    ///
    /// # Errors
    ///
    /// The lookup goes through [`get_string`](Self::get_string) with an empty
    /// default, so an absent variable yields [`EnvError::Missing`].
    pub fn get_string_list(
        &self,
        name: &str,
        default: Vec<String>,
        separator: &str,
    ) -> Result<Vec<String>, EnvError> {
        let value = self.get_string(name, "")?;
        if value.is_empty() {
            return Ok(default);
        }
        Ok(split(&value, separator))
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

fn split(value: &str, separator: &str) -> Vec<String> {
    if separator.is_empty() {
        return value.chars().map(String::from).collect();
    }
    value.split(separator).map(str::to_owned).collect()
}
