//! Typed environment variable lookups with default fallback
//!
//! `envreader` reads configuration from environment variables through four
//! lookups, each with a caller-supplied default:
//!
//! | Lookup | Returns | Absent | Malformed |
//! |--------|---------|--------|-----------|
//! | [`get_string`] | `Result<String, EnvError>` | default, or [`EnvError::Missing`] if the default is empty | n/a |
//! | [`get_int`] | `i64` | default | default |
//! | [`get_bool`] | `bool` | `false` | default |
//! | [`get_string_list`] | `Result<Vec<String>, EnvError>` | [`EnvError::Missing`] | n/a |
//!
//! The free functions read the process environment. [`EnvReader`] performs
//! the same lookups against any [`ReadEnv`] provider, so tests can use a
//! [`MapEnv`] instead of mutating global state.
//!
//! # Example
//!
//! ```rust
//! use envreader::{EnvReader, MapEnv};
//!
//! let reader = EnvReader::new(
//!     MapEnv::new()
//!         .with_var("LISTEN_ADDR", "0.0.0.0:3000")
//!         .with_var("MAX_CONNECTIONS", "42"),
//! );
//!
//! assert_eq!(reader.get_string("LISTEN_ADDR", "127.0.0.1:8080")?, "0.0.0.0:3000");
//! assert_eq!(reader.get_int("MAX_CONNECTIONS", 10), 42);
//! assert!(!reader.get_bool("ENABLE_TLS", true));
//! # Ok::<(), envreader::EnvError>(())
//! ```
//!
//! # Required values
//!
//! An empty string default marks a variable as required. Lookups return
//! [`EnvError::Missing`] instead of terminating; use [`UnwrapOrExit`] to
//! stop a misconfigured service at startup.
//!
//! # Derive
//!
//! `#[derive(FromEnv)]` loads a struct field by field with the same lookups.
//!
//! ```rust
//! use envreader::{EnvReader, FromEnv, MapEnv};
//!
//! #[derive(Debug, FromEnv)]
//! #[env(prefix = "APP_")]
//! struct Config {
//!     pub database_url: String,
//!
//!     #[env(default = 8080)]
//!     pub port: i64,
//!
//!     #[env(name = "VERBOSE")]
//!     pub debug: bool,
//!
//!     #[env(default = vec!["localhost".to_string()], separator = ";")]
//!     pub allowed_hosts: Vec<String>,
//! }
//!
//! let reader = EnvReader::new(
//!     MapEnv::new()
//!         .with_var("APP_DATABASE_URL", "postgres://localhost/db")
//!         .with_var("APP_VERBOSE", "1")
//!         .with_var("APP_ALLOWED_HOSTS", "a.example;b.example"),
//! );
//! let config = Config::from_reader(&reader)?;
//! assert_eq!(config.port, 8080);
//! assert!(config.debug);
//! assert_eq!(config.allowed_hosts, vec!["a.example", "b.example"]);
//! # Ok::<(), envreader::EnvError>(())
//! ```

#[doc(hidden)]
pub mod de;

mod error;
mod exit;
mod reader;
mod source;

pub use envreader_derive::FromEnv;
pub use error::EnvError;
pub use exit::{UnwrapOrExit, EXIT_CODE_CONFIG_ERROR};
pub use reader::EnvReader;
pub use source::{MapEnv, ReadEnv, SystemEnv};

// Re-export for macro-generated code
#[doc(hidden)]
pub use anyhow;

/// [`EnvReader::get_string`] against the process environment.
pub fn get_string(name: &str, default: &str) -> Result<String, EnvError> {
    EnvReader::system().get_string(name, default)
}

/// [`EnvReader::get_int`] against the process environment.
pub fn get_int(name: &str, default: i64) -> i64 {
    EnvReader::system().get_int(name, default)
}

/// [`EnvReader::get_bool`] against the process environment.
pub fn get_bool(name: &str, default: bool) -> bool {
    EnvReader::system().get_bool(name, default)
}

/// [`EnvReader::get_string_list`] against the process environment.
pub fn get_string_list(
    name: &str,
    default: Vec<String>,
    separator: &str,
) -> Result<Vec<String>, EnvError> {
    EnvReader::system().get_string_list(name, default, separator)
}
