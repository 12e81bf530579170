//! Escalating configuration errors into process termination

use crate::error::EnvError;

/// Exit status for every [`EnvError`]: missing, non-unicode and unparseable
/// values alike.
pub const EXIT_CODE_CONFIG_ERROR: i32 = 1;

/// Fail-fast handling for configuration read during startup.
///
/// ```rust,no_run
/// use envreader::UnwrapOrExit;
///
/// // Terminates the process when DATABASE_URL is not set.
/// let database_url = envreader::get_string("DATABASE_URL", "").unwrap_or_exit();
/// ```
pub trait UnwrapOrExit<T> {
    /// Return the value, or report the error on stderr and exit with
    /// [`EXIT_CODE_CONFIG_ERROR`].
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for Result<T, EnvError> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(value) => value,
            Err(err) => {
                tracing::error!(name = err.name(), error = %err, "invalid configuration");
                eprintln!("fatal: {err}");
                std::process::exit(EXIT_CODE_CONFIG_ERROR)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unwrap_or_exit_passes_value_through() {
        let result: Result<u16, EnvError> = Ok(8080);
        assert_eq!(result.unwrap_or_exit(), 8080);
    }
}
