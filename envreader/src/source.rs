//! Environment providers
//!
//! [`EnvReader`](crate::EnvReader) never touches `std::env` directly; it asks a
//! [`ReadEnv`] implementation. Production code uses [`SystemEnv`], tests and
//! embedders can hand in a [`MapEnv`] instead of mutating the process
//! environment.

use std::collections::HashMap;
use std::env::VarError;
use std::ffi::OsString;

/// Read-only access to an environment variable table.
///
/// `Err(VarError::NotPresent)` means the variable is absent,
/// `Err(VarError::NotUnicode(_))` means it is set but not valid UTF-8.
///
/// # Thread Safety
///
/// Does **not** require `Send + Sync`. Add the bounds at your call site:
///
/// ```ignore
/// fn spawn_work<E: ReadEnv + Send + Sync + 'static>(env: Arc<E>) { … }
/// ```
pub trait ReadEnv {
    fn var(&self, key: &str) -> Result<String, VarError>;
}

impl<E: ReadEnv + ?Sized> ReadEnv for &E {
    #[inline]
    fn var(&self, key: &str) -> Result<String, VarError> {
        (**self).var(key)
    }
}

/// Zero-sized type, delegates to `std::env`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemEnv;

impl ReadEnv for SystemEnv {
    #[inline]
    fn var(&self, key: &str) -> Result<String, VarError> {
        std::env::var(key)
    }
}

/// In-memory environment table.
///
/// ```rust
/// use envreader::{EnvReader, MapEnv};
///
/// let reader = EnvReader::new(MapEnv::new().with_var("PORT", "8080"));
/// assert_eq!(reader.get_int("PORT", 80), 8080);
/// ```
#[derive(Debug, Default, Clone)]
pub struct MapEnv {
    vars: HashMap<String, OsString>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`MapEnv::set`].
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<OsString>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<OsString>) {
        self.vars.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<OsString> {
        self.vars.remove(key)
    }
}

impl ReadEnv for MapEnv {
    fn var(&self, key: &str) -> Result<String, VarError> {
        match self.vars.get(key) {
            Some(value) => value.clone().into_string().map_err(VarError::NotUnicode),
            None => Err(VarError::NotPresent),
        }
    }
}

impl<K, V> FromIterator<(K, V)> for MapEnv
where
    K: Into<String>,
    V: Into<OsString>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_env_delegation() {
        let system_env = SystemEnv;
        let std_result = std::env::var("PATH");
        let provider_result = system_env.var("PATH");
        assert_eq!(std_result.is_ok(), provider_result.is_ok());
    }

    #[test]
    fn test_system_env_missing() {
        let result = SystemEnv.var("ENVREADER_NONEXISTENT_VAR_12345");
        assert_eq!(result, Err(VarError::NotPresent));
    }

    #[test]
    fn test_map_env_lookup() {
        let env = MapEnv::new().with_var("HOST", "localhost");
        assert_eq!(env.var("HOST").unwrap(), "localhost");
        assert_eq!(env.var("PORT"), Err(VarError::NotPresent));
    }

    #[test]
    fn test_map_env_set_and_remove() {
        let mut env = MapEnv::new();
        env.set("MODE", "dev");
        env.set("MODE", "prod");
        assert_eq!(env.var("MODE").unwrap(), "prod");

        assert!(env.remove("MODE").is_some());
        assert_eq!(env.var("MODE"), Err(VarError::NotPresent));
    }

    #[test]
    fn test_map_env_from_iter() {
        let env: MapEnv = [("A", "1"), ("B", "2")].into_iter().collect();
        assert_eq!(env.var("A").unwrap(), "1");
        assert_eq!(env.var("B").unwrap(), "2");
    }

    #[test]
    fn test_reference_delegates() {
        fn lookup<E: ReadEnv>(env: E, key: &str) -> Option<String> {
            env.var(key).ok()
        }

        let env = MapEnv::new().with_var("KEY", "value");
        assert_eq!(lookup(&env, "KEY"), Some("value".to_string()));
    }

    #[cfg(unix)]
    #[test]
    fn test_map_env_not_unicode() {
        use std::os::unix::ffi::OsStringExt;

        let env = MapEnv::new().with_var("RAW", OsString::from_vec(vec![0x66, 0x80, 0x6f]));
        assert!(matches!(env.var("RAW"), Err(VarError::NotUnicode(_))));
    }
}
