//! Helpers for code generated by `#[derive(FromEnv)]`

use crate::error::EnvError;
use crate::reader::EnvReader;
use crate::source::ReadEnv;

/// Load a required value through a custom deserializer function
///
/// The variable is read with [`EnvReader::get_string`] and an empty default,
/// so an absent variable is reported as [`EnvError::Missing`].
#[doc(hidden)]
pub fn deserialize_with<T, E, F, Err>(
    reader: &EnvReader<E>,
    env_name: &str,
    deserializer: F,
) -> Result<T, EnvError>
where
    E: ReadEnv,
    F: FnOnce(&str) -> Result<T, Err>,
    Err: std::fmt::Display,
{
    let value = reader.get_string(env_name, "")?;
    deserializer(&value).map_err(|e| EnvError::parse_error::<T>(env_name, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MapEnv;
    use std::str::FromStr;

    #[test]
    fn test_deserialize_with_success() {
        let reader = EnvReader::new(MapEnv::new().with_var("PORT", " 8080 "));
        let port: u16 = deserialize_with(&reader, "PORT", u16::from_str).unwrap();
        assert_eq!(port, 8080);
    }

    #[test]
    fn test_deserialize_with_missing() {
        let reader = EnvReader::new(MapEnv::new());
        let result = deserialize_with(&reader, "PORT", u16::from_str);
        assert!(matches!(result, Err(EnvError::Missing { .. })));
    }

    #[test]
    fn test_deserialize_with_parse_error_contains_type_info() {
        let reader = EnvReader::new(MapEnv::new().with_var("PORT", "not_a_number"));
        let result = deserialize_with(&reader, "PORT", u16::from_str);

        match result {
            Err(EnvError::Parse { type_name, .. }) => {
                assert!(type_name.contains("u16"));
            }
            _ => panic!("Expected Parse error"),
        }
    }
}
