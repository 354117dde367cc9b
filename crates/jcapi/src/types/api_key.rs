//! Administrator API key type.

use std::fmt;

use crate::error::{Error, InvalidInputError};

/// A JumpCloud administrator API key.
///
/// The key is forwarded verbatim in the `x-api-key` header of every request.
///
/// # Security
///
/// The key is never exposed in Debug output to prevent accidental logging.
///
/// # Example
///
/// ```
/// use jcapi::ApiKey;
///
/// let key = ApiKey::new("abc123").unwrap();
/// assert_eq!(format!("{:?}", key), "ApiKey([REDACTED])");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Create a new API key.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, Error> {
        let key = key.into();
        if key.is_empty() {
            return Err(InvalidInputError::ApiKey {
                reason: "cannot be empty".to_string(),
            }
            .into());
        }
        Ok(Self(key))
    }

    /// Returns the raw key.
    ///
    /// Use this only when constructing request headers.
    pub(crate) fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey([REDACTED])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_hides_secret_in_debug() {
        let key = ApiKey::new("secret123").unwrap();
        let debug = format!("{:?}", key);
        assert!(!debug.contains("secret123"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn api_key_exposes_raw_value() {
        let key = ApiKey::new("secret123").unwrap();
        assert_eq!(key.expose(), "secret123");
    }

    #[test]
    fn invalid_empty() {
        assert!(ApiKey::new("").is_err());
    }
}
