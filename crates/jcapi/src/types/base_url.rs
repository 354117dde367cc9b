//! API base URL type.

use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::error::{Error, InvalidInputError};

/// The production JumpCloud API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://console.jumpcloud.com/api";

/// A validated JumpCloud API base URL.
///
/// The URL must be HTTPS with a host, or plain HTTP to localhost. Request
/// paths are appended to it by plain concatenation.
///
/// # Example
///
/// ```
/// use jcapi::BaseUrl;
///
/// let base = BaseUrl::new("https://console.jumpcloud.com/api/").unwrap();
/// assert_eq!(base.endpoint("/systemusers"),
///            "https://console.jumpcloud.com/api/systemusers");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// Create a new base URL from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not valid or doesn't meet requirements.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let url = Url::parse(s).map_err(|e| invalid(s, &e.to_string()))?;

        let local = matches!(url.host_str(), Some("localhost" | "127.0.0.1" | "[::1]"));
        match url.scheme() {
            "https" if url.has_host() => {}
            "http" if local => {}
            _ => return Err(invalid(s, "must be an https URL (http only for localhost)")),
        }

        Ok(Self(s.trim_end_matches('/').to_string()))
    }

    /// Returns the full URL for a request path such as `/systemusers`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.0, path)
    }

    /// Returns the base URL as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn invalid(value: &str, reason: &str) -> Error {
    InvalidInputError::BaseUrl {
        value: value.to_string(),
        reason: reason.to_string(),
    }
    .into()
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self(DEFAULT_BASE_URL.to_string())
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for BaseUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_production() {
        assert_eq!(BaseUrl::default().as_str(), DEFAULT_BASE_URL);
        assert_eq!(BaseUrl::new(DEFAULT_BASE_URL).unwrap(), BaseUrl::default());
    }

    #[test]
    fn endpoint_concatenates_path() {
        let base = BaseUrl::new("https://example.com/api").unwrap();
        assert_eq!(
            base.endpoint("/commands/abc/results"),
            "https://example.com/api/commands/abc/results"
        );
    }

    #[test]
    fn trailing_slash_trimmed() {
        let base = BaseUrl::new("https://example.com/api/").unwrap();
        assert_eq!(base.as_str(), "https://example.com/api");
    }

    #[test]
    fn localhost_http_allowed() {
        assert!(BaseUrl::new("http://localhost:8080/api").is_ok());
        assert!(BaseUrl::new("http://127.0.0.1:3000").is_ok());
    }

    #[test]
    fn remote_http_rejected() {
        assert!(BaseUrl::new("http://console.jumpcloud.com/api").is_err());
    }

    #[test]
    fn invalid_relative() {
        assert!(BaseUrl::new("/api").is_err());
    }

    #[test]
    fn reason_is_reported() {
        let err = BaseUrl::new("ftp://example.com").unwrap_err();
        assert!(err.to_string().contains("must be an https URL"));
    }

    #[test]
    fn invalid_not_a_base() {
        assert!(BaseUrl::new("mailto:admin@example.com").is_err());
    }
}
