//! Request dispatcher.

use hyper::ext::ReasonPhrase;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Method, StatusCode};
use serde_json::Value;
use tracing::{debug, instrument, trace, warn};

use crate::Result;
use crate::error::{Error, TransportError};

use super::JcApi;

/// Documented maximum response size. Not enforced; larger bodies are logged.
pub const RESPONSE_SIZE_LIMIT: usize = 256 * 1024;

const API_KEY_HEADER: &str = "x-api-key";

impl JcApi {
    /// Perform one request and decode the response body as JSON.
    ///
    /// `verb` is passed through as an opaque method token, so extension verbs
    /// such as `LIST` work. `path` is appended to the base URL.
    ///
    /// A fresh HTTP client with pooling disabled is built for every call.
    ///
    /// # Errors
    ///
    /// Fails if the request cannot be built, the network call fails, the
    /// status is anything but `200 OK`, the body cannot be read, or the body
    /// is not valid JSON.
    #[instrument(skip(self, body), fields(base = %self.base_url))]
    pub async fn dispatch(&self, verb: &str, path: &str, body: Option<Vec<u8>>) -> Result<Value> {
        let url = self.base_url.endpoint(path);
        debug!(verb, %url, "JumpCloud request");
        if let Some(body) = &body {
            trace!(body = %String::from_utf8_lossy(body), "request body");
        }

        let method = Method::from_bytes(verb.as_bytes()).map_err(|e| Error::Request {
            message: format!("invalid verb '{}': {}", verb, e),
        })?;

        let client = reqwest::Client::builder()
            .user_agent(concat!("jcapi/", env!("CARGO_PKG_VERSION")))
            .pool_max_idle_per_host(0)
            .build()
            .map_err(|e| Error::Request {
                message: e.to_string(),
            })?;

        let mut request = client.request(method, &url).headers(self.headers()?);
        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().await.map_err(TransportError::from)?;

        let status = response.status();
        trace!(status = %status, "JumpCloud response");
        if status != StatusCode::OK {
            return Err(Error::Status {
                status: status_line(&response),
            });
        }

        let buffer = response.bytes().await.map_err(|e| Error::Body {
            message: e.to_string(),
        })?;
        if buffer.len() > RESPONSE_SIZE_LIMIT {
            warn!(
                size = buffer.len(),
                limit = RESPONSE_SIZE_LIMIT,
                "response exceeds documented size limit"
            );
        }
        trace!(body = %String::from_utf8_lossy(&buffer), "response body");

        Ok(serde_json::from_slice(&buffer)?)
    }

    /// Headers sent with every request.
    fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let key = HeaderValue::from_str(self.api_key.expose()).map_err(|e| Error::Request {
            message: format!("API key is not a valid header value: {}", e),
        })?;
        headers.insert(API_KEY_HEADER, key);

        Ok(headers)
    }
}

/// Status code and reason as sent by the server, e.g. `404 Resource Missing`.
///
/// Falls back to the canonical reason when the server's matches it.
fn status_line(response: &reqwest::Response) -> String {
    let status = response.status();
    match response.extensions().get::<ReasonPhrase>() {
        Some(reason) => format!(
            "{} {}",
            status.as_u16(),
            String::from_utf8_lossy(reason.as_bytes())
        ),
        None => status.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ApiKey;

    #[test]
    fn headers_carry_api_key() {
        let api = JcApi::with_default_url(ApiKey::new("abc123").unwrap());
        let headers = api.headers().unwrap();
        assert_eq!(headers["x-api-key"], "abc123");
        assert_eq!(headers[CONTENT_TYPE], "application/json");
        assert_eq!(headers[ACCEPT], "application/json");
    }

    #[test]
    fn headers_reject_unprintable_key() {
        let api = JcApi::with_default_url(ApiKey::new("bad\nkey").unwrap());
        assert!(matches!(api.headers(), Err(Error::Request { .. })));
    }
}
