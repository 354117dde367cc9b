//! HTTP client for the JumpCloud API.
//!
//! All verb helpers funnel through [`JcApi::dispatch`], which performs exactly
//! one request and decodes the body into a generic JSON value.

mod dispatch;
mod operation;

pub use dispatch::RESPONSE_SIZE_LIMIT;
pub use operation::Operation;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::Result;
use crate::types::{ApiKey, BaseUrl};

/// Client for the JumpCloud directory API.
///
/// Holds the administrator API key and the base URL. It is a plain value:
/// no connection or HTTP client is kept between calls.
#[derive(Debug, Clone)]
pub struct JcApi {
    api_key: ApiKey,
    base_url: BaseUrl,
}

impl JcApi {
    /// Create a new client for the given base URL.
    pub fn new(api_key: ApiKey, base_url: BaseUrl) -> Self {
        Self { api_key, base_url }
    }

    /// Create a new client for the production endpoint.
    pub fn with_default_url(api_key: ApiKey) -> Self {
        Self::new(api_key, BaseUrl::default())
    }

    /// Returns the API key this client authenticates with.
    pub fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the base URL this client is configured for.
    pub fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Fetch a single resource (GET).
    pub async fn get(&self, path: &str) -> Result<Value> {
        self.dispatch(Operation::Read.verb(), path, None).await
    }

    /// List a collection with the service's `LIST` verb.
    pub async fn list(&self, path: &str) -> Result<Value> {
        self.dispatch(Operation::List.verb(), path, None).await
    }

    /// Create a resource (POST).
    pub async fn post(&self, path: &str, body: Vec<u8>) -> Result<Value> {
        self.dispatch(Operation::Insert.verb(), path, Some(body)).await
    }

    /// Update a resource (PUT).
    pub async fn put(&self, path: &str, body: Vec<u8>) -> Result<Value> {
        self.dispatch(Operation::Update.verb(), path, Some(body)).await
    }

    /// Delete a resource (DELETE).
    pub async fn delete(&self, path: &str) -> Result<Value> {
        self.dispatch(Operation::Delete.verb(), path, None).await
    }
}

/// Decode a generic JSON value into a typed resource.
pub fn decode<T: DeserializeOwned>(value: Value) -> Result<T> {
    Ok(serde_json::from_value(value)?)
}
