//! Validated configuration types.

mod api_key;
mod base_url;

pub use api_key::ApiKey;
pub use base_url::{BaseUrl, DEFAULT_BASE_URL};
