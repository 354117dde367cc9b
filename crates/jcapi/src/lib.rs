//! jcapi - JumpCloud directory API client.
//!
//! Every operation is a single HTTP request against the directory service,
//! funnelled through one dispatcher on [`JcApi`]. Resource wrappers for users,
//! tags, systems and commands decode the JSON responses into typed records.
//!
//! # Example
//!
//! ```no_run
//! use jcapi::{ApiKey, JcApi};
//!
//! # async fn example() -> Result<(), jcapi::Error> {
//! let api = JcApi::with_default_url(ApiKey::new("my-admin-key")?);
//!
//! for result in api.get_command_results_by_saved_command_id("5a1b2c3d").await? {
//!     println!("{}: {}", result.system, result.response.data.output);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod fragments;
pub mod resources;
pub mod types;
pub mod value;

// Re-export primary types at crate root for convenience
pub use client::{JcApi, Operation, RESPONSE_SIZE_LIMIT};
pub use error::Error;
pub use resources::{
    CommandResponse, CommandResponseData, JcCommand, JcCommandResult, JcSystem, JcTag, JcUser,
};
pub use types::{ApiKey, BaseUrl, DEFAULT_BASE_URL};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
