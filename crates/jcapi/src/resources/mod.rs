//! Typed resource wrappers.
//!
//! Each submodule adds `JcApi` methods for one resource collection and the
//! record type they decode into.

mod commands;
mod systems;
mod tags;
mod users;

pub use commands::{CommandResponse, CommandResponseData, JcCommand, JcCommandResult};
pub use systems::JcSystem;
pub use tags::JcTag;
pub use users::JcUser;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::Result;
use crate::error::{Error, InvalidInputError, ShapeError};
use crate::Operation;

/// Envelope returned by collection endpoints.
#[derive(Debug, Deserialize)]
pub(crate) struct ListResponse<T> {
    #[serde(rename = "totalCount", default)]
    pub total_count: u64,
    #[serde(default)]
    pub results: Vec<T>,
}

/// Borrow the `results` array of a collection envelope.
pub(crate) fn results_of(value: &Value) -> Result<&[Value]> {
    match &value["results"] {
        Value::Array(items) => Ok(items),
        Value::Null => Ok(&[]),
        _ => Err(ShapeError::NotAnArray {
            found: "a non-array `results` field",
        }
        .into()),
    }
}

/// Path for an insert or update, or an error for any other operation.
pub(crate) fn write_path(
    op: Operation,
    collection: &str,
    id: &str,
    resource: &'static str,
) -> Result<String> {
    match op {
        Operation::Insert => Ok(collection.to_string()),
        Operation::Update => Ok(format!("{}/{}", collection, id)),
        other => Err(Error::from(InvalidInputError::UnsupportedOperation {
            op: other.to_string(),
            resource,
        })),
    }
}

/// Deserialize `null` as the type's default value.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
