//! Managed systems.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::Result;
use crate::client::{JcApi, decode};
use crate::error::Error;

use super::{ListResponse, null_as_default};

const SYSTEMS_PATH: &str = "/systems";

/// A managed system (endpoint host).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JcSystem {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub display_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub hostname: String,
    #[serde(deserialize_with = "null_as_default")]
    pub os: String,
    #[serde(deserialize_with = "null_as_default")]
    pub version: String,
    #[serde(deserialize_with = "null_as_default")]
    pub arch: String,
    #[serde(deserialize_with = "null_as_default")]
    pub agent_version: String,
    pub active: bool,
    pub allow_ssh_root_login: bool,
    pub allow_ssh_password_authentication: bool,
    pub allow_multi_factor_authentication: bool,
    #[serde(rename = "remoteIP", deserialize_with = "null_as_default")]
    pub remote_ip: String,
    #[serde(deserialize_with = "null_as_default")]
    pub last_contact: String,
    /// Tag ids.
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
}

/// Editable fields sent on update.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SystemUpdateRequest<'a> {
    display_name: &'a str,
    allow_ssh_root_login: bool,
    allow_ssh_password_authentication: bool,
    allow_multi_factor_authentication: bool,
    tags: &'a [String],
}

impl<'a> From<&'a JcSystem> for SystemUpdateRequest<'a> {
    fn from(system: &'a JcSystem) -> Self {
        Self {
            display_name: &system.display_name,
            allow_ssh_root_login: system.allow_ssh_root_login,
            allow_ssh_password_authentication: system.allow_ssh_password_authentication,
            allow_multi_factor_authentication: system.allow_multi_factor_authentication,
            tags: &system.tags,
        }
    }
}

impl JcApi {
    /// List all systems.
    #[instrument(skip(self))]
    pub async fn list_systems(&self) -> Result<Vec<JcSystem>> {
        let list: ListResponse<JcSystem> = decode(self.get(SYSTEMS_PATH).await?)?;
        debug!(total = list.total_count, returned = list.results.len(), "listed systems");
        Ok(list.results)
    }

    /// Fetch one system by id.
    #[instrument(skip(self))]
    pub async fn get_system_by_id(&self, id: &str) -> Result<JcSystem> {
        decode(self.get(&format!("{}/{}", SYSTEMS_PATH, id)).await?)
    }

    /// Update the editable fields of a system.
    #[instrument(skip(self, system), fields(system = %system.id))]
    pub async fn update_system(&self, system: &JcSystem) -> Result<JcSystem> {
        let request = SystemUpdateRequest::from(system);
        let body = serde_json::to_vec(&request).map_err(|e| Error::Request {
            message: e.to_string(),
        })?;
        decode(self.put(&format!("{}/{}", SYSTEMS_PATH, system.id), body).await?)
    }

    /// Delete a system by id.
    #[instrument(skip(self))]
    pub async fn delete_system(&self, id: &str) -> Result<()> {
        self.delete(&format!("{}/{}", SYSTEMS_PATH, id)).await?;
        Ok(())
    }
}
