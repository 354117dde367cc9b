//! Saved commands and their results.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::client::{JcApi, decode};
use crate::error::Error;
use crate::{Operation, Result};

use super::{ListResponse, null_as_default, write_path};

const COMMANDS_PATH: &str = "/commands";
const COMMAND_RESULTS_PATH: &str = "/commandresults";

/// A saved command definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JcCommand {
    #[serde(rename = "_id", skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub command: String,
    /// `linux`, `mac` or `windows`.
    #[serde(deserialize_with = "null_as_default")]
    pub command_type: String,
    /// Id of the user the command runs as.
    #[serde(deserialize_with = "null_as_default")]
    pub user: String,
    /// `manual`, `trigger` or `repeated`.
    #[serde(deserialize_with = "null_as_default")]
    pub launch_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub schedule: String,
    #[serde(deserialize_with = "null_as_default")]
    pub timeout: String,
    /// Ids of target systems.
    #[serde(deserialize_with = "null_as_default")]
    pub systems: Vec<String>,
}

/// One execution of a saved command on one system.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JcCommandResult {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub command: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Id of the system the command ran on.
    #[serde(deserialize_with = "null_as_default")]
    pub system: String,
    #[serde(deserialize_with = "null_as_default")]
    pub system_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub organization: String,
    #[serde(deserialize_with = "null_as_default")]
    pub user: String,
    pub sudo: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub request_time: String,
    #[serde(deserialize_with = "null_as_default")]
    pub response_time: String,
    #[serde(deserialize_with = "null_as_default")]
    pub response: CommandResponse,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CommandResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub error: String,
    #[serde(deserialize_with = "null_as_default")]
    pub data: CommandResponseData,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CommandResponseData {
    #[serde(deserialize_with = "null_as_default")]
    pub exit_code: i64,
    /// Captured output, possibly spanning many lines.
    #[serde(deserialize_with = "null_as_default")]
    pub output: String,
}

impl JcApi {
    /// List all saved commands.
    #[instrument(skip(self))]
    pub async fn list_commands(&self) -> Result<Vec<JcCommand>> {
        let list: ListResponse<JcCommand> = decode(self.get(COMMANDS_PATH).await?)?;
        debug!(total = list.total_count, returned = list.results.len(), "listed commands");
        Ok(list.results)
    }

    /// Fetch one saved command by id.
    #[instrument(skip(self))]
    pub async fn get_command_by_id(&self, id: &str) -> Result<JcCommand> {
        decode(self.get(&format!("{}/{}", COMMANDS_PATH, id)).await?)
    }

    /// Create (`Insert`) or update (`Update`) a saved command.
    #[instrument(skip(self, command), fields(command = %command.name))]
    pub async fn add_update_command(
        &self,
        op: Operation,
        command: &JcCommand,
    ) -> Result<JcCommand> {
        let path = write_path(op, COMMANDS_PATH, &command.id, "commands")?;
        let body = serde_json::to_vec(command).map_err(|e| Error::Request {
            message: e.to_string(),
        })?;
        decode(self.dispatch(op.verb(), &path, Some(body)).await?)
    }

    /// Delete a saved command by id.
    #[instrument(skip(self))]
    pub async fn delete_command(&self, id: &str) -> Result<()> {
        self.delete(&format!("{}/{}", COMMANDS_PATH, id)).await?;
        Ok(())
    }

    /// Fetch every result of a saved command.
    #[instrument(skip(self))]
    pub async fn get_command_results_by_saved_command_id(
        &self,
        id: &str,
    ) -> Result<Vec<JcCommandResult>> {
        let results: Vec<JcCommandResult> =
            decode(self.get(&format!("{}/{}/results", COMMANDS_PATH, id)).await?)?;
        debug!(count = results.len(), "fetched command results");
        Ok(results)
    }

    /// List results across all commands.
    #[instrument(skip(self))]
    pub async fn list_command_results(&self) -> Result<Vec<JcCommandResult>> {
        let list: ListResponse<JcCommandResult> = decode(self.get(COMMAND_RESULTS_PATH).await?)?;
        debug!(
            total = list.total_count,
            returned = list.results.len(),
            "listed command results"
        );
        Ok(list.results)
    }

    /// Delete one command result by id.
    #[instrument(skip(self))]
    pub async fn delete_command_result(&self, id: &str) -> Result<()> {
        self.delete(&format!("{}/{}", COMMAND_RESULTS_PATH, id)).await?;
        Ok(())
    }
}
