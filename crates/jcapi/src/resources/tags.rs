//! Tags.

use serde::Deserialize;
use tracing::{debug, instrument};

use crate::client::{JcApi, decode};
use crate::fragments::{json_key_bool, json_key_value, json_object, json_string_array};
use crate::{Operation, Result};

use super::{ListResponse, null_as_default, write_path};

const TAGS_PATH: &str = "/tags";

/// A tag grouping users and systems by id.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct JcTag {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "groupName", deserialize_with = "null_as_default")]
    pub group_name: String,
    #[serde(rename = "groupGid", deserialize_with = "null_as_default")]
    pub group_gid: String,
    /// Ids of member systems.
    #[serde(deserialize_with = "null_as_default")]
    pub systems: Vec<String>,
    /// Ids of member users.
    #[serde(rename = "systemusers", deserialize_with = "null_as_default")]
    pub system_users: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub expired: bool,
}

impl JcTag {
    /// Request body for insert and update.
    pub fn to_request_json(&self) -> String {
        let mut fields = vec![
            json_key_value("name", &self.name),
            json_string_array("systems", &self.systems),
            json_string_array("systemusers", &self.system_users),
            json_key_bool("expired", self.expired),
        ];
        if !self.group_name.is_empty() {
            fields.push(json_key_value("groupName", &self.group_name));
        }
        if !self.group_gid.is_empty() {
            fields.push(json_key_value("groupGid", &self.group_gid));
        }
        json_object(fields)
    }
}

impl JcApi {
    /// List all tags.
    #[instrument(skip(self))]
    pub async fn list_tags(&self) -> Result<Vec<JcTag>> {
        let list: ListResponse<JcTag> = decode(self.get(TAGS_PATH).await?)?;
        debug!(total = list.total_count, returned = list.results.len(), "listed tags");
        Ok(list.results)
    }

    /// Fetch one tag by name.
    #[instrument(skip(self))]
    pub async fn get_tag_by_name(&self, name: &str) -> Result<JcTag> {
        decode(self.get(&format!("{}/{}", TAGS_PATH, name)).await?)
    }

    /// Create (`Insert`) or update (`Update`) a tag.
    #[instrument(skip(self, tag), fields(tag = %tag.name))]
    pub async fn add_update_tag(&self, op: Operation, tag: &JcTag) -> Result<JcTag> {
        let path = write_path(op, TAGS_PATH, &tag.id, "tags")?;
        let body = tag.to_request_json().into_bytes();
        decode(self.dispatch(op.verb(), &path, Some(body)).await?)
    }

    /// Delete a tag.
    #[instrument(skip(self, tag), fields(tag = %tag.name))]
    pub async fn delete_tag(&self, tag: &JcTag) -> Result<()> {
        self.delete(&format!("{}/{}", TAGS_PATH, tag.id)).await?;
        Ok(())
    }
}
