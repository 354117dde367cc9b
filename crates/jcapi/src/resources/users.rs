//! System users.

use serde_json::Value;
use tracing::{debug, instrument};

use crate::client::JcApi;
use crate::fragments::{email_filter, json_key_bool, json_key_value, json_object, json_string_array};
use crate::value::{bool_or_default, extract_string_array, string_or_default, u16_or_default};
use crate::{Operation, Result};

use super::{JcTag, results_of, write_path};

const USERS_PATH: &str = "/systemusers";
const USER_SEARCH_PATH: &str = "/search/systemusers";

/// A JumpCloud system user.
///
/// `tags` is not returned by the service. It is filled in by
/// [`JcUser::add_tags`] from the membership lists of the tag collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JcUser {
    pub id: String,
    pub user_name: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Only sent on writes; never returned by the service.
    pub password: Option<String>,
    pub sudo: bool,
    pub passwordless_sudo: bool,
    pub allow_public_key: bool,
    pub activated: bool,
    pub account_locked: bool,
    pub public_key: String,
    pub unix_uid: u16,
    pub unix_guid: u16,
    /// Tag names as stored on the user record.
    pub tag_names: Vec<String>,
    /// Tags whose membership lists contain this user.
    pub tags: Vec<JcTag>,
}

impl JcUser {
    /// Build a user from a decoded JSON object.
    ///
    /// Scalar fields of the wrong type read as empty or zero; a tag list that
    /// is not an array of strings is an error.
    pub fn from_value(value: &Value) -> Result<Self> {
        Ok(Self {
            id: string_or_default(&value["_id"]),
            user_name: string_or_default(&value["username"]),
            first_name: string_or_default(&value["firstname"]),
            last_name: string_or_default(&value["lastname"]),
            email: string_or_default(&value["email"]),
            password: None,
            sudo: bool_or_default(&value["sudo"]),
            passwordless_sudo: bool_or_default(&value["passwordless_sudo"]),
            allow_public_key: bool_or_default(&value["allow_public_key"]),
            activated: bool_or_default(&value["activated"]),
            account_locked: bool_or_default(&value["account_locked"]),
            public_key: string_or_default(&value["public_key"]),
            unix_uid: u16_or_default(&value["unix_uid"]),
            unix_guid: u16_or_default(&value["unix_guid"]),
            tag_names: extract_string_array(&value["tags"])?,
            tags: Vec::new(),
        })
    }

    /// Append every tag whose member list contains this user's id.
    ///
    /// A tag listing the user more than once is appended more than once.
    pub fn add_tags(&mut self, tags: &[JcTag]) {
        for tag in tags {
            for member in &tag.system_users {
                if *member == self.id {
                    self.tags.push(tag.clone());
                }
            }
        }
    }

    /// Request body for insert and update.
    pub fn to_request_json(&self) -> String {
        let mut fields = vec![
            json_key_value("email", &self.email),
            json_key_value("username", &self.user_name),
            json_key_value("firstname", &self.first_name),
            json_key_value("lastname", &self.last_name),
            json_key_bool("sudo", self.sudo),
            json_key_bool("passwordless_sudo", self.passwordless_sudo),
            json_key_bool("allow_public_key", self.allow_public_key),
            json_key_bool("activated", self.activated),
            json_key_bool("account_locked", self.account_locked),
            json_string_array("tags", &self.tag_names),
        ];

        if let Some(password) = &self.password {
            fields.push(json_key_value("password", password));
        }
        if !self.public_key.is_empty() {
            fields.push(json_key_value("public_key", &self.public_key));
        }
        if self.unix_uid != 0 {
            fields.push(format!("\"unix_uid\":{}", self.unix_uid));
        }
        if self.unix_guid != 0 {
            fields.push(format!("\"unix_guid\":{}", self.unix_guid));
        }

        json_object(fields)
    }
}

impl JcApi {
    /// List all system users, optionally joined with their tags.
    #[instrument(skip(self))]
    pub async fn list_users(&self, with_tags: bool) -> Result<Vec<JcUser>> {
        let response = self.get(USERS_PATH).await?;
        let mut users = users_from_results(&response)?;
        debug!(count = users.len(), "listed users");

        if with_tags {
            self.attach_tags(&mut users).await?;
        }
        Ok(users)
    }

    /// Fetch one system user by id.
    #[instrument(skip(self))]
    pub async fn get_user_by_id(&self, id: &str, with_tags: bool) -> Result<JcUser> {
        let response = self.get(&format!("{}/{}", USERS_PATH, id)).await?;
        let mut user = JcUser::from_value(&response)?;

        if with_tags {
            self.attach_tags(std::slice::from_mut(&mut user)).await?;
        }
        Ok(user)
    }

    /// Search system users by email address.
    ///
    /// The email is embedded in the filter body without escaping.
    #[instrument(skip(self))]
    pub async fn find_users_by_email(&self, email: &str, with_tags: bool) -> Result<Vec<JcUser>> {
        let response = self.post(USER_SEARCH_PATH, email_filter(email)).await?;
        let mut users = users_from_results(&response)?;

        if with_tags {
            self.attach_tags(&mut users).await?;
        }
        Ok(users)
    }

    /// Create (`Insert`) or update (`Update`) a user. Returns the user's id.
    #[instrument(skip(self, user), fields(user = %user.user_name))]
    pub async fn add_update_user(&self, op: Operation, user: &JcUser) -> Result<String> {
        let path = write_path(op, USERS_PATH, &user.id, "users")?;
        let body = user.to_request_json().into_bytes();

        let response = self.dispatch(op.verb(), &path, Some(body)).await?;
        Ok(string_or_default(&response["_id"]))
    }

    /// Delete a user by id.
    #[instrument(skip(self))]
    pub async fn delete_user(&self, id: &str) -> Result<()> {
        self.delete(&format!("{}/{}", USERS_PATH, id)).await?;
        Ok(())
    }

    async fn attach_tags(&self, users: &mut [JcUser]) -> Result<()> {
        let tags = self.list_tags().await?;
        for user in users.iter_mut() {
            user.add_tags(&tags);
        }
        Ok(())
    }
}

fn users_from_results(response: &Value) -> Result<Vec<JcUser>> {
    results_of(response)?.iter().map(JcUser::from_value).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tag(id: &str, members: &[&str]) -> JcTag {
        JcTag {
            id: id.to_string(),
            name: id.to_lowercase(),
            system_users: members.iter().map(|m| m.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn add_tags_matches_membership() {
        let mut user = JcUser {
            id: "U1".to_string(),
            ..Default::default()
        };
        let tags = vec![tag("T1", &["U1", "U2"]), tag("T2", &["U3"])];

        user.add_tags(&tags);

        assert_eq!(user.tags.len(), 1);
        assert_eq!(user.tags[0].id, "T1");
    }

    #[test]
    fn add_tags_duplicate_membership_duplicates_tag() {
        let mut user = JcUser {
            id: "U1".to_string(),
            ..Default::default()
        };
        user.add_tags(&[tag("T1", &["U1", "U1"])]);
        assert_eq!(user.tags.len(), 2);
    }

    #[test]
    fn from_value_lenient_scalars() {
        let user = JcUser::from_value(&json!({
            "_id": "U1",
            "username": "alice",
            "email": 12,
            "sudo": true,
            "unix_uid": 5001,
            "unix_guid": "5001",
            "tags": ["ops"]
        }))
        .unwrap();

        assert_eq!(user.id, "U1");
        assert_eq!(user.user_name, "alice");
        assert_eq!(user.email, "");
        assert!(user.sudo);
        assert_eq!(user.unix_uid, 5001);
        assert_eq!(user.unix_guid, 0);
        assert_eq!(user.tag_names, vec!["ops"]);
    }

    #[test]
    fn from_value_strict_tags() {
        let result = JcUser::from_value(&json!({"_id": "U1", "tags": ["ops", 3]}));
        assert!(result.is_err());
    }

    #[test]
    fn request_json_uses_string_booleans() {
        let user = JcUser {
            user_name: "alice".to_string(),
            email: "alice@example.com".to_string(),
            sudo: true,
            tag_names: vec!["ops".to_string()],
            password: Some("hunter2".to_string()),
            unix_uid: 5001,
            ..Default::default()
        };

        let body: Value = serde_json::from_str(&user.to_request_json()).unwrap();
        assert_eq!(body["username"], "alice");
        assert_eq!(body["sudo"], "true");
        assert_eq!(body["activated"], "false");
        assert_eq!(body["tags"], json!(["ops"]));
        assert_eq!(body["password"], "hunter2");
        assert_eq!(body["unix_uid"], 5001);
        assert!(body.get("unix_guid").is_none());
        assert!(body.get("public_key").is_none());
    }
}
