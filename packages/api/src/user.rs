//! User types: v1 user lookups, v2 bulk lookup and profile edits.

use serde::{Deserialize, Serialize};

use crate::page::NextCursor;

/// Free-text bio attached to a profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Bio {
    pub text: String,
}

/// Profile block of a [`User`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    #[serde(default)]
    pub bio: Bio,
}

/// A protocol identity.
///
/// Only the fields the client relies on are modelled; anything else the
/// service sends is ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// The user's protocol identifier.
    pub fid: u64,

    #[serde(default)]
    pub username: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// Address that currently holds root authority over `fid`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custody_address: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pfp_url: Option<String>,

    #[serde(default)]
    pub profile: UserProfile,

    #[serde(default)]
    pub follower_count: u64,

    #[serde(default)]
    pub following_count: u64,

    /// Verified Ethereum addresses.
    #[serde(default)]
    pub verifications: Vec<String>,
}

impl User {
    /// A user with only `fid` and `username` set.
    pub fn new(fid: u64, username: impl Into<String>) -> Self {
        Self {
            fid,
            username: username.into(),
            display_name: None,
            custody_address: None,
            pfp_url: None,
            profile: UserProfile::default(),
            follower_count: 0,
            following_count: 0,
            verifications: vec![],
        }
    }
}

/// `{ "user": { ... } }`: body of single-user lookups.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserResponse {
    pub user: User,
}

/// Response body for `GET /v2/farcaster/user/bulk`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BulkUsersResponse {
    pub users: Vec<User>,
}

/// A page of users (v1 followers list).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UsersPage {
    pub users: Vec<User>,

    #[serde(default)]
    pub next: NextCursor,
}

/// Request body for `PATCH /v2/farcaster/user`: edit the signer's profile.
///
/// Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateUserRequest {
    pub signer_uuid: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pfp_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl UpdateUserRequest {
    /// `true` when the request would change nothing.
    pub fn is_empty(&self) -> bool {
        self.bio.is_none()
            && self.pfp_url.is_none()
            && self.url.is_none()
            && self.username.is_none()
            && self.display_name.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_tolerates_missing_and_unknown_fields() {
        let json = r#"{"fid":194,"username":"rish","active_status":"active","extra":{"x":1}}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.fid, 194);
        assert_eq!(user.username, "rish");
        assert!(user.verifications.is_empty());
        assert_eq!(user.profile.bio.text, "");
    }

    #[test]
    fn update_request_omits_unset_fields() {
        let req = UpdateUserRequest {
            signer_uuid: "uuid-1".into(),
            bio: Some("hello".into()),
            ..Default::default()
        };
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(json, r#"{"signer_uuid":"uuid-1","bio":"hello"}"#);
        assert!(!req.is_empty());
    }

    #[test]
    fn update_request_without_changes_is_empty() {
        let req = UpdateUserRequest {
            signer_uuid: "uuid-1".into(),
            ..Default::default()
        };
        assert!(req.is_empty());
    }
}
