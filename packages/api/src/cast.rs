//! Cast types: publish/delete (v2) and lookup/list (v1).

use serde::{Deserialize, Serialize};

use crate::page::NextCursor;

/// Minimal author reference embedded in a [`Cast`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CastAuthor {
    pub fid: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

/// A URL or cast embedded in a cast.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Embed {
    pub url: String,
}

/// A published message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Cast {
    /// `0x`-prefixed message hash; the cast's identifier.
    pub hash: String,

    pub author: CastAuthor,

    pub text: String,

    /// RFC 3339 publication time.
    #[serde(default)]
    pub timestamp: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_hash: Option<String>,

    /// Channel the cast was posted in, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,

    #[serde(default)]
    pub embeds: Vec<Embed>,
}

/// Request body for `POST /v2/farcaster/cast`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PublishCastRequest {
    pub signer_uuid: String,

    pub text: String,

    /// Hash of the cast being replied to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub embeds: Vec<Embed>,
}

impl PublishCastRequest {
    pub fn new(signer_uuid: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            signer_uuid: signer_uuid.into(),
            text: text.into(),
            ..Default::default()
        }
    }
}

/// Response body for `POST /v2/farcaster/cast`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PublishCastResponse {
    pub success: bool,
    pub cast: Cast,
}

/// Request body for `DELETE /v2/farcaster/cast`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteCastRequest {
    pub signer_uuid: String,
    pub target_hash: String,
}

/// `{ "cast": { ... } }`: body of `GET /v1/farcaster/cast`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CastResponse {
    pub cast: Cast,
}

/// A page of casts, newest first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CastsPage {
    pub casts: Vec<Cast>,

    #[serde(default)]
    pub next: NextCursor,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn publish_request_omits_empty_optionals() {
        let req = PublishCastRequest::new("uuid-1", "gm");
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(json, r#"{"signer_uuid":"uuid-1","text":"gm"}"#);
    }

    #[test]
    fn publish_request_with_channel_and_embed() {
        let req = PublishCastRequest {
            channel_id: Some("rust".into()),
            embeds: vec![Embed {
                url: "https://example.com".into(),
            }],
            ..PublishCastRequest::new("uuid-1", "hello")
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("\"channel_id\":\"rust\""));
        assert!(json.contains("\"embeds\":[{\"url\":\"https://example.com\"}]"));
    }

    #[test]
    fn casts_page_without_next_is_last_page() {
        let json = r#"{"casts":[]}"#;
        let page: CastsPage = serde_json::from_str(json).unwrap();
        assert!(page.next.is_end());
    }
}
