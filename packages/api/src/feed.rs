//! Feed and channel types: `GET /v2/farcaster/feed`, `GET /v2/farcaster/channel`.

use serde::{Deserialize, Serialize};

use crate::page::PageOptions;
use crate::user::User;

/// Which feed to build.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FeedType {
    /// Casts from the accounts `fid` follows.
    Following,
    /// Casts in one channel.
    Filter,
}

impl FeedType {
    pub fn as_str(self) -> &'static str {
        match self {
            FeedType::Following => "following",
            FeedType::Filter => "filter",
        }
    }
}

/// Parameters for `GET /v2/farcaster/feed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedQuery {
    pub feed_type: FeedType,

    /// Viewer fid; required for [`FeedType::Following`].
    pub fid: Option<u64>,

    /// Channel filter; required for [`FeedType::Filter`].
    pub channel_id: Option<String>,

    pub page: PageOptions,
}

impl FeedQuery {
    /// Following feed of `fid`.
    pub fn following(fid: u64) -> Self {
        Self {
            feed_type: FeedType::Following,
            fid: Some(fid),
            channel_id: None,
            page: PageOptions::default(),
        }
    }

    /// Casts posted in `channel_id`.
    pub fn channel(channel_id: impl Into<String>) -> Self {
        Self {
            feed_type: FeedType::Filter,
            fid: None,
            channel_id: Some(channel_id.into()),
            page: PageOptions::default(),
        }
    }

    /// Query pairs in the order the service documents them.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("feed_type", self.feed_type.as_str().to_string())];
        if let Some(fid) = self.fid {
            pairs.push(("fid", fid.to_string()));
        }
        if let Some(channel_id) = &self.channel_id {
            pairs.push(("filter_type", "channel_id".to_string()));
            pairs.push(("channel_id", channel_id.clone()));
        }
        pairs.extend(self.page.to_query());
        pairs
    }
}

/// A topic channel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Channel {
    /// Short id, e.g. `rust`.
    pub id: String,

    #[serde(default)]
    pub name: String,

    /// Parent URL casts in this channel point at.
    #[serde(default)]
    pub url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lead: Option<User>,
}

/// `{ "channel": { ... } }`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChannelResponse {
    pub channel: Channel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn following_query_carries_fid_and_limit() {
        let q = FeedQuery::following(3).to_query();
        assert_eq!(q[0], ("feed_type", "following".to_string()));
        assert!(q.contains(&("fid", "3".to_string())));
        assert!(q.contains(&("limit", "25".to_string())));
    }

    #[test]
    fn channel_query_uses_filter_type() {
        let q = FeedQuery::channel("rust").to_query();
        assert_eq!(q[0], ("feed_type", "filter".to_string()));
        assert!(q.contains(&("filter_type", "channel_id".to_string())));
        assert!(q.contains(&("channel_id", "rust".to_string())));
    }
}
