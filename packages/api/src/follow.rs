//! Follow-graph writes: `POST/DELETE /v2/farcaster/user/follow`.

use serde::{Deserialize, Serialize};

/// Request body for following or unfollowing a batch of users.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FollowRequest {
    pub signer_uuid: String,

    /// The fids to (un)follow.
    pub target_fids: Vec<u64>,
}

/// Outcome for one target of a [`FollowRequest`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FollowResult {
    pub success: bool,
    pub target_fid: u64,
}

/// Response body for follow/unfollow. `success` is `true` only when every
/// target succeeded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BulkFollowResponse {
    pub success: bool,
    pub details: Vec<FollowResult>,
}

impl BulkFollowResponse {
    /// Aggregate per-target results.
    pub fn from_details(details: Vec<FollowResult>) -> Self {
        Self {
            success: details.iter().all(|d| d.success),
            details,
        }
    }
}
