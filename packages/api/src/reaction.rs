//! Reaction types: `POST/DELETE /v2/farcaster/reaction`.

use serde::{Deserialize, Serialize};

/// Kind of reaction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ReactionType {
    Like,
    Recast,
}

/// Request body for adding or removing a reaction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReactionRequest {
    pub signer_uuid: String,

    pub reaction_type: ReactionType,

    /// Hash of the cast being reacted to.
    pub target: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reaction_type_is_lowercase() {
        let req = ReactionRequest {
            signer_uuid: "uuid-1".into(),
            reaction_type: ReactionType::Recast,
            target: "0xabc".into(),
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("\"reaction_type\":\"recast\""));
    }
}
