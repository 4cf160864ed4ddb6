//! Signer types: `POST/GET /v2/farcaster/signer`, `POST /v2/farcaster/signer/signed_key`.
//!
//! A signer is a delegated Ed25519 key that performs writes for a user. Its
//! authoritative state lives on the remote service; a [`Signer`] value is a
//! snapshot taken at the time of the call.
//!
//! ```text
//! generated ──signed_key──► pending_approval ──user approves──► approved
//!      └────────────────────────┴──────────────────────────────► revoked
//! ```

use serde::{Deserialize, Serialize};

/// Lifecycle state of a [`Signer`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SignerStatus {
    /// Key material exists but no signed key request has been registered.
    Generated,
    /// A signed key request is registered; waiting for the user to approve
    /// via `signer_approval_url`.
    PendingApproval,
    /// The user approved the key on-chain. Writes are accepted.
    Approved,
    /// The key was removed. Terminal.
    Revoked,
}

impl SignerStatus {
    /// `true` once the signer may be used for writes.
    pub fn can_write(self) -> bool {
        matches!(self, SignerStatus::Approved)
    }
}

impl std::fmt::Display for SignerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SignerStatus::Generated => "generated",
            SignerStatus::PendingApproval => "pending_approval",
            SignerStatus::Approved => "approved",
            SignerStatus::Revoked => "revoked",
        };
        f.write_str(s)
    }
}

/// A delegated signing key known to the remote service.
///
/// # Example
///
/// ```json
/// {
///   "signer_uuid": "0192b1f0-5c3e-7a41-9d2e-3f4a5b6c7d8e",
///   "public_key": "0x3daa1f2b…",
///   "status": "pending_approval",
///   "signer_approval_url": "https://client.warpcast.com/deeplinks/signed-key-request?token=0x…"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Signer {
    /// Opaque identifier, stable for the lifetime of the key.
    pub signer_uuid: String,

    /// `0x`-prefixed hex public key.
    pub public_key: String,

    pub status: SignerStatus,

    /// Present while `pending_approval`; show it to the user (e.g. as a QR code).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signer_approval_url: Option<String>,

    /// The fid the key acts for; present once approved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fid: Option<u64>,
}

/// Request body for `POST /v2/farcaster/signer/signed_key`.
///
/// `app_fid` and `deadline` must be exactly the values that were signed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterSignedKeyRequest {
    pub signer_uuid: String,

    /// The operator fid that signed the request (`requestFid`).
    pub app_fid: u64,

    /// Unix seconds after which the signed request is invalid.
    pub deadline: u64,

    /// `0x`-prefixed 65-byte EIP-712 signature.
    pub signature: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_uses_snake_case() {
        let json = serde_json::to_string(&SignerStatus::PendingApproval).unwrap();
        assert_eq!(json, "\"pending_approval\"");
        let back: SignerStatus = serde_json::from_str("\"revoked\"").unwrap();
        assert_eq!(back, SignerStatus::Revoked);
    }

    #[test]
    fn display_matches_wire_form() {
        for status in [
            SignerStatus::Generated,
            SignerStatus::PendingApproval,
            SignerStatus::Approved,
            SignerStatus::Revoked,
        ] {
            let wire = serde_json::to_string(&status).unwrap();
            assert_eq!(wire.trim_matches('"'), status.to_string());
        }
    }

    #[test]
    fn only_approved_can_write() {
        assert!(SignerStatus::Approved.can_write());
        assert!(!SignerStatus::PendingApproval.can_write());
        assert!(!SignerStatus::Generated.can_write());
        assert!(!SignerStatus::Revoked.can_write());
    }

    #[test]
    fn generated_signer_omits_optional_fields() {
        let signer = Signer {
            signer_uuid: "uuid-1".into(),
            public_key: "0xdead".into(),
            status: SignerStatus::Generated,
            signer_approval_url: None,
            fid: None,
        };
        let json = serde_json::to_string(&signer).unwrap();
        assert!(!json.contains("signer_approval_url"));
        assert!(!json.contains("fid"));
    }

    #[test]
    fn pending_signer_parses_from_remote_shape() {
        let json = r#"{
            "signer_uuid": "uuid-1",
            "public_key": "0xdead",
            "status": "pending_approval",
            "signer_approval_url": "https://client.warpcast.com/deeplinks/signed-key-request?token=0x01"
        }"#;
        let signer: Signer = serde_json::from_str(json).unwrap();
        assert_eq!(signer.status, SignerStatus::PendingApproval);
        assert!(signer.signer_approval_url.is_some());
        assert_eq!(signer.fid, None);
    }
}
