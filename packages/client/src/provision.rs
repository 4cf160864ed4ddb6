//! Signer provisioning: create a signer, sign a key request for it on behalf
//! of the app's custody account, and register that signature.
//!
//! # Sequence
//!
//! ```text
//! Start ──derive account──▶ (local, no I/O)
//!       ──create_signer──▶ SignerCreated
//!       ──lookup_user_by_custody_address──▶ OperatorResolved
//!       ──build + sign SignedKeyRequest──▶ SignatureProduced
//!       ──register_signed_key──▶ Registered
//! ```
//!
//! The account is derived before the first request, so a bad mnemonic never
//! leaves a remote signer behind. Every later failure aborts the run; nothing
//! already done remotely is rolled back, and nothing is retried.

use chrono::Utc;
use neynar_api::{RegisterSignedKeyRequest, Signer};
use neynar_core::{default_deadline, Account, SignedKeyRequest};
use tracing::{debug, info, warn};

use crate::error::ClientError;
use crate::registry::{SignerRegistry, UserDirectory};

/// Caller-tunable inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProvisionOptions {
    /// Unix seconds after which the registration is rejected remotely.
    /// Defaults to one day from the moment of signing.
    pub deadline: Option<u64>,
}

impl ProvisionOptions {
    pub fn with_deadline(deadline: u64) -> Self {
        Self {
            deadline: Some(deadline),
        }
    }
}

/// The last step a provisioning run completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProvisionStage {
    Start,
    SignerCreated,
    OperatorResolved,
    SignatureProduced,
    Registered,
}

impl std::fmt::Display for ProvisionStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ProvisionStage::Start => "start",
            ProvisionStage::SignerCreated => "signer_created",
            ProvisionStage::OperatorResolved => "operator_resolved",
            ProvisionStage::SignatureProduced => "signature_produced",
            ProvisionStage::Registered => "registered",
        };
        f.write_str(s)
    }
}

/// Run the full provisioning sequence.
///
/// Returns the registered signer, normally in `pending_approval` with an
/// approval URL for the account owner to open.
pub async fn provision_signer(
    registry: &dyn SignerRegistry,
    directory: &dyn UserDirectory,
    mnemonic: &str,
    options: &ProvisionOptions,
) -> Result<Signer, ClientError> {
    let mut stage = ProvisionStage::Start;
    let result = run(registry, directory, mnemonic, options, &mut stage).await;
    if let Err(e) = &result {
        warn!("provision: aborted after stage '{stage}': {e}");
    }
    result
}

async fn run(
    registry: &dyn SignerRegistry,
    directory: &dyn UserDirectory,
    mnemonic: &str,
    options: &ProvisionOptions,
    stage: &mut ProvisionStage,
) -> Result<Signer, ClientError> {
    let account = Account::from_mnemonic(mnemonic)?;
    debug!("provision: custody account {}", account.address());

    let signer = registry.create_signer().await?;
    *stage = ProvisionStage::SignerCreated;
    info!("provision: created signer {}", signer.signer_uuid);

    let operator = directory
        .lookup_user_by_custody_address(account.address())
        .await?;
    *stage = ProvisionStage::OperatorResolved;
    debug!("provision: custody account belongs to fid {}", operator.fid);

    let deadline = options
        .deadline
        .unwrap_or_else(|| default_deadline(now_unix()));
    let signature = SignedKeyRequest::build(operator.fid, &signer.public_key, deadline)?
        .sign(&account)?;
    *stage = ProvisionStage::SignatureProduced;

    let request = RegisterSignedKeyRequest {
        signer_uuid: signer.signer_uuid,
        app_fid: operator.fid,
        deadline,
        signature,
    };
    let registered = registry.register_signed_key(&request).await?;
    *stage = ProvisionStage::Registered;
    info!(
        "provision: signer {} registered for fid {} ({})",
        registered.signer_uuid, operator.fid, registered.status
    );

    Ok(registered)
}

fn now_unix() -> u64 {
    u64::try_from(Utc::now().timestamp()).unwrap_or(0)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    use alloy_primitives::Address;
    use async_trait::async_trait;
    use neynar_api::{SignerStatus, User};
    use neynar_core::{AccountError, PayloadError, DEFAULT_DEADLINE_SECS};
    use std::sync::Mutex;

    use crate::error::RemoteApiError;

    const TEST_MNEMONIC: &str = "test test test test test test test test test test test junk";

    /// Records every call and answers from fixed data.
    struct FakeRegistry {
        public_key: String,
        calls: Mutex<Vec<String>>,
        registered: Mutex<Option<RegisterSignedKeyRequest>>,
    }

    impl FakeRegistry {
        fn new(public_key: &str) -> Self {
            Self {
                public_key: public_key.to_string(),
                calls: Mutex::new(vec![]),
                registered: Mutex::new(None),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn registered(&self) -> Option<RegisterSignedKeyRequest> {
            self.registered.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl SignerRegistry for FakeRegistry {
        async fn create_signer(&self) -> Result<Signer, ClientError> {
            self.calls.lock().unwrap().push("create_signer".into());
            Ok(Signer {
                signer_uuid: "uuid-1".into(),
                public_key: self.public_key.clone(),
                status: SignerStatus::Generated,
                signer_approval_url: None,
                fid: None,
            })
        }

        async fn register_signed_key(
            &self,
            request: &RegisterSignedKeyRequest,
        ) -> Result<Signer, ClientError> {
            self.calls.lock().unwrap().push("register_signed_key".into());
            *self.registered.lock().unwrap() = Some(request.clone());
            Ok(Signer {
                signer_uuid: request.signer_uuid.clone(),
                public_key: self.public_key.clone(),
                status: SignerStatus::PendingApproval,
                signer_approval_url: Some("https://client.warpcast.com/deeplinks/signed-key-request?token=0x01".into()),
                fid: None,
            })
        }

        async fn lookup_signer(&self, _signer_uuid: &str) -> Result<Signer, ClientError> {
            unreachable!("provisioning never looks a signer up")
        }
    }

    /// Knows one user, or none.
    struct FakeDirectory {
        fid: Option<u64>,
        asked: Mutex<Vec<Address>>,
    }

    impl FakeDirectory {
        fn with_fid(fid: u64) -> Self {
            Self {
                fid: Some(fid),
                asked: Mutex::new(vec![]),
            }
        }

        fn empty() -> Self {
            Self {
                fid: None,
                asked: Mutex::new(vec![]),
            }
        }
    }

    #[async_trait]
    impl UserDirectory for FakeDirectory {
        async fn lookup_user_by_custody_address(
            &self,
            address: Address,
        ) -> Result<User, ClientError> {
            self.asked.lock().unwrap().push(address);
            match self.fid {
                Some(fid) => Ok(User::new(fid, "app")),
                None => Err(RemoteApiError::new(
                    404,
                    r#"{"code":"NotFound","message":"no user with that custody address"}"#,
                )
                .into()),
            }
        }
    }

    #[tokio::test]
    async fn happy_path_registers_exact_arguments() {
        let registry = FakeRegistry::new("0xdead");
        let directory = FakeDirectory::with_fid(194);

        let signer = provision_signer(
            &registry,
            &directory,
            TEST_MNEMONIC,
            &ProvisionOptions::with_deadline(1_700_000_000),
        )
        .await
        .unwrap();

        assert_eq!(signer.status, SignerStatus::PendingApproval);
        assert_eq!(signer.signer_uuid, "uuid-1");
        assert_eq!(registry.calls(), vec!["create_signer", "register_signed_key"]);

        let account = Account::from_mnemonic(TEST_MNEMONIC).unwrap();
        assert_eq!(*directory.asked.lock().unwrap(), vec![account.address()]);

        let sent = registry.registered().unwrap();
        assert_eq!(sent.signer_uuid, "uuid-1");
        assert_eq!(sent.app_fid, 194);
        assert_eq!(sent.deadline, 1_700_000_000);

        // The signature covers exactly (194, 0xdead, 1700000000).
        let message = SignedKeyRequest::build(194, "0xdead", 1_700_000_000).unwrap();
        assert_eq!(message.recover_signer(&sent.signature).unwrap(), account.address());
    }

    #[tokio::test]
    async fn default_deadline_is_one_day_out() {
        let registry = FakeRegistry::new("0xdead");
        let directory = FakeDirectory::with_fid(194);

        let before = now_unix();
        provision_signer(&registry, &directory, TEST_MNEMONIC, &ProvisionOptions::default())
            .await
            .unwrap();
        let after = now_unix();

        let deadline = registry.registered().unwrap().deadline;
        assert!(deadline >= before + DEFAULT_DEADLINE_SECS - 2);
        assert!(deadline <= after + DEFAULT_DEADLINE_SECS + 2);
    }

    #[tokio::test]
    async fn lookup_failure_never_registers() {
        let registry = FakeRegistry::new("0xdead");
        let directory = FakeDirectory::empty();

        let err = provision_signer(&registry, &directory, TEST_MNEMONIC, &ProvisionOptions::default())
            .await
            .unwrap_err();

        assert_eq!(err.as_remote().map(|r| r.status), Some(404));
        assert_eq!(registry.calls(), vec!["create_signer"]);
        assert!(registry.registered().is_none());
    }

    #[tokio::test]
    async fn invalid_mnemonic_fails_before_any_request() {
        let registry = FakeRegistry::new("0xdead");
        let directory = FakeDirectory::with_fid(194);

        let err = provision_signer(&registry, &directory, "not a real phrase", &ProvisionOptions::default())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ClientError::InvalidMnemonic(AccountError::InvalidMnemonic(_))
        ));
        assert!(registry.calls().is_empty());
        assert!(directory.asked.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn unusable_public_key_is_an_invalid_payload() {
        let registry = FakeRegistry::new("dead");
        let directory = FakeDirectory::with_fid(194);

        let err = provision_signer(&registry, &directory, TEST_MNEMONIC, &ProvisionOptions::default())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ClientError::InvalidPayload(PayloadError::InvalidKey(_))
        ));
        assert_eq!(registry.calls(), vec!["create_signer"]);
    }

    #[tokio::test]
    async fn zero_fid_is_an_invalid_payload() {
        let registry = FakeRegistry::new("0xdead");
        let directory = FakeDirectory::with_fid(0);

        let err = provision_signer(&registry, &directory, TEST_MNEMONIC, &ProvisionOptions::default())
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::InvalidPayload(PayloadError::ZeroFid)));
        assert!(registry.registered().is_none());
    }

    #[test]
    fn stage_display_is_snake_case() {
        assert_eq!(ProvisionStage::OperatorResolved.to_string(), "operator_resolved");
        assert_eq!(ProvisionStage::Start.to_string(), "start");
    }
}
