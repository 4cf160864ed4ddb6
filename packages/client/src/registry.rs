//! The two remote collaborators signer provisioning depends on.
//!
//! [`provision_signer`](crate::provision::provision_signer) talks to the
//! service only through these traits, so it can be driven by the real
//! [`V2Client`](crate::V2Client) / [`V1Client`](crate::V1Client) pair or by
//! in-memory fakes in tests.
//!
//! | Trait | Production implementation |
//! |-------|---------------------------|
//! | [`SignerRegistry`] | [`V2Client`](crate::V2Client) |
//! | [`UserDirectory`] | [`V1Client`](crate::V1Client) |

use alloy_primitives::Address;
use async_trait::async_trait;
use neynar_api::{RegisterSignedKeyRequest, Signer, User};

use crate::error::ClientError;

/// Creates signers and binds them to an application identity.
#[async_trait]
pub trait SignerRegistry: Send + Sync {
    /// Ask the service for a fresh signer keypair. The returned signer is in
    /// the `generated` state and carries the public key to be signed over.
    async fn create_signer(&self) -> Result<Signer, ClientError>;

    /// Submit the app's signature over the signer's public key.
    async fn register_signed_key(
        &self,
        request: &RegisterSignedKeyRequest,
    ) -> Result<Signer, ClientError>;

    async fn lookup_signer(&self, signer_uuid: &str) -> Result<Signer, ClientError>;
}

/// Resolves Farcaster users.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// The user whose custody address is `address`.
    async fn lookup_user_by_custody_address(&self, address: Address) -> Result<User, ClientError>;
}
