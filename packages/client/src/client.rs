//! [`NeynarClient`]: one entry point over both API generations.

use alloy_primitives::Address;
use neynar_api::{
    BulkFollowResponse, Cast, CastsPage, Channel, FeedQuery, OperationResponse, PageOptions,
    PublishCastRequest, PublishCastResponse, ReactionType, RegisterSignedKeyRequest, Signer,
    UpdateUserRequest, User, UsersPage,
};
use tracing::error;

use crate::config::{ClientConfig, ErrorPolicy};
use crate::error::ClientError;
use crate::provision::{provision_signer, ProvisionOptions};
use crate::transport::Transport;
use crate::v1::V1Client;
use crate::v2::V2Client;

/// A [`V1Client`] and a [`V2Client`] sharing one transport.
///
/// Every method delegates to exactly one of the two; use [`NeynarClient::v1`]
/// or [`NeynarClient::v2`] to reach a generation directly.
#[derive(Debug, Clone)]
pub struct NeynarClient {
    v1: V1Client,
    v2: V2Client,
    error_policy: ErrorPolicy,
}

impl NeynarClient {
    /// Build a client with its own `reqwest::Client` using `config.timeout`.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(ClientError::Transport)?;
        Ok(Self::with_http_client(config, http))
    }

    /// Build from `NEYNAR_*` environment variables (see [`ClientConfig`]).
    pub fn from_env() -> Result<Self, ClientError> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Use a caller-supplied HTTP client (custom proxy, TLS or timeouts).
    /// `config.timeout` is ignored in that case.
    pub fn with_http_client(config: ClientConfig, http: reqwest::Client) -> Self {
        let transport = Transport::new(http, config.base_url, config.api_key);
        Self {
            v1: V1Client::new(transport.clone()),
            v2: V2Client::new(transport),
            error_policy: config.error_policy,
        }
    }

    pub fn v1(&self) -> &V1Client {
        &self.v1
    }

    pub fn v2(&self) -> &V2Client {
        &self.v2
    }

    pub fn error_policy(&self) -> ErrorPolicy {
        self.error_policy
    }

    /// Create a signer, sign a key request for it with the account derived
    /// from `mnemonic`, and register the signature.
    ///
    /// On success the signer is in `pending_approval`; its
    /// `signer_approval_url` is what the account owner opens to approve it.
    ///
    /// Under [`ErrorPolicy::Lenient`] a failure is logged and reported as
    /// `Ok(None)`. Under [`ErrorPolicy::Strict`] it is returned, and `Ok(None)`
    /// never occurs.
    pub async fn create_signer_and_register_signed_key(
        &self,
        mnemonic: &str,
        options: ProvisionOptions,
    ) -> Result<Option<Signer>, ClientError> {
        match provision_signer(&self.v2, &self.v1, mnemonic, &options).await {
            Ok(signer) => Ok(Some(signer)),
            Err(e) => match self.error_policy {
                ErrorPolicy::Strict => Err(e),
                ErrorPolicy::Lenient => {
                    error!("neynar: signer provisioning failed: {e}");
                    Ok(None)
                }
            },
        }
    }

    // -----------------------------------------------------------------------
    // v1
    // -----------------------------------------------------------------------

    pub async fn lookup_user_by_fid(&self, fid: u64) -> Result<User, ClientError> {
        self.v1.lookup_user_by_fid(fid).await
    }

    pub async fn lookup_user_by_custody_address(
        &self,
        address: Address,
    ) -> Result<User, ClientError> {
        self.v1.lookup_user_by_custody_address(address).await
    }

    pub async fn lookup_cast_by_hash(&self, hash: &str) -> Result<Cast, ClientError> {
        self.v1.lookup_cast_by_hash(hash).await
    }

    pub async fn fetch_casts_for_user(
        &self,
        fid: u64,
        page: &PageOptions,
    ) -> Result<CastsPage, ClientError> {
        self.v1.fetch_casts_for_user(fid, page).await
    }

    pub async fn fetch_followers(
        &self,
        fid: u64,
        page: &PageOptions,
    ) -> Result<UsersPage, ClientError> {
        self.v1.fetch_followers(fid, page).await
    }

    // -----------------------------------------------------------------------
    // v2
    // -----------------------------------------------------------------------

    pub async fn create_signer(&self) -> Result<Signer, ClientError> {
        self.v2.create_signer().await
    }

    pub async fn lookup_signer(&self, signer_uuid: &str) -> Result<Signer, ClientError> {
        self.v2.lookup_signer(signer_uuid).await
    }

    pub async fn register_signed_key(
        &self,
        request: &RegisterSignedKeyRequest,
    ) -> Result<Signer, ClientError> {
        self.v2.register_signed_key(request).await
    }

    pub async fn publish_cast(
        &self,
        request: &PublishCastRequest,
    ) -> Result<PublishCastResponse, ClientError> {
        self.v2.publish_cast(request).await
    }

    pub async fn delete_cast(
        &self,
        signer_uuid: &str,
        target_hash: &str,
    ) -> Result<OperationResponse, ClientError> {
        self.v2.delete_cast(signer_uuid, target_hash).await
    }

    pub async fn publish_reaction(
        &self,
        signer_uuid: &str,
        reaction_type: ReactionType,
        target: &str,
    ) -> Result<OperationResponse, ClientError> {
        self.v2
            .publish_reaction(signer_uuid, reaction_type, target)
            .await
    }

    pub async fn delete_reaction(
        &self,
        signer_uuid: &str,
        reaction_type: ReactionType,
        target: &str,
    ) -> Result<OperationResponse, ClientError> {
        self.v2
            .delete_reaction(signer_uuid, reaction_type, target)
            .await
    }

    pub async fn follow_users(
        &self,
        signer_uuid: &str,
        target_fids: &[u64],
    ) -> Result<BulkFollowResponse, ClientError> {
        self.v2.follow_users(signer_uuid, target_fids).await
    }

    pub async fn unfollow_users(
        &self,
        signer_uuid: &str,
        target_fids: &[u64],
    ) -> Result<BulkFollowResponse, ClientError> {
        self.v2.unfollow_users(signer_uuid, target_fids).await
    }

    pub async fn update_user(
        &self,
        request: &UpdateUserRequest,
    ) -> Result<OperationResponse, ClientError> {
        self.v2.update_user(request).await
    }

    pub async fn fetch_bulk_users(&self, fids: &[u64]) -> Result<Vec<User>, ClientError> {
        self.v2.fetch_bulk_users(fids).await
    }

    pub async fn fetch_feed(&self, query: &FeedQuery) -> Result<CastsPage, ClientError> {
        self.v2.fetch_feed(query).await
    }

    pub async fn lookup_channel(&self, id: &str) -> Result<Channel, ClientError> {
        self.v2.lookup_channel(id).await
    }
}
