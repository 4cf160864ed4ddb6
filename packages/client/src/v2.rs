//! Client for the `/v2/farcaster` endpoints.
//!
//! Reads are open; every write names a `signer_uuid`, and the service accepts
//! it only once that signer has been approved by its owner.

use async_trait::async_trait;
use neynar_api::{
    BulkFollowResponse, BulkUsersResponse, CastsPage, Channel, ChannelResponse, DeleteCastRequest,
    FeedQuery, FollowRequest, OperationResponse, PublishCastRequest, PublishCastResponse,
    ReactionRequest, ReactionType, RegisterSignedKeyRequest, Signer, UpdateUserRequest, User,
};
use serde_json::json;

use crate::error::ClientError;
use crate::registry::SignerRegistry;
use crate::transport::Transport;

const PREFIX: &str = "/v2/farcaster";

/// Client for the second API generation.
#[derive(Debug, Clone)]
pub struct V2Client {
    transport: Transport,
}

impl V2Client {
    pub fn new(transport: Transport) -> Self {
        Self { transport }
    }

    fn path(path: &str) -> String {
        format!("{PREFIX}{path}")
    }

    // -----------------------------------------------------------------------
    // Signers
    // -----------------------------------------------------------------------

    /// New signer in the `generated` state.
    pub async fn create_signer(&self) -> Result<Signer, ClientError> {
        self.transport.post(&Self::path("/signer"), &json!({})).await
    }

    pub async fn lookup_signer(&self, signer_uuid: &str) -> Result<Signer, ClientError> {
        self.transport
            .get(&Self::path("/signer"), &[("signer_uuid", signer_uuid)])
            .await
    }

    /// Moves a `generated` signer to `pending_approval`.
    pub async fn register_signed_key(
        &self,
        request: &RegisterSignedKeyRequest,
    ) -> Result<Signer, ClientError> {
        self.transport
            .post(&Self::path("/signer/signed_key"), request)
            .await
    }

    // -----------------------------------------------------------------------
    // Casts
    // -----------------------------------------------------------------------

    pub async fn publish_cast(
        &self,
        request: &PublishCastRequest,
    ) -> Result<PublishCastResponse, ClientError> {
        self.transport.post(&Self::path("/cast"), request).await
    }

    pub async fn delete_cast(
        &self,
        signer_uuid: &str,
        target_hash: &str,
    ) -> Result<OperationResponse, ClientError> {
        let body = DeleteCastRequest {
            signer_uuid: signer_uuid.to_string(),
            target_hash: target_hash.to_string(),
        };
        self.transport.delete(&Self::path("/cast"), &body).await
    }

    // -----------------------------------------------------------------------
    // Reactions
    // -----------------------------------------------------------------------

    /// Like or recast the cast with hash `target`.
    pub async fn publish_reaction(
        &self,
        signer_uuid: &str,
        reaction_type: ReactionType,
        target: &str,
    ) -> Result<OperationResponse, ClientError> {
        let body = reaction(signer_uuid, reaction_type, target);
        self.transport.post(&Self::path("/reaction"), &body).await
    }

    pub async fn delete_reaction(
        &self,
        signer_uuid: &str,
        reaction_type: ReactionType,
        target: &str,
    ) -> Result<OperationResponse, ClientError> {
        let body = reaction(signer_uuid, reaction_type, target);
        self.transport.delete(&Self::path("/reaction"), &body).await
    }

    // -----------------------------------------------------------------------
    // Follows and profile
    // -----------------------------------------------------------------------

    pub async fn follow_users(
        &self,
        signer_uuid: &str,
        target_fids: &[u64],
    ) -> Result<BulkFollowResponse, ClientError> {
        let body = follow(signer_uuid, target_fids);
        self.transport.post(&Self::path("/user/follow"), &body).await
    }

    pub async fn unfollow_users(
        &self,
        signer_uuid: &str,
        target_fids: &[u64],
    ) -> Result<BulkFollowResponse, ClientError> {
        let body = follow(signer_uuid, target_fids);
        self.transport.delete(&Self::path("/user/follow"), &body).await
    }

    pub async fn update_user(
        &self,
        request: &UpdateUserRequest,
    ) -> Result<OperationResponse, ClientError> {
        self.transport.patch(&Self::path("/user"), request).await
    }

    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    /// Users for `fids`, in the order the service returns them. Unknown fids
    /// are omitted rather than reported.
    pub async fn fetch_bulk_users(&self, fids: &[u64]) -> Result<Vec<User>, ClientError> {
        let joined = fids
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(",");
        let resp: BulkUsersResponse = self
            .transport
            .get(&Self::path("/user/bulk"), &[("fids", joined)])
            .await?;
        Ok(resp.users)
    }

    pub async fn fetch_feed(&self, query: &FeedQuery) -> Result<CastsPage, ClientError> {
        self.transport
            .get(&Self::path("/feed"), &query.to_query())
            .await
    }

    pub async fn lookup_channel(&self, id: &str) -> Result<Channel, ClientError> {
        let resp: ChannelResponse = self
            .transport
            .get(&Self::path("/channel"), &[("id", id)])
            .await?;
        Ok(resp.channel)
    }
}

fn reaction(signer_uuid: &str, reaction_type: ReactionType, target: &str) -> ReactionRequest {
    ReactionRequest {
        signer_uuid: signer_uuid.to_string(),
        reaction_type,
        target: target.to_string(),
    }
}

fn follow(signer_uuid: &str, target_fids: &[u64]) -> FollowRequest {
    FollowRequest {
        signer_uuid: signer_uuid.to_string(),
        target_fids: target_fids.to_vec(),
    }
}

#[async_trait]
impl SignerRegistry for V2Client {
    async fn create_signer(&self) -> Result<Signer, ClientError> {
        V2Client::create_signer(self).await
    }

    async fn register_signed_key(
        &self,
        request: &RegisterSignedKeyRequest,
    ) -> Result<Signer, ClientError> {
        V2Client::register_signed_key(self, request).await
    }

    async fn lookup_signer(&self, signer_uuid: &str) -> Result<Signer, ClientError> {
        V2Client::lookup_signer(self, signer_uuid).await
    }
}
