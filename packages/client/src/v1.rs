//! Read-only client for the `/v1/farcaster` endpoints.
//!
//! Every v1 response wraps its payload as `{ "result": ... }`; the methods
//! here unwrap it so callers see the payload type directly.

use alloy_primitives::Address;
use async_trait::async_trait;
use neynar_api::{Cast, CastResponse, CastsPage, PageOptions, User, UserResponse, UsersPage, V1Response};

use crate::error::ClientError;
use crate::registry::UserDirectory;
use crate::transport::Transport;

const PREFIX: &str = "/v1/farcaster";

/// Client for the first API generation.
#[derive(Debug, Clone)]
pub struct V1Client {
    transport: Transport,
}

impl V1Client {
    pub fn new(transport: Transport) -> Self {
        Self { transport }
    }

    async fn get<T>(&self, path: &str, query: &[(&str, String)]) -> Result<T, ClientError>
    where
        T: serde::de::DeserializeOwned,
    {
        let wrapped: V1Response<T> = self
            .transport
            .get(&format!("{PREFIX}{path}"), query)
            .await?;
        Ok(wrapped.into_inner())
    }

    pub async fn lookup_user_by_fid(&self, fid: u64) -> Result<User, ClientError> {
        let resp: UserResponse = self.get("/user", &[("fid", fid.to_string())]).await?;
        Ok(resp.user)
    }

    /// The user whose custody address is `address`. A 404 means no
    /// registered account holds it.
    pub async fn lookup_user_by_custody_address(
        &self,
        address: Address,
    ) -> Result<User, ClientError> {
        let resp: UserResponse = self
            .get("/custody-address", &[("custody_address", format!("{address:#x}"))])
            .await?;
        Ok(resp.user)
    }

    pub async fn lookup_cast_by_hash(&self, hash: &str) -> Result<Cast, ClientError> {
        let resp: CastResponse = self.get("/cast", &[("hash", hash.to_string())]).await?;
        Ok(resp.cast)
    }

    /// Casts authored by `fid`, newest first.
    pub async fn fetch_casts_for_user(
        &self,
        fid: u64,
        page: &PageOptions,
    ) -> Result<CastsPage, ClientError> {
        let mut query = vec![("fid", fid.to_string())];
        query.extend(page.to_query());
        self.get("/casts", &query).await
    }

    pub async fn fetch_followers(
        &self,
        fid: u64,
        page: &PageOptions,
    ) -> Result<UsersPage, ClientError> {
        let mut query = vec![("fid", fid.to_string())];
        query.extend(page.to_query());
        self.get("/followers", &query).await
    }
}

#[async_trait]
impl UserDirectory for V1Client {
    async fn lookup_user_by_custody_address(&self, address: Address) -> Result<User, ClientError> {
        V1Client::lookup_user_by_custody_address(self, address).await
    }
}
