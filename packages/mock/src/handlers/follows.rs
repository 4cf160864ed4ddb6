//! Follow-graph handlers.
//!
//! - `POST   /v2/farcaster/user/follow`: follow each of `target_fids`.
//! - `DELETE /v2/farcaster/user/follow`: unfollow each of `target_fids`.
//! - `GET    /v1/farcaster/followers`: users following `fid`, paged.
//!
//! Batch writes report per-target results; one failed target does not
//! abort the others.

use axum::{
    extract::{Query, State},
    Json,
};
use neynar_api::{BulkFollowResponse, FollowRequest, FollowResult, UsersPage, V1Response};
use serde::Deserialize;

use crate::error::AppError;

use super::{paginate, require_writer, SharedState};

#[derive(Debug, Deserialize)]
pub struct FollowersQuery {
    pub fid: u64,
    pub limit: Option<u32>,
    pub cursor: Option<String>,
}

/// `POST /v2/farcaster/user/follow`
///
/// Following yourself or an unknown fid fails for that target only.
pub async fn follow(
    State(state): State<SharedState>,
    Json(req): Json<FollowRequest>,
) -> Result<Json<BulkFollowResponse>, AppError> {
    let fid = require_writer(&state, &req.signer_uuid)?;
    let details = req
        .target_fids
        .iter()
        .map(|&target| FollowResult {
            success: target != fid && state.add_follow(fid, target),
            target_fid: target,
        })
        .collect();
    Ok(Json(BulkFollowResponse::from_details(details)))
}

/// `DELETE /v2/farcaster/user/follow`
///
/// Unfollowing someone not followed fails for that target only.
pub async fn unfollow(
    State(state): State<SharedState>,
    Json(req): Json<FollowRequest>,
) -> Result<Json<BulkFollowResponse>, AppError> {
    let fid = require_writer(&state, &req.signer_uuid)?;
    let details = req
        .target_fids
        .iter()
        .map(|&target| FollowResult {
            success: state.remove_follow(fid, target),
            target_fid: target,
        })
        .collect();
    Ok(Json(BulkFollowResponse::from_details(details)))
}

/// `GET /v1/farcaster/followers?fid=&limit=&cursor=`
pub async fn followers(
    State(state): State<SharedState>,
    Query(q): Query<FollowersQuery>,
) -> Result<Json<V1Response<UsersPage>>, AppError> {
    let (users, next) = paginate(state.followers(q.fid), q.limit, q.cursor)?;
    Ok(Json(V1Response::new(UsersPage { users, next })))
}
