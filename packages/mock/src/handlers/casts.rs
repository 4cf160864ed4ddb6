//! Cast handlers.
//!
//! - `GET    /v1/farcaster/cast`: cast by hash.
//! - `GET    /v1/farcaster/casts`: casts by author, newest first, paged.
//! - `POST   /v2/farcaster/cast`: publish as the signer's owner.
//! - `DELETE /v2/farcaster/cast`: delete one of the owner's casts.

use alloy_primitives::keccak256;
use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{SecondsFormat, Utc};
use neynar_api::{
    Cast, CastAuthor, CastResponse, CastsPage, DeleteCastRequest, OperationResponse,
    PublishCastRequest, PublishCastResponse, V1Response,
};
use serde::Deserialize;
use tracing::info;

use crate::error::AppError;

use super::{paginate, require_writer, SharedState};

/// Longest cast text accepted, in bytes.
pub const MAX_CAST_BYTES: usize = 320;

#[derive(Debug, Deserialize)]
pub struct HashQuery {
    pub hash: String,
}

#[derive(Debug, Deserialize)]
pub struct AuthorQuery {
    pub fid: u64,
    pub limit: Option<u32>,
    pub cursor: Option<String>,
}

/// `GET /v1/farcaster/cast?hash=`
pub async fn by_hash(
    State(state): State<SharedState>,
    Query(q): Query<HashQuery>,
) -> Result<Json<V1Response<CastResponse>>, AppError> {
    let cast = state
        .cast(&q.hash)
        .ok_or_else(|| AppError::NotFound(format!("cast {} not found", q.hash)))?;
    Ok(Json(V1Response::new(CastResponse { cast })))
}

/// `GET /v1/farcaster/casts?fid=&limit=&cursor=`
pub async fn by_author(
    State(state): State<SharedState>,
    Query(q): Query<AuthorQuery>,
) -> Result<Json<V1Response<CastsPage>>, AppError> {
    let (casts, next) = paginate(state.casts_by(q.fid), q.limit, q.cursor)?;
    Ok(Json(V1Response::new(CastsPage { casts, next })))
}

/// `POST /v2/farcaster/cast`
pub async fn publish(
    State(state): State<SharedState>,
    Json(req): Json<PublishCastRequest>,
) -> Result<Json<PublishCastResponse>, AppError> {
    let fid = require_writer(&state, &req.signer_uuid)?;

    if req.text.is_empty() && req.embeds.is_empty() {
        return Err(AppError::invalid("text", "a cast needs text or an embed"));
    }
    if req.text.len() > MAX_CAST_BYTES {
        return Err(AppError::invalid(
            "text",
            format!("text is {} bytes; the limit is {MAX_CAST_BYTES}", req.text.len()),
        ));
    }
    if let Some(parent) = &req.parent {
        if state.cast(parent).is_none() {
            return Err(AppError::invalid("parent", format!("cast {parent} not found")));
        }
    }
    if let Some(channel_id) = &req.channel_id {
        if state.channel(channel_id).is_none() {
            return Err(AppError::invalid(
                "channel_id",
                format!("channel {channel_id} not found"),
            ));
        }
    }

    let seq = state.next_seq();
    let digest = keccak256(format!("{fid}:{seq}:{}", req.text));
    let cast = Cast {
        hash: format!("0x{}", hex::encode(&digest[..20])),
        author: CastAuthor {
            fid,
            username: state.user(fid).map(|u| u.username),
        },
        text: req.text,
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        parent_hash: req.parent,
        channel_id: req.channel_id,
        embeds: req.embeds,
    };
    state.insert_cast(cast.clone());
    info!("mock: fid {fid} published cast {}", cast.hash);

    Ok(Json(PublishCastResponse {
        success: true,
        cast,
    }))
}

/// `DELETE /v2/farcaster/cast`
///
/// Only the author's signer may delete a cast.
pub async fn delete(
    State(state): State<SharedState>,
    Json(req): Json<DeleteCastRequest>,
) -> Result<Json<OperationResponse>, AppError> {
    let fid = require_writer(&state, &req.signer_uuid)?;
    let cast = state
        .cast(&req.target_hash)
        .ok_or_else(|| AppError::NotFound(format!("cast {} not found", req.target_hash)))?;
    if cast.author.fid != fid {
        return Err(AppError::Forbidden(format!(
            "cast {} belongs to fid {}",
            cast.hash, cast.author.fid
        )));
    }
    state.remove_cast(&req.target_hash);
    Ok(Json(OperationResponse::ok()))
}
