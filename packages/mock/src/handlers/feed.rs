//! Feed and channel handlers: `GET /v2/farcaster/feed`, `GET /v2/farcaster/channel`.

use axum::{
    extract::{Query, State},
    Json,
};
use neynar_api::{CastsPage, ChannelResponse, FeedType};
use serde::Deserialize;

use crate::error::AppError;

use super::{paginate, SharedState};

#[derive(Debug, Deserialize)]
pub struct FeedParams {
    pub feed_type: FeedType,
    pub fid: Option<u64>,
    pub filter_type: Option<String>,
    pub channel_id: Option<String>,
    pub limit: Option<u32>,
    pub cursor: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChannelQuery {
    pub id: String,
}

/// `GET /v2/farcaster/feed`
///
/// `feed_type=following&fid=` gives casts by the accounts `fid` follows;
/// `feed_type=filter&filter_type=channel_id&channel_id=` gives one channel.
/// Both newest first.
pub async fn feed(
    State(state): State<SharedState>,
    Query(q): Query<FeedParams>,
) -> Result<Json<CastsPage>, AppError> {
    let casts = match q.feed_type {
        FeedType::Following => {
            let fid = q
                .fid
                .ok_or_else(|| AppError::invalid("fid", "the following feed needs a fid"))?;
            let following = state.following(fid);
            state.casts_where(|c| following.contains(&c.author.fid))
        }
        FeedType::Filter => {
            if q.filter_type.as_deref().is_some_and(|t| t != "channel_id") {
                return Err(AppError::invalid("filter_type", "only channel_id is supported"));
            }
            let channel_id = q
                .channel_id
                .ok_or_else(|| AppError::invalid("channel_id", "a filter feed needs a channel_id"))?;
            if state.channel(&channel_id).is_none() {
                return Err(AppError::NotFound(format!("channel {channel_id} not found")));
            }
            state.casts_where(|c| c.channel_id.as_deref() == Some(channel_id.as_str()))
        }
    };
    let (casts, next) = paginate(casts, q.limit, q.cursor)?;
    Ok(Json(CastsPage { casts, next }))
}

/// `GET /v2/farcaster/channel?id=`
pub async fn channel(
    State(state): State<SharedState>,
    Query(q): Query<ChannelQuery>,
) -> Result<Json<ChannelResponse>, AppError> {
    let channel = state
        .channel(&q.id)
        .ok_or_else(|| AppError::NotFound(format!("channel {} not found", q.id)))?;
    Ok(Json(ChannelResponse { channel }))
}
