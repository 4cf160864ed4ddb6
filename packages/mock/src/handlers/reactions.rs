//! Reaction handlers: `POST/DELETE /v2/farcaster/reaction`.

use axum::{extract::State, Json};
use neynar_api::{OperationResponse, ReactionRequest};

use crate::error::AppError;

use super::{require_writer, SharedState};

/// `POST /v2/farcaster/reaction`: like or recast an existing cast.
pub async fn publish(
    State(state): State<SharedState>,
    Json(req): Json<ReactionRequest>,
) -> Result<Json<OperationResponse>, AppError> {
    let fid = require_writer(&state, &req.signer_uuid)?;
    if state.cast(&req.target).is_none() {
        return Err(AppError::NotFound(format!("cast {} not found", req.target)));
    }
    state.add_reaction(fid, req.reaction_type, &req.target);
    Ok(Json(OperationResponse::ok()))
}

/// `DELETE /v2/farcaster/reaction`: idempotent.
pub async fn delete(
    State(state): State<SharedState>,
    Json(req): Json<ReactionRequest>,
) -> Result<Json<OperationResponse>, AppError> {
    let fid = require_writer(&state, &req.signer_uuid)?;
    state.remove_reaction(fid, req.reaction_type, &req.target);
    Ok(Json(OperationResponse::ok()))
}
