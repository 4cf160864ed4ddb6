//! Signer handlers.
//!
//! - `POST /v2/farcaster/signer`: create a `generated` signer.
//! - `GET  /v2/farcaster/signer`: look a signer up by uuid.
//! - `POST /v2/farcaster/signer/signed_key`: register an app's signed key request.
//!
//! Registration is verified the way the on-chain validator would: the
//! signer must still be `generated`, `app_fid` must be a known user, the
//! deadline must lie in the future, and the EIP-712 signature over
//! `(app_fid, public_key, deadline)` must recover to that user's custody
//! address.

use alloy_primitives::Address;
use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Utc;
use ed25519_dalek::SigningKey;
use neynar_api::{RegisterSignedKeyRequest, Signer, SignerStatus};
use neynar_core::SignedKeyRequest;
use rand::rngs::OsRng;
use serde::Deserialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::AppError;

use super::SharedState;

/// Deep link the account owner opens to approve a pending signer.
pub const APPROVAL_URL_BASE: &str = "https://client.warpcast.com/deeplinks/signed-key-request";

#[derive(Debug, Deserialize)]
pub struct SignerQuery {
    pub signer_uuid: String,
}

/// `POST /v2/farcaster/signer`
///
/// Generates a fresh Ed25519 keypair; only the public half is kept.
pub async fn create(State(state): State<SharedState>) -> Json<Signer> {
    let key = SigningKey::generate(&mut OsRng);
    let signer = Signer {
        signer_uuid: Uuid::now_v7().to_string(),
        public_key: format!("0x{}", hex::encode(key.verifying_key().to_bytes())),
        status: SignerStatus::Generated,
        signer_approval_url: None,
        fid: None,
    };
    state.insert_signer(signer.clone());
    info!("mock: created signer {}", signer.signer_uuid);
    Json(signer)
}

/// `GET /v2/farcaster/signer?signer_uuid=`
pub async fn lookup(
    State(state): State<SharedState>,
    Query(q): Query<SignerQuery>,
) -> Result<Json<Signer>, AppError> {
    state
        .signer(&q.signer_uuid)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("signer {} not found", q.signer_uuid)))
}

/// `POST /v2/farcaster/signer/signed_key`
///
/// Returns the signer in `pending_approval` with an approval URL.
pub async fn register_signed_key(
    State(state): State<SharedState>,
    Json(req): Json<RegisterSignedKeyRequest>,
) -> Result<Json<Signer>, AppError> {
    let signer = state
        .signer(&req.signer_uuid)
        .ok_or_else(|| AppError::NotFound(format!("signer {} not found", req.signer_uuid)))?;
    if signer.status != SignerStatus::Generated {
        return Err(AppError::SignerStateConflict(format!(
            "signer {} is already {}",
            req.signer_uuid, signer.status
        )));
    }

    let app = state
        .user(req.app_fid)
        .ok_or_else(|| AppError::invalid("app_fid", format!("no user with fid {}", req.app_fid)))?;
    let custody = app
        .custody_address
        .as_deref()
        .and_then(|a| a.parse::<Address>().ok())
        .ok_or_else(|| AppError::invalid("app_fid", "app has no custody address"))?;

    let now = u64::try_from(Utc::now().timestamp()).unwrap_or(0);
    if req.deadline <= now {
        return Err(AppError::DeadlineExpired(format!(
            "deadline {} is not after {now}",
            req.deadline
        )));
    }

    let message = SignedKeyRequest::build(req.app_fid, &signer.public_key, req.deadline)
        .map_err(|e| AppError::invalid("app_fid", e.to_string()))?;
    let recovered = message
        .recover_signer(&req.signature)
        .map_err(|e| AppError::InvalidSignature(e.to_string()))?;
    if recovered != custody {
        warn!(
            "mock: signed key for {} recovered to {recovered}, expected {custody}",
            req.signer_uuid
        );
        return Err(AppError::InvalidSignature(
            "signature does not match the app's custody address".into(),
        ));
    }

    let token = hex::encode(rand::random::<[u8; 16]>());
    let url = format!("{APPROVAL_URL_BASE}?token=0x{token}");
    let registered = state
        .complete_registration(&req.signer_uuid, url)
        .ok_or_else(|| {
            AppError::SignerStateConflict(format!("signer {} changed state", req.signer_uuid))
        })?;

    info!(
        "mock: signer {} pending approval for app fid {}",
        req.signer_uuid, req.app_fid
    );
    Ok(Json(registered))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
