//! Assembles the Axum [`Router`] from all handler modules.

use axum::{
    extract::{Request, State},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::error::AppError;
use crate::handlers::{casts, feed, follows, reactions, signers, users, SharedState};

/// Header the live service reads the API key from.
pub const API_KEY_HEADER: &str = "api_key";

/// Build the complete mock router over `state`.
pub fn build_router(state: SharedState) -> Router {
    Router::new()
        // v1: read-only, responses wrapped in `{ "result": ... }`
        .route("/v1/farcaster/user", get(users::by_fid))
        .route("/v1/farcaster/custody-address", get(users::by_custody_address))
        .route("/v1/farcaster/cast", get(casts::by_hash))
        .route("/v1/farcaster/casts", get(casts::by_author))
        .route("/v1/farcaster/followers", get(follows::followers))
        // v2: signers
        .route(
            "/v2/farcaster/signer",
            post(signers::create).get(signers::lookup),
        )
        .route(
            "/v2/farcaster/signer/signed_key",
            post(signers::register_signed_key),
        )
        // v2: writes
        .route("/v2/farcaster/cast", post(casts::publish).delete(casts::delete))
        .route(
            "/v2/farcaster/reaction",
            post(reactions::publish).delete(reactions::delete),
        )
        .route(
            "/v2/farcaster/user/follow",
            post(follows::follow).delete(follows::unfollow),
        )
        .route("/v2/farcaster/user", axum::routing::patch(users::update))
        // v2: reads
        .route("/v2/farcaster/user/bulk", get(users::bulk))
        .route("/v2/farcaster/feed", get(feed::feed))
        .route("/v2/farcaster/channel", get(feed::channel))
        .layer(middleware::from_fn_with_state(state.clone(), gate))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Record every request, then reject those without an API key.
async fn gate(State(state): State<SharedState>, req: Request, next: Next) -> Response {
    state.record_request(format!("{} {}", req.method(), req.uri().path()));

    let has_key = req
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|k| !k.trim().is_empty());
    if !has_key {
        return AppError::Unauthorized(format!("missing {API_KEY_HEADER} header")).into_response();
    }

    next.run(req).await
}
