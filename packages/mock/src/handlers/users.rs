//! User handlers.
//!
//! - `GET   /v1/farcaster/user`: user by fid.
//! - `GET   /v1/farcaster/custody-address`: user by custody address.
//! - `GET   /v2/farcaster/user/bulk`: users by comma-separated fids.
//! - `PATCH /v2/farcaster/user`: edit the signer owner's profile.

use alloy_primitives::Address;
use axum::{
    extract::{Query, State},
    Json,
};
use neynar_api::{BulkUsersResponse, OperationResponse, UpdateUserRequest, UserResponse, V1Response};
use serde::Deserialize;

use crate::error::AppError;

use super::{require_writer, SharedState};

#[derive(Debug, Deserialize)]
pub struct FidQuery {
    pub fid: u64,
}

#[derive(Debug, Deserialize)]
pub struct CustodyQuery {
    pub custody_address: String,
}

#[derive(Debug, Deserialize)]
pub struct BulkQuery {
    pub fids: String,
}

/// `GET /v1/farcaster/user?fid=`
pub async fn by_fid(
    State(state): State<SharedState>,
    Query(q): Query<FidQuery>,
) -> Result<Json<V1Response<UserResponse>>, AppError> {
    let user = state
        .user(q.fid)
        .ok_or_else(|| AppError::NotFound(format!("no user with fid {}", q.fid)))?;
    Ok(Json(V1Response::new(UserResponse { user })))
}

/// `GET /v1/farcaster/custody-address?custody_address=`
///
/// Address comparison ignores case.
pub async fn by_custody_address(
    State(state): State<SharedState>,
    Query(q): Query<CustodyQuery>,
) -> Result<Json<V1Response<UserResponse>>, AppError> {
    let address = q
        .custody_address
        .parse::<Address>()
        .map_err(|_| AppError::invalid("custody_address", "not a 20-byte hex address"))?;
    let user = state.user_by_custody(address).ok_or_else(|| {
        AppError::NotFound(format!("no user with custody address {}", q.custody_address))
    })?;
    Ok(Json(V1Response::new(UserResponse { user })))
}

/// `GET /v2/farcaster/user/bulk?fids=1,2,3`
///
/// Unknown fids are left out of the result.
pub async fn bulk(
    State(state): State<SharedState>,
    Query(q): Query<BulkQuery>,
) -> Result<Json<BulkUsersResponse>, AppError> {
    let fids = q
        .fids
        .split(',')
        .map(|f| f.trim().parse::<u64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| AppError::invalid("fids", format!("'{}' is not a list of fids", q.fids)))?;
    Ok(Json(BulkUsersResponse {
        users: state.users(&fids),
    }))
}

/// `PATCH /v2/farcaster/user`
pub async fn update(
    State(state): State<SharedState>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<Json<OperationResponse>, AppError> {
    let fid = require_writer(&state, &req.signer_uuid)?;
    if req.is_empty() {
        return Err(AppError::invalid("body", "nothing to update"));
    }
    state
        .update_user(fid, &req)
        .ok_or_else(|| AppError::NotFound(format!("no user with fid {fid}")))?;
    Ok(Json(OperationResponse::ok()))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::StatusCode;
    use neynar_api::User;
    use serde_json::json;

    use crate::state::MockState;
    use crate::testing::{approved_signer, call};

    fn state_with_users() -> Arc<MockState> {
        let state = Arc::new(MockState::new());
        let mut rish = User::new(194, "rish");
        rish.custody_address = Some("0xF39FD6E51AAD88F6F4CE6AB8827279CFFFB92266".into());
        state.seed_user(rish);
        state.seed_user(User::new(3, "dwr"));
        state
    }

    #[tokio::test]
    async fn v1_user_is_wrapped_in_result() {
        let state = state_with_users();
        let (status, body) = call(&state, "GET", "/v1/farcaster/user?fid=3", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"]["user"]["username"], "dwr");
    }

    #[tokio::test]
    async fn custody_lookup_matches_lowercase_query() {
        let state = state_with_users();
        let (status, body) = call(
            &state,
            "GET",
            "/v1/farcaster/custody-address?custody_address=0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"]["user"]["fid"], 194);
    }

    #[tokio::test]
    async fn unknown_custody_address_is_404() {
        let state = state_with_users();
        let (status, body) = call(
            &state,
            "GET",
            "/v1/farcaster/custody-address?custody_address=0x0000000000000000000000000000000000000001",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "NotFound");
    }

    #[tokio::test]
    async fn bulk_skips_unknown_fids() {
        let state = state_with_users();
        let (status, body) = call(&state, "GET", "/v2/farcaster/user/bulk?fids=3,99,194", None).await;
        assert_eq!(status, StatusCode::OK);
        let fids: Vec<u64> = body["users"]
            .as_array()
            .unwrap()
            .iter()
            .map(|u| u["fid"].as_u64().unwrap())
            .collect();
        assert_eq!(fids, vec![3, 194]);
    }

    #[tokio::test]
    async fn update_requires_approved_signer() {
        let state = state_with_users();
        let (status, _) = call(
            &state,
            "PATCH",
            "/v2/farcaster/user",
            Some(json!({ "signer_uuid": "nope", "bio": "hi" })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        approved_signer(&state, "s1", 3);
        let (status, _) = call(
            &state,
            "PATCH",
            "/v2/farcaster/user",
            Some(json!({ "signer_uuid": "s1", "bio": "hi", "display_name": "Dan" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let user = state.user(3).unwrap();
        assert_eq!(user.profile.bio.text, "hi");
        assert_eq!(user.display_name.as_deref(), Some("Dan"));
    }

    #[tokio::test]
    async fn revoked_signer_cannot_update() {
        let state = state_with_users();
        approved_signer(&state, "s1", 3);
        assert!(state.revoke_signer("s1"));

        let (status, body) = call(
            &state,
            "PATCH",
            "/v2/farcaster/user",
            Some(json!({ "signer_uuid": "s1", "bio": "hi" })),
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["code"], "SignerNotApproved");
    }
}
