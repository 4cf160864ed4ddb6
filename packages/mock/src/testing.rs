//! Helpers shared by the handler tests.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use neynar_api::{Signer, SignerStatus};
use serde_json::Value;
use tower::ServiceExt;

use crate::router::{build_router, API_KEY_HEADER};
use crate::state::MockState;

pub(crate) const TEST_MNEMONIC: &str =
    "test test test test test test test test test test test junk";

/// Send one request through a fresh router over `state` and return the
/// status and JSON body (`Null` when the body is empty or not JSON).
pub(crate) async fn call(
    state: &Arc<MockState>,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(API_KEY_HEADER, "test-key");
    let req = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let resp = build_router(Arc::clone(state)).oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

pub(crate) async fn call_without_key(state: &Arc<MockState>, method: &str, uri: &str) -> StatusCode {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    build_router(Arc::clone(state))
        .oneshot(req)
        .await
        .unwrap()
        .status()
}

/// Insert a signer already approved to write for `fid`.
pub(crate) fn approved_signer(state: &MockState, uuid: &str, fid: u64) {
    state.insert_signer(Signer {
        signer_uuid: uuid.into(),
        public_key: "0xdead".into(),
        status: SignerStatus::Generated,
        signer_approval_url: None,
        fid: None,
    });
    state.complete_registration(uuid, "url".into());
    assert!(state.approve_signer(uuid, fid));
}
