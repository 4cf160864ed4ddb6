//! An in-process stand-in for the Neynar API, for tests.
//!
//! [`spawn_mock`] binds an ephemeral port, serves the mocked endpoints from a
//! background task, and returns the base URL plus the [`MockState`] behind
//! it, so tests can seed users, approve signers and inspect the request log
//! without going through HTTP.
//!
//! The signer registry verifies signed key requests the way the live
//! service does (see [`handlers::signers`]), so a client that passes against
//! the mock produces signatures the real validator accepts.

pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

#[cfg(test)]
mod testing;

use std::sync::Arc;

pub use router::{build_router, API_KEY_HEADER};
pub use state::MockState;

/// Start a mock service and return `(base_url, state)`.
///
/// The service runs in a background `tokio` task bound to an OS-assigned
/// port on `127.0.0.1`; `base_url` looks like `http://127.0.0.1:51234`.
///
/// # Panics
///
/// Panics if the TCP listener cannot be bound or the server fails.
pub async fn spawn_mock() -> (String, Arc<MockState>) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("get local addr");
    let base_url = format!("http://{addr}");

    let state = Arc::new(MockState::new());
    let router = build_router(Arc::clone(&state));

    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("mock server error");
    });

    (base_url, state)
}
