//! HTTP handlers for the mocked endpoints.
//!
//! Each submodule covers one group of endpoints. Handlers are plain async
//! functions over Axum extractors returning `Result<_, AppError>`; every
//! rule the live service enforces (approval gating, signature checks) lives
//! here, while [`MockState`] only stores data.

pub mod casts;
pub mod feed;
pub mod follows;
pub mod reactions;
pub mod signers;
pub mod users;

use std::sync::Arc;

use neynar_api::{NextCursor, PageOptions};

use crate::error::AppError;
use crate::state::MockState;

/// State threaded through every handler via [`axum::extract::State`].
pub type SharedState = Arc<MockState>;

/// The fid that `signer_uuid` writes for.
///
/// 404 if the signer is unknown; 403 unless it is `approved`.
pub(crate) fn require_writer(state: &MockState, signer_uuid: &str) -> Result<u64, AppError> {
    let signer = state
        .signer(signer_uuid)
        .ok_or_else(|| AppError::NotFound(format!("signer {signer_uuid} not found")))?;
    match (signer.status.can_write(), signer.fid) {
        (true, Some(fid)) => Ok(fid),
        _ => Err(AppError::SignerNotApproved(format!(
            "signer {signer_uuid} is {}, not approved",
            signer.status
        ))),
    }
}

/// Cut one page out of `items`. Cursors are decimal offsets into the full
/// result list; an offset past its end is rejected.
pub(crate) fn paginate<T>(
    items: Vec<T>,
    limit: Option<u32>,
    cursor: Option<String>,
) -> Result<(Vec<T>, NextCursor), AppError> {
    let page = PageOptions { cursor, limit };
    let offset = match &page.cursor {
        Some(c) => c
            .parse::<usize>()
            .map_err(|_| AppError::invalid("cursor", format!("unknown cursor '{c}'")))?,
        None => 0,
    };
    let limit = page.effective_limit() as usize;
    let total = items.len();
    if offset > total {
        return Err(AppError::invalid(
            "cursor",
            format!("cursor {offset} is past the end ({total} items)"),
        ));
    }
    let slice: Vec<T> = items.into_iter().skip(offset).take(limit).collect();
    let end = offset.saturating_add(limit);
    let next = if end < total {
        NextCursor::at(end.to_string())
    } else {
        NextCursor::default()
    };
    Ok((slice, next))
}
