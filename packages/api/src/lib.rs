//! Request and response types for the Neynar Farcaster REST API.
//!
//! This crate encodes both API generations as plain serde types. It has no
//! HTTP dependency: the `neynar` client crate sends these types, and the
//! `neynar-mock` crate serves them in tests.
//!
//! # Endpoints covered
//!
//! | Method | Path | Type |
//! |--------|------|------|
//! | GET | `/v1/farcaster/user` | → [`V1Response`]<[`UserResponse`]> |
//! | GET | `/v1/farcaster/custody-address` | → [`V1Response`]<[`UserResponse`]> |
//! | GET | `/v1/farcaster/cast` | → [`V1Response`]<[`CastResponse`]> |
//! | GET | `/v1/farcaster/casts` | [`PageOptions`] → [`V1Response`]<[`CastsPage`]> |
//! | GET | `/v1/farcaster/followers` | [`PageOptions`] → [`V1Response`]<[`UsersPage`]> |
//! | POST | `/v2/farcaster/signer` | → [`Signer`] |
//! | GET | `/v2/farcaster/signer` | → [`Signer`] |
//! | POST | `/v2/farcaster/signer/signed_key` | [`RegisterSignedKeyRequest`] → [`Signer`] |
//! | POST | `/v2/farcaster/cast` | [`PublishCastRequest`] → [`PublishCastResponse`] |
//! | DELETE | `/v2/farcaster/cast` | [`DeleteCastRequest`] → [`OperationResponse`] |
//! | POST / DELETE | `/v2/farcaster/reaction` | [`ReactionRequest`] → [`OperationResponse`] |
//! | POST / DELETE | `/v2/farcaster/user/follow` | [`FollowRequest`] → [`BulkFollowResponse`] |
//! | PATCH | `/v2/farcaster/user` | [`UpdateUserRequest`] → [`OperationResponse`] |
//! | GET | `/v2/farcaster/user/bulk` | → [`BulkUsersResponse`] |
//! | GET | `/v2/farcaster/feed` | [`FeedQuery`] → [`CastsPage`] |
//! | GET | `/v2/farcaster/channel` | → [`ChannelResponse`] |
//!
//! Every error response carries an [`ErrorResponse`] body.

pub mod cast;
pub mod error;
pub mod feed;
pub mod follow;
pub mod page;
pub mod reaction;
pub mod signer;
pub mod user;

pub use cast::{
    Cast, CastAuthor, CastResponse, CastsPage, DeleteCastRequest, Embed, PublishCastRequest,
    PublishCastResponse,
};
pub use error::{codes, ErrorResponse, OperationResponse};
pub use feed::{Channel, ChannelResponse, FeedQuery, FeedType};
pub use follow::{BulkFollowResponse, FollowRequest, FollowResult};
pub use page::{NextCursor, PageOptions, V1Response};
pub use reaction::{ReactionRequest, ReactionType};
pub use signer::{RegisterSignedKeyRequest, Signer, SignerStatus};
pub use user::{Bio, BulkUsersResponse, UpdateUserRequest, User, UserProfile, UserResponse, UsersPage};
