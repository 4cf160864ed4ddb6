//! Pure-logic signing primitives for the Neynar Farcaster client.
//!
//! This crate has **no I/O**: no networking, no filesystem, no async
//! runtime. The client crate owns every HTTP call; this crate derives the
//! custody account from a mnemonic and builds, signs and verifies the
//! EIP-712 `SignedKeyRequest` that authorizes a new signer key.
//!
//! # Crate layout
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`account`] | BIP-39 mnemonic → custody [`Account`] (address + signing) |
//! | [`signed_key_request`] | Fixed EIP-712 domain/schema, [`SignedKeyRequest`] build/sign/recover |
//!
//! # Quick start
//!
//! ```rust,ignore
//! use neynar_core::{Account, SignedKeyRequest};
//!
//! let account = Account::from_mnemonic(&phrase)?;
//! let request = SignedKeyRequest::build(194, "0xdead", 1_700_000_000)?;
//! let signature = request.sign(&account)?;
//! assert_eq!(request.recover_signer(&signature)?, account.address());
//! ```

pub mod account;
pub mod signed_key_request;

pub use account::{Account, AccountError, SignError};
pub use signed_key_request::{
    default_deadline, signed_key_request_domain, PayloadError, SignedKeyRequest,
    DEFAULT_DEADLINE_SECS, SIGNED_KEY_REQUEST_CHAIN_ID, SIGNED_KEY_REQUEST_VALIDATOR,
};
