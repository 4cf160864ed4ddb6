//! EIP-712 signed key requests.
//!
//! A signed key request is the statement "operator `requestFid` authorizes
//! public `key` until `deadline`", signed by the operator's custody account.
//! The remote registry verifies it against the `SignedKeyRequestValidator`
//! contract's domain before it accepts a new signer.
//!
//! Domain and type schema are fixed:
//!
//! ```text
//! domain  { name: "Farcaster SignedKeyRequestValidator", version: "1",
//!           chainId: 10, verifyingContract: 0x00000000FC700472606ED4fA22623Acf62c60553 }
//! type    SignedKeyRequest(uint256 requestFid,bytes key,uint256 deadline)
//! ```
//!
//! Any mutation of the triple after signing invalidates the signature.

use std::str::FromStr;

use alloy_primitives::{address, hex, Address, Bytes, Signature, U256};
use alloy_sol_types::{eip712_domain, sol, Eip712Domain, SolStruct};
use thiserror::Error;

use crate::account::{Account, SignError};

sol! {
    /// The EIP-712 message authorizing a signer key for an operator.
    #[derive(Debug, PartialEq, Eq)]
    struct SignedKeyRequest {
        uint256 requestFid;
        bytes key;
        uint256 deadline;
    }
}

/// `SignedKeyRequestValidator` contract on OP mainnet.
pub const SIGNED_KEY_REQUEST_VALIDATOR: Address =
    address!("00000000FC700472606ED4fA22623Acf62c60553");

/// OP mainnet chain id.
pub const SIGNED_KEY_REQUEST_CHAIN_ID: u64 = 10;

/// Lifetime of a request when the caller does not pick a deadline (24 hours).
pub const DEFAULT_DEADLINE_SECS: u64 = 86_400;

/// The EIP-712 domain every signed key request is bound to.
pub fn signed_key_request_domain() -> Eip712Domain {
    eip712_domain! {
        name: "Farcaster SignedKeyRequestValidator",
        version: "1",
        chain_id: SIGNED_KEY_REQUEST_CHAIN_ID,
        verifying_contract: SIGNED_KEY_REQUEST_VALIDATOR,
    }
}

/// `now + 24h`, in Unix seconds.
pub fn default_deadline(now: u64) -> u64 {
    now.saturating_add(DEFAULT_DEADLINE_SECS)
}

/// Errors raised when runtime values do not fit the request schema.
#[derive(Debug, Error, PartialEq)]
pub enum PayloadError {
    #[error("requestFid must be a positive integer")]
    ZeroFid,

    #[error("key is not a 0x-prefixed hex byte string: '{0}'")]
    InvalidKey(String),

    #[error("signature is malformed: {0}")]
    MalformedSignature(String),

    #[error(transparent)]
    Signing(#[from] SignError),
}

impl SignedKeyRequest {
    /// Assemble a request from the values the orchestrator has at hand.
    ///
    /// `key` is copied verbatim from the registry's response and must be
    /// `0x`-prefixed, even-length hex. Integers are widened to `uint256`.
    pub fn build(request_fid: u64, key: &str, deadline: u64) -> Result<Self, PayloadError> {
        if request_fid == 0 {
            return Err(PayloadError::ZeroFid);
        }
        if !key.starts_with("0x") {
            return Err(PayloadError::InvalidKey(key.to_string()));
        }
        let key = Bytes::from_str(key).map_err(|_| PayloadError::InvalidKey(key.to_string()))?;

        Ok(Self {
            requestFid: U256::from(request_fid),
            key,
            deadline: U256::from(deadline),
        })
    }

    /// Sign with `account` under [`signed_key_request_domain`].
    pub fn sign(&self, account: &Account) -> Result<String, PayloadError> {
        Ok(account.sign_typed_data(self, &signed_key_request_domain())?)
    }

    /// Recover the address that produced `signature` over this exact request.
    ///
    /// A signature over a different triple recovers to some unrelated
    /// address, so callers compare the result against the expected custody
    /// address.
    pub fn recover_signer(&self, signature: &str) -> Result<Address, PayloadError> {
        let raw = hex::decode(signature)
            .map_err(|e| PayloadError::MalformedSignature(e.to_string()))?;
        let signature = Signature::try_from(raw.as_slice())
            .map_err(|e| PayloadError::MalformedSignature(e.to_string()))?;
        let hash = self.eip712_signing_hash(&signed_key_request_domain());
        signature
            .recover_address_from_prehash(&hash)
            .map_err(|e| PayloadError::MalformedSignature(e.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
