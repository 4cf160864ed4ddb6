//! Custody account: secp256k1 key derived from a BIP-39 mnemonic.
//!
//! Like the rest of this crate, [`Account`] is fully synchronous and has no
//! storage dependency. The *host* supplies the mnemonic for the duration of
//! one operation and drops the account afterwards; nothing here persists it.
//!
//! # Derivation
//!
//! ```text
//! mnemonic ──BIP-39──► seed ──BIP-32 m/44'/60'/0'/0/0──► secp256k1 key ──► 0x address
//! ```
//!
//! The path is the standard first account of the Ethereum family, which is
//! what wallets use for the custody address of a Farcaster identity.

use alloy_primitives::{Address, B256};
use alloy_signer::SignerSync;
use alloy_signer_local::{coins_bip39::English, MnemonicBuilder, PrivateKeySigner};
use alloy_sol_types::{Eip712Domain, SolStruct};
use thiserror::Error;

/// Errors raised while deriving an [`Account`].
#[derive(Debug, Error, PartialEq)]
pub enum AccountError {
    #[error("invalid mnemonic: {0}")]
    InvalidMnemonic(String),
}

/// Errors raised while producing a signature with an [`Account`].
#[derive(Debug, Error, PartialEq)]
pub enum SignError {
    #[error("signing failed: {0}")]
    Signing(String),
}

/// A custody account: an address plus the capability to sign for it.
///
/// `Debug` only shows the address; the private key never leaves the value.
#[derive(Clone)]
pub struct Account {
    signer: PrivateKeySigner,
}

impl Account {
    /// Derive the account at `m/44'/60'/0'/0/0` from `phrase`.
    ///
    /// Words are separated by whitespace and must come from the English
    /// BIP-39 wordlist. Fails with [`AccountError::InvalidMnemonic`] when a
    /// word is unknown or the checksum does not match.
    pub fn from_mnemonic(phrase: &str) -> Result<Self, AccountError> {
        let normalized = phrase.split_whitespace().collect::<Vec<_>>().join(" ");
        if normalized.is_empty() {
            return Err(AccountError::InvalidMnemonic("phrase is empty".into()));
        }

        let signer = MnemonicBuilder::<English>::default()
            .phrase(normalized)
            .index(0u32)
            .map_err(|e| AccountError::InvalidMnemonic(e.to_string()))?
            .build()
            .map_err(|e| AccountError::InvalidMnemonic(e.to_string()))?;

        Ok(Self { signer })
    }

    /// The account's address.
    pub fn address(&self) -> Address {
        self.signer.address()
    }

    /// Sign a 32-byte prehash. Returns the 65-byte `r || s || v` signature as
    /// `0x`-prefixed hex.
    pub fn sign_hash(&self, hash: &B256) -> Result<String, SignError> {
        let signature = self
            .signer
            .sign_hash_sync(hash)
            .map_err(|e| SignError::Signing(e.to_string()))?;
        Ok(alloy_primitives::hex::encode_prefixed(signature.as_bytes()))
    }

    /// Sign an EIP-712 struct under `domain`.
    ///
    /// The type schema and primary type name are those of `T` itself, so a
    /// message can only be signed against the schema it was built from.
    pub fn sign_typed_data<T: SolStruct>(
        &self,
        message: &T,
        domain: &Eip712Domain,
    ) -> Result<String, SignError> {
        self.sign_hash(&message.eip712_signing_hash(domain))
    }
}

impl std::fmt::Debug for Account {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Account")
            .field("address", &self.address())
            .finish_non_exhaustive()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
