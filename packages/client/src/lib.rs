//! Async client for the Neynar Farcaster REST API.
//!
//! # Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`client`] | [`NeynarClient`], the facade over both API generations |
//! | [`v1`] / [`v2`] | One client per API generation |
//! | [`provision`] | The signer provisioning sequence |
//! | [`registry`] | The [`SignerRegistry`] and [`UserDirectory`] seams provisioning runs against |
//! | [`transport`] | Shared HTTP plumbing and error classification |
//! | [`config`] | [`ClientConfig`], read from `NEYNAR_*` environment variables |
//! | [`error`] | [`ClientError`] |
//!
//! # Provisioning a signer
//!
//! ```no_run
//! # async fn run() -> Result<(), neynar::ClientError> {
//! use neynar::{ClientConfig, NeynarClient, ProvisionOptions};
//!
//! let client = NeynarClient::new(ClientConfig::from_env()?)?;
//! let mnemonic = std::env::var("NEYNAR_MNEMONIC").unwrap_or_default();
//! if let Some(signer) = client
//!     .create_signer_and_register_signed_key(&mnemonic, ProvisionOptions::default())
//!     .await?
//! {
//!     println!("approve at {:?}", signer.signer_approval_url);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod provision;
pub mod registry;
pub mod transport;
pub mod v1;
pub mod v2;

pub use client::NeynarClient;
pub use config::{ClientConfig, ConfigError, ErrorPolicy, DEFAULT_BASE_URL};
pub use error::{ClientError, RemoteApiError};
pub use provision::{provision_signer, ProvisionOptions, ProvisionStage};
pub use registry::{SignerRegistry, UserDirectory};
pub use transport::{Transport, API_KEY_HEADER};
pub use v1::V1Client;
pub use v2::V2Client;

pub use neynar_api as api;
