//! `neynar`: command-line front end for the Neynar Farcaster API.
//!
//! - **`signer create`**: provision a signer for the app account behind a
//!   mnemonic and print it, including the approval URL.
//! - **`signer lookup`**: show a signer's current state.
//! - **`user fid` / `user custody`**: look a user up.
//! - **`cast publish` / `cast get`**: write or read a cast.
//!
//! Results are printed to stdout as pretty JSON. Errors go to stderr and the
//! process exits with status 2.

use std::process;
use std::time::Duration;

use alloy_primitives::Address;
use clap::{Parser, Subcommand};
use neynar::{ClientConfig, ClientError, ErrorPolicy, NeynarClient, ProvisionOptions, DEFAULT_BASE_URL};
use neynar_api::PublishCastRequest;
use serde::Serialize;

/// neynar: Farcaster API client
#[derive(Parser)]
#[command(name = "neynar", version, about, long_about = None)]
struct Cli {
    /// API key sent with every request.
    #[arg(long, env = "NEYNAR_API_KEY", hide_env_values = true)]
    api_key: String,

    /// API host, e.g. a local mock.
    #[arg(long, env = "NEYNAR_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Per-request timeout in seconds.
    #[arg(long, env = "NEYNAR_TIMEOUT_SECS", default_value_t = 30)]
    timeout: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create and inspect signers.
    #[command(subcommand)]
    Signer(SignerCommand),

    /// Look users up.
    #[command(subcommand)]
    User(UserCommand),

    /// Publish and fetch casts.
    #[command(subcommand)]
    Cast(CastCommand),
}

#[derive(Subcommand)]
enum SignerCommand {
    /// Create a signer and register a signed key request for it.
    ///
    /// The mnemonic must belong to the app's custody account. The printed
    /// signer is `pending_approval`; open its approval URL to approve it.
    Create {
        /// BIP-39 mnemonic of the app's custody account.
        #[arg(long, env = "NEYNAR_MNEMONIC", hide_env_values = true)]
        mnemonic: String,

        /// Unix timestamp after which the request expires (default: one day).
        #[arg(long, value_name = "SECS")]
        deadline: Option<u64>,
    },

    /// Show a signer by uuid.
    Lookup {
        #[arg(value_name = "UUID")]
        signer_uuid: String,
    },
}

#[derive(Subcommand)]
enum UserCommand {
    /// Look a user up by fid.
    Fid { fid: u64 },

    /// Look a user up by custody address.
    Custody {
        #[arg(value_name = "ADDRESS")]
        address: String,
    },
}

#[derive(Subcommand)]
enum CastCommand {
    /// Publish a cast through an approved signer.
    Publish {
        #[arg(long, value_name = "UUID")]
        signer_uuid: String,

        #[arg(long)]
        text: String,

        /// Channel id to post into.
        #[arg(long, value_name = "ID")]
        channel: Option<String>,
    },

    /// Fetch a cast by hash.
    Get {
        #[arg(value_name = "HASH")]
        hash: String,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "neynar=info".into()),
        )
        .init();

    let cli = Cli::parse();

    // Signer provisioning reports its failures instead of returning None.
    let config = ClientConfig::new(cli.api_key)
        .with_base_url(cli.base_url)
        .with_timeout(Duration::from_secs(cli.timeout))
        .with_error_policy(ErrorPolicy::Strict);
    let client = NeynarClient::new(config).unwrap_or_else(|e| fatal(&e.to_string()));

    if let Err(e) = run(&client, cli.command).await {
        fatal(&e.to_string());
    }
}

async fn run(client: &NeynarClient, command: Command) -> Result<(), ClientError> {
    match command {
        Command::Signer(SignerCommand::Create { mnemonic, deadline }) => {
            let options = ProvisionOptions { deadline };
            match client
                .create_signer_and_register_signed_key(&mnemonic, options)
                .await?
            {
                Some(signer) => print_json(&signer),
                None => fatal("signer provisioning failed"),
            }
        }

        Command::Signer(SignerCommand::Lookup { signer_uuid }) => {
            print_json(&client.lookup_signer(&signer_uuid).await?);
        }

        Command::User(UserCommand::Fid { fid }) => {
            print_json(&client.lookup_user_by_fid(fid).await?);
        }

        Command::User(UserCommand::Custody { address }) => {
            let address: Address = address
                .parse()
                .unwrap_or_else(|_| fatal(&format!("'{address}' is not a 20-byte hex address")));
            print_json(&client.lookup_user_by_custody_address(address).await?);
        }

        Command::Cast(CastCommand::Publish {
            signer_uuid,
            text,
            channel,
        }) => {
            let request = PublishCastRequest {
                channel_id: channel,
                ..PublishCastRequest::new(signer_uuid, text)
            };
            print_json(&client.publish_cast(&request).await?.cast);
        }

        Command::Cast(CastCommand::Get { hash }) => {
            print_json(&client.lookup_cast_by_hash(&hash).await?);
        }
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => fatal(&format!("failed to serialise output: {e}")),
    }
}

fn fatal(msg: &str) -> ! {
    eprintln!("neynar: {}", msg);
    process::exit(2);
}
