//! Command-line entry point for testnet USDC transfers over CCTP.

use std::process::ExitCode;

use alloy_primitives::{Address, FixedBytes};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use cctp_bridge::{
    bridge_usdc, AttestationProvider, AttestationStatus, ChainRegistry, IrisAttestationProvider,
    TransferOutcome, TransferRequest,
};

#[derive(Parser, Debug)]
#[command(name = "cctp-bridge", version, about = "Bridge testnet USDC between EVM chains via CCTP")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Burn USDC on the source chain and mint it on the destination chain.
    Bridge {
        /// Amount of USDC in human-decimal form, e.g. "10.5".
        amount: String,
        /// Source chain slug, e.g. "base-sepolia".
        source: String,
        /// Destination chain slug, e.g. "eth-sepolia".
        destination: String,
        /// Recipient address on the destination chain.
        recipient: Address,
    },
    /// Query Circle's attestation service for a message hash.
    Status {
        /// keccak256 hash of the cross-chain message, 0x-prefixed.
        message_hash: FixedBytes<32>,
    },
    /// List the supported chains.
    Chains,
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine; the key can come from the environment.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), String> {
    let registry = ChainRegistry::testnet();

    match cli.command {
        Command::Bridge {
            amount,
            source,
            destination,
            recipient,
        } => {
            let signing_key = std::env::var("PRIVATE_KEY")
                .map_err(|_| "PRIVATE_KEY is not set (in the environment or .env)".to_string())?;

            let request = TransferRequest::builder()
                .amount(amount)
                .source_chain(source)
                .destination_chain(destination)
                .recipient(recipient)
                .signing_key(signing_key)
                .build();

            match bridge_usdc(&request, &registry).await {
                TransferOutcome::Success {
                    message_hash,
                    burn_tx_hash,
                    mint_tx_hash,
                    ..
                } => {
                    info!(%message_hash, event = "cli_transfer_complete");
                    println!("burn tx:      {burn_tx_hash}");
                    println!("mint tx:      {mint_tx_hash}");
                    println!("message hash: {message_hash}");
                    Ok(())
                }
                TransferOutcome::Failure { error } => Err(error.to_string()),
            }
        }
        Command::Status { message_hash } => {
            let provider = IrisAttestationProvider::sandbox().map_err(|e| e.to_string())?;
            let record = provider
                .fetch_status(message_hash)
                .await
                .map_err(|e| e.to_string())?;
            match record.status {
                AttestationStatus::Complete => println!("complete"),
                AttestationStatus::Pending => println!("pending"),
            }
            Ok(())
        }
        Command::Chains => {
            for (slug, config) in registry.iter() {
                println!(
                    "{slug:<14} {} (chain id {}, CCTP domain {})",
                    config.name,
                    config.chain_id,
                    config.domain.as_u32()
                );
            }
            Ok(())
        }
    }
}
