//! Command-line entry point for the soulmint tooling.
//!
//! Provides three subcommands over a configured chain: `mint` drives the
//! full payment-then-mint flow and streams its progress, `status` reports
//! whether an address has minted and which token it owns, and `metadata`
//! fetches a token's on-chain metadata.

use alloy::primitives::{Address, U256};
use clap::{Parser, Subcommand};
use soulmint_config::Config;
use soulmint_core::{MintFlow, MintQueries, MintRequest};
use soulmint_types::{format_token_amount, truncate_id, MintEvent, Tier};
use soulmint_wallet::{AlloyWallet, ConfirmationPolicy};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Command-line arguments for the soulmint CLI.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
	/// Path to configuration file
	#[arg(short, long, default_value = "config.toml")]
	config: PathBuf,

	/// Chain id to operate on
	#[arg(long)]
	chain: u64,

	/// Log level (trace, debug, info, warn, error)
	#[arg(short, long, default_value = "info")]
	log_level: String,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Mint a token of the given tier
	Mint {
		/// Tier to mint (1 or 2)
		#[arg(long)]
		tier: u8,
	},
	/// Show whether an address has minted and which token it owns
	Status {
		/// Address to inspect; defaults to the signing key's address
		#[arg(long)]
		address: Option<Address>,
	},
	/// Fetch and print on-chain metadata for a token
	Metadata {
		/// Token id to look up
		#[arg(long)]
		token_id: U256,
	},
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	let args = Args::parse();

	// Initialize tracing with env filter
	use tracing_subscriber::{fmt, EnvFilter};
	let env_filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
	fmt().with_env_filter(env_filter).with_target(false).init();

	// Load configuration
	let config_path = args
		.config
		.to_str()
		.ok_or("Configuration path is not valid UTF-8")?;
	let config = Config::from_file(config_path)?;

	let network = config
		.networks
		.get(&args.chain)
		.ok_or_else(|| format!("Unsupported chain id: {}", args.chain))?;

	let policy = ConfirmationPolicy {
		confirmations: config.wallet.confirmations,
		poll_interval: Duration::from_secs(config.wallet.poll_interval_secs),
		timeout: Duration::from_secs(config.wallet.timeout_secs),
	};
	let wallet = AlloyWallet::new(
		&network.rpc_url,
		args.chain,
		&config.wallet.private_key,
		policy,
	)?;
	let account = wallet.account();
	let wallet = Arc::new(wallet);

	match args.command {
		Command::Mint { tier } => {
			let tier = Tier::try_from(tier)?;
			run_mint(wallet, &config, account, tier).await
		}
		Command::Status { address } => {
			let queries = MintQueries::new(wallet, config.networks.clone());
			let target = address.unwrap_or(account);

			let minted = queries.has_minted(target).await?;
			tracing::info!(address = %target, minted, "Mint status");

			if let Some(token_id) = queries.user_token(target).await? {
				tracing::info!(address = %target, token_id = %token_id, "Owned token");
			}
			Ok(())
		}
		Command::Metadata { token_id } => {
			let queries = MintQueries::new(wallet, config.networks.clone());
			let metadata = queries.token_metadata(token_id).await?;
			println!("{}", serde_json::to_string_pretty(&metadata)?);
			Ok(())
		}
	}
}

/// Runs the mint flow, reporting every progress event as it arrives.
///
/// Exits non-zero when the flow terminates in a failure event; a signer
/// rejection is a voluntary cancel and is reported without an error dump.
async fn run_mint(
	wallet: Arc<AlloyWallet>,
	config: &Config,
	account: Address,
	tier: Tier,
) -> Result<(), Box<dyn std::error::Error>> {
	tracing::info!(account = %account, tier = tier.number(), "Starting mint");

	let flow = MintFlow::new(wallet, config.networks.clone());
	let mut handle = flow.start(MintRequest { account, tier });

	let mut failed = false;
	while let Some(event) = handle.events.recv().await {
		report_event(&event);
		if event.is_failure() {
			failed = true;
		}
	}
	handle.done.await?;

	if failed {
		std::process::exit(1);
	}
	Ok(())
}

/// Maps one progress event to terminal output.
fn report_event(event: &MintEvent) {
	match event {
		MintEvent::CheckingAllowance => {
			tracing::info!("Checking current allowance");
		}
		MintEvent::AllowanceSufficient { current } => {
			tracing::info!(
				current = %format_token_amount(&current.to_string(), 18),
				"Allowance already sufficient, skipping approval"
			);
		}
		MintEvent::ApprovingTokens { amount } => {
			tracing::info!(
				amount = %format_token_amount(&amount.to_string(), 18),
				"Approving payment tokens"
			);
		}
		MintEvent::UserSignedApproval { tx_hash } => {
			tracing::info!(
				tx_hash = %truncate_id(&hex::encode(&tx_hash.0)),
				"Approval submitted"
			);
		}
		MintEvent::ApprovalTransactionSucceeded { receipt } => {
			tracing::info!(block = receipt.block_number, "Approval confirmed");
		}
		MintEvent::ApprovalTransactionReverted { receipt } => {
			tracing::error!(
				tx_hash = %truncate_id(&hex::encode(&receipt.hash.0)),
				"Approval transaction reverted"
			);
		}
		MintEvent::ApprovalTransactionFailed { error } => {
			tracing::error!(error = %error, "Approval confirmation failed");
		}
		MintEvent::PreMint => {
			tracing::info!("Submitting mint transaction");
		}
		MintEvent::UserSignedMint { tx_hash } => {
			tracing::info!(
				tx_hash = %truncate_id(&hex::encode(&tx_hash.0)),
				"Mint submitted"
			);
		}
		MintEvent::MintingTransactionSucceeded { receipt } => {
			tracing::info!(block = receipt.block_number, "Mint confirmed");
		}
		MintEvent::MintingTransactionReverted { receipt } => {
			tracing::error!(
				tx_hash = %truncate_id(&hex::encode(&receipt.hash.0)),
				"Mint transaction reverted"
			);
		}
		MintEvent::MintingTransactionFailed { error } => {
			tracing::error!(error = %error, "Mint confirmation failed");
		}
		// A signer rejection is a voluntary cancel, not an error condition
		MintEvent::UserSigningApprovalError { error } | MintEvent::UserSigningMintError { error } => {
			tracing::info!(reason = %error, "Cancelled by signer");
		}
		MintEvent::MintComplete { token_id } => {
			tracing::info!(token_id = %token_id, "Mint complete");
		}
		MintEvent::UnexpectedError { message } => {
			tracing::error!(error = %message, "Mint failed");
		}
	}
}
