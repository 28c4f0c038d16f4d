//! Mint orchestration flow.
//!
//! Drives one mint attempt through its payment-then-mint sequence:
//! allowance check, conditional approval for exactly the tier price, mint
//! submission, confirmation wait and token-id extraction. Each step either
//! proceeds or converts its failure into a terminal progress event; no
//! error crosses the flow boundary and nothing is retried. A caller that
//! wants to retry re-invokes the whole flow, which re-reads the allowance.

use crate::progress::{progress_channel, MintHandle, ProgressSender};
use alloy::primitives::{Address, B256, U256};
use soulmint_types::{MintEvent, NetworksConfig, Tier, TransactionReceipt, TRANSFER_EVENT_TOPIC};
use soulmint_wallet::WalletInterface;
use std::sync::Arc;
use tracing::instrument;

/// Message for a wallet without a resolvable chain identity.
const CHAIN_UNBOUND: &str = "Chain id not available from wallet";

/// Message for a confirmed mint whose logs carry no usable transfer record.
const EXTRACTION_FAILED: &str = "Failed to extract token ID from mint transaction";

/// One mint attempt: who pays and which tier they claim.
///
/// Immutable once created; exactly one request is in flight per flow
/// invocation.
#[derive(Debug, Clone)]
pub struct MintRequest {
	/// The minting account, which also pays the tier price.
	pub account: Address,
	/// The tier being claimed.
	pub tier: Tier,
}

/// Orchestrates mint attempts against a wallet and a chain-keyed network
/// table.
///
/// The wallet and networks are shared collaborators; each invocation holds
/// only its own transaction handles, so independent attempts can run
/// concurrently.
#[derive(Clone)]
pub struct MintFlow {
	wallet: Arc<dyn WalletInterface>,
	networks: NetworksConfig,
}

impl MintFlow {
	/// Creates a flow over the given wallet and network table.
	pub fn new(wallet: Arc<dyn WalletInterface>, networks: NetworksConfig) -> Self {
		Self { wallet, networks }
	}

	/// Spawns one mint attempt and returns its progress handle.
	pub fn start(&self, request: MintRequest) -> MintHandle {
		let (sender, events) = progress_channel();
		let flow = self.clone();
		let done = tokio::spawn(async move {
			flow.run(request, &sender).await;
		});
		MintHandle { events, done }
	}

	/// Runs one mint attempt to its terminal event.
	///
	/// Event order follows execution order exactly: nothing is emitted
	/// speculatively or retroactively, and exactly one terminal event ends
	/// the stream.
	#[instrument(skip_all, fields(account = %request.account, tier = request.tier.number()))]
	pub async fn run(&self, request: MintRequest, events: &ProgressSender) {
		let Some(chain_id) = self.wallet.chain_id() else {
			events.emit(MintEvent::UnexpectedError {
				message: CHAIN_UNBOUND.to_string(),
			});
			return;
		};

		// Address resolution fails closed: an unknown chain is an error,
		// never a silent default.
		let Some(network) = self.networks.get(&chain_id) else {
			events.emit(MintEvent::UnexpectedError {
				message: format!("Unsupported chain id: {}", chain_id),
			});
			return;
		};
		let collection = network.collection_address;
		let payment_token = network.payment_token_address;
		let price = request.tier.price();

		// Step 1: read the current allowance, fresh on every attempt
		events.emit(MintEvent::CheckingAllowance);
		let current = match self
			.wallet
			.allowance(payment_token, request.account, collection)
			.await
		{
			Ok(amount) => amount,
			Err(e) => {
				events.emit(MintEvent::UnexpectedError {
					message: e.to_string(),
				});
				return;
			}
		};

		// Step 2: approve exactly the tier price if the allowance falls
		// short, and only proceed once the approval is confirmed
		if current < price {
			events.emit(MintEvent::ApprovingTokens { amount: price });

			let approval_hash = match self.wallet.approve(payment_token, collection, price).await {
				Ok(hash) => hash,
				Err(e) => {
					events.emit(MintEvent::UserSigningApprovalError {
						error: e.to_string(),
					});
					return;
				}
			};
			events.emit(MintEvent::UserSignedApproval {
				tx_hash: approval_hash.clone(),
			});

			let approval_receipt = match self.wallet.wait_for_receipt(&approval_hash).await {
				Ok(receipt) => receipt,
				Err(e) => {
					events.emit(MintEvent::ApprovalTransactionFailed {
						error: e.to_string(),
					});
					return;
				}
			};
			if !approval_receipt.success {
				events.emit(MintEvent::ApprovalTransactionReverted {
					receipt: approval_receipt,
				});
				return;
			}
			events.emit(MintEvent::ApprovalTransactionSucceeded {
				receipt: approval_receipt,
			});
		} else {
			events.emit(MintEvent::AllowanceSufficient { current });
		}

		// Step 3: submit the tier-specific mint
		events.emit(MintEvent::PreMint);

		let mint_hash = match self.wallet.mint(collection, request.tier).await {
			Ok(hash) => hash,
			Err(e) => {
				events.emit(MintEvent::UserSigningMintError {
					error: e.to_string(),
				});
				return;
			}
		};
		events.emit(MintEvent::UserSignedMint {
			tx_hash: mint_hash.clone(),
		});

		let mint_receipt = match self.wallet.wait_for_receipt(&mint_hash).await {
			Ok(receipt) => receipt,
			Err(e) => {
				events.emit(MintEvent::MintingTransactionFailed {
					error: e.to_string(),
				});
				return;
			}
		};
		if !mint_receipt.success {
			events.emit(MintEvent::MintingTransactionReverted {
				receipt: mint_receipt,
			});
			return;
		}
		events.emit(MintEvent::MintingTransactionSucceeded {
			receipt: mint_receipt.clone(),
		});

		// Step 4: recover the token id from the transfer record
		match extract_token_id(&mint_receipt, request.account) {
			Some(token_id) => events.emit(MintEvent::MintComplete { token_id }),
			None => events.emit(MintEvent::UnexpectedError {
				message: EXTRACTION_FAILED.to_string(),
			}),
		}
	}
}

/// Scans a confirmed mint receipt for a transfer record crediting
/// `recipient` and decodes the token id from its fourth topic slot.
///
/// The match is keyed on the transfer signature in the first topic and the
/// left-padded recipient address in the third. A missing fourth topic means
/// the record shape is not the expected all-indexed transfer, which is
/// treated the same as no match.
fn extract_token_id(receipt: &TransactionReceipt, recipient: Address) -> Option<U256> {
	let recipient_topic = B256::left_padding_from(recipient.as_slice());

	let transfer = receipt.logs.iter().find(|log| {
		log.topics.first() == Some(&TRANSFER_EVENT_TOPIC)
			&& log.topics.get(2) == Some(&recipient_topic)
	})?;

	let token_topic = transfer.topics.get(3)?;
	Some(U256::from_be_bytes(token_topic.0))
}
