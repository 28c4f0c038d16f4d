//! Progress events emitted during the minting flow.
//!
//! The flow pushes one event for every state transition, success or
//! failure, in the order the steps execute. Consumers never need to poll:
//! each invocation produces a strictly ordered sequence ending in exactly
//! one terminal event.

use crate::{TransactionHash, TransactionReceipt};
use alloy::primitives::U256;
use serde::{Deserialize, Serialize};

/// Progress event for one minting invocation.
///
/// Errors are carried as strings: the event stream is the flow boundary
/// and no error type crosses it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MintEvent {
	/// The allowance read has been initiated.
	CheckingAllowance,
	/// The current allowance already covers the tier price; the approval
	/// step is skipped.
	AllowanceSufficient { current: U256 },
	/// An approval for exactly `amount` is about to be submitted.
	ApprovingTokens { amount: U256 },
	/// The approval transaction was accepted by the signer and submitted.
	UserSignedApproval { tx_hash: TransactionHash },
	/// The signer declined or failed to sign the approval. Terminal.
	UserSigningApprovalError { error: String },
	/// The approval transaction was confirmed and succeeded.
	ApprovalTransactionSucceeded { receipt: TransactionReceipt },
	/// The approval transaction was confirmed but reverted. Terminal.
	ApprovalTransactionReverted { receipt: TransactionReceipt },
	/// Waiting for the approval confirmation failed. Terminal.
	ApprovalTransactionFailed { error: String },
	/// The mint transaction is about to be submitted.
	PreMint,
	/// The mint transaction was accepted by the signer and submitted.
	UserSignedMint { tx_hash: TransactionHash },
	/// The signer declined or failed to sign the mint. Terminal.
	UserSigningMintError { error: String },
	/// The mint transaction was confirmed and succeeded.
	MintingTransactionSucceeded { receipt: TransactionReceipt },
	/// The mint transaction was confirmed but reverted. Terminal.
	MintingTransactionReverted { receipt: TransactionReceipt },
	/// Waiting for the mint confirmation failed. Terminal.
	MintingTransactionFailed { error: String },
	/// The minted token id was extracted from the receipt. Terminal.
	MintComplete { token_id: U256 },
	/// Unclassified failure, e.g. a missing chain binding or a receipt
	/// whose logs could not be interpreted. Terminal.
	UnexpectedError { message: String },
}

impl MintEvent {
	/// Returns true if no further events follow this one.
	pub fn is_terminal(&self) -> bool {
		matches!(
			self,
			MintEvent::UserSigningApprovalError { .. }
				| MintEvent::ApprovalTransactionReverted { .. }
				| MintEvent::ApprovalTransactionFailed { .. }
				| MintEvent::UserSigningMintError { .. }
				| MintEvent::MintingTransactionReverted { .. }
				| MintEvent::MintingTransactionFailed { .. }
				| MintEvent::MintComplete { .. }
				| MintEvent::UnexpectedError { .. }
		)
	}

	/// Returns true if this event reports a flow failure.
	pub fn is_failure(&self) -> bool {
		self.is_terminal() && !matches!(self, MintEvent::MintComplete { .. })
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_terminal_classification() {
		assert!(!MintEvent::CheckingAllowance.is_terminal());
		assert!(!MintEvent::PreMint.is_terminal());
		assert!(!MintEvent::AllowanceSufficient {
			current: U256::ZERO
		}
		.is_terminal());
		assert!(MintEvent::MintComplete {
			token_id: U256::from(1u64)
		}
		.is_terminal());
		assert!(MintEvent::UnexpectedError {
			message: "boom".into()
		}
		.is_terminal());
	}

	#[test]
	fn test_failure_classification() {
		assert!(!MintEvent::MintComplete {
			token_id: U256::from(1u64)
		}
		.is_failure());
		assert!(MintEvent::UserSigningMintError {
			error: "User rejected".into()
		}
		.is_failure());
	}
}
