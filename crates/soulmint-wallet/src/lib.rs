//! Wallet abstraction for the soulmint system.
//!
//! This module defines the transaction-capable connection handle the
//! minting flow drives: allowance reads, approval and mint submission,
//! confirmation waits, and the read-side contract calls. The flow owns
//! none of this state; it treats the wallet as an opaque collaborator
//! bound to a specific chain.

use alloy::primitives::{Address, U256};
use async_trait::async_trait;
use soulmint_types::{Tier, TransactionHash, TransactionReceipt};
use thiserror::Error;

/// Re-export implementations
pub mod implementations {
	pub mod evm {
		pub mod alloy;
	}
}

pub use implementations::evm::alloy::{AlloyWallet, ConfirmationPolicy};

/// Errors that can occur during wallet operations.
#[derive(Debug, Error)]
pub enum WalletError {
	/// Error that occurs when a cryptographic key is invalid or malformed.
	#[error("Invalid key: {0}")]
	InvalidKey(String),
	/// Error that occurs during network communication, including a
	/// submission the node or signer refused.
	#[error("Network error: {0}")]
	Network(String),
}

/// Trait defining the interface for transaction-capable wallets.
///
/// The minting flow and the read-side queries are written against this
/// trait, so tests can script outcomes without a node. Submission methods
/// return as soon as the signed transaction has been accepted; callers
/// that need finality follow up with [`wait_for_receipt`].
///
/// [`wait_for_receipt`]: WalletInterface::wait_for_receipt
#[async_trait]
pub trait WalletInterface: Send + Sync {
	/// Returns the chain id this wallet is bound to, if any.
	///
	/// A wallet without a chain binding cannot resolve contract addresses;
	/// the flow reports that as a precondition failure before touching the
	/// network.
	fn chain_id(&self) -> Option<u64>;

	/// Reads the current ERC-20 allowance granted by `owner` to `spender`.
	async fn allowance(
		&self,
		token: Address,
		owner: Address,
		spender: Address,
	) -> Result<U256, WalletError>;

	/// Submits an ERC-20 approval for exactly `amount` and returns the
	/// transaction hash.
	async fn approve(
		&self,
		token: Address,
		spender: Address,
		amount: U256,
	) -> Result<TransactionHash, WalletError>;

	/// Submits the tier-specific mint transaction against the collection
	/// contract and returns the transaction hash.
	async fn mint(&self, collection: Address, tier: Tier) -> Result<TransactionHash, WalletError>;

	/// Waits until the transaction is confirmed and returns its receipt,
	/// including emitted logs.
	///
	/// A reverted transaction is not an error here; it comes back as a
	/// receipt with `success == false`. Errors mean the wait itself failed.
	async fn wait_for_receipt(
		&self,
		hash: &TransactionHash,
	) -> Result<TransactionReceipt, WalletError>;

	/// Reads whether `account` has already minted from the collection.
	async fn has_minted(&self, collection: Address, account: Address)
		-> Result<bool, WalletError>;

	/// Reads the collection token balance of `account`.
	async fn balance_of(&self, collection: Address, account: Address)
		-> Result<U256, WalletError>;

	/// Reads the token id at `index` in the owner enumeration of `account`.
	async fn token_of_owner_by_index(
		&self,
		collection: Address,
		account: Address,
		index: U256,
	) -> Result<U256, WalletError>;

	/// Reads the token URI for `token_id`.
	async fn token_uri(&self, collection: Address, token_id: U256) -> Result<String, WalletError>;
}
