//! Transaction delivery types for the minting flow.
//!
//! This module defines types related to transaction submission and
//! confirmation, including transaction hashes, receipts and the log
//! entries the result extractor inspects.

use alloy::primitives::{b256, Address, Bytes, B256};

/// Topic of the ERC-721 `Transfer(address,address,uint256)` event.
///
/// Mint transactions emit a transfer from the zero address to the minting
/// account; the token id sits in the fourth topic slot because all three
/// parameters are indexed.
pub const TRANSFER_EVENT_TOPIC: B256 =
	b256!("ddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef");

/// Blockchain transaction hash representation.
///
/// Stores transaction hashes as raw bytes, returned immediately on
/// submission before the transaction is confirmed.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TransactionHash(pub Vec<u8>);

/// A single log entry emitted by a confirmed transaction.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Log {
	/// Address of the contract that emitted the log.
	pub address: Address,
	/// Indexed topics, the first being the event signature.
	pub topics: Vec<B256>,
	/// Non-indexed data payload.
	pub data: Bytes,
}

/// Transaction receipt containing execution details.
///
/// Provides information about a transaction after it has been included in
/// a block, including its success status and emitted logs.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TransactionReceipt {
	/// The hash of the transaction.
	pub hash: TransactionHash,
	/// The block number where the transaction was included.
	pub block_number: u64,
	/// Whether the transaction executed successfully.
	pub success: bool,
	/// Log entries emitted during execution.
	pub logs: Vec<Log>,
}

#[cfg(test)]
mod tests {
	use super::*;
	use alloy::primitives::keccak256;

	#[test]
	fn test_transfer_event_topic_matches_signature() {
		assert_eq!(
			TRANSFER_EVENT_TOPIC,
			keccak256("Transfer(address,address,uint256)")
		);
	}
}
