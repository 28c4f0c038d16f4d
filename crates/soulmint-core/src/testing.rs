//! Scripted wallet for exercising the flow and queries without a node.
//!
//! Outcomes are programmed per test; every contract interaction is
//! recorded so tests can assert what was (and was not) submitted.

use alloy::primitives::{Address, B256, U256};
use async_trait::async_trait;
use soulmint_types::{
	Log, NetworkConfig, NetworksConfig, Tier, TransactionHash, TransactionReceipt,
	TRANSFER_EVENT_TOPIC,
};
use soulmint_wallet::{WalletError, WalletInterface};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

/// Chain id the default mock wallet is bound to.
pub(crate) const TEST_CHAIN_ID: u64 = 31337;

/// Programmed outcome of a submission call.
pub(crate) enum SubmitOutcome {
	Accept(TransactionHash),
	Reject(String),
}

/// Programmed outcome of a confirmation wait.
pub(crate) enum WaitOutcome {
	Receipt(TransactionReceipt),
	Fail(String),
}

/// Wallet whose every outcome is scripted by the test.
pub(crate) struct MockWallet {
	pub chain_id: Option<u64>,
	pub allowance: Result<U256, String>,
	pub approve_outcome: SubmitOutcome,
	pub mint_outcome: SubmitOutcome,
	/// Receipt outcomes consumed in order by `wait_for_receipt`.
	pub waits: Arc<Mutex<VecDeque<WaitOutcome>>>,
	pub allowance_calls: Arc<Mutex<Vec<(Address, Address, Address)>>>,
	pub approve_calls: Arc<Mutex<Vec<(Address, Address, U256)>>>,
	pub mint_calls: Arc<Mutex<Vec<Tier>>>,
	pub minted: bool,
	pub balance: U256,
	pub owned_token: U256,
	pub uri: String,
}

impl MockWallet {
	/// Queues the next confirmation-wait outcome.
	pub(crate) fn push_wait(&self, outcome: WaitOutcome) {
		self.waits.lock().unwrap().push_back(outcome);
	}
}

impl Default for MockWallet {
	fn default() -> Self {
		Self {
			chain_id: Some(TEST_CHAIN_ID),
			allowance: Ok(U256::ZERO),
			approve_outcome: SubmitOutcome::Accept(zero_hash()),
			mint_outcome: SubmitOutcome::Accept(zero_hash()),
			waits: Arc::new(Mutex::new(VecDeque::new())),
			allowance_calls: Arc::new(Mutex::new(Vec::new())),
			approve_calls: Arc::new(Mutex::new(Vec::new())),
			mint_calls: Arc::new(Mutex::new(Vec::new())),
			minted: false,
			balance: U256::ZERO,
			owned_token: U256::ZERO,
			uri: String::new(),
		}
	}
}

#[async_trait]
impl WalletInterface for MockWallet {
	fn chain_id(&self) -> Option<u64> {
		self.chain_id
	}

	async fn allowance(
		&self,
		token: Address,
		owner: Address,
		spender: Address,
	) -> Result<U256, WalletError> {
		self.allowance_calls
			.lock()
			.unwrap()
			.push((token, owner, spender));
		self.allowance.clone().map_err(WalletError::Network)
	}

	async fn approve(
		&self,
		token: Address,
		spender: Address,
		amount: U256,
	) -> Result<TransactionHash, WalletError> {
		self.approve_calls
			.lock()
			.unwrap()
			.push((token, spender, amount));
		match &self.approve_outcome {
			SubmitOutcome::Accept(hash) => Ok(hash.clone()),
			SubmitOutcome::Reject(error) => Err(WalletError::Network(error.clone())),
		}
	}

	async fn mint(&self, _collection: Address, tier: Tier) -> Result<TransactionHash, WalletError> {
		self.mint_calls.lock().unwrap().push(tier);
		match &self.mint_outcome {
			SubmitOutcome::Accept(hash) => Ok(hash.clone()),
			SubmitOutcome::Reject(error) => Err(WalletError::Network(error.clone())),
		}
	}

	async fn wait_for_receipt(
		&self,
		_hash: &TransactionHash,
	) -> Result<TransactionReceipt, WalletError> {
		match self.waits.lock().unwrap().pop_front() {
			Some(WaitOutcome::Receipt(receipt)) => Ok(receipt),
			Some(WaitOutcome::Fail(error)) => Err(WalletError::Network(error)),
			None => panic!("no scripted receipt outcome left"),
		}
	}

	async fn has_minted(
		&self,
		_collection: Address,
		_account: Address,
	) -> Result<bool, WalletError> {
		Ok(self.minted)
	}

	async fn balance_of(
		&self,
		_collection: Address,
		_account: Address,
	) -> Result<U256, WalletError> {
		Ok(self.balance)
	}

	async fn token_of_owner_by_index(
		&self,
		_collection: Address,
		_account: Address,
		_index: U256,
	) -> Result<U256, WalletError> {
		Ok(self.owned_token)
	}

	async fn token_uri(&self, _collection: Address, _token_id: U256) -> Result<String, WalletError> {
		Ok(self.uri.clone())
	}
}

/// Networks table covering the mock's default chain.
pub(crate) fn test_networks() -> NetworksConfig {
	let mut networks = HashMap::new();
	networks.insert(
		TEST_CHAIN_ID,
		NetworkConfig {
			rpc_url: "http://localhost:8545".to_string(),
			collection_address: Address::repeat_byte(0x11),
			payment_token_address: Address::repeat_byte(0x22),
		},
	);
	networks
}

/// All-zero transaction hash used by scripted submissions.
pub(crate) fn zero_hash() -> TransactionHash {
	TransactionHash(vec![0u8; 32])
}

/// A confirmed receipt with no logs.
pub(crate) fn plain_receipt(success: bool) -> TransactionReceipt {
	TransactionReceipt {
		hash: zero_hash(),
		block_number: 1,
		success,
		logs: Vec::new(),
	}
}

/// A transfer log crediting `recipient` with `token_id`.
pub(crate) fn transfer_log(recipient: Address, token_id: u64) -> Log {
	Log {
		address: Address::repeat_byte(0x11),
		topics: vec![
			TRANSFER_EVENT_TOPIC,
			B256::ZERO,
			B256::left_padding_from(recipient.as_slice()),
			B256::from(U256::from(token_id)),
		],
		data: Default::default(),
	}
}

/// A successful mint receipt carrying one transfer log.
pub(crate) fn transfer_receipt(recipient: Address, token_id: u64) -> TransactionReceipt {
	TransactionReceipt {
		hash: zero_hash(),
		block_number: 1,
		success: true,
		logs: vec![transfer_log(recipient, token_id)],
	}
}
