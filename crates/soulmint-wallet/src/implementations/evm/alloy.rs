//! Alloy-backed EVM wallet implementation.
//!
//! This implementation uses the Alloy library to submit and monitor
//! transactions on EVM-compatible chains. Call data is built from the
//! `sol!` bindings below; the provider's wallet filler handles signing.

use crate::{WalletError, WalletInterface};
use alloy::network::EthereumWallet;
use alloy::primitives::{Address, Bytes, FixedBytes, U256};
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::rpc::types::TransactionRequest;
use alloy::signers::local::PrivateKeySigner;
use alloy::signers::Signer;
use alloy::sol;
use alloy::sol_types::SolCall;
use async_trait::async_trait;
use soulmint_types::{with_0x_prefix, Log, SecretString, Tier, TransactionHash, TransactionReceipt};
use std::time::Duration;

sol! {
	/// Payment token surface used by the minting flow.
	interface IERC20 {
		function allowance(address owner, address spender) external view returns (uint256);
		function approve(address spender, uint256 amount) external returns (bool);
	}

	/// Soul-bound collection surface: tiered one-per-address issuance plus
	/// the enumeration and metadata reads the query helpers rely on.
	interface ISoulboundCollection {
		function mintTier1() external;
		function mintTier2() external;
		function hasMinted(address account) external view returns (bool);
		function balanceOf(address owner) external view returns (uint256);
		function tokenOfOwnerByIndex(address owner, uint256 index) external view returns (uint256);
		function tokenURI(uint256 tokenId) external view returns (string memory);
	}
}

/// Confirmation-wait behavior for submitted transactions.
#[derive(Debug, Clone)]
pub struct ConfirmationPolicy {
	/// Number of confirmations before a transaction counts as final.
	/// Inclusion counts as the first.
	pub confirmations: u64,
	/// Interval between receipt polls.
	pub poll_interval: Duration,
	/// Overall deadline for one confirmation wait.
	pub timeout: Duration,
}

impl Default for ConfirmationPolicy {
	fn default() -> Self {
		Self {
			confirmations: 1,
			poll_interval: Duration::from_secs(3),
			timeout: Duration::from_secs(300),
		}
	}
}

/// Alloy-based EVM wallet bound to a single chain.
pub struct AlloyWallet {
	/// Provider with the signing wallet attached.
	provider: DynProvider,
	/// The chain this wallet is bound to.
	chain_id: u64,
	/// Address of the signing key.
	address: Address,
	/// Confirmation-wait behavior.
	policy: ConfirmationPolicy,
}

impl AlloyWallet {
	/// Creates a new wallet for the given RPC endpoint and chain.
	///
	/// The private key is parsed into a local signer and attached to the
	/// provider, which signs every submission with it.
	pub fn new(
		rpc_url: &str,
		chain_id: u64,
		private_key: &SecretString,
		policy: ConfirmationPolicy,
	) -> Result<Self, WalletError> {
		let url = rpc_url
			.parse::<reqwest::Url>()
			.map_err(|e| WalletError::Network(format!("Invalid RPC URL: {}", e)))?;

		let signer: PrivateKeySigner = private_key.with_exposed(|key| {
			key.parse()
				.map_err(|_| WalletError::InvalidKey("Invalid private key format".to_string()))
		})?;
		let signer = signer.with_chain_id(Some(chain_id));
		let address = signer.address();

		let wallet = EthereumWallet::from(signer);
		let provider = ProviderBuilder::new()
			.wallet(wallet)
			.connect_http(url)
			.erased();

		Ok(Self {
			provider,
			chain_id,
			address,
			policy,
		})
	}

	/// Returns the address of the signing key.
	pub fn account(&self) -> Address {
		self.address
	}

	/// Submits a transaction carrying `call_data` to `to` and returns its
	/// hash as soon as the node accepts it.
	async fn send(&self, to: Address, call_data: Vec<u8>) -> Result<TransactionHash, WalletError> {
		let request = TransactionRequest::default().to(to).input(call_data.into());

		let pending = self
			.provider
			.send_transaction(request)
			.await
			.map_err(|e| WalletError::Network(format!("Failed to send transaction: {}", e)))?;

		let tx_hash = *pending.tx_hash();
		tracing::info!(
			tx_hash = %with_0x_prefix(&hex::encode(tx_hash.0)),
			chain_id = self.chain_id,
			"Submitted transaction"
		);

		Ok(TransactionHash(tx_hash.0.to_vec()))
	}

	/// Performs a read-only contract call and returns the raw result.
	async fn call(&self, to: Address, call_data: Vec<u8>) -> Result<Bytes, WalletError> {
		let request = TransactionRequest::default().to(to).input(call_data.into());

		self.provider
			.call(request)
			.await
			.map_err(|e| WalletError::Network(format!("Contract call failed: {}", e)))
	}
}

#[async_trait]
impl WalletInterface for AlloyWallet {
	fn chain_id(&self) -> Option<u64> {
		Some(self.chain_id)
	}

	async fn allowance(
		&self,
		token: Address,
		owner: Address,
		spender: Address,
	) -> Result<U256, WalletError> {
		let call_data = IERC20::allowanceCall { owner, spender }.abi_encode();
		let result = self.call(token, call_data).await?;

		IERC20::allowanceCall::abi_decode_returns(&result)
			.map_err(|e| WalletError::Network(format!("Invalid allowance response: {}", e)))
	}

	async fn approve(
		&self,
		token: Address,
		spender: Address,
		amount: U256,
	) -> Result<TransactionHash, WalletError> {
		let call_data = IERC20::approveCall { spender, amount }.abi_encode();
		self.send(token, call_data).await
	}

	async fn mint(&self, collection: Address, tier: Tier) -> Result<TransactionHash, WalletError> {
		let call_data = match tier {
			Tier::One => ISoulboundCollection::mintTier1Call {}.abi_encode(),
			Tier::Two => ISoulboundCollection::mintTier2Call {}.abi_encode(),
		};
		self.send(collection, call_data).await
	}

	async fn wait_for_receipt(
		&self,
		hash: &TransactionHash,
	) -> Result<TransactionReceipt, WalletError> {
		let tx_hash = FixedBytes::<32>::from_slice(&hash.0);
		let start_time = tokio::time::Instant::now();

		loop {
			if start_time.elapsed() > self.policy.timeout {
				return Err(WalletError::Network(format!(
					"Timeout waiting for {} confirmations after {} seconds",
					self.policy.confirmations,
					self.policy.timeout.as_secs()
				)));
			}

			// Get transaction receipt
			let receipt = match self.provider.get_transaction_receipt(tx_hash).await {
				Ok(Some(receipt)) => receipt,
				Ok(None) => {
					// Transaction not yet mined, wait and retry
					tokio::time::sleep(self.policy.poll_interval).await;
					continue;
				}
				Err(e) => {
					return Err(WalletError::Network(format!(
						"Failed to get receipt: {}",
						e
					)));
				}
			};

			let current_block = self
				.provider
				.get_block_number()
				.await
				.map_err(|e| WalletError::Network(format!("Failed to get block number: {}", e)))?;

			let tx_block = receipt.block_number.unwrap_or(0);
			// Inclusion counts as the first confirmation
			let confirmed = current_block.saturating_sub(tx_block) + 1;

			if confirmed >= self.policy.confirmations {
				let logs = receipt
					.inner
					.logs()
					.iter()
					.map(|log| Log {
						address: log.address(),
						topics: log.topics().to_vec(),
						data: log.data().data.clone(),
					})
					.collect();

				return Ok(TransactionReceipt {
					hash: TransactionHash(receipt.transaction_hash.0.to_vec()),
					block_number: tx_block,
					success: receipt.status(),
					logs,
				});
			}

			tracing::debug!(
				"Waiting for {} more confirmations...",
				self.policy.confirmations.saturating_sub(confirmed)
			);

			tokio::time::sleep(self.policy.poll_interval).await;
		}
	}

	async fn has_minted(
		&self,
		collection: Address,
		account: Address,
	) -> Result<bool, WalletError> {
		let call_data = ISoulboundCollection::hasMintedCall { account }.abi_encode();
		let result = self.call(collection, call_data).await?;

		ISoulboundCollection::hasMintedCall::abi_decode_returns(&result)
			.map_err(|e| WalletError::Network(format!("Invalid hasMinted response: {}", e)))
	}

	async fn balance_of(
		&self,
		collection: Address,
		account: Address,
	) -> Result<U256, WalletError> {
		let call_data = ISoulboundCollection::balanceOfCall { owner: account }.abi_encode();
		let result = self.call(collection, call_data).await?;

		ISoulboundCollection::balanceOfCall::abi_decode_returns(&result)
			.map_err(|e| WalletError::Network(format!("Invalid balanceOf response: {}", e)))
	}

	async fn token_of_owner_by_index(
		&self,
		collection: Address,
		account: Address,
		index: U256,
	) -> Result<U256, WalletError> {
		let call_data = ISoulboundCollection::tokenOfOwnerByIndexCall {
			owner: account,
			index,
		}
		.abi_encode();
		let result = self.call(collection, call_data).await?;

		ISoulboundCollection::tokenOfOwnerByIndexCall::abi_decode_returns(&result).map_err(|e| {
			WalletError::Network(format!("Invalid tokenOfOwnerByIndex response: {}", e))
		})
	}

	async fn token_uri(&self, collection: Address, token_id: U256) -> Result<String, WalletError> {
		let call_data = ISoulboundCollection::tokenURICall { tokenId: token_id }.abi_encode();
		let result = self.call(collection, call_data).await?;

		ISoulboundCollection::tokenURICall::abi_decode_returns(&result)
			.map_err(|e| WalletError::Network(format!("Invalid tokenURI response: {}", e)))
	}
}
