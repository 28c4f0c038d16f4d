//! Read-side query helpers.
//!
//! Three pure reads against the collection contract: whether an address
//! has minted, which token it owns, and a token's on-chain metadata.
//! Unlike the flow, these return hard errors; there is no event stream to
//! report through. Address resolution fails closed the same way.

use alloy::primitives::{Address, U256};
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine;
use soulmint_types::{NetworkConfig, NetworksConfig, TokenMetadata};
use soulmint_wallet::{WalletError, WalletInterface};
use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur during read-side queries.
#[derive(Debug, Error)]
pub enum QueryError {
	/// The wallet exposes no chain identity.
	#[error("Chain id not available from wallet")]
	ChainUnbound,
	/// The wallet's chain has no configured contract addresses.
	#[error("Unsupported chain id: {0}")]
	UnsupportedChain(u64),
	/// The underlying contract read failed.
	#[error(transparent)]
	Wallet(#[from] WalletError),
	/// The token URI is not a data URI with an encoded payload.
	#[error("Invalid tokenURI format")]
	InvalidTokenUri,
	/// The encoded metadata payload could not be decoded.
	#[error("Failed to decode token metadata: {0}")]
	Metadata(String),
}

/// Read-side queries against the collection contract.
pub struct MintQueries {
	wallet: Arc<dyn WalletInterface>,
	networks: NetworksConfig,
}

impl MintQueries {
	/// Creates query helpers over the given wallet and network table.
	pub fn new(wallet: Arc<dyn WalletInterface>, networks: NetworksConfig) -> Self {
		Self { wallet, networks }
	}

	/// Resolves the network configuration for the wallet's chain.
	fn network(&self) -> Result<&NetworkConfig, QueryError> {
		let chain_id = self.wallet.chain_id().ok_or(QueryError::ChainUnbound)?;
		self.networks
			.get(&chain_id)
			.ok_or(QueryError::UnsupportedChain(chain_id))
	}

	/// Checks whether `account` has already minted from the collection.
	pub async fn has_minted(&self, account: Address) -> Result<bool, QueryError> {
		let network = self.network()?;
		Ok(self
			.wallet
			.has_minted(network.collection_address, account)
			.await?)
	}

	/// Returns the token id owned by `account`, or None if it owns none.
	pub async fn user_token(&self, account: Address) -> Result<Option<U256>, QueryError> {
		let network = self.network()?;

		let balance = self
			.wallet
			.balance_of(network.collection_address, account)
			.await?;
		if balance.is_zero() {
			return Ok(None);
		}

		// The issuance policy guarantees at most one token per address, so
		// the enumeration index is always 0.
		let token_id = self
			.wallet
			.token_of_owner_by_index(network.collection_address, account, U256::ZERO)
			.await?;

		Ok(Some(token_id))
	}

	/// Fetches and decodes the on-chain metadata for `token_id`.
	///
	/// The contract serves a `data:application/json;base64,<payload>` URI;
	/// the payload after the first comma is base64-decoded and parsed.
	pub async fn token_metadata(&self, token_id: U256) -> Result<TokenMetadata, QueryError> {
		let network = self.network()?;

		let token_uri = self
			.wallet
			.token_uri(network.collection_address, token_id)
			.await?;

		let (_, payload) = token_uri
			.split_once(',')
			.ok_or(QueryError::InvalidTokenUri)?;

		let decoded = BASE64_STANDARD
			.decode(payload)
			.map_err(|e| QueryError::Metadata(e.to_string()))?;

		serde_json::from_slice(&decoded).map_err(|e| QueryError::Metadata(e.to_string()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::testing::{test_networks, MockWallet};

	fn queries(wallet: MockWallet) -> MintQueries {
		MintQueries::new(Arc::new(wallet), test_networks())
	}

	fn account() -> Address {
		Address::repeat_byte(0xaa)
	}

	#[tokio::test]
	async fn test_has_minted_reads_contract() {
		let wallet = MockWallet {
			minted: true,
			..MockWallet::default()
		};

		assert!(queries(wallet).has_minted(account()).await.unwrap());
	}

	#[tokio::test]
	async fn test_user_token_returns_none_for_zero_balance() {
		let wallet = MockWallet::default();

		let token = queries(wallet).user_token(account()).await.unwrap();
		assert_eq!(token, None);
	}

	#[tokio::test]
	async fn test_user_token_reads_enumeration_slot_zero() {
		let wallet = MockWallet {
			balance: U256::from(1u64),
			owned_token: U256::from(42u64),
			..MockWallet::default()
		};

		let token = queries(wallet).user_token(account()).await.unwrap();
		assert_eq!(token, Some(U256::from(42u64)));
	}

	#[tokio::test]
	async fn test_token_metadata_decodes_data_uri() {
		let metadata = serde_json::json!({
			"name": "Soulmark #1",
			"description": "Tier 1 issuance",
			"image": "data:image/svg+xml;base64,PHN2Zz4=",
			"attributes": [{"trait_type": "Tier", "value": 1}],
		});
		let payload = BASE64_STANDARD.encode(metadata.to_string());
		let wallet = MockWallet {
			uri: format!("data:application/json;base64,{}", payload),
			..MockWallet::default()
		};

		let decoded = queries(wallet)
			.token_metadata(U256::from(1u64))
			.await
			.unwrap();
		assert_eq!(decoded.name, "Soulmark #1");
		assert_eq!(decoded.attributes.len(), 1);
	}

	#[tokio::test]
	async fn test_token_metadata_rejects_uri_without_payload() {
		let wallet = MockWallet {
			uri: "data:application/json;base64".to_string(),
			..MockWallet::default()
		};

		let result = queries(wallet).token_metadata(U256::from(1u64)).await;
		assert!(matches!(result, Err(QueryError::InvalidTokenUri)));
	}

	#[tokio::test]
	async fn test_token_metadata_rejects_bad_payload() {
		let wallet = MockWallet {
			uri: "data:application/json;base64,!!!not-base64!!!".to_string(),
			..MockWallet::default()
		};

		let result = queries(wallet).token_metadata(U256::from(1u64)).await;
		assert!(matches!(result, Err(QueryError::Metadata(_))));
	}

	#[tokio::test]
	async fn test_queries_fail_closed_on_unknown_chain() {
		let wallet = MockWallet {
			chain_id: Some(999),
			..MockWallet::default()
		};

		let result = queries(wallet).has_minted(account()).await;
		assert!(matches!(result, Err(QueryError::UnsupportedChain(999))));
	}

	#[tokio::test]
	async fn test_queries_require_chain_binding() {
		let wallet = MockWallet {
			chain_id: None,
			..MockWallet::default()
		};

		let result = queries(wallet).user_token(account()).await;
		assert!(matches!(result, Err(QueryError::ChainUnbound)));
	}
}
