//! Network configuration types keyed by chain id.
//!
//! Each supported chain carries the addresses the flow needs: the
//! collection contract being minted from and the ERC-20 token it charges
//! in. Lookups fail closed; an unknown chain id is an error, never a
//! silent default.

use alloy::primitives::Address;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// Configuration for a single blockchain network.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NetworkConfig {
	/// The HTTP(S) RPC endpoint for blockchain interaction.
	pub rpc_url: String,
	/// Address of the soul-bound collection contract.
	pub collection_address: Address,
	/// Address of the ERC-20 token mints are paid in.
	pub payment_token_address: Address,
}

/// Networks configuration mapping chain ids to their configurations.
pub type NetworksConfig = HashMap<u64, NetworkConfig>;

/// Helper function to deserialize network configurations from TOML.
///
/// TOML tables only support string keys, so chain ids arrive as strings
/// and are converted to u64 keys for internal use.
///
/// # Errors
///
/// Returns a deserialization error if a chain id key cannot be parsed as
/// a u64 or the underlying network configuration is invalid.
pub fn deserialize_networks<'de, D>(deserializer: D) -> Result<NetworksConfig, D::Error>
where
	D: Deserializer<'de>,
{
	let string_map: HashMap<String, NetworkConfig> = HashMap::deserialize(deserializer)?;
	let mut result = HashMap::new();

	for (key, value) in string_map {
		let chain_id = key
			.parse::<u64>()
			.map_err(|e| serde::de::Error::custom(format!("Invalid chain_id '{}': {}", key, e)))?;
		result.insert(chain_id, value);
	}

	Ok(result)
}
