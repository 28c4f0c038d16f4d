//! Common types module for the soulmint system.
//!
//! This module defines the core data types shared by the minting flow,
//! the wallet layer, and the CLI. It provides a centralized location for
//! shared types to ensure consistency across all components.

/// Transaction hash, receipt and log types for blockchain interactions.
pub mod delivery;
/// Progress events emitted during the minting flow.
pub mod events;
/// Token metadata types decoded from on-chain data URIs.
pub mod metadata;
/// Network configuration types keyed by chain id.
pub mod networks;
/// Secure string type for private keys.
pub mod secret_string;
/// Mint tier definitions and prices.
pub mod tier;
/// Utility functions for hex formatting.
pub mod utils;

// Re-export all types for convenient access
pub use delivery::{Log, TransactionHash, TransactionReceipt, TRANSFER_EVENT_TOPIC};
pub use events::MintEvent;
pub use metadata::TokenMetadata;
pub use networks::{deserialize_networks, NetworkConfig, NetworksConfig};
pub use secret_string::SecretString;
pub use tier::{InvalidTier, Tier};
pub use utils::{format_token_amount, truncate_id, with_0x_prefix, without_0x_prefix};
