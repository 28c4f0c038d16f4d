//! Token metadata types.
//!
//! The collection contract serves metadata fully on-chain as a
//! `data:application/json;base64,...` URI. This is the decoded shape.

use serde::{Deserialize, Serialize};

/// On-chain metadata for a minted token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenMetadata {
	/// Token name.
	pub name: String,
	/// Token description.
	pub description: String,
	/// Image as a data URI with a base64 encoded payload.
	pub image: String,
	/// Trait records, free-form key/value maps.
	#[serde(default)]
	pub attributes: Vec<serde_json::Map<String, serde_json::Value>>,
}
