//! Mint tier definitions.
//!
//! The collection issues tokens in two mutually exclusive tiers with fixed
//! prices denominated in the payment token's smallest unit. An address may
//! claim at most one token of either tier; the contract enforces this, the
//! flow only needs to know which entry point and price a tier maps to.

use alloy::primitives::U256;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a numeric tier selector is out of range.
#[derive(Debug, Error)]
#[error("Invalid tier: {0} (expected 1 or 2)")]
pub struct InvalidTier(pub u8);

/// One of the two fixed-price minting classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
	/// Tier 1, priced at 100 payment tokens.
	One,
	/// Tier 2, priced at 10 payment tokens.
	Two,
}

impl Tier {
	/// Returns the fixed mint price for this tier in the payment token's
	/// smallest unit (18 decimals).
	pub fn price(&self) -> U256 {
		match self {
			// 100 tokens
			Tier::One => U256::from(100_000_000_000_000_000_000u128),
			// 10 tokens
			Tier::Two => U256::from(10_000_000_000_000_000_000u128),
		}
	}

	/// Returns the tier as its numeric selector.
	pub fn number(&self) -> u8 {
		match self {
			Tier::One => 1,
			Tier::Two => 2,
		}
	}
}

impl TryFrom<u8> for Tier {
	type Error = InvalidTier;

	fn try_from(value: u8) -> Result<Self, Self::Error> {
		match value {
			1 => Ok(Tier::One),
			2 => Ok(Tier::Two),
			other => Err(InvalidTier(other)),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_tier_prices() {
		// 100 and 10 tokens at 18 decimals
		assert_eq!(
			Tier::One.price(),
			U256::from(10u128).pow(U256::from(18u64)) * U256::from(100u64)
		);
		assert_eq!(
			Tier::Two.price(),
			U256::from(10u128).pow(U256::from(18u64)) * U256::from(10u64)
		);
		assert!(Tier::One.price() > Tier::Two.price());
	}

	#[test]
	fn test_tier_from_number() {
		assert_eq!(Tier::try_from(1).unwrap(), Tier::One);
		assert_eq!(Tier::try_from(2).unwrap(), Tier::Two);
		assert!(Tier::try_from(0).is_err());
		assert!(Tier::try_from(3).is_err());
	}
}
