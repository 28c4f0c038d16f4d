//! Configuration module for the soulmint system.
//!
//! This module provides structures and utilities for loading configuration
//! from TOML files. Environment variables referenced as `${VAR}` or
//! `${VAR:-default}` are resolved before parsing, so private keys and RPC
//! URLs can stay out of the file itself. Validation ensures all required
//! values are properly set before anything touches the network.

use regex::Regex;
use serde::{Deserialize, Serialize};
use soulmint_types::{deserialize_networks, NetworksConfig, SecretString};
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur during configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error that occurs during file I/O operations.
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
	/// Error that occurs when parsing TOML configuration.
	#[error("Configuration error: {0}")]
	Parse(String),
	/// Error that occurs when configuration validation fails.
	#[error("Validation error: {0}")]
	Validation(String),
}

impl From<toml::de::Error> for ConfigError {
	fn from(err: toml::de::Error) -> Self {
		// Extract just the message without the huge input dump
		ConfigError::Parse(err.message().to_string())
	}
}

/// Main configuration structure for the soulmint tooling.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
	/// Configuration for the signing wallet and confirmation behavior.
	pub wallet: WalletConfig,
	/// Per-chain contract addresses and RPC endpoints.
	#[serde(deserialize_with = "deserialize_networks")]
	pub networks: NetworksConfig,
}

/// Configuration for the signing wallet and confirmation behavior.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WalletConfig {
	/// Private key used for signing, typically `${SOULMINT_PRIVATE_KEY}`.
	pub private_key: SecretString,
	/// Number of confirmations before a transaction counts as final.
	/// Defaults to 1 (inclusion).
	#[serde(default = "default_confirmations")]
	pub confirmations: u64,
	/// Interval in seconds between receipt polls.
	#[serde(default = "default_poll_interval_secs")]
	pub poll_interval_secs: u64,
	/// Overall timeout in seconds for a confirmation wait.
	#[serde(default = "default_timeout_secs")]
	pub timeout_secs: u64,
}

/// Returns the default number of confirmations required.
fn default_confirmations() -> u64 {
	1
}

/// Returns the default receipt poll interval in seconds.
fn default_poll_interval_secs() -> u64 {
	3
}

/// Returns the default confirmation-wait timeout in seconds.
fn default_timeout_secs() -> u64 {
	300
}

/// Resolves environment variables in a string.
///
/// Replaces ${VAR_NAME} with the value of the environment variable
/// VAR_NAME. Supports default values with ${VAR_NAME:-default_value}.
fn resolve_env_vars(input: &str) -> Result<String, ConfigError> {
	let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]{0,127})(?::-([^}]{0,256}))?\}")
		.map_err(|e| ConfigError::Parse(format!("Regex error: {}", e)))?;

	let mut result = input.to_string();
	let mut replacements = Vec::new();

	for cap in re.captures_iter(input) {
		let full_match = cap.get(0).ok_or_else(|| {
			ConfigError::Parse("Malformed environment variable reference".to_string())
		})?;
		let var_name = &cap[1];
		let default_value = cap.get(2).map(|m| m.as_str());

		let value = match std::env::var(var_name) {
			Ok(v) => v,
			Err(_) => match default_value {
				Some(default) => default.to_string(),
				None => {
					return Err(ConfigError::Validation(format!(
						"Environment variable '{}' not found",
						var_name
					)));
				}
			},
		};

		replacements.push((full_match.start(), full_match.end(), value));
	}

	// Apply replacements in reverse order to maintain positions
	for (start, end, value) in replacements.iter().rev() {
		result.replace_range(start..end, value);
	}

	Ok(result)
}

impl Config {
	/// Loads configuration from a TOML file, resolving environment
	/// variables and validating the result.
	pub fn from_file(path: &str) -> Result<Self, ConfigError> {
		let content = std::fs::read_to_string(path)?;
		content.parse()
	}

	/// Validates the configuration.
	///
	/// Ensures the private key is present, the confirmation parameters are
	/// usable, and every configured network carries an RPC endpoint.
	fn validate(&self) -> Result<(), ConfigError> {
		if self.wallet.private_key.is_empty() {
			return Err(ConfigError::Validation(
				"Wallet private_key cannot be empty".into(),
			));
		}
		if self.wallet.confirmations == 0 {
			return Err(ConfigError::Validation(
				"Wallet confirmations must be at least 1".into(),
			));
		}
		if self.wallet.poll_interval_secs == 0 {
			return Err(ConfigError::Validation(
				"Wallet poll_interval_secs must be greater than 0".into(),
			));
		}
		if self.wallet.timeout_secs < self.wallet.poll_interval_secs {
			return Err(ConfigError::Validation(
				"Wallet timeout_secs cannot be smaller than poll_interval_secs".into(),
			));
		}

		if self.networks.is_empty() {
			return Err(ConfigError::Validation(
				"Networks configuration cannot be empty".into(),
			));
		}
		for (chain_id, network) in &self.networks {
			if network.rpc_url.is_empty() {
				return Err(ConfigError::Validation(format!(
					"Network {} must have an rpc_url",
					chain_id
				)));
			}
		}

		Ok(())
	}
}

impl FromStr for Config {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let resolved = resolve_env_vars(s)?;
		let config: Config = toml::from_str(&resolved)?;
		config.validate()?;
		Ok(config)
	}
}
