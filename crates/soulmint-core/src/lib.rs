//! Core minting flow for the soulmint system.
//!
//! This module provides the orchestration logic for one mint attempt:
//! probing the payer's allowance, conditionally approving the exact tier
//! price, submitting the tier-specific mint, waiting for confirmations and
//! extracting the minted token id from the receipt. Every transition is
//! pushed to an observer over a progress channel; the read-side query
//! helpers for already-minted state and token metadata live here as well.

/// The mint orchestration flow.
pub mod flow;
/// Progress channel delivering [`MintEvent`]s to an observer.
///
/// [`MintEvent`]: soulmint_types::MintEvent
pub mod progress;
/// Read-side query helpers.
pub mod queries;

#[cfg(test)]
pub(crate) mod testing;

pub use flow::{MintFlow, MintRequest};
pub use progress::{progress_channel, MintHandle, ProgressReceiver, ProgressSender};
pub use queries::{MintQueries, QueryError};
