//! Progress channel for the minting flow.
//!
//! The flow pushes every state transition into an unbounded channel; the
//! receiving side observes events as they happen and learns that the flow
//! terminated when the channel closes. No side-channel completion value
//! carries the outcome: consumers inspect the terminal event.

use soulmint_types::MintEvent;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Sending half of the progress channel, held by the running flow.
pub struct ProgressSender {
	tx: mpsc::UnboundedSender<MintEvent>,
}

/// Receiving half of the progress channel.
pub type ProgressReceiver = mpsc::UnboundedReceiver<MintEvent>;

/// Creates a progress channel pair.
pub fn progress_channel() -> (ProgressSender, ProgressReceiver) {
	let (tx, rx) = mpsc::unbounded_channel();
	(ProgressSender { tx }, rx)
}

impl ProgressSender {
	/// Emits one progress event.
	///
	/// A dropped receiver only means nobody is listening anymore; the flow
	/// keeps running to its terminal state either way.
	pub fn emit(&self, event: MintEvent) {
		tracing::debug!(event = ?event, "Mint progress");
		self.tx.send(event).ok();
	}
}

/// Handle to a spawned mint attempt: the event stream plus the task that
/// resolves once all emission is done, regardless of success or failure.
pub struct MintHandle {
	/// Ordered progress events; closes after the terminal event.
	pub events: ProgressReceiver,
	/// Join handle of the flow task.
	pub done: JoinHandle<()>,
}

impl MintHandle {
	/// Drains the event stream until the flow terminates and returns every
	/// event in emission order.
	pub async fn collect(mut self) -> Vec<MintEvent> {
		let mut events = Vec::new();
		while let Some(event) = self.events.recv().await {
			events.push(event);
		}
		self.done.await.ok();
		events
	}
}
