use tokio::sync::mpsc;

use crate::types::ExitEvent;

/// Clonable handle that delivers termination notifications for
/// directly-spawned services.
///
/// For every descriptor dispatched to the direct backend, exactly one event
/// is eventually delivered — spawn refusal included. No event means the
/// process is still running or the host exited first. Delivery order across
/// services is whatever the OS reports.
#[derive(Clone)]
pub struct ExitNotifier {
	tx: mpsc::UnboundedSender<ExitEvent>,
}

impl ExitNotifier {
	/// Create a notifier and the receiving end of its event stream.
	pub fn channel() -> (Self, mpsc::UnboundedReceiver<ExitEvent>) {
		let (tx, rx) = mpsc::unbounded_channel();
		(Self { tx }, rx)
	}

	/// Deliver one event. A dropped receiver makes this a no-op.
	pub fn notify(&self, event: ExitEvent) {
		let _ = self.tx.send(event);
	}
}
