use std::sync::Arc;

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::UnixStream;

use crate::backend::ExecutionBackend;
use crate::error::LaunchError;
use crate::paths::SupervisorPaths;
use crate::protocol::{SupervisorRequest, SupervisorResponse};
use crate::types::{LaunchOptions, ServiceDescriptor};

/// App name of the supervisor daemon dialed when the host names none.
pub const DEFAULT_SUPERVISOR: &str = "fledged";

/// Exit status the host process is terminated with when a managed launch
/// cannot be confirmed.
pub const SUPERVISOR_FAILURE_STATUS: i32 = 2;

/// Escalation policy invoked on unrecoverable supervisor errors.
pub type FatalHandler = Arc<dyn Fn(i32) + Send + Sync>;

/// Delegates start responsibility to an external supervisor daemon over its
/// Unix socket: one connect, one start request, one response, disconnect.
/// The daemon applies its own restart and backoff policy from there.
///
/// A launch the daemon cannot confirm leaves a critical sub-service
/// unsupervised and invisible, so connect and start errors escalate to
/// whole-process termination with [`SUPERVISOR_FAILURE_STATUS`] rather than
/// degrading the fleet silently.
pub struct ManagedBackend {
	paths: SupervisorPaths,
	available: bool,
	on_fatal: FatalHandler,
}

impl ManagedBackend {
	/// Probe the supervisor runtime once and remember the outcome. Later
	/// `launch` calls consult the recorded flag instead of re-probing.
	pub fn probe(paths: SupervisorPaths) -> Self {
		let available = paths.socket_path().exists();
		Self {
			paths,
			available,
			on_fatal: Arc::new(|status| std::process::exit(status)),
		}
	}

	/// Replace the process-terminating escalation with a custom policy.
	pub fn with_fatal_handler(mut self, on_fatal: FatalHandler) -> Self {
		self.on_fatal = on_fatal;
		self
	}

	pub fn available(&self) -> bool {
		self.available
	}

	fn escalate(&self, id: &str, reason: String) -> LaunchError {
		tracing::error!("supervisor launch of {} failed: {}", id, reason);
		(self.on_fatal)(SUPERVISOR_FAILURE_STATUS);
		// Only reached under an injected non-exiting policy.
		LaunchError::Managed(reason)
	}
}

#[async_trait]
impl ExecutionBackend for ManagedBackend {
	async fn launch(
		&self,
		descriptor: &ServiceDescriptor,
		options: &LaunchOptions,
	) -> Result<(), LaunchError> {
		if !self.available {
			tracing::warn!("supervisor runtime not available (probed earlier)");
			return Err(LaunchError::BackendUnavailable);
		}

		let socket_path = self.paths.socket_path();
		let stream = match UnixStream::connect(&socket_path).await {
			Ok(stream) => stream,
			Err(e) => {
				let reason = format!("connect {}: {}", socket_path.display(), e);
				return Err(self.escalate(&descriptor.id, reason));
			}
		};

		if options.verbose {
			tracing::info!("start {} via supervisor", descriptor.id);
		}

		let request = SupervisorRequest::Start {
			service: descriptor.clone(),
		};
		let mut data = match serde_json::to_vec(&request) {
			Ok(data) => data,
			Err(e) => {
				let reason = format!("encode start request: {}", e);
				return Err(self.escalate(&descriptor.id, reason));
			}
		};
		data.push(b'\n');

		let (reader, mut writer) = stream.into_split();
		if let Err(e) = writer.write_all(&data).await {
			let reason = format!("send start request: {}", e);
			return Err(self.escalate(&descriptor.id, reason));
		}

		let mut lines = BufReader::new(reader).lines();
		let line = match lines.next_line().await {
			Ok(Some(line)) => line,
			Ok(None) => {
				return Err(self.escalate(&descriptor.id, "supervisor closed the connection".into()));
			}
			Err(e) => {
				let reason = format!("read response: {}", e);
				return Err(self.escalate(&descriptor.id, reason));
			}
		};

		match serde_json::from_str::<SupervisorResponse>(&line) {
			Ok(SupervisorResponse::Ok { message }) => {
				if options.verbose {
					if let Some(message) = message {
						tracing::debug!("supervisor: {}", message);
					}
				}
				// Dropping the stream halves is the disconnect; the daemon
				// keeps supervising on its own from here.
				Ok(())
			}
			Ok(SupervisorResponse::Error { message }) => {
				Err(self.escalate(&descriptor.id, message))
			}
			Err(e) => {
				let reason = format!("bad response: {}", e);
				Err(self.escalate(&descriptor.id, reason))
			}
		}
	}
}
