use async_trait::async_trait;
use tokio::process::Command;

use crate::backend::ExecutionBackend;
use crate::error::LaunchError;
use crate::notify::ExitNotifier;
use crate::types::{ExitEvent, LaunchOptions, ServiceDescriptor, SPAWN_FAILED};

/// Launches services as plain child processes with no restart protection.
///
/// Children inherit the host's environment and standard streams and are
/// expected to exit when the parent does (POSIX parent/child convention —
/// nothing is enforced in software here). Callers who need resilience use
/// the managed backend instead.
pub struct DirectSpawnBackend {
	notifier: ExitNotifier,
}

impl DirectSpawnBackend {
	pub fn new(notifier: ExitNotifier) -> Self {
		Self { notifier }
	}
}

#[async_trait]
impl ExecutionBackend for DirectSpawnBackend {
	async fn launch(
		&self,
		descriptor: &ServiceDescriptor,
		options: &LaunchOptions,
	) -> Result<(), LaunchError> {
		let mut cmd = match options.runtime.as_deref() {
			Some(runtime) => {
				let mut cmd = Command::new(runtime);
				cmd.arg(&descriptor.script);
				cmd
			}
			None => Command::new(&descriptor.script),
		};

		let mut child = match cmd.spawn() {
			Ok(child) => child,
			Err(e) => {
				// Spawn refusal and early exit are reported the same way:
				// one termination notification with a failure code.
				tracing::warn!("failed to spawn {}: {}", descriptor.script, e);
				self.notifier.notify(ExitEvent {
					id: descriptor.id.clone(),
					script: descriptor.script.clone(),
					code: SPAWN_FAILED,
				});
				return Ok(());
			}
		};

		if options.verbose {
			tracing::debug!("spawned {}", descriptor.script);
		}

		let notifier = self.notifier.clone();
		let id = descriptor.id.clone();
		let script = descriptor.script.clone();
		let verbose = options.verbose;
		tokio::spawn(async move {
			let code = match child.wait().await {
				Ok(status) => status.code().unwrap_or(SPAWN_FAILED),
				Err(_) => SPAWN_FAILED,
			};
			if verbose {
				tracing::debug!("{} exited ({})", id, code);
			}
			notifier.notify(ExitEvent { id, script, code });
		});

		Ok(())
	}
}
