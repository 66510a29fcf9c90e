use async_trait::async_trait;

use crate::direct::DirectSpawnBackend;
use crate::error::LaunchError;
use crate::managed::{ManagedBackend, DEFAULT_SUPERVISOR};
use crate::notify::ExitNotifier;
use crate::paths::SupervisorPaths;
use crate::types::{BackendKind, LaunchOptions, ServiceDescriptor};

/// An interchangeable strategy for turning a descriptor into a running
/// process.
#[async_trait]
pub trait ExecutionBackend: Send + Sync {
	/// Launch one service.
	///
	/// The direct backend returns as soon as the spawn has been issued and
	/// reports later termination through its notifier. The managed backend
	/// blocks until the supervisor daemon has answered.
	async fn launch(
		&self,
		descriptor: &ServiceDescriptor,
		options: &LaunchOptions,
	) -> Result<(), LaunchError>;
}

/// Build the backend selected by `options.backend`. Managed capability is
/// probed here, once.
pub fn backend_for(options: &LaunchOptions, notifier: ExitNotifier) -> Box<dyn ExecutionBackend> {
	match options.backend {
		BackendKind::Direct => Box::new(DirectSpawnBackend::new(notifier)),
		BackendKind::Managed => {
			let app = options.supervisor.as_deref().unwrap_or(DEFAULT_SUPERVISOR);
			Box::new(ManagedBackend::probe(SupervisorPaths::new(app)))
		}
	}
}
