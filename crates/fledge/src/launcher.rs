use std::fmt;

use serde_json::Value;
use tokio::sync::mpsc;

use crate::backend::{backend_for, ExecutionBackend};
use crate::error::LaunchError;
use crate::notify::ExitNotifier;
use crate::types::{ExitEvent, LaunchOptions, ServiceDescriptor};

/// Owns one batch of descriptors and the backend that launches them.
pub struct Launcher {
	descriptors: Vec<ServiceDescriptor>,
	options: LaunchOptions,
	backend: Box<dyn ExecutionBackend>,
	events: Option<mpsc::UnboundedReceiver<ExitEvent>>,
}

impl fmt::Debug for Launcher {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Launcher")
			.field("descriptors", &self.descriptors)
			.field("options", &self.options)
			.field("has_events", &self.events.is_some())
			.finish_non_exhaustive()
	}
}

impl Launcher {
	pub fn new(descriptors: Vec<ServiceDescriptor>, options: LaunchOptions) -> Self {
		let (notifier, events) = ExitNotifier::channel();
		let backend = backend_for(&options, notifier);
		Self {
			descriptors,
			options,
			backend,
			events: Some(events),
		}
	}

	/// Build a launcher from a host application's already-parsed config
	/// value. Fails with [`LaunchError::Config`] when the value is not an
	/// array of service entries; no backend is touched in that case.
	pub fn from_config(services: &Value, options: LaunchOptions) -> Result<Self, LaunchError> {
		let entries = services.as_array().ok_or_else(|| {
			LaunchError::Config(format!("sub-services not in an array, got: {}", services))
		})?;
		let mut descriptors = Vec::with_capacity(entries.len());
		for entry in entries {
			let descriptor = serde_json::from_value(entry.clone())
				.map_err(|e| LaunchError::Config(format!("bad service entry: {}", e)))?;
			descriptors.push(descriptor);
		}
		Ok(Self::new(descriptors, options))
	}

	/// Build a launcher around a caller-supplied backend. The exit-event
	/// stream belongs to whoever created that backend's notifier, so
	/// [`Launcher::exit_events`] returns `None` on launchers built this way.
	pub fn with_backend(
		descriptors: Vec<ServiceDescriptor>,
		options: LaunchOptions,
		backend: Box<dyn ExecutionBackend>,
	) -> Self {
		Self {
			descriptors,
			options,
			backend,
			events: None,
		}
	}

	pub fn descriptors(&self) -> &[ServiceDescriptor] {
		&self.descriptors
	}

	/// Claim the termination-notification stream. Yields `Some` at most
	/// once.
	pub fn exit_events(&mut self) -> Option<mpsc::UnboundedReceiver<ExitEvent>> {
		self.events.take()
	}

	/// Dispatch every non-disabled descriptor, in order, to the backend.
	///
	/// Returns the number of launch *attempts* — disabled entries are
	/// skipped without side effect, and an individual launch failing later
	/// does not lower the count. Individual failures surface through the
	/// exit-event stream and logging, not through this return value.
	///
	/// Calling this again re-dispatches the same batch: no launch state is
	/// kept between invocations and the supervisor connection is opened and
	/// closed inside each managed launch.
	pub async fn run_all(&self) -> usize {
		let mut launched = 0;
		for descriptor in &self.descriptors {
			if descriptor.disabled {
				continue;
			}
			if let Err(e) = self.backend.launch(descriptor, &self.options).await {
				tracing::error!("launch of {} failed: {}", descriptor.id, e);
			}
			launched += 1;
		}
		launched
	}
}

/// Launch a single service without constructing a [`Launcher`], for callers
/// that iterate descriptors themselves. The backend is built from `options`
/// per call; direct spawns report termination through `notifier`.
pub async fn launch_one(
	descriptor: &ServiceDescriptor,
	options: &LaunchOptions,
	notifier: ExitNotifier,
) -> Result<(), LaunchError> {
	backend_for(options, notifier).launch(descriptor, options).await
}
