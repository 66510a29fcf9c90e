use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Exit indicator for a service the OS refused to create, or whose exit
/// status could not be read (killed by signal).
pub const SPAWN_FAILED: i32 = -1;

/// One sub-service to launch: identity, executable reference, enabled flag,
/// plus whatever backend-specific fields the host config carried.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceDescriptor {
	pub id: String,
	pub script: String,
	#[serde(default)]
	pub disabled: bool,
	/// Fields this crate does not interpret. They ride along unmodified in
	/// the managed backend's start payload so the supervisor daemon can
	/// apply its own run parameters.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

impl ServiceDescriptor {
	pub fn new(id: impl Into<String>, script: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			script: script.into(),
			disabled: false,
			extra: Map::new(),
		}
	}
}

/// Which execution strategy turns descriptors into running processes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
	#[default]
	Direct,
	Managed,
}

/// Options for one launch batch. Every field has a default so a host can
/// deserialize this straight out of its own config object.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LaunchOptions {
	#[serde(default)]
	pub backend: BackendKind,
	/// Diagnostic volume only. Never changes control flow or return values.
	#[serde(default)]
	pub verbose: bool,
	/// Program to run the script with. `None` executes the script itself.
	#[serde(default)]
	pub runtime: Option<String>,
	/// App name of the supervisor daemon the managed backend dials.
	#[serde(default)]
	pub supervisor: Option<String>,
}

/// Termination notification for a directly-spawned service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExitEvent {
	pub id: String,
	pub script: String,
	pub code: i32,
}

impl ExitEvent {
	pub fn is_failure(&self) -> bool {
		self.code != 0
	}
}
