use std::fmt;

/// Errors from launcher construction and backend launches.
#[derive(Debug)]
pub enum LaunchError {
	/// Host configuration did not decode to a descriptor list.
	Config(String),
	/// Managed backend selected but no supervisor runtime was found when the
	/// launcher was constructed.
	BackendUnavailable,
	/// Connect or start-request failure against the supervisor daemon.
	Managed(String),
}

impl fmt::Display for LaunchError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			LaunchError::Config(e) => write!(f, "config error: {}", e),
			LaunchError::BackendUnavailable => write!(f, "supervisor runtime not available"),
			LaunchError::Managed(e) => write!(f, "supervisor launch failed: {}", e),
		}
	}
}

impl std::error::Error for LaunchError {}
