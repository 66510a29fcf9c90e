use serde::{Deserialize, Serialize};

use crate::types::ServiceDescriptor;

/// Requests spoken to the supervisor daemon, one JSON line per request.
/// The start payload is the descriptor passed through unmodified, opaque
/// fields included, so the daemon's accepted schema decides what they mean.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum SupervisorRequest {
	Start { service: ServiceDescriptor },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SupervisorResponse {
	Ok { message: Option<String> },
	Error { message: String },
}
