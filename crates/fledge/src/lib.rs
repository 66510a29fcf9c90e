//! # fledge
//!
//! Sub-service launcher toolkit.
//!
//! Launch a batch of sub-services from inside a parent application, either
//! as plain child processes or by handing them to an external supervisor
//! daemon over its Unix socket. The parent's own lifecycle governs when the
//! batch starts; direct children are expected to exit with the parent.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use fledge::{Launcher, LaunchOptions, ServiceDescriptor};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let services = vec![
//! 	ServiceDescriptor::new("loginserv", "login-serv"),
//! 	ServiceDescriptor::new("daq", "datalogging-serv"),
//! ];
//!
//! let mut launcher = Launcher::new(services, LaunchOptions::default());
//! let mut exits = launcher.exit_events().unwrap();
//!
//! let launched = launcher.run_all().await;
//! println!("launched {} services", launched);
//!
//! while let Some(event) = exits.recv().await {
//! 	println!("{} exited ({})", event.id, event.code);
//! }
//! # }
//! ```

pub mod types;
pub mod error;
pub mod paths;
pub mod protocol;
pub mod notify;
pub mod backend;
pub mod direct;
pub mod managed;
pub mod launcher;

pub use types::{BackendKind, ExitEvent, LaunchOptions, ServiceDescriptor, SPAWN_FAILED};
pub use error::LaunchError;
pub use paths::SupervisorPaths;
pub use notify::ExitNotifier;
pub use backend::{backend_for, ExecutionBackend};
pub use direct::DirectSpawnBackend;
pub use managed::{FatalHandler, ManagedBackend, DEFAULT_SUPERVISOR, SUPERVISOR_FAILURE_STATUS};
pub use launcher::{launch_one, Launcher};
