//! unitel-core: Core library for the UNITEL operations dashboard
//!
//! This library polls the operations backend for dashboard snapshots,
//! projects them into display-ready view models and drives a renderer.
//! It is used by the `unitel` CLI.
//!
//! # Main Entry Points
//!
//! - [`dashboard`] - Polling controller, loader and staffing commands
//! - [`api`] - HTTP transport for snapshots and operations
//! - [`view`] - Snapshot to view-model projection
//! - [`config`] - Configuration management
//! - [`notify`] - Transient toast notifications

pub mod api;
pub mod chart;
pub mod config;
pub mod dashboard;
pub mod errors;
pub mod events;
pub mod logging;
pub mod notify;
pub mod snapshot;
pub mod view;

// Re-export commonly used types at crate root for convenience
pub use api::{ApiError, DashboardApi, HttpDashboardApi, Operation};
pub use chart::{ChartFactory, ChartHost, ChartRenderer};
pub use config::UnitelConfig;
pub use dashboard::{Dashboard, DashboardRenderer, DashboardSettings};
pub use errors::{ConfigError, UnitelError, UnitelResult};
pub use notify::{Notifier, Toast, ToastKind, ToastPhase};
pub use snapshot::DashboardSnapshot;
pub use view::DashboardView;

// Re-export logging initialization
pub use logging::init_logging;
