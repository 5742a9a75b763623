//! Dashboard controller.
//!
//! [`Dashboard`] owns the application state and wires the poller, loader
//! and command dispatcher to a [`DashboardRenderer`] and a chart factory.

pub mod controller;
pub mod state;

use std::time::Duration;

pub use controller::Dashboard;
pub use state::{AppState, ApplyOutcome, LoadTicket};

use crate::api::Operation;
use crate::notify::{NotificationTiming, Toast};
use crate::view::DashboardView;

/// Generic message shown when a load fails, whatever the cause.
pub const LOAD_ERROR_MESSAGE: &str = "Falha ao carregar dados do servidor";

/// Rendering step fed by the projection.
///
/// Implementations draw complete sections from the view model; they never
/// see the raw snapshot.
pub trait DashboardRenderer: Send {
    /// Redraw every section from `view`.
    fn render(&mut self, view: &DashboardView);

    /// Surface a load failure. The last rendered view stays on screen.
    fn show_error(&mut self, message: &str);

    /// Redraw the toast stack.
    fn show_toasts(&mut self, toasts: &[Toast]);
}

/// Controller timings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardSettings {
    pub refresh_interval: Duration,
    /// Delay before the silent reload that follows a successful command.
    pub followup_delay: Duration,
    pub notifications: NotificationTiming,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            refresh_interval: Duration::from_millis(5_000),
            followup_delay: Duration::from_millis(1_000),
            notifications: NotificationTiming::default(),
        }
    }
}

/// Toast texts for a staffing command.
pub fn operation_success_message(operation: Operation) -> &'static str {
    match operation {
        Operation::Hire => "Processo de contratação iniciado",
        Operation::Fire => "Funcionário demitido",
    }
}

pub fn operation_failure_message(operation: Operation) -> &'static str {
    match operation {
        Operation::Hire => "Erro ao iniciar contratação",
        Operation::Fire => "Erro ao demitir funcionário",
    }
}
