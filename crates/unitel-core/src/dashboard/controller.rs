use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, error, info, warn};

use super::state::{AppState, ApplyOutcome, LoadTicket};
use super::{
    DashboardRenderer, DashboardSettings, LOAD_ERROR_MESSAGE, operation_failure_message,
    operation_success_message,
};
use crate::api::{ApiError, DashboardApi, Operation};
use crate::chart::{ChartFactory, ChartHost};
use crate::errors::UnitelError;
use crate::notify::{Notifier, ToastKind};
use crate::snapshot::DashboardSnapshot;
use crate::view::DashboardView;

/// Polling dashboard controller.
///
/// Cheap to clone; clones share one state. Must be used from within a tokio
/// runtime: timers and follow-up loads are spawned tasks.
pub struct Dashboard<A: DashboardApi> {
    shared: Arc<Shared<A>>,
}

impl<A: DashboardApi> Clone for Dashboard<A> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

struct Shared<A> {
    api: A,
    settings: DashboardSettings,
    notifier: Notifier,
    /// Locked before `output` whenever both are needed.
    state: Mutex<AppState>,
    output: Mutex<Output>,
    tasks: Mutex<Tasks>,
}

struct Output {
    renderer: Box<dyn DashboardRenderer>,
    chart: ChartHost,
}

#[derive(Default)]
struct Tasks {
    poller: Option<JoinHandle<()>>,
    toast_forwarder: Option<JoinHandle<()>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl<A: DashboardApi> Dashboard<A> {
    pub fn new(
        api: A,
        renderer: Box<dyn DashboardRenderer>,
        chart_factory: ChartFactory,
        settings: DashboardSettings,
    ) -> Self {
        Self {
            shared: Arc::new(Shared {
                api,
                settings,
                notifier: Notifier::new(settings.notifications),
                state: Mutex::new(AppState::new()),
                output: Mutex::new(Output {
                    renderer,
                    chart: ChartHost::new(chart_factory),
                }),
                tasks: Mutex::new(Tasks::default()),
            }),
        }
    }

    /// Start forwarding toasts, load once with loading hints, then arm the
    /// poller with the configured interval.
    pub async fn mount(&self) {
        info!(
            event = "core.dashboard.mount_started",
            interval_ms = self.shared.settings.refresh_interval.as_millis() as u64
        );

        self.start_toast_forwarding();

        // Failures are already reported to the renderer and the log.
        let _ = self.load(true).await;

        self.start_auto_refresh(self.shared.settings.refresh_interval);

        info!(event = "core.dashboard.mount_completed");
    }

    /// Cancel the poller and toast forwarding and dispose the live chart.
    ///
    /// In-flight loads and scheduled follow-ups still run to completion.
    pub fn unmount(&self) {
        {
            let mut tasks = lock(&self.shared.tasks);
            if let Some(poller) = tasks.poller.take() {
                poller.abort();
            }
            if let Some(forwarder) = tasks.toast_forwarder.take() {
                forwarder.abort();
            }
        }

        lock(&self.shared.output).chart.dispose();

        info!(event = "core.dashboard.unmount_completed");
    }

    /// Arm the poller. Any previously armed poller is cancelled first, so at
    /// most one timer is ever active.
    pub fn start_auto_refresh(&self, interval: Duration) {
        let mut tasks = lock(&self.shared.tasks);
        if let Some(previous) = tasks.poller.take() {
            previous.abort();
            debug!(event = "core.dashboard.poller_rearmed");
        }

        let weak = Arc::downgrade(&self.shared);
        tasks.poller = Some(tokio::spawn(poll_loop(weak, interval)));

        info!(
            event = "core.dashboard.auto_refresh_started",
            interval_ms = interval.as_millis() as u64
        );
    }

    pub fn stop_auto_refresh(&self) {
        if let Some(poller) = lock(&self.shared.tasks).poller.take() {
            poller.abort();
            info!(event = "core.dashboard.auto_refresh_stopped");
        }
    }

    pub fn is_auto_refreshing(&self) -> bool {
        lock(&self.shared.tasks)
            .poller
            .as_ref()
            .is_some_and(|p| !p.is_finished())
    }

    /// Manual refresh: a load that shows loading hints.
    pub async fn refresh(&self) -> Result<(), ApiError> {
        self.load(true).await
    }

    /// Fetch one snapshot and render it.
    ///
    /// On failure the error is logged once, the generic message is shown and
    /// the previous view stays in place. A response (success or failure) that
    /// arrives after a newer one has already been applied is dropped.
    pub async fn load(&self, show_loading: bool) -> Result<(), ApiError> {
        let ticket = {
            let mut state = lock(&self.shared.state);
            let (ticket, hinted) = state.begin_load(show_loading);
            if hinted {
                lock(&self.shared.output).renderer.render(state.view());
            }
            ticket
        };

        debug!(
            event = "core.dashboard.load_started",
            ticket = ticket.value(),
            show_loading = show_loading
        );

        match self.shared.api.fetch_dashboard().await {
            Ok(snapshot) => {
                self.apply(ticket, snapshot);
                Ok(())
            }
            Err(e) => {
                let mut state = lock(&self.shared.state);

                // A newer snapshot is already on screen; don't flag it as failed.
                if state.is_stale(ticket) {
                    debug!(
                        event = "core.dashboard.stale_failure_dropped",
                        ticket = ticket.value(),
                        latest = state.latest_applied().value(),
                        error = %e
                    );
                    return Err(e);
                }

                error!(
                    event = "core.dashboard.load_failed",
                    ticket = ticket.value(),
                    error_code = e.error_code(),
                    error = %e
                );

                state.record_failure(LOAD_ERROR_MESSAGE);
                lock(&self.shared.output)
                    .renderer
                    .show_error(LOAD_ERROR_MESSAGE);

                Err(e)
            }
        }
    }

    fn apply(&self, ticket: LoadTicket, snapshot: DashboardSnapshot) {
        let mut state = lock(&self.shared.state);

        match state.apply(ticket, snapshot) {
            ApplyOutcome::Stale { latest } => {
                debug!(
                    event = "core.dashboard.stale_response_dropped",
                    ticket = ticket.value(),
                    latest = latest.value()
                );
            }
            ApplyOutcome::Applied => {
                let view = state.view();
                let mut output = lock(&self.shared.output);
                if let Some(series) = &view.shifts {
                    output.chart.replace(series);
                }
                output.renderer.render(view);

                debug!(
                    event = "core.dashboard.load_completed",
                    ticket = ticket.value(),
                    timestamp = %view.timestamp
                );
            }
        }
    }

    /// Start a hiring process.
    pub async fn hire(&self) -> Result<(), ApiError> {
        self.dispatch(Operation::Hire).await
    }

    /// Dismiss one employee.
    pub async fn fire(&self) -> Result<(), ApiError> {
        self.dispatch(Operation::Fire).await
    }

    /// POST the operation, toast the outcome and, on success, schedule one
    /// silent reload after the follow-up delay.
    pub async fn dispatch(&self, operation: Operation) -> Result<(), ApiError> {
        info!(
            event = "core.dashboard.operation_started",
            operation = %operation
        );

        match self.shared.api.submit_operation(operation).await {
            Ok(()) => {
                self.shared
                    .notifier
                    .show(operation_success_message(operation), ToastKind::Success);
                self.schedule_followup_load();

                info!(
                    event = "core.dashboard.operation_completed",
                    operation = %operation
                );
                Ok(())
            }
            Err(e) => {
                warn!(
                    event = "core.dashboard.operation_failed",
                    operation = %operation,
                    error_code = e.error_code(),
                    error = %e
                );
                self.shared
                    .notifier
                    .show(operation_failure_message(operation), ToastKind::Error);
                Err(e)
            }
        }
    }

    fn schedule_followup_load(&self) {
        let this = self.clone();
        let delay = self.shared.settings.followup_delay;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = this.load(false).await;
        });
    }

    fn start_toast_forwarding(&self) {
        let mut rx = self.shared.notifier.subscribe();
        let weak = Arc::downgrade(&self.shared);

        let forwarder = tokio::spawn(async move {
            while rx.changed().await.is_ok() {
                let toasts = rx.borrow_and_update().clone();
                let Some(shared) = weak.upgrade() else {
                    break;
                };
                lock(&shared.output).renderer.show_toasts(&toasts);
            }
        });

        if let Some(previous) = lock(&self.shared.tasks).toast_forwarder.replace(forwarder) {
            previous.abort();
        }
    }

    pub fn notifier(&self) -> &Notifier {
        &self.shared.notifier
    }

    pub fn settings(&self) -> DashboardSettings {
        self.shared.settings
    }

    pub fn snapshot(&self) -> Option<Arc<DashboardSnapshot>> {
        lock(&self.shared.state).snapshot()
    }

    pub fn view(&self) -> DashboardView {
        lock(&self.shared.state).view().clone()
    }

    pub fn last_error(&self) -> Option<String> {
        lock(&self.shared.state).error().map(str::to_string)
    }

    pub fn chart_generation(&self) -> u64 {
        lock(&self.shared.output).chart.generation()
    }

    pub fn has_live_chart(&self) -> bool {
        lock(&self.shared.output).chart.is_live()
    }
}

/// Timer loop: one silent load per tick, each in its own task so a slow
/// request never delays the next tick. Exits once the dashboard is dropped.
async fn poll_loop<A: DashboardApi>(weak: Weak<Shared<A>>, interval: Duration) {
    let mut ticker = tokio::time::interval_at(Instant::now() + interval, interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;

        let Some(shared) = weak.upgrade() else {
            debug!(
                event = "core.dashboard.auto_refresh_stopped",
                reason = "dashboard_dropped"
            );
            break;
        };

        debug!(event = "core.dashboard.auto_refresh_tick");
        let dashboard = Dashboard { shared };
        tokio::spawn(async move {
            let _ = dashboard.load(false).await;
        });
    }
}
