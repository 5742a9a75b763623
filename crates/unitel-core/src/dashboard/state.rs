use std::sync::Arc;

use chrono::{DateTime, Local};

use crate::snapshot::DashboardSnapshot;
use crate::view::DashboardView;

/// Identifies one load request. Tickets are issued in increasing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LoadTicket(u64);

impl LoadTicket {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Result of offering a fetched snapshot to the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    Applied,
    /// A newer load already landed; the snapshot was discarded.
    Stale { latest: LoadTicket },
}

/// Dashboard application state.
///
/// All fields are private - access state through the facade methods below.
/// The snapshot is only ever replaced as a whole, and the view is always the
/// projection of the current snapshot (or the placeholder view before the
/// first success).
pub struct AppState {
    /// Last successfully applied snapshot.
    snapshot: Option<Arc<DashboardSnapshot>>,

    /// What the renderer currently shows.
    view: DashboardView,

    /// Message shown after the most recent failed load, cleared on success.
    error: Option<String>,

    /// Last ticket handed out.
    issued: u64,

    /// Ticket of the snapshot currently applied (0 = none).
    applied: u64,

    /// Local time of the last applied snapshot.
    last_refresh: Option<DateTime<Local>>,

    /// Failed loads since startup.
    failures: u64,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            snapshot: None,
            view: DashboardView::placeholder(),
            error: None,
            issued: 0,
            applied: 0,
            last_refresh: None,
            failures: 0,
        }
    }

    /// Start a load. When `show_loading` is set, headline placeholders turn
    /// into loading hints; the returned flag says whether the view changed.
    pub fn begin_load(&mut self, show_loading: bool) -> (LoadTicket, bool) {
        self.issued += 1;
        let hinted = show_loading && self.view.show_loading_hints();
        (LoadTicket(self.issued), hinted)
    }

    /// Replace the snapshot unless a newer load already did.
    pub fn apply(&mut self, ticket: LoadTicket, snapshot: DashboardSnapshot) -> ApplyOutcome {
        if ticket.0 <= self.applied {
            return ApplyOutcome::Stale {
                latest: LoadTicket(self.applied),
            };
        }

        self.view = DashboardView::project(&snapshot);
        self.snapshot = Some(Arc::new(snapshot));
        self.applied = ticket.0;
        self.error = None;
        self.last_refresh = Some(Local::now());
        ApplyOutcome::Applied
    }

    /// Whether a newer load has already been applied.
    pub fn is_stale(&self, ticket: LoadTicket) -> bool {
        ticket.0 <= self.applied
    }

    /// Ticket of the snapshot currently applied.
    pub fn latest_applied(&self) -> LoadTicket {
        LoadTicket(self.applied)
    }

    /// Record a failed load. Snapshot and view stay as they were.
    pub fn record_failure(&mut self, message: &str) {
        self.failures += 1;
        self.error = Some(message.to_string());
    }

    pub fn snapshot(&self) -> Option<Arc<DashboardSnapshot>> {
        self.snapshot.clone()
    }

    pub fn view(&self) -> &DashboardView {
        &self.view
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn last_refresh(&self) -> Option<DateTime<Local>> {
        self.last_refresh
    }

    pub fn failure_count(&self) -> u64 {
        self.failures
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::fixtures;

    #[test]
    fn test_new_state_shows_placeholders() {
        let state = AppState::new();
        assert!(state.snapshot().is_none());
        assert_eq!(state.view(), &DashboardView::placeholder());
        assert!(state.error().is_none());
        assert!(state.last_refresh().is_none());
    }

    #[test]
    fn test_apply_replaces_snapshot_wholesale() {
        let mut state = AppState::new();
        let (first, _) = state.begin_load(false);
        assert_eq!(state.apply(first, fixtures::snapshot()), ApplyOutcome::Applied);
        let before = state.snapshot().unwrap();

        let mut next = fixtures::snapshot();
        next.timestamp = "2025-03-14 10:15:35".to_string();
        let (second, _) = state.begin_load(false);
        assert_eq!(state.apply(second, next), ApplyOutcome::Applied);
        let after = state.snapshot().unwrap();

        assert!(!Arc::ptr_eq(&before, &after));
        assert_eq!(before.timestamp, "2025-03-14 10:15:30");
        assert_eq!(state.view().timestamp, "2025-03-14 10:15:35");
        assert!(state.last_refresh().is_some());
    }

    #[test]
    fn test_older_ticket_is_stale() {
        let mut state = AppState::new();
        let (slow, _) = state.begin_load(false);
        let (fast, _) = state.begin_load(false);

        let mut newer = fixtures::snapshot();
        newer.timestamp = "novo".to_string();
        assert_eq!(state.apply(fast, newer), ApplyOutcome::Applied);

        let mut older = fixtures::snapshot();
        older.timestamp = "antigo".to_string();
        assert_eq!(
            state.apply(slow, older),
            ApplyOutcome::Stale { latest: fast }
        );
        assert_eq!(state.view().timestamp, "novo");
    }

    #[test]
    fn test_is_stale_after_newer_apply() {
        let mut state = AppState::new();
        let (slow, _) = state.begin_load(false);
        let (fast, _) = state.begin_load(false);
        assert!(!state.is_stale(slow));

        state.apply(fast, fixtures::snapshot());
        assert!(state.is_stale(slow));
        assert_eq!(state.latest_applied(), fast);

        let (next, _) = state.begin_load(false);
        assert!(!state.is_stale(next));
    }

    #[test]
    fn test_failure_keeps_last_good_view() {
        let mut state = AppState::new();
        let (ticket, _) = state.begin_load(false);
        state.apply(ticket, fixtures::snapshot());
        let view_before = state.view().clone();

        state.begin_load(true);
        state.record_failure("Falha ao carregar dados do servidor");

        assert_eq!(state.view(), &view_before);
        assert_eq!(state.error(), Some("Falha ao carregar dados do servidor"));
        assert_eq!(state.failure_count(), 1);

        let (ticket, _) = state.begin_load(false);
        state.apply(ticket, fixtures::snapshot());
        assert!(state.error().is_none());
    }

    #[test]
    fn test_loading_hints_only_before_first_data() {
        let mut state = AppState::new();
        let (_, hinted) = state.begin_load(true);
        assert!(hinted);
        assert_eq!(state.view().inventory.available, "...");

        let (_, hinted_again) = state.begin_load(true);
        assert!(!hinted_again);

        let (silent, hinted) = {
            let mut fresh = AppState::new();
            fresh.begin_load(false)
        };
        assert_eq!(silent.value(), 1);
        assert!(!hinted);
    }
}
