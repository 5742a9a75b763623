//! Snapshot → view-model projection.
//!
//! Every function here is pure: it takes a slice of a [`DashboardSnapshot`]
//! and returns display-ready values. Renderers only draw what this module
//! computes, so all dashboard rules are testable without a screen.

pub mod branches;
pub mod cards;
pub mod inventory;
pub mod queue;
pub mod sales;
pub mod shifts;
pub mod staffing;

pub use branches::BranchRow;
pub use cards::{CardRow, RecentCardsView};
pub use inventory::{BorderTone, InventoryView};
pub use queue::{QueueBody, QueueRow, QueueView, format_wait};
pub use sales::SalesView;
pub use shifts::{LegendItem, Rgba, Shift, ShiftSegment, ShiftSeries};
pub use staffing::StaffingView;

use crate::snapshot::DashboardSnapshot;

/// Value shown before the first successful load.
pub const PLACEHOLDER: &str = "-";

/// Value a placeholder turns into while a visible load is in flight.
pub const LOADING_HINT: &str = "...";

/// Visual category of a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeStyle {
    Company,
    Public,
    Active,
    Inactive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub label: String,
    pub style: BadgeStyle,
}

impl Badge {
    pub fn new(label: String, style: BadgeStyle) -> Self {
        Self { label, style }
    }
}

/// Percentage of a whole.
///
/// Not clamped: a backend reporting more sold cards than stock yields a value
/// above 100. Renderers with a fixed-size bar decide how to draw that.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    percent: Option<f64>,
}

impl Progress {
    /// `part / whole * 100`, or no progress when `whole` is zero.
    pub fn of(part: i64, whole: i64) -> Self {
        let percent = (whole != 0).then(|| part as f64 / whole as f64 * 100.0);
        Self { percent }
    }

    pub fn empty() -> Self {
        Self { percent: None }
    }

    pub fn percent(&self) -> Option<f64> {
        self.percent
    }

    pub fn rounded(&self) -> Option<i64> {
        self.percent.map(|p| p.round() as i64)
    }

    pub fn exceeds_full(&self) -> bool {
        self.percent.is_some_and(|p| p > 100.0)
    }
}

/// Everything a renderer needs to draw one frame of the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub timestamp: String,
    /// Backend API version, when reported.
    pub api_version: Option<String>,
    pub inventory: InventoryView,
    pub staffing: StaffingView,
    pub sales: SalesView,
    pub queue: QueueView,
    pub shifts: Option<ShiftSeries>,
    pub recent_cards: RecentCardsView,
    pub branches: Vec<BranchRow>,
    /// Branch count as reported by the backend.
    pub branch_count: Option<String>,
}

impl DashboardView {
    /// Project a full snapshot.
    pub fn project(snapshot: &DashboardSnapshot) -> Self {
        Self {
            timestamp: snapshot.timestamp.clone(),
            api_version: snapshot.api_version.clone(),
            inventory: InventoryView::project(&snapshot.inventory),
            staffing: StaffingView::project(&snapshot.staffing),
            sales: SalesView::project(&snapshot.sales),
            queue: QueueView::project(&snapshot.queue),
            shifts: Some(ShiftSeries::project(&snapshot.sales.shifts)),
            recent_cards: RecentCardsView::project(&snapshot.inventory.cards),
            branches: branches::project_branches(&snapshot.branches.branches),
            branch_count: snapshot.branches.total.map(|n| n.to_string()),
        }
    }

    /// View shown before any data has arrived.
    pub fn placeholder() -> Self {
        Self {
            timestamp: PLACEHOLDER.to_string(),
            api_version: None,
            inventory: InventoryView::placeholder(),
            staffing: StaffingView::placeholder(),
            sales: SalesView::placeholder(),
            queue: QueueView::placeholder(),
            shifts: None,
            recent_cards: RecentCardsView::Empty {
                message: cards::EMPTY_CARDS_MESSAGE,
            },
            branches: Vec::new(),
            branch_count: None,
        }
    }

    /// Turn headline counters still showing [`PLACEHOLDER`] into
    /// [`LOADING_HINT`]. Counters that already hold data are left alone.
    ///
    /// Returns whether anything changed.
    pub fn show_loading_hints(&mut self) -> bool {
        let mut changed = false;
        for value in [
            &mut self.inventory.available,
            &mut self.staffing.active,
            &mut self.sales.total,
            &mut self.queue.size,
        ] {
            if *value == PLACEHOLDER {
                *value = LOADING_HINT.to_string();
                changed = true;
            }
        }
        changed
    }
}
