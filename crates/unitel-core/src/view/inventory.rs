use crate::snapshot::Inventory;

use super::{PLACEHOLDER, Progress};

/// Below this many available cards the inventory card turns amber.
pub const LOW_STOCK_THRESHOLD: i64 = 20;

/// Accent of the inventory card border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderTone {
    /// Out of stock.
    Danger,
    /// Running low.
    Warning,
    Default,
}

impl BorderTone {
    pub fn for_available(available: i64) -> Self {
        if available == 0 {
            BorderTone::Danger
        } else if available < LOW_STOCK_THRESHOLD {
            BorderTone::Warning
        } else {
            BorderTone::Default
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InventoryView {
    pub available: String,
    pub total: String,
    /// Share of the stock already sold.
    pub sold: Progress,
    pub border: BorderTone,
    /// Backend-reported share sold, e.g. `58.0%`.
    pub reported_percent: Option<String>,
}

impl InventoryView {
    pub fn project(inventory: &Inventory) -> Self {
        Self {
            available: inventory.available.to_string(),
            total: inventory.total.to_string(),
            sold: Progress::of(inventory.sold, inventory.total),
            border: BorderTone::for_available(inventory.available),
            reported_percent: inventory.percent_sold.map(|p| format!("{:.1}%", p)),
        }
    }

    pub(crate) fn placeholder() -> Self {
        Self {
            available: PLACEHOLDER.to_string(),
            total: PLACEHOLDER.to_string(),
            sold: Progress::empty(),
            border: BorderTone::Default,
            reported_percent: None,
        }
    }
}
