//! Dashboard snapshot wire model.
//!
//! Mirrors the JSON served at `/api/dashboard`. Field names on the wire are
//! Portuguese; Rust names are English with `serde(rename)`.

pub mod types;

pub use types::{
    Branch, Branches, DashboardSnapshot, Inventory, Queue, QueuedCustomer, Sales, ShiftTotals,
    SoldCard, Staffing,
};
