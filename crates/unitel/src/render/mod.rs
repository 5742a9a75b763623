//! Terminal rendering for the dashboard.

pub mod chart;
pub mod table;
pub mod terminal;

use std::sync::{Mutex, MutexGuard, PoisonError};

pub use chart::{ChartCanvas, TerminalChart};
pub use terminal::{FrameStyle, TerminalRenderer};

/// ANSI escape sequences used by interactive frames.
pub(crate) mod ansi {
    pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";
    pub const RESET: &str = "\x1b[0m";
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const MAGENTA: &str = "\x1b[35m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
}

pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
