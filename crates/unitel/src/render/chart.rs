//! Horizontal bar chart for sales by shift.

use std::sync::{Arc, Mutex};

use tracing::debug;

use unitel_core::chart::ChartRenderer;
use unitel_core::view::{Rgba, ShiftSeries};

use super::{ansi, lock};

/// Width of a full bar in cells.
pub const BAR_WIDTH: usize = 30;

/// Lines drawn by the live chart, read by the frame renderer.
pub type ChartCanvas = Arc<Mutex<Vec<String>>>;

/// Chart instance drawing into a shared canvas.
pub struct TerminalChart {
    canvas: ChartCanvas,
    color: bool,
}

impl TerminalChart {
    pub fn new(canvas: ChartCanvas, color: bool) -> Self {
        Self { canvas, color }
    }
}

impl ChartRenderer for TerminalChart {
    fn render(&mut self, series: &ShiftSeries) {
        *lock(&self.canvas) = draw(series, self.color);
    }

    fn dispose(&mut self) {
        lock(&self.canvas).clear();
        debug!(event = "cli.chart.disposed");
    }
}

/// Plain rendition of the series, one bar per shift plus a legend line.
pub fn draw_series(series: &ShiftSeries) -> Vec<String> {
    draw(series, false)
}

fn draw(series: &ShiftSeries, color: bool) -> Vec<String> {
    let mut lines: Vec<String> = series
        .segments()
        .iter()
        .map(|segment| {
            let share = series.share(segment.shift).unwrap_or(0.0);
            let filled = ((share * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH);
            let bar = "█".repeat(filled);
            let bar = if color {
                paint(&bar, segment.shift.color())
            } else {
                bar
            };

            format!(
                "  {:<5} {}{} {:>5} ({:>3.0}%)",
                segment.shift.label(),
                bar,
                "░".repeat(BAR_WIDTH - filled),
                segment.value,
                share * 100.0
            )
        })
        .collect();

    let legend: Vec<String> = series
        .legend()
        .into_iter()
        .map(|item| {
            if color {
                format!("{} {}", paint("■", item.color), item.label)
            } else {
                format!("■ {}", item.label)
            }
        })
        .collect();
    lines.push(format!("  {}", legend.join("   ")));

    lines
}

fn paint(text: &str, color: Rgba) -> String {
    format!(
        "\x1b[38;2;{};{};{}m{}{}",
        color.r,
        color.g,
        color.b,
        text,
        ansi::RESET
    )
}
