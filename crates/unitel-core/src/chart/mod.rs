//! Chart seam.
//!
//! The controller never talks to a drawing backend directly: it asks a
//! factory for a fresh [`ChartRenderer`] on every refresh and disposes the
//! previous one first, so no backend state survives from one snapshot to the
//! next.

use tracing::debug;

use crate::view::ShiftSeries;

/// A drawable sales-by-shift chart instance.
pub trait ChartRenderer: Send {
    /// Draw the series. Called once per instance.
    fn render(&mut self, series: &ShiftSeries);

    /// Release whatever the instance holds. Called before it is dropped.
    fn dispose(&mut self);
}

/// Builds a new chart instance.
pub type ChartFactory = Box<dyn Fn() -> Box<dyn ChartRenderer> + Send + Sync>;

/// Owns at most one live chart and enforces replace-not-update.
pub struct ChartHost {
    factory: ChartFactory,
    current: Option<Box<dyn ChartRenderer>>,
    generation: u64,
}

impl ChartHost {
    pub fn new(factory: ChartFactory) -> Self {
        Self {
            factory,
            current: None,
            generation: 0,
        }
    }

    /// Dispose the live chart (if any), then build and render a new one.
    pub fn replace(&mut self, series: &ShiftSeries) {
        if let Some(mut previous) = self.current.take() {
            previous.dispose();
        }

        let mut chart = (self.factory)();
        chart.render(series);
        self.current = Some(chart);
        self.generation += 1;

        debug!(
            event = "core.chart.replaced",
            generation = self.generation,
            total = series.total()
        );
    }

    /// Dispose the live chart without replacing it.
    pub fn dispose(&mut self) {
        if let Some(mut chart) = self.current.take() {
            chart.dispose();
            debug!(event = "core.chart.disposed", generation = self.generation);
        }
    }

    pub fn is_live(&self) -> bool {
        self.current.is_some()
    }

    /// Number of charts built so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
