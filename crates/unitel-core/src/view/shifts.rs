//! Sales-by-shift series feeding the doughnut chart and its legend.

use std::fmt;

use crate::snapshot::ShiftTotals;

/// Time-of-day sales bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shift {
    Morning,
    Afternoon,
    Evening,
}

impl Shift {
    pub const ALL: [Shift; 3] = [Shift::Morning, Shift::Afternoon, Shift::Evening];

    pub fn label(self) -> &'static str {
        match self {
            Shift::Morning => "Manhã",
            Shift::Afternoon => "Tarde",
            Shift::Evening => "Noite",
        }
    }

    pub fn color(self) -> Rgba {
        match self {
            Shift::Morning => Rgba::new(37, 99, 235, 0.8),
            Shift::Afternoon => Rgba::new(5, 150, 105, 0.8),
            Shift::Evening => Rgba::new(217, 119, 6, 0.8),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShiftSegment {
    pub shift: Shift,
    pub value: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendItem {
    pub label: String,
    pub color: Rgba,
}

/// Three segments in fixed order: morning, afternoon, evening.
#[derive(Debug, Clone, PartialEq)]
pub struct ShiftSeries {
    segments: [ShiftSegment; 3],
}

impl ShiftSeries {
    pub fn project(totals: &ShiftTotals) -> Self {
        Self {
            segments: [
                ShiftSegment {
                    shift: Shift::Morning,
                    value: totals.morning,
                },
                ShiftSegment {
                    shift: Shift::Afternoon,
                    value: totals.afternoon,
                },
                ShiftSegment {
                    shift: Shift::Evening,
                    value: totals.evening,
                },
            ],
        }
    }

    pub fn segments(&self) -> &[ShiftSegment; 3] {
        &self.segments
    }

    /// Sum of all segments, saturating at `i64::MAX`.
    pub fn total(&self) -> i64 {
        self.segments
            .iter()
            .fold(0i64, |acc, s| acc.saturating_add(s.value))
    }

    /// Fraction of the total in `shift`, or `None` when nothing was sold.
    pub fn share(&self, shift: Shift) -> Option<f64> {
        let total = self.total();
        if total <= 0 {
            return None;
        }
        self.segments
            .iter()
            .find(|s| s.shift == shift)
            .map(|s| s.value as f64 / total as f64)
    }

    /// Legend entries mirrored from the segment values.
    pub fn legend(&self) -> Vec<LegendItem> {
        self.segments
            .iter()
            .map(|s| LegendItem {
                label: format!("{}: {}", s.shift.label(), s.value),
                color: s.shift.color(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(morning: i64, afternoon: i64, evening: i64) -> ShiftSeries {
        ShiftSeries::project(&ShiftTotals {
            morning,
            afternoon,
            evening,
        })
    }

    #[test]
    fn test_legend_mirrors_values() {
        let legend = series(25, 21, 12).legend();
        let labels: Vec<&str> = legend.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, vec!["Manhã: 25", "Tarde: 21", "Noite: 12"]);
        assert_eq!(legend[0].color.to_string(), "rgba(37, 99, 235, 0.8)");
        assert_eq!(legend[1].color.to_string(), "rgba(5, 150, 105, 0.8)");
        assert_eq!(legend[2].color.to_string(), "rgba(217, 119, 6, 0.8)");
    }

    #[test]
    fn test_shares() {
        let s = series(1, 1, 2);
        assert_eq!(s.total(), 4);
        assert_eq!(s.share(Shift::Evening), Some(0.5));
        assert_eq!(s.share(Shift::Morning), Some(0.25));
    }

    #[test]
    fn test_no_sales_has_no_shares() {
        let s = series(0, 0, 0);
        assert_eq!(s.share(Shift::Afternoon), None);
        assert_eq!(s.legend().len(), 3);
    }

    #[test]
    fn test_huge_totals_saturate() {
        let s = series(i64::MAX, 1, 1);
        assert_eq!(s.total(), i64::MAX);
        assert_eq!(s.share(Shift::Morning), Some(1.0));
        assert_eq!(s.legend()[0].label, format!("Manhã: {}", i64::MAX));
    }
}
