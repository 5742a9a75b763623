use crate::snapshot::Staffing;

use super::{PLACEHOLDER, Progress};

#[derive(Debug, Clone, PartialEq)]
pub struct StaffingView {
    pub active: String,
    pub limit: String,
    /// Share of the headcount limit in use.
    pub occupancy: Progress,
    pub vacancies: Option<String>,
    pub total_hired: Option<String>,
    pub total_fired: Option<String>,
    /// Backend-reported occupancy, e.g. `60.0%`.
    pub reported_percent: Option<String>,
}

impl StaffingView {
    pub fn project(staffing: &Staffing) -> Self {
        Self {
            active: staffing.active.to_string(),
            limit: staffing.limit.to_string(),
            occupancy: Progress::of(staffing.active, staffing.limit),
            vacancies: staffing.vacancies.map(|v| v.to_string()),
            total_hired: staffing.total_hired.map(|v| v.to_string()),
            total_fired: staffing.total_fired.map(|v| v.to_string()),
            reported_percent: staffing.percent_active.map(|p| format!("{:.1}%", p)),
        }
    }

    pub(crate) fn placeholder() -> Self {
        Self {
            active: PLACEHOLDER.to_string(),
            limit: PLACEHOLDER.to_string(),
            occupancy: Progress::empty(),
            vacancies: None,
            total_hired: None,
            total_fired: None,
            reported_percent: None,
        }
    }
}
