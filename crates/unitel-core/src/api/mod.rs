//! Backend API: the read endpoint for snapshots and the write endpoint for
//! staffing operations.

pub mod client;
pub mod errors;

use std::fmt;
use std::future::Future;

use serde::{Deserialize, Serialize};

pub use client::HttpDashboardApi;
pub use errors::ApiError;

use crate::snapshot::DashboardSnapshot;

pub const DASHBOARD_PATH: &str = "/api/dashboard";
pub const OPERATIONS_PATH: &str = "/api/operacoes";

/// A staffing write operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    /// Start a hiring process.
    #[serde(rename = "contratar")]
    Hire,
    /// Dismiss one employee.
    #[serde(rename = "demitir")]
    Fire,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Hire => write!(f, "contratar"),
            Operation::Fire => write!(f, "demitir"),
        }
    }
}

/// Body of `POST /api/operacoes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationRequest {
    #[serde(rename = "tipo")]
    pub operation: Operation,
}

impl From<Operation> for OperationRequest {
    fn from(operation: Operation) -> Self {
        Self { operation }
    }
}

/// Transport used by the dashboard controller.
///
/// Implemented over HTTP by [`HttpDashboardApi`]; tests supply in-memory fakes.
pub trait DashboardApi: Send + Sync + 'static {
    /// `GET /api/dashboard`.
    fn fetch_dashboard(&self) -> impl Future<Output = Result<DashboardSnapshot, ApiError>> + Send;

    /// `POST /api/operacoes`. The response body is ignored.
    fn submit_operation(
        &self,
        operation: Operation,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;
}
