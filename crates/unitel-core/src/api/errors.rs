use crate::errors::UnitelError;

/// Failure talking to the operations backend.
///
/// `Request` and `Status` are both "the request did not succeed"; `Parse`
/// means a 2xx response carried a body that is not a valid snapshot.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Request to '{url}' failed: {message}")]
    Request { url: String, message: String },

    #[error("Request to '{url}' returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("Invalid response body from '{url}': {message}")]
    Parse { url: String, message: String },
}

impl ApiError {
    /// Whether the failure happened before or at the HTTP layer (as opposed
    /// to a malformed body).
    pub fn is_network_or_status(&self) -> bool {
        matches!(self, ApiError::Request { .. } | ApiError::Status { .. })
    }
}

impl UnitelError for ApiError {
    fn error_code(&self) -> &'static str {
        match self {
            ApiError::Request { .. } => "API_REQUEST_FAILED",
            ApiError::Status { .. } => "API_STATUS_ERROR",
            ApiError::Parse { .. } => "API_PARSE_ERROR",
        }
    }
}
