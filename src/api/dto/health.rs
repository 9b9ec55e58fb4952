//! DTOs for health check endpoint.

use serde::Serialize;

/// Health check response with component status.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `healthy` or `degraded`.
    pub status: &'static str,
    pub version: &'static str,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub database: CheckStatus,
}

/// Outcome of a single component probe.
#[derive(Debug, Serialize)]
pub struct CheckStatus {
    pub status: &'static str,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CheckStatus {
    pub fn ok(message: Option<String>) -> Self {
        Self {
            status: "ok",
            message,
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            status: "error",
            message: Some(message),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}
