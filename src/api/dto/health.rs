//! DTO for the health check endpoint.

use serde::Serialize;

/// Health check report.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
}
