//! Health check endpoint for container orchestration.
//!
//! Provides a simple liveness probe that returns 200 OK when the process is running.
//! Used by Kubernetes, ECS, systemd, and load balancers to verify the service is alive.

use axum::Json;
use serde::Serialize;

use crate::config::{HEALTH_SERVICE_ID, STATUS_HEALTHY};

/// Liveness payload. Field order is the serialized key order.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: &'static str,
    pub service: &'static str,
}

impl HealthStatus {
    pub const fn healthy() -> Self {
        Self {
            status: STATUS_HEALTHY,
            service: HEALTH_SERVICE_ID,
        }
    }
}

/// Health check handler.
///
/// This is a liveness probe - it only checks that the process can respond to HTTP.
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus::healthy())
}
