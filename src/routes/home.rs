//! Root route reporting service metadata.

use axum::Json;
use serde::Serialize;

use crate::config::{CIE_SET, ONLINE_MESSAGE, SERVICE_NAME, SERVICE_VERSION, STATUS_ONLINE};

/// Service metadata payload, serialized as
/// `{"service","status","cie_set","version","message"}` in that order.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ServiceInfo {
    pub service: &'static str,
    pub status: &'static str,
    pub cie_set: &'static str,
    pub version: &'static str,
    pub message: &'static str,
}

impl ServiceInfo {
    pub const fn current() -> Self {
        Self {
            service: SERVICE_NAME,
            status: STATUS_ONLINE,
            cie_set: CIE_SET,
            version: SERVICE_VERSION,
            message: ONLINE_MESSAGE,
        }
    }
}

/// Root handler. Ignores query string, headers and body.
pub async fn index() -> Json<ServiceInfo> {
    Json(ServiceInfo::current())
}
