//! HyperServe: service metadata and liveness over HTTP.
//!
//! Exposes `GET /` with the service's identity and `GET /health` as a
//! liveness probe. The binary binds `0.0.0.0:$PORT` (default 12208).

pub mod config;
pub mod http;
pub mod middleware;
pub mod routes;

pub use config::AppConfig;
pub use crate::http::{start_server, ServerError};
pub use routes::create_router;
