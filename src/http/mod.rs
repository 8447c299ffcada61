//! HTTP server module.
//!
//! The server includes:
//! - Binding on the configured address with a distinct bind error
//! - Graceful shutdown on SIGTERM/SIGINT

mod server;
mod shutdown;

pub use server::{bind, serve, start_server, ServerError};
pub use shutdown::shutdown_signal;
