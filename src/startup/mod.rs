//! Startup: configuration and logging.
//!
//! - [`config`] - [`PortalConfig`] defaults, environment and builder
//! - [`logging`] - file-backed tracing subscriber

pub mod config;
pub mod logging;

pub use config::PortalConfig;
pub use logging::init_logging;
