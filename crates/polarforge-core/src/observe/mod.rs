//! # Observability
//!
//! Code construction is synchronous and short-lived, so observability is
//! limited to structured logging via `tracing`. Generators emit `debug`
//! events per construction; the batch runner warns on rejected requests.
//!
//! ```rust,ignore
//! use polarforge_core::observe::{init_logging, LogConfig};
//!
//! init_logging(&LogConfig::development());
//! tracing::info!(designs = 4, "Batch started");
//! ```

pub mod logging;

pub use logging::{init_logging, LogConfig, LogFormat, LogLevel};
