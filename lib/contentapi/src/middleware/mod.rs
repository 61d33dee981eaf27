//! Tower middleware for the hyper transport.
//!
//! Layers are added through [`crate::HyperClientBuilder::layer`] or one of
//! its helpers; the last layer added is the first to see a request.
//!
//! - [`LoggingLayer`] - logs each exchange with `tracing`, API key redacted
//! - [`ConcurrencyLimitLayer`] - caps requests in flight
//!
//! ```no_run
//! use contentapi::HyperClient;
//! use contentapi::middleware::{ConcurrencyLimitLayer, LoggingLayer};
//!
//! let client = HyperClient::builder()
//!     .layer(ConcurrencyLimitLayer::new(8))
//!     .layer(LoggingLayer::debug())
//!     .build();
//! ```

mod logging;

pub use logging::{LogLevel, Logging, LoggingLayer};

// Re-export tower types for convenience
pub use tower::limit::ConcurrencyLimitLayer;
pub use tower::{Layer, ServiceBuilder};
