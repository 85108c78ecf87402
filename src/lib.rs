//! `service-client` pairs a validated connection [`Configuration`] with a
//! disposable async [`ServiceClient`].
//!
//! The client simulates remote calls with fixed latencies:
//! - [`ServiceClient::get_data`]
//! - [`ServiceClient::post_data`]
//! - [`ServiceClient::validate_connection`]
//!
//! Each call can be cancelled through a
//! [`CancellationToken`](tokio_util::sync::CancellationToken) and fails with
//! [`ServiceError::Disposed`] once the client has been disposed.

mod client;
mod config;
mod error;
mod logger;
pub mod text;

pub use client::{ClientState, ServiceClient, ServiceClientBuilder};
pub use config::Configuration;
pub use error::ServiceError;
#[cfg(feature = "tracing")]
pub use logger::TracingLogger;
pub use logger::{Field, LogLevel, Logger, NoopLogger};
pub use tokio_util::sync::CancellationToken;

pub type Result<T> = std::result::Result<T, ServiceError>;
