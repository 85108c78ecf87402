//! Logging capability injected into [`ServiceClient`](crate::ServiceClient).
//!
//! The client never talks to a logging backend directly. It emits leveled
//! messages with named fields through [`Logger`]; [`NoopLogger`] swallows
//! them, and `TracingLogger` (feature `tracing`) forwards them to `tracing`.

use std::fmt;

/// Severity of a log line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    Debug,
    Info,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Debug => f.write_str("debug"),
            LogLevel::Info => f.write_str("info"),
        }
    }
}

/// A named value attached to a log line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Field<'a> {
    pub name: &'static str,
    pub value: &'a str,
}

impl<'a> Field<'a> {
    pub fn new(name: &'static str, value: &'a str) -> Self {
        Self { name, value }
    }
}

/// Sink for leveled, fielded log messages.
pub trait Logger: Send + Sync {
    fn log(&self, level: LogLevel, message: &str, fields: &[Field<'_>]);

    fn debug(&self, message: &str, fields: &[Field<'_>]) {
        self.log(LogLevel::Debug, message, fields);
    }

    fn info(&self, message: &str, fields: &[Field<'_>]) {
        self.log(LogLevel::Info, message, fields);
    }
}

/// Logger that accepts every call and does nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopLogger;

impl Logger for NoopLogger {
    fn log(&self, _level: LogLevel, _message: &str, _fields: &[Field<'_>]) {}
}

/// Logger that forwards to the `tracing` macros under the `service_client` target.
///
/// Fields are rendered as `name=value` pairs in a single `fields` value
/// since `tracing` field names must be known at compile time.
#[cfg(feature = "tracing")]
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingLogger;

#[cfg(feature = "tracing")]
impl Logger for TracingLogger {
    fn log(&self, level: LogLevel, message: &str, fields: &[Field<'_>]) {
        let rendered = render_fields(fields);
        match level {
            LogLevel::Debug => {
                tracing::debug!(target: "service_client", fields = %rendered, "{}", message)
            }
            LogLevel::Info => {
                tracing::info!(target: "service_client", fields = %rendered, "{}", message)
            }
        }
    }
}

#[cfg_attr(not(feature = "tracing"), allow(dead_code))]
fn render_fields(fields: &[Field<'_>]) -> String {
    fields
        .iter()
        .map(|field| format!("{}={}", field.name, field.value))
        .collect::<Vec<_>>()
        .join(" ")
}
