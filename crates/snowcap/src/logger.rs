use snowcap_core::stmt::Value;

use std::{fmt, sync::Arc};

/// Receives every statement submitted to the connection.
pub trait Logger: Send + Sync + 'static {
    fn log_query(&self, query: &str, params: &[Value]);
}

/// Emits each query as a `tracing` debug event.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultLogger;

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopLogger;

#[derive(Clone, Default)]
pub enum LoggerConfig {
    #[default]
    Disabled,
    Enabled,
    Custom(Arc<dyn Logger>),
}

impl DefaultLogger {
    pub fn format(query: &str, params: &[Value]) -> String {
        if params.is_empty() {
            return format!("Query: {query}");
        }

        match serde_json::to_string(params) {
            Ok(params) => format!("Query: {query} -- params: {params}"),
            Err(err) => format!("Query: {query} -- params: <{err}>"),
        }
    }
}

impl Logger for DefaultLogger {
    fn log_query(&self, query: &str, params: &[Value]) {
        tracing::debug!("{}", DefaultLogger::format(query, params));
    }
}

impl Logger for NoopLogger {
    fn log_query(&self, _query: &str, _params: &[Value]) {}
}

impl LoggerConfig {
    pub(crate) fn logger(&self) -> Arc<dyn Logger> {
        match self {
            LoggerConfig::Disabled => Arc::new(NoopLogger),
            LoggerConfig::Enabled => Arc::new(DefaultLogger),
            LoggerConfig::Custom(logger) => logger.clone(),
        }
    }
}

impl From<bool> for LoggerConfig {
    fn from(enabled: bool) -> Self {
        if enabled {
            LoggerConfig::Enabled
        } else {
            LoggerConfig::Disabled
        }
    }
}

impl<L: Logger> From<Arc<L>> for LoggerConfig {
    fn from(logger: Arc<L>) -> Self {
        LoggerConfig::Custom(logger)
    }
}

impl fmt::Debug for LoggerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoggerConfig::Disabled => f.write_str("Disabled"),
            LoggerConfig::Enabled => f.write_str("Enabled"),
            LoggerConfig::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}
