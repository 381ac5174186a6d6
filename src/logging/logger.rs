//! The logging facade.
//!
//! A [`Logger`] carries a component name, a correlation identifier, static
//! fields and a minimum level. Each emit builds a record from
//! `traceID`, then the static fields, then the call-site fields, with later
//! values replacing earlier ones, and hands it to the configured sink.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::context::{request_id, Context};

use super::config::{default_config, LoggerConfig, TimeFormat};
use super::fields::Fields;
use super::interpolate::interpolate;
use super::level::Level;
use super::sink::{Record, Sink};

/// Prefix of the correlation identifier given to named loggers.
pub const TRACE_ID_PREFIX: &str = "store::";
/// Record key holding the correlation identifier.
pub const TRACE_ID_KEY: &str = "traceID";
/// Static field key holding the logger name.
pub const NAME_KEY: &str = "name";

/// Leveled structured logger.
///
/// The threshold is plain data: [`set_level`](Self::set_level) takes
/// `&mut self`, so a logger shared across threads has to be wrapped in a lock
/// by its owner. Clones have independent thresholds and share the sink.
#[derive(Clone)]
pub struct Logger {
    name: String,
    trace_id: String,
    level: Level,
    time_format: TimeFormat,
    static_fields: Fields,
    sink: Arc<dyn Sink>,
}

impl Logger {
    /// Logger for a component, built from the process default configuration.
    pub fn new(name: &str) -> Self {
        Self::with_config(name, &default_config())
    }

    /// Logger for a component with an explicit configuration.
    ///
    /// The correlation identifier is `store::<name>` and the name is kept as
    /// the static field `name`.
    pub fn with_config(name: &str, config: &LoggerConfig) -> Self {
        Self::with_fields(name, config, ())
    }

    /// Like [`with_config`](Self::with_config), adding static fields that
    /// every record from this logger carries.
    pub fn with_fields(name: &str, config: &LoggerConfig, fields: impl Into<Fields>) -> Self {
        let mut static_fields = Fields::new().with(NAME_KEY, name);
        static_fields.merge(&fields.into());
        Self {
            name: name.to_string(),
            trace_id: format!("{}{}", TRACE_ID_PREFIX, name),
            level: config.level,
            time_format: config.time_format,
            static_fields,
            sink: config.sink.clone(),
        }
    }

    /// Logger with an explicit correlation identifier and static fields
    /// given as a flat `key, value, ...` list. A trailing key without a
    /// value is dropped.
    pub fn from_pairs(trace_id: &str, config: &LoggerConfig, pairs: &[Value]) -> Self {
        Self {
            name: trace_id.to_string(),
            trace_id: trace_id.to_string(),
            level: config.level,
            time_format: config.time_format,
            static_fields: Fields::from_pairs(pairs),
            sink: config.sink.clone(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn trace_id(&self) -> &str {
        &self.trace_id
    }

    pub fn static_fields(&self) -> &Fields {
        &self.static_fields
    }

    pub fn sink(&self) -> &Arc<dyn Sink> {
        &self.sink
    }

    /// Clone of this logger with a different correlation identifier.
    pub fn with_trace_id(&self, trace_id: impl Into<String>) -> Self {
        let mut logger = self.clone();
        logger.trace_id = trace_id.into();
        logger
    }

    /// Clone correlated with the request ID attached to `ctx`, if any.
    pub fn for_context(&self, ctx: &Context) -> Self {
        match request_id(ctx) {
            Some(id) => self.with_trace_id(id),
            None => self.clone(),
        }
    }

    pub fn level(&self) -> Level {
        self.level
    }

    /// Change the minimum level.
    pub fn set_level(&mut self, level: Level) {
        self.level = level;
    }

    /// Whether a record at `level` would be emitted.
    pub fn enabled(&self, level: Level) -> bool {
        level < Level::Disabled && level >= self.level
    }

    pub fn is_trace(&self) -> bool {
        self.enabled(Level::Trace)
    }

    pub fn is_debug(&self) -> bool {
        self.enabled(Level::Debug)
    }

    pub fn is_info(&self) -> bool {
        self.enabled(Level::Info)
    }

    pub fn is_warn(&self) -> bool {
        self.enabled(Level::Warn)
    }

    pub fn trace(&self, message: &str, fields: impl Into<Fields>) {
        self.emit(Level::Trace, message, fields);
    }

    pub fn debug(&self, message: &str, fields: impl Into<Fields>) {
        self.emit(Level::Debug, message, fields);
    }

    pub fn info(&self, message: &str, fields: impl Into<Fields>) {
        self.emit(Level::Info, message, fields);
    }

    pub fn warn(&self, message: &str, fields: impl Into<Fields>) {
        self.emit(Level::Warn, message, fields);
    }

    pub fn error(&self, message: &str, fields: impl Into<Fields>) {
        self.emit(Level::Error, message, fields);
    }

    /// Emit at Fatal with `args` interpolated into `template`.
    ///
    /// No fields are merged into fatal records. The process keeps running.
    pub fn fatal(&self, template: &str, args: &[Value]) {
        self.emit_interpolated(Level::Fatal, template, args);
    }

    /// Numeric dispatch.
    ///
    /// Codes 0 through 4 treat `args` as flat field pairs, code 5 goes to
    /// [`fatal`](Self::fatal), and any other code (including the `Disabled`
    /// code) emits at Info with `args` interpolated into the message.
    pub fn log(&self, code: i64, message: &str, args: &[Value]) {
        match Level::from_code(code) {
            Some(Level::Fatal) => self.fatal(message, args),
            Some(
                level @ (Level::Trace | Level::Debug | Level::Info | Level::Warn | Level::Error),
            ) => self.emit(level, message, Fields::from_pairs(args)),
            _ => self.emit_interpolated(Level::Info, message, args),
        }
    }

    /// Emit a structured record at `level`.
    pub fn emit(&self, level: Level, message: &str, fields: impl Into<Fields>) {
        if !self.enabled(level) {
            return;
        }
        let mut record_fields = Fields::new().with(TRACE_ID_KEY, self.trace_id.as_str());
        record_fields.merge(&self.static_fields);
        record_fields.merge(&fields.into());
        self.send(level, message.to_string(), record_fields);
    }

    fn emit_interpolated(&self, level: Level, template: &str, args: &[Value]) {
        if !self.enabled(level) {
            return;
        }
        self.send(level, interpolate(template, args), Fields::new());
    }

    fn send(&self, level: Level, message: String, fields: Fields) {
        self.sink.emit(&Record {
            level,
            target: self.name.clone(),
            time: self.time_format.now(),
            message,
            fields,
        });
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("trace_id", &self.trace_id)
            .field("level", &self.level)
            .field("static_fields", &self.static_fields)
            .finish_non_exhaustive()
    }
}

#[doc(hidden)]
#[macro_export]
macro_rules! __store_log {
    ($level:expr, $logger:expr, $msg:expr $(, $key:ident = $value:expr)* $(,)?) => {{
        let logger = &$logger;
        let level = $level;
        if logger.enabled(level) {
            logger.emit(
                level,
                $msg,
                $crate::logging::Fields::new()$(.with(stringify!($key), $value))*,
            );
        }
    }};
}

/// Trace-level record with `key = value` fields.
///
/// ```
/// use store_common::logging::{Logger, LoggerConfig, NoopSink};
/// use std::sync::Arc;
///
/// let logger = Logger::with_config("wal", &LoggerConfig::new().with_sink(Arc::new(NoopSink)));
/// store_common::store_trace!(logger, "SEGMENT_ROTATED", segment = 4, bytes = 1024);
/// ```
#[macro_export]
macro_rules! store_trace {
    ($logger:expr, $($rest:tt)+) => {
        $crate::__store_log!($crate::logging::Level::Trace, $logger, $($rest)+)
    };
}

#[macro_export]
macro_rules! store_debug {
    ($logger:expr, $($rest:tt)+) => {
        $crate::__store_log!($crate::logging::Level::Debug, $logger, $($rest)+)
    };
}

#[macro_export]
macro_rules! store_info {
    ($logger:expr, $($rest:tt)+) => {
        $crate::__store_log!($crate::logging::Level::Info, $logger, $($rest)+)
    };
}

#[macro_export]
macro_rules! store_warn {
    ($logger:expr, $($rest:tt)+) => {
        $crate::__store_log!($crate::logging::Level::Warn, $logger, $($rest)+)
    };
}

#[macro_export]
macro_rules! store_error {
    ($logger:expr, $($rest:tt)+) => {
        $crate::__store_log!($crate::logging::Level::Error, $logger, $($rest)+)
    };
}
