//! Record sinks.
//!
//! A sink is the structured backend a [`Logger`](super::Logger) hands its
//! records to. Delivery and flushing are the sink's business; the logger
//! never observes a failure.

use std::io::Write;
use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::{Map, Value};

use super::fields::Fields;
use super::level::Level;

/// One emitted log record.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub level: Level,
    /// Name of the emitting logger.
    pub target: String,
    /// Emission time, rendered per the logger's [`TimeFormat`](super::TimeFormat).
    pub time: Value,
    pub message: String,
    pub fields: Fields,
}

/// Structured logging backend.
///
/// Implementations must be `Send + Sync`; one sink is typically shared by
/// many loggers through an `Arc`.
pub trait Sink: Send + Sync {
    fn emit(&self, record: &Record);

    fn flush(&self) {}
}

impl<S: Sink + ?Sized> Sink for Arc<S> {
    fn emit(&self, record: &Record) {
        (**self).emit(record)
    }

    fn flush(&self) {
        (**self).flush()
    }
}

/// Forwards records to the `log` facade.
///
/// The logger name becomes the `log` target and fields are appended to the
/// message as `key=value` pairs.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogCrateSink;

impl LogCrateSink {
    pub fn new() -> Self {
        Self
    }
}

impl Sink for LogCrateSink {
    fn emit(&self, record: &Record) {
        let Some(level) = record.level.to_log() else {
            return;
        };
        let marker = if record.level == Level::Fatal { "FATAL " } else { "" };
        if record.fields.is_empty() {
            log::log!(target: record.target.as_str(), level, "{}{}", marker, record.message);
        } else {
            log::log!(
                target: record.target.as_str(),
                level,
                "{}{} {}",
                marker,
                record.message,
                record.fields
            );
        }
    }

    fn flush(&self) {
        log::logger().flush();
    }
}

/// Keys every [`JsonSink`] object carries for the record itself.
pub const ENVELOPE_KEYS: [&str; 3] = ["level", "time", "message"];

/// Prefix given to fields that collide with an envelope key.
pub const COLLIDING_FIELD_PREFIX: &str = "fields.";

/// Writes one JSON object per record, newline-delimited.
///
/// Object layout: `level`, `time`, `message`, then the record fields.
/// A field named like an envelope key is written as `fields.<key>`. Write
/// errors are dropped.
pub struct JsonSink<W: Write + Send> {
    writer: Mutex<W>,
}

impl<W: Write + Send> JsonSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Consume the sink and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    fn render(&self, record: &Record) -> Map<String, Value> {
        let mut object = Map::new();
        object.insert("level".to_string(), Value::from(record.level.as_str()));
        object.insert("time".to_string(), record.time.clone());
        object.insert("message".to_string(), Value::from(record.message.clone()));
        for (key, value) in record.fields.iter() {
            let key = if ENVELOPE_KEYS.contains(&key.as_str()) {
                format!("{}{}", COLLIDING_FIELD_PREFIX, key)
            } else {
                key.clone()
            };
            object.insert(key, value.clone());
        }
        object
    }
}

impl<W: Write + Send> Sink for JsonSink<W> {
    fn emit(&self, record: &Record) {
        let object = Value::Object(self.render(record));
        let mut writer = self.writer.lock();
        if serde_json::to_writer(&mut *writer, &object).is_ok() {
            let _ = writer.write_all(b"\n");
        }
    }

    fn flush(&self) {
        let _ = self.writer.lock().flush();
    }
}

impl<W: Write + Send> std::fmt::Debug for JsonSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonSink").finish_non_exhaustive()
    }
}

/// Keeps every record in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<Record>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the captured records.
    pub fn records(&self) -> Vec<Record> {
        self.records.lock().clone()
    }

    /// Remove and return the captured records.
    pub fn take(&self) -> Vec<Record> {
        std::mem::take(&mut *self.records.lock())
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl Sink for MemorySink {
    fn emit(&self, record: &Record) {
        self.records.lock().push(record.clone());
    }
}

/// Discards every record.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl Sink for NoopSink {
    #[inline]
    fn emit(&self, _record: &Record) {}
}
