//! Touches the process default configuration, so it lives in its own test
//! binary.

use std::sync::Arc;

use serde_json::json;
use store_common::iteration::{drain, IterSource, Never};
use store_common::logging::{default_config, set_default_config, Level, Logger, LoggerConfig, MemorySink};

#[test]
fn test_default_config_feeds_convenience_constructors() {
    let sink = Arc::new(MemorySink::new());
    let before = Logger::new("early");

    set_default_config(LoggerConfig::new().with_level(Level::Debug).with_sink(sink.clone()));
    assert_eq!(default_config().level, Level::Debug);

    let logger = Logger::new("late");
    logger.trace("filtered", ());
    logger.debug("kept", [("k", 1)]);
    // built before the swap, so it still targets the old sink
    before.info("elsewhere", ());

    let mut rows = IterSource::new(vec![Ok::<_, std::io::Error>(1u8)].into_iter());
    drain(&mut rows, &Never).unwrap();

    let records = sink.take();
    let messages: Vec<&str> = records.iter().map(|r| r.message.as_str()).collect();
    assert_eq!(messages, vec!["kept", "DRAIN_START", "DRAIN_COMPLETE"]);
    assert_eq!(records[0].fields.get("traceID"), Some(&json!("store::late")));
    assert_eq!(records[1].target, "drain");
}
