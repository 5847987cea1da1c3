//! Property-based tests for rust_color_logger using proptest

use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use rust_color_logger::core::header::write_padded;
use rust_color_logger::prelude::*;

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Error),
        Just(LogLevel::Warn),
        Just(LogLevel::Info),
        Just(LogLevel::Debug),
        Just(LogLevel::Trace),
    ]
}

/// Position in ERROR > WARN > INFO > DEBUG > TRACE, most severe first.
fn severity_rank(level: LogLevel) -> usize {
    LogLevel::ALL
        .iter()
        .position(|l| *l == level)
        .expect("level listed in ALL")
}

fn capture_logger(threshold: LogLevel, format: FormatterConfig) -> (Logger, MemorySink) {
    let sink = MemorySink::new();
    let logger = Logger::builder()
        .threshold(threshold)
        .sink(sink.clone())
        .formatter(format)
        .build();
    (logger, sink)
}

// ============================================================================
// LogLevel Tests
// ============================================================================

proptest! {
    /// Test that the gate follows the fixed severity order
    #[test]
    fn test_gate_matches_severity_order(level in any_level(), threshold in any_level()) {
        let (logger, _) = capture_logger(threshold, FormatterConfig::plain());
        let expected = severity_rank(level) <= severity_rank(threshold);
        prop_assert_eq!(logger.is_enabled(level), expected);
    }

    /// Test that only enabled levels reach the sink
    #[test]
    fn test_gate_controls_sink_writes(level in any_level(), threshold in any_level()) {
        let (logger, sink) = capture_logger(threshold, FormatterConfig::plain());
        logger.log(level, "message");
        prop_assert_eq!(sink.write_calls(), usize::from(logger.is_enabled(level)));
    }

    /// Test that any verbosity clamps into the valid range
    #[test]
    fn test_verbosity_clamps(verbosity in any::<i64>()) {
        let level = LogLevel::from_verbosity(verbosity);
        let expected = verbosity.clamp(LogLevel::MIN_VERBOSITY, LogLevel::MAX_VERBOSITY);
        prop_assert_eq!(level.verbosity(), expected);
    }

    /// Test that a numeric config threshold clamps like set_verbosity
    #[test]
    fn test_config_verbosity_clamps(verbosity in any::<i64>()) {
        let json = format!(r#"{{"threshold": {}}}"#, verbosity);
        let config = LoggerConfig::from_json(&json).unwrap();
        prop_assert_eq!(config.threshold, LogLevel::from_verbosity(verbosity));
    }

    /// Test that LogLevel string conversions roundtrip correctly
    #[test]
    fn test_log_level_str_roundtrip(level in any_level(), lower in any::<bool>()) {
        let text = if lower { level.to_str().to_lowercase() } else { level.to_string() };
        let parsed: LogLevel = text.parse().unwrap();
        prop_assert_eq!(parsed, level);
    }
}

// ============================================================================
// Header Tests
// ============================================================================

proptest! {
    /// Test that padding never truncates and always reaches the width
    #[test]
    fn test_write_padded(value in any::<u64>(), width in 0usize..24) {
        let mut buf = Vec::new();
        write_padded(&mut buf, value, width);
        let text = String::from_utf8(buf).unwrap();

        let digits = value.to_string();
        prop_assert_eq!(text.len(), width.max(digits.len()));
        prop_assert!(text.bytes().all(|b| b.is_ascii_digit()));
        prop_assert_eq!(text.parse::<u64>().unwrap(), value);
    }

    /// Test that the UTC header matches chrono's own rendering
    #[test]
    fn test_utc_header_matches_chrono(
        secs in 0i64..253_402_300_799, // up to 9999-12-31T23:59:59Z
        micros in 0u32..1_000_000,
        show_micros in any::<bool>(),
    ) {
        let at = Utc.timestamp_opt(secs, micros * 1_000).single().unwrap();
        let format = FormatterConfig::plain()
            .with_show_level_tag(false)
            .with_show_microseconds(show_micros);
        let (logger, _) = capture_logger(LogLevel::Info, format);

        let expected = if show_micros {
            at.format("%d.%m.%Y %H:%M:%S%.6f: ").to_string()
        } else {
            at.format("%d.%m.%Y %H:%M:%S: ").to_string()
        };
        prop_assert_eq!(String::from_utf8(logger.header_at(LogLevel::Info, at)).unwrap(), expected);
    }
}

// ============================================================================
// Body Tests
// ============================================================================

proptest! {
    /// Test that color off never produces escape bytes
    #[test]
    fn test_plain_output_has_no_escapes(level in any_level(), message in "[^\x1b\n]*") {
        let (logger, sink) = capture_logger(LogLevel::Trace, FormatterConfig::plain());
        logger.write(level, &message).unwrap();

        let bytes = sink.bytes();
        let expected_tail = format!("{}\n", message);
        prop_assert!(!bytes.contains(&0x1b));
        prop_assert!(sink.contents().ends_with(&expected_tail));
    }

    /// Test that every line ends with exactly one newline and keeps the body
    #[test]
    fn test_body_rendering(level in any_level(), message in "[^\n]*", color in any::<bool>()) {
        let format = FormatterConfig::new().with_color(color).with_show_header(false);
        let (logger, sink) = capture_logger(LogLevel::Trace, format);
        logger.write(level, &message).unwrap();

        let expected = if color && level == LogLevel::Error {
            format!("\x1b[31m{}\x1b[0m\n", message)
        } else {
            format!("{}\n", message)
        };
        prop_assert_eq!(sink.contents(), expected);
    }

    /// Test that formatted and concatenated bodies render the same text
    #[test]
    fn test_formatted_matches_concatenated(word in "[a-z]{0,12}", number in any::<i32>()) {
        let format = FormatterConfig::plain().with_show_header(false);
        let (logger, sink) = capture_logger(LogLevel::Trace, format);

        logger.info(format_args!("{}={}", word, number));
        logger.info(Concat(&[&word, &"=", &number]));

        let lines = sink.lines();
        prop_assert_eq!(lines.len(), 2);
        prop_assert_eq!(&lines[0], &lines[1]);
    }
}
