//! Line header: level tag and timestamp
//!
//! Layout is `[LEVEL] DD.MM.YYYY HH:MM:SS[.NNNNNN]: `, every part optional.

use super::ansi;
use super::formatter::FormatterConfig;
use super::log_level::LogLevel;
use chrono::{DateTime, Datelike, Local, Timelike, Utc};

/// Append `value` in decimal, zero-padded on the left to at least `width` digits.
///
/// Values wider than `width` are written in full.
///
/// ```
/// use rust_color_logger::core::header::write_padded;
///
/// let mut buf = Vec::new();
/// write_padded(&mut buf, 7, 2);
/// buf.push(b' ');
/// write_padded(&mut buf, 12345, 4);
/// assert_eq!(buf, b"07 12345");
/// ```
pub fn write_padded(buf: &mut Vec<u8>, mut value: u64, width: usize) {
    let mut digits = [0u8; 20];
    let mut pos = digits.len();
    loop {
        pos -= 1;
        digits[pos] = b'0' + (value % 10) as u8;
        value /= 10;
        if value == 0 {
            break;
        }
    }
    let len = digits.len() - pos;
    buf.extend(std::iter::repeat(b'0').take(width.saturating_sub(len)));
    buf.extend_from_slice(&digits[pos..]);
}

/// Append the header for `level` at instant `now` to `buf`.
///
/// `now` is converted to local time unless `config.use_utc` is set. Nothing
/// is written when no part of the header is enabled.
pub fn write_header(buf: &mut Vec<u8>, level: LogLevel, config: &FormatterConfig, now: DateTime<Utc>) {
    if !config.show_level_tag && !config.shows_timestamp() {
        return;
    }

    // Last separator space, replaced by ": " at the end.
    let mut last_space = None;

    if config.show_level_tag {
        if config.color {
            ansi::push_painted(buf, &ansi::bold_fg(level.color_code()), level.tag());
            last_space = Some(buf.len() - ansi::RESET.len() - 1);
        } else {
            buf.extend_from_slice(level.tag().as_bytes());
            last_space = Some(buf.len() - 1);
        }
    }

    if config.color {
        let body = if level == LogLevel::Error {
            colored::Color::Red
        } else {
            colored::Color::BrightBlack
        };
        buf.extend_from_slice(ansi::fg(body).as_bytes());
    }

    if config.shows_timestamp() {
        if config.use_utc {
            write_timestamp(buf, &now, config);
        } else {
            write_timestamp(buf, &now.with_timezone(&Local), config);
        }
        last_space = Some(buf.len() - 1);
    }

    if let Some(idx) = last_space {
        buf.remove(idx);
    }
    buf.extend_from_slice(b": ");
    if config.color {
        buf.extend_from_slice(ansi::RESET.as_bytes());
    }
}

fn write_timestamp<T: Datelike + Timelike>(buf: &mut Vec<u8>, now: &T, config: &FormatterConfig) {
    if config.show_date {
        write_padded(buf, u64::from(now.day()), 2);
        buf.push(b'.');
        write_padded(buf, u64::from(now.month()), 2);
        buf.push(b'.');
        // Years before the common era have no DD.MM.YYYY rendering; clamp at zero.
        write_padded(buf, now.year().max(0) as u64, 4);
        buf.push(b' ');
    }
    if config.show_time {
        write_padded(buf, u64::from(now.hour()), 2);
        buf.push(b':');
        write_padded(buf, u64::from(now.minute()), 2);
        buf.push(b':');
        write_padded(buf, u64::from(now.second()), 2);
        if config.show_microseconds {
            buf.push(b'.');
            write_padded(buf, u64::from(now.nanosecond() / 1_000), 6);
        }
        buf.push(b' ');
    }
}
