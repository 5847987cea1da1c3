//! ANSI SGR escape sequences
//!
//! Maps symbolic colors (from `colored`) to escape sequences. The sequences are
//! produced unconditionally: whether a line is colorized is decided by the
//! logger configuration, not by terminal detection.

use colored::Color;

/// Sequence that ends every colorized run.
pub const RESET: &str = "\x1b[0m";

const BOLD: &str = "1";

/// Escape sequence selecting `color` as foreground.
pub fn fg(color: Color) -> String {
    format!("\x1b[{}m", color.to_fg_str())
}

/// Escape sequence selecting bold text with `color` as foreground.
pub fn bold_fg(color: Color) -> String {
    format!("\x1b[{};{}m", BOLD, color.to_fg_str())
}

/// Append `text` wrapped in `open` and [`RESET`].
pub(crate) fn push_painted(buf: &mut Vec<u8>, open: &str, text: &str) {
    buf.extend_from_slice(open.as_bytes());
    buf.extend_from_slice(text.as_bytes());
    buf.extend_from_slice(RESET.as_bytes());
}
