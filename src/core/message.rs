//! Message bodies built from several displayable parts

use std::fmt;

/// Displays each part in order with no separator.
///
/// Rendering is deferred until the logger has passed the level gate, so a
/// disabled level never formats the parts.
///
/// ```
/// use rust_color_logger::Concat;
///
/// let port = 8080;
/// assert_eq!(Concat(&[&"listening on :", &port]).to_string(), "listening on :8080");
/// ```
#[derive(Clone, Copy)]
pub struct Concat<'a>(pub &'a [&'a dyn fmt::Display]);

impl fmt::Display for Concat<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for part in self.0 {
            fmt::Display::fmt(part, f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Concat<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Concat({:?})", self.to_string())
    }
}
