//! Bounded string writer

use core::fmt::{self, Write};

use heapless::String;

/// `fmt::Write` adapter that drops everything past the buffer capacity
///
/// heapless rejects a whole `write_str` chunk that does not fit; this
/// writer keeps the characters that fit instead, so an oversized value
/// shows up cut off rather than missing.
pub struct Truncating<'a, const N: usize> {
    buf: &'a mut String<N>,
    truncated: bool,
}

impl<'a, const N: usize> Truncating<'a, N> {
    pub fn new(buf: &'a mut String<N>) -> Self {
        Self {
            buf,
            truncated: false,
        }
    }

    /// Whether any input was dropped
    pub fn truncated(&self) -> bool {
        self.truncated
    }
}

impl<const N: usize> Write for Truncating<'_, N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for ch in s.chars() {
            if self.buf.push(ch).is_err() {
                self.truncated = true;
                break;
            }
        }
        // Always Ok, an Err stops write_fmt before later arguments
        Ok(())
    }
}

/// Format `args` into a fresh bounded string, cutting at `N` characters
pub fn bounded<const N: usize>(args: fmt::Arguments<'_>) -> String<N> {
    let mut out = String::new();
    let _ = Truncating::new(&mut out).write_fmt(args);
    out
}
