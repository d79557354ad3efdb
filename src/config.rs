//! Password generation configuration.

use crate::error::Error;

/// Shortest accepted password length.
pub const MIN_LENGTH: usize = 8;
/// Longest accepted password length.
pub const MAX_LENGTH: usize = 64;

/// Immutable per-call generation options.
///
/// Owned and mutated by the caller (TUI or CLI); the core functions only
/// ever read it. At least one class flag must be set for generation to
/// produce output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
    /// Drop visually ambiguous characters (I, O, l, 1, 0) from the pools.
    pub exclude_similar: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            length: 16,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: true,
            exclude_similar: true,
        }
    }
}

impl Config {
    /// Check that the length is within the accepted range.
    ///
    /// Shells clamp out-of-range input before calling the core; the core
    /// still rejects rather than silently accepting arbitrary values.
    pub fn validate(&self) -> Result<(), Error> {
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&self.length) {
            return Err(Error::LengthOutOfRange(self.length));
        }
        Ok(())
    }

    /// True if any character class is enabled.
    pub fn any_class_enabled(&self) -> bool {
        self.include_uppercase
            || self.include_lowercase
            || self.include_numbers
            || self.include_symbols
    }

    /// Clamp a requested length into the accepted range (shell helper).
    pub fn clamp_length(length: usize) -> usize {
        length.clamp(MIN_LENGTH, MAX_LENGTH)
    }
}
