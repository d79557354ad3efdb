//! Error taxonomy for generation and clipboard handling.

use crate::config::{MAX_LENGTH, MIN_LENGTH};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// All four class flags are off; there is nothing to draw from.
    #[error("no character classes enabled")]
    NoClassesEnabled,

    /// Requested length falls outside the accepted range.
    #[error("password length {0} outside accepted range {min}-{max}", min = MIN_LENGTH, max = MAX_LENGTH)]
    LengthOutOfRange(usize),

    /// The secure random source failed. Never falls back to a weaker
    /// generator; the caller decides how to surface this.
    #[error("secure random source unavailable: {0}")]
    RandomSource(#[from] rand::Error),

    /// Clipboard write or clear failed. Non-fatal: generation state is
    /// unaffected.
    #[error("clipboard error: {0}")]
    Clipboard(String),
}
