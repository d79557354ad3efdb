//! Password generation and strength estimation.

pub mod charset;
mod generate;
mod strength;

pub use generate::{generate, generate_with};
pub use strength::{StrengthInfo, StrengthLevel, estimate};
