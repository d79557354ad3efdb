//! Password generation and strength estimation.
//!
//! The core is two pure functions: [`generate`], which draws uniformly
//! random characters from a charset assembled from the enabled character
//! classes using an OS-backed CSPRNG, and [`estimate`], which maps the
//! resulting entropy to a strength level and score. Everything stateful
//! (option editing, clipboard lifecycle, rendering) lives in the binary
//! shell on top of this crate.

pub mod clipboard;
pub mod config;
pub mod error;
pub mod pass;

pub use clipboard::Clipboard;
pub use config::Config;
pub use error::Error;
pub use pass::{StrengthInfo, StrengthLevel, estimate, generate, generate_with};
