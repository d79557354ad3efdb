//! Password generation.

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

use super::charset;
use crate::config::Config;
use crate::error::Error;

/// Generate a password using the OS-backed CSPRNG.
pub fn generate(config: &Config) -> Result<String, Error> {
    generate_with(config, &mut OsRng)
}

/// Generate a password from an injected random source.
///
/// Each character is drawn independently: one u32 from the source,
/// reduced modulo the charset size. Against a 32-bit draw and a charset
/// of at most 88 characters the residual modulo bias is negligible for
/// password generation. Deterministic given a fixed source, which is
/// what makes scripted-RNG tests possible.
pub fn generate_with<R>(config: &Config, rng: &mut R) -> Result<String, Error>
where
    R: RngCore + CryptoRng,
{
    config.validate()?;

    let chars = charset::build(config);
    if chars.is_empty() {
        return Err(Error::NoClassesEnabled);
    }

    // One u32 per character, filled in a single request so a failing
    // source is caught before any output exists.
    let mut raw = vec![0u8; config.length * 4];
    rng.try_fill_bytes(&mut raw)?;

    let bytes: Vec<u8> = raw
        .chunks_exact(4)
        .map(|c| {
            let sample = u32::from_le_bytes([c[0], c[1], c[2], c[3]]) as usize;
            chars[sample % chars.len()]
        })
        .collect();
    raw.zeroize();

    // Safety: charset is all ASCII
    Ok(unsafe { String::from_utf8_unchecked(bytes) })
}
