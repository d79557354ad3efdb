//! Character set building for password generation.

use crate::config::Config;

// Reduced pools omit visually ambiguous characters; the SIMILAR_*
// constants hold what gets re-added when exclude_similar is off.
const UPPERCASE: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ";
const SIMILAR_UPPERCASE: &[u8] = b"IO";
const LOWERCASE: &[u8] = b"abcdefghijkmnopqrstuvwxyz";
const SIMILAR_LOWERCASE: &[u8] = b"l";
const NUMBERS: &[u8] = b"23456789";
const SIMILAR_NUMBERS: &[u8] = b"10";
const SYMBOLS: &[u8] = b"!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Build the effective character pool for the enabled classes.
///
/// Concatenation order is fixed (upper, lower, numbers, symbols); it only
/// affects internal indexing, never the output distribution. Returns an
/// empty pool when no class is enabled.
pub fn build(config: &Config) -> Vec<u8> {
    let mut chars: Vec<u8> = Vec::new();

    if config.include_uppercase {
        chars.extend_from_slice(UPPERCASE);
        if !config.exclude_similar {
            chars.extend_from_slice(SIMILAR_UPPERCASE);
        }
    }

    if config.include_lowercase {
        chars.extend_from_slice(LOWERCASE);
        if !config.exclude_similar {
            chars.extend_from_slice(SIMILAR_LOWERCASE);
        }
    }

    if config.include_numbers {
        chars.extend_from_slice(NUMBERS);
        if !config.exclude_similar {
            chars.extend_from_slice(SIMILAR_NUMBERS);
        }
    }

    if config.include_symbols {
        chars.extend_from_slice(SYMBOLS);
    }

    chars
}

/// Idealized charset size for entropy calculation.
///
/// Uses the full per-class sizes (26/26/10/symbol count) regardless of
/// `exclude_similar`, so reported entropy slightly overstates the true
/// value when similar characters are excluded. Intentional approximation;
/// keep in sync with [`crate::pass::estimate`].
pub fn ideal_size(config: &Config) -> usize {
    let mut size = 0;
    if config.include_uppercase {
        size += 26;
    }
    if config.include_lowercase {
        size += 26;
    }
    if config.include_numbers {
        size += 10;
    }
    if config.include_symbols {
        size += SYMBOLS.len();
    }
    size
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIMILAR: &[u8] = b"IOl10";

    fn all_classes(exclude_similar: bool) -> Config {
        Config { exclude_similar, ..Config::default() }
    }

    #[test]
    fn reduced_pool_has_no_similar_characters() {
        let chars = build(&all_classes(true));
        assert_eq!(chars.len(), 24 + 25 + 8 + 26);
        for b in SIMILAR {
            assert!(!chars.contains(b), "found similar char {}", *b as char);
        }
    }

    #[test]
    fn full_pool_re_adds_similar_characters() {
        let chars = build(&all_classes(false));
        assert_eq!(chars.len(), 26 + 26 + 10 + 26);
        for b in SIMILAR {
            assert!(chars.contains(b), "missing char {}", *b as char);
        }
    }

    #[test]
    fn pool_is_all_distinct_ascii() {
        for exclude in [true, false] {
            let chars = build(&all_classes(exclude));
            assert!(chars.iter().all(u8::is_ascii_graphic));
            let mut sorted = chars.clone();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(sorted.len(), chars.len());
        }
    }

    #[test]
    fn disabled_classes_contribute_nothing() {
        let config = Config {
            include_uppercase: false,
            include_symbols: false,
            ..Config::default()
        };
        let chars = build(&config);
        assert!(chars.iter().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit()));
    }

    #[test]
    fn no_classes_builds_empty_pool() {
        let config = Config {
            include_uppercase: false,
            include_lowercase: false,
            include_numbers: false,
            include_symbols: false,
            ..Config::default()
        };
        assert!(build(&config).is_empty());
        assert_eq!(ideal_size(&config), 0);
    }

    #[test]
    fn ideal_size_ignores_exclude_similar() {
        assert_eq!(ideal_size(&all_classes(true)), 88);
        assert_eq!(ideal_size(&all_classes(false)), 88);

        let lower_only = Config {
            include_uppercase: false,
            include_numbers: false,
            include_symbols: false,
            ..Config::default()
        };
        assert_eq!(ideal_size(&lower_only), 26);
    }
}
