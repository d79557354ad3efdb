//! Entropy-based strength estimation.

use crate::config::Config;
use crate::pass::charset;

/// Discrete strength tier, ordered weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StrengthLevel {
    Weak,
    Fair,
    Good,
    Strong,
    Unbreakable,
}

impl StrengthLevel {
    pub fn label(self) -> &'static str {
        match self {
            StrengthLevel::Weak => "Weak",
            StrengthLevel::Fair => "Fair",
            StrengthLevel::Good => "Good",
            StrengthLevel::Strong => "Strong",
            StrengthLevel::Unbreakable => "Unbreakable",
        }
    }

    /// ANSI color bound one-to-one with the level.
    pub fn color(self) -> &'static str {
        match self {
            StrengthLevel::Weak => "\x1b[38;5;9m",
            StrengthLevel::Fair => "\x1b[38;5;208m",
            StrengthLevel::Good => "\x1b[38;5;11m",
            StrengthLevel::Strong => "\x1b[38;5;10m",
            StrengthLevel::Unbreakable => "\x1b[38;5;14m",
        }
    }
}

impl std::fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Derived strength descriptor. Recomputed whole on every change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrengthInfo {
    pub level: StrengthLevel,
    /// Normalized score in [0, 100].
    pub score: f64,
    /// Display color for the level.
    pub color: &'static str,
    /// Estimated entropy in bits.
    pub entropy: f64,
}

impl StrengthInfo {
    fn at(level: StrengthLevel, score: f64, entropy: f64) -> Self {
        Self { level, score, color: level.color(), entropy }
    }
}

/// Estimate password strength from its length and the configured classes.
///
/// The charset size here is the idealized per-class sum (see
/// [`charset::ideal_size`]), not the similar-reduced pool the generator
/// actually drew from, so the reported bits slightly overstate true
/// entropy when `exclude_similar` is on. Intentional approximation.
pub fn estimate(password: &str, config: &Config) -> StrengthInfo {
    if password.is_empty() {
        return StrengthInfo::at(StrengthLevel::Weak, 0.0, 0.0);
    }

    let size = charset::ideal_size(config);
    let entropy = if size == 0 {
        0.0
    } else {
        password.chars().count() as f64 * (size as f64).log2()
    };

    let (level, score) = if entropy < 40.0 {
        (StrengthLevel::Weak, (entropy / 40.0 * 25.0).min(25.0))
    } else if entropy < 60.0 {
        (StrengthLevel::Fair, 25.0 + (entropy - 40.0) / 20.0 * 25.0)
    } else if entropy < 80.0 {
        (StrengthLevel::Good, 50.0 + (entropy - 60.0) / 20.0 * 25.0)
    } else if entropy < 100.0 {
        (StrengthLevel::Strong, 75.0 + (entropy - 80.0) / 20.0 * 20.0)
    } else {
        (StrengthLevel::Unbreakable, 100.0)
    };

    StrengthInfo::at(level, score, entropy)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn only_lowercase() -> Config {
        Config {
            include_uppercase: false,
            include_lowercase: true,
            include_numbers: false,
            include_symbols: false,
            ..Config::default()
        }
    }

    fn only_numbers() -> Config {
        Config {
            include_uppercase: false,
            include_lowercase: false,
            include_numbers: true,
            include_symbols: false,
            ..Config::default()
        }
    }

    #[test]
    fn empty_password_short_circuits_to_weak() {
        let info = estimate("", &Config::default());
        assert_eq!(info.level, StrengthLevel::Weak);
        assert_eq!(info.score, 0.0);
        assert_eq!(info.entropy, 0.0);
    }

    #[test]
    fn no_classes_means_zero_entropy() {
        let config = Config {
            include_uppercase: false,
            include_lowercase: false,
            include_numbers: false,
            include_symbols: false,
            ..Config::default()
        };
        let info = estimate("whatever", &config);
        assert_eq!(info.entropy, 0.0);
        assert_eq!(info.level, StrengthLevel::Weak);
    }

    #[test]
    fn sixteen_lowercase_is_good() {
        // 16 * log2(26) = 75.207 bits -> Good, score 50 + 15.207/20*25.
        let info = estimate(&"a".repeat(16), &only_lowercase());
        assert_eq!(info.level, StrengthLevel::Good);
        assert!((info.entropy - 75.207).abs() < 0.01);
        assert!((info.score - 69.009).abs() < 0.01);
    }

    #[test]
    fn twenty_of_all_classes_is_unbreakable() {
        // 20 * log2(88) = 129.2 bits, past the 100-bit ceiling.
        let info = estimate(&"x".repeat(20), &Config::default());
        assert_eq!(info.level, StrengthLevel::Unbreakable);
        assert_eq!(info.score, 100.0);
        assert!(info.entropy > 100.0);
    }

    #[test]
    fn tiers_climb_with_length() {
        // Numbers only (ideal size 10, 3.32 bits/char) walks every tier.
        let ladder = [
            (8, StrengthLevel::Weak),
            (16, StrengthLevel::Fair),
            (20, StrengthLevel::Good),
            (28, StrengthLevel::Strong),
            (31, StrengthLevel::Unbreakable),
        ];
        for (length, expected) in ladder {
            let info = estimate(&"7".repeat(length), &only_numbers());
            assert_eq!(info.level, expected, "length {length}");
        }
    }

    #[test]
    fn entropy_strictly_increases_with_length() {
        let config = only_lowercase();
        let mut last = 0.0;
        for length in 1..=64 {
            let info = estimate(&"a".repeat(length), &config);
            assert!(info.entropy > last);
            last = info.entropy;
        }
    }

    #[test]
    fn entropy_strictly_increases_with_charset() {
        let password = "abcdefgh";
        let mut config = only_lowercase();
        let mut last = estimate(password, &config).entropy;

        config.include_numbers = true;
        let with_numbers = estimate(password, &config).entropy;
        assert!(with_numbers > last);
        last = with_numbers;

        config.include_uppercase = true;
        let with_upper = estimate(password, &config).entropy;
        assert!(with_upper > last);
        last = with_upper;

        config.include_symbols = true;
        assert!(estimate(password, &config).entropy > last);
    }

    #[test]
    fn score_stays_normalized() {
        for length in 1..=80 {
            let info = estimate(&"Q".repeat(length), &Config::default());
            assert!((0.0..=100.0).contains(&info.score), "length {length}");
        }
    }

    #[test]
    fn color_tracks_level() {
        let weak = estimate("", &Config::default());
        assert_eq!(weak.color, StrengthLevel::Weak.color());
        let top = estimate(&"x".repeat(64), &Config::default());
        assert_eq!(top.color, StrengthLevel::Unbreakable.color());
    }
}
