//! CLI context - bundles config, flags, and clipboard state.

use std::thread;
use std::time::Duration;

use zeroize::Zeroize;

use entropass::clipboard::CLEAR_DELAY;
use entropass::pass::charset;
use entropass::{Clipboard, Config, Error, estimate, generate};

use super::{CliFlags, prompts, quiet};
use crate::terminal::{box_bottom, box_line, box_top};
use crate::tui::print_help;

/// Early exit - not an error, just done.
pub struct Done;

/// Application context for CLI mode.
pub struct Context {
    pub config: Config,
    pub count: usize,
    pub clipboard: Option<Clipboard>,
    pub flags: CliFlags,
}

impl Context {
    /// Create a new context by parsing command-line arguments.
    /// Returns Err with the error message if parsing fails.
    pub fn new(args: &[String]) -> Result<Self, String> {
        let flags = super::parse(args).map_err(|e| e.to_string())?;

        Ok(Self {
            config: Config::default(),
            count: 1,
            clipboard: None,
            flags,
        })
    }

    /// Run CLI. Returns `Err(Done)` for early exits, `Ok(())` on completion.
    pub fn run(&mut self) -> Result<(), Done> {
        self.handle_info_flags()?;
        quiet::set(self.flags.quiet);
        self.apply_flags();
        self.generate_output();
        Ok(())
    }

    fn handle_info_flags(&self) -> Result<(), Done> {
        if self.flags.help {
            print_help();
            return Err(Done);
        }
        if self.flags.version {
            println!("entropass {}", env!("CARGO_PKG_VERSION"));
            return Err(Done);
        }
        Ok(())
    }

    /// Apply CLI flags to the generation config.
    fn apply_flags(&mut self) {
        if let Some(requested) = self.flags.length {
            let clamped = Config::clamp_length(requested);
            if clamped != requested {
                prompts::length_clamped(requested, clamped);
            }
            self.config.length = clamped;
        }

        if let Some(number) = self.flags.number {
            self.count = number.max(1);
        }

        self.config.include_uppercase = !self.flags.no_upper;
        self.config.include_lowercase = !self.flags.no_lower;
        self.config.include_numbers = !self.flags.no_digits;
        self.config.include_symbols = !self.flags.no_symbols;
        self.config.exclude_similar = !self.flags.similar;

        if self.flags.clipboard {
            match Clipboard::new() {
                Ok(c) => self.clipboard = Some(c),
                Err(e) => {
                    prompts::warn(&e.to_string());
                    if !prompts::clipboard_fallback_prompt() {
                        std::process::exit(0);
                    }
                }
            }
        }
    }

    /// Generate passwords and handle output.
    fn generate_output(&mut self) {
        let mut batch = String::new();
        for _ in 0..self.count {
            match generate(&self.config) {
                Ok(mut pass) => {
                    batch.push_str(&pass);
                    batch.push('\n');
                    pass.zeroize();
                }
                Err(e @ (Error::NoClassesEnabled | Error::LengthOutOfRange(_))) => {
                    batch.zeroize();
                    prompts::error(&e.to_string());
                    std::process::exit(2);
                }
                Err(e) => {
                    batch.zeroize();
                    prompts::error(&e.to_string());
                    std::process::exit(1);
                }
            }
        }

        if let Some(ref mut clipboard) = self.clipboard {
            match clipboard.copy(batch.trim_end_matches('\n')) {
                Ok(()) => {
                    prompts::clipboard_copied(CLEAR_DELAY.as_secs());
                    // The clear runs on a background thread; stay alive
                    // long enough for it to fire.
                    thread::sleep(CLEAR_DELAY + Duration::from_millis(200));
                    prompts::clipboard_cleared();
                }
                Err(e) => prompts::error(&e.to_string()),
            }
        } else {
            print!("{batch}");
            if !self.flags.quiet {
                self.print_summary(batch.lines().next().unwrap_or(""));
            }
        }

        batch.zeroize();
    }

    /// Entropy summary box (strength is a function of length and classes,
    /// so any password from this batch works as the sample).
    fn print_summary(&self, sample: &str) {
        let info = estimate(sample, &self.config);
        let pool = charset::build(&self.config).len();

        println!();
        box_top("Strength");
        box_line(&format!("{:.1} bits ({})", info.entropy, info.level));
        box_line(&format!(
            "Score: {:.0}/100 | Charset: {} chars | Length: {}",
            info.score, pool, self.config.length
        ));
        box_bottom();
    }
}
