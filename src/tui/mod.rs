//! Interactive TUI mode.
//!
//! One screen: current password, strength meter, and the option rows.
//! Any option change regenerates immediately, so the meter always
//! reflects what is on screen.

mod text;

pub use text::print_help;

use crossterm::event::{Event, KeyCode, KeyModifiers, read};
use zeroize::Zeroize;

use entropass::clipboard::CLEAR_DELAY;
use entropass::config::{MAX_LENGTH, MIN_LENGTH};
use entropass::{Clipboard, Config, Error, StrengthInfo, estimate, generate};

use crate::terminal::{RawModeGuard, clear, reset_terminal};

const ROW_LENGTH: usize = 0;
const ROW_UPPER: usize = 1;
const ROW_LOWER: usize = 2;
const ROW_NUMBERS: usize = 3;
const ROW_SYMBOLS: usize = 4;
const ROW_SIMILAR: usize = 5;
const ROWS: usize = 6;

struct App {
    config: Config,
    password: String,
    strength: StrengthInfo,
    selected: usize,
    clipboard: Option<Clipboard>,
    notice: Option<String>,
}

impl App {
    fn new() -> Self {
        let config = Config::default();
        let mut app = Self {
            config,
            password: String::new(),
            strength: estimate("", &config),
            selected: ROW_LENGTH,
            clipboard: None,
            notice: None,
        };
        app.regenerate();
        app
    }

    fn regenerate(&mut self) {
        self.password.zeroize();
        self.password = match generate(&self.config) {
            Ok(pass) => pass,
            // No classes enabled: a normal TUI state, shown as an empty
            // password with copy disabled.
            Err(Error::NoClassesEnabled) => String::new(),
            Err(e) => {
                self.notice = Some(e.to_string());
                String::new()
            }
        };
        self.strength = estimate(&self.password, &self.config);
    }

    fn adjust_length(&mut self, delta: isize) {
        let length = self.config.length.saturating_add_signed(delta);
        self.config.length = length.clamp(MIN_LENGTH, MAX_LENGTH);
        self.regenerate();
    }

    fn toggle(&mut self, row: usize) {
        match row {
            ROW_UPPER => self.config.include_uppercase = !self.config.include_uppercase,
            ROW_LOWER => self.config.include_lowercase = !self.config.include_lowercase,
            ROW_NUMBERS => self.config.include_numbers = !self.config.include_numbers,
            ROW_SYMBOLS => self.config.include_symbols = !self.config.include_symbols,
            ROW_SIMILAR => self.config.exclude_similar = !self.config.exclude_similar,
            _ => return,
        }
        self.regenerate();
    }

    fn copy(&mut self) {
        if self.password.is_empty() {
            self.notice = Some("Nothing to copy: enable at least one character class".to_owned());
            return;
        }

        if self.clipboard.is_none() {
            match Clipboard::new() {
                Ok(clipboard) => self.clipboard = Some(clipboard),
                Err(e) => {
                    self.notice = Some(e.to_string());
                    return;
                }
            }
        }

        let Some(clipboard) = self.clipboard.as_mut() else {
            return;
        };
        let result = clipboard.copy(&self.password);
        self.notice = Some(match result {
            Ok(()) => format!("Copied - clipboard clears in {} s", CLEAR_DELAY.as_secs()),
            Err(e) => e.to_string(),
        });
    }
}

/// Run TUI interactive mode.
pub fn run() {
    reset_terminal();
    let mut app = App::new();

    loop {
        text::draw_screen(
            &app.config,
            &app.password,
            &app.strength,
            app.selected,
            app.notice.as_deref(),
        );
        app.notice = None;

        let Some((code, modifiers)) = read_key() else {
            break;
        };

        match code {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                app.password.zeroize();
                reset_terminal();
                clear();
                std::process::exit(0);
            }
            KeyCode::Char('q') | KeyCode::Esc => break,
            KeyCode::Up => {
                app.selected = app.selected.checked_sub(1).unwrap_or(ROWS - 1);
            }
            KeyCode::Down => app.selected = (app.selected + 1) % ROWS,
            KeyCode::Left if app.selected == ROW_LENGTH => app.adjust_length(-1),
            KeyCode::Right if app.selected == ROW_LENGTH => app.adjust_length(1),
            KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') | KeyCode::Enter => {
                app.toggle(app.selected);
            }
            KeyCode::Char('r') => {
                app.regenerate();
                app.notice = Some("New password generated".to_owned());
            }
            KeyCode::Char('c') => app.copy(),
            _ => {}
        }
    }

    app.password.zeroize();
    reset_terminal();
    clear();
}

/// Block for the next key press, raw mode scoped to the read.
fn read_key() -> Option<(KeyCode, KeyModifiers)> {
    let _guard = RawModeGuard::new().ok()?;
    loop {
        match read() {
            Ok(Event::Key(key)) => return Some((key.code, key.modifiers)),
            Ok(_) => continue,
            Err(_) => return None,
        }
    }
}
