//! Centralized warning and prompt messages for CLI output.

use std::io::Write;

use super::quiet;

// ANSI color codes
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Print a warning message to stderr (yellow) - suppressed in quiet mode
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Print an error message to stderr (red) - NOT suppressed (errors are always shown)
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

/// Warn that a requested length was clamped into the accepted range.
pub fn length_clamped(requested: usize, clamped: usize) {
    warn(&format!(
        "Warning: length {requested} out of range, using {clamped}"
    ));
}

/// Print clipboard copied confirmation with the pending clear note.
pub fn clipboard_copied(clear_secs: u64) {
    if !quiet::enabled() {
        println!("Copied to clipboard. Clearing in {clear_secs} s - Ctrl+C to exit and keep it.");
    }
}

/// Print clipboard cleared confirmation - suppressed in quiet mode
pub fn clipboard_cleared() {
    if !quiet::enabled() {
        println!("Clipboard cleared.");
    }
}

/// Prompt user when clipboard is unavailable. Returns true to fallback to terminal, false to abort.
/// In quiet/non-interactive mode, silently falls back to terminal.
pub fn clipboard_fallback_prompt() -> bool {
    if quiet::skip_prompt() {
        return true; // Fallback silently
    }

    eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_ok() {
        let input = input.trim().to_lowercase();
        if input.is_empty() || input == "y" || input == "yes" {
            eprintln!();
            return true;
        }
    } else {
        return true; // Fallback on read error
    }

    eprintln!("\nAborted.");
    false
}
