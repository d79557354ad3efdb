//! Terminal output utilities.
//!
//! Box drawing, strength meter, ANSI helpers.

use std::io::{self, Write};

use crossterm::terminal::disable_raw_mode;

use entropass::StrengthInfo;

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const DIM: &str = "\x1b[90m";

// ============================================================================
// Terminal Control
// ============================================================================

/// Clear screen and move cursor to top-left.
pub fn clear() {
    print!("\x1b[2J\x1b[3J\x1b[H");
    flush();
}

/// Flush stdout.
pub fn flush() {
    let _ = io::stdout().flush();
}

/// Reset terminal to sane state (fixes staggered text issues).
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("\x1b[0m");
    flush();
}

// ============================================================================
// Box Drawing (74 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 74;

/// Print box top with optional title: ┌─ Title ───────────────────────────┐
pub fn box_top(title: &str) {
    if title.is_empty() {
        println!("┌{}┐", "─".repeat(BOX_WIDTH - 2));
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = BOX_WIDTH - 2 - title_part.chars().count();
        println!("┌{}{}┐", title_part, "─".repeat(remaining));
    }
}

/// Print box content line: │ content                                        │
pub fn box_line(content: &str) {
    let inner_width = BOX_WIDTH - 4;
    let display_len = content.chars().count();

    if display_len <= inner_width {
        let padding = inner_width - display_len;
        println!("│ {}{} │", content, " ".repeat(padding));
    } else {
        println!("│ {} │", content);
    }
}

/// Print centered box content line: │          content          │
pub fn box_line_center(content: &str) {
    let inner_width = BOX_WIDTH - 4;
    let display_len = content.chars().count();

    if display_len <= inner_width {
        let total_padding = inner_width - display_len;
        let left_pad = total_padding / 2;
        let right_pad = total_padding - left_pad;
        println!(
            "│ {}{}{} │",
            " ".repeat(left_pad),
            content,
            " ".repeat(right_pad)
        );
    } else {
        println!("│ {} │", content);
    }
}

/// Print box bottom: └───────────────────────────────────────────────────────┘
pub fn box_bottom() {
    println!("└{}┘", "─".repeat(BOX_WIDTH - 2));
}

/// Print a two-column option line inside a box.
pub fn box_opt(flag: &str, desc: &str) {
    box_line(&format!("{flag:<24}{desc}"));
}

// ============================================================================
// Strength Meter
// ============================================================================

/// Print the score-proportional meter bar as one box line. Rendered by
/// hand because the ANSI codes would throw off `box_line` padding.
pub fn meter_bar(info: &StrengthInfo) {
    let inner_width = BOX_WIDTH - 4;
    let filled = ((info.score / 100.0) * inner_width as f64).round() as usize;
    let filled = filled.min(inner_width);

    print!("│ {}", info.color);
    for _ in 0..filled {
        print!("█");
    }
    print!("{DIM}");
    for _ in filled..inner_width {
        print!("░");
    }
    println!("{RESET} │");
}
