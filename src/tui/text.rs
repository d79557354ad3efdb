//! TUI screen drawing and help text.

use entropass::{Config, StrengthInfo};

use crate::terminal::{box_bottom, box_line, box_line_center, box_opt, box_top, clear, meter_bar};

fn check(on: bool) -> &'static str {
    if on { "[x]" } else { "[ ]" }
}

/// Redraw the whole interactive screen.
pub fn draw_screen(
    config: &Config,
    password: &str,
    strength: &StrengthInfo,
    selected: usize,
    notice: Option<&str>,
) {
    clear();

    box_top("Entropass");
    if password.is_empty() {
        box_line_center("(enable at least one character class)");
    } else {
        box_line_center(password);
    }
    box_bottom();
    println!();

    box_top("Strength");
    meter_bar(strength);
    box_line(&format!(
        "{:.1} bits ({}) - score {:.0}/100",
        strength.entropy, strength.level, strength.score
    ));
    box_bottom();
    println!();

    let rows = [
        format!("Length                     < {:>2} >", config.length),
        format!("Uppercase (A-Z)            {}", check(config.include_uppercase)),
        format!("Lowercase (a-z)            {}", check(config.include_lowercase)),
        format!("Numbers (0-9)              {}", check(config.include_numbers)),
        format!("Symbols (!@#$...)          {}", check(config.include_symbols)),
        format!("Exclude similar (I O l 1 0) {}", check(config.exclude_similar)),
    ];

    box_top("Options");
    for (i, row) in rows.iter().enumerate() {
        let marker = if i == selected { ">" } else { " " };
        box_line(&format!("{marker} {row}"));
    }
    box_bottom();
    println!();

    println!(
        "[Up/Down] select  [Left/Right] adjust  [Space] toggle  [r] new  [c] copy  [q] quit"
    );

    if let Some(notice) = notice {
        println!();
        println!("{notice}");
    }
}

pub fn print_help() {
    box_top("Entropass");
    box_line_center("Password generator with entropy strength meter");
    box_line("");
    box_line("MODES:");
    box_line("  1) Interactive: Run without arguments. Opens a TUI screen to");
    box_line("     toggle character classes, watch the strength meter, and");
    box_line("     copy the result.");
    box_line("  2) Client: Pass flags directly (e.g., -l 20 -n 5) to generate");
    box_line("     passwords without the screen.");
    box_line("");
    box_line("USAGE:");
    box_line("  entropass [OPTIONS]");
    box_line("");
    box_line("OPTIONS:");
    box_opt("  -l, --length <N>", "Characters per password, 8-64 (default: 16)");
    box_opt("  -n, --number <N>", "How many to generate (default: 1)");
    box_opt("  -b, --board", "Copy to clipboard; cleared after 30 s");
    box_opt("      --no-upper", "Drop uppercase letters");
    box_opt("      --no-lower", "Drop lowercase letters");
    box_opt("      --no-digits", "Drop digits");
    box_opt("      --no-symbols", "Drop symbols");
    box_opt("      --similar", "Allow ambiguous characters (I O l 1 0)");
    box_opt("  -q, --quiet", "Passwords only; no summary or warnings");
    box_opt("  -h, --help", "Show this help");
    box_opt("  -v, --version", "Show version");
    box_bottom();
}
