//! CLI mode: flag parsing and non-interactive generation.

mod context;
mod flags;
mod parse;
pub mod prompts;
pub mod quiet;

pub use context::{Context, Done};
pub use flags::CliFlags;
pub use parse::parse;

/// Run CLI mode with the raw process arguments.
pub fn run(args: &[String]) {
    let mut ctx = match Context::new(args) {
        Ok(ctx) => ctx,
        Err(e) => {
            prompts::error(&e);
            eprintln!("Try 'entropass --help' for usage.");
            std::process::exit(2);
        }
    };

    // Err(Done) is an early exit (help/version), not a failure.
    let _ = ctx.run();
}
