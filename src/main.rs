use std::env;

mod cli;
mod terminal;
mod tui;

fn main() {
    // Passwords transit process memory; keep them out of core dumps.
    unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0) };

    let args: Vec<String> = env::args().collect();

    match args.len() {
        1 => tui::run(),
        _ => cli::run(&args),
    }
}
