//! getflix: a personal movie catalog in the terminal.
//!
//! Run without arguments for the numbered menu, or use a subcommand such as
//! `getflix list` or `getflix site`. See `getflix --help`.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
