//! Non-interactive command line front end.

mod flags;
mod parse;

pub use flags::CliFlags;
pub use parse::{ParseError, parse};

use crate::secret::{MAX_LENGTH, MIN_LENGTH, pool};

pub fn print_help() {
    println!("Usage: randsecret [OPTIONS]");
    println!();
    println!("Generates random secrets containing at least one digit, lowercase,");
    println!("uppercase and special character each.");
    println!();
    println!("Options:");
    println!(
        "  -l, --length <N>  Secret length, {}-{} (default {})",
        MIN_LENGTH,
        MAX_LENGTH,
        pool::COMBINED.len()
    );
    println!("  -n, --number <N>  Number of secrets to generate (default 1)");
    println!("  -q, --quiet       Suppress the summary line on stderr");
    println!("  -h, --help        Show this help");
    println!("  -v, --version     Show version");
}

pub fn print_version() {
    println!("randsecret {}", env!("CARGO_PKG_VERSION"));
}
