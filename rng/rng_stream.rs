//! RNG stream binary - outputs raw OS random bytes to stdout for
//! statistical testing.
//!
//! Pipe to test suites:
//!   ./rng_stream | dieharder -a -g 200
//!   ./rng_stream | RNG_test stdin -tlmax 1TB

use std::io::{self, Write};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        eprintln!("Usage: rng_stream");
        eprintln!();
        eprintln!("Outputs random bytes from the operating system source to stdout.");
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  rng_stream | dieharder -a -g 200");
        eprintln!("  rng_stream | RNG_test stdin -tlmax 1TB");
        std::process::exit(0);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut buf = [0u8; 8192];

    loop {
        if getrandom::fill(&mut buf).is_err() {
            eprintln!("rng_stream: operating system random source failed");
            std::process::exit(1);
        }

        if out.write_all(&buf).is_err() {
            break;
        }
    }
}
