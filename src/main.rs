use std::env;
use std::io::Write;
use std::process::ExitCode;

use log::info;
use zeroize::Zeroize;

use randsecret::cli::{self, CliFlags};
use randsecret::{SecretAssembler, SecretError};

fn main() -> ExitCode {
    env_logger::init();

    // Secrets must not end up in core dumps.
    #[cfg(target_os = "linux")]
    unsafe {
        libc::prctl(libc::PR_SET_DUMPABLE, 0)
    };

    let args: Vec<String> = env::args().collect();
    let flags = match cli::parse(&args) {
        Ok(flags) => flags,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    if flags.help {
        cli::print_help();
        return ExitCode::SUCCESS;
    }
    if flags.version {
        cli::print_version();
        return ExitCode::SUCCESS;
    }

    match run(&flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(flags: &CliFlags) -> Result<(), SecretError> {
    let mut assembler = match flags.length {
        Some(length) => SecretAssembler::new(length)?,
        None => SecretAssembler::default(),
    };
    let count = flags.number.unwrap_or(1);

    info!(
        "generating {} secret(s) of length {}",
        count,
        assembler.length()
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut line = Vec::with_capacity(assembler.length() + 1);

    for _ in 0..count {
        let mut secret = assembler.next_secret()?;
        line.extend_from_slice(secret.as_bytes());
        line.push(b'\n');
        let _ = out.write_all(&line);
        line.zeroize();
        secret.zeroize();
    }
    let _ = out.flush();

    if !flags.quiet {
        eprintln!("{} secret(s) of length {}", count, assembler.length());
    }
    Ok(())
}
