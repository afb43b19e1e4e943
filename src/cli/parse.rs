use super::CliFlags;

#[derive(Debug)]
pub enum ParseError {
    InvalidNumber(String),
    MissingValue(String),
    UnknownArg(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidNumber(s) => write!(f, "Invalid number: {}", s),
            ParseError::MissingValue(s) => write!(f, "Missing value for: {}", s),
            ParseError::UnknownArg(s) => write!(f, "Unknown argument: {}", s),
        }
    }
}

impl std::error::Error for ParseError {}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-l" | "--length" => {
                flags.length = Some(numeric_value(args, &mut i)?);
            }
            "-n" | "--number" => {
                flags.number = Some(numeric_value(args, &mut i)?);
            }
            arg => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

fn numeric_value(args: &[String], i: &mut usize) -> Result<usize, ParseError> {
    let flag = &args[*i];
    *i += 1;
    if *i >= args.len() {
        return Err(ParseError::MissingValue(flag.clone()));
    }
    args[*i]
        .parse()
        .map_err(|_| ParseError::InvalidNumber(args[*i].clone()))
}
