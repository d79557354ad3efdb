use super::CliFlags;

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("invalid number: {0}")]
    InvalidNumber(String),
    #[error("missing value for {0}")]
    MissingValue(String),
    #[error("unknown argument: {0}")]
    UnknownArg(String),
}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-b" | "--board" => flags.clipboard = true,
            "--no-upper" => flags.no_upper = true,
            "--no-lower" => flags.no_lower = true,
            "--no-digits" => flags.no_digits = true,
            "--no-symbols" => flags.no_symbols = true,
            "--similar" => flags.similar = true,
            "-l" | "--length" => {
                i += 1;
                flags.length = Some(parse_value(args, i)?);
            }
            "-n" | "--number" => {
                i += 1;
                flags.number = Some(parse_value(args, i)?);
            }
            arg => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

fn parse_value(args: &[String], i: usize) -> Result<usize, ParseError> {
    let Some(raw) = args.get(i) else {
        return Err(ParseError::MissingValue(args[i - 1].clone()));
    };
    raw.parse()
        .map_err(|_| ParseError::InvalidNumber(raw.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("entropass")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn parses_length_and_number() {
        let flags = parse(&args(&["-l", "20", "-n", "5"])).unwrap();
        assert_eq!(flags.length, Some(20));
        assert_eq!(flags.number, Some(5));
    }

    #[test]
    fn parses_class_toggles() {
        let flags = parse(&args(&["--no-upper", "--no-symbols", "--similar"])).unwrap();
        assert!(flags.no_upper);
        assert!(!flags.no_lower);
        assert!(!flags.no_digits);
        assert!(flags.no_symbols);
        assert!(flags.similar);
    }

    #[test]
    fn short_and_long_forms_match() {
        let short = parse(&args(&["-b", "-q"])).unwrap();
        let long = parse(&args(&["--board", "--quiet"])).unwrap();
        assert!(short.clipboard && long.clipboard);
        assert!(short.quiet && long.quiet);
    }

    #[test]
    fn rejects_unknown_argument() {
        assert!(matches!(
            parse(&args(&["--bogus"])),
            Err(ParseError::UnknownArg(_))
        ));
    }

    #[test]
    fn rejects_non_numeric_length() {
        assert!(matches!(
            parse(&args(&["-l", "lots"])),
            Err(ParseError::InvalidNumber(_))
        ));
    }

    #[test]
    fn rejects_trailing_value_flag() {
        assert!(matches!(
            parse(&args(&["-n"])),
            Err(ParseError::MissingValue(_))
        ));
    }
}
