use crate::context::Context;
use crate::error::{Error, Result};
use crate::parse_result::ParsedResult;
use crate::parser::Parser;
use std::ffi::OsString;

/// Parses the arguments of the current process, skipping the executable path.
///
/// # Error
/// Returns an `InvalidUnicode` error if an argument is not valid UTF-8.
pub fn parse_env_args(context: &Context) -> Result<ParsedResult> {
    parse_os_args(context, std::env::args_os().skip(1))
}

/// Parses the given platform strings, each one must be valid UTF-8.
pub fn parse_os_args<I>(context: &Context, args: I) -> Result<ParsedResult>
where
    I: IntoIterator,
    I::Item: Into<OsString>,
{
    let args = args
        .into_iter()
        .map(|arg| {
            arg.into().into_string().map_err(|raw| Error::InvalidUnicode {
                value: raw.to_string_lossy().into_owned(),
            })
        })
        .collect::<Result<Vec<String>>>()?;

    Parser.parse(context, args)
}

/// Split the given value `&str` into command-line args.
///
/// Values are separated by whitespaces, a double quoted section is kept as a single
/// value and `\"` is a literal double quote.
///
/// # Example
/// ```rust
/// use argspec::command_line::split_args;
///
/// let args = split_args("copy \"my file.txt\" --verbose");
/// assert_eq!(args, vec!["copy", "my file.txt", "--verbose"]);
/// ```
pub fn split_args(value: &str) -> Vec<String> {
    const DOUBLE_QUOTE: char = '"';
    const QUOTE_ESCAPE: char = '\\';

    let mut result = Vec::new();
    let mut iterator = value.chars().peekable();
    let mut buffer = String::new();
    let mut in_quotes = false;
    let mut quoted = false;

    while let Some(next_char) = iterator.next() {
        match next_char {
            QUOTE_ESCAPE if iterator.peek() == Some(&DOUBLE_QUOTE) => {
                buffer.push(DOUBLE_QUOTE);
                iterator.next();
            }
            DOUBLE_QUOTE => {
                in_quotes = !in_quotes;
                quoted = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if !buffer.is_empty() || quoted {
                    result.push(std::mem::take(&mut buffer));
                }
                quoted = false;
            }
            c => buffer.push(c),
        }
    }

    if !buffer.is_empty() || quoted {
        result.push(buffer);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::argument::ArgumentSpec;
    use crate::command::CommandSpec;
    use crate::error::ErrorKind;

    fn context() -> Context {
        let spec = CommandSpec::new("app")
            .arg(ArgumentSpec::positional("source"))
            .unwrap();

        Context::new(spec).unwrap()
    }

    #[test]
    fn parse_os_args_test() {
        let result = parse_os_args(&context(), vec![OsString::from("src")]).unwrap();
        assert_eq!(result.get_str("source"), Some("src"));
    }

    #[cfg(unix)]
    #[test]
    fn parse_os_args_invalid_unicode_test() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let error = parse_os_args(&context(), vec![OsStr::from_bytes(b"bad\xff")]).unwrap_err();

        assert_eq!(error.kind(), ErrorKind::InvalidValue);
        assert_eq!(error.exit_code(), 2);
        assert_eq!(
            error.to_string(),
            "argument is not valid UTF-8: 'bad\u{FFFD}'"
        );
    }

    #[test]
    fn split_args_test1() {
        let args = split_args("create file \"hello_world.txt\"");
        assert_eq!(args, vec!["create", "file", "hello_world.txt"]);
    }

    #[test]
    fn split_args_test2() {
        let args = split_args("echo --times 5 \\\"bla\\\"");
        assert_eq!(args, vec!["echo", "--times", "5", "\"bla\""]);
    }

    #[test]
    fn split_args_test3() {
        let args = split_args("  a   \"b c\"  \"\" ");
        assert_eq!(args, vec!["a", "b c", ""]);
        assert!(split_args("   ").is_empty());
    }
}
