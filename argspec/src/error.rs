use std::fmt::{Display, Formatter};
use std::io::Write;
use thiserror::Error;

/// A convenient `Result` type.
pub type Result<T> = std::result::Result<T, Error>;

/// Exit code used for any parsing failure.
pub const USAGE_EXIT_CODE: i32 = 2;

/// An error returned by a `Converter` when a raw value is rejected.
///
/// The message is shown to the user verbatim, next to the argument name.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    /// Constructs a new `ValidationError` with the given message.
    pub fn new<S: Into<String>>(message: S) -> Self {
        ValidationError {
            message: message.into(),
        }
    }

    /// Returns the message of this error.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// An error in a command-line operation.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum Error {
    /// The command declaration itself is invalid, e.g. a duplicated alias.
    #[error("invalid command declaration: {0}")]
    Configuration(String),

    /// A required argument or one of its values is missing.
    #[error("argument {argument}: {message}")]
    MissingArgument { argument: String, message: String },

    /// An option token that matches no declared alias.
    #[error("unrecognized argument: '{token}'{}", suggestion_hint(.suggestion))]
    UnknownArgument {
        token: String,
        suggestion: Option<String>,
    },

    /// More positional values than declared slots.
    #[error("unexpected argument{}: {}", plural(.tokens), quoted(.tokens))]
    UnexpectedArgument { tokens: Vec<String> },

    /// A value rejected by a choice check or a converter.
    #[error("argument {argument}: invalid value '{value}': {message}")]
    InvalidValue {
        argument: String,
        value: String,
        message: String,
    },

    /// A command-line argument that is not valid UTF-8, shown with the invalid bytes replaced.
    #[error("argument is not valid UTF-8: '{value}'")]
    InvalidUnicode { value: String },

    /// Help was requested, contains the rendered help message.
    #[error("{0}")]
    DisplayHelp(String),
}

impl Error {
    /// Returns the `ErrorKind` of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Configuration(_) => ErrorKind::Configuration,
            Error::MissingArgument { .. } => ErrorKind::MissingArgument,
            Error::UnknownArgument { .. } => ErrorKind::UnknownArgument,
            Error::UnexpectedArgument { .. } => ErrorKind::UnexpectedArgument,
            Error::InvalidValue { .. } | Error::InvalidUnicode { .. } => ErrorKind::InvalidValue,
            Error::DisplayHelp(_) => ErrorKind::DisplayHelp,
        }
    }

    /// Returns the process exit code for this error, `0` for help.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::DisplayHelp(_) => 0,
            _ => USAGE_EXIT_CODE,
        }
    }

    /// Prints this error and exits the process.
    ///
    /// Help goes to `stdout`, everything else is written as a single line to `stderr`.
    pub fn exit(&self, program: &str) -> ! {
        match self {
            Error::DisplayHelp(help) => {
                let mut stdout = std::io::stdout();
                let _ = write!(stdout, "{}", help);
                let _ = stdout.flush();
            }
            _ => eprintln!("{}: error: {}", program, self),
        }

        std::process::exit(self.exit_code())
    }
}

/// Types of errors.
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq)]
pub enum ErrorKind {
    /// The command declaration is invalid.
    Configuration,
    /// A required argument is missing.
    MissingArgument,
    /// The option is not declared.
    UnknownArgument,
    /// There are more values than expected.
    UnexpectedArgument,
    /// A value is invalid.
    InvalidValue,
    /// Help was requested.
    DisplayHelp,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Configuration => write!(f, "configuration error"),
            ErrorKind::MissingArgument => write!(f, "missing argument"),
            ErrorKind::UnknownArgument => write!(f, "unknown argument"),
            ErrorKind::UnexpectedArgument => write!(f, "unexpected argument"),
            ErrorKind::InvalidValue => write!(f, "invalid value"),
            ErrorKind::DisplayHelp => write!(f, "display help"),
        }
    }
}

fn suggestion_hint(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(s) => format!(", did you mean '{}'?", s),
        None => String::new(),
    }
}

fn plural(tokens: &[String]) -> &'static str {
    if tokens.len() > 1 {
        "s"
    } else {
        ""
    }
}

fn quoted(tokens: &[String]) -> String {
    tokens
        .iter()
        .map(|s| format!("'{}'", s))
        .collect::<Vec<String>>()
        .join(" ")
}
