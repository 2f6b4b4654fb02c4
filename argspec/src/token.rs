/// Represents a classified command-line token.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Token {
    /// A known option alias.
    Opt(String),
    /// A value attached to the preceding option, as in `--size=1MB` or `-s1MB`.
    Attached(String),
    /// A value.
    Arg(String),
    /// End of options.
    EOO,
    /// The built-in help.
    Help,
}
