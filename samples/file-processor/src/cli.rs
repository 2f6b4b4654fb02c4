use argspec::{converter, ArgumentSpec, Arity, CommandSpec, ParsedResult};
use serde::Serialize;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

pub const PROGRAM: &str = "file-processor";

/// Declares the arguments of the program.
pub fn command_spec() -> argspec::Result<CommandSpec> {
    CommandSpec::new(PROGRAM)
        .description("Processes files, showing the common kinds of command-line arguments.")
        .arg(ArgumentSpec::positional("source").help("Required positional argument"))?
        .arg(
            ArgumentSpec::positional("optional_destination")
                .arity(Arity::ZeroOrOne)
                .default("default_value")
                .help("Optional positional argument with default (default: {default})"),
        )?
        .arg(
            ArgumentSpec::option("files")
                .alias("--files")
                .arity(Arity::ZeroOrMore)
                .help("Zero or more arguments (default: {default})"),
        )?
        .arg(
            ArgumentSpec::option("required_files")
                .alias("--required-files")
                .arity(Arity::OneOrMore)
                .help("One or more arguments (default: {default})"),
        )?
        .arg(
            ArgumentSpec::flag("verbose")
                .alias("-v")
                .alias("--verbose")
                .help("Flag argument (default: {default})"),
        )?
        .arg(
            ArgumentSpec::option("mode")
                .alias("-m")
                .alias("--mode")
                .choices([Mode::Auto, Mode::Manual])
                .default(Mode::Auto)
                .help("Limited choices (default: {default})"),
        )?
        .arg(
            ArgumentSpec::option("size")
                .alias("-s")
                .alias("--size")
                .converter(converter::size())
                .default("1MB")
                .help("Size in B, KB, MB or GB (default: {default})"),
        )
}

/// Processing mode.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Auto,
    Manual,
}

impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Auto => write!(f, "auto"),
            Mode::Manual => write!(f, "manual"),
        }
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(Mode::Auto),
            "manual" => Ok(Mode::Manual),
            _ => Err(format!("invalid mode `{}`", s)),
        }
    }
}

/// The parsed arguments, fields are sorted by name as they are printed.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct FileProcessorArgs {
    pub files: Vec<String>,
    pub mode: Mode,
    pub optional_destination: Option<String>,
    pub required_files: Option<Vec<String>>,
    pub size: i64,
    pub source: String,
    pub verbose: bool,
}

impl FileProcessorArgs {
    pub fn from_result(result: &ParsedResult) -> argspec::Result<Self> {
        let mode = result.get_as::<String>("mode")?;

        Ok(FileProcessorArgs {
            files: result.get_as("files")?,
            mode: mode.parse().map_err(argspec::Error::Configuration)?,
            optional_destination: result.get_as("optional_destination")?,
            required_files: result.get_as("required_files")?,
            size: result.get_as("size")?,
            source: result.get_as("source")?,
            verbose: result.get_as("verbose")?,
        })
    }
}
