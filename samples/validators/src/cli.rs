use argspec::{converter, ArgumentSpec, Arity, CommandSpec, ParsedResult};
use serde::Serialize;
use std::path::PathBuf;

pub const PROGRAM: &str = "validators";

/// Declares the arguments of the program.
pub fn command_spec() -> argspec::Result<CommandSpec> {
    CommandSpec::new(PROGRAM)
        .description("Checks that the given paths exist before processing them.")
        .arg(
            ArgumentSpec::positional("source_directory")
                .converter(converter::directory())
                .help("This directory will be scanned recursively"),
        )?
        .arg(
            ArgumentSpec::positional("files")
                .arity(Arity::OneOrMore)
                .converter(converter::file())
                .help("One or more files to process"),
        )
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct ValidatorsArgs {
    pub files: Vec<PathBuf>,
    pub source_directory: PathBuf,
}

impl ValidatorsArgs {
    pub fn from_result(result: &ParsedResult) -> argspec::Result<Self> {
        Ok(ValidatorsArgs {
            files: result.get_as("files")?,
            source_directory: result.get_as("source_directory")?,
        })
    }
}
