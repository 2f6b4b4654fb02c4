//! # Argspec
//!
//! Argspec is a declarative command-line argument parser.
//!
//! A command is declared as a set of positional and optional arguments, each one with
//! its aliases, number of values, default, allowed values and a converter that turns
//! the raw strings into typed values.
//!
//! Parsing either produces a result with exactly one value per declared argument,
//! or an error that describes the first problem found in the input.
//!
//! ## Parsing the arguments
//! ```no_run
//! use argspec::{ArgumentSpec, Arity, CommandSpec, Context};
//! use argspec::{command_line, converter};
//!
//! fn main() -> argspec::Result<()> {
//!     // Declare all the arguments of the command
//!     let spec = CommandSpec::new("file-processor")
//!         .description("Process some files")
//!         .arg(ArgumentSpec::positional("source").help("source directory"))?
//!         .arg(ArgumentSpec::option("files").alias("--files").arity(Arity::ZeroOrMore))?
//!         .arg(ArgumentSpec::flag("verbose").alias("-v").alias("--verbose"))?
//!         .arg(ArgumentSpec::option("size")
//!             .alias("-s")
//!             .alias("--size")
//!             .converter(converter::size())
//!             .default("1MB")
//!             .help("maximum size (default: {default})"))?;
//!
//!     // The context contains the command and the parsing settings
//!     let context = Context::new(spec)?;
//!
//!     // Parse the process `args` skipping the executable path, prints the error and exit on failure
//!     let result = command_line::parse_env_args(&context)
//!         .unwrap_or_else(|error| error.exit("file-processor"));
//!
//!     if result.get_flag("verbose") {
//!         println!("size: {:?}", result.get_int("size"));
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Logging
//! Declaration and parsing steps are logged through the `log` facade at `debug` level and
//! each conversion at `trace` level. A logger must be installed before parsing to see them.

mod arity;
pub use arity::*;

mod value;
pub use value::*;

mod error;
pub use error::*;

mod argument;
pub use argument::*;

mod command;
pub use command::*;

mod context;
pub use context::*;

mod token;
pub use token::*;

mod tokenizer;
pub use tokenizer::*;

mod parser;
pub use parser::*;

mod parse_result;
pub use parse_result::*;

/// Converters that turn raw values into typed values.
pub mod converter;

/// Suggestions for mistyped options.
pub mod suggestion;

/// Utilities for parse and split command-line arguments.
pub mod command_line;

/// Help and usage messages.
pub mod help;

#[cfg(feature = "serde")]
mod serde;
