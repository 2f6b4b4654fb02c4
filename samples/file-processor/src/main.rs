mod cli;
mod logging;

use argspec::{command_line, Context};
use cli::{FileProcessorArgs, PROGRAM};
use logging::{init_logging, set_verbose};

fn main() -> anyhow::Result<()> {
    init_logging();

    let context = Context::new(cli::command_spec()?)?;

    let result = command_line::parse_env_args(&context).unwrap_or_else(|error| error.exit(PROGRAM));
    let args = FileProcessorArgs::from_result(&result)?;

    set_verbose(args.verbose);
    log::debug!("parsed values: {}", serde_json::to_string(&result)?);

    println!("{}", serde_json::to_string_pretty(&args)?);
    Ok(())
}
