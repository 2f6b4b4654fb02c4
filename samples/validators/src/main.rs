mod cli;
mod logging;

use argspec::{command_line, Context};
use cli::{ValidatorsArgs, PROGRAM};
use logging::init_logging;

fn main() -> anyhow::Result<()> {
    init_logging();

    let context = Context::new(cli::command_spec()?)?;

    let result = command_line::parse_env_args(&context).unwrap_or_else(|error| error.exit(PROGRAM));
    log::debug!("parsed values: {}", serde_json::to_string(&result)?);

    let args = ValidatorsArgs::from_result(&result)?;
    println!("{}", serde_json::to_string_pretty(&args)?);
    Ok(())
}
