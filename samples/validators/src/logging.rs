use env_logger::Builder;
use log::LevelFilter;

/// Logs warnings and errors, `RUST_LOG` can raise the level to see the parsing steps.
pub fn init_logging() {
    Builder::new()
        .filter_level(LevelFilter::Warn)
        .format_timestamp(None)
        .parse_default_env()
        .init();
}
