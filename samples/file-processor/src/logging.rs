use env_logger::{Builder, DEFAULT_FILTER_ENV};
use log::LevelFilter;

/// Starts logging before the arguments are parsed.
///
/// Only warnings are shown until `set_verbose` is called, unless `RUST_LOG` sets the level.
pub fn init_logging() {
    Builder::new()
        .filter_level(LevelFilter::Debug)
        .format_timestamp(None)
        .parse_default_env()
        .init();

    if !level_from_env() {
        log::set_max_level(level_filter(false));
    }
}

/// Shows the debug messages once `--verbose` is known, `RUST_LOG` takes precedence.
pub fn set_verbose(verbose: bool) {
    if !level_from_env() {
        log::set_max_level(level_filter(verbose));
    }
}

fn level_from_env() -> bool {
    std::env::var_os(DEFAULT_FILTER_ENV).is_some()
}

fn level_filter(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_filter_test() {
        assert_eq!(level_filter(true), LevelFilter::Debug);
        assert_eq!(level_filter(false), LevelFilter::Warn);
    }
}
