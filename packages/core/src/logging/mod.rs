use std::{env, str::FromStr};

use log::debug;

/// Variable holding the requested log level.
pub const LOG_LEVEL_ENV: &str = "RUST_LOG";

/// Storage engine modules only report errors.
const QUIET_MODULES: [&str; 1] = ["polodb_core"];

/**
 * Read requested log level, falling back to given default
 */
fn requested_level(default_level: log::LevelFilter) -> log::LevelFilter {
    match env::var(LOG_LEVEL_ENV) {
        Ok(level) => log::LevelFilter::from_str(level.as_str()).unwrap_or(default_level),
        Err(_) => default_level,
    }
}

/**
 * Initializes logger
 *
 * Returns the level in use. Initializing twice keeps the first logger
 */
pub fn init_logger(default_level: log::LevelFilter) -> log::LevelFilter {
    let level = requested_level(default_level);

    let mut builder = env_logger::builder();

    builder
        .filter_level(level)
        .format_target(false)
        .format_timestamp(None);

    for module in QUIET_MODULES {
        builder.filter_module(module, log::LevelFilter::Error);
    }

    if builder.try_init().is_err() {
        debug!("Logger already initialized, keeping it");
    }

    level
}

#[cfg(test)]
mod tests {
    use super::*;

    /**
     * It should init logger with wrong log level
     */
    #[test]
    fn test_wrong_logger_initialization() {
        // I want trace but mispelled
        env::set_var(LOG_LEVEL_ENV, "wwwwtracewww");

        let expected_level = log::LevelFilter::Trace;

        let default_level = log::LevelFilter::Debug;

        let current_log_level = init_logger(default_level);

        env::remove_var(LOG_LEVEL_ENV);

        assert_ne!(current_log_level, expected_level);
        assert_eq!(current_log_level, default_level);
    }
}
