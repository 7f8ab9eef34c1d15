use env_logger::Env;
use inline_html::{InlineConfig, render_inline};
use std::io::{self, Read};
use std::process::ExitCode;

/// Reads the filter from `filter_var`, falling back to `info` when unset.
fn log_env(filter_var: &str) -> Env<'_> {
    Env::new()
        .filter_or(filter_var, "info")
        .write_style(env_logger::DEFAULT_WRITE_STYLE_ENV)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(log_env(env_logger::DEFAULT_FILTER_ENV)).init();

    let config = match std::env::args().nth(1) {
        Some(path) => match InlineConfig::load_from_path(&path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("{e}");
                return ExitCode::FAILURE;
            }
        },
        None => InlineConfig::default(),
    };
    log::debug!("config: {config:?}");

    let mut input = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut input) {
        log::error!("Failed to read stdin: {e}");
        return ExitCode::FAILURE;
    }

    match render_inline(input.trim_end_matches('\n'), &config) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::LevelFilter;

    #[test]
    fn test_log_filter_defaults_to_info() {
        let logger = env_logger::Builder::from_env(log_env("INLINE_HTML_TEST_LOG_UNSET")).build();
        assert_eq!(logger.filter(), LevelFilter::Info);
    }

    #[test]
    fn test_log_filter_from_environment() {
        unsafe {
            std::env::set_var("INLINE_HTML_TEST_LOG_DEBUG", "debug");
        }

        let logger = env_logger::Builder::from_env(log_env("INLINE_HTML_TEST_LOG_DEBUG")).build();
        assert_eq!(logger.filter(), LevelFilter::Debug);

        unsafe {
            std::env::remove_var("INLINE_HTML_TEST_LOG_DEBUG");
        }
    }
}
