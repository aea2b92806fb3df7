//! # splitplus CLI
//!
//! `splitplus split` splits text; `splitplus table` renders delimited lines
//! as a table. Log events go through `env_logger` (`RUST_LOG` is honoured)
//! unless `--structured-logs` is given.

use clap::Parser;
use splitplus::config::LoggingPreferences;
use splitplus::logging::{self, LogLevel};
use splitplus::{log_error, log_info, pretty_error};
use splitplus_cli::{run, Cli};
use std::io;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.structured_logs);
    log_info!("splitplus starting", "version" => env!("CARGO_PKG_VERSION"));

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(error) = run(&cli.command, &mut stdin.lock(), &mut stdout.lock()) {
        log_error!(error.error_code(), "Command failed", "error" => &error);
        eprintln!("error: {}", pretty_error(&error));
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8, structured: bool) {
    let (filter, level) = match verbose {
        0 => (log::LevelFilter::Warn, LogLevel::Warning),
        1 => (log::LevelFilter::Info, LogLevel::Info),
        _ => (log::LevelFilter::Debug, LogLevel::Debug),
    };

    env_logger::Builder::new()
        .filter_level(filter)
        .parse_default_env()
        .init();

    let preferences = LoggingPreferences {
        use_structured_logging: structured,
        forward_to_log_crate: !structured,
        min_log_level: level,
    };

    let result = logging::config::init_runtime_preferences(preferences)
        .and_then(|_| logging::init_global_logging());
    if let Err(message) = result {
        eprintln!("warning: logging unavailable: {}", message);
    }
}
