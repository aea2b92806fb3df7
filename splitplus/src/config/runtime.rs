// RUNTIME PREFERENCES (User Experience)

use crate::logging::LogLevel;
use serde::{Deserialize, Serialize};
use std::env;

fn env_flag(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitPreferences {
    /// Whether to collect per-call split metrics
    pub collect_metrics: bool,

    /// Whether to log element statistics after each split
    pub log_split_statistics: bool,

    /// Whether to include line/column information in logged scan errors
    pub include_position_in_errors: bool,
}

impl Default for SplitPreferences {
    fn default() -> Self {
        Self {
            collect_metrics: env_flag(env_vars::SPLIT_COLLECT_METRICS, true),
            log_split_statistics: env_flag(env_vars::SPLIT_LOG_STATISTICS, false),
            include_position_in_errors: env_flag(env_vars::SPLIT_INCLUDE_POSITIONS, true),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingPreferences {
    /// Whether to use structured JSON logging
    pub use_structured_logging: bool,

    /// Whether to forward events to the `log` facade instead of the console
    pub forward_to_log_crate: bool,

    /// User preferred minimum log level
    pub min_log_level: LogLevel,
}

impl Default for LoggingPreferences {
    fn default() -> Self {
        Self {
            use_structured_logging: env_flag(env_vars::LOGGING_USE_STRUCTURED, false),
            forward_to_log_crate: env_flag(env_vars::LOGGING_FORWARD_TO_LOG, false),
            min_log_level: env::var(env_vars::LOGGING_MIN_LEVEL)
                .ok()
                .and_then(|v| parse_log_level(&v))
                .unwrap_or(LogLevel::Info),
        }
    }
}

/// Parse log level from string (used for environment variables)
pub fn parse_log_level(level: &str) -> Option<LogLevel> {
    match level.to_lowercase().as_str() {
        "error" | "0" => Some(LogLevel::Error),
        "warning" | "warn" | "1" => Some(LogLevel::Warning),
        "info" | "2" => Some(LogLevel::Info),
        "debug" | "3" => Some(LogLevel::Debug),
        _ => None,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub split: SplitPreferences,
    pub logging: LoggingPreferences,
}

/// Environment variable names for configuration
pub mod env_vars {
    // Split
    pub const SPLIT_COLLECT_METRICS: &str = "SPLITPLUS_SPLIT_COLLECT_METRICS";
    pub const SPLIT_LOG_STATISTICS: &str = "SPLITPLUS_SPLIT_LOG_STATISTICS";
    pub const SPLIT_INCLUDE_POSITIONS: &str = "SPLITPLUS_SPLIT_INCLUDE_POSITIONS";

    // Logging
    pub const LOGGING_USE_STRUCTURED: &str = "SPLITPLUS_LOGGING_USE_STRUCTURED";
    pub const LOGGING_FORWARD_TO_LOG: &str = "SPLITPLUS_LOGGING_FORWARD_TO_LOG";
    pub const LOGGING_MIN_LEVEL: &str = "SPLITPLUS_LOGGING_MIN_LEVEL";
}
