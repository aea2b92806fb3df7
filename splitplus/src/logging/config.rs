//! Configuration access for logging
//!
//! Combines compile-time limits with runtime user preferences. The
//! compile-time floor on the minimum level cannot be lowered at runtime.

use crate::config::compile_time::logging::*;
use crate::config::runtime::LoggingPreferences;
use crate::logging::events::LogLevel;
use std::sync::OnceLock;

// ============================================================================
// RUNTIME PREFERENCES STORAGE
// ============================================================================

static RUNTIME_PREFERENCES: OnceLock<LoggingPreferences> = OnceLock::new();
static DEFAULT_PREFERENCES: OnceLock<LoggingPreferences> = OnceLock::new();

/// Initialize runtime preferences
pub fn init_runtime_preferences(preferences: LoggingPreferences) -> Result<(), String> {
    RUNTIME_PREFERENCES
        .set(preferences)
        .map_err(|_| "Runtime preferences already initialized".to_string())
}

/// Get runtime preferences, falling back to the environment defaults.
/// The fallback is read once per process.
fn get_runtime_preferences() -> &'static LoggingPreferences {
    RUNTIME_PREFERENCES
        .get()
        .unwrap_or_else(|| DEFAULT_PREFERENCES.get_or_init(LoggingPreferences::default))
}

// ============================================================================
// CONFIGURATION ACCESS FUNCTIONS
// ============================================================================

/// Level that is always logged regardless of user preference
pub fn get_floor_log_level() -> LogLevel {
    match SECURITY_MIN_LOG_LEVEL {
        0 => LogLevel::Error,
        1 => LogLevel::Warning,
        2 => LogLevel::Info,
        _ => LogLevel::Debug,
    }
}

/// Get minimum log level (user preference, never stricter than the floor)
pub fn get_min_log_level() -> LogLevel {
    effective_level(get_runtime_preferences().min_log_level)
}

fn effective_level(user_level: LogLevel) -> LogLevel {
    user_level.max(get_floor_log_level())
}

/// Check if structured logging is enabled (user preference)
pub fn use_structured_logging() -> bool {
    get_runtime_preferences().use_structured_logging
}

/// Check if events go to the `log` facade (user preference)
pub fn forward_to_log_crate() -> bool {
    get_runtime_preferences().forward_to_log_crate
}

/// Capacity of `MemoryLogger` before old events are dropped
pub fn get_memory_buffer_size() -> usize {
    MEMORY_LOG_BUFFER_SIZE
}

/// Get maximum log message length
pub fn get_max_log_message_length() -> usize {
    MAX_LOG_MESSAGE_LENGTH
}

// ============================================================================
// CONFIGURATION VALIDATION
// ============================================================================

/// Validate current configuration settings
pub fn validate_config() -> Result<(), String> {
    if MEMORY_LOG_BUFFER_SIZE < 100 {
        return Err(format!(
            "Memory log buffer size too small: {}",
            MEMORY_LOG_BUFFER_SIZE
        ));
    }

    if SECURITY_MIN_LOG_LEVEL > 2 {
        return Err(format!(
            "Minimum log level floor must not hide info events: {}",
            SECURITY_MIN_LOG_LEVEL
        ));
    }

    Ok(())
}

/// Get configuration summary for diagnostics
pub fn get_config_summary() -> String {
    let preferences = get_runtime_preferences();

    format!(
        "Logging Configuration ({}):\n\
         === Compile-time ===\n\
         - Max message length: {}\n\
         - Memory buffer size: {}\n\
         - Level floor: {}\n\
         === Runtime ===\n\
         - Min log level: {}\n\
         - Structured logging: {}\n\
         - Forward to log crate: {}",
        crate::config::build_info::profile(),
        MAX_LOG_MESSAGE_LENGTH,
        MEMORY_LOG_BUFFER_SIZE,
        get_floor_log_level().as_str(),
        get_min_log_level().as_str(),
        preferences.use_structured_logging,
        preferences.forward_to_log_crate,
    )
}
