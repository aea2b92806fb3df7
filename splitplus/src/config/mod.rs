//! Configuration module for splitplus
//! Compile-time limits are generated from TOML by build.rs; runtime
//! preferences come from the environment. Split options can also be
//! loaded from TOML or JSON files.

// Include generated constants from build.rs
include!(concat!(env!("OUT_DIR"), "/constants.rs"));

pub mod options_file;
pub mod runtime;

pub use options_file::{load_split_options, parse_split_options, ConfigError, OptionsFormat};
pub use runtime::{LoggingPreferences, RuntimeConfig, SplitPreferences};

/// Build information and configuration metadata
pub mod build_info {
    /// Returns the configuration profile used during build
    pub fn profile() -> &'static str {
        option_env!("SPLITPLUS_BUILD_PROFILE").unwrap_or("development")
    }

    /// Returns the configuration directory used during build
    pub fn config_dir() -> &'static str {
        option_env!("SPLITPLUS_CONFIG_DIR").unwrap_or("config")
    }

    /// Returns configuration source information
    pub fn source_info() -> String {
        format!("Generated from {}/{}.toml", config_dir(), profile())
    }
}
