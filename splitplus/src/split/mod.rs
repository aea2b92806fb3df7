//! Configurable quote- and escape-aware string splitting
//!
//! ```
//! use splitplus::split::{split, SplitOptions};
//!
//! let options = SplitOptions::new().quote("'").unwrap();
//! assert_eq!(split("'foo,bar',baz", &options).unwrap(), ["foo,bar", "baz"]);
//! ```

pub mod options;
pub mod scanner;

use crate::config::runtime::SplitPreferences;
use std::sync::OnceLock;

pub use options::{EscapeConfig, OptionsError, SplitOptions, SplitOptionsConfig};
pub use scanner::{QuoteClass, ScanMode, SplitError, SplitMetrics, Splitter};

static DEFAULT_PREFERENCES: OnceLock<SplitPreferences> = OnceLock::new();

/// Preferences read from the environment once per process
pub(crate) fn default_preferences() -> SplitPreferences {
    DEFAULT_PREFERENCES
        .get_or_init(SplitPreferences::default)
        .clone()
}

/// Split `input` with `options`
pub fn split(input: &str, options: &SplitOptions) -> Result<Vec<String>, SplitError> {
    Splitter::new(options).split(input)
}

/// Split with explicit runtime preferences
pub fn split_with_preferences(
    input: &str,
    options: &SplitOptions,
    preferences: SplitPreferences,
) -> Result<Vec<String>, SplitError> {
    Splitter::with_preferences(options, preferences).split(input)
}

/// Method-call form of [`split`]
pub trait SplitPlus {
    fn split_plus(&self, options: &SplitOptions) -> Result<Vec<String>, SplitError>;
}

impl SplitPlus for str {
    fn split_plus(&self, options: &SplitOptions) -> Result<Vec<String>, SplitError> {
        split(self, options)
    }
}
