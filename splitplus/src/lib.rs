//! Quote- and escape-aware string splitting, with helpers built on it:
//! line splitting and prefixing, token replacement, error chain
//! formatting and plain-text tables.

// Internal modules
pub mod config;
pub mod logging;
pub mod split;
pub mod table;
pub mod text;
pub mod utils;

// Re-export key types for library consumers
pub use config::{load_split_options, ConfigError};
pub use split::{
    split, split_with_preferences, OptionsError, SplitError, SplitMetrics, SplitOptions,
    SplitOptionsConfig, SplitPlus, Splitter,
};
pub use table::{HAlign, StringTableBuilder, TableError, VAlign};
pub use text::{
    postfix_lines, prefix_lines, pretty_error, regex_replace_tokens, repeat, split_lines,
};
pub use utils::{Position, Span};
