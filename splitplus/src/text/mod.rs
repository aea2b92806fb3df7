//! String helpers that consume split results

pub mod error_chain;
pub mod extensions;
pub mod lines;

pub use error_chain::pretty_error;
pub use extensions::{regex_replace_tokens, repeat, RepeatError, TokenReplaceError};
pub use lines::{for_each_line, postfix_lines, prefix_lines, split_lines};
