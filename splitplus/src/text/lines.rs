//! Multi-line string helpers built on the splitter

use crate::logging::codes;
use crate::split::{SplitOptions, Splitter};
use std::sync::OnceLock;

static LINE_OPTIONS: OnceLock<SplitOptions> = OnceLock::new();

fn line_options() -> &'static SplitOptions {
    LINE_OPTIONS.get_or_init(SplitOptions::for_lines)
}

/// Split on `\r\n` and `\n`.
///
/// A trailing newline produces a final empty line and `""` produces one
/// empty line.
pub fn split_lines(s: &str) -> Vec<String> {
    match Splitter::new(line_options()).split(s) {
        Ok(lines) => lines,
        Err(error) => {
            // line options have no close-only marker, so the scan cannot fail
            crate::logging::safe_log_error(
                codes::system::INTERNAL_ERROR,
                &format!("Line split failed: {}", error),
            );
            s.split('\n')
                .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
                .collect()
        }
    }
}

/// Rebuild `s` line by line. `f` appends the output for each line; lines
/// are joined with `\n`.
pub fn for_each_line<F>(s: &str, mut f: F) -> String
where
    F: FnMut(&mut String, &str),
{
    let mut output = String::with_capacity(s.len());
    for (index, line) in split_lines(s).iter().enumerate() {
        if index > 0 {
            output.push('\n');
        }
        f(&mut output, line);
    }
    output
}

/// Prepend `prefix` to every line
pub fn prefix_lines(s: &str, prefix: &str) -> String {
    for_each_line(s, |out, line| {
        out.push_str(prefix);
        out.push_str(line);
    })
}

/// Append `postfix` to every line
pub fn postfix_lines(s: &str, postfix: &str) -> String {
    for_each_line(s, |out, line| {
        out.push_str(line);
        out.push_str(postfix);
    })
}
