//! Small string helpers: repetition and regex token replacement

use crate::log_error;
use crate::logging::codes;
use regex::Regex;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepeatError {
    #[error("Repetition count must be greater than zero")]
    ZeroRepetitions,
}

impl RepeatError {
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            RepeatError::ZeroRepetitions => codes::text::INVALID_REPETITION_COUNT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenReplaceError {
    #[error("Invalid token pattern: {message}")]
    InvalidPattern { message: String },

    #[error("Pattern must contain exactly one capture group, found {found}")]
    GroupCount { found: usize },

    #[error("Capture group did not participate in the match at offset {offset}")]
    MissingCapture { offset: usize },
}

impl TokenReplaceError {
    pub fn error_code(&self) -> crate::logging::Code {
        codes::text::INVALID_TOKEN_PATTERN
    }
}

/// Concatenate `count` copies of `s`
pub fn repeat(s: &str, count: usize) -> Result<String, RepeatError> {
    if count < 1 {
        let error = RepeatError::ZeroRepetitions;
        log_error!(error.error_code(), "Rejected repetition count", "count" => count);
        return Err(error);
    }
    Ok(s.repeat(count))
}

/// Replace every token captured by `pattern` with `transform(token)`.
///
/// `pattern` must have exactly one capture group. Text matched by the
/// pattern outside the group is kept as is.
///
/// ```
/// use splitplus::text::regex_replace_tokens;
///
/// let out = regex_replace_tokens("[db].[t]", r"\[(\w+)\]\.", |t| t.to_uppercase()).unwrap();
/// assert_eq!(out, "[DB].[t]");
/// ```
pub fn regex_replace_tokens<F>(
    text: &str,
    pattern: &str,
    mut transform: F,
) -> Result<String, TokenReplaceError>
where
    F: FnMut(&str) -> String,
{
    let regex = Regex::new(pattern).map_err(|e| {
        let error = TokenReplaceError::InvalidPattern {
            message: e.to_string(),
        };
        log_error!(error.error_code(), "Token pattern failed to compile", "pattern" => pattern);
        error
    })?;

    // captures_len counts the implicit whole-match group
    let groups = regex.captures_len() - 1;
    if groups != 1 {
        let error = TokenReplaceError::GroupCount { found: groups };
        log_error!(error.error_code(), "Token pattern has wrong group count",
            "pattern" => pattern,
            "groups" => groups
        );
        return Err(error);
    }

    let mut output = String::with_capacity(text.len());
    let mut token_end = 0;

    for captures in regex.captures_iter(text) {
        let Some(token) = captures.get(1) else {
            let offset = captures.get(0).map(|m| m.start()).unwrap_or(token_end);
            let error = TokenReplaceError::MissingCapture { offset };
            log_error!(error.error_code(), "Token group missing from match",
                "pattern" => pattern,
                "offset" => offset
            );
            return Err(error);
        };

        output.push_str(&text[token_end..token.start()]);
        output.push_str(&transform(token.as_str()));
        token_end = token.end();
    }

    output.push_str(&text[token_end..]);
    Ok(output)
}
