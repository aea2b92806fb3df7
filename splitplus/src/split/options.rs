//! Split configuration
//!
//! `SplitOptions` is built once through chained setters and then shared,
//! read-only, by any number of splits. Every string setter rejects empty
//! values so a constructed `SplitOptions` can always be scanned with.

use crate::log_error;
use crate::logging::codes;
use serde::{Deserialize, Serialize};

/// Configuration errors raised by `SplitOptions` setters
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OptionsError {
    #[error("{field} cannot be empty")]
    EmptyValue { field: &'static str },
}

impl OptionsError {
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            OptionsError::EmptyValue { .. } => codes::options::EMPTY_OPTION_VALUE,
        }
    }
}

fn non_empty(field: &'static str, value: &str) -> Result<String, OptionsError> {
    if value.is_empty() {
        let error = OptionsError::EmptyValue { field };
        log_error!(error.error_code(), "Rejected empty split option", "field" => field);
        return Err(error);
    }
    Ok(value.to_string())
}

/// Delimiter, quote and escape rules for a split.
///
/// Defaults: delimiter `,`, quote `"` (symmetric), escaped quote `\"`
/// standing for `"`, empty elements kept.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SplitOptions {
    delimiter_list: Vec<String>,
    open_quote: String,
    close_quote: String,
    escaped_open_quote: String,
    equivalent_open_quote: String,
    escaped_close_quote: String,
    equivalent_close_quote: String,
    remove_empty_elements: bool,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            delimiter_list: vec![",".to_string()],
            open_quote: "\"".to_string(),
            close_quote: "\"".to_string(),
            escaped_open_quote: "\\\"".to_string(),
            equivalent_open_quote: "\"".to_string(),
            escaped_close_quote: "\\\"".to_string(),
            equivalent_close_quote: "\"".to_string(),
            remove_empty_elements: false,
        }
    }
}

impl SplitOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options that split on `\r\n` or `\n` and treat all other text
    /// literally.
    ///
    /// Quote and escape are both U+E000. The escape is matched first and
    /// stands for itself, so the quote never opens a region and every
    /// character survives.
    pub(crate) fn for_lines() -> Self {
        const MARKER: &str = "\u{E000}";
        Self {
            delimiter_list: vec!["\r\n".to_string(), "\n".to_string()],
            open_quote: MARKER.to_string(),
            close_quote: MARKER.to_string(),
            escaped_open_quote: MARKER.to_string(),
            equivalent_open_quote: MARKER.to_string(),
            escaped_close_quote: MARKER.to_string(),
            equivalent_close_quote: MARKER.to_string(),
            remove_empty_elements: false,
        }
    }

    // ------------------------------------------------------------------
    // Empty element policy
    // ------------------------------------------------------------------

    /// Drop zero-length elements from split results
    pub fn remove_empty_elements(mut self) -> Self {
        self.remove_empty_elements = true;
        self
    }

    /// Keep zero-length elements (the default)
    pub fn keep_empty_elements(mut self) -> Self {
        self.remove_empty_elements = false;
        self
    }

    // ------------------------------------------------------------------
    // Delimiters
    // ------------------------------------------------------------------

    /// Replace the delimiter list. Earlier entries take precedence when
    /// several match at the same position. An empty list disables splitting.
    pub fn delimiter_list<I, S>(mut self, delimiters: I) -> Result<Self, OptionsError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.delimiter_list = delimiters
            .into_iter()
            .map(|d| non_empty("delimiter_list", d.as_ref()))
            .collect::<Result<_, _>>()?;
        Ok(self)
    }

    /// Use a single delimiter
    pub fn delimiter(mut self, delimiter: &str) -> Result<Self, OptionsError> {
        self.delimiter_list = vec![non_empty("delimiter", delimiter)?];
        Ok(self)
    }

    pub fn delimiter_char(mut self, delimiter: char) -> Self {
        self.delimiter_list = vec![delimiter.to_string()];
        self
    }

    // ------------------------------------------------------------------
    // Quotes
    // ------------------------------------------------------------------

    /// Use the same marker to open and close quoted regions
    pub fn quote(mut self, quote: &str) -> Result<Self, OptionsError> {
        let quote = non_empty("quote", quote)?;
        self.open_quote = quote.clone();
        self.close_quote = quote;
        Ok(self)
    }

    pub fn quote_char(mut self, quote: char) -> Self {
        self.open_quote = quote.to_string();
        self.close_quote = quote.to_string();
        self
    }

    pub fn open_quote(mut self, open_quote: &str) -> Result<Self, OptionsError> {
        self.open_quote = non_empty("open_quote", open_quote)?;
        Ok(self)
    }

    pub fn open_quote_char(mut self, open_quote: char) -> Self {
        self.open_quote = open_quote.to_string();
        self
    }

    pub fn close_quote(mut self, close_quote: &str) -> Result<Self, OptionsError> {
        self.close_quote = non_empty("close_quote", close_quote)?;
        Ok(self)
    }

    pub fn close_quote_char(mut self, close_quote: char) -> Self {
        self.close_quote = close_quote.to_string();
        self
    }

    // ------------------------------------------------------------------
    // Escaped quotes
    // ------------------------------------------------------------------

    /// Use one escape sequence for both quote markers; each occurrence is
    /// replaced by `equivalent` in the output.
    pub fn escaped_quote(mut self, escaped: &str, equivalent: &str) -> Result<Self, OptionsError> {
        let escaped = non_empty("escaped_quote", escaped)?;
        let equivalent = non_empty("equivalent_quote", equivalent)?;
        self.escaped_open_quote = escaped.clone();
        self.escaped_close_quote = escaped;
        self.equivalent_open_quote = equivalent.clone();
        self.equivalent_close_quote = equivalent;
        Ok(self)
    }

    pub fn escaped_open_quote(
        mut self,
        escaped: &str,
        equivalent: &str,
    ) -> Result<Self, OptionsError> {
        self.escaped_open_quote = non_empty("escaped_open_quote", escaped)?;
        self.equivalent_open_quote = non_empty("equivalent_open_quote", equivalent)?;
        Ok(self)
    }

    pub fn escaped_close_quote(
        mut self,
        escaped: &str,
        equivalent: &str,
    ) -> Result<Self, OptionsError> {
        self.escaped_close_quote = non_empty("escaped_close_quote", escaped)?;
        self.equivalent_close_quote = non_empty("equivalent_close_quote", equivalent)?;
        Ok(self)
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn delimiters(&self) -> &[String] {
        &self.delimiter_list
    }

    pub fn get_open_quote(&self) -> &str {
        &self.open_quote
    }

    pub fn get_close_quote(&self) -> &str {
        &self.close_quote
    }

    pub fn get_escaped_open_quote(&self) -> &str {
        &self.escaped_open_quote
    }

    pub fn get_equivalent_open_quote(&self) -> &str {
        &self.equivalent_open_quote
    }

    pub fn get_escaped_close_quote(&self) -> &str {
        &self.escaped_close_quote
    }

    pub fn get_equivalent_close_quote(&self) -> &str {
        &self.equivalent_close_quote
    }

    pub fn removes_empty_elements(&self) -> bool {
        self.remove_empty_elements
    }

    /// Open and close quote markers are the same string
    pub fn is_symmetric_quote(&self) -> bool {
        self.open_quote == self.close_quote
    }

    /// Open and close escape sequences are the same string
    pub fn is_symmetric_escape(&self) -> bool {
        self.escaped_open_quote == self.escaped_close_quote
    }
}

/// Escape sequence and the text it stands for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EscapeConfig {
    pub escaped: String,
    pub equivalent: String,
}

/// Serializable description of `SplitOptions` (TOML or JSON).
///
/// Unset fields keep their defaults. Conversion runs through the
/// `SplitOptions` setters, so the same validation applies. Specific
/// settings win over shared ones: `open_quote` over `quote`,
/// `escaped_open_quote` over `escaped_quote`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SplitOptionsConfig {
    pub delimiters: Option<Vec<String>>,
    pub quote: Option<String>,
    pub open_quote: Option<String>,
    pub close_quote: Option<String>,
    pub escaped_quote: Option<EscapeConfig>,
    pub escaped_open_quote: Option<EscapeConfig>,
    pub escaped_close_quote: Option<EscapeConfig>,
    pub remove_empty_elements: Option<bool>,
}

impl TryFrom<SplitOptionsConfig> for SplitOptions {
    type Error = OptionsError;

    fn try_from(config: SplitOptionsConfig) -> Result<Self, Self::Error> {
        let mut options = SplitOptions::new();

        if let Some(delimiters) = &config.delimiters {
            options = options.delimiter_list(delimiters)?;
        }
        if let Some(quote) = &config.quote {
            options = options.quote(quote)?;
        }
        if let Some(open) = &config.open_quote {
            options = options.open_quote(open)?;
        }
        if let Some(close) = &config.close_quote {
            options = options.close_quote(close)?;
        }
        if let Some(escape) = &config.escaped_quote {
            options = options.escaped_quote(&escape.escaped, &escape.equivalent)?;
        }
        if let Some(escape) = &config.escaped_open_quote {
            options = options.escaped_open_quote(&escape.escaped, &escape.equivalent)?;
        }
        if let Some(escape) = &config.escaped_close_quote {
            options = options.escaped_close_quote(&escape.escaped, &escape.equivalent)?;
        }
        options = match config.remove_empty_elements {
            Some(true) => options.remove_empty_elements(),
            _ => options.keep_empty_elements(),
        };

        Ok(options)
    }
}

impl From<&SplitOptions> for SplitOptionsConfig {
    fn from(options: &SplitOptions) -> Self {
        Self {
            delimiters: Some(options.delimiter_list.clone()),
            quote: None,
            open_quote: Some(options.open_quote.clone()),
            close_quote: Some(options.close_quote.clone()),
            escaped_quote: None,
            escaped_open_quote: Some(EscapeConfig {
                escaped: options.escaped_open_quote.clone(),
                equivalent: options.equivalent_open_quote.clone(),
            }),
            escaped_close_quote: Some(EscapeConfig {
                escaped: options.escaped_close_quote.clone(),
                equivalent: options.equivalent_close_quote.clone(),
            }),
            remove_empty_elements: Some(options.remove_empty_elements),
        }
    }
}
