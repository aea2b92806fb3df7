//! Quote- and escape-aware scanner
//!
//! A single forward pass over the input. At each cursor position the
//! scanner classifies the text into a token, in fixed priority order:
//! end of input, delimiter, escaped quote, quote, plain character.
//! Tokens are then folded into elements.

use super::options::SplitOptions;
use crate::config::compile_time::split::{ELEMENT_CAPACITY_HINT, INPUT_PREVIEW_LENGTH};
use crate::config::runtime::SplitPreferences;
use crate::logging::codes;
use crate::utils::{Position, Span};
use crate::{log_debug, log_error, log_success, log_warning};

/// Scan errors. Both abort the split with no partial result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SplitError {
    #[error("Open quote found inside quotes at {position}")]
    UnbalancedOpenQuote { position: Position },

    #[error("Close quote found outside of quotes at {position}")]
    UnbalancedCloseQuote { position: Position },
}

impl SplitError {
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            SplitError::UnbalancedOpenQuote { .. } => codes::split::UNBALANCED_OPEN_QUOTE,
            SplitError::UnbalancedCloseQuote { .. } => codes::split::UNBALANCED_CLOSE_QUOTE,
        }
    }

    /// Location of the offending quote marker
    pub fn position(&self) -> Position {
        match self {
            SplitError::UnbalancedOpenQuote { position }
            | SplitError::UnbalancedCloseQuote { position } => *position,
        }
    }
}

/// Whether the cursor is inside a quoted region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanMode {
    Outside,
    InsideQuote,
}

/// How a matched marker relates to quoted regions.
///
/// `Ambiguous` markers have identical open and close forms; the scan mode
/// decides which one they are.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteClass {
    Open,
    Close,
    Ambiguous,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Delimiter,
    OpenQuote,
    CloseQuote,
    EscapedOpenQuote,
    EscapedCloseQuote,
    Character,
    EndOfInput,
}

/// Per-split counters
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SplitMetrics {
    pub input_bytes: usize,
    pub elements: usize,
    pub empty_elements_removed: usize,
    pub delimiters: usize,
    pub quoted_regions: usize,
    pub escapes: usize,
    pub unterminated_quote: bool,
}

impl SplitMetrics {
    fn record_token(&mut self, token: Token) {
        match token {
            Token::Delimiter => self.delimiters += 1,
            Token::OpenQuote => self.quoted_regions += 1,
            Token::EscapedOpenQuote | Token::EscapedCloseQuote => self.escapes += 1,
            Token::CloseQuote | Token::Character | Token::EndOfInput => {}
        }
    }
}

/// Cursor state for one split call
struct ScanState<'a> {
    input: &'a str,
    token_start: usize,
    token_end: usize,
    element_start: usize,
    mode: ScanMode,
    quote_class: QuoteClass,
    done: bool,
}

impl<'a> ScanState<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            token_start: 0,
            token_end: 0,
            element_start: 0,
            mode: ScanMode::Outside,
            quote_class: QuoteClass::Ambiguous,
            done: false,
        }
    }

    fn inside(&self) -> bool {
        self.mode == ScanMode::InsideQuote
    }

    /// Match an open/close marker pair at the cursor.
    /// Sets `token_end` and `quote_class` on a match.
    fn match_marker(&mut self, open: &str, close: &str) -> bool {
        let rest = &self.input[self.token_start..];
        let (len, class) = if rest.starts_with(open) {
            let class = if open == close {
                QuoteClass::Ambiguous
            } else {
                QuoteClass::Open
            };
            (open.len(), class)
        } else if rest.starts_with(close) {
            (close.len(), QuoteClass::Close)
        } else {
            return false;
        };

        self.token_end = self.token_start + len;
        self.quote_class = class;
        true
    }

    fn next_token(&mut self, options: &SplitOptions) -> Result<Token, SplitError> {
        self.token_end = self.token_start;
        let input = self.input;
        let rest = &input[self.token_start..];

        let Some(ch) = rest.chars().next() else {
            return Ok(Token::EndOfInput);
        };

        // Delimiters are plain text inside quotes
        if !self.inside() {
            if let Some(delimiter) = options
                .delimiters()
                .iter()
                .find(|d| rest.starts_with(d.as_str()))
            {
                self.token_end = self.token_start + delimiter.len();
                return Ok(Token::Delimiter);
            }
        }

        // Escapes come before quotes so a multi-character escape is never
        // read as a quote followed by text
        if self.match_marker(
            options.get_escaped_open_quote(),
            options.get_escaped_close_quote(),
        ) {
            return Ok(match (self.quote_class, self.mode) {
                (QuoteClass::Open, _) | (QuoteClass::Ambiguous, ScanMode::Outside) => {
                    Token::EscapedOpenQuote
                }
                (QuoteClass::Close, _) | (QuoteClass::Ambiguous, ScanMode::InsideQuote) => {
                    Token::EscapedCloseQuote
                }
            });
        }

        if self.match_marker(options.get_open_quote(), options.get_close_quote()) {
            return match (self.quote_class, self.mode) {
                (QuoteClass::Open, ScanMode::InsideQuote) => Err(SplitError::UnbalancedOpenQuote {
                    position: Position::locate(self.input, self.token_start),
                }),
                (QuoteClass::Close, ScanMode::Outside) => Err(SplitError::UnbalancedCloseQuote {
                    position: Position::locate(self.input, self.token_start),
                }),
                (QuoteClass::Open, ScanMode::Outside)
                | (QuoteClass::Ambiguous, ScanMode::Outside) => Ok(Token::OpenQuote),
                (QuoteClass::Close, ScanMode::InsideQuote)
                | (QuoteClass::Ambiguous, ScanMode::InsideQuote) => Ok(Token::CloseQuote),
            };
        }

        self.token_end = self.token_start + ch.len_utf8();
        Ok(Token::Character)
    }

    /// Scan up to the next delimiter or the end of input.
    /// Returns `None` once the final element has been produced.
    fn next_element(
        &mut self,
        options: &SplitOptions,
        metrics: &mut SplitMetrics,
    ) -> Result<Option<String>, SplitError> {
        if self.done {
            return Ok(None);
        }

        let mut element = String::new();

        loop {
            let token = self.next_token(options)?;
            metrics.record_token(token);

            if token == Token::Character {
                self.token_start = self.token_end;
                continue;
            }

            element.push_str(&self.input[self.element_start..self.token_start]);

            let finished = match token {
                Token::Delimiter => true,
                Token::OpenQuote => {
                    self.mode = ScanMode::InsideQuote;
                    false
                }
                Token::CloseQuote => {
                    self.mode = ScanMode::Outside;
                    false
                }
                Token::EscapedOpenQuote => {
                    element.push_str(options.get_equivalent_open_quote());
                    false
                }
                Token::EscapedCloseQuote => {
                    element.push_str(options.get_equivalent_close_quote());
                    false
                }
                Token::EndOfInput => {
                    self.done = true;
                    true
                }
                Token::Character => false,
            };

            self.element_start = self.token_end;
            self.token_start = self.token_end;

            if finished {
                return Ok(Some(element));
            }
        }
    }

    /// Span of the marker that starts at `token_start`
    fn current_span(&self) -> Span {
        let start = Position::locate(self.input, self.token_start);
        Span::covering(start, &self.input[self.token_start..self.token_end])
    }
}

/// Shorten input for log context
pub(crate) fn input_preview(input: &str) -> String {
    match input.char_indices().nth(INPUT_PREVIEW_LENGTH) {
        Some((cut, _)) => format!("{}...", &input[..cut]),
        None => input.to_string(),
    }
}

/// Splits strings according to a borrowed `SplitOptions`
pub struct Splitter<'o> {
    options: &'o SplitOptions,
    preferences: SplitPreferences,
    metrics: SplitMetrics,
}

impl<'o> Splitter<'o> {
    pub fn new(options: &'o SplitOptions) -> Self {
        Self::with_preferences(options, super::default_preferences())
    }

    pub fn with_preferences(options: &'o SplitOptions, preferences: SplitPreferences) -> Self {
        Self {
            options,
            preferences,
            metrics: SplitMetrics::default(),
        }
    }

    pub fn options(&self) -> &SplitOptions {
        self.options
    }

    pub fn preferences(&self) -> &SplitPreferences {
        &self.preferences
    }

    /// Counters from the most recent split (empty when metrics are disabled).
    /// A failed split keeps the counters gathered up to the error.
    pub fn metrics(&self) -> &SplitMetrics {
        &self.metrics
    }

    /// Split `input` into elements.
    ///
    /// The final element is always produced, so an input without delimiters
    /// yields one element. A quoted region still open at the end of input is
    /// closed implicitly.
    pub fn split(&mut self, input: &str) -> Result<Vec<String>, SplitError> {
        let mut metrics = SplitMetrics {
            input_bytes: input.len(),
            ..Default::default()
        };

        log_debug!("Starting split",
            "input_bytes" => input.len(),
            "delimiters" => self.options.delimiters().len(),
            "symmetric_quote" => self.options.is_symmetric_quote()
        );

        let mut state = ScanState::new(input);
        let mut elements = Vec::with_capacity(ELEMENT_CAPACITY_HINT);

        loop {
            let element = match state.next_element(self.options, &mut metrics) {
                Ok(Some(element)) => element,
                Ok(None) => break,
                Err(error) => {
                    metrics.elements = elements.len();
                    self.record_metrics(metrics);
                    self.log_scan_error(&state, &error);
                    return Err(error);
                }
            };

            if self.options.removes_empty_elements() && element.is_empty() {
                metrics.empty_elements_removed += 1;
                continue;
            }
            elements.push(element);
        }

        metrics.elements = elements.len();

        if state.inside() {
            metrics.unterminated_quote = true;
            log_warning!(code = codes::split::UNTERMINATED_QUOTE, "Quoted region still open at end of input",
                "input_preview" => input_preview(input)
            );
        }

        if self.preferences.log_split_statistics {
            log_success!(codes::success::SPLIT_COMPLETE, "String split completed",
                "elements" => metrics.elements,
                "delimiters" => metrics.delimiters,
                "quoted_regions" => metrics.quoted_regions,
                "escapes" => metrics.escapes,
                "empty_removed" => metrics.empty_elements_removed
            );
        }

        self.record_metrics(metrics);
        Ok(elements)
    }

    fn record_metrics(&mut self, metrics: SplitMetrics) {
        self.metrics = if self.preferences.collect_metrics {
            metrics
        } else {
            SplitMetrics::default()
        };
    }

    fn log_scan_error(&self, state: &ScanState<'_>, error: &SplitError) {
        let message = error.to_string();
        if self.preferences.include_position_in_errors {
            log_error!(error.error_code(), &message,
                span = state.current_span(),
                "input_preview" => input_preview(state.input)
            );
        } else {
            log_error!(error.error_code(), &message,
                "input_preview" => input_preview(state.input)
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::test_support::shared_memory_logger;
    use assert_matches::assert_matches;

    fn split(input: &str, options: &SplitOptions) -> Result<Vec<String>, SplitError> {
        Splitter::new(options).split(input)
    }

    fn comma() -> SplitOptions {
        SplitOptions::new().delimiter(",").unwrap()
    }

    // ------------------------------------------------------------------
    // Defaults
    // ------------------------------------------------------------------

    #[test]
    fn test_default_delimiter() {
        assert_eq!(split("foo,bar", &SplitOptions::new()).unwrap(), ["foo", "bar"]);
    }

    #[test]
    fn test_default_quotes() {
        assert_eq!(
            split("foo,\"bar,baz\"", &SplitOptions::new()).unwrap(),
            ["foo", "bar,baz"]
        );
    }

    #[test]
    fn test_default_escaped_quotes() {
        assert_eq!(
            split("foo,\"bar,baz\",\"bing\\\"bong\"", &SplitOptions::new()).unwrap(),
            ["foo", "bar,baz", "bing\"bong"]
        );
    }

    #[test]
    fn test_round_trip_without_quotes() {
        let input = "alpha,,beta, gamma ,";
        let elements = split(input, &SplitOptions::new()).unwrap();
        assert_eq!(elements.join(","), input);
    }

    // ------------------------------------------------------------------
    // Delimiters
    // ------------------------------------------------------------------

    #[test]
    fn test_no_delimiter_in_input() {
        assert_eq!(split("foo", &comma()).unwrap(), ["foo"]);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(split("", &comma()).unwrap(), [""]);
        assert!(split("", &comma().remove_empty_elements())
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_single_delimiter() {
        assert_eq!(split(",", &comma()).unwrap(), ["", ""]);
        assert!(split(",", &comma().remove_empty_elements())
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_consecutive_and_edge_delimiters() {
        let keep = comma().keep_empty_elements();
        let remove = comma().remove_empty_elements();

        assert_eq!(split("foo,,bar", &keep).unwrap(), ["foo", "", "bar"]);
        assert_eq!(split("foo,,bar", &remove).unwrap(), ["foo", "bar"]);
        assert_eq!(split(",bar,baz", &keep).unwrap(), ["", "bar", "baz"]);
        assert_eq!(split(",bar,baz", &remove).unwrap(), ["bar", "baz"]);
        assert_eq!(split("foo,bar,", &keep).unwrap(), ["foo", "bar", ""]);
        assert_eq!(split("foo,bar,", &remove).unwrap(), ["foo", "bar"]);
    }

    #[test]
    fn test_char_and_multi_character_delimiters() {
        let options = SplitOptions::new().delimiter_char(',');
        assert_eq!(split("foo,bar,baz", &options).unwrap(), ["foo", "bar", "baz"]);

        let options = SplitOptions::new().delimiter("||").unwrap();
        assert_eq!(split("foo||bar|baz", &options).unwrap(), ["foo", "bar|baz"]);
    }

    #[test]
    fn test_delimiter_list() {
        let options = SplitOptions::new().delimiter_list([",", ";"]).unwrap();
        assert_eq!(split("foo,bar;baz", &options).unwrap(), ["foo", "bar", "baz"]);

        let options = SplitOptions::new().delimiter_list(["\r\n", "\n"]).unwrap();
        assert_eq!(
            split("foo\r\nbar\nbaz\n", &options).unwrap(),
            ["foo", "bar", "baz", ""]
        );
    }

    #[test]
    fn test_first_listed_delimiter_wins() {
        // list order decides, not length
        let options = SplitOptions::new().delimiter_list([",", ",,"]).unwrap();
        assert_eq!(split("a,,b", &options).unwrap(), ["a", "", "b"]);

        let options = SplitOptions::new().delimiter_list([",,", ","]).unwrap();
        assert_eq!(split("a,,b,c", &options).unwrap(), ["a", "b", "c"]);
    }

    #[test]
    fn test_empty_delimiter_list_yields_whole_input() {
        let options = SplitOptions::new()
            .delimiter_list(Vec::<&str>::new())
            .unwrap();
        assert_eq!(split("a,b;c", &options).unwrap(), ["a,b;c"]);
        assert_eq!(split("", &options).unwrap(), [""]);
    }

    #[test]
    fn test_multibyte_characters() {
        let options = SplitOptions::new().delimiter("→").unwrap();
        assert_eq!(split("żółw→ñandú→", &options).unwrap(), ["żółw", "ñandú", ""]);
    }

    // ------------------------------------------------------------------
    // Quotes
    // ------------------------------------------------------------------

    #[test]
    fn test_symmetric_quote() {
        let options = comma().quote("'").unwrap();
        assert_eq!(
            split("foo,'bar,baz',asdf", &options).unwrap(),
            ["foo", "bar,baz", "asdf"]
        );
        assert_eq!(split("'foo,bar',baz", &options).unwrap(), ["foo,bar", "baz"]);
        assert_eq!(split("foo,'bar,baz'", &options).unwrap(), ["foo", "bar,baz"]);
        assert_eq!(split("'foo,bar,baz'", &options).unwrap(), ["foo,bar,baz"]);

        let options = comma().quote_char('\'');
        assert_eq!(
            split("foo,'bar,baz',asdf", &options).unwrap(),
            ["foo", "bar,baz", "asdf"]
        );
    }

    #[test]
    fn test_open_and_close_quotes() {
        let options = comma().open_quote("{").unwrap().close_quote("}").unwrap();
        assert_eq!(
            split("foo,{bar,baz},asdf", &options).unwrap(),
            ["foo", "bar,baz", "asdf"]
        );
        assert_eq!(split("{foo,bar,baz}", &options).unwrap(), ["foo,bar,baz"]);

        let options = comma().open_quote_char('{').close_quote_char('}');
        assert_eq!(
            split("foo,{bar,baz},asdf", &options).unwrap(),
            ["foo", "bar,baz", "asdf"]
        );
    }

    #[test]
    fn test_quote_in_middle_of_element() {
        let options = comma().quote("'").unwrap();
        assert_eq!(split("ab'c,d'e,f", &options).unwrap(), ["abc,de", "f"]);
    }

    #[test]
    fn test_multi_character_quotes() {
        let options = comma().quote("##").unwrap();
        assert_eq!(split("foo,##bar,baz##", &options).unwrap(), ["foo", "bar,baz"]);

        let options = comma()
            .open_quote("[[[")
            .unwrap()
            .close_quote("]]]")
            .unwrap();
        assert_eq!(split("foo,[[[bar,baz]]]", &options).unwrap(), ["foo", "bar,baz"]);
    }

    #[test]
    fn test_unterminated_quote_closes_implicitly() {
        let options = SplitOptions::new();
        let mut splitter = Splitter::with_preferences(
            &options,
            SplitPreferences {
                collect_metrics: true,
                log_split_statistics: false,
                include_position_in_errors: true,
            },
        );
        assert_eq!(splitter.split("a,\"b,c").unwrap(), ["a", "b,c"]);
        assert!(splitter.metrics().unterminated_quote);
    }

    // ------------------------------------------------------------------
    // Escapes
    // ------------------------------------------------------------------

    #[test]
    fn test_doubled_quote_escape() {
        let options = comma().quote("'").unwrap().escaped_quote("''", "'").unwrap();
        assert_eq!(
            split("foo,o''reilly,'bar,baz'", &options).unwrap(),
            ["foo", "o'reilly", "bar,baz"]
        );
    }

    #[test]
    fn test_escaped_open_and_close_quotes() {
        let options = comma()
            .open_quote("[")
            .unwrap()
            .close_quote("]")
            .unwrap()
            .escaped_open_quote("[[", "[")
            .unwrap()
            .escaped_close_quote("]]", "]")
            .unwrap();
        assert_eq!(
            split("foo,asdf[[asdf]]asdf,[bar,baz]", &options).unwrap(),
            ["foo", "asdf[asdf]asdf", "bar,baz"]
        );
    }

    #[test]
    fn test_escaped_quotes_inside_quotes() {
        let options = comma().quote("\"").unwrap().escaped_quote("\\\"", "\"").unwrap();
        assert_eq!(
            split("foo,\"bar,baz\",\"asdf\\\"\\\"asdf\"", &options).unwrap(),
            ["foo", "bar,baz", "asdf\"\"asdf"]
        );
    }

    #[test]
    fn test_symmetric_escape_uses_mode_for_equivalent() {
        let options = comma()
            .escaped_open_quote("%", "<")
            .unwrap()
            .escaped_close_quote("%", ">")
            .unwrap();
        // outside quotes the shared escape stands for the open equivalent,
        // inside it stands for the close equivalent
        assert_eq!(split("a%,\"b%\"", &options).unwrap(), ["a<", "b>"]);
    }

    #[test]
    fn test_escape_does_not_toggle_mode() {
        let options = SplitOptions::new();
        assert_eq!(split("a\\\",b", &options).unwrap(), ["a\"", "b"]);
    }

    // ------------------------------------------------------------------
    // Errors
    // ------------------------------------------------------------------

    #[test]
    fn test_unbalanced_close_quote() {
        let options = comma().open_quote("{").unwrap().close_quote("}").unwrap();
        let error = split("foo,}bar,{baz}", &options).unwrap_err();
        assert_matches!(error, SplitError::UnbalancedCloseQuote { .. });
        assert_eq!(error.position(), Position::new(4, 1, 5));
        assert_eq!(error.error_code(), codes::split::UNBALANCED_CLOSE_QUOTE);
    }

    #[test]
    fn test_unbalanced_open_quote() {
        let options = comma().open_quote("{").unwrap().close_quote("}").unwrap();
        let error = split("foo,{bar,{baz}", &options).unwrap_err();
        assert_matches!(
            error,
            SplitError::UnbalancedOpenQuote { position } if position.offset == 9
        );
        assert_eq!(error.to_string(), "Open quote found inside quotes at 1:10");
    }

    #[test]
    fn test_error_position_on_later_line() {
        let options = SplitOptions::new()
            .delimiter_list(["\n"])
            .unwrap()
            .open_quote("<")
            .unwrap()
            .close_quote(">")
            .unwrap();
        let error = split("ok\nfine\nbad>", &options).unwrap_err();
        assert_eq!(error.position(), Position::new(11, 3, 4));
    }

    #[test]
    fn test_symmetric_quotes_never_fail() {
        let options = comma().quote("'").unwrap();
        for input in ["'", "''", "'''", "a'b'c'd", ",',',"] {
            assert!(split(input, &options).is_ok(), "failed on {:?}", input);
        }
    }

    #[test]
    fn test_scan_error_is_logged_with_span() {
        let memory = shared_memory_logger();
        let options = comma().open_quote("{").unwrap().close_quote("}").unwrap();
        let input = "scan-error-span,}";

        assert!(split(input, &options).is_err());

        let event = memory
            .get_events_with_code(codes::split::UNBALANCED_CLOSE_QUOTE)
            .into_iter()
            .find(|e| e.context.get("input_preview").map(String::as_str) == Some(input))
            .expect("scan error logged");
        let span = event.span.expect("span attached");
        assert_eq!(span.slice(input), "}");
    }

    // ------------------------------------------------------------------
    // Equivalence and metrics
    // ------------------------------------------------------------------

    #[test]
    fn test_equivalent_options_behave_identically() {
        let a = SplitOptions::new().quote("'").unwrap().delimiter(";").unwrap();
        let b = SplitOptions::new()
            .delimiter_char(';')
            .open_quote("'")
            .unwrap()
            .close_quote_char('\'');
        assert_eq!(a, b);

        let input = "x;'y;z';;w";
        assert_eq!(split(input, &a).unwrap(), split(input, &b).unwrap());
    }

    #[test]
    fn test_metrics_collection() {
        let options = comma().remove_empty_elements();
        let mut splitter = Splitter::with_preferences(
            &options,
            SplitPreferences {
                collect_metrics: true,
                log_split_statistics: false,
                include_position_in_errors: true,
            },
        );

        let input = "a,,\"b,c\",\\\"d";
        splitter.split(input).unwrap();
        let metrics = splitter.metrics();
        assert_eq!(metrics.input_bytes, input.len());
        assert_eq!(metrics.elements, 3);
        assert_eq!(metrics.empty_elements_removed, 1);
        assert_eq!(metrics.delimiters, 3);
        assert_eq!(metrics.quoted_regions, 1);
        assert_eq!(metrics.escapes, 1);
        assert!(!metrics.unterminated_quote);
    }

    #[test]
    fn test_failed_split_replaces_metrics() {
        let options = comma().open_quote("{").unwrap().close_quote("}").unwrap();
        let mut splitter = Splitter::with_preferences(
            &options,
            SplitPreferences {
                collect_metrics: true,
                log_split_statistics: false,
                include_position_in_errors: false,
            },
        );

        splitter.split("a,b").unwrap();
        assert_eq!(splitter.metrics().elements, 2);

        assert!(splitter.split("}").is_err());
        let metrics = splitter.metrics();
        assert_eq!(metrics.input_bytes, 1);
        assert_eq!(metrics.elements, 0);
        assert_eq!(metrics.delimiters, 0);
    }

    #[test]
    fn test_metrics_disabled() {
        let options = SplitOptions::new();
        let mut splitter = Splitter::with_preferences(
            &options,
            SplitPreferences {
                collect_metrics: false,
                log_split_statistics: false,
                include_position_in_errors: false,
            },
        );
        splitter.split("a,b").unwrap();
        assert_eq!(splitter.metrics(), &SplitMetrics::default());
    }

    #[test]
    fn test_input_preview_truncates() {
        let long = "é".repeat(INPUT_PREVIEW_LENGTH + 5);
        let preview = input_preview(&long);
        assert!(preview.ends_with("..."));
        assert_eq!(preview.chars().count(), INPUT_PREVIEW_LENGTH + 3);
        assert_eq!(input_preview("short"), "short");
    }
}
