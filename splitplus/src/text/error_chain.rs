//! Render an error and its `source()` chain as indented text

use super::lines::prefix_lines;
use std::error::Error;

const CAUSE_INDENT: &str = "  ";

/// Format `error` followed by each nested cause.
///
/// ```text
/// outer message
///   >> Caused by
///   inner message
///   << Caused by
/// ```
///
/// Deeper causes nest one level further.
pub fn pretty_error(error: &dyn Error) -> String {
    let mut output = error.to_string();

    if let Some(source) = error.source() {
        output.push('\n');
        output.push_str(CAUSE_INDENT);
        output.push_str(">> Caused by\n");
        output.push_str(&prefix_lines(&pretty_error(source), CAUSE_INDENT));
        output.push('\n');
        output.push_str(CAUSE_INDENT);
        output.push_str("<< Caused by");
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("{message}")]
    struct Wrapped {
        message: String,
        #[source]
        source: Option<Box<dyn Error + Send + Sync>>,
    }

    fn wrap(message: &str, source: Option<Wrapped>) -> Wrapped {
        Wrapped {
            message: message.to_string(),
            source: source.map(|s| Box::new(s) as Box<dyn Error + Send + Sync>),
        }
    }

    #[test]
    fn test_error_without_source() {
        let error = wrap("exception message", None);
        assert_eq!(pretty_error(&error), "exception message");
    }

    #[test]
    fn test_single_cause() {
        let error = wrap("wrapper message", Some(wrap("inner message", None)));
        assert_eq!(
            pretty_error(&error),
            "wrapper message\n  >> Caused by\n  inner message\n  << Caused by"
        );
    }

    #[test]
    fn test_nested_causes() {
        let error = wrap(
            "outer",
            Some(wrap("middle", Some(wrap("inner", None)))),
        );
        let expected = "outer\n\
                        \x20 >> Caused by\n\
                        \x20 middle\n\
                        \x20   >> Caused by\n\
                        \x20   inner\n\
                        \x20   << Caused by\n\
                        \x20 << Caused by";
        assert_eq!(pretty_error(&error), expected);
    }

    #[test]
    fn test_multiline_messages_are_indented() {
        let error = wrap("outer", Some(wrap("line one\nline two", None)));
        assert!(pretty_error(&error).contains("\n  line one\n  line two\n"));
    }

    #[test]
    fn test_io_error_chain() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "options.toml missing");
        let error = Wrapped {
            message: "could not load split options".to_string(),
            source: Some(Box::new(io)),
        };
        assert_eq!(
            pretty_error(&error),
            "could not load split options\n  >> Caused by\n  options.toml missing\n  << Caused by"
        );
    }
}
