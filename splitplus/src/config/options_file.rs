//! Loading split options from TOML or JSON files

use crate::logging::codes;
use crate::split::{OptionsError, SplitOptions, SplitOptionsConfig};
use crate::{log_debug, log_error};
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Arc;

/// Errors reading or interpreting an options file
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("I/O error reading {path}")]
    Io {
        path: String,
        #[source]
        source: Arc<io::Error>,
    },

    #[error("Unsupported options file format: {path} (expected .toml or .json)")]
    UnsupportedFormat { path: String },

    #[error("Invalid options in {path}: {message}")]
    Parse { path: String, message: String },

    #[error("Invalid options in {path}")]
    Options {
        path: String,
        #[source]
        source: OptionsError,
    },
}

impl ConfigError {
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            ConfigError::Io { .. } => codes::system::IO_ERROR,
            ConfigError::UnsupportedFormat { .. } | ConfigError::Parse { .. } => {
                codes::options::INVALID_OPTIONS_FILE
            }
            ConfigError::Options { source, .. } => source.error_code(),
        }
    }

    pub fn category(&self) -> &'static str {
        codes::get_category(self.error_code().as_str())
    }
}

/// Serialization format of an options file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionsFormat {
    Toml,
    Json,
}

impl OptionsFormat {
    /// Format implied by the file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "toml" => Some(OptionsFormat::Toml),
            "json" => Some(OptionsFormat::Json),
            _ => None,
        }
    }
}

/// Parse and validate options text. `origin` names the source in errors.
pub fn parse_split_options(
    text: &str,
    format: OptionsFormat,
    origin: &str,
) -> Result<SplitOptions, ConfigError> {
    let parsed: Result<SplitOptionsConfig, String> = match format {
        OptionsFormat::Toml => toml::from_str(text).map_err(|e| e.to_string()),
        OptionsFormat::Json => serde_json::from_str(text).map_err(|e| e.to_string()),
    };

    let config = parsed.map_err(|message| {
        let error = ConfigError::Parse {
            path: origin.to_string(),
            message,
        };
        log_error!(error.error_code(), "Options file could not be parsed",
            "path" => origin,
            "format" => format!("{:?}", format)
        );
        error
    })?;

    SplitOptions::try_from(config).map_err(|source| ConfigError::Options {
        path: origin.to_string(),
        source,
    })
}

/// Read split options from a `.toml` or `.json` file
pub fn load_split_options(path: &Path) -> Result<SplitOptions, ConfigError> {
    let display = path.display().to_string();

    let format = OptionsFormat::from_path(path).ok_or_else(|| {
        let error = ConfigError::UnsupportedFormat {
            path: display.clone(),
        };
        log_error!(error.error_code(), "Options file has unsupported extension",
            "path" => &display
        );
        error
    })?;

    let text = fs::read_to_string(path).map_err(|e| {
        log_error!(codes::system::IO_ERROR, "Options file could not be read",
            "path" => &display,
            "error" => &e
        );
        ConfigError::Io {
            path: display.clone(),
            source: Arc::new(e),
        }
    })?;

    log_debug!("Loading split options",
        "path" => &display,
        "bytes" => text.len()
    );

    parse_split_options(&text, format, &display)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::path::PathBuf;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            OptionsFormat::from_path(Path::new("opts.toml")),
            Some(OptionsFormat::Toml)
        );
        assert_eq!(
            OptionsFormat::from_path(Path::new("dir/opts.JSON")),
            Some(OptionsFormat::Json)
        );
        assert_eq!(OptionsFormat::from_path(Path::new("opts.yaml")), None);
        assert_eq!(OptionsFormat::from_path(Path::new("opts")), None);
    }

    #[test]
    fn test_parse_toml_options() {
        let options = parse_split_options(
            "delimiters = [\";\"]\nquote = \"'\"\nremove_empty_elements = true\n",
            OptionsFormat::Toml,
            "inline",
        )
        .unwrap();

        let expected = SplitOptions::new()
            .delimiter(";")
            .unwrap()
            .quote("'")
            .unwrap()
            .remove_empty_elements();
        assert_eq!(options, expected);
    }

    #[test]
    fn test_parse_json_options() {
        let options = parse_split_options(
            r#"{"open_quote": "{", "close_quote": "}"}"#,
            OptionsFormat::Json,
            "inline",
        )
        .unwrap();
        assert_eq!(options.get_open_quote(), "{");
        assert_eq!(options.get_close_quote(), "}");
    }

    #[test]
    fn test_parse_errors() {
        let result = parse_split_options("delimiters = ", OptionsFormat::Toml, "bad.toml");
        assert_matches!(result, Err(ConfigError::Parse { ref path, .. }) if path == "bad.toml");

        let result = parse_split_options(r#"{"colour": "red"}"#, OptionsFormat::Json, "x.json");
        assert_matches!(result, Err(ConfigError::Parse { .. }));

        let result = parse_split_options(r#"{"quote": ""}"#, OptionsFormat::Json, "x.json");
        assert_matches!(
            result,
            Err(ConfigError::Options {
                source: OptionsError::EmptyValue { field: "quote" },
                ..
            })
        );
    }

    #[test]
    fn test_unsupported_extension() {
        let result = load_split_options(&PathBuf::from("options.ini"));
        assert_matches!(result, Err(ConfigError::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_missing_file() {
        let result = load_split_options(&PathBuf::from("/nonexistent/splitplus/options.toml"));
        assert_matches!(result, Err(ConfigError::Io { .. }));

        let error = result.unwrap_err();
        assert_eq!(error.error_code().as_str(), "ERR003");
        let source = std::error::Error::source(&error)
            .and_then(|e| e.downcast_ref::<Arc<io::Error>>())
            .expect("io error kept as source");
        assert_eq!(source.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("options.toml");
        fs::write(&path, "delimiters = [\"|\"]\n").unwrap();

        let options = load_split_options(&path).unwrap();
        assert_eq!(options.delimiters(), ["|"]);
    }

    #[test]
    fn test_error_codes() {
        let error = ConfigError::Parse {
            path: "x".into(),
            message: "y".into(),
        };
        assert_eq!(error.error_code().as_str(), "E011");

        let error = ConfigError::Options {
            path: "x".into(),
            source: OptionsError::EmptyValue { field: "quote" },
        };
        assert_eq!(error.error_code().as_str(), "E010");
    }
}
