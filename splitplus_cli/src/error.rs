use splitplus::logging::{codes, Code};
use splitplus::{ConfigError, OptionsError, SplitError, TableError};

/// Failure of a CLI command; the wrapped error is kept as the source
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Invalid split options")]
    Options(#[from] OptionsError),

    #[error("Could not load options file")]
    Config(#[from] ConfigError),

    #[error("Could not split input")]
    Split(#[from] SplitError),

    #[error("Could not build table")]
    Table(#[from] TableError),

    #[error("I/O failure")]
    Io(#[from] std::io::Error),

    #[error("Could not encode output as JSON")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    pub fn error_code(&self) -> Code {
        match self {
            CliError::Options(e) => e.error_code(),
            CliError::Config(e) => e.error_code(),
            CliError::Split(e) => e.error_code(),
            CliError::Table(e) => e.error_code(),
            CliError::Io(_) => codes::system::IO_ERROR,
            CliError::Json(_) => codes::system::INTERNAL_ERROR,
        }
    }
}
