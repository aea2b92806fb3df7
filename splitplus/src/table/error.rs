use crate::logging::codes;

/// Table construction errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("Unknown column: '{name}'")]
    UnknownColumn { name: String },

    #[error("Duplicate column: '{name}'")]
    DuplicateColumn { name: String },

    #[error("Padding {requested} exceeds maximum {max}")]
    PaddingTooLarge { requested: usize, max: usize },
}

impl TableError {
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            TableError::UnknownColumn { .. } => codes::table::UNKNOWN_COLUMN,
            TableError::DuplicateColumn { .. } => codes::table::DUPLICATE_COLUMN,
            TableError::PaddingTooLarge { .. } => codes::table::PADDING_TOO_LARGE,
        }
    }
}
