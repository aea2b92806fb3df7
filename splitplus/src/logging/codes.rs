//! Consolidated log codes and classification system
//!
//! Single source of truth for every code emitted by splitplus, together with
//! the behavioral metadata used when formatting and filtering events.

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// CODE WRAPPER TYPE
// ============================================================================

/// Universal code wrapper for both error and success codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// ERROR CLASSIFICATION TYPES
// ============================================================================

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Critical = 0,
    High = 1,
    Medium = 2,
    Low = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

/// Complete metadata for a code
#[derive(Debug, Clone)]
pub struct CodeMetadata {
    pub code: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub recoverable: bool,
    pub description: &'static str,
    pub recommended_action: &'static str,
}

impl CodeMetadata {
    const fn new(
        code: &'static str,
        category: &'static str,
        severity: Severity,
        recoverable: bool,
        description: &'static str,
        recommended_action: &'static str,
    ) -> Self {
        Self {
            code,
            category,
            severity,
            recoverable,
            description,
            recommended_action,
        }
    }
}

// ============================================================================
// ERROR CODE CONSTANTS
// ============================================================================

/// System error codes
pub mod system {
    use super::Code;

    pub const INTERNAL_ERROR: Code = Code::new("ERR001");
    pub const INITIALIZATION_FAILURE: Code = Code::new("ERR002");
    pub const IO_ERROR: Code = Code::new("ERR003");
}

/// Split option validation codes
pub mod options {
    use super::Code;

    pub const EMPTY_OPTION_VALUE: Code = Code::new("E010");
    pub const INVALID_OPTIONS_FILE: Code = Code::new("E011");
}

/// Split scan codes
pub mod split {
    use super::Code;

    pub const UNBALANCED_OPEN_QUOTE: Code = Code::new("E020");
    pub const UNBALANCED_CLOSE_QUOTE: Code = Code::new("E021");
    pub const UNTERMINATED_QUOTE: Code = Code::new("W020");
}

/// Text helper codes
pub mod text {
    use super::Code;

    pub const INVALID_REPETITION_COUNT: Code = Code::new("E025");
    pub const INVALID_TOKEN_PATTERN: Code = Code::new("E026");
}

/// Table rendering codes
pub mod table {
    use super::Code;

    pub const UNKNOWN_COLUMN: Code = Code::new("E030");
    pub const DUPLICATE_COLUMN: Code = Code::new("E031");
    pub const PADDING_TOO_LARGE: Code = Code::new("E032");
}

// ============================================================================
// SUCCESS CODE CONSTANTS
// ============================================================================

/// Success codes
pub mod success {
    use super::Code;

    pub const SYSTEM_INITIALIZATION_COMPLETED: Code = Code::new("I001");
    pub const SPLIT_COMPLETE: Code = Code::new("I020");
    pub const TABLE_RENDERED: Code = Code::new("I030");
}

// ============================================================================
// CODE METADATA REGISTRY
// ============================================================================

const REGISTRY_ENTRIES: &[CodeMetadata] = &[
    CodeMetadata::new(
        "ERR001",
        "System",
        Severity::Critical,
        false,
        "Critical internal system error",
        "File a bug report with the failing input",
    ),
    CodeMetadata::new(
        "ERR002",
        "System",
        Severity::Critical,
        false,
        "Logging or configuration initialization failed",
        "Check environment configuration and initialize logging once",
    ),
    CodeMetadata::new(
        "ERR003",
        "System",
        Severity::High,
        false,
        "Reading input or writing output failed",
        "Check file paths and permissions",
    ),
    CodeMetadata::new(
        "E010",
        "Options",
        Severity::High,
        false,
        "A delimiter, quote, escape or equivalent string was empty",
        "Supply a non-empty marker string",
    ),
    CodeMetadata::new(
        "E011",
        "Options",
        Severity::High,
        false,
        "Split options file could not be parsed",
        "Fix the TOML or JSON options description",
    ),
    CodeMetadata::new(
        "E020",
        "Split",
        Severity::Medium,
        false,
        "Open quote found inside a quoted region",
        "Balance the open and close quote markers in the input",
    ),
    CodeMetadata::new(
        "E021",
        "Split",
        Severity::Medium,
        false,
        "Close quote found outside of a quoted region",
        "Balance the open and close quote markers in the input",
    ),
    CodeMetadata::new(
        "W020",
        "Split",
        Severity::Low,
        true,
        "Quoted region still open at end of input",
        "The region was closed implicitly; check the input if this is unexpected",
    ),
    CodeMetadata::new(
        "E025",
        "Text",
        Severity::Medium,
        false,
        "Repetition count must be greater than zero",
        "Pass a positive repetition count",
    ),
    CodeMetadata::new(
        "E026",
        "Text",
        Severity::Medium,
        false,
        "Token pattern is invalid or does not have exactly one capture group",
        "Write the pattern with a single unquantified capture group",
    ),
    CodeMetadata::new(
        "E030",
        "Table",
        Severity::Medium,
        false,
        "Cell refers to a column that was never added",
        "Add the column before setting cells in it",
    ),
    CodeMetadata::new(
        "E031",
        "Table",
        Severity::Medium,
        false,
        "Column name already exists in the table",
        "Use unique column names",
    ),
    CodeMetadata::new(
        "E032",
        "Table",
        Severity::Low,
        false,
        "Requested padding exceeds the configured maximum",
        "Use a smaller padding value",
    ),
    CodeMetadata::new(
        "I001",
        "System",
        Severity::Low,
        true,
        "Logging system initialized",
        "None",
    ),
    CodeMetadata::new(
        "I020",
        "Split",
        Severity::Low,
        true,
        "String split completed successfully",
        "None",
    ),
    CodeMetadata::new(
        "I030",
        "Table",
        Severity::Low,
        true,
        "Table rendered successfully",
        "None",
    ),
];

static CODE_REGISTRY: OnceLock<HashMap<&'static str, &'static CodeMetadata>> = OnceLock::new();

fn get_code_registry() -> &'static HashMap<&'static str, &'static CodeMetadata> {
    CODE_REGISTRY.get_or_init(|| {
        REGISTRY_ENTRIES
            .iter()
            .map(|metadata| (metadata.code, metadata))
            .collect()
    })
}

// ============================================================================
// CLASSIFICATION FUNCTIONS
// ============================================================================

/// Get metadata for a specific code
pub fn get_code_metadata(code: &str) -> Option<&'static CodeMetadata> {
    get_code_registry().get(code).copied()
}

/// Get severity from code
pub fn get_severity(code: &str) -> Severity {
    get_code_metadata(code)
        .map(|metadata| metadata.severity)
        .unwrap_or(Severity::Medium)
}

/// Check if a coded condition is recoverable
pub fn is_recoverable(code: &str) -> bool {
    get_code_metadata(code)
        .map(|metadata| metadata.recoverable)
        .unwrap_or(true)
}

/// Get human-readable description for code
pub fn get_description(code: &str) -> &'static str {
    get_code_metadata(code)
        .map(|metadata| metadata.description)
        .unwrap_or("Unknown error")
}

/// Get recommended action for code
pub fn get_action(code: &str) -> &'static str {
    get_code_metadata(code)
        .map(|metadata| metadata.recommended_action)
        .unwrap_or("No specific action available")
}

/// Get category from code
pub fn get_category(code: &str) -> &'static str {
    get_code_metadata(code)
        .map(|metadata| metadata.category)
        .unwrap_or("Unknown")
}
