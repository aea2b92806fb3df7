// build.rs - TOML-driven constant generation
use std::env;
use std::fs;
use std::path::Path;

#[derive(serde::Deserialize)]
struct CompileTimeConfig {
    split: SplitLimits,
    logging: LoggingLimits,
    table: TableLimits,
}

#[derive(serde::Deserialize)]
struct SplitLimits {
    element_capacity_hint: usize,
    input_preview_length: usize,
}

#[derive(serde::Deserialize)]
struct LoggingLimits {
    max_log_message_length: usize,
    memory_log_buffer_size: usize,
    security_min_log_level: u8,
}

#[derive(serde::Deserialize)]
struct TableLimits {
    max_padding: usize,
}

fn main() {
    let profile = env::var("SPLITPLUS_BUILD_PROFILE").unwrap_or_else(|_| "development".to_string());
    let config_dir = env::var("SPLITPLUS_CONFIG_DIR").unwrap_or_else(|_| "config".to_string());

    println!("cargo:rerun-if-env-changed=SPLITPLUS_BUILD_PROFILE");
    println!("cargo:rerun-if-env-changed=SPLITPLUS_CONFIG_DIR");

    // Find workspace root (parent of splitplus directory)
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let workspace_root = Path::new(&manifest_dir)
        .parent()
        .expect("Could not find workspace root (parent directory)");

    let config_path = workspace_root
        .join(&config_dir)
        .join(format!("{}.toml", profile));

    println!("cargo:rerun-if-changed={}", config_path.display());

    if !config_path.exists() {
        panic!(
            "Configuration file not found: {}\nWorkspace root: {}\nLooking for: {}/{}/{}.toml",
            config_path.display(),
            workspace_root.display(),
            workspace_root.display(),
            config_dir,
            profile
        );
    }

    let config_content = fs::read_to_string(&config_path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", config_path.display(), e));

    let config: CompileTimeConfig = toml::from_str(&config_content)
        .unwrap_or_else(|e| panic!("Invalid TOML in {}: {}", config_path.display(), e));

    validate_constraints(&config, &profile);
    generate_constants(&config, &profile);
}

fn validate_constraints(config: &CompileTimeConfig, profile: &str) {
    const ABSOLUTE_MAX_MESSAGE_LENGTH: usize = 1_000_000;
    const ABSOLUTE_MAX_PADDING: usize = 1024;

    if config.split.element_capacity_hint == 0 {
        panic!("split.element_capacity_hint must be greater than zero");
    }

    if config.logging.max_log_message_length == 0
        || config.logging.max_log_message_length > ABSOLUTE_MAX_MESSAGE_LENGTH
    {
        panic!("logging.max_log_message_length out of range");
    }

    if config.logging.memory_log_buffer_size == 0 {
        panic!("logging.memory_log_buffer_size must be greater than zero");
    }

    if config.logging.security_min_log_level > 2 {
        panic!("logging.security_min_log_level too high (max: 2)");
    }

    if config.table.max_padding > ABSOLUTE_MAX_PADDING {
        panic!("table.max_padding exceeds absolute maximum");
    }

    if profile == "production" && config.logging.memory_log_buffer_size > 100_000 {
        panic!("PRODUCTION: logging.memory_log_buffer_size too high for production");
    }
}

fn generate_constants(config: &CompileTimeConfig, profile: &str) {
    let out_dir = env::var("OUT_DIR").unwrap();
    let output_path = Path::new(&out_dir).join("constants.rs");

    let constants_code = format!(
        r#"
// Generated compile-time constants from TOML configuration
// Profile: {}
// DO NOT EDIT - Generated by build.rs

pub mod compile_time {{
    pub mod split {{
        pub const ELEMENT_CAPACITY_HINT: usize = {};
        pub const INPUT_PREVIEW_LENGTH: usize = {};
    }}

    pub mod logging {{
        pub const MAX_LOG_MESSAGE_LENGTH: usize = {};
        pub const MEMORY_LOG_BUFFER_SIZE: usize = {};
        pub const SECURITY_MIN_LOG_LEVEL: u8 = {};
    }}

    pub mod table {{
        pub const MAX_PADDING: usize = {};
    }}
}}
"#,
        profile,
        config.split.element_capacity_hint,
        config.split.input_preview_length,
        config.logging.max_log_message_length,
        config.logging.memory_log_buffer_size,
        config.logging.security_min_log_level,
        config.table.max_padding,
    );

    fs::write(output_path, constants_code).unwrap();
}
