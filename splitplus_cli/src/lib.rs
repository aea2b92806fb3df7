//! # splitplus CLI
//!
//! Command line front end for the splitplus library: quote-aware splitting
//! and plain-text tables.

// Module declarations
pub mod cli;
pub mod commands;
pub mod error;

pub use cli::{Cli, Command, SplitArgs, TableArgs};
pub use error::CliError;

use std::io::{Read, Write};

/// Run one subcommand against the given streams
pub fn run(command: &Command, stdin: &mut dyn Read, out: &mut dyn Write) -> Result<(), CliError> {
    match command {
        Command::Split(args) => commands::split::run(args, stdin, out),
        Command::Table(args) => commands::table::run(args, stdin, out),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_run_dispatches_subcommands() {
        let cli = Cli::parse_from(["splitplus", "split", "--json", "x,y"]);
        let mut out = Vec::new();
        run(&cli.command, &mut "".as_bytes(), &mut out).unwrap();
        assert_eq!(out, b"[\"x\",\"y\"]\n");

        let cli = Cli::parse_from(["splitplus", "table", "--borders"]);
        let mut out = Vec::new();
        run(&cli.command, &mut "1,2\n".as_bytes(), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "+-+-+\n|1|2|\n+-+-+\n");
    }

    #[test]
    fn test_failure_renders_error_chain() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("options.json");
        std::fs::write(&path, r#"{"quote": ""}"#).unwrap();

        let cli = Cli::parse_from([
            "splitplus",
            "split",
            "--options",
            path.to_str().unwrap(),
            "a",
        ]);
        let error = run(&cli.command, &mut "".as_bytes(), &mut Vec::new()).unwrap_err();
        let rendered = splitplus::pretty_error(&error);

        assert!(rendered.starts_with("Could not load options file\n  >> Caused by\n"));
        assert!(rendered.contains("Invalid options in"));
        assert!(rendered.contains("quote"));
        assert!(rendered.ends_with("  << Caused by"));
    }

    #[test]
    fn test_missing_options_file_shows_os_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let cli = Cli::parse_from([
            "splitplus",
            "split",
            "--options",
            path.to_str().unwrap(),
            "a",
        ]);
        let error = run(&cli.command, &mut "".as_bytes(), &mut Vec::new()).unwrap_err();
        let os_error = std::fs::read_to_string(&path).unwrap_err().to_string();
        let rendered = splitplus::pretty_error(&error);

        assert!(rendered.contains("I/O error reading"));
        assert!(rendered.contains(&format!("    {}", os_error)));
        assert_eq!(rendered.matches(">> Caused by").count(), 2);
    }
}
