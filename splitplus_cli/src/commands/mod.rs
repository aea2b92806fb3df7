//! Subcommand implementations. Each reads from the given input and writes
//! to the given output so tests can drive them without a terminal.

pub mod split;
pub mod table;
