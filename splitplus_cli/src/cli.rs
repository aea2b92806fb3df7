//! Command line arguments

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "splitplus")]
#[command(version, about = "Quote-aware string splitting and plain-text tables")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Emit log events as JSON lines instead of through env_logger
    #[arg(long, global = true)]
    pub structured_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Split text into elements, one per output line
    Split(SplitArgs),
    /// Render delimited lines read from stdin as a table
    Table(TableArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct SplitArgs {
    /// Element delimiter; repeat for several, matched in the order given
    #[arg(short, long = "delimiter", value_name = "D")]
    pub delimiters: Vec<String>,

    /// Marker that both opens and closes quoted regions
    #[arg(short, long, conflicts_with_all = ["open_quote", "close_quote"])]
    pub quote: Option<String>,

    /// Marker opening quoted regions
    #[arg(long, requires = "close_quote")]
    pub open_quote: Option<String>,

    /// Marker closing quoted regions
    #[arg(long, requires = "open_quote")]
    pub close_quote: Option<String>,

    /// Escape sequence standing for a literal quote
    #[arg(long, requires = "equivalent")]
    pub escaped_quote: Option<String>,

    /// Text written in place of each escaped quote
    #[arg(long, requires = "escaped_quote")]
    pub equivalent: Option<String>,

    /// Drop empty elements from the output
    #[arg(short, long)]
    pub remove_empty: bool,

    /// TOML or JSON options file; flags override its values
    #[arg(long, value_name = "FILE")]
    pub options: Option<PathBuf>,

    /// Print elements as a JSON array
    #[arg(long)]
    pub json: bool,

    /// Text to split; stdin is read when absent
    pub input: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct TableArgs {
    /// Cell delimiter within each line
    #[arg(short, long, default_value = ",")]
    pub delimiter: String,

    /// Quote marker protecting delimiters inside cells
    #[arg(short, long)]
    pub quote: Option<String>,

    /// Draw `+`, `-` and `|` borders
    #[arg(short, long)]
    pub borders: bool,

    /// Padding around every cell
    #[arg(long, default_value_t = 0)]
    pub padding: usize,

    /// Extra padding between neighbouring cells
    #[arg(long, default_value_t = 0)]
    pub inner_padding: usize,

    /// Right-align every column
    #[arg(long)]
    pub align_right: bool,
}

impl Default for TableArgs {
    fn default() -> Self {
        Self {
            delimiter: ",".to_string(),
            quote: None,
            borders: false,
            padding: 0,
            inner_padding: 0,
            align_right: false,
        }
    }
}
