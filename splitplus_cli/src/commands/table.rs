//! `table` subcommand

use super::split::strip_final_newline;
use crate::cli::TableArgs;
use crate::error::CliError;
use splitplus::logging::codes;
use splitplus::{log_performance, split_lines, SplitOptions, Splitter, StringTableBuilder};
use std::io::{Read, Write};
use std::time::Instant;

/// Build a table from `text`, one row per line and one cell per element
pub fn build_table(args: &TableArgs, text: &str) -> Result<StringTableBuilder, CliError> {
    let mut options = SplitOptions::new().delimiter(&args.delimiter)?;
    if let Some(quote) = &args.quote {
        options = options.quote(quote)?;
    }

    let mut splitter = Splitter::new(&options);
    let mut rows = Vec::new();
    for line in split_lines(text) {
        rows.push(splitter.split(&line)?);
    }

    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    let names: Vec<String> = (1..=width).map(|n| n.to_string()).collect();

    let mut table = StringTableBuilder::new();
    for name in &names {
        let column = table.add_column(name)?;
        if args.align_right {
            column.align_right();
        }
    }
    table
        .draw_borders(args.borders)
        .cell_padding(args.padding)?
        .inner_cell_padding(args.inner_padding)?;

    for cells in &rows {
        let mut row = table.add_row();
        for (name, value) in names.iter().zip(cells) {
            row.set_cell(name, value)?;
        }
    }

    Ok(table)
}

pub fn run(args: &TableArgs, stdin: &mut dyn Read, out: &mut dyn Write) -> Result<(), CliError> {
    let mut text = String::new();
    stdin.read_to_string(&mut text)?;
    let text = strip_final_newline(text);

    let table = build_table(args, &text)?;
    let started = Instant::now();
    let rendered = table.render();
    log_performance!(codes::success::TABLE_RENDERED, "Table rendered",
        duration = started.elapsed(),
        "rows" => table.rows().len(),
        "columns" => table.columns().len()
    );

    if !rendered.is_empty() {
        writeln!(out, "{}", rendered)?;
    }
    Ok(())
}
