//! `split` subcommand

use crate::cli::SplitArgs;
use crate::error::CliError;
use splitplus::config::load_split_options;
use splitplus::{log_debug, SplitOptions, Splitter};
use std::io::{Read, Write};

/// Options from the options file, if any, overridden by explicit flags
pub fn build_options(args: &SplitArgs) -> Result<SplitOptions, CliError> {
    let mut options = match &args.options {
        Some(path) => load_split_options(path)?,
        None => SplitOptions::new(),
    };

    if !args.delimiters.is_empty() {
        options = options.delimiter_list(&args.delimiters)?;
    }
    if let Some(quote) = &args.quote {
        options = options.quote(quote)?;
    }
    if let (Some(open), Some(close)) = (&args.open_quote, &args.close_quote) {
        options = options.open_quote(open)?.close_quote(close)?;
    }
    if let (Some(escaped), Some(equivalent)) = (&args.escaped_quote, &args.equivalent) {
        options = options.escaped_quote(escaped, equivalent)?;
    }
    if args.remove_empty {
        options = options.remove_empty_elements();
    }

    Ok(options)
}

/// Text to split: the positional argument, or stdin without its final
/// line break
pub fn read_input(args: &SplitArgs, stdin: &mut dyn Read) -> Result<String, CliError> {
    if let Some(input) = &args.input {
        return Ok(input.clone());
    }

    let mut text = String::new();
    stdin.read_to_string(&mut text)?;
    Ok(strip_final_newline(text))
}

pub(crate) fn strip_final_newline(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}

pub fn run(args: &SplitArgs, stdin: &mut dyn Read, out: &mut dyn Write) -> Result<(), CliError> {
    let options = build_options(args)?;
    let input = read_input(args, stdin)?;

    let mut splitter = Splitter::new(&options);
    let elements = splitter.split(&input)?;

    log_debug!("Split command finished",
        "elements" => elements.len(),
        "delimiters" => splitter.metrics().delimiters
    );

    if args.json {
        serde_json::to_writer(&mut *out, &elements)?;
        writeln!(out)?;
    } else {
        for element in &elements {
            writeln!(out, "{}", element)?;
        }
    }
    Ok(())
}
