//! Output formatting for CLI results.

use std::io::Write;

use serde::Serialize;

use crate::cli::args::{OutputFormat, SpellRankArgs};
use crate::error::Result;
use crate::spelling::{RankedResult, SpellCheck};

/// JSON document written for `--format json`.
#[derive(Debug, Serialize)]
pub struct CheckOutput<'a> {
    pub query: &'a str,
    #[serde(flatten)]
    pub result: &'a SpellCheck,
}

/// Output a result in the specified format.
pub fn output_result<W: Write>(
    query: &str,
    check: &SpellCheck,
    args: &SpellRankArgs,
    out: &mut W,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(check, args, out),
        OutputFormat::Json => output_json(query, check, args, out),
    }
}

/// Output in human-readable format.
fn output_human<W: Write>(check: &SpellCheck, args: &SpellRankArgs, out: &mut W) -> Result<()> {
    match check {
        SpellCheck::Correct => writeln!(out, "Spelled correctly")?,
        SpellCheck::Suggestions(ranked) => output_suggestions_human(ranked, args, out)?,
    }
    Ok(())
}

/// Output suggestions in human format, one word per line.
fn output_suggestions_human<W: Write>(
    ranked: &RankedResult,
    args: &SpellRankArgs,
    out: &mut W,
) -> Result<()> {
    if args.verbosity() > 0 {
        if ranked.is_empty() {
            writeln!(out, "No suggestions found")?;
        } else {
            writeln!(out, "Top {} suggested words:", ranked.len())?;
        }
    }

    for suggestion in ranked {
        if args.show_distance {
            writeln!(out, "{}\t{}", suggestion.word, suggestion.distance)?;
        } else {
            writeln!(out, "{}", suggestion.word)?;
        }
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<W: Write>(
    query: &str,
    check: &SpellCheck,
    args: &SpellRankArgs,
    out: &mut W,
) -> Result<()> {
    let document = CheckOutput {
        query,
        result: check,
    };
    if args.pretty {
        serde_json::to_writer_pretty(&mut *out, &document)?;
    } else {
        serde_json::to_writer(&mut *out, &document)?;
    }
    writeln!(out)?;
    Ok(())
}
