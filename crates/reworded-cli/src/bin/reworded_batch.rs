// reworded-batch: Run the permutation engine for each word read from stdin.
//
// Each non-blank input line holds a word, optionally followed by a
// minimum length that overrides --min-length for that line:
//   apple
//   planets 4
//
// Text output prints a "== word ==" header followed by the selected
// report(s). Failed lines, including lines with extra fields or a
// non-integer minimum, print "E: word: message" and processing continues.
// JSON output writes one object per line.
//
// Usage:
//   reworded-batch [OPTIONS] < words.txt

use std::io::{self, BufRead, BufWriter, Write};

use clap::Parser;
use reworded_cli::{
    BatchLine, CommonArgs, OutputFormat, ViewArg, apply_limits, load_handle_or_warn,
    parse_batch_line, render_reports,
};
use reworded_core::report::{AllCombinationsReport, Reports, ValidWordsReport};
use reworded_core::threshold::MinLength;
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "reworded-batch")]
#[command(about = "Run the permutation engine for each word on stdin", long_about = None)]
#[command(version)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,
}

/// One JSON Lines record.
#[derive(Serialize)]
struct Record<'a> {
    word: &'a str,
    min_length: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    all: Option<&'a AllCombinationsReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    valid: Option<&'a ValidWordsReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

fn main() {
    reworded_cli::init_tracing();
    let cli = Cli::parse();
    let common = &cli.common;

    let mut handle = load_handle_or_warn(common.dict_path.as_deref());
    apply_limits(&mut handle, common);
    let default_min = handle.resolve_min_length(&common.min_length);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        let (word, min_length, result) = match parse_batch_line(&line) {
            Ok(None) => continue,
            Ok(Some(BatchLine { word, min_length })) => {
                let min_length =
                    min_length.map_or(default_min, |text| handle.resolve_min_length(text));
                let result = handle
                    .generate(word, min_length)
                    .map_err(|e| e.to_string());
                (word, min_length, result)
            }
            Err(e) => {
                let word = line.split_whitespace().next().unwrap_or_default();
                (word, default_min, Err(e.to_string()))
            }
        };

        let written = match common.format {
            OutputFormat::Text => write_text(&mut out, word, &result, common.view),
            OutputFormat::Json => write_json(&mut out, word, min_length, &result, common.view),
        };
        if let Err(e) = written {
            eprintln!("error writing output: {e}");
            break;
        }
    }
}

fn write_text(
    out: &mut impl Write,
    word: &str,
    result: &Result<Reports, String>,
    view: ViewArg,
) -> io::Result<()> {
    match result {
        Ok(reports) => {
            writeln!(out, "== {word} ==")?;
            writeln!(out, "{}", render_reports(reports, view, OutputFormat::Text))?;
        }
        Err(e) => writeln!(out, "E: {word}: {e}")?,
    }
    Ok(())
}

fn write_json(
    out: &mut impl Write,
    word: &str,
    min_length: MinLength,
    result: &Result<Reports, String>,
    view: ViewArg,
) -> io::Result<()> {
    let record = match result {
        Ok(reports) => Record {
            word,
            min_length: min_length.get(),
            all: matches!(view, ViewArg::All | ViewArg::Both).then_some(&reports.all),
            valid: matches!(view, ViewArg::Valid | ViewArg::Both).then_some(&reports.valid),
            error: None,
        },
        Err(e) => Record {
            word,
            min_length: min_length.get(),
            all: None,
            valid: None,
            error: Some(e.as_str()),
        },
    };
    serde_json::to_writer(&mut *out, &record)?;
    writeln!(out)
}
