// reworded-cli: shared utilities for the command-line tools.

pub mod render;

use std::path::{Path, PathBuf};
use std::process;

use clap::{Args, ValueEnum};
use reworded_core::report::{ReportRenderer, Reports, View};
use reworded_engine::dictionary::{
    DEFAULT_DICTIONARY_FILE, Dictionary, DictionaryError, FileDictionaryProvider,
};
use reworded_engine::handle::RewordedHandle;
use tracing_subscriber::EnvFilter;

use crate::render::{JsonRenderer, TextRenderer};

/// Environment variable naming a dictionary file or a directory holding one.
pub const DICT_PATH_ENV: &str = "REWORDED_DICT_PATH";

/// Per-user dictionary directory under the home directory.
const USER_DICT_DIR: &str = ".reworded";

/// JSON settings shared by reports and placeholders.
const JSON: JsonRenderer = JsonRenderer { pretty: true };

/// Which report(s) to print.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ViewArg {
    /// Dictionary words grouped by length
    #[default]
    Valid,
    /// Every generated string
    All,
    /// Both reports
    Both,
}

/// Output encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Options shared by all tools.
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Dictionary file, or a directory containing words_alpha.txt
    #[arg(short, long = "dict-path", env = DICT_PATH_ENV)]
    pub dict_path: Option<PathBuf>,

    /// Minimum word length; anything but a positive integer falls back to 2
    #[arg(short, long = "min-length", default_value = "3", allow_hyphen_values = true)]
    pub min_length: String,

    /// Report to show
    #[arg(long, value_enum, default_value_t)]
    pub view: ViewArg,

    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    pub format: OutputFormat,

    /// Refuse words longer than this many letters
    #[arg(long)]
    pub max_letters: Option<usize>,

    /// Abort once more than this many distinct strings are generated
    #[arg(long)]
    pub max_generated: Option<usize>,

    /// Arrangements generated between cancellation checks
    #[arg(long)]
    pub cancel_check_interval: Option<usize>,
}

/// Install the stderr log subscriber. `RUST_LOG` overrides the default
/// `warn` level.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Build the list of dictionary locations to try, most specific first.
///
/// Search order:
/// 1. `dict_path` argument (a file, or a directory holding `words_alpha.txt`)
/// 2. `~/.reworded/words_alpha.txt`
/// 3. Next to the executable
/// 4. Current working directory
///
/// The environment variable is handled by clap, which folds it into
/// `dict_path`.
pub fn build_search_paths(dict_path: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(p) = dict_path {
        paths.push(p.to_path_buf());
        paths.push(p.join(DEFAULT_DICTIONARY_FILE));
    }

    if let Some(home) = home_dir() {
        paths.push(home.join(USER_DICT_DIR).join(DEFAULT_DICTIONARY_FILE));
    }

    if let Some(dir) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        paths.push(dir.join(DEFAULT_DICTIONARY_FILE));
    }

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(DEFAULT_DICTIONARY_FILE));
    }

    paths
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME").map(PathBuf::from)
}

/// Create a handle from the first dictionary found on the search path.
pub fn load_handle(dict_path: Option<&Path>) -> Result<RewordedHandle, DictionaryError> {
    let provider = FileDictionaryProvider::with_candidates(build_search_paths(dict_path));
    RewordedHandle::from_provider(&provider)
}

/// Like [`load_handle`], but a missing or unreadable dictionary only
/// produces a warning and an empty word list, so every input still gets
/// its all-combinations report.
pub fn load_handle_or_warn(dict_path: Option<&Path>) -> RewordedHandle {
    match load_handle(dict_path) {
        Ok(handle) => handle,
        Err(DictionaryError::Unavailable { searched }) => {
            eprintln!(
                "warning: could not find {DEFAULT_DICTIONARY_FILE}; valid words will be empty. Searched:\n{}",
                searched
                    .iter()
                    .map(|p| format!("  - {}", p.display()))
                    .collect::<Vec<_>>()
                    .join("\n")
            );
            RewordedHandle::with_dictionary(Dictionary::empty())
        }
        Err(e) => {
            eprintln!("warning: {e}; valid words will be empty");
            RewordedHandle::with_dictionary(Dictionary::empty())
        }
    }
}

/// Apply the limit and cancellation flags to a handle.
pub fn apply_limits(handle: &mut RewordedHandle, args: &CommonArgs) {
    handle.set_max_letters(args.max_letters);
    handle.set_max_generated(args.max_generated);
    if let Some(interval) = args.cancel_check_interval {
        handle.set_cancel_check_interval(interval);
    }
}

/// Render reports for the selected view and format.
pub fn render_reports(reports: &Reports, view: ViewArg, format: OutputFormat) -> String {
    match (format, view) {
        (OutputFormat::Text, ViewArg::Both) => TextRenderer.render_both(reports),
        (OutputFormat::Text, ViewArg::Valid) => TextRenderer.render(reports, View::Valid),
        (OutputFormat::Text, ViewArg::All) => TextRenderer.render(reports, View::All),
        (OutputFormat::Json, view) => {
            let rendered = match view {
                ViewArg::Both => JSON.render_both(reports),
                ViewArg::Valid => JSON.render(reports, View::Valid),
                ViewArg::All => JSON.render(reports, View::All),
            };
            rendered.unwrap_or_else(|e| fatal(&format!("failed to encode JSON: {e}")))
        }
    }
}

/// Render the empty state shown before any word is entered.
pub fn render_placeholder(view: ViewArg, format: OutputFormat) -> String {
    let views: &[View] = match view {
        ViewArg::Valid => &[View::Valid],
        ViewArg::All => &[View::All],
        ViewArg::Both => &[View::All, View::Valid],
    };
    views
        .iter()
        .map(|&v| match format {
            OutputFormat::Text => TextRenderer.render_placeholder(v),
            OutputFormat::Json => JSON
                .render_placeholder(v)
                .unwrap_or_else(|e| fatal(&format!("failed to encode JSON: {e}"))),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One parsed line of batch input: a word and an optional threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchLine<'a> {
    pub word: &'a str,
    pub min_length: Option<&'a str>,
}

/// A batch input line that cannot be read as `word [min]`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BatchLineError {
    #[error("expected `word [min]`, found {0} fields")]
    TooManyFields(usize),

    #[error("minimum length `{0}` is not an integer")]
    NotAnInteger(String),
}

/// Split a batch line into a word and optional threshold.
///
/// Blank lines yield `Ok(None)`. The threshold field must look like an
/// integer; its value is still resolved by the usual default rule, so
/// `0` or `-3` fall back to 2 while `pie` is rejected.
pub fn parse_batch_line(line: &str) -> Result<Option<BatchLine<'_>>, BatchLineError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    match fields[..] {
        [] => Ok(None),
        [word] => Ok(Some(BatchLine {
            word,
            min_length: None,
        })),
        [word, min] => {
            let digits = min.strip_prefix(['+', '-']).unwrap_or(min);
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return Err(BatchLineError::NotAnInteger(min.to_string()));
            }
            Ok(Some(BatchLine {
                word,
                min_length: Some(min),
            }))
        }
        _ => Err(BatchLineError::TooManyFields(fields.len())),
    }
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}
