// reworded: Generate letter permutations of one word and list the
// dictionary words among them.
//
// Usage:
//   reworded [OPTIONS] [WORD]
//
// Without WORD, prints the empty-state placeholder for the selected view.

use clap::Parser;
use reworded_cli::{
    CommonArgs, apply_limits, fatal, load_handle_or_warn, render_placeholder, render_reports,
};

#[derive(Parser, Debug)]
#[command(name = "reworded")]
#[command(about = "Letter permutation playground: every arrangement of a word's letters, and which are real words", long_about = None)]
#[command(version)]
struct Cli {
    /// Letters to rearrange (ASCII letters only)
    word: Option<String>,

    #[command(flatten)]
    common: CommonArgs,
}

fn main() {
    reworded_cli::init_tracing();
    let cli = Cli::parse();
    let common = &cli.common;

    let Some(word) = cli.word.as_deref() else {
        println!("{}", render_placeholder(common.view, common.format));
        return;
    };

    let mut handle = load_handle_or_warn(common.dict_path.as_deref());
    apply_limits(&mut handle, common);
    let min_length = handle.resolve_min_length(&common.min_length);

    let reports = handle
        .spawn(word, min_length)
        .and_then(|task| task.wait())
        .unwrap_or_else(|e| fatal(&e.to_string()));

    println!("{}", render_reports(&reports, common.view, common.format));
}
