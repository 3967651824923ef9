// Criterion benchmarks for reworded-engine.
//
// Uses a small built-in word list so the benchmarks need no external
// dictionary file. Set REWORDED_DICT_PATH to a words_alpha.txt to measure
// classification against a full-size dictionary instead.
//
// Run:
//   cargo bench -p reworded-engine
//   REWORDED_DICT_PATH=/path/to/words_alpha.txt cargo bench -p reworded-engine

use criterion::{Criterion, criterion_group, criterion_main};
use reworded_core::letters::Letters;
use reworded_core::threshold::MinLength;
use reworded_engine::control::{CancelToken, GenerateOptions};
use reworded_engine::dictionary::{Dictionary, DictionaryProvider, FileDictionaryProvider};
use reworded_engine::generator::expand;
use reworded_engine::pipeline::generate;

const FALLBACK_WORDS: &[&str] = &[
    "ale", "ape", "lap", "leap", "pal", "pale", "peal", "pea", "plea", "apple", "appel", "pep",
    "stop", "pots", "tops", "spot", "post", "opts",
];

fn load_dictionary() -> Dictionary {
    if let Ok(path) = std::env::var("REWORDED_DICT_PATH") {
        match FileDictionaryProvider::new(path).load() {
            Ok(d) => return d,
            Err(e) => eprintln!("[bench] {e}; using built-in word list"),
        }
    }
    Dictionary::from_words(FALLBACK_WORDS)
}

/// Generation only, no classification.
fn bench_expand(c: &mut Criterion) {
    let options = GenerateOptions::default();
    let cancel = CancelToken::new();
    for word in ["apple", "planets", "reworded"] {
        let letters = Letters::new(word).expect("valid word");
        c.bench_function(&format!("expand_{word}_min2"), |b| {
            b.iter(|| {
                std::hint::black_box(expand(&letters, MinLength::new(2), &options, &cancel))
            });
        });
    }
}

/// Full pipeline including classification and report building.
fn bench_generate(c: &mut Criterion) {
    let dict = load_dictionary();
    c.bench_function("generate_planets_min3", |b| {
        b.iter(|| std::hint::black_box(generate("planets", MinLength::new(3), &dict)));
    });
}

criterion_group!(benches, bench_expand, bench_generate);
criterion_main!(benches);
