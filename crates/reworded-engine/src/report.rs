// Report construction from generated and valid sets.
//
// Sets carry no order; everything here imposes one. Strings compare by
// byte order, which for lowercase ASCII is alphabetical order.

use std::collections::BTreeMap;

use reworded_core::report::{AllCombinationsReport, LengthGroup, Reports, ValidWordsReport};

use crate::classifier::ValidSet;
use crate::generator::GeneratedSet;

/// Every generated string, sorted ascending.
pub fn build_all(generated: &GeneratedSet) -> AllCombinationsReport {
    let mut items: Vec<String> = generated.iter().cloned().collect();
    items.sort_unstable();
    AllCombinationsReport {
        total: items.len(),
        items,
    }
}

/// Valid words grouped by length, groups ascending by length and words
/// ascending within each group.
pub fn build_valid(valid: &ValidSet<'_>) -> ValidWordsReport {
    let mut by_length: BTreeMap<usize, Vec<&str>> = BTreeMap::new();
    for &word in valid {
        by_length.entry(word.len()).or_default().push(word);
    }

    let groups = by_length
        .into_iter()
        .map(|(length, mut words)| {
            words.sort_unstable();
            LengthGroup {
                length,
                words: words.into_iter().map(str::to_string).collect(),
            }
        })
        .collect();

    ValidWordsReport {
        total: valid.len(),
        groups,
    }
}

/// Both reports for one run.
pub fn build(generated: &GeneratedSet, valid: &ValidSet<'_>) -> Reports {
    Reports {
        all: build_all(generated),
        valid: build_valid(valid),
    }
}
