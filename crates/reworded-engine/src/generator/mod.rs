// Candidate string generation: subsets of letter slots, then every
// ordering of each subset, collected into a deduplicating set.

pub mod arrangements;
pub mod subsets;

use std::ops::RangeInclusive;

use hashbrown::HashSet;
use reworded_core::letters::Letters;
use reworded_core::threshold::MinLength;

use crate::control::{CancelToken, GenerateOptions};
use crate::{GenerateError, LimitKind};

pub use arrangements::ArrangementExpander;
pub use subsets::SubsetEnumerator;

/// Distinct strings produced by one run.
pub type GeneratedSet = HashSet<String>;

/// Generate every distinct string obtainable from `letters` by choosing
/// between `min_length` and all of the slots and arranging them in every
/// order.
///
/// Cancellation is polled once per subset and every
/// `options.cancel_check_interval` arrangements. The generated-string
/// limit, if any, is enforced as strings are inserted.
pub fn expand(
    letters: &Letters,
    min_length: MinLength,
    options: &GenerateOptions,
    cancel: &CancelToken,
) -> Result<GeneratedSet, GenerateError> {
    let interval = options.cancel_check_interval.max(1);
    let max_generated = options.limits.max_generated;

    let mut generated = GeneratedSet::new();
    let mut subsets = SubsetEnumerator::new(letters.len(), min_length.range(letters.len()));
    let mut expander = ArrangementExpander::new();
    let mut buf = String::with_capacity(letters.len());
    let mut steps: usize = 0;

    while let Some(positions) = subsets.next() {
        if cancel.is_cancelled() {
            return Err(GenerateError::Cancelled);
        }
        expander.reset(&letters.pick(positions));

        while expander.next(&mut buf) {
            steps += 1;
            if steps % interval == 0 && cancel.is_cancelled() {
                return Err(GenerateError::Cancelled);
            }
            if !generated.contains(buf.as_str()) {
                generated.insert(buf.clone());
                if let Some(limit) = max_generated {
                    if generated.len() > limit {
                        tracing::warn!(limit, "generated string limit exceeded");
                        return Err(GenerateError::LimitExceeded {
                            kind: LimitKind::Generated,
                            limit,
                        });
                    }
                }
            }
        }
    }

    Ok(generated)
}

/// Number of arrangements a run will visit before deduplication:
/// the sum of `n! / (n - r)!` over the size range.
///
/// Returns `None` if the count does not fit in a `u128`.
pub fn arrangement_count(word_len: usize, sizes: RangeInclusive<usize>) -> Option<u128> {
    let min_size = (*sizes.start()).max(1);
    let max_size = (*sizes.end()).min(word_len);
    let mut total: u128 = 0;
    let mut falling: u128 = 1;
    for r in 1..=max_size {
        falling = falling.checked_mul((word_len - r + 1) as u128)?;
        if r >= min_size {
            total = total.checked_add(falling)?;
        }
    }
    Some(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(word: &str, min: usize) -> GeneratedSet {
        let letters = Letters::new(word).unwrap();
        expand(
            &letters,
            MinLength::new(min),
            &GenerateOptions::default(),
            &CancelToken::new(),
        )
        .unwrap()
    }

    #[test]
    fn two_letters_full_length() {
        let g = run("ab", 2);
        assert_eq!(g.len(), 2);
        assert!(g.contains("ab"));
        assert!(g.contains("ba"));
    }

    #[test]
    fn duplicate_letters_collapse() {
        let g = run("aa", 2);
        assert_eq!(g.len(), 1);
        assert!(g.contains("aa"));
    }

    #[test]
    fn includes_shorter_subsets() {
        let g = run("cat", 2);
        // 6 two-letter strings plus 6 three-letter strings
        assert_eq!(g.len(), 12);
        assert!(g.contains("at"));
        assert!(g.contains("tc"));
        assert!(!g.contains("c"));
    }

    #[test]
    fn threshold_above_length_is_empty() {
        assert!(run("cat", 5).is_empty());
    }

    #[test]
    fn zero_threshold_behaves_like_one() {
        let g = run("ab", 0);
        assert_eq!(g.len(), 4);
        assert!(!g.contains(""));
    }

    #[test]
    fn pre_cancelled_run_stops() {
        let letters = Letters::new("abcd").unwrap();
        let cancel = CancelToken::new();
        cancel.cancel();
        let err = expand(
            &letters,
            MinLength::new(1),
            &GenerateOptions::default(),
            &cancel,
        )
        .unwrap_err();
        assert_eq!(err, GenerateError::Cancelled);
    }

    #[test]
    fn generated_limit_trips() {
        let letters = Letters::new("abcde").unwrap();
        let mut options = GenerateOptions::default();
        options.limits.max_generated = Some(10);
        let err = expand(&letters, MinLength::new(2), &options, &CancelToken::new()).unwrap_err();
        assert_eq!(
            err,
            GenerateError::LimitExceeded {
                kind: LimitKind::Generated,
                limit: 10
            }
        );
    }

    #[test]
    fn generated_limit_equal_to_size_passes() {
        let letters = Letters::new("cat").unwrap();
        let mut options = GenerateOptions::default();
        options.limits.max_generated = Some(6);
        let g = expand(&letters, MinLength::new(3), &options, &CancelToken::new()).unwrap();
        assert_eq!(g.len(), 6);
    }

    #[test]
    fn arrangement_count_matches_formula() {
        // n = 3, r = 2..=3: 3*2 + 3*2*1 = 12
        assert_eq!(arrangement_count(3, 2..=3), Some(12));
        assert_eq!(arrangement_count(4, 1..=4), Some(4 + 12 + 24 + 24));
        assert_eq!(arrangement_count(3, 5..=3), Some(0));
    }

    #[test]
    fn arrangement_count_overflow_is_none() {
        assert_eq!(arrangement_count(40, 1..=40), None);
    }
}
