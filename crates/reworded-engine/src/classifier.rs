// Dictionary classification of generated strings.

use hashbrown::HashSet;

use crate::dictionary::Dictionary;
use crate::generator::GeneratedSet;

/// Generated strings that are dictionary words. Borrows from the
/// [`GeneratedSet`] it was computed from, so it is always a subset of it.
pub type ValidSet<'a> = HashSet<&'a str>;

/// Keep the generated strings that are members of `dictionary`.
///
/// Pure function of its inputs; one hash lookup per generated string.
pub fn classify<'a>(generated: &'a GeneratedSet, dictionary: &Dictionary) -> ValidSet<'a> {
    generated
        .iter()
        .map(String::as_str)
        .filter(|s| dictionary.contains(s))
        .collect()
}
