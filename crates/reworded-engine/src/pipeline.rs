// One generation run: validate, generate, classify, report.

use reworded_core::letters::Letters;
use reworded_core::report::Reports;
use reworded_core::threshold::MinLength;

use crate::classifier::classify;
use crate::control::{CancelToken, GenerateOptions};
use crate::dictionary::Dictionary;
use crate::generator::{self, arrangement_count};
use crate::report;
use crate::{GenerateError, LimitKind};

/// Run the whole engine for one word with default options and no
/// cancellation.
///
/// `word` is validated (ASCII letters only, non-empty) and lowercased.
pub fn generate(
    word: &str,
    min_length: MinLength,
    dictionary: &Dictionary,
) -> Result<Reports, GenerateError> {
    let letters = Letters::new(word)?;
    generate_with(
        &letters,
        min_length,
        dictionary,
        &GenerateOptions::default(),
        &CancelToken::new(),
    )
}

/// Run the whole engine for already-validated letters.
pub fn generate_with(
    letters: &Letters,
    min_length: MinLength,
    dictionary: &Dictionary,
    options: &GenerateOptions,
    cancel: &CancelToken,
) -> Result<Reports, GenerateError> {
    if let Some(limit) = options.limits.max_letters {
        if letters.len() > limit {
            tracing::warn!(letters = letters.len(), limit, "letter limit exceeded");
            return Err(GenerateError::LimitExceeded {
                kind: LimitKind::Letters,
                limit,
            });
        }
    }

    let sizes = min_length.range(letters.len());
    tracing::debug!(
        letters = letters.len(),
        min = *sizes.start(),
        max = *sizes.end(),
        arrangements = ?arrangement_count(letters.len(), sizes.clone()),
        "generation started"
    );

    let generated = generator::expand(letters, min_length, options, cancel)?;
    let valid = classify(&generated, dictionary);
    let reports = report::build(&generated, &valid);

    tracing::debug!(
        generated = reports.all.total,
        valid = reports.valid.total,
        "generation finished"
    );
    Ok(reports)
}
