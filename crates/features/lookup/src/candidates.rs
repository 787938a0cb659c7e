//! Search space of a spellable query.

use itertools::Itertools;
use whub_domain::query::Bounds;

/// Every combination of `letters` with a size in `[0, min + max)`.
///
/// Sizes ascend; within a size, combinations follow the lexicographic order of
/// letter positions and keep the letters' relative order, so canonical input gives
/// canonical candidates. Repeated letters at different positions yield repeated
/// candidates. The size-0 candidate `""` is included.
#[must_use]
pub fn candidates(letters: &str, length: Bounds) -> Vec<String> {
    let sizes = 0..length.min().saturating_add(length.max());
    sizes
        .flat_map(|size| {
            letters
                .chars()
                .combinations(size as usize)
                .map(|combination| combination.into_iter().collect::<String>())
        })
        .collect()
}
