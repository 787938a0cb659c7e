use crate::candidates::candidates;
use crate::error::LookupError;
use crate::store::{QueryDescriptor, WordStore};
use tracing::{debug, info};
use whub_domain::query::QueryVariant;
use whub_domain::response::ResultItems;

/// Maps a query to its single store request.
#[must_use]
pub fn describe(query: &QueryVariant) -> QueryDescriptor {
    match query {
        QueryVariant::Spellable { letters, length } => {
            let values = candidates(letters.as_str(), *length);
            info!(count = values.len(), "Searching for sorted combinations");
            QueryDescriptor::Membership { values }
        }
        QueryVariant::StartsWith { prefix, length } => {
            QueryDescriptor::PrefixLookup { prefix: prefix.as_str().to_owned(), length: *length }
        }
        QueryVariant::MatchSubstring { length, offset } => {
            QueryDescriptor::GroupedSubstringCount { offset: *offset, length: *length }
        }
    }
}

/// Runs `query` against `store`.
///
/// # Errors
/// Propagates the store's [`LookupError::StorageUnavailable`].
pub async fn dispatch<S: WordStore>(
    store: &S,
    query: &QueryVariant,
) -> Result<ResultItems, LookupError> {
    let descriptor = describe(query);
    debug!(kind = descriptor.kind(), query_type = %query.query_type(), "Dispatching lookup");
    store.execute(descriptor).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use whub_domain::query::{Bounds, LetterSet};

    #[test]
    fn spellable_becomes_a_membership_lookup_over_all_candidates() {
        let query = QueryVariant::Spellable {
            letters: LetterSet::canonical("ba"),
            length: Bounds::new(1, 1),
        };
        assert_eq!(
            describe(&query),
            QueryDescriptor::Membership { values: vec![String::new(), "a".into(), "b".into()] }
        );
    }

    #[test]
    fn starts_with_becomes_a_prefix_lookup() {
        let query =
            QueryVariant::StartsWith { prefix: LetterSet::canonical("ta"), length: Bounds::new(2, 4) };
        assert_eq!(
            describe(&query),
            QueryDescriptor::PrefixLookup { prefix: "at".into(), length: Bounds::new(2, 4) }
        );
    }

    #[test]
    fn match_substring_becomes_a_grouped_count() {
        let query =
            QueryVariant::MatchSubstring { length: Bounds::new(3, 3), offset: Bounds::new(0, 2) };
        assert_eq!(
            describe(&query),
            QueryDescriptor::GroupedSubstringCount {
                offset: Bounds::new(0, 2),
                length: Bounds::new(3, 3)
            }
        );
    }
}
