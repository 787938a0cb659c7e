use crate::error::LookupError;
use crate::store::{QueryDescriptor, WordStore};
use fxhash::FxHashSet;
use std::collections::BTreeMap;
use whub_database::WordRecord;
use whub_domain::query::Bounds;
use whub_domain::response::ResultItems;

/// A word store held in process memory.
///
/// Words are filtered and canonicalized exactly like a database import, and
/// results come back in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemoryWordStore {
    records: Vec<WordRecord>,
}

impl MemoryWordStore {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = FxHashSet::default();
        let records = words
            .into_iter()
            .filter_map(|raw| WordRecord::from_raw(raw.as_ref()))
            .filter(|record| seen.insert(record.word.clone()))
            .collect();
        Self { records }
    }

    /// Builds a store from a newline-separated word list.
    #[must_use]
    pub fn from_lines(text: &str) -> Self {
        Self::new(text.lines())
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn within(record: &WordRecord, length: Bounds) -> bool {
        let len = record.word.len();
        len >= length.min() as usize && len <= length.max() as usize
    }

    fn membership(&self, values: &[String]) -> Vec<String> {
        let wanted: FxHashSet<&str> = values.iter().map(String::as_str).collect();
        self.records
            .iter()
            .filter(|record| wanted.contains(record.alpha.as_str()))
            .map(|record| record.word.clone())
            .collect()
    }

    fn prefix(&self, prefix: &str, length: Bounds) -> Vec<String> {
        self.records
            .iter()
            .filter(|record| Self::within(record, length) && record.alpha.starts_with(prefix))
            .map(|record| record.word.clone())
            .collect()
    }

    fn substring_counts(&self, offset: Bounds, length: Bounds) -> BTreeMap<String, u64> {
        let start = offset.min() as usize;
        let span = offset.max().saturating_sub(offset.min()) as usize;
        let mut counts = BTreeMap::new();
        for record in self.records.iter().filter(|record| Self::within(record, length)) {
            let substring: String = record.word.chars().skip(start).take(span).collect();
            *counts.entry(substring).or_insert(0) += 1;
        }
        counts
    }
}

impl WordStore for MemoryWordStore {
    async fn execute(&self, descriptor: QueryDescriptor) -> Result<ResultItems, LookupError> {
        Ok(match descriptor {
            QueryDescriptor::Membership { values } => ResultItems::Words(self.membership(&values)),
            QueryDescriptor::PrefixLookup { prefix, length } => {
                ResultItems::Words(self.prefix(&prefix, length))
            }
            QueryDescriptor::GroupedSubstringCount { offset, length } => {
                ResultItems::Counts(self.substring_counts(offset, length))
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> MemoryWordStore {
        MemoryWordStore::from_lines("cat\nact\nCAT\ntea\nat\nlisten\nsilent\n4x4\nelephants\n")
    }

    #[test]
    fn import_rules_apply() {
        assert_eq!(store().len(), 6);
        assert!(MemoryWordStore::default().is_empty());
    }

    #[test]
    fn membership_matches_signatures_in_insertion_order() {
        let store = store();
        assert_eq!(store.membership(&["act".to_owned(), "eilnst".to_owned()]), [
            "cat", "act", "listen", "silent"
        ]);
        assert!(store.membership(&[String::new()]).is_empty());
    }

    #[test]
    fn prefix_honours_length_bounds() {
        assert_eq!(store().prefix("a", Bounds::new(2, 2)), ["at"]);
        assert_eq!(store().prefix("a", Bounds::new(1, 3)), ["cat", "act", "tea", "at"]);
    }

    #[test]
    fn substrings_shorter_than_the_range_are_truncated() {
        let counts = store().substring_counts(Bounds::new(1, 3), Bounds::new(2, 3));
        assert_eq!(counts, BTreeMap::from([
            ("at".to_owned(), 1),
            ("ct".to_owned(), 1),
            ("ea".to_owned(), 1),
            ("t".to_owned(), 1),
        ]));
    }
}
