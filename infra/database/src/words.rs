//! Word table access: bulk import and the three lookup queries.

use crate::Database;
use crate::error::{DatabaseError, DatabaseErrorExt};
use fxhash::FxHashSet;
use std::collections::BTreeMap;
use surrealdb::types::SurrealValue;
use tracing::{debug, instrument};
use whub_domain::constants::{MAX_WORD_LENGTH, MIN_WORD_LENGTH};
use whub_domain::query::LetterSet;

const INSERT_WORDS: &str = "INSERT IGNORE INTO word $records RETURN NONE";
const COUNT_WORDS: &str = "RETURN count(SELECT VALUE word FROM word)";
const WORDS_BY_SIGNATURE: &str = "SELECT VALUE word FROM word WHERE alpha IN $signatures";
const WORDS_BY_PREFIX: &str = "SELECT VALUE word FROM word \
     WHERE string::len(alpha) >= $min AND string::len(alpha) <= $max \
     AND string::starts_with(alpha, $prefix)";
// `string::slice` takes an exclusive end index, not a length.
const SUBSTRING_COUNTS: &str = "SELECT string::slice(word, $start, $end) AS substring, \
     count() AS total FROM word \
     WHERE string::len(word) >= $min AND string::len(word) <= $max \
     GROUP BY substring";

/// Rows inserted per statement during import.
const IMPORT_BATCH: usize = 1_000;

/// A stored dictionary word keyed by itself.
#[derive(Debug, Clone, PartialEq, Eq, SurrealValue)]
pub struct WordRecord {
    pub id: String,
    pub word: String,
    /// Canonical signature: the word's letters sorted ascending.
    pub alpha: String,
}

impl WordRecord {
    /// Builds a record from a raw dictionary line.
    ///
    /// Returns `None` for anything that is not 1 to 7 ASCII letters.
    #[must_use]
    pub fn from_raw(raw: &str) -> Option<Self> {
        let word = raw.trim().to_ascii_lowercase();
        let len = u32::try_from(word.len()).ok()?;
        if !(MIN_WORD_LENGTH..=MAX_WORD_LENGTH).contains(&len)
            || !word.bytes().all(|b| b.is_ascii_alphabetic())
        {
            return None;
        }
        let alpha = LetterSet::canonical(&word).to_string();
        Some(Self { id: word.clone(), word, alpha })
    }
}

/// Outcome of [`Database::import_words`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Distinct valid words submitted to the store.
    pub imported: usize,
    /// Lines rejected as invalid or repeated.
    pub skipped: usize,
}

#[derive(Debug, SurrealValue)]
struct SubstringRow {
    substring: String,
    total: i64,
}

impl Database {
    /// Loads dictionary words, one per item. Words already stored are left untouched.
    ///
    /// # Errors
    /// Returns [`DatabaseError::Surreal`] if an insert batch fails.
    #[instrument(skip_all)]
    pub async fn import_words<I, S>(&self, words: I) -> Result<ImportReport, DatabaseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = FxHashSet::default();
        let mut report = ImportReport::default();
        let mut records = Vec::new();

        for raw in words {
            match WordRecord::from_raw(raw.as_ref()) {
                Some(record) if seen.insert(record.word.clone()) => records.push(record),
                _ => report.skipped += 1,
            }
        }

        for batch in records.chunks(IMPORT_BATCH) {
            self.query(INSERT_WORDS)
                .bind(("records", batch.to_vec()))
                .await
                .context("Inserting word batch")?
                .check()
                .map_err(surrealdb::Error::from)?;
            report.imported += batch.len();
            debug!(batch = batch.len(), total = report.imported, "Imported word batch");
        }

        Ok(report)
    }

    /// Number of words currently stored.
    ///
    /// # Errors
    /// Returns [`DatabaseError::Surreal`] if the count query fails.
    pub async fn word_count(&self) -> Result<u64, DatabaseError> {
        let count = self
            .query(COUNT_WORDS)
            .await
            .context("Counting words")?
            .take::<Option<i64>>(0)
            .context("Parsing word count")?
            .unwrap_or_default();
        Ok(count.try_into().unwrap_or_default())
    }

    /// Words whose signature equals one of `signatures` exactly.
    ///
    /// # Errors
    /// Returns [`DatabaseError::Surreal`] if the query fails.
    pub async fn words_by_signatures(
        &self,
        signatures: Vec<String>,
    ) -> Result<Vec<String>, DatabaseError> {
        if signatures.is_empty() {
            return Ok(Vec::new());
        }
        let words = self
            .query(WORDS_BY_SIGNATURE)
            .bind(("signatures", signatures))
            .await
            .context("Looking up signatures")?
            .take::<Vec<String>>(0)
            .context("Parsing signature matches")?;
        Ok(words)
    }

    /// Words whose signature starts with `prefix` and whose length lies in `[min, max]`.
    ///
    /// # Errors
    /// Returns [`DatabaseError::Surreal`] if the query fails.
    pub async fn words_by_prefix(
        &self,
        prefix: &str,
        min: u32,
        max: u32,
    ) -> Result<Vec<String>, DatabaseError> {
        let words = self
            .query(WORDS_BY_PREFIX)
            .bind(("prefix", prefix.to_owned()))
            .bind(("min", i64::from(min)))
            .bind(("max", i64::from(max)))
            .await
            .context("Looking up prefix")?
            .take::<Vec<String>>(0)
            .context("Parsing prefix matches")?;
        Ok(words)
    }

    /// Counts words in `[min, max]` letters grouped by their substring over `[start, end)`.
    ///
    /// # Errors
    /// Returns [`DatabaseError::Validation`] when `end <= start`, or
    /// [`DatabaseError::Surreal`] if the query fails.
    pub async fn substring_counts(
        &self,
        start: u32,
        end: u32,
        min: u32,
        max: u32,
    ) -> Result<BTreeMap<String, u64>, DatabaseError> {
        if end <= start {
            return Err(DatabaseError::Validation {
                message: format!("Empty substring range [{start}, {end})").into(),
                context: None,
            });
        }
        let rows = self
            .query(SUBSTRING_COUNTS)
            .bind(("start", i64::from(start)))
            .bind(("end", i64::from(end)))
            .bind(("min", i64::from(min)))
            .bind(("max", i64::from(max)))
            .await
            .context("Counting substrings")?
            .take::<Vec<SubstringRow>>(0)
            .context("Parsing substring counts")?;

        let mut counts = BTreeMap::new();
        for row in rows {
            *counts.entry(row.substring).or_insert(0) += row.total.try_into().unwrap_or(0_u64);
        }
        Ok(counts)
    }
}
