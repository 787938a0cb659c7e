//! Typed lookup queries.
//!
//! Values here are produced by the query normalizer and are valid by construction;
//! nothing in this module validates input.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A closed interval `[min, max]`.
///
/// Used for word lengths and for substring offsets alike, so callers never
/// special-case the unit. For offsets `max` is read as an exclusive end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    min: u32,
    max: u32,
}

impl Bounds {
    #[must_use]
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub const fn min(&self) -> u32 {
        self.min
    }

    #[must_use]
    pub const fn max(&self) -> u32 {
        self.max
    }
}

/// Letters in canonical form: lower-cased and sorted ascending.
///
/// Two letter strings are anagrams of each other exactly when their
/// `LetterSet`s are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LetterSet(String);

impl LetterSet {
    /// Canonicalizes `raw` by lower-casing it and sorting its characters.
    #[must_use]
    pub fn canonical(raw: &str) -> Self {
        let mut chars: Vec<char> = raw.chars().flat_map(char::to_lowercase).collect();
        chars.sort_unstable();
        Self(chars.into_iter().collect())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of letters (not bytes).
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    #[must_use]
    pub fn chars(&self) -> std::str::Chars<'_> {
        self.0.chars()
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for LetterSet {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Wire name of a query variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QueryType {
    Spellable,
    StartsWith,
    MatchSubstring,
}

impl QueryType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Spellable => "spellable",
            Self::StartsWith => "startsWith",
            Self::MatchSubstring => "matchSubstring",
        }
    }

    /// Parses the wire name; matching is case-sensitive.
    #[must_use]
    pub fn from_wire(name: &str) -> Option<Self> {
        match name {
            "spellable" => Some(Self::Spellable),
            "startsWith" => Some(Self::StartsWith),
            "matchSubstring" => Some(Self::MatchSubstring),
            _ => None,
        }
    }
}

impl fmt::Display for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A normalized lookup query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryVariant {
    /// Words spellable from a subset of `letters`.
    Spellable { letters: LetterSet, length: Bounds },
    /// Words whose canonical signature starts with `prefix`.
    StartsWith { prefix: LetterSet, length: Bounds },
    /// Substring frequencies over `[offset.min, offset.max)` of words in `length`.
    MatchSubstring { length: Bounds, offset: Bounds },
}

impl QueryVariant {
    #[must_use]
    pub const fn query_type(&self) -> QueryType {
        match self {
            Self::Spellable { .. } => QueryType::Spellable,
            Self::StartsWith { .. } => QueryType::StartsWith,
            Self::MatchSubstring { .. } => QueryType::MatchSubstring,
        }
    }

    #[must_use]
    pub const fn length(&self) -> Bounds {
        match self {
            Self::Spellable { length, .. }
            | Self::StartsWith { length, .. }
            | Self::MatchSubstring { length, .. } => *length,
        }
    }

    /// The normalized parameters, as echoed back to the caller.
    #[must_use]
    pub fn echo(&self) -> QueryEcho {
        let length = self.length();
        let mut echo = QueryEcho {
            query_type: self.query_type(),
            letters: None,
            starts_with: None,
            start: None,
            end: None,
            min_length: length.min(),
            max_length: length.max(),
        };
        match self {
            Self::Spellable { letters, .. } => echo.letters = Some(letters.as_str().to_owned()),
            Self::StartsWith { prefix, .. } => echo.starts_with = Some(prefix.as_str().to_owned()),
            Self::MatchSubstring { offset, .. } => {
                echo.start = Some(offset.min());
                echo.end = Some(offset.max());
            }
        }
        echo
    }
}

/// Echo of the normalized query parameters inside a result envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryEcho {
    pub query_type: QueryType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letters: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starts_with: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<u32>,
    pub min_length: u32,
    pub max_length: u32,
}
