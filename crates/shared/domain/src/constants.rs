//! Shared constants of the word domain and the HTTP surface.

/// Longest letter multiset a spellable query may carry.
pub const MAX_LETTERS: usize = 16;
/// Longest prefix a starts-with query may carry.
pub const MAX_PREFIX: usize = 5;

/// Shortest stored word.
pub const MIN_WORD_LENGTH: u32 = 1;
/// Longest stored word.
pub const MAX_WORD_LENGTH: u32 = 7;

/// Default first offset of a substring query.
pub const DEFAULT_SUBSTRING_START: u32 = 0;
/// Default (exclusive) last offset of a substring query.
pub const DEFAULT_SUBSTRING_END: u32 = 2;

pub const SYSTEM_TAG: &str = "System";
pub const LOOKUP_TAG: &str = "Lookup";

/// Body returned for every failure that is not the caller's fault.
pub const UNEXPECTED_ERROR: &str = "Unexpected error.";

pub const HEADER_ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
pub const HEADER_CONTENT_TYPE: &str = "Content-Type";
pub const CONTENT_TYPE_JSON: &str = "application/json";
