//! The data-access seam of the query engine.

use crate::error::LookupError;
use std::future::Future;
use whub_domain::query::Bounds;
use whub_domain::response::ResultItems;

/// One read-only request against the word table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryDescriptor {
    /// Words whose canonical signature equals one of `values`.
    Membership { values: Vec<String> },
    /// Words whose signature starts with `prefix` and has a length in `length`.
    PrefixLookup { prefix: String, length: Bounds },
    /// Words with a length in `length`, counted per substring over `[offset.min, offset.max)`.
    GroupedSubstringCount { offset: Bounds, length: Bounds },
}

impl QueryDescriptor {
    /// Short name used in logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Membership { .. } => "membership",
            Self::PrefixLookup { .. } => "prefix-lookup",
            Self::GroupedSubstringCount { .. } => "grouped-substring-count",
        }
    }
}

/// A table of words keyed by their canonical signature.
///
/// Implementations run exactly one query per call and report every failure as
/// [`LookupError::StorageUnavailable`]. Membership and prefix lookups return
/// [`ResultItems::Words`]; substring counts return [`ResultItems::Counts`].
pub trait WordStore: Send + Sync {
    fn execute(
        &self,
        descriptor: QueryDescriptor,
    ) -> impl Future<Output = Result<ResultItems, LookupError>> + Send;
}
