use whub_domain::query::QueryVariant;
use whub_domain::response::{LookupResult, ResultEnvelope, ResultItems};

/// Wraps matches and the normalized query into the response envelope.
///
/// `total` is always the number of wrapped items.
#[must_use]
pub fn format(items: ResultItems, query: &QueryVariant) -> ResultEnvelope {
    let total = items.len();
    ResultEnvelope { result: LookupResult { items, total }, query: query.echo() }
}
