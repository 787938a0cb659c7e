use crate::error::LookupError;
use crate::store::{QueryDescriptor, WordStore};
use whub_database::{Database, DatabaseError};
use whub_domain::response::ResultItems;

impl WordStore for Database {
    async fn execute(&self, descriptor: QueryDescriptor) -> Result<ResultItems, LookupError> {
        let kind = descriptor.kind();
        let items = match descriptor {
            QueryDescriptor::Membership { values } => {
                self.words_by_signatures(values).await.map(ResultItems::Words)
            }
            QueryDescriptor::PrefixLookup { prefix, length } => self
                .words_by_prefix(&prefix, length.min(), length.max())
                .await
                .map(ResultItems::Words),
            QueryDescriptor::GroupedSubstringCount { offset, length } => self
                .substring_counts(offset.min(), offset.max(), length.min(), length.max())
                .await
                .map(ResultItems::Counts),
        };
        items.map_err(|e: DatabaseError| LookupError::StorageUnavailable {
            message: e.to_string().into(),
            context: Some(kind.into()),
        })
    }
}
