//! # Lookup
//!
//! The word lookup feature slice. A request goes through four steps:
//!
//! 1. [`normalize`] validates the payload and produces a typed [`QueryVariant`];
//! 2. [`candidates`] expands a spellable query into the letter combinations to search;
//! 3. [`dispatch`] issues exactly one read-only query against a [`WordStore`];
//! 4. [`format`] wraps the matches into the `{result, query}` envelope.
//!
//! [`handle`] runs all of them and turns the outcome into a `HandlerResponse`.
//!
//! ```rust
//! use serde_json::json;
//! use whub_lookup::{MemoryWordStore, handle};
//!
//! # async fn run() {
//! let store = MemoryWordStore::new(["listen", "silent", "tinsel"]);
//! let response = handle(&store, &json!({"letters": "enlist"})).await;
//! assert_eq!(response.status_code, 200);
//! # }
//! ```
//!
//! [`QueryVariant`]: whub_domain::query::QueryVariant

#[cfg(feature = "server")]
pub mod api;
mod candidates;
mod dispatcher;
mod error;
mod formatter;
mod handler;
mod memory;
mod normalizer;
mod store;
mod surreal;

pub use candidates::candidates;
pub use dispatcher::{describe, dispatch};
pub use error::{LookupError, LookupErrorExt};
pub use formatter::format;
pub use handler::{handle, lookup};
pub use memory::MemoryWordStore;
pub use normalizer::normalize;
pub use store::{QueryDescriptor, WordStore};

use serde_json::Value;
use whub_database::Database;
use whub_domain::response::HandlerResponse;
use whub_kernel::domain::registry::InitializedSlice;

/// Lookup feature state
#[whub_derive::whub_slice]
pub struct Lookup {
    store: Database,
}

impl Lookup {
    /// Answers one request against the shared word store.
    pub async fn handle(&self, payload: &Value) -> HandlerResponse {
        handle(&self.store, payload).await
    }
}

/// Initializes the lookup feature over an open word store.
#[must_use]
pub fn init(database: &Database) -> InitializedSlice {
    tracing::info!(ns = database.namespace(), db = database.database(), "Lookup slice initialized");
    InitializedSlice::new("lookup", Lookup::new(LookupInner { store: database.clone() }))
}
