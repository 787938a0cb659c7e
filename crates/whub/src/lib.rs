//! Facade crate for `WordHub` features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.

pub use whub_database as database;
pub use whub_domain as domain;
pub use whub_kernel as kernel;

use whub_database::Database;
use whub_domain::config::ApiConfig;
use whub_domain::registry::InitializedSlice;

#[cfg(feature = "server")]
pub mod server {
    pub mod router {
        pub use whub_kernel::server::router::system_router;
        pub use whub_lookup::api::router as lookup_router;
    }
}

/// Feature registry for runtime introspection.
pub mod features {
    pub use whub_lookup as lookup;

    /// Slices compiled into this build.
    pub const ENABLED: &[&str] = &["lookup"];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Initializes every feature slice over the shared word store.
#[must_use]
pub fn init(config: &ApiConfig, database: &Database) -> Vec<InitializedSlice> {
    tracing::debug!(url = %config.database.url, "Initializing feature slices");
    vec![features::lookup::init(database)]
}
