//! # Database Infrastructure
//!
//! Opens the [SurrealDB](https://surrealdb.com) connection that backs the word store and
//! exposes the word-table operations used by lookups and imports.
//!
//! - **Engine Agnostic**: `mem://`, `rocksdb://`, `ws://` and `http://` through the `any` engine.
//! - **Resilient Connectivity**: health checks are retried with exponential backoff.
//! - **Schema Bootstrap**: the `word` table and its signature index are defined on connect.
//!
//! ## Example
//!
//! ```rust
//! use whub_database::{Database, DatabaseError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), DatabaseError> {
//!     let db = Database::builder()
//!         .url("mem://")
//!         .session("whub", "words")
//!         .init()
//!         .await?;
//!
//!     db.import_words(["silent", "listen", "enlist"]).await?;
//!     let anagrams = db.words_by_signatures(vec!["eilnst".to_owned()]).await?;
//!     assert_eq!(anagrams.len(), 3);
//!
//!     Ok(())
//! }
//! ```

mod error;
mod schema;
mod words;

pub use error::{DatabaseError, DatabaseErrorExt};
pub use words::{ImportReport, WordRecord};

use std::ops::Deref;
use std::sync::Arc;
use std::time::Duration;
use surrealdb::Surreal;
use surrealdb::engine::any::{Any, connect};
use surrealdb::opt::auth::Root;
use tracing::{info, instrument, warn};
use whub_domain::config::DatabaseConfig;

const DEFAULT_RETRIES: u32 = 3;
const DEFAULT_RETRY_DELAY: Duration = Duration::from_millis(500);

/// Inner state of the [`Database`] wrapper.
#[derive(Debug)]
pub struct DatabaseInner {
    instance: Surreal<Any>,
    ns: String,
    db: String,
}

impl Drop for DatabaseInner {
    fn drop(&mut self) {
        info!(ns = %self.ns, db = %self.db, "SurrealDB session handle dropped");
    }
}

/// Shared `SurrealDB` handle; cloning is cheap and reuses the same connection.
#[derive(Debug, Clone)]
pub struct Database {
    inner: Arc<DatabaseInner>,
}

impl Database {
    /// Creates a new [`DatabaseBuilder`].
    pub fn builder() -> DatabaseBuilder {
        DatabaseBuilder::new()
    }

    /// Connects using the `[database]` configuration section.
    ///
    /// # Errors
    /// See [`DatabaseBuilder::init`].
    pub async fn from_config(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        let mut builder = Self::builder()
            .url(&config.url)
            .session(&config.namespace, &config.database)
            .retries(config.connect_retries, Duration::from_millis(config.retry_delay_ms));
        if let Some(credentials) = &config.credentials {
            builder = builder.auth(&credentials.username, &credentials.password);
        }
        builder.init().await
    }

    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.inner.ns
    }

    #[must_use]
    pub fn database(&self) -> &str {
        &self.inner.db
    }
}

impl Deref for Database {
    type Target = Surreal<Any>;

    fn deref(&self) -> &Self::Target {
        &self.inner.instance
    }
}

/// A fluent builder for configuring and establishing a `SurrealDB` connection.
#[must_use = "builders do nothing unless you call .init()"]
#[derive(Debug)]
pub struct DatabaseBuilder {
    url: Option<String>,
    ns: Option<String>,
    db: Option<String>,
    auth: Option<(String, String)>,
    retries: u32,
    retry_delay: Duration,
}

impl Default for DatabaseBuilder {
    fn default() -> Self {
        Self {
            url: None,
            ns: None,
            db: None,
            auth: None,
            retries: DEFAULT_RETRIES,
            retry_delay: DEFAULT_RETRY_DELAY,
        }
    }
}

impl DatabaseBuilder {
    /// Creates a new [`DatabaseBuilder`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the connection URL.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Sets the namespace and database name.
    pub fn session(mut self, namespace: impl Into<String>, database: impl Into<String>) -> Self {
        self.ns = Some(namespace.into());
        self.db = Some(database.into());
        self
    }

    /// Add root credentials to the connection.
    pub fn auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.auth = Some((username.into(), password.into()));
        self
    }

    /// Sets how many health checks are attempted and the delay before the first retry.
    pub const fn retries(mut self, attempts: u32, delay: Duration) -> Self {
        self.retries = attempts;
        self.retry_delay = delay;
        self
    }

    /// Consumes the builder and establishes the connection.
    ///
    /// # Process
    /// 1. **Validation**: URL, namespace, database name and a non-zero retry count are required.
    /// 2. **Engine Initialization**: connects through the `any` engine.
    /// 3. **Resilience**: runs health checks, doubling the delay after each failure.
    /// 4. **Authentication**: signs in as Root when credentials were given via [`Self::auth`].
    /// 5. **Session Activation**: selects the namespace and database.
    /// 6. **Schema**: defines the `word` table if it does not exist.
    ///
    /// # Errors
    /// * [`DatabaseError::Validation`] if required parameters are missing.
    /// * [`DatabaseError::Connection`] if the engine fails to start or remains unhealthy.
    /// * [`DatabaseError::Auth`] if the provided credentials are rejected.
    /// * [`DatabaseError::Surreal`] if the session activation (`use_ns`/`use_db`) fails.
    /// * [`DatabaseError::Schema`] if the word table cannot be defined.
    #[instrument(skip(self), fields(url = self.url, ns = self.ns, db = self.db))]
    pub async fn init(self) -> Result<Database, DatabaseError> {
        let url = self.url.ok_or(DatabaseError::Validation {
            message: "URL is required".into(),
            context: None,
        })?;
        let ns = self.ns.ok_or(DatabaseError::Validation {
            message: "Namespace is required".into(),
            context: None,
        })?;
        let db = self.db.ok_or(DatabaseError::Validation {
            message: "Database is required".into(),
            context: None,
        })?;
        if self.retries == 0 {
            return Err(DatabaseError::Validation {
                message: "At least one connection attempt is required".into(),
                context: None,
            });
        }

        let instance = connect(&url).await.map_err(|e| DatabaseError::Connection {
            message: e.to_string().into(),
            context: Some("Initializing engine".into()),
        })?;

        let mut delay = self.retry_delay;
        for attempt in 1..=self.retries {
            if instance.health().await.is_ok() {
                break;
            }
            if attempt == self.retries {
                return Err(DatabaseError::Connection {
                    message: "Unhealthy after retries".into(),
                    context: Some(url.into()),
                });
            }
            warn!(attempt, ?delay, "Database not ready, retrying...");
            tokio::time::sleep(delay).await;
            delay *= 2;
        }

        if let Some((username, password)) = self.auth {
            instance.signin(Root { username, password }).await.map_err(|e| {
                DatabaseError::Auth { message: e.to_string().into(), context: Some(url.into()) }
            })?;
        }

        instance.use_ns(&ns).use_db(&db).await.context("Activating session")?;

        let version =
            instance.version().await.map_or_else(|_| "unknown".to_owned(), |v| v.to_string());
        info!(namespace = %ns, database = %db, %version, "SurrealDB connection established");

        schema::bootstrap(&instance).await?;
        info!("Word table ready");

        Ok(Database { inner: Arc::new(DatabaseInner { instance, ns, db }) })
    }
}
