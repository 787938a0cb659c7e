use anyhow::{Context, Result};
use serde_json::Value;
use std::path::Path;
use tracing::{info, warn};
use whub::domain::config::ApiConfig;
use whub::domain::response::HandlerResponse;
use whub::features::lookup::{MemoryWordStore, handle};
use whub_database::{Database, ImportReport};

/// Reads a request argument; text that is not JSON is passed on as a string so the
/// handler rejects it like any other malformed payload.
pub(crate) fn parse_payload(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_owned()))
}

pub(crate) async fn query(
    cfg: &ApiConfig,
    payload: &str,
    words: Option<&Path>,
) -> Result<HandlerResponse> {
    let payload = parse_payload(payload);

    if let Some(path) = words {
        let store = MemoryWordStore::from_lines(&read_words(path).await?);
        info!(path = %path.display(), words = store.len(), "Using in-memory word list");
        return Ok(handle(&store, &payload).await);
    }

    let db = Database::from_config(&cfg.database).await.context("Failed to open word store")?;
    Ok(handle(&db, &payload).await)
}

pub(crate) async fn import(cfg: &ApiConfig, file: &Path) -> Result<ImportReport> {
    let text = read_words(file).await?;
    if is_ephemeral(&cfg.database.url) {
        warn!(url = %cfg.database.url, "Word store is in memory; imported words will not persist");
    }
    let db = Database::from_config(&cfg.database).await.context("Failed to open word store")?;

    let report = db.import_words(text.lines()).await.context("Import failed")?;
    let stored = db.word_count().await?;
    info!(imported = report.imported, skipped = report.skipped, stored, "Import finished");
    Ok(report)
}

/// In-memory engines lose their data when the process exits.
pub(crate) fn is_ephemeral(url: &str) -> bool {
    url.trim().starts_with("mem://") || url.trim() == "memory"
}

async fn read_words(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read word list {}", path.display()))
}
