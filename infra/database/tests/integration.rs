use std::time::Duration;
use whub_database::*;
use whub_domain::config::DatabaseConfig;

const WORDS: &[&str] = &["cat", "act", "tac", "at", "a", "tea", "eat", "silent", "listen", "cats"];

async fn seeded(db_name: &str) -> Database {
    let db = Database::builder()
        .url("mem://")
        .session("test_ns", db_name)
        .init()
        .await
        .expect("connect to mem://");
    db.import_words(WORDS).await.expect("import words");
    db
}

fn sorted(mut words: Vec<String>) -> Vec<String> {
    words.sort();
    words
}

#[tokio::test]
async fn connect_in_memory_and_health_check() {
    let db = Database::builder()
        .url("mem://")
        .session("test_ns", "test_db")
        .init()
        .await
        .expect("connect to mem://");

    db.health().await.expect("health check");
    assert_eq!(db.namespace(), "test_ns");
    assert_eq!(db.database(), "test_db");
    assert_eq!(db.word_count().await.expect("count"), 0);
}

#[tokio::test]
async fn connect_from_default_config() {
    let db = Database::from_config(&DatabaseConfig::default()).await.expect("connect");
    assert_eq!(db.namespace(), "whub");
}

#[tokio::test]
async fn missing_parameters_fail_validation() {
    let err = Database::builder().init().await.unwrap_err();
    assert!(matches!(err, DatabaseError::Validation { .. }));
}

#[tokio::test]
async fn zero_retries_fail_validation() {
    let err = Database::builder()
        .url("mem://")
        .session("test_ns", "test_db")
        .retries(0, Duration::from_millis(1))
        .init()
        .await
        .unwrap_err();
    assert!(matches!(err, DatabaseError::Validation { .. }));
}

#[tokio::test]
async fn import_skips_invalid_and_repeated_words() {
    let db = Database::builder()
        .url("mem://")
        .session("test_ns", "import")
        .init()
        .await
        .expect("connect");

    let report = db.import_words(["cat", "CAT", "c4t", "", "toolongword", "act"]).await.unwrap();
    assert_eq!(report, ImportReport { imported: 2, skipped: 4 });
    assert_eq!(db.word_count().await.unwrap(), 2);

    // A second import of the same words leaves the table as it was.
    db.import_words(["cat", "act"]).await.unwrap();
    assert_eq!(db.word_count().await.unwrap(), 2);
}

#[tokio::test]
async fn signature_lookup_is_exact() {
    let db = seeded("signatures").await;

    let words = db
        .words_by_signatures(vec!["act".to_owned(), "eilnst".to_owned(), "zzz".to_owned()])
        .await
        .unwrap();
    assert_eq!(sorted(words), ["act", "cat", "listen", "silent", "tac"]);

    assert!(db.words_by_signatures(Vec::new()).await.unwrap().is_empty());
}

#[tokio::test]
async fn prefix_lookup_respects_length_bounds() {
    let db = seeded("prefix").await;

    let words = db.words_by_prefix("a", 2, 3).await.unwrap();
    assert_eq!(sorted(words), ["act", "at", "cat", "eat", "tac", "tea"]);
}

#[tokio::test]
async fn substring_counts_cover_every_word_in_range() {
    let db = seeded("substrings").await;

    let counts = db.substring_counts(0, 2, 3, 3).await.unwrap();
    let total: u64 = counts.values().sum();
    assert_eq!(total, 5);
    assert_eq!(counts.get("ca"), Some(&1));
    assert_eq!(counts.get("te"), Some(&1));
    assert_eq!(counts.get("ea"), Some(&1));
}

#[tokio::test]
async fn substring_counts_honor_a_non_zero_start() {
    let db = seeded("substrings_offset").await;

    let counts = db.substring_counts(1, 3, 3, 6).await.unwrap();
    let expected: Vec<(&str, u64)> =
        vec![("ac", 1), ("at", 3), ("ct", 1), ("ea", 1), ("il", 1), ("is", 1)];
    assert_eq!(counts.iter().map(|(k, v)| (k.as_str(), *v)).collect::<Vec<_>>(), expected);
}

#[tokio::test]
async fn empty_substring_range_is_rejected() {
    let db = seeded("empty_range").await;
    let err = db.substring_counts(2, 2, 1, 7).await.unwrap_err();
    assert!(matches!(err, DatabaseError::Validation { .. }));
}
