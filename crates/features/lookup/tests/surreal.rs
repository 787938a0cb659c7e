use serde_json::json;
use whub_database::Database;
use whub_domain::response::ResultItems;
use whub_lookup::{Lookup, MemoryWordStore, handle, init, lookup};

const WORDS: [&str; 8] = ["silent", "listen", "enlist", "tinsel", "inlets", "net", "ten", "tens"];

async fn database(name: &str) -> Database {
    let db = Database::builder().url("mem://").session("lookup", name).init().await.unwrap();
    db.import_words(WORDS).await.unwrap();
    db
}

fn sorted(items: ResultItems) -> Vec<String> {
    let ResultItems::Words(mut words) = items else { panic!("expected words") };
    words.sort();
    words
}

#[tokio::test]
async fn spellable_against_surrealdb() {
    let db = database("spellable").await;
    let envelope = lookup(&db, &json!({"letters": "SILENT"})).await.unwrap();
    assert_eq!(envelope.result.total, 8);
    assert_eq!(
        sorted(envelope.result.items),
        ["enlist", "inlets", "listen", "net", "silent", "ten", "tens", "tinsel"]
    );
}

#[tokio::test]
async fn starts_with_against_surrealdb() {
    let db = database("prefix").await;
    let payload = json!({
        "queryType": "startsWith",
        "query": {"startsWith": "en", "minLength": 3, "maxLength": 4}
    });
    let envelope = lookup(&db, &payload).await.unwrap();
    assert_eq!(sorted(envelope.result.items), ["net", "ten", "tens"]);
}

#[tokio::test]
async fn match_substring_against_surrealdb() {
    let db = database("substring").await;
    let payload = json!({
        "queryType": "matchSubstring",
        "query": {"start": "0", "end": "2", "minLength": 6, "maxLength": 6}
    });
    let envelope = lookup(&db, &payload).await.unwrap();

    let ResultItems::Counts(counts) = envelope.result.items else { panic!("expected counts") };
    assert_eq!(counts.values().sum::<u64>(), 5);
    assert_eq!(counts.get("si"), Some(&1));
    assert_eq!(counts.get("in"), Some(&1));
}

#[tokio::test]
async fn substring_offsets_agree_with_the_memory_store() {
    let db = database("substring_offsets").await;
    let memory = MemoryWordStore::new(WORDS);

    for (start, end) in [(0, 2), (1, 3), (2, 4), (4, 6)] {
        let payload = json!({
            "queryType": "matchSubstring",
            "query": {"start": start, "end": end, "minLength": 3, "maxLength": 6}
        });
        let stored = lookup(&db, &payload).await.unwrap();
        let expected = lookup(&memory, &payload).await.unwrap();
        assert_eq!(stored.result, expected.result, "offsets [{start}, {end})");
    }
}

#[tokio::test]
async fn substring_past_short_words_is_empty() {
    let db = database("substring_tail").await;
    let payload = json!({
        "queryType": "matchSubstring",
        "query": {"start": 4, "end": 6, "minLength": 3, "maxLength": 6}
    });
    let envelope = lookup(&db, &payload).await.unwrap();

    let ResultItems::Counts(counts) = envelope.result.items else { panic!("expected counts") };
    let expected: Vec<(&str, u64)> =
        vec![("", 3), ("el", 1), ("en", 1), ("nt", 1), ("st", 1), ("ts", 1)];
    assert_eq!(counts.iter().map(|(k, v)| (k.as_str(), *v)).collect::<Vec<_>>(), expected);
}

#[tokio::test]
async fn slice_answers_through_the_shared_handle() {
    let db = database("slice").await;
    let slice = init(&db);
    assert_eq!(slice.name, "lookup");

    let lookup = slice.downcast::<Lookup>().unwrap();
    let response = lookup.handle(&json!({"letters": "ten"})).await;
    assert_eq!(response.status_code, 200);

    let direct = handle(&db, &json!({"letters": "ten"})).await;
    assert_eq!(response.status_code, direct.status_code);
}
