use serde_json::{Value, json};
use whub_domain::query::Bounds;
use whub_domain::response::{HandlerResponse, ResponseBody, ResultItems};
use whub_lookup::{LookupError, MemoryWordStore, QueryDescriptor, WordStore, handle, lookup};

const WORDS: &str = "relist\nliters\ntilers\ntiler\nislet\nist\nlet\nlie\ntie\nsit\nit\ncat\nact\ncan\ntea\n";

fn store() -> MemoryWordStore {
    MemoryWordStore::from_lines(WORDS)
}

fn body_json(response: &HandlerResponse) -> Value {
    serde_json::to_value(&response.body).unwrap()
}

/// Fails every request the way a dropped connection would.
#[derive(Debug)]
struct OfflineStore;

impl WordStore for OfflineStore {
    async fn execute(&self, descriptor: QueryDescriptor) -> Result<ResultItems, LookupError> {
        Err(LookupError::StorageUnavailable {
            message: "connection reset by peer".into(),
            context: Some(descriptor.kind().into()),
        })
    }
}

/// Records that it was asked anything at all.
#[derive(Debug, Default)]
struct CountingStore(std::sync::atomic::AtomicUsize);

impl WordStore for CountingStore {
    async fn execute(&self, _: QueryDescriptor) -> Result<ResultItems, LookupError> {
        self.0.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        Ok(ResultItems::Words(Vec::new()))
    }
}

#[tokio::test]
async fn legacy_spellable_request_end_to_end() {
    let response = handle(&store(), &json!({"letters": "eilrst"})).await;

    assert_eq!(response.status_code, 200);
    assert_eq!(response.headers["Access-Control-Allow-Origin"], "*");
    assert_eq!(response.headers["Content-Type"], "application/json");

    let body = body_json(&response);
    assert_eq!(
        body["query"],
        json!({"queryType": "spellable", "letters": "eilrst", "minLength": 1, "maxLength": 7})
    );
    let items = body["result"]["items"].as_array().unwrap();
    assert_eq!(body["result"]["total"], items.len());
    assert_eq!(
        items.iter().filter_map(Value::as_str).collect::<Vec<_>>(),
        ["relist", "liters", "tilers", "tiler", "islet", "ist", "let", "lie", "tie", "sit", "it"]
    );
}

#[tokio::test]
async fn length_bounds_restrict_spellable_words() {
    let envelope = lookup(&store(), &json!({"letters": "eilrst", "minLength": 2, "maxLength": "2"}))
        .await
        .unwrap();
    // Candidates reach size min + max - 1, so three-letter words still match.
    assert_eq!(
        envelope.result.items,
        ResultItems::Words(
            ["ist", "let", "lie", "tie", "sit", "it"].into_iter().map(str::to_owned).collect()
        )
    );
}

#[tokio::test]
async fn starts_with_request() {
    let payload = json!({"queryType": "startsWith", "query": {"startsWith": "CA", "maxLength": 3}});
    let envelope = lookup(&store(), &payload).await.unwrap();

    assert_eq!(
        envelope.result.items,
        ResultItems::Words(vec!["cat".into(), "act".into(), "can".into()])
    );
    assert_eq!(envelope.result.total, 3);
    assert_eq!(envelope.query.starts_with.as_deref(), Some("ac"));
    assert_eq!(envelope.query.max_length, 3);
}

#[tokio::test]
async fn match_substring_counts_sum_to_word_count() {
    let payload = json!({
        "queryType": "matchSubstring",
        "query": {"start": 0, "end": 2, "minLength": 3, "maxLength": 3}
    });
    let envelope = lookup(&store(), &payload).await.unwrap();

    let ResultItems::Counts(counts) = &envelope.result.items else {
        panic!("expected substring counts");
    };
    let three_letter_words = WORDS.lines().filter(|w| w.len() == 3).count() as u64;
    assert_eq!(counts.values().sum::<u64>(), three_letter_words);
    assert_eq!(counts.get("ca"), Some(&2));
    assert_eq!(envelope.result.total, counts.len());
    assert_eq!((envelope.query.start, envelope.query.end), (Some(0), Some(2)));
}

#[tokio::test]
async fn invalid_requests_are_400_and_never_reach_the_store() {
    let store = CountingStore::default();

    for (payload, expected) in [
        (
            json!({"letters": "abc", "minLength": 0, "maxLength": 8}),
            "Invalid maxLength arg, maxLength must be between 1 and 7",
        ),
        (
            json!({"letters": "abc", "minLength": 0}),
            "Invalid minLength arg, minLength must be between 1 and 7",
        ),
        (
            json!({"queryType": "startsWith", "query": {"startsWith": "toolong!"}}),
            "Invalid arg startsWith: toolong!. Letters must be a member of the english alphabet. \
             Max 5 letters allowed",
        ),
    ] {
        let response = handle(&store, &payload).await;
        assert_eq!(response.status_code, 400);
        assert_eq!(response.body, ResponseBody::Message(expected.to_owned()));
    }

    assert_eq!(store.0.load(std::sync::atomic::Ordering::SeqCst), 0);
}

#[tokio::test]
async fn malformed_payload_quotes_the_request() {
    let payload = json!({"minLength": 3});
    let response = handle(&store(), &payload).await;
    assert_eq!(response.status_code, 400);
    assert_eq!(
        response.body,
        ResponseBody::Message(r#"Error parsing event payload {"minLength":3}."#.to_owned())
    );
}

#[tokio::test]
async fn storage_failures_are_generic_500s() {
    let response = handle(&OfflineStore, &json!({"letters": "abc"})).await;
    assert_eq!(response.status_code, 500);
    assert_eq!(response.body, ResponseBody::Message("Unexpected error.".to_owned()));
    assert!(!response.is_success());

    let err = lookup(&OfflineStore, &json!({"queryType": "matchSubstring"})).await.unwrap_err();
    assert!(matches!(err, LookupError::StorageUnavailable { .. }));
    assert_eq!(err.status_code(), 500);
}

#[tokio::test]
async fn each_request_issues_exactly_one_store_query() {
    let store = CountingStore::default();
    for payload in [
        json!({"letters": "abcdefghijklmnop"}),
        json!({"queryType": "startsWith", "query": {"startsWith": "a"}}),
        json!({"queryType": "matchSubstring", "query": {}}),
    ] {
        assert_eq!(handle(&store, &payload).await.status_code, 200);
    }
    assert_eq!(store.0.load(std::sync::atomic::Ordering::SeqCst), 3);
}

#[test]
fn bounds_are_plain_values() {
    let bounds = Bounds::new(2, 5);
    assert_eq!((bounds.min(), bounds.max()), (2, 5));
}
