#[whub_derive::api_model]
struct Echo {
    min_length: u8,
    max_length: u8,
}

#[whub_derive::api_model(rename_all = "snake_case")]
struct Snake {
    min_length: u8,
}

#[test]
fn api_model_uses_camel_case_by_default() {
    let json = serde_json::to_value(Echo { min_length: 1, max_length: 7 }).unwrap();
    assert_eq!(json, serde_json::json!({ "minLength": 1, "maxLength": 7 }));
}

#[test]
fn api_model_honours_rename_override() {
    let json = serde_json::to_value(Snake { min_length: 2 }).unwrap();
    assert_eq!(json, serde_json::json!({ "min_length": 2 }));

    let back: Snake = serde_json::from_value(json).unwrap();
    assert_eq!(back.min_length, 2);
}
