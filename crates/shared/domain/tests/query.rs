use serde_json::json;
use whub_domain::query::{Bounds, LetterSet, QueryType, QueryVariant};

#[test]
fn letter_set_is_lowercased_and_sorted() {
    assert_eq!(LetterSet::canonical("Bca").as_str(), "abc");
    assert_eq!(LetterSet::canonical("LISTER").as_str(), "eilrst");
    assert_eq!(LetterSet::canonical("Bca").len(), 3);
}

#[test]
fn anagrams_share_a_letter_set() {
    assert_eq!(LetterSet::canonical("listen"), LetterSet::canonical("Silent"));
    assert_ne!(LetterSet::canonical("listen"), LetterSet::canonical("lister"));
}

#[test]
fn query_type_wire_names_round_trip() {
    for ty in [QueryType::Spellable, QueryType::StartsWith, QueryType::MatchSubstring] {
        assert_eq!(QueryType::from_wire(ty.as_str()), Some(ty));
        assert_eq!(serde_json::to_value(ty).unwrap(), json!(ty.as_str()));
    }
    assert_eq!(QueryType::from_wire("StartsWith"), None);
}

#[test]
fn spellable_echo_carries_letters_and_lengths() {
    let query = QueryVariant::Spellable {
        letters: LetterSet::canonical("eilrst"),
        length: Bounds::new(1, 7),
    };

    assert_eq!(
        serde_json::to_value(query.echo()).unwrap(),
        json!({ "queryType": "spellable", "letters": "eilrst", "minLength": 1, "maxLength": 7 })
    );
}

#[test]
fn substring_echo_carries_offsets() {
    let query = QueryVariant::MatchSubstring { length: Bounds::new(3, 3), offset: Bounds::new(0, 2) };

    assert_eq!(
        serde_json::to_value(query.echo()).unwrap(),
        json!({ "queryType": "matchSubstring", "start": 0, "end": 2, "minLength": 3, "maxLength": 3 })
    );
}
