#![cfg(feature = "serde")]
//! JSON representation of `Maybe` and `Either`.

use pointfree::control::{Either, Maybe};
use rstest::rstest;
use serde_json::json;

#[rstest]
fn maybe_uses_externally_tagged_variants() {
    let just = Maybe::just(3);
    let nothing: Maybe<i32> = Maybe::nothing();

    assert_eq!(serde_json::to_value(just).ok(), Some(json!({ "Just": 3 })));
    assert_eq!(serde_json::to_value(nothing).ok(), Some(json!("Nothing")));
}

#[rstest]
#[case(Either::success(7))]
#[case(Either::failure("missing".to_string()))]
fn either_survives_json(#[case] value: Either<String, u8>) {
    let text = serde_json::to_string(&value).expect("serializes");
    let decoded: Either<String, u8> = serde_json::from_str(&text).expect("deserializes");
    assert_eq!(decoded, value);
}

#[rstest]
fn maybe_reads_from_json() {
    let decoded: Maybe<Vec<u8>> = serde_json::from_value(json!({ "Just": [1, 2] })).expect("deserializes");
    assert_eq!(decoded, Maybe::Just(vec![1, 2]));
}
