// SPDX-License-Identifier: MIT OR Apache-2.0
//! Property-based tests for the anomaly taxonomy invariants.

use anomalies::{
    Anomaly, Category, DEFAULT_STATUS, Fields, extract_anomaly, http_status, is_anomaly,
    UNKNOWN_CATEGORY_KEY, is_client_error, is_server_error, make_anomaly, raise, to_anomaly,
};
use proptest::prelude::*;
use serde_json::{Value, json};

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn arb_category() -> impl Strategy<Value = Category> {
    prop::sample::select(Category::ALL.to_vec())
}

fn arb_message() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 _./-]{0,40}"
}

fn arb_unknown_category() -> impl Strategy<Value = String> {
    "[a-zA-Z_-]{0,16}".prop_filter("must not name a category", |s| {
        s.parse::<Category>().is_err()
    })
}

fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[a-z ]{0,12}".prop_map(Value::from),
    ]
}

fn arb_fields() -> impl Strategy<Value = Fields> {
    prop::collection::btree_map("x_[a-z]{1,6}", arb_scalar(), 0..5)
}

fn arb_json() -> impl Strategy<Value = Value> {
    prop_oneof![
        arb_scalar(),
        prop::collection::vec(arb_scalar(), 0..4).prop_map(Value::from),
        arb_category().prop_map(|c| json!({"category": c.as_str()})),
        arb_unknown_category().prop_map(|s| json!({"category": s})),
        arb_scalar().prop_map(|v| json!({"category": v})),
    ]
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn raise_then_extract_roundtrips(category in arb_category(), message in arb_message()) {
        let err = raise::<()>(category, message.clone(), None).unwrap_err();
        let anomaly = extract_anomaly(&err).unwrap();
        prop_assert_eq!(anomaly.category, category);
        prop_assert_eq!(&anomaly.message, &message);
        prop_assert!(anomaly.data().is_empty());
    }

    #[test]
    fn make_anomaly_keeps_every_payload_field(
        category in arb_category(),
        message in arb_message(),
        data in arb_fields(),
    ) {
        let anomaly = make_anomaly(category, message.clone(), Some(data.clone()));
        prop_assert_eq!(anomaly.data(), &data);
        let value = anomaly.to_value();
        prop_assert!(is_anomaly(&value));
        prop_assert_eq!(value.as_object().unwrap().len(), data.len() + 2);
        prop_assert_eq!(Anomaly::from_value(&value), Some(anomaly));
    }

    #[test]
    fn json_form_classifies_like_the_category(category in arb_category(), message in arb_message()) {
        let value = Anomaly::new(category, message).to_value();
        prop_assert_eq!(http_status(&value), category.http_status());
        prop_assert_eq!(is_client_error(&value), category.is_client_error());
    }

    #[test]
    fn unknown_categories_default_to_500(name in arb_unknown_category()) {
        let value = json!({"category": name, "message": "m"});
        prop_assert!(!is_anomaly(&value));
        prop_assert_eq!(http_status(&value), DEFAULT_STATUS);
        prop_assert!(is_server_error(&value));
    }

    #[test]
    fn unknown_payload_category_is_a_server_error(
        category in arb_category(),
        name in arb_unknown_category(),
    ) {
        let data: Fields = [("category".to_string(), json!(name))].into_iter().collect();
        let anomaly = make_anomaly(category, "m", Some(data));
        prop_assert_eq!(anomaly.category, Category::Fault);
        prop_assert_eq!(http_status(&anomaly), 500);
        prop_assert!(!is_client_error(&anomaly));
        prop_assert_eq!(&anomaly.data()[UNKNOWN_CATEGORY_KEY], &json!(name));
    }

    #[test]
    fn client_and_server_partition_any_value(value in arb_json()) {
        prop_assert_ne!(is_client_error(&value), is_server_error(&value));
        let status = http_status(&value);
        prop_assert!((400..600).contains(&status));
    }

    #[test]
    fn is_anomaly_iff_record_with_known_category(value in arb_json()) {
        let expected = value
            .get("category")
            .and_then(Value::as_str)
            .is_some_and(|s| s.parse::<Category>().is_ok());
        prop_assert_eq!(is_anomaly(&value), expected);
    }

    #[test]
    fn foreign_errors_become_faults(text in arb_message()) {
        let err = std::io::Error::other(text.clone());
        let anomaly = to_anomaly(&err);
        prop_assert_eq!(anomaly, Anomaly::new(Category::Fault, text));
    }
}
