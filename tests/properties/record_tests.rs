use proptest::prelude::*;
use serde_json::{Value, json};

use bugrepo::reconcile::compare;
use bugrepo::record::Bug;

fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i64>().prop_map(Value::from),
        "[a-zA-Z0-9 ]{0,16}".prop_map(Value::from),
        any::<bool>().prop_map(Value::from),
        Just(Value::Null),
    ]
}

fn arb_bug() -> impl Strategy<Value = Bug> {
    prop::collection::btree_map("[a-z_]{1,12}", arb_scalar(), 0..8)
        .prop_map(|fields| Bug::from_map(fields))
}

proptest! {
    #[test]
    fn record_survives_json(bug in arb_bug()) {
        let encoded = serde_json::to_value(&bug).unwrap();
        prop_assert_eq!(Bug::from_json(encoded).unwrap(), bug);
    }

    #[test]
    fn compare_with_self_is_empty(bug in arb_bug()) {
        prop_assert!(compare(&bug, &bug).is_empty());
    }

    #[test]
    fn compare_is_symmetric_in_field_set(left in arb_bug(), right in arb_bug()) {
        let forward: Vec<String> = compare(&left, &right)
            .iter()
            .map(|d| d.field().to_string())
            .collect();
        let backward: Vec<String> = compare(&right, &left)
            .iter()
            .map(|d| d.field().to_string())
            .collect();
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn numeric_ids_match_their_text(id in any::<u64>()) {
        let left = Bug::from_map([("id", json!(id))]);
        let right = Bug::from_map([("id", json!(id.to_string()))]);
        prop_assert!(compare(&left, &right).is_empty());
    }
}
