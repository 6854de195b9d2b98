//! Property-based tests for layer merging.

use super::layer::ConfigLayer;
use super::merger::ConfigMerger;
use proptest::prelude::*;
use serde_json::{Map, Value};

// Leaves: the scalar shapes YAML layers produce
fn leaf_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        "[a-z0-9.]{0,8}".prop_map(Value::from),
    ]
}

// Small key alphabet so layers collide often
fn value_strategy() -> impl Strategy<Value = Value> {
    leaf_strategy().prop_recursive(4, 48, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..3).prop_map(Value::Array),
            prop::collection::btree_map("[a-d]", inner, 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

fn mapping_strategy() -> impl Strategy<Value = Map<String, Value>> {
    prop::collection::btree_map("[a-d]", value_strategy(), 0..5)
        .prop_map(|m| m.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Re-applying the overlay changes nothing
    #[test]
    fn merge_is_idempotent_in_overlay(a in mapping_strategy(), b in mapping_strategy()) {
        let once = ConfigMerger::merge_maps(&a, &b);
        let twice = ConfigMerger::merge_maps(&once, &b);
        prop_assert_eq!(once, twice);
    }

    // Every non-mapping value in the overlay wins outright
    #[test]
    fn merge_overlay_scalars_win(a in mapping_strategy(), b in mapping_strategy()) {
        let merged = ConfigMerger::merge_maps(&a, &b);
        for (key, value) in &b {
            if !value.is_object() {
                prop_assert_eq!(merged.get(key), Some(value));
            }
        }
    }

    // Keys only in the base survive untouched
    #[test]
    fn merge_preserves_base_only_keys(a in mapping_strategy(), b in mapping_strategy()) {
        let merged = ConfigMerger::merge_maps(&a, &b);
        for (key, value) in &a {
            if !b.contains_key(key) {
                prop_assert_eq!(merged.get(key), Some(value));
            }
        }
    }

    // Empty mapping is an identity on both sides
    #[test]
    fn merge_empty_identity(a in mapping_strategy()) {
        let empty = Map::new();
        prop_assert_eq!(ConfigMerger::merge_maps(&a, &empty), a.clone());
        prop_assert_eq!(ConfigMerger::merge_maps(&empty, &a), a);
    }

    // Folding a layer list equals pairwise merging in list order
    #[test]
    fn fold_matches_pairwise_merge(
        l1 in mapping_strategy(),
        l2 in mapping_strategy(),
        l3 in mapping_strategy()
    ) {
        let layers = vec![
            ConfigLayer::new("l1", l1.clone()),
            ConfigLayer::new("l2", l2.clone()),
            ConfigLayer::new("l3", l3.clone()),
        ];
        let folded = ConfigMerger::fold(&layers);
        let pairwise = ConfigMerger::merge_maps(&ConfigMerger::merge_maps(&l1, &l2), &l3);
        prop_assert_eq!(folded, pairwise);
    }

    // Value-level merge agrees with map-level merge
    #[test]
    fn merge_value_agrees_with_maps(a in mapping_strategy(), b in mapping_strategy()) {
        let via_values = ConfigMerger::merge(&Value::Object(a.clone()), &Value::Object(b.clone()));
        prop_assert_eq!(via_values, Value::Object(ConfigMerger::merge_maps(&a, &b)));
    }
}
