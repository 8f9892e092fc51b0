//! Identifier mapping across a whole history.

use crate::common::*;
use proptest::prelude::*;
use viper_history::{
    convert_with_options, ConvertOptions, Event, History, IdMap, Session, Transaction,
};

#[test]
fn test_first_occurrence_ids() {
    let keys = ["x", "y", "x", "z"];
    let map = IdMap::build(keys.iter().copied(), 1).unwrap();
    assert_eq!(map.get("x"), Some(1));
    assert_eq!(map.get("y"), Some(2));
    assert_eq!(map.get("z"), Some(3));

    let again = IdMap::build(keys.iter().copied(), 1).unwrap();
    assert_eq!(map.entries(), again.entries());
}

#[test]
fn test_named_history_ids() {
    let converted = convert_with_options(&named_history(), ConvertOptions::default()).unwrap();
    let events: Vec<(u64, u64)> = converted
        .events()
        .map(|e| (*e.key(), *e.value()))
        .collect();

    // keys: alice=1 bob=2 carol=3; values: init=1 90=2 110=3
    assert_eq!(events, vec![(1, 1), (1, 2), (2, 3), (2, 3), (3, 1), (1, 2)]);
}

fn history_from_keys(keys: &[u8]) -> History<u8, u8> {
    let events = keys.iter().map(|k| Event::write(*k, 0)).collect();
    History::from_sessions(vec![Session::with_transactions(
        0,
        vec![Transaction::with_events(0, events)],
    )])
    .unwrap()
}

proptest! {
    #[test]
    fn equal_keys_get_equal_ids(keys in prop::collection::vec(0u8..20, 1..50)) {
        let history = history_from_keys(&keys);
        let converted = convert_with_options(&history, ConvertOptions::default()).unwrap();
        let ids: Vec<u64> = converted.events().map(|e| *e.key()).collect();

        for i in 0..keys.len() {
            for j in 0..keys.len() {
                prop_assert_eq!(keys[i] == keys[j], ids[i] == ids[j]);
            }
        }
    }

    #[test]
    fn ids_are_dense_from_base(keys in prop::collection::vec(any::<u8>(), 1..50)) {
        let history = history_from_keys(&keys);
        let converted = convert_with_options(&history, ConvertOptions::default()).unwrap();
        let distinct = keys.iter().collect::<std::collections::HashSet<_>>().len() as u64;
        let max = converted.events().map(|e| *e.key()).max().unwrap();
        prop_assert_eq!(max, distinct);
    }
}
