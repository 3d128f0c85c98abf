//! Unit tests for HashMap and its views.

use rstest::rstest;
use strata::config::HashMapConfig;
use strata::mutable::{HashMap, LinkedOrder};
use strata::prelude::*;

// =============================================================================
// Core operations
// =============================================================================

#[rstest]
fn test_put_replaces_and_keeps_size() {
    let mut map = HashMap::new();
    assert_eq!(map.put("a", 1), Ok(None));
    assert_eq!(map.put("b", 2), Ok(None));
    assert_eq!(map.put("a", 3), Ok(Some(1)));
    assert_eq!(map.get(&"a"), Some(&3));
    assert_eq!(map.len(), 2);
    assert!(map.contains_value(&2));
    assert!(!map.contains_value(&1));
}

#[rstest]
fn test_remove_then_contains_key() {
    let mut map = HashMap::new();
    map.put(7, "seven").unwrap();
    assert_eq!(map.remove(&7), Ok(Some("seven")));
    assert!(!map.contains_key(&7));
    assert_eq!(map.remove(&7), Ok(None));
    assert!(map.is_empty());
}

#[rstest]
fn test_many_keys_survive_resizes() {
    let mut map = HashMap::new();
    for key in 0..10_000 {
        map.put(key, key * 2).unwrap();
    }
    assert_eq!(map.len(), 10_000);
    assert!(map.bucket_count() >= 10_000 * 4 / 3);
    assert!((0..10_000).all(|key| map.get(&key) == Some(&(key * 2))));
}

#[rstest]
fn test_put_all_and_clear() {
    let mut map = HashMap::new();
    map.put_all([("x", 1), ("y", 2), ("x", 3)]).unwrap();
    assert_eq!(map.len(), 2);
    assert_eq!(map.get(&"x"), Some(&3));
    map.clear().unwrap();
    assert!(map.is_empty());
    assert_eq!(map.get(&"y"), None);
}

#[rstest]
fn test_option_keys_and_values() {
    let mut map: HashMap<Option<&str>, Option<i32>> = HashMap::new();
    map.put(None, Some(1)).unwrap();
    map.put(Some("k"), None).unwrap();
    assert_eq!(map.get(&None::<&str>), Some(&Some(1)));
    assert!(map.contains_value(&None));
}

#[rstest]
fn test_get_mut_updates_in_place() {
    let mut map = HashMap::new();
    map.put("count", 1).unwrap();
    *map.get_mut("count").unwrap() += 41;
    assert_eq!(map.get("count"), Some(&42));
    assert_eq!(map.get_mut("missing"), None);
}

#[rstest]
fn test_with_capacity_sizes_buckets() {
    let map: HashMap<i32, i32> = HashMap::with_capacity(100);
    assert_eq!(map.bucket_count(), 128);
}

#[rstest]
fn test_config_load_factor_controls_resize() {
    let config = HashMapConfig::new().initial_capacity(4).load_factor(1.0);
    let mut map = HashMap::with_config(config).unwrap();
    for key in 0..4 {
        map.put(key, ()).unwrap();
    }
    assert_eq!(map.bucket_count(), 4);
    map.put(4, ()).unwrap();
    assert_eq!(map.bucket_count(), 8);
}

// =============================================================================
// Views
// =============================================================================

#[rstest]
fn test_key_set_removal_writes_through() {
    let mut map: HashMap<i32, i32> = (0..6).map(|key| (key, key * 10)).collect();
    {
        let mut keys = map.key_set();
        assert_eq!(keys.len(), 6);
        assert!(keys.contains(&3));
        assert_eq!(keys.remove_element(&3), Ok(true));
        assert_eq!(keys.remove_element(&3), Ok(false));
    }
    assert_eq!(map.len(), 5);
    assert!(!map.contains_key(&3));
}

#[rstest]
fn test_key_set_retain_all() {
    let mut map: HashMap<i32, i32> = (0..6).map(|key| (key, key)).collect();
    let keep: strata::mutable::HashSet<i32> = [1, 4].into_iter().collect();
    assert_eq!(map.key_set().retain_all(&keep), Ok(true));
    let mut keys: Vec<i32> = map.keys().copied().collect();
    keys.sort_unstable();
    assert_eq!(keys, vec![1, 4]);
}

#[rstest]
fn test_value_collection_remove_via_cursor() {
    let mut map: HashMap<&str, i32> = [("a", 1), ("b", 2), ("c", 1)].into_iter().collect();
    let mut values = map.value_collection();
    assert!(values.contains(&2));
    assert_eq!(values.remove_all(&strata::mutable::ArrayList::from(vec![1])), Ok(true));
    assert_eq!(values.len(), 1);
    assert_eq!(map.get(&"b"), Some(&2));
    assert_eq!(map.len(), 1);
}

#[rstest]
fn test_entry_set_iteration_and_clear() {
    let mut map: HashMap<i32, char> = [(1, 'a'), (2, 'b')].into_iter().collect();
    let mut pairs: Vec<(i32, char)> = map
        .entry_set()
        .to_vec()
        .unwrap()
        .into_iter()
        .map(strata::skeletal::Entry::into_pair)
        .collect();
    pairs.sort_unstable();
    assert_eq!(pairs, vec![(1, 'a'), (2, 'b')]);
    map.entry_set().clear().unwrap();
    assert!(map.is_empty());
}

#[rstest]
fn test_views_see_later_mutations() {
    let mut map = HashMap::new();
    map.put(1, 1).unwrap();
    assert_eq!(map.key_set().len(), 1);
    map.put(2, 2).unwrap();
    assert_eq!(map.key_set().len(), 2);
    assert_eq!(map.value_collection().len(), 2);
}

// =============================================================================
// Ordered hooks
// =============================================================================

#[rstest]
fn test_insertion_ordered_iteration() {
    let mut map = HashMap::insertion_ordered();
    for (index, key) in ["delta", "alpha", "charlie", "bravo"].into_iter().enumerate() {
        map.put(key, index).unwrap();
    }
    map.remove(&"alpha").unwrap();
    map.put("alpha", 9).unwrap();
    let order: Vec<&str> = map.ordered_entries().map(|entry| *entry.key()).collect();
    assert_eq!(order, vec!["delta", "charlie", "bravo", "alpha"]);
}

#[rstest]
fn test_insertion_order_drives_every_traversal() {
    const KEYS: [i32; 8] = [50, 3, 999, 17, 4, 1000, 2, 77];

    let mut map = HashMap::insertion_ordered();
    for key in KEYS {
        map.put(key, -key).unwrap();
    }
    assert_eq!(map.keys().copied().collect::<Vec<_>>(), KEYS.to_vec());
    assert_eq!(map.values().copied().collect::<Vec<_>>(), KEYS.map(|key| -key).to_vec());
    assert_eq!(map.key_set().to_vec(), Ok(KEYS.to_vec()));
    assert_eq!(
        map.describe(),
        "{50=-50, 3=-3, 999=-999, 17=-17, 4=-4, 1000=-1000, 2=-2, 77=-77}"
    );
    assert_eq!(map.to_string(), map.describe());
    assert!(format!("{map:?}").starts_with("{50: -50, 3: -3, 999: -999"));
}

#[rstest]
fn test_ordered_cursor_removal_keeps_order() {
    let mut map = HashMap::insertion_ordered();
    for key in [9, 8, 7, 6, 5] {
        map.put(key, ()).unwrap();
    }
    let mut cursor = map.entry_cursor();
    while cursor.has_next(&map) {
        if cursor.next(&map).unwrap().key() % 2 == 1 {
            cursor.remove(&mut map).unwrap();
        }
    }
    assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec![8, 6]);
    map.put(1, ()).unwrap();
    assert_eq!(map.key_set().to_vec(), Ok(vec![8, 6, 1]));
}

#[rstest]
fn test_access_reorders_traversal() {
    let mut cache = HashMap::access_ordered();
    for key in ["a", "b", "c"] {
        cache.put(key, key.len()).unwrap();
    }
    assert_eq!(cache.access("a"), Some(&1));
    assert_eq!(cache.get("b"), Some(&1));
    assert_eq!(cache.keys().copied().collect::<Vec<_>>(), vec!["b", "c", "a"]);
    cache.put("b", 2).unwrap();
    assert_eq!(cache.key_set().to_vec(), Ok(vec!["c", "a", "b"]));
}

#[rstest]
fn test_access_reorder_fails_open_cursor() {
    let mut cache: HashMap<i32, i32, _, LinkedOrder> = HashMap::access_ordered();
    for key in 0..3 {
        cache.put(key, key).unwrap();
    }
    let mut cursor = cache.entry_cursor();
    cursor.next(&cache).unwrap();
    cache.access(&1);
    assert_eq!(
        cursor.next(&cache).map(|_| ()),
        Err(CollectionError::ConcurrentModification)
    );
}

#[rstest]
fn test_access_ordered_eviction() {
    let mut cache: HashMap<i32, i32, _, LinkedOrder> = HashMap::access_ordered();
    for key in 0..3 {
        cache.put(key, key).unwrap();
    }
    cache.get_mut(&0);
    cache.put(3, 3).unwrap();
    while cache.len() > 3 {
        cache.remove_eldest();
    }
    let mut keys: Vec<i32> = cache.keys().copied().collect();
    keys.sort_unstable();
    assert_eq!(keys, vec![0, 2, 3]);
}

#[rstest]
fn test_clear_resets_order() {
    let mut map = HashMap::insertion_ordered();
    map.put(1, ()).unwrap();
    map.clear().unwrap();
    assert!(map.eldest().is_none());
    map.put(2, ()).unwrap();
    assert_eq!(map.eldest().map(|entry| *entry.key()), Some(2));
}

// =============================================================================
// Equality and display
// =============================================================================

#[rstest]
fn test_map_equality_ignores_insertion_order() {
    let left: HashMap<i32, i32> = [(1, 1), (2, 2)].into_iter().collect();
    let right: HashMap<i32, i32> = [(2, 2), (1, 1)].into_iter().collect();
    assert_eq!(left, right);
    let other: HashMap<i32, i32> = [(1, 1), (2, 3)].into_iter().collect();
    assert_ne!(left, other);
}

#[rstest]
fn test_display_single_entry() {
    let mut map = HashMap::new();
    map.put("k", 1).unwrap();
    assert_eq!(map.to_string(), "{k=1}");
    assert_eq!(map.describe(), "{k=1}");
}
