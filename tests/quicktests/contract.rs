use std::collections::{HashMap, HashSet};

use quickcheck::quickcheck;
use stepcount::{
    AvlTree, BinarySearchTree, Container, DuplicatePolicy, HashFunction, HashTable, LinearArray,
    Record,
};

/// Every container, freshly built, behind the shared trait.
fn containers() -> Vec<(&'static str, Box<dyn Container<i32>>)> {
    let mut all: Vec<(&'static str, Box<dyn Container<i32>>)> = Vec::new();
    all.push(("linear", Box::new(LinearArray::new())));
    all.push(("bst", Box::new(BinarySearchTree::new())));
    all.push((
        "bst-insert-right",
        Box::new(BinarySearchTree::with_policy(DuplicatePolicy::InsertRight)),
    ));
    all.push(("avl", Box::new(AvlTree::new())));
    for function in HashFunction::ALL {
        let table = HashTable::new(17, function).expect("17 buckets is valid");
        all.push((function.name(), Box::new(table)));
    }
    all
}

/// Inserts every key with its first position as payload. Later duplicates are either ignored
/// or shadowed by the earlier record, so the first payload is always the one found.
fn fill(container: &mut dyn Container<i32>, keys: &[i16]) {
    for (position, key) in keys.iter().enumerate() {
        let steps = container.insert(Record::new((*key).into(), position as i32));
        assert!(steps >= 1);
        assert_eq!(container.last_steps(), steps);
    }
}

quickcheck! {
    fn inserted_keys_are_found(keys: Vec<i16>) -> bool {
        let mut first_seen = HashMap::new();
        for (position, key) in keys.iter().enumerate() {
            first_seen.entry(*key).or_insert(position as i32);
        }

        containers().into_iter().all(|(name, mut container)| {
            fill(container.as_mut(), &keys);
            first_seen.iter().all(|(key, position)| {
                let (found, steps) = container.search((*key).into());
                assert!(steps >= 1, "{name}: a hit takes at least one step");
                found.map(|r| *r.payload()) == Some(*position)
            })
        })
    }

    fn missing_keys_are_not_found(keys: Vec<i16>, probes: Vec<i16>) -> bool {
        let inserted: HashSet<_> = keys.iter().copied().collect();
        let misses: Vec<_> = probes.into_iter().filter(|p| !inserted.contains(p)).collect();

        containers().into_iter().all(|(_, mut container)| {
            fill(container.as_mut(), &keys);
            misses.iter().all(|&p| container.search(p.into()).0.is_none())
        })
    }

    fn linear_miss_scans_everything(keys: Vec<i16>) -> bool {
        let mut array = LinearArray::new();
        fill(&mut array, &keys);

        let absent = i64::from(i16::MAX) + 1;
        array.search(absent) == (None, keys.len())
    }

    fn clear_empties_every_container(keys: Vec<i16>) -> bool {
        containers().into_iter().all(|(_, mut container)| {
            fill(container.as_mut(), &keys);
            container.clear();
            container.is_empty()
                && container.last_steps() == 0
                && keys.iter().all(|&k| container.search(k.into()).0.is_none())
        })
    }
}

#[test]
fn sizes_follow_each_duplicate_policy() {
    let keys = [3, 1, 3, 2, 1];
    let sizes: HashMap<_, _> = containers()
        .into_iter()
        .map(|(name, mut container)| {
            fill(container.as_mut(), &keys);
            (name, container.len())
        })
        .collect();

    // The array stores everything, the trees count calls, the tables count distinct keys.
    assert_eq!(sizes["linear"], 5);
    assert_eq!(sizes["bst"], 5);
    assert_eq!(sizes["bst-insert-right"], 5);
    assert_eq!(sizes["avl"], 5);
    assert_eq!(sizes["division"], 3);
    assert_eq!(sizes["multiplication"], 3);
    assert_eq!(sizes["folding"], 3);
}

#[test]
fn counters_are_per_instance() {
    let mut a = AvlTree::new();
    let mut b = AvlTree::new();
    for key in 0..100 {
        a.insert(Record::new(key, ()));
    }
    b.insert(Record::new(0, ()));

    a.search(99);
    b.search(0);
    assert_eq!(b.last_steps(), 1);
    assert!(a.last_steps() > 1);
}

#[test]
fn containers_move_between_threads() {
    let mut tree = AvlTree::new();
    for key in 0..64 {
        tree.insert(Record::new(key, key.to_string()));
    }

    let handle = std::thread::spawn(move || tree.search(42).0.map(|r| r.payload().clone()));
    assert_eq!(handle.join().unwrap(), Some("42".to_string()));
}
