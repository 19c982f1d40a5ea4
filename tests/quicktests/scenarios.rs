use stepcount::{AvlTree, BinarySearchTree, Container, HashFunction, HashTable, Key, Record};

fn records(keys: impl IntoIterator<Item = Key>) -> impl Iterator<Item = Record<String>> {
    keys.into_iter().map(|key| Record::new(key, format!("employee-{key}")))
}

#[test]
fn bst_balanced_order() {
    let mut tree = BinarySearchTree::new();
    for record in records([50, 30, 70, 20, 40, 60, 80]) {
        tree.insert(record);
    }

    assert_eq!(tree.height(), 3);
    let (found, steps) = tree.search(40);
    assert_eq!(found.map(|r| r.payload().as_str()), Some("employee-40"));
    assert_eq!(steps, 3);
    // The root is the only node reachable in one step.
    assert_eq!(tree.search(50).1, 1);
}

#[test]
fn avl_rebalances_sorted_input_bst_does_not() {
    let mut bst = BinarySearchTree::new();
    let mut avl = AvlTree::new();
    for key in 1..=7 {
        bst.insert(Record::new(key, ()));
        avl.insert(Record::new(key, ()));
    }

    assert_eq!(avl.height(), 3);
    assert_eq!(bst.height(), 7);
}

#[test]
fn avl_height_bound_on_large_sorted_input() {
    let mut avl = AvlTree::new();
    let n = 100_000;
    for key in 0..n {
        avl.insert(Record::new(key, ()));
    }

    let bound = 1.45 * ((n + 2) as f64).log2();
    assert!((avl.height() as f64) <= bound);
    assert!(avl.search(n - 1).1 <= avl.height());
}

#[test]
fn division_chain() {
    let mut table = HashTable::new(10, HashFunction::Division).unwrap();
    for record in records([5, 15, 25]) {
        table.insert(record);
    }

    assert!([5, 15, 25].iter().all(|&k| table.hash(k) == 5));
    assert_eq!(table.collisions(), 2);
    assert_eq!(table.max_chain_length(), 3);
}

#[test]
fn multiplication_with_one_bucket() {
    let table: HashTable<()> = HashTable::new(1, HashFunction::Multiplication).unwrap();
    for key in [0, 1, 2, 999, 123_456_789, -42] {
        assert_eq!(table.hash(key), 0);
    }
}

#[test]
fn folding_nine_digit_key() {
    for buckets in [1, 7, 100, 1_000, 2_000] {
        let table: HashTable<()> = HashTable::new(buckets, HashFunction::Folding).unwrap();
        assert_eq!(table.hash(123_456_789), 1_368 % buckets);
    }
}

#[test]
fn hash_duplicate_rejection() {
    for function in HashFunction::ALL {
        let mut table = HashTable::new(100, function).unwrap();
        table.insert(Record::new(123_456_789, "first"));
        let collisions = table.collisions();

        table.insert(Record::new(123_456_789, "second"));
        assert_eq!(table.total_elements(), 1, "{function}");
        assert_eq!(table.collisions(), collisions + 1, "{function}");
        assert_eq!(
            table.search(123_456_789).0.map(|r| *r.payload()),
            Some("first")
        );
    }
}

#[test]
fn nine_digit_keys_spread_across_buckets() {
    // Nine-digit identifiers like the ones the benchmark harness generates.
    let keys: Vec<Key> = (0..1_000).map(|i| 100_000_000 + i * 899_999).collect();

    for function in HashFunction::ALL {
        let mut table = HashTable::new(1_000, function).unwrap();
        for record in records(keys.iter().copied()) {
            table.insert(record);
        }

        let stats = table.stats();
        assert_eq!(stats.total_elements, 1_000, "{function}");
        assert_eq!(stats.load_factor, 1.0, "{function}");
        assert!(stats.average_chain_length >= 1.0, "{function}");
        assert!(stats.max_chain_length >= 1, "{function}");
        assert!(keys.iter().all(|&k| table.search(k).0.is_some()));
    }
}
