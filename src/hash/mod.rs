//! A hash table with a fixed number of buckets and separate chaining. The bucket count and hash
//! function are chosen up front and never change, so the table's statistics show how well a
//! given function spreads a given key set.
//!
//! # Examples
//!
//! ```
//! use stepcount::{Container, HashFunction, HashTable, Record};
//!
//! let mut table = HashTable::new(10, HashFunction::Division)?;
//! for key in [5, 15, 25] {
//!     table.insert(Record::new(key, ()));
//! }
//!
//! // All three keys land in bucket 5.
//! assert_eq!(table.collisions(), 2);
//! assert_eq!(table.max_chain_length(), 3);
//! assert_eq!(table.average_chain_length(), 3.0);
//!
//! // One step to hash, then one per record examined.
//! assert_eq!(table.search(25).1, 4);
//! assert_eq!(table.search(35), (None, 4));
//! # Ok::<(), stepcount::Error>(())
//! ```

mod function;

pub use function::HashFunction;

use crate::util::StepCounter;
use crate::{Container, Error, Key, Record, Result};

/// How to build a [`HashTable`]. The default matches the table size and function the benchmark
/// harness historically used.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HashTableConfig {
    /// The number of buckets, `M`. Must be at least 1.
    pub buckets: usize,
    /// The hash function used for every key.
    pub function: HashFunction,
}

impl Default for HashTableConfig {
    fn default() -> Self {
        Self {
            buckets: 100,
            function: HashFunction::Division,
        }
    }
}

/// A point-in-time snapshot of a table's distribution statistics.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HashTableStats {
    /// Number of buckets, `M`.
    pub buckets: usize,
    /// Distinct records stored, `N`.
    pub total_elements: usize,
    /// Inserts that landed in a non-empty bucket.
    pub collisions: usize,
    /// `N / M`.
    pub load_factor: f64,
    /// `collisions / N`, or 0 when empty.
    pub collision_rate: f64,
    /// `N` over the number of non-empty buckets, or 0 when empty.
    pub average_chain_length: f64,
    /// The size of the largest bucket.
    pub max_chain_length: usize,
}

/// A chained hash table. Each bucket keeps its records in insertion order and no key is ever
/// stored twice.
///
/// ## Collisions
///
/// A collision is counted for every insert whose bucket already holds something, *including*
/// inserts that are then rejected because the key is already present. This intentionally
/// overstates "distinct keys sharing a bucket" so numbers stay comparable with earlier runs.
#[derive(Debug)]
pub struct HashTable<P> {
    buckets: Vec<Vec<Record<P>>>,
    function: HashFunction,
    collisions: usize,
    total_elements: usize,
    steps: StepCounter,
}

impl<P> Default for HashTable<P> {
    fn default() -> Self {
        Self::with_buckets(HashTableConfig::default())
    }
}

impl<P> HashTable<P> {
    /// Generates a new, empty table with `buckets` buckets.
    ///
    /// # Errors
    ///
    /// [`Error::ZeroBuckets`] when `buckets` is 0.
    pub fn new(buckets: usize, function: HashFunction) -> Result<Self> {
        Self::from_config(HashTableConfig { buckets, function })
    }

    /// Generates a new, empty table from `config`.
    ///
    /// # Errors
    ///
    /// [`Error::ZeroBuckets`] when `config.buckets` is 0.
    pub fn from_config(config: HashTableConfig) -> Result<Self> {
        if config.buckets == 0 {
            return Err(Error::ZeroBuckets);
        }
        Ok(Self::with_buckets(config))
    }

    /// Generates a new, empty table selecting the hash function by name. Unrecognized names fall
    /// back to [`HashFunction::Division`].
    ///
    /// # Errors
    ///
    /// [`Error::ZeroBuckets`] when `buckets` is 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use stepcount::{HashFunction, HashTable};
    ///
    /// let table = HashTable::<()>::with_function_name(1_000, "folding")?;
    /// assert_eq!(table.hash_function(), HashFunction::Folding);
    ///
    /// let table = HashTable::<()>::with_function_name(1_000, "cuckoo")?;
    /// assert_eq!(table.hash_function(), HashFunction::Division);
    /// # Ok::<(), stepcount::Error>(())
    /// ```
    pub fn with_function_name(buckets: usize, name: &str) -> Result<Self> {
        Self::new(buckets, HashFunction::from_name_or_default(name))
    }

    // Callers have already checked `config.buckets > 0`.
    fn with_buckets(config: HashTableConfig) -> Self {
        tracing::debug!(
            buckets = config.buckets,
            function = %config.function,
            "creating hash table"
        );
        Self {
            buckets: Self::empty_buckets(config.buckets),
            function: config.function,
            collisions: 0,
            total_elements: 0,
            steps: StepCounter::new(),
        }
    }

    fn empty_buckets(count: usize) -> Vec<Vec<Record<P>>> {
        std::iter::repeat_with(Vec::new).take(count).collect()
    }

    /// The number of buckets, `M`.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// The hash function chosen at construction.
    pub fn hash_function(&self) -> HashFunction {
        self.function
    }

    /// The bucket index `key` maps to.
    pub fn hash(&self, key: Key) -> usize {
        self.function.index(key, self.buckets.len())
    }

    /// How many inserts landed in an already non-empty bucket since construction or the last
    /// `clear`.
    pub fn collisions(&self) -> usize {
        self.collisions
    }

    /// The number of distinct records stored.
    pub fn total_elements(&self) -> usize {
        self.total_elements
    }

    /// `N / M`.
    pub fn load_factor(&self) -> f64 {
        self.total_elements as f64 / self.buckets.len() as f64
    }

    /// Collisions per stored record, or 0 for an empty table. Because rejected duplicates still
    /// count as collisions this can exceed 1.
    pub fn collision_rate(&self) -> f64 {
        if self.total_elements == 0 {
            return 0.0;
        }
        self.collisions as f64 / self.total_elements as f64
    }

    /// The mean length of the non-empty chains, or 0 for an empty table.
    pub fn average_chain_length(&self) -> f64 {
        let non_empty = self.buckets.iter().filter(|b| !b.is_empty()).count();
        if non_empty == 0 {
            return 0.0;
        }
        self.total_elements as f64 / non_empty as f64
    }

    /// The length of the longest chain.
    pub fn max_chain_length(&self) -> usize {
        self.buckets.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Computes every statistic at once.
    pub fn stats(&self) -> HashTableStats {
        HashTableStats {
            buckets: self.bucket_count(),
            total_elements: self.total_elements,
            collisions: self.collisions,
            load_factor: self.load_factor(),
            collision_rate: self.collision_rate(),
            average_chain_length: self.average_chain_length(),
            max_chain_length: self.max_chain_length(),
        }
    }
}

impl<P> Container<P> for HashTable<P> {
    /// Hashing counts as the first step, then every record examined in the bucket counts one
    /// more. An already present key is left as it was.
    fn insert(&mut self, record: Record<P>) -> usize {
        self.steps.start_at(1);
        let index = self.hash(record.key());
        let bucket = &mut self.buckets[index];

        if !bucket.is_empty() {
            self.collisions += 1;
        }

        for existing in bucket.iter() {
            self.steps.tick();
            if existing.key() == record.key() {
                return self.steps.get();
            }
        }

        bucket.push(record);
        self.total_elements += 1;
        self.steps.get()
    }

    fn search(&self, key: Key) -> (Option<&Record<P>>, usize) {
        self.steps.start_at(1);
        let bucket = &self.buckets[self.hash(key)];

        for record in bucket {
            self.steps.tick();
            if record.key() == key {
                return (Some(record), self.steps.get());
            }
        }

        (None, self.steps.get())
    }

    fn len(&self) -> usize {
        self.total_elements
    }

    fn clear(&mut self) {
        tracing::debug!(
            buckets = self.buckets.len(),
            elements = self.total_elements,
            "clearing hash table"
        );
        self.buckets = Self::empty_buckets(self.buckets.len());
        self.collisions = 0;
        self.total_elements = 0;
        self.steps.reset();
    }

    fn last_steps(&self) -> usize {
        self.steps.get()
    }
}
