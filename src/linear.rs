//! An append-only array. This is the baseline every other container is compared against:
//! inserting is constant work and searching is a front-to-back scan.
//!
//! # Examples
//!
//! ```
//! use stepcount::{Container, LinearArray, Record};
//!
//! let mut array = LinearArray::new();
//! assert_eq!(array.insert(Record::new(3, "c")), 1);
//! assert_eq!(array.insert(Record::new(1, "a")), 1);
//!
//! let (found, steps) = array.search(1);
//! assert_eq!(found.map(|r| *r.payload()), Some("a"));
//! assert_eq!(steps, 2);
//!
//! // A miss examines every element.
//! assert_eq!(array.search(42), (None, 2));
//! ```

use crate::util::StepCounter;
use crate::{Container, Key, Record};

/// An unordered sequence of records kept in insertion order. Duplicate keys are stored as-is;
/// searching returns the first one inserted.
#[derive(Debug)]
pub struct LinearArray<P> {
    records: Vec<Record<P>>,
    steps: StepCounter,
}

impl<P> Default for LinearArray<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> LinearArray<P> {
    /// Generates a new, empty `LinearArray`.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            steps: StepCounter::new(),
        }
    }
}

impl<P> Container<P> for LinearArray<P> {
    fn insert(&mut self, record: Record<P>) -> usize {
        self.steps.start_at(1);
        self.records.push(record);
        self.steps.get()
    }

    fn search(&self, key: Key) -> (Option<&Record<P>>, usize) {
        self.steps.reset();
        for record in &self.records {
            self.steps.tick();
            if record.key() == key {
                return (Some(record), self.steps.get());
            }
        }

        (None, self.steps.get())
    }

    fn len(&self) -> usize {
        self.records.len()
    }

    fn clear(&mut self) {
        self.records.clear();
        self.steps.reset();
    }

    fn last_steps(&self) -> usize {
        self.steps.get()
    }
}
