//! This crate exposes four keyed containers, instrumented to report how much work each
//! operation did. They are meant for measuring empirical complexity: instead of timing an
//! operation (noisy), callers read the number of primitive steps it performed.
//!
//! ## Containers
//!
//! - [`LinearArray`]: an append-only baseline. Searching scans front to back.
//! - [`BinarySearchTree`]: an unbalanced BST. Its height depends on insertion order and can
//!   reach `N` for sorted input.
//! - [`AvlTree`]: a self-balancing BST. Its height stays within roughly `1.45 * lg N`.
//! - [`HashTable`]: a fixed number of buckets with chaining and a choice of three hash functions.
//!
//! ## Steps
//!
//! Every container implements [`Container`]. `insert` returns its step count and `search`
//! returns the step count alongside the (maybe) found record. What a "step" is depends on the
//! container:
//!
//! | Container | Step |
//! |---|---|
//! | `LinearArray` | one element examined (inserting is always 1) |
//! | `BinarySearchTree` | one node visited, including a newly attached leaf |
//! | `AvlTree` | one node visited, including a newly attached leaf, plus one per rotation |
//! | `HashTable` | one for hashing, plus one per chained record examined |
//!
//! The counter belongs to the container instance and is reset at the start of every call.
//!
//! # Examples
//!
//! ```
//! use stepcount::{AvlTree, BinarySearchTree, Container, Record};
//!
//! let mut bst = BinarySearchTree::new();
//! let mut avl = AvlTree::new();
//!
//! for key in 1..=7 {
//!     bst.insert(Record::new(key, ()));
//!     avl.insert(Record::new(key, ()));
//! }
//!
//! // Sorted input degenerates the plain tree into a list...
//! assert_eq!(bst.height(), 7);
//! assert_eq!(bst.search(7).1, 7);
//!
//! // ...but not the AVL tree.
//! assert_eq!(avl.height(), 3);
//! assert_eq!(avl.search(7).1, 3);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod avl;
pub mod bst;
mod error;
pub mod hash;
pub mod linear;
mod record;
mod util;


pub use avl::AvlTree;
pub use bst::{BinarySearchTree, DuplicatePolicy};
pub use error::{Error, Result};
pub use hash::{HashFunction, HashTable, HashTableConfig, HashTableStats};
pub use linear::LinearArray;
pub use record::{Key, Record};

/// The operations every container offers its benchmark harness.
pub trait Container<P> {
    /// Stores `record` and returns how many steps that took. Containers differ in what they do
    /// with a key that is already present; see each implementation.
    fn insert(&mut self, record: Record<P>) -> usize;

    /// Looks `key` up, returning the record (if any) and the number of steps it took to find
    /// it or to determine it is absent.
    fn search(&self, key: Key) -> (Option<&Record<P>>, usize);

    /// The number of elements this container reports holding. For the trees this counts
    /// `insert` calls, rejected duplicates included.
    fn len(&self) -> usize;

    /// Whether [`Container::len`] is zero.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every stored record and resets the step counter.
    fn clear(&mut self);

    /// The step count of the most recent `insert` or `search`. Zero after `clear`.
    fn last_steps(&self) -> usize;
}
