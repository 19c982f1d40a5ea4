//! An unbalanced Binary Search Tree. Nothing stops it from degenerating: inserting sorted keys
//! produces a tree whose height equals its size, which is exactly what makes it interesting next
//! to [`AvlTree`](crate::AvlTree).
//!
//! # Examples
//!
//! ```
//! use stepcount::{BinarySearchTree, Container, Record};
//!
//! let mut tree = BinarySearchTree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.search(40), (None, 0));
//!
//! for key in [50, 30, 70, 20, 40, 60, 80] {
//!     tree.insert(Record::new(key, key.to_string()));
//! }
//!
//! // 50 -> 30 -> 40
//! let (found, steps) = tree.search(40);
//! assert_eq!(found.map(|r| r.payload().as_str()), Some("40"));
//! assert_eq!(steps, 3);
//! assert_eq!(tree.height(), 3);
//! ```
//!
//! ## Duplicate keys
//!
//! Two policies are available through [`DuplicatePolicy`]. They are not interchangeable: under
//! `InsertRight` every repeated key adds a node (and possibly a level), under `Reject` it adds
//! nothing.

use std::cmp::Ordering;

use crate::util::StepCounter;
use crate::{Container, Key, Record};

/// What [`BinarySearchTree::insert`] does with a key that is already in the tree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DuplicatePolicy {
    /// Stop at the node holding the key and leave the tree untouched.
    #[default]
    Reject,
    /// Treat the key as "greater or equal" and keep descending right, storing another node.
    InsertRight,
}

type Link<P> = Option<Box<Node<P>>>;

#[derive(Debug)]
struct Node<P> {
    record: Record<P>,
    left: Link<P>,
    right: Link<P>,
}

impl<P> Node<P> {
    fn new_boxed(record: Record<P>) -> Box<Self> {
        Box::new(Self {
            record,
            left: None,
            right: None,
        })
    }

    fn key(&self) -> Key {
        self.record.key()
    }
}

/// A Binary Search Tree that never rebalances. All keys in a node's left subtree are smaller
/// than its key and all keys in its right subtree are greater (or equal, under
/// [`DuplicatePolicy::InsertRight`]).
///
/// Every traversal is iterative, so a degenerate tree of any size can be built, searched and
/// dropped without exhausting the stack.
#[derive(Debug)]
pub struct BinarySearchTree<P> {
    root: Link<P>,
    policy: DuplicatePolicy,
    inserts: usize,
    steps: StepCounter,
}

impl<P> Default for BinarySearchTree<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Drop for BinarySearchTree<P> {
    fn drop(&mut self) {
        self.drop_nodes();
    }
}

impl<P> BinarySearchTree<P> {
    /// Generates a new, empty tree that rejects duplicate keys.
    pub fn new() -> Self {
        Self::with_policy(DuplicatePolicy::Reject)
    }

    /// Generates a new, empty tree with the given duplicate-key policy.
    ///
    /// # Examples
    ///
    /// ```
    /// use stepcount::{BinarySearchTree, Container, DuplicatePolicy, Record};
    ///
    /// let mut rejecting = BinarySearchTree::new();
    /// let mut stacking = BinarySearchTree::with_policy(DuplicatePolicy::InsertRight);
    ///
    /// for _ in 0..3 {
    ///     rejecting.insert(Record::new(1, ()));
    ///     stacking.insert(Record::new(1, ()));
    /// }
    ///
    /// assert_eq!(rejecting.height(), 1);
    /// assert_eq!(stacking.height(), 3);
    /// ```
    pub fn with_policy(policy: DuplicatePolicy) -> Self {
        Self {
            root: None,
            policy,
            inserts: 0,
            steps: StepCounter::new(),
        }
    }

    /// The duplicate-key policy chosen at construction.
    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// The number of nodes on the longest root-to-leaf path, or 0 for an empty tree.
    ///
    /// Heights are not cached, so this walks the whole tree: `O(N)`.
    pub fn height(&self) -> usize {
        let mut tallest = 0;
        let mut stack: Vec<(&Node<P>, usize)> =
            self.root.as_deref().map(|n| (n, 1)).into_iter().collect();

        while let Some((node, depth)) = stack.pop() {
            tallest = tallest.max(depth);
            stack.extend(node.left.as_deref().map(|n| (n, depth + 1)));
            stack.extend(node.right.as_deref().map(|n| (n, depth + 1)));
        }

        tallest
    }

    // Unlinks nodes one at a time so dropping a list-shaped tree doesn't recurse `N` deep.
    fn drop_nodes(&mut self) {
        let mut stack: Vec<Box<Node<P>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<P> Container<P> for BinarySearchTree<P> {
    /// Descends from the root and attaches a new leaf. Each node visited counts one step, as does
    /// the new leaf itself. A rejected duplicate stops at the matching node.
    ///
    /// The size grows on every call, rejected duplicates included.
    fn insert(&mut self, record: Record<P>) -> usize {
        self.steps.reset();
        self.inserts += 1;

        let key = record.key();
        let policy = self.policy;
        let mut link = &mut self.root;
        while let Some(node) = link {
            self.steps.tick();
            link = match key.cmp(&node.key()) {
                Ordering::Less => &mut node.left,
                Ordering::Equal if policy == DuplicatePolicy::Reject => {
                    return self.steps.get();
                }
                Ordering::Equal | Ordering::Greater => &mut node.right,
            };
        }

        self.steps.tick();
        *link = Some(Node::new_boxed(record));
        self.steps.get()
    }

    fn search(&self, key: Key) -> (Option<&Record<P>>, usize) {
        self.steps.reset();

        let mut current = self.root.as_deref();
        while let Some(node) = current {
            self.steps.tick();
            current = match key.cmp(&node.key()) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return (Some(&node.record), self.steps.get()),
                Ordering::Greater => node.right.as_deref(),
            };
        }

        (None, self.steps.get())
    }

    fn len(&self) -> usize {
        self.inserts
    }

    fn clear(&mut self) {
        self.drop_nodes();
        self.inserts = 0;
        self.steps.reset();
    }

    fn last_steps(&self) -> usize {
        self.steps.get()
    }
}
