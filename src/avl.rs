//! A self-balancing Binary Search Tree (specifically, an AVL tree). After every insertion the
//! heights of any node's two subtrees differ by at most one, which keeps the whole tree's height
//! logarithmic no matter the insertion order.
//!
//! # Examples
//!
//! ```
//! use stepcount::{AvlTree, Container, Record};
//!
//! let mut tree = AvlTree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.search(1), (None, 0));
//! assert_eq!(tree.height(), 0);
//!
//! // Inserting sorted keys would give a plain BST a height of 7.
//! for key in 1..=7 {
//!     tree.insert(Record::new(key, key * 10));
//! }
//! assert_eq!(tree.height(), 3);
//!
//! let (found, steps) = tree.search(5);
//! assert_eq!(found.map(|r| *r.payload()), Some(50));
//! assert_eq!(steps, 3);
//!
//! // Inserting an existing key changes nothing.
//! tree.insert(Record::new(5, 0));
//! assert_eq!(tree.search(5).0.map(|r| *r.payload()), Some(50));
//! ```
//!
//! ## Steps
//!
//! Inserting counts one step per node visited on the way down (the new leaf included) and one
//! step per rotation performed on the way back up. A double rotation is two steps.

use std::cmp::Ordering;

use crate::util::StepCounter;
use crate::{Container, Key, Record};

/// A height-balanced Binary Search Tree. Duplicate keys are ignored: no node is created and no
/// rebalancing happens.
///
/// Each node caches its height so [`AvlTree::height`] is `O(1)`.
#[derive(Debug)]
pub struct AvlTree<P> {
    root: Link<P>,
    inserts: usize,
    steps: StepCounter,
}

impl<P> Default for AvlTree<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> AvlTree<P> {
    /// Generates a new, empty `AvlTree`.
    pub fn new() -> Self {
        Self {
            root: Link(None),
            inserts: 0,
            steps: StepCounter::new(),
        }
    }

    /// The height of the tree, read from the root's cached height. An empty tree has height 0
    /// and a lone root has height 1.
    pub fn height(&self) -> usize {
        self.root.height()
    }
}

impl<P> Container<P> for AvlTree<P> {
    /// The size grows on every call, ignored duplicates included.
    fn insert(&mut self, record: Record<P>) -> usize {
        self.steps.reset();
        self.inserts += 1;
        self.root.insert(record, &self.steps);
        self.steps.get()
    }

    fn search(&self, key: Key) -> (Option<&Record<P>>, usize) {
        self.steps.reset();

        let mut current = self.root.node();
        while let Some(node) = current {
            self.steps.tick();
            current = match key.cmp(&node.key()) {
                Ordering::Less => node.left.node(),
                Ordering::Equal => return (Some(&node.record), self.steps.get()),
                Ordering::Greater => node.right.node(),
            };
        }

        (None, self.steps.get())
    }

    fn len(&self) -> usize {
        self.inserts
    }

    fn clear(&mut self) {
        self.root = Link(None);
        self.inserts = 0;
        self.steps.reset();
    }

    fn last_steps(&self) -> usize {
        self.steps.get()
    }
}

#[derive(Debug)]
struct Link<P>(Option<Box<Node<P>>>);

impl<P> Link<P> {
    fn node(&self) -> Option<&Node<P>> {
        self.0.as_deref()
    }

    fn take(&mut self) -> Self {
        Link(self.0.take())
    }

    fn height(&self) -> usize {
        self.node().map_or(0, |n| n.height)
    }

    fn key(&self) -> Option<Key> {
        self.node().map(Node::key)
    }

    /// Inserts `record` below this link, rebalancing every node on the way back up. Returns
    /// whether a node was actually added.
    fn insert(&mut self, record: Record<P>, steps: &StepCounter) -> bool {
        steps.tick();
        let node = match &mut self.0 {
            Some(node) => node,
            None => {
                self.0 = Some(Node::new_boxed(record));
                return true;
            }
        };

        let key = record.key();
        let inserted = match key.cmp(&node.key()) {
            Ordering::Less => node.left.insert(record, steps),
            Ordering::Equal => false,
            Ordering::Greater => node.right.insert(record, steps),
        };

        if inserted {
            self.balance(key, steps);
        }
        inserted
    }

    /// Refreshes this node's height and, if it is out of balance, rotates it back into shape.
    /// `key` is the key just inserted below it; comparing it with the taller child's key tells
    /// the single rotation cases (LL, RR) from the double rotation ones (LR, RL).
    ///
    /// See https://en.wikipedia.org/wiki/AVL_tree#Rebalancing for terminology.
    fn balance(&mut self, key: Key, steps: &StepCounter) {
        let Some(root) = self.0.as_deref_mut() else {
            return;
        };
        root.fix_height();

        match (root.balance_factor(), root.left.key(), root.right.key()) {
            (b, Some(left), _) if b > 1 && key < left => self.rotate_right(steps),
            (b, Some(_), _) if b > 1 => self.rotate_left_right(steps),
            (b, _, Some(right)) if b < -1 && key > right => self.rotate_left(steps),
            (b, _, Some(_)) if b < -1 => self.rotate_right_left(steps),
            _ => {}
        }

        if cfg!(debug_assertions) {
            let Some(root) = self.node() else {
                return;
            };
            let left_height = root.left.height();
            let right_height = root.right.height();
            assert_eq!(root.height, left_height.max(right_height) + 1);
            assert!(left_height.abs_diff(right_height) <= 1);
        }
    }

    /// Rotate self to the right. This moves the left child up vertically and self down
    /// vertically. Used to rebalance the tree when the left child is too tall. As such, it must
    /// only be called when there _is_ a left child.
    ///
    /// ## Panics
    ///
    /// When called on a node without a left child.
    ///
    /// # Diagram
    ///
    /// ```text
    ///      old_root                new_root
    ///      /     \                 /     \
    ///  new_root   z    rotate ->  x    old_root
    ///   /  \                             /  \
    ///  x    y                           y    z
    /// ```
    fn rotate_right(&mut self, steps: &StepCounter) {
        steps.tick();
        let mut old_root = self.0.take().expect("Cannot rotate empty tree/node.");
        let mut new_root = old_root.left.0.take().expect("Rotate right => left child");
        tracing::trace!(from = old_root.key(), to = new_root.key(), "rotate right");

        old_root.left = new_root.right.take();
        old_root.fix_height();

        new_root.right = Link(Some(old_root));
        new_root.fix_height();
        self.0 = Some(new_root);
    }

    /// The mirror image of [`Link::rotate_right`]: the right child moves up.
    fn rotate_left(&mut self, steps: &StepCounter) {
        steps.tick();
        let mut old_root = self.0.take().expect("Rotating a tree requires a root");
        let mut new_root = old_root.right.0.take().expect("Rotate left => right child");
        tracing::trace!(from = old_root.key(), to = new_root.key(), "rotate left");

        old_root.right = new_root.left.take();
        old_root.fix_height();

        new_root.left = Link(Some(old_root));
        new_root.fix_height();
        self.0 = Some(new_root);
    }

    fn rotate_right_left(&mut self, steps: &StepCounter) {
        self.0
            .as_deref_mut()
            .expect("Rotating a tree requires a root")
            .right
            .rotate_right(steps);
        self.rotate_left(steps);
    }

    fn rotate_left_right(&mut self, steps: &StepCounter) {
        self.0
            .as_deref_mut()
            .expect("Rotating a tree requires a root")
            .left
            .rotate_left(steps);
        self.rotate_right(steps);
    }
}

#[derive(Debug)]
struct Node<P> {
    record: Record<P>,
    left: Link<P>,
    right: Link<P>,
    height: usize,
}

impl<P> Node<P> {
    fn new_boxed(record: Record<P>) -> Box<Self> {
        Box::new(Node {
            record,
            left: Link(None),
            right: Link(None),
            height: 1,
        })
    }

    fn key(&self) -> Key {
        self.record.key()
    }

    fn fix_height(&mut self) {
        self.height = 1 + self.left.height().max(self.right.height());
    }

    /// Height of the left subtree minus height of the right subtree.
    fn balance_factor(&self) -> isize {
        self.left.height() as isize - self.right.height() as isize
    }
}
