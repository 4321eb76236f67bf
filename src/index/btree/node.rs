//! B-tree node and the two structural operations that run on it.
//!
//! - [`Node::split_child`] - divide a full child into two halves and
//!   promote its median into this node
//! - [`Node::insert_non_full`] - place a key into the subtree rooted at a
//!   node that is known to have room, splitting full children on the way
//!   down
//!
//! Children are owned directly by their parent (`Vec<Node>`), so the
//! whole tree is a strict ownership tree with no back references. A split
//! moves the tail of a node's keys and children into the new sibling with
//! `Vec::split_off`; nothing is cloned.

use crate::common::{Key, MinDegree};

/// One page of the tree.
///
/// At rest (between calls into the tree):
/// - `keys` is sorted in non-decreasing order
/// - a leaf has no children
/// - an internal node has exactly `keys.len() + 1` children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    leaf: bool,
    keys: Vec<Key>,
    children: Vec<Node>,
}

impl Node {
    /// Create a leaf holding a single key.
    pub(crate) fn leaf_with(key: Key) -> Self {
        Self {
            leaf: true,
            keys: vec![key],
            children: Vec::new(),
        }
    }

    /// Create a key-less internal node over one child.
    ///
    /// Only valid as a transient state: the caller must immediately split
    /// `child`, which gives the node its first key and second child.
    pub(crate) fn new_root_over(child: Node) -> Self {
        Self {
            leaf: false,
            keys: Vec::new(),
            children: vec![child],
        }
    }

    /// Assemble a node from raw parts, bypassing every shape check.
    #[cfg(test)]
    pub(crate) fn from_parts(leaf: bool, keys: Vec<Key>, children: Vec<Node>) -> Self {
        Self {
            leaf,
            keys,
            children,
        }
    }

    /// True if this node has no children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.leaf
    }

    /// Keys stored in this node, in ascending order.
    #[inline]
    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    /// Children of this node. Empty for a leaf.
    #[inline]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Check if the node holds `max_keys` keys and must be split before
    /// a key can be routed through it.
    #[inline]
    pub fn is_full(&self, degree: MinDegree) -> bool {
        self.keys.len() == degree.max_keys()
    }

    /// Split the full child at `index` around its median.
    ///
    /// Before: `self.children[index]` holds `2t - 1` keys and `self` has
    /// room for one more key.
    ///
    /// After:
    /// - the child keeps its first `t - 1` keys (and first `t` children)
    /// - a new right sibling at `index + 1` takes the last `t - 1` keys
    ///   (and last `t` children)
    /// - the median sits in `self.keys[index]`
    ///
    /// Never recurses and never triggers another split.
    pub(crate) fn split_child(&mut self, index: usize, degree: MinDegree) {
        let t = degree.get();
        debug_assert!(self.keys.len() < degree.max_keys(), "split into a full parent");
        debug_assert!(index < self.children.len(), "split index out of range");

        let full = &mut self.children[index];
        debug_assert!(full.is_full(degree), "split of a non-full node");

        // Read the median before anything moves.
        let median = full.keys[t - 1];

        let right_keys = full.keys.split_off(t);
        let right_children = if full.leaf {
            Vec::new()
        } else {
            full.children.split_off(t)
        };
        full.keys.truncate(t - 1);

        let right = Node {
            leaf: full.leaf,
            keys: right_keys,
            children: right_children,
        };

        tracing::trace!(
            index,
            median,
            left_len = full.keys.len(),
            right_len = right.keys.len(),
            leaf = right.leaf,
            "split child"
        );

        self.children.insert(index + 1, right);
        self.keys.insert(index, median);
    }

    /// Insert `key` into the subtree rooted at this node.
    ///
    /// The node must not be full on entry. Any full child on the descent
    /// path is split before it is entered, so every recursive call also
    /// lands on a non-full node and no split ever propagates upward.
    ///
    /// Equal keys are routed left: the insertion point is the number of
    /// keys strictly less than `key`, both in leaves and when choosing a
    /// child.
    ///
    /// Returns the number of child splits performed on the way down.
    pub(crate) fn insert_non_full(&mut self, key: Key, degree: MinDegree) -> usize {
        debug_assert!(!self.is_full(degree), "insert into a full node");

        let mut i = self.keys.partition_point(|k| *k < key);

        if self.leaf {
            self.keys.insert(i, key);
            return 0;
        }

        let mut splits = 0;
        if self.children[i].is_full(degree) {
            self.split_child(i, degree);
            splits += 1;

            // The promoted median now separates child i from child i + 1.
            if key > self.keys[i] {
                i += 1;
            }
        }

        splits + self.children[i].insert_non_full(key, degree)
    }
}
