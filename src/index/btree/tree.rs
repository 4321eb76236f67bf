//! The B-tree itself: root ownership, insertion entry point and read-only
//! traversal.

use crate::common::{Key, MinDegree, Result};
use crate::index::btree::{Iter, Node, TreeStats};

/// An in-memory B-tree of integer keys with a fixed minimum degree.
///
/// # Architecture
/// ```text
///                      BTree { root, degree }
///                               │
///                        ┌──────┴──────┐
///                        │ [k0 .. km-1]│        ≤ 2t-1 keys
///                        └┬────┬─────┬─┘
///                   ┌─────┘    │     └─────┐    keys + 1 children
///                ┌──┴──┐    ┌──┴──┐     ┌──┴──┐
///                │ c0  │    │ c1  │ ... │ cm  │  ≥ t-1 keys (non-root)
///                └─────┘    └─────┘     └─────┘
/// ```
///
/// # Insertion
/// Insertion is a single downward pass. A full root is split before the
/// descent starts (the only place the tree grows taller), and every full
/// child on the path is split before it is entered. No split ever has to
/// propagate back up.
///
/// # Usage
/// ```
/// use btree_index::BTree;
///
/// let mut tree = BTree::new(2).unwrap();
/// for key in [10, 20, 5, 6] {
///     tree.insert(key);
/// }
///
/// let root = tree.root().unwrap();
/// assert_eq!(root.keys(), &[10]);
/// assert_eq!(tree.iter().collect::<Vec<_>>(), vec![5, 6, 10, 20]);
/// ```
#[derive(Debug, Clone)]
pub struct BTree {
    /// None until the first insertion.
    root: Option<Node>,

    degree: MinDegree,

    /// Number of keys stored, duplicates included.
    len: usize,

    /// Edges from the root to any leaf.
    height: usize,

    stats: TreeStats,
}

impl BTree {
    /// Create an empty tree with minimum degree `t`.
    ///
    /// # Errors
    /// - `Error::InvalidConfiguration` if `t` is below 2 or above
    ///   [`MAX_MIN_DEGREE`](crate::common::config::MAX_MIN_DEGREE)
    pub fn new(t: usize) -> Result<Self> {
        Ok(Self::with_degree(MinDegree::new(t)?))
    }

    /// Create an empty tree from an already validated degree.
    pub fn with_degree(degree: MinDegree) -> Self {
        tracing::debug!(%degree, max_keys = degree.max_keys(), "created B-tree");
        Self {
            root: None,
            degree,
            len: 0,
            height: 0,
            stats: TreeStats::default(),
        }
    }

    /// Assemble a tree from raw parts, bypassing every shape check.
    #[cfg(test)]
    pub(crate) fn from_parts(
        degree: MinDegree,
        root: Option<Node>,
        len: usize,
        height: usize,
    ) -> Self {
        Self {
            root,
            degree,
            len,
            height,
            stats: TreeStats::default(),
        }
    }

    // ========================================================================
    // Public API: Insertion
    // ========================================================================

    /// Insert `key` into the tree.
    ///
    /// Never fails. Duplicate keys are kept and end up next to their equals.
    pub fn insert(&mut self, key: Key) {
        let degree = self.degree;
        self.stats.inserts += 1;
        self.len += 1;

        let root = match self.root.take() {
            None => {
                self.root = Some(Node::leaf_with(key));
                return;
            }
            Some(root) => root,
        };

        let mut root = if root.is_full(degree) {
            let mut new_root = Node::new_root_over(root);
            new_root.split_child(0, degree);

            self.height += 1;
            self.stats.splits += 1;
            self.stats.root_splits += 1;
            tracing::debug!(
                height = self.height,
                median = new_root.keys()[0],
                "root split, tree grew"
            );
            new_root
        } else {
            root
        };

        let splits = root.insert_non_full(key, degree);
        self.stats.splits += splits as u64;
        self.root = Some(root);
    }

    // ========================================================================
    // Public API: Inspection
    // ========================================================================

    /// Check if the tree holds no keys.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of keys stored, duplicates included.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of edges between the root and the leaves.
    ///
    /// 0 for an empty tree and for a tree whose root is a leaf.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn degree(&self) -> MinDegree {
        self.degree
    }

    /// The root node, if any key has been inserted.
    #[inline]
    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }

    /// Snapshot of the insertion counters.
    #[inline]
    pub fn stats(&self) -> TreeStats {
        self.stats
    }

    /// Walk every node in pre-order (node before its children), passing the
    /// node and its depth. The root is at depth 0.
    pub fn for_each_node<F>(&self, mut visitor: F)
    where
        F: FnMut(&Node, usize),
    {
        let Some(root) = &self.root else {
            return;
        };

        // Children are pushed in reverse so the leftmost is visited first.
        let mut stack = vec![(root, 0usize)];
        while let Some((node, depth)) = stack.pop() {
            visitor(node, depth);
            stack.extend(node.children().iter().rev().map(|c| (c, depth + 1)));
        }
    }

    /// Iterate over all keys in non-decreasing order.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.root.as_ref(), self.len)
    }
}

impl Default for BTree {
    fn default() -> Self {
        Self::with_degree(MinDegree::default())
    }
}

impl<'a> IntoIterator for &'a BTree {
    type Item = Key;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl Extend<Key> for BTree {
    fn extend<I: IntoIterator<Item = Key>>(&mut self, keys: I) {
        for key in keys {
            self.insert(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Error;

    /// Collect (depth, keys) for every node in pre-order.
    fn shape(tree: &BTree) -> Vec<(usize, Vec<Key>)> {
        let mut out = Vec::new();
        tree.for_each_node(|node, depth| out.push((depth, node.keys().to_vec())));
        out
    }

    #[test]
    fn test_new_rejects_degree_one() {
        assert_eq!(
            BTree::new(1).unwrap_err(),
            Error::InvalidConfiguration {
                min_degree: 1,
                floor: 2,
                ceiling: crate::common::config::MAX_MIN_DEGREE,
            }
        );
        assert!(BTree::new(0).is_err());
    }

    #[test]
    fn test_huge_degree_rejected_before_insert() {
        assert!(BTree::new(usize::MAX / 2 + 1).is_err());

        let mut tree = BTree::new(usize::MAX / 2).unwrap();
        tree.insert(1);
        tree.insert(2);
        assert_eq!(tree.iter().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_empty_tree() {
        let tree = BTree::default();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.height(), 0);
        assert!(tree.root().is_none());
        assert!(shape(&tree).is_empty());
    }

    #[test]
    fn test_single_key_tree() {
        let mut tree = BTree::default();
        tree.insert(42);

        let root = tree.root().unwrap();
        assert!(root.is_leaf());
        assert_eq!(root.keys(), &[42]);
        assert!(root.children().is_empty());
        assert!(!tree.is_empty());
        assert_eq!(tree.height(), 0);
    }

    #[test]
    fn test_root_split_grows_height() {
        let mut tree = BTree::default();
        tree.extend([10, 20, 5]);
        assert_eq!(tree.height(), 0);
        assert!(tree.root().unwrap().is_full(tree.degree()));

        tree.insert(6);

        assert_eq!(tree.height(), 1);
        assert_eq!(
            shape(&tree),
            vec![(0, vec![10]), (1, vec![5, 6]), (1, vec![20])]
        );
        assert_eq!(tree.stats().root_splits, 1);
    }

    #[test]
    fn test_pre_order_walk() {
        let mut tree = BTree::default();
        tree.extend([10, 20, 5, 6, 12, 30, 7, 17]);

        assert_eq!(
            shape(&tree),
            vec![
                (0, vec![10, 20]),
                (1, vec![5, 6, 7]),
                (1, vec![12, 17]),
                (1, vec![30]),
            ]
        );
    }

    #[test]
    fn test_stats_count_child_splits() {
        let mut tree = BTree::default();
        tree.extend([10, 20, 5, 6, 12, 30, 7, 17]);

        let stats = tree.stats();
        assert_eq!(stats.inserts, 8);
        assert_eq!(stats.root_splits, 1);
        assert_eq!(stats.splits, 2);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut tree = BTree::default();
        tree.extend([7, 7, 7, 7, 7, 3, 7]);

        assert_eq!(tree.len(), 7);
        assert_eq!(tree.iter().collect::<Vec<_>>(), vec![3, 7, 7, 7, 7, 7, 7]);
        tree.validate().unwrap();
    }
}
