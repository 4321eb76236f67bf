//! Insertion statistics.

use std::fmt;

/// Counters updated by every [`BTree::insert`](crate::BTree::insert).
///
/// The tree is only ever mutated through `&mut self`, so plain integers are
/// enough. A copy is handed out by [`BTree::stats`](crate::BTree::stats).
///
/// # Example
/// ```
/// use btree_index::BTree;
///
/// let mut tree = BTree::default();
/// for key in [1, 2, 3, 4] {
///     tree.insert(key);
/// }
/// let stats = tree.stats();
/// assert_eq!(stats.inserts, 4);
/// assert_eq!(stats.root_splits, 1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeStats {
    /// Number of keys inserted.
    pub inserts: u64,

    /// Number of node splits, root splits included.
    pub splits: u64,

    /// Number of root splits. Each one grew the tree by one level.
    pub root_splits: u64,
}

impl TreeStats {
    /// Average number of splits per insertion (0.0 for an empty tree).
    pub fn splits_per_insert(&self) -> f64 {
        if self.inserts == 0 {
            0.0
        } else {
            self.splits as f64 / self.inserts as f64
        }
    }
}

impl fmt::Display for TreeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ inserts: {}, splits: {}, root_splits: {}, splits/insert: {:.2} }}",
            self.inserts,
            self.splits,
            self.root_splits,
            self.splits_per_insert()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_default() {
        let stats = TreeStats::default();
        assert_eq!(stats.inserts, 0);
        assert_eq!(stats.splits_per_insert(), 0.0);
    }

    #[test]
    fn test_stats_display() {
        let stats = TreeStats {
            inserts: 8,
            splits: 2,
            root_splits: 1,
        };
        let display = format!("{}", stats);

        assert!(display.contains("inserts: 8"));
        assert!(display.contains("root_splits: 1"));
        assert!(display.contains("splits/insert: 0.25"));
    }
}
