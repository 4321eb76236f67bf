//! Thread-safe wrapper around [`BTree`].

use parking_lot::Mutex;

use crate::common::{Key, MinDegree, Result};
use crate::index::btree::BTree;

/// A [`BTree`] that can be shared between threads.
///
/// # Thread Safety
/// A split can touch any node between the root and a leaf, so the whole
/// tree sits behind a single `Mutex`. Each `insert` holds the lock for the
/// full descent; readers take the same lock and see a tree between inserts,
/// never one mid-split.
///
/// # Usage
/// ```
/// use std::sync::Arc;
/// use std::thread;
/// use btree_index::SharedBTree;
///
/// let tree = Arc::new(SharedBTree::new(2).unwrap());
/// let handles: Vec<_> = (0..4)
///     .map(|n| {
///         let tree = Arc::clone(&tree);
///         thread::spawn(move || tree.insert(n))
///     })
///     .collect();
/// for handle in handles {
///     handle.join().unwrap();
/// }
/// assert_eq!(tree.keys(), vec![0, 1, 2, 3]);
/// ```
#[derive(Debug)]
pub struct SharedBTree {
    inner: Mutex<BTree>,
}

impl SharedBTree {
    /// Create an empty shared tree with minimum degree `t`.
    ///
    /// # Errors
    /// - `Error::InvalidConfiguration` if `t` is outside `2..=MAX_MIN_DEGREE`
    pub fn new(t: usize) -> Result<Self> {
        Ok(Self::from_tree(BTree::new(t)?))
    }

    /// Create an empty shared tree from an already validated degree.
    pub fn with_degree(degree: MinDegree) -> Self {
        Self::from_tree(BTree::with_degree(degree))
    }

    /// Wrap an existing tree.
    pub fn from_tree(tree: BTree) -> Self {
        Self {
            inner: Mutex::new(tree),
        }
    }

    /// Insert `key` while holding the tree lock.
    pub fn insert(&self, key: Key) {
        self.inner.lock().insert(key);
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn height(&self) -> usize {
        self.inner.lock().height()
    }

    /// All keys in order, copied out under the lock.
    pub fn keys(&self) -> Vec<Key> {
        self.inner.lock().iter().collect()
    }

    /// Run `f` against the tree while holding the lock.
    pub fn read<R>(&self, f: impl FnOnce(&BTree) -> R) -> R {
        f(&self.inner.lock())
    }

    /// Unwrap the tree, consuming the wrapper.
    pub fn into_inner(self) -> BTree {
        self.inner.into_inner()
    }
}

impl Default for SharedBTree {
    fn default() -> Self {
        Self::from_tree(BTree::default())
    }
}
