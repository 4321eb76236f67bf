//! btree-index - An in-memory B-tree index of integer keys.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                          btree-index                            │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐    │
//! │  │          SharedBTree (index/shared)                     │    │
//! │  │        one Mutex around the whole tree                  │    │
//! │  └─────────────────────────────────────────────────────────┘    │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐    │
//! │  │               BTree (index/btree)                       │    │
//! │  │   insert → root split → insert_non_full → split_child   │    │
//! │  │   for_each_node / iter / validate / Display             │    │
//! │  └─────────────────────────────────────────────────────────┘    │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐    │
//! │  │               Common (common/)                          │    │
//! │  │        MinDegree + Key + Error + config constants       │    │
//! │  └─────────────────────────────────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (MinDegree, Key, Error, config)
//! - [`index`] - The B-tree and its thread-safe wrapper
//!
//! # Quick Start
//! ```
//! use btree_index::BTree;
//!
//! let mut tree = BTree::new(2).unwrap();
//! for key in [10, 20, 5, 6, 12, 30, 7, 17] {
//!     tree.insert(key);
//! }
//!
//! assert_eq!(tree.root().unwrap().keys(), &[10, 20]);
//! assert_eq!(tree.height(), 1);
//! tree.validate().unwrap();
//! ```

pub mod common;
pub mod index;

// Re-export commonly used items at crate root for convenience
pub use common::config::{DEFAULT_MIN_DEGREE, MAX_MIN_DEGREE, MIN_DEGREE_FLOOR};
pub use common::{Error, Key, MinDegree, Result};

pub use index::btree::{BTree, Iter, Node, TreeStats};
pub use index::SharedBTree;
