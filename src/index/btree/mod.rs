//! B-tree index implementation.
//!
//! # Components
//! - [`BTree`] - Root ownership, insertion, traversal
//! - [`Node`] - One page of the tree; owns its children
//! - [`Iter`] - In-order key iterator
//! - [`TreeStats`] - Split and insertion counters
//!
//! The text dump (`Display for BTree`) and the structural validator
//! (`BTree::validate`) live in their own modules.

mod display;
mod iter;
mod node;
mod stats;
mod tree;
mod validate;

pub use iter::Iter;
pub use node::Node;
pub use stats::TreeStats;
pub use tree::BTree;
