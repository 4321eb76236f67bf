//! Index structures.
//!
//! - [`btree`] - Single-owner B-tree with split-on-descent insertion
//! - [`SharedBTree`] - The same tree behind one exclusive lock

pub mod btree;
mod shared;

pub use shared::SharedBTree;
