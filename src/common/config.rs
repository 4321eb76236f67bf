//! Configuration constants for the B-tree index.

/// Smallest minimum degree a tree accepts.
///
/// With `t = 1` a node could hold `2t - 1 = 1` key but the minimum fill
/// `t - 1 = 0` no longer forces splits to produce balanced halves.
pub const MIN_DEGREE_FLOOR: usize = 2;

/// Largest minimum degree a tree accepts.
///
/// `max_children = 2t` must fit in a `usize`.
pub const MAX_MIN_DEGREE: usize = usize::MAX / 2;

/// Minimum degree used by [`BTree::default`](crate::BTree).
///
/// `t = 2` gives the classic 2-3-4 tree:
/// - at most 3 keys per node
/// - at most 4 children per node
pub const DEFAULT_MIN_DEGREE: usize = 2;
