//! Minimum degree type.

use std::fmt;

use crate::common::config::{DEFAULT_MIN_DEGREE, MAX_MIN_DEGREE, MIN_DEGREE_FLOOR};
use crate::common::{Error, Result};

/// The minimum degree `t` of a B-tree.
///
/// Every size bound of a node is derived from `t`:
/// - `min_keys = t - 1`
/// - `max_keys = 2t - 1`
/// - `min_children = t`
/// - `max_children = 2t`
///
/// The only way to build one is through [`MinDegree::new`], so a
/// `MinDegree` in hand is always `>= 2` and its bounds never overflow.
///
/// # Example
/// ```
/// use btree_index::MinDegree;
///
/// let t = MinDegree::new(3).unwrap();
/// assert_eq!(t.max_keys(), 5);
/// assert_eq!(t.min_keys(), 2);
/// assert!(MinDegree::new(1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MinDegree(usize);

impl MinDegree {
    /// Validate and wrap a minimum degree.
    ///
    /// # Errors
    /// - `Error::InvalidConfiguration` if `t < 2` or `2t` overflows `usize`
    pub fn new(t: usize) -> Result<Self> {
        if !(MIN_DEGREE_FLOOR..=MAX_MIN_DEGREE).contains(&t) {
            return Err(Error::InvalidConfiguration {
                min_degree: t,
                floor: MIN_DEGREE_FLOOR,
                ceiling: MAX_MIN_DEGREE,
            });
        }
        Ok(MinDegree(t))
    }

    /// The raw value of `t`.
    #[inline]
    pub fn get(&self) -> usize {
        self.0
    }

    /// Fewest keys a non-root node may hold.
    #[inline]
    pub fn min_keys(&self) -> usize {
        self.0 - 1
    }

    /// Most keys any node may hold at rest.
    #[inline]
    pub fn max_keys(&self) -> usize {
        2 * self.0 - 1
    }

    #[inline]
    pub fn min_children(&self) -> usize {
        self.0
    }

    #[inline]
    pub fn max_children(&self) -> usize {
        2 * self.0
    }
}

impl Default for MinDegree {
    fn default() -> Self {
        MinDegree(DEFAULT_MIN_DEGREE)
    }
}

impl fmt::Display for MinDegree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={}", self.0)
    }
}
