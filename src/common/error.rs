//! Error types for the B-tree index.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in the B-tree index.
///
/// Insertion itself never fails. Errors only come from building a tree
/// with a bad configuration or from the structural validator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The requested minimum degree is outside `floor..=ceiling`.
    ///
    /// A degree of 1 would allow nodes of unbounded size; above the
    /// ceiling the node size bounds no longer fit in a `usize`.
    #[error("Invalid configuration: minimum degree {min_degree} (must be in {floor}..={ceiling})")]
    InvalidConfiguration {
        min_degree: usize,
        floor: usize,
        ceiling: usize,
    },

    /// The validator found a node that breaks a B-tree invariant.
    ///
    /// This indicates a bug in the insertion code, not a user error.
    #[error("B-tree invariant violated: {0}")]
    InvariantViolation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidConfiguration {
            min_degree: 1,
            floor: 2,
            ceiling: 9,
        };
        assert_eq!(
            err.to_string(),
            "Invalid configuration: minimum degree 1 (must be in 2..=9)"
        );

        let err = Error::InvariantViolation("leaf depth mismatch".to_string());
        assert_eq!(
            err.to_string(),
            "B-tree invariant violated: leaf depth mismatch"
        );
    }

    #[test]
    fn test_degree_error_propagates_through_tree_constructor() {
        fn build(t: usize) -> Result<usize> {
            let tree = crate::BTree::new(t)?;
            Ok(tree.degree().get())
        }

        assert_eq!(build(4), Ok(4));
        assert!(matches!(
            build(1),
            Err(Error::InvalidConfiguration { min_degree: 1, .. })
        ));
    }
}
