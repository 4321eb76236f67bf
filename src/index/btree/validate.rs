//! Structural validator.
//!
//! Walks the whole tree and reports the first broken invariant. Intended
//! for tests and diagnostics; insertion never calls it.

use crate::common::{Error, Key, MinDegree, Result};
use crate::index::btree::{BTree, Node};

/// Bounds a subtree's keys must fall within (inclusive, since duplicates
/// may sit on either side of an equal separator).
#[derive(Clone, Copy)]
struct Bounds {
    lower: Option<Key>,
    upper: Option<Key>,
}

struct Walk {
    degree: MinDegree,
    leaf_depth: Option<usize>,
    keys_seen: usize,
}

impl BTree {
    /// Check every B-tree invariant.
    ///
    /// - no node holds more than `2t - 1` keys
    /// - every non-root node holds at least `t - 1` keys
    /// - keys inside a node are in non-decreasing order
    /// - keys of child `i` lie between separators `i - 1` and `i`
    /// - all leaves sit at the same depth, equal to [`BTree::height`]
    /// - every internal node has `keys + 1` children
    /// - the key count equals [`BTree::len`]
    ///
    /// # Errors
    /// - `Error::InvariantViolation` describing the first violation found
    pub fn validate(&self) -> Result<()> {
        let Some(root) = self.root() else {
            if self.len() != 0 || self.height() != 0 {
                return Err(violation(format!(
                    "empty tree reports len {} and height {}",
                    self.len(),
                    self.height()
                )));
            }
            return Ok(());
        };

        let mut walk = Walk {
            degree: self.degree(),
            leaf_depth: None,
            keys_seen: 0,
        };
        let bounds = Bounds {
            lower: None,
            upper: None,
        };
        walk.check_node(root, 0, bounds, true)?;

        if walk.leaf_depth != Some(self.height()) {
            return Err(violation(format!(
                "leaves at depth {:?} but height is {}",
                walk.leaf_depth,
                self.height()
            )));
        }
        if walk.keys_seen != self.len() {
            return Err(violation(format!(
                "found {} keys but len is {}",
                walk.keys_seen,
                self.len()
            )));
        }
        Ok(())
    }
}

impl Walk {
    fn check_node(
        &mut self,
        node: &Node,
        depth: usize,
        bounds: Bounds,
        is_root: bool,
    ) -> Result<()> {
        let keys = node.keys();
        self.keys_seen += keys.len();

        if keys.len() > self.degree.max_keys() {
            return Err(violation(format!(
                "node at depth {} holds {} keys (max {})",
                depth,
                keys.len(),
                self.degree.max_keys()
            )));
        }
        if is_root && keys.is_empty() {
            return Err(violation("root holds no keys".to_string()));
        }
        if !is_root && keys.len() < self.degree.min_keys() {
            return Err(violation(format!(
                "node at depth {} holds {} keys (min {})",
                depth,
                keys.len(),
                self.degree.min_keys()
            )));
        }
        if let Some(w) = keys.windows(2).find(|w| w[0] > w[1]) {
            return Err(violation(format!(
                "keys out of order at depth {}: {} before {}",
                depth, w[0], w[1]
            )));
        }
        if let (Some(&first), Some(lower)) = (keys.first(), bounds.lower) {
            if first < lower {
                return Err(violation(format!(
                    "key {} below separator {} at depth {}",
                    first, lower, depth
                )));
            }
        }
        if let (Some(&last), Some(upper)) = (keys.last(), bounds.upper) {
            if last > upper {
                return Err(violation(format!(
                    "key {} above separator {} at depth {}",
                    last, upper, depth
                )));
            }
        }

        if node.is_leaf() {
            if !node.children().is_empty() {
                return Err(violation(format!("leaf at depth {} has children", depth)));
            }
            return match self.leaf_depth {
                None => {
                    self.leaf_depth = Some(depth);
                    Ok(())
                }
                Some(expected) if expected == depth => Ok(()),
                Some(expected) => Err(violation(format!(
                    "leaf at depth {} but another leaf is at depth {}",
                    depth, expected
                ))),
            };
        }

        if node.children().len() != keys.len() + 1 {
            return Err(violation(format!(
                "internal node at depth {} has {} keys and {} children",
                depth,
                keys.len(),
                node.children().len()
            )));
        }

        for (i, child) in node.children().iter().enumerate() {
            let child_bounds = Bounds {
                lower: if i == 0 { bounds.lower } else { Some(keys[i - 1]) },
                upper: if i == keys.len() { bounds.upper } else { Some(keys[i]) },
            };
            self.check_node(child, depth + 1, child_bounds, false)?;
        }
        Ok(())
    }
}

fn violation(msg: String) -> Error {
    Error::InvariantViolation(msg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_empty_and_grown_trees() {
        let mut tree = BTree::default();
        tree.validate().unwrap();

        for key in 0..200 {
            tree.insert((key * 37) % 101);
            tree.validate().unwrap();
        }
    }

    fn leaf(keys: &[Key]) -> Node {
        Node::from_parts(true, keys.to_vec(), Vec::new())
    }

    fn internal(keys: &[Key], children: Vec<Node>) -> Node {
        Node::from_parts(false, keys.to_vec(), children)
    }

    fn tree(t: usize, root: Node, len: usize, height: usize) -> BTree {
        BTree::from_parts(MinDegree::new(t).unwrap(), Some(root), len, height)
    }

    /// Assert that validation fails with a message containing `needle`.
    fn assert_violation(tree: &BTree, needle: &str) {
        match tree.validate() {
            Err(Error::InvariantViolation(msg)) => {
                assert!(msg.contains(needle), "unexpected message: {}", msg)
            }
            other => panic!("expected violation containing {:?}, got {:?}", needle, other),
        }
    }

    #[test]
    fn test_validate_accepts_hand_built_tree() {
        let root = internal(&[10, 20], vec![leaf(&[5]), leaf(&[10, 15]), leaf(&[25])]);
        tree(2, root, 6, 1).validate().unwrap();
    }

    #[test]
    fn test_validate_rejects_overfull_node() {
        assert_violation(&tree(2, leaf(&[1, 2, 3, 4]), 4, 0), "holds 4 keys (max 3)");
    }

    #[test]
    fn test_validate_rejects_underfull_non_root() {
        let root = internal(&[10], vec![leaf(&[1]), leaf(&[11, 12])]);
        assert_violation(&tree(3, root, 4, 1), "holds 1 keys (min 2)");
    }

    #[test]
    fn test_validate_rejects_keyless_root() {
        assert_violation(&tree(2, leaf(&[]), 0, 0), "root holds no keys");
    }

    #[test]
    fn test_validate_rejects_unsorted_keys() {
        assert_violation(&tree(2, leaf(&[3, 1]), 2, 0), "out of order");
    }

    #[test]
    fn test_validate_rejects_key_above_separator() {
        let root = internal(&[10], vec![leaf(&[1, 11]), leaf(&[12])]);
        assert_violation(&tree(2, root, 4, 1), "key 11 above separator 10");
    }

    #[test]
    fn test_validate_rejects_key_below_separator() {
        let root = internal(&[5], vec![leaf(&[1]), leaf(&[3])]);
        assert_violation(&tree(2, root, 3, 1), "key 3 below separator 5");
    }

    #[test]
    fn test_validate_rejects_uneven_leaf_depth() {
        let right = internal(&[20], vec![leaf(&[15]), leaf(&[25])]);
        let root = internal(&[10], vec![leaf(&[5]), right]);
        assert_violation(&tree(2, root, 5, 1), "leaf at depth 2");
    }

    #[test]
    fn test_validate_rejects_child_count_mismatch() {
        let root = internal(&[10, 20], vec![leaf(&[5]), leaf(&[15])]);
        assert_violation(&tree(2, root, 4, 1), "2 keys and 2 children");
    }

    #[test]
    fn test_validate_rejects_leaf_with_children() {
        let root = Node::from_parts(true, vec![5], vec![leaf(&[1])]);
        assert_violation(&tree(2, root, 1, 0), "has children");
    }

    #[test]
    fn test_validate_rejects_len_mismatch() {
        assert_violation(&tree(2, leaf(&[1, 2]), 3, 0), "found 2 keys but len is 3");
    }

    #[test]
    fn test_validate_rejects_height_mismatch() {
        assert_violation(&tree(2, leaf(&[1]), 1, 1), "height is 1");

        let empty = BTree::from_parts(MinDegree::default(), None, 1, 0);
        assert_violation(&empty, "empty tree reports len 1");
    }

    #[test]
    fn test_validate_higher_degrees() {
        for t in 2..6 {
            let mut tree = BTree::new(t).unwrap();
            tree.extend((0..500).rev());
            tree.validate().unwrap();
            assert_eq!(tree.len(), 500);
        }
    }
}
