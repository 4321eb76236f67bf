//! Text dump of a tree, one node per line.
//!
//! ```text
//! [10, 20]
//!   [5, 6, 7]
//!   [12, 17]
//!   [30]
//! ```

use std::fmt::{self, Write};

use crate::common::Key;
use crate::index::btree::BTree;

/// Indentation added per level.
const INDENT: &str = "  ";

impl fmt::Display for BTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("(empty)\n");
        }

        let mut result = Ok(());
        self.for_each_node(|node, depth| {
            if result.is_ok() {
                result = write_line(f, node.keys(), depth);
            }
        });
        result
    }
}

fn write_line(f: &mut fmt::Formatter<'_>, keys: &[Key], depth: usize) -> fmt::Result {
    for _ in 0..depth {
        f.write_str(INDENT)?;
    }
    f.write_char('[')?;
    for (i, key) in keys.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", key)?;
    }
    f.write_str("]\n")
}
