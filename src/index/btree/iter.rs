//! In-order key iterator.

use crate::common::Key;
use crate::index::btree::Node;

/// Iterates over every key in the tree in non-decreasing order.
///
/// Keeps an explicit stack of `(node, next key index)` frames instead of
/// recursing, so iteration depth is independent of tree height.
pub struct Iter<'a> {
    stack: Vec<(&'a Node, usize)>,
    remaining: usize,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(root: Option<&'a Node>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        if let Some(root) = root {
            iter.push_left_spine(root);
        }
        iter
    }

    /// Push `node` and its leftmost descendants.
    fn push_left_spine(&mut self, mut node: &'a Node) {
        loop {
            self.stack.push((node, 0));
            match node.children().first() {
                Some(child) => node = child,
                None => break,
            }
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = Key;

    fn next(&mut self) -> Option<Key> {
        loop {
            let (node, idx) = self.stack.last_mut()?;
            let node: &'a Node = *node;

            if *idx < node.keys().len() {
                let key = node.keys()[*idx];
                *idx += 1;
                let next = *idx;
                if !node.is_leaf() {
                    self.push_left_spine(&node.children()[next]);
                }
                self.remaining = self.remaining.saturating_sub(1);
                return Some(key);
            }

            self.stack.pop();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}
