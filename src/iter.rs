use std::collections::hash_map;

use crate::node::{Edge, Node};

/// Depth-first iterator over all stored `(key, value)` pairs.
///
/// Keys are rebuilt from edge labels as the walk descends. Order is
/// unspecified: children at each level come out in hash-map order.
pub struct Iter<'a, V> {
    // One frame per visited node: its child iterator and the byte length
    // of the reconstructed key on entry, restored when descending to a
    // sibling after a deeper subtree finished.
    stack: Vec<(hash_map::Values<'a, char, Edge<V>>, usize)>,
    key: String,
}

impl<'a, V> Iter<'a, V> {
    pub(crate) fn new(root: &'a Node<V>) -> Self {
        Self {
            stack: vec![(root.children.values(), 0)],
            key: String::new(),
        }
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (String, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (edges, base) = self.stack.last_mut()?;
            let base = *base;
            let Some(edge) = edges.next() else {
                self.stack.pop();
                continue;
            };

            self.key.truncate(base);
            self.key.push_str(&edge.label);
            self.stack.push((edge.node.children.values(), self.key.len()));

            if let Some(entry) = &edge.node.entry {
                return Some((self.key.clone(), &entry.value));
            }
        }
    }
}
