//! Introspection counters for the tree's physical structure.
//!
//! Mostly useful for tests and debugging: the counts pin down when edge
//! splits create bridge nodes and when removals merge them away again.

/// A snapshot of the tree's shape.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TreeStats {
    /// Stored values (terminal nodes with an entry).
    pub num_values: usize,
    /// All nodes, root included.
    pub num_nodes: usize,
    /// Edges, i.e. `num_nodes - 1`.
    pub num_edges: usize,
    /// Edges on the longest root-to-node path.
    pub max_depth: usize,
    /// Total bytes across all edge labels.
    pub label_bytes: usize,
}
