use alloc::vec;
use alloc::vec::Vec;

use crate::edge::EdgeStore;
use crate::id::{EdgeId, Vertex};
use crate::int::Int;

/// Predecessor edge per vertex, as left behind by a shortest path pass.
///
/// The source and unreached vertices have no predecessor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShortestPathTree {
    parent: Vec<Option<EdgeId>>,
}

impl ShortestPathTree {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            parent: vec![None; vertex_count],
        }
    }

    pub fn parent(&self, vertex: Vertex) -> Option<EdgeId> {
        self.parent[vertex]
    }

    pub(crate) fn set_parent(&mut self, vertex: Vertex, edge: EdgeId) {
        self.parent[vertex] = Some(edge);
    }

    /// Edges of the tree path from `sink` back to `source`, sink side first.
    ///
    /// Returns `None` if the walk does not arrive at `source` within `vertex_count` steps.
    pub fn path_to<C: Int>(
        &self,
        edges: &EdgeStore<C>,
        source: Vertex,
        sink: Vertex,
    ) -> Option<Vec<EdgeId>> {
        let mut path = Vec::new();
        let mut current = sink;
        while current != source {
            if path.len() == self.parent.len() {
                return None;
            }
            let id = self.parent[current]?;
            path.push(id);
            current = edges.get(id).from;
        }
        Some(path)
    }
}
