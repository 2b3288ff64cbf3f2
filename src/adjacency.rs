use alloc::vec;
use alloc::vec::Vec;

use crate::id::{EdgeId, Vertex};

/// Outgoing edge ids per vertex, in insertion order.
#[derive(Clone, Debug, Default)]
pub struct AdjacencyIndex {
    outgoing: Vec<Vec<EdgeId>>,
}

impl AdjacencyIndex {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            outgoing: vec![Vec::new(); vertex_count],
        }
    }

    pub(crate) fn push(&mut self, from: Vertex, id: EdgeId) {
        self.outgoing[from].push(id);
    }

    pub fn outgoing(&self, vertex: Vertex) -> &[EdgeId] {
        &self.outgoing[vertex]
    }

    pub fn vertex_count(&self) -> usize {
        self.outgoing.len()
    }
}
