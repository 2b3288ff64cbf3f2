use alloc::vec::Vec;

use crate::id::{EdgeId, Vertex};
use crate::int::Int;

/// A directed arc of the residual network.
///
/// Every edge added by the caller is stored together with a residual twin pointing the other way,
/// with zero capacity and the negated cost. Pushing flow over one of them pulls the same amount
/// back over the other, so `flow + twin.flow == 0` at all times.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edge<C> {
    pub from: Vertex,
    pub to: Vertex,
    pub flow: C,
    pub capacity: C,
    pub cost: C,
    /// Caller supplied identifier, shared with the twin.
    pub number: usize,
    pub twin: EdgeId,
    /// `true` for the twin created alongside a caller supplied edge.
    pub residual: bool,
}

impl<C: Int> Edge<C> {
    /// Remaining capacity in the residual network.
    pub fn residual_capacity(&self) -> C {
        self.capacity - self.flow
    }

    pub fn has_residual(&self) -> bool {
        self.flow < self.capacity
    }
}

#[derive(Clone, Debug, Default)]
pub struct EdgeStore<C> {
    edges: Vec<Edge<C>>,
}

impl<C: Int> EdgeStore<C> {
    pub fn new() -> Self {
        Self { edges: Vec::new() }
    }

    /// Appends a forward edge followed by its residual twin and returns both ids.
    pub(crate) fn push_pair(
        &mut self,
        from: Vertex,
        to: Vertex,
        capacity: C,
        cost: C,
        number: usize,
    ) -> (EdgeId, EdgeId) {
        let forward = EdgeId(self.edges.len());
        let twin = EdgeId(forward.0 + 1);
        // twins sit at adjacent slots, `id ^ 1` addresses the partner
        debug_assert_eq!(forward.0 ^ 1, twin.0);

        self.edges.push(Edge {
            from,
            to,
            flow: C::zero(),
            capacity,
            cost,
            number,
            twin,
            residual: false,
        });
        self.edges.push(Edge {
            from: to,
            to: from,
            flow: C::zero(),
            capacity: C::zero(),
            cost: -cost,
            number,
            twin: forward,
            residual: true,
        });

        (forward, twin)
    }

    /// Adds `delta` units of flow on `id` and removes them from its twin.
    pub(crate) fn push_flow(&mut self, id: EdgeId, delta: C) {
        let twin = self.edges[id.0].twin;
        debug_assert_eq!(self.edges[twin.0].twin, id);

        self.edges[id.0].flow += delta;
        self.edges[twin.0].flow -= delta;
    }

    pub fn get(&self, id: EdgeId) -> &Edge<C> {
        &self.edges[id.0]
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (EdgeId, &Edge<C>)> + '_ {
        self.edges
            .iter()
            .enumerate()
            .map(|(idx, edge)| (EdgeId(idx), edge))
    }

    /// Caller supplied edges only, skipping the residual twins.
    pub fn forward(&self) -> impl Iterator<Item = (EdgeId, &Edge<C>)> + '_ {
        self.iter().filter(|(_, edge)| !edge.residual)
    }
}
