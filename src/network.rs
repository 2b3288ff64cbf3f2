use alloc::vec;
use alloc::vec::Vec;

use crate::adjacency::AdjacencyIndex;
use crate::algo::decompose::{decompose, FlowPath};
use crate::algo::mcmf::primal_dual::PrimalDual;
use crate::algo::mcmf::{FlowOutcome, MinCostFlow};
use crate::edge::{Edge, EdgeStore};
use crate::error::Error;
use crate::id::{EdgeId, Vertex};
use crate::int::Int;

/// A capacitated, costed directed network together with its current flow.
///
/// The network owns every piece of solver state that outlives a single phase: the edge store
/// (flows included) and the adjacency lists. Vertices are `0..vertex_count`.
#[derive(Clone, Debug)]
pub struct Network<C> {
    edges: EdgeStore<C>,
    adjacency: AdjacencyIndex,
    terminals: Option<(Vertex, Vertex)>,
}

impl<C: Int> Network<C> {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            edges: EdgeStore::new(),
            adjacency: AdjacencyIndex::new(vertex_count),
            terminals: None,
        }
    }

    /// Adds the arc `from -> to` and its residual twin, returning the id of the arc.
    ///
    /// Vertex ids must be below [`Network::vertex_count`] and `capacity` must not be negative.
    /// Negative costs are fine as long as they do not close a negative cycle.
    pub fn add_edge(
        &mut self,
        from: Vertex,
        to: Vertex,
        capacity: C,
        cost: C,
        number: usize,
    ) -> EdgeId {
        debug_assert!(capacity >= C::zero(), "negative capacity");

        let (forward, twin) = self.edges.push_pair(from, to, capacity, cost, number);
        self.adjacency.push(from, forward);
        self.adjacency.push(to, twin);
        forward
    }

    /// Like [`Network::add_edge`], but rejects invalid input instead of panicking.
    pub fn try_add_edge(
        &mut self,
        from: Vertex,
        to: Vertex,
        capacity: C,
        cost: C,
        number: usize,
    ) -> Result<EdgeId, Error> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        if capacity < C::zero() {
            return Err(Error::NegativeCapacity);
        }
        Ok(self.add_edge(from, to, capacity, cost, number))
    }

    pub(crate) fn check_vertex(&self, vertex: Vertex) -> Result<(), Error> {
        if vertex < self.vertex_count() {
            Ok(())
        } else {
            Err(Error::VertexOutOfRange {
                vertex,
                vertex_count: self.vertex_count(),
            })
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.vertex_count()
    }

    /// Number of stored edges, residual twins included.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edge(&self, id: EdgeId) -> &Edge<C> {
        self.edges.get(id)
    }

    pub fn edges(&self) -> &EdgeStore<C> {
        &self.edges
    }

    pub fn outgoing(&self, vertex: Vertex) -> &[EdgeId] {
        self.adjacency.outgoing(vertex)
    }

    pub(crate) fn push_flow(&mut self, id: EdgeId, delta: C) {
        self.edges.push_flow(id, delta);
    }

    /// Sends up to `amount` units from `source` to `sink` at minimum cost, one unit per phase.
    ///
    /// The flow is added on top of whatever flow the network already carries. The outcome reports
    /// how much was delivered; less than `amount` means the sink became unreachable.
    pub fn find_min_cost_flow(&mut self, source: Vertex, sink: Vertex, amount: C) -> FlowOutcome<C> {
        self.terminals = Some((source, sink));
        match PrimalDual::<C>::default().min_cost_flow(self, source, sink, amount) {
            Ok(outcome) => outcome,
            Err(never) => match never {},
        }
    }

    /// Decomposes the current flow between the terminals of the last
    /// [`Network::find_min_cost_flow`] call into unit paths.
    ///
    /// Extracted paths are removed from the network, so a second call returns nothing.
    pub fn decompose_flow(&mut self) -> Vec<FlowPath> {
        match self.terminals {
            Some((source, sink)) => self.decompose_flow_between(source, sink),
            None => Vec::new(),
        }
    }

    pub fn decompose_flow_between(&mut self, source: Vertex, sink: Vertex) -> Vec<FlowPath> {
        decompose(self, source, sink)
    }

    /// Verifies antisymmetry, capacity bounds and conservation at all vertices except the
    /// terminals.
    pub fn check_flow(&self, source: Vertex, sink: Vertex) -> Result<(), Error> {
        for (id, edge) in self.edges.iter() {
            if edge.flow + self.edges.get(edge.twin).flow != C::zero() {
                return Err(Error::FlowNotAntisymmetric { edge: id.index() });
            }
        }

        for (id, edge) in self.edges.iter() {
            let below = !edge.residual && edge.flow < C::zero();
            if below || edge.flow > edge.capacity {
                return Err(Error::CapacityExceeded { edge: id.index() });
            }
        }

        // twins carry the negated flow of incoming edges, so summing by tail gives the net outflow
        let mut excess = vec![C::zero(); self.vertex_count()];
        for (_, edge) in self.edges.iter() {
            excess[edge.from] += edge.flow;
        }
        match excess
            .into_iter()
            .enumerate()
            .find(|&(vertex, net)| vertex != source && vertex != sink && net != C::zero())
        {
            Some((vertex, _)) => Err(Error::FlowNotConserved { vertex }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::mcmf::FlowState;

    fn diamond() -> Network<i64> {
        let mut network = Network::new(4);
        network.add_edge(0, 1, 1, 1, 0);
        network.add_edge(1, 3, 1, 1, 1);
        network.add_edge(0, 2, 1, 5, 2);
        network.add_edge(2, 3, 1, 1, 3);
        network
    }

    #[test]
    fn add_edge_registers_both_directions() {
        let mut network = Network::<i32>::new(3);
        let id = network.add_edge(0, 2, 4, -3, 9);

        assert_eq!(network.edge_count(), 2);
        assert_eq!(network.outgoing(0), &[id]);
        assert_eq!(network.outgoing(2), &[network.edge(id).twin]);
        assert!(network.outgoing(1).is_empty());
    }

    #[test]
    fn try_add_edge_validates() {
        let mut network = Network::<i32>::new(2);
        assert_eq!(
            network.try_add_edge(0, 2, 1, 0, 0),
            Err(Error::VertexOutOfRange {
                vertex: 2,
                vertex_count: 2
            })
        );
        assert_eq!(
            network.try_add_edge(0, 1, -1, 0, 0),
            Err(Error::NegativeCapacity)
        );
        assert!(network.try_add_edge(1, 0, 0, -5, 0).is_ok());
        assert_eq!(network.edge_count(), 2);
    }

    #[test]
    fn diamond_two_units() {
        let mut network = diamond();
        let outcome = network.find_min_cost_flow(0, 3, 2);

        assert_eq!(outcome.pair(), (2, 8));
        assert_eq!(outcome.state, FlowState::TargetReached);
        assert_eq!(network.check_flow(0, 3), Ok(()));

        let mut numbers: Vec<_> = network
            .decompose_flow()
            .into_iter()
            .map(|path| path.numbers)
            .collect();
        numbers.sort();
        assert_eq!(numbers, [vec![0, 1], vec![2, 3]]);
    }

    #[test]
    fn diamond_saturates() {
        let mut network = diamond();
        let outcome = network.find_min_cost_flow(0, 3, 3);

        assert_eq!(outcome.pair(), (2, 8));
        assert_eq!(outcome.state, FlowState::Saturated);
        assert_eq!(network.decompose_flow().len(), 2);
    }

    #[test]
    fn decompose_without_flow_is_empty() {
        let mut network = diamond();
        assert!(network.decompose_flow().is_empty());
        assert!(network.decompose_flow_between(0, 3).is_empty());
    }

    #[test]
    fn check_flow_reports_conservation() {
        let mut network = diamond();
        network.push_flow(EdgeId(0), 1);

        assert_eq!(
            network.check_flow(0, 3),
            Err(Error::FlowNotConserved { vertex: 1 })
        );
        assert_eq!(network.check_flow(0, 1), Ok(()));
    }

    #[test]
    fn check_flow_reports_capacity() {
        let mut network = diamond();
        // pushing over the residual twin drives the forward edge below zero
        network.push_flow(EdgeId(1), 1);

        assert_eq!(
            network.check_flow(0, 1),
            Err(Error::CapacityExceeded { edge: 0 })
        );
    }
}
