use alloc::vec;
use alloc::vec::Vec;

use crate::algo::tree::ShortestPathTree;
use crate::edge::Edge;
use crate::id::Vertex;
use crate::int::Int;
use crate::network::Network;

/// Vertex potentials for Johnson reweighting. `None` marks a vertex the source cannot reach.
///
/// While every residual edge between reachable vertices has a non-negative reduced cost,
/// Dijkstra can be run on a network that contains negative costs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Potentials<C> {
    values: Vec<Option<C>>,
}

impl<C: Int> Potentials<C> {
    pub fn get(&self, vertex: Vertex) -> Option<C> {
        self.values[vertex]
    }

    pub fn is_reachable(&self, vertex: Vertex) -> bool {
        self.values[vertex].is_some()
    }

    /// `cost + potential(from) - potential(to)`, or `None` if either end is unreached.
    pub fn reduced_cost(&self, edge: &Edge<C>) -> Option<C> {
        let from = self.values[edge.from]?;
        let to = self.values[edge.to]?;
        Some(edge.cost + from - to)
    }

    /// Adds the distances of a shortest path phase; unreached vertices become infinite.
    pub(crate) fn advance(&mut self, distance: &[Option<C>]) {
        for (value, dist) in self.values.iter_mut().zip(distance) {
            *value = match (*value, *dist) {
                (Some(potential), Some(dist)) => Some(potential + dist),
                _ => None,
            };
        }
    }

    pub fn as_slice(&self) -> &[Option<C>] {
        &self.values
    }
}

/// Bellman-Ford relaxation from `source` over all edges with residual capacity.
///
/// The resulting potentials are shortest path distances, which makes every reduced cost
/// non-negative. The predecessor tree of the last relaxation is returned along with them and is
/// good enough for the first augmentation.
pub fn initial_potentials<C: Int>(
    network: &Network<C>,
    source: Vertex,
) -> (Potentials<C>, ShortestPathTree) {
    let vertex_count = network.vertex_count();
    let mut values = vec![None; vertex_count];
    let mut tree = ShortestPathTree::new(vertex_count);
    values[source] = Some(C::zero());

    for round in 0..vertex_count {
        let mut relaxed = false;
        for (id, edge) in network.edges().iter() {
            if !edge.has_residual() {
                continue;
            }
            let Some(from) = values[edge.from] else {
                continue;
            };
            let candidate = from + edge.cost;
            if values[edge.to].map_or(true, |to| candidate < to) {
                values[edge.to] = Some(candidate);
                tree.set_parent(edge.to, id);
                relaxed = true;
            }
        }

        if !relaxed {
            log::trace!("potentials settled after {} rounds", round + 1);
            return (Potentials { values }, tree);
        }
    }

    log::warn!("edges still relax after {vertex_count} rounds, a negative cycle is reachable from {source}");
    (Potentials { values }, tree)
}
