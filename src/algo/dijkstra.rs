use alloc::collections::BTreeSet;
use alloc::vec;

use crate::algo::potential::Potentials;
use crate::algo::tree::ShortestPathTree;
use crate::id::Vertex;
use crate::int::Int;
use crate::network::Network;

/// One Dijkstra phase over reduced costs, followed by the Johnson update of `potentials`.
///
/// Only residual edges between vertices with finite potentials are scanned. Reduced costs of such
/// edges are non-negative as long as the potentials were valid for the previous residual network,
/// and adding the new distances keeps them valid for the next one. Vertices the source no longer
/// reaches end up with an infinite potential.
pub fn shortest_path_phase<C: Int>(
    network: &Network<C>,
    source: Vertex,
    potentials: &mut Potentials<C>,
) -> ShortestPathTree {
    let vertex_count = network.vertex_count();
    let mut distance = vec![None; vertex_count];
    let mut tree = ShortestPathTree::new(vertex_count);

    // ordered set instead of a heap so that improved entries can be removed
    let mut queue = BTreeSet::new();
    distance[source] = Some(C::zero());
    queue.insert((C::zero(), source));

    while let Some((dist, vertex)) = queue.pop_first() {
        for &id in network.outgoing(vertex) {
            let edge = network.edge(id);
            if !edge.has_residual() {
                continue;
            }
            let Some(reduced) = potentials.reduced_cost(edge) else {
                continue;
            };
            debug_assert!(reduced >= C::zero(), "negative reduced cost on {id}");

            let candidate = dist + reduced;
            match distance[edge.to] {
                Some(known) if known <= candidate => {}
                known => {
                    if let Some(known) = known {
                        queue.remove(&(known, edge.to));
                    }
                    distance[edge.to] = Some(candidate);
                    queue.insert((candidate, edge.to));
                    tree.set_parent(edge.to, id);
                }
            }
        }
    }

    potentials.advance(&distance);
    tree
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::potential::initial_potentials;

    #[test]
    fn matches_initial_distances() {
        let mut network = Network::<i64>::new(5);
        network.add_edge(0, 1, 1, 3, 0);
        network.add_edge(0, 2, 1, 1, 1);
        network.add_edge(2, 1, 1, 1, 2);
        network.add_edge(1, 3, 1, -2, 3);
        network.add_edge(2, 3, 1, 4, 4);

        let (mut potentials, _) = initial_potentials(&network, 0);
        let before = potentials.clone();
        let tree = shortest_path_phase(&network, 0, &mut potentials);

        // nothing changed in between, so all reduced distances along shortest paths are zero
        assert_eq!(potentials, before);
        assert_eq!(potentials.get(3), Some(0));
        assert_eq!(potentials.get(4), None);
        assert_eq!(tree.parent(4), None);
        let path = tree.path_to(network.edges(), 0, 3).unwrap();
        let numbers: vec::Vec<_> = path.iter().map(|&id| network.edge(id).number).collect();
        assert_eq!(numbers, [3, 2, 1]);
    }

    #[test]
    fn follows_residual_twins_after_augmentation() {
        let mut network = Network::<i64>::new(4);
        let a = network.add_edge(0, 1, 1, 1, 0);
        let b = network.add_edge(1, 3, 1, 1, 1);
        network.add_edge(0, 2, 1, 1, 2);
        network.add_edge(2, 1, 1, 1, 3);
        network.add_edge(1, 3, 1, 5, 4);

        let (mut potentials, _) = initial_potentials(&network, 0);
        network.push_flow(a, 1);
        network.push_flow(b, 1);

        let tree = shortest_path_phase(&network, 0, &mut potentials);
        let path = tree.path_to(network.edges(), 0, 3).unwrap();
        let numbers: vec::Vec<_> = path.iter().map(|&id| network.edge(id).number).collect();

        assert_eq!(numbers, [4, 3, 2]);
        // true distance 0 -> 3 in the residual network is 1 + 1 + 5
        assert_eq!(potentials.get(3), Some(7));
        for (_, edge) in network.edges().iter().filter(|(_, e)| e.has_residual()) {
            if let Some(reduced) = potentials.reduced_cost(edge) {
                assert!(reduced >= 0);
            }
        }
    }

    #[test]
    fn unreachable_sink_becomes_infinite() {
        let mut network = Network::<i32>::new(2);
        let e = network.add_edge(0, 1, 1, 2, 0);

        let (mut potentials, _) = initial_potentials(&network, 0);
        network.push_flow(e, 1);
        shortest_path_phase(&network, 0, &mut potentials);

        assert_eq!(potentials.get(0), Some(0));
        assert_eq!(potentials.get(1), None);
    }
}
