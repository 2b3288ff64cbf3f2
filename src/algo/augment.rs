use crate::algo::tree::ShortestPathTree;
use crate::id::Vertex;
use crate::int::Int;
use crate::network::Network;

/// Pushes a single unit of flow along the tree path from `source` to `sink`.
///
/// Returns the cost of the path, or `None` without touching the network if `sink` is not
/// connected to `source` in `tree`.
pub fn augment_unit<C: Int>(
    network: &mut Network<C>,
    tree: &ShortestPathTree,
    source: Vertex,
    sink: Vertex,
) -> Option<C> {
    let path = tree.path_to(network.edges(), source, sink)?;

    let mut cost = C::zero();
    for id in path {
        debug_assert!(network.edge(id).has_residual());
        network.push_flow(id, C::one());
        cost += network.edge(id).cost;
    }
    Some(cost)
}
