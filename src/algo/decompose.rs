use alloc::vec;
use alloc::vec::Vec;

use serde::Serialize;

use crate::id::{EdgeId, Vertex};
use crate::int::Int;
use crate::network::Network;

/// One unit of flow from source to sink.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FlowPath {
    /// Traversed edges, source side first.
    pub edges: Vec<EdgeId>,
    /// Caller supplied numbers of `edges`.
    pub numbers: Vec<usize>,
    /// Visited vertices, starting at the source and ending at the sink.
    pub vertices: Vec<Vertex>,
}

impl FlowPath {
    fn new<C: Int>(network: &Network<C>, source: Vertex, edges: Vec<EdgeId>) -> Self {
        let numbers = edges.iter().map(|&id| network.edge(id).number).collect();
        let vertices = core::iter::once(source)
            .chain(edges.iter().map(|&id| network.edge(id).to))
            .collect();
        Self {
            edges,
            numbers,
            vertices,
        }
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Peels unit paths off the positive flow of `network` until `sink` can no longer be reached from
/// `source`.
///
/// Each extracted path has its unit of flow removed from the network. Paths come out in the
/// order the depth-first walks find them.
pub fn decompose<C: Int>(network: &mut Network<C>, source: Vertex, sink: Vertex) -> Vec<FlowPath> {
    let mut paths = Vec::new();
    if source == sink {
        return paths;
    }

    let mut visited = vec![false; network.vertex_count()];
    while let Some(edges) = positive_flow_path(network, source, sink, &mut visited) {
        for &id in &edges {
            network.push_flow(id, -C::one());
        }
        paths.push(FlowPath::new(network, source, edges));
    }

    log::debug!("decomposed flow {source} -> {sink} into {} paths", paths.len());
    paths
}

/// Iterative depth-first walk over edges carrying positive flow. Each vertex is entered at most
/// once per walk.
fn positive_flow_path<C: Int>(
    network: &Network<C>,
    source: Vertex,
    sink: Vertex,
    visited: &mut [bool],
) -> Option<Vec<EdgeId>> {
    visited.fill(false);
    visited[source] = true;

    // (vertex, position of the next outgoing edge to try)
    let mut stack = vec![(source, 0)];
    let mut path = Vec::new();

    while let Some(&(vertex, next)) = stack.last() {
        let Some(&id) = network.outgoing(vertex).get(next) else {
            stack.pop();
            path.pop();
            continue;
        };
        if let Some(top) = stack.last_mut() {
            top.1 = next + 1;
        }

        let edge = network.edge(id);
        if edge.flow <= C::zero() || visited[edge.to] {
            continue;
        }
        visited[edge.to] = true;
        path.push(id);
        if edge.to == sink {
            return Some(path);
        }
        stack.push((edge.to, 0));
    }

    None
}
