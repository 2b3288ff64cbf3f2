use displaydoc::Display;

use crate::id::Vertex;

#[derive(Clone, Debug, Display, PartialEq, Eq)]
pub enum Error {
    /// vertex {vertex} is out of range for a network of {vertex_count} vertices
    VertexOutOfRange { vertex: Vertex, vertex_count: usize },
    /// edge capacity must not be negative
    NegativeCapacity,
    /// link {link} has a negative cost, which is a negative cycle in an undirected network
    NegativeLinkCost { link: usize },
    /// source and sink must be distinct vertices
    SourceIsSink,
    /// requested amount does not fit into the flow type
    AmountOverflow,
    /// requested {requested} units of flow but the network only carries {delivered}
    Infeasible { requested: usize, delivered: usize },
    /// flow on edge {edge} does not mirror the flow on its twin
    FlowNotAntisymmetric { edge: usize },
    /// flow on edge {edge} is outside of its capacity bounds
    CapacityExceeded { edge: usize },
    /// flow is not conserved at vertex {vertex}
    FlowNotConserved { vertex: Vertex },
}
