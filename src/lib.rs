//! Minimum cost flow by successive shortest paths, with decomposition of the result into paths.
//!
//! A [`Network`] holds directed edges with integral capacities and (possibly negative) costs.
//! [`Network::find_min_cost_flow`] routes flow one unit per phase: a Bellman-Ford pass seeds
//! vertex potentials, after which every phase is a Dijkstra run over reduced costs.
//! [`Network::decompose_flow`] then splits the flow into unit source-to-sink paths.
//!
//! [`edge_disjoint_paths`] builds on top of that to route the cheapest set of link-disjoint
//! paths through an undirected network.
//!
//! ```
//! use unitflow::Network;
//!
//! let mut network = Network::<i64>::new(4);
//! network.add_edge(0, 1, 1, 1, 0);
//! network.add_edge(1, 3, 1, 1, 1);
//! network.add_edge(0, 2, 1, 5, 2);
//! network.add_edge(2, 3, 1, 1, 3);
//!
//! let outcome = network.find_min_cost_flow(0, 3, 2);
//! assert_eq!(outcome.pair(), (2, 8));
//! assert_eq!(network.decompose_flow().len(), 2);
//! ```

#![no_std]
#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications,
    rust_2018_idioms
)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod adjacency;
pub mod algo;
pub mod edge;
pub mod error;
pub mod id;
pub mod int;
pub mod network;
pub mod routing;

pub use algo::decompose::FlowPath;
pub use algo::mcmf::{FlowOutcome, FlowState, MinCostFlow};
pub use edge::Edge;
pub use error::Error;
pub use id::{EdgeId, Vertex};
pub use int::Int;
pub use network::Network;
pub use routing::{edge_disjoint_paths, DisjointPaths, Link};
