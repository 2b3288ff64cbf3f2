use alloc::vec::Vec;

use num_traits::{FromPrimitive, ToPrimitive};
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::id::Vertex;
use crate::int::Int;
use crate::network::Network;

/// An undirected connection between two vertices.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Link<C> {
    pub from: Vertex,
    pub to: Vertex,
    pub cost: C,
}

/// Cheapest set of link-disjoint paths.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DisjointPaths<C> {
    pub total_cost: C,
    /// Each path as the sequence of link indices it uses, source side first.
    pub paths: Vec<Vec<usize>>,
}

impl<C: Int> DisjointPaths<C> {
    /// Total cost divided by the number of paths, `None` without paths.
    pub fn average_cost(&self) -> Option<f64> {
        if self.paths.is_empty() {
            return None;
        }
        Some(self.total_cost.to_f64()? / self.paths.len().to_f64()?)
    }
}

/// Routes `count` paths from `source` to `sink` through the undirected `links` such that no link
/// is used twice and the summed link cost is minimal.
///
/// Every link becomes a pair of opposite unit capacity arcs that share the link's index as their
/// number. Links must have non-negative costs; with zero-cost links two paths may cross the same
/// link in opposite directions.
pub fn edge_disjoint_paths<C: Int>(
    vertex_count: usize,
    links: &[Link<C>],
    source: Vertex,
    sink: Vertex,
    count: usize,
) -> Result<DisjointPaths<C>, Error> {
    let mut network = Network::new(vertex_count);
    network.check_vertex(source)?;
    network.check_vertex(sink)?;
    if source == sink {
        return Err(Error::SourceIsSink);
    }

    for (number, link) in links.iter().enumerate() {
        if link.cost < C::zero() {
            return Err(Error::NegativeLinkCost { link: number });
        }
        network.try_add_edge(link.from, link.to, C::one(), link.cost, number)?;
        network.try_add_edge(link.to, link.from, C::one(), link.cost, number)?;
    }

    let amount = <C as FromPrimitive>::from_usize(count).ok_or(Error::AmountOverflow)?;
    let outcome = network.find_min_cost_flow(source, sink, amount);
    if !outcome.is_complete() {
        return Err(Error::Infeasible {
            requested: count,
            delivered: outcome.flow.to_usize().unwrap_or_default(),
        });
    }
    network.check_flow(source, sink)?;

    let paths: Vec<_> = network
        .decompose_flow()
        .into_iter()
        .map(|path| path.numbers)
        .collect();
    debug_assert_eq!(paths.len(), count);

    log::info!(
        "routed {} disjoint paths over {} links, total cost {}",
        paths.len(),
        links.len(),
        outcome.cost
    );

    Ok(DisjointPaths {
        total_cost: outcome.cost,
        paths,
    })
}
