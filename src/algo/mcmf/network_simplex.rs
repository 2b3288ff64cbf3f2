use core::convert::Infallible;

use mcmf::{Capacity, Cost, GraphBuilder, Vertex as LemonVertex};

use crate::algo::mcmf::{FlowOutcome, FlowState, MinCostFlow};
use crate::id::Vertex;
use crate::network::Network;

/// LEMON's network simplex through the `mcmf` bindings.
///
/// The remaining capacity of every forward edge is handed to LEMON together with a super source
/// edge of capacity `amount` into `source` and a super sink edge out of `sink`. Only the outcome is
/// reported back; the flow on the network is left as it was.
#[derive(Debug, Clone, Copy, Default)]
pub struct NetworkSimplex;

impl MinCostFlow for NetworkSimplex {
    type Int = i32;
    type Error = Infallible;

    fn min_cost_flow(
        &mut self,
        network: &mut Network<i32>,
        source: Vertex,
        sink: Vertex,
        amount: i32,
    ) -> Result<FlowOutcome<i32>, Self::Error> {
        let mut g = network
            .edges()
            .forward()
            .fold(GraphBuilder::new(), |mut acc, (_, edge)| {
                acc.add_edge(
                    LemonVertex::Node(edge.from),
                    LemonVertex::Node(edge.to),
                    Capacity(edge.residual_capacity()),
                    Cost(edge.cost),
                );
                acc
            });

        let amount = amount.max(0);
        g.add_edge(
            LemonVertex::Source,
            LemonVertex::Node(source),
            Capacity(amount),
            Cost(0),
        );
        g.add_edge(
            LemonVertex::Node(sink),
            LemonVertex::Sink,
            Capacity(amount),
            Cost(0),
        );

        let (cost, paths) = g.mcmf();
        let flow: i32 = paths
            .iter()
            .map(|path| path.flows.first().map_or(0, |f| f.amount as i32))
            .sum();
        let state = if flow >= amount {
            FlowState::TargetReached
        } else {
            FlowState::Saturated
        };
        log::debug!("network simplex {source} -> {sink}: flow = {flow}, cost = {cost}");

        Ok(FlowOutcome { flow, cost, state })
    }
}
