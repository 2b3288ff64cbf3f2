use core::convert::Infallible;
use core::marker::PhantomData;

use crate::algo::augment::augment_unit;
use crate::algo::dijkstra::shortest_path_phase;
use crate::algo::mcmf::{FlowOutcome, FlowState, MinCostFlow};
use crate::algo::potential::initial_potentials;
use crate::id::Vertex;
use crate::int::Int;
use crate::network::Network;

/// Successive shortest paths with Johnson potentials.
///
/// Every phase augments exactly one unit, which matches unit capacity networks. On networks with
/// large capacities the number of phases grows with the flow value rather than with the number
/// of distinct paths.
#[derive(Debug, Clone, Copy)]
pub struct PrimalDual<C>(PhantomData<C>);

impl<C> Default for PrimalDual<C> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

impl<C: Int> MinCostFlow for PrimalDual<C> {
    type Int = C;
    type Error = Infallible;

    fn min_cost_flow(
        &mut self,
        network: &mut Network<C>,
        source: Vertex,
        sink: Vertex,
        amount: C,
    ) -> Result<FlowOutcome<C>, Self::Error> {
        Ok(successive_shortest_paths(network, source, sink, amount))
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Phase {
    Running,
    Saturated,
    TargetReached,
}

pub fn successive_shortest_paths<C: Int>(
    network: &mut Network<C>,
    source: Vertex,
    sink: Vertex,
    amount: C,
) -> FlowOutcome<C> {
    debug_assert_ne!(source, sink, "source and sink must differ");

    let (mut potentials, mut tree) = initial_potentials(network, source);
    let mut flow = C::zero();
    let mut cost = C::zero();
    let mut phase = Phase::Running;

    while phase == Phase::Running {
        if flow >= amount {
            phase = Phase::TargetReached;
        } else if !potentials.is_reachable(sink) {
            phase = Phase::Saturated;
        } else if let Some(path_cost) = augment_unit(network, &tree, source, sink) {
            cost += path_cost;
            flow += C::one();
            log::trace!("augmented unit {flow} at cost {path_cost}");

            if flow < amount {
                tree = shortest_path_phase(network, source, &mut potentials);
            }
        } else {
            // finite sink potential always comes with a tree path
            debug_assert!(false, "sink {sink} has a potential but no tree path");
            phase = Phase::Saturated;
        }
    }

    let state = match phase {
        Phase::TargetReached => FlowState::TargetReached,
        _ => FlowState::Saturated,
    };
    log::debug!("min cost flow {source} -> {sink}: flow = {flow}, cost = {cost}, {state:?}");

    FlowOutcome { flow, cost, state }
}
