#[cfg(feature = "lemon-cpp")]
pub mod network_simplex;

pub mod primal_dual;

use core::fmt::Debug;

use serde::Serialize;

use crate::id::Vertex;
use crate::network::Network;

/// How a min-cost flow run ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum FlowState {
    /// The sink became unreachable before the requested amount was delivered.
    Saturated,
    /// The requested amount was delivered.
    TargetReached,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FlowOutcome<C> {
    /// Units of flow delivered from source to sink.
    pub flow: C,
    /// Sum of the costs of all augmenting paths.
    pub cost: C,
    pub state: FlowState,
}

impl<C: Copy> FlowOutcome<C> {
    /// `(flow_delivered, total_cost)`
    pub fn pair(&self) -> (C, C) {
        (self.flow, self.cost)
    }

    pub fn is_complete(&self) -> bool {
        self.state == FlowState::TargetReached
    }
}

impl<C> From<FlowOutcome<C>> for (C, C) {
    fn from(outcome: FlowOutcome<C>) -> Self {
        (outcome.flow, outcome.cost)
    }
}

/// The minimum cost flow algorithm.
pub trait MinCostFlow {
    type Int;
    type Error: Debug;

    /// Route up to `amount` units from `source` to `sink` through `network` at minimum cost and
    /// report how much was delivered and at which cost.
    fn min_cost_flow(
        &mut self,
        network: &mut Network<Self::Int>,
        source: Vertex,
        sink: Vertex,
        amount: Self::Int,
    ) -> Result<FlowOutcome<Self::Int>, Self::Error>;
}
