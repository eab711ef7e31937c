use crate::node::{GraphNode, NodeId};

/// Minimal search interface: a dense set of nodes and their adjacency.
pub trait Pather {
    /// Number of node slots. Every [`NodeId`] handed out is below this.
    fn node_count(&self) -> usize;

    /// Nodes reachable in one step from `node`.
    fn neighbors(&self, node: NodeId) -> &[NodeId];
}

/// Pather whose edges carry a cost.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` into adjacent `to`, or `None` if that
    /// step is not traversable. A zero cost is a valid, free step.
    fn edge_cost(&self, from: NodeId, to: NodeId) -> Option<f64>;
}

/// Full A* pather with a heuristic.
pub trait AstarPather: WeightedPather {
    /// Estimate of the remaining cost from `from` to `goal`.
    ///
    /// Shortest paths are only guaranteed if this never overestimates.
    fn estimate(&self, from: NodeId, goal: NodeId) -> f64;
}

/// Cost model plugged into a [`NodeGraph`](crate::NodeGraph).
///
/// The defaults give every edge a cost of 1 and estimate by straight-line
/// distance, which suits way-point graphs with roughly even spacing.
pub trait NodeCost {
    /// Cost of stepping from `from` into `to`. `None`, a negative cost or
    /// NaN blocks the edge.
    fn edge_cost(&self, from: &GraphNode, to: &GraphNode) -> Option<f64> {
        let _ = (from, to);
        Some(1.0)
    }

    /// Estimated cost from `node` to `goal`.
    fn heuristic(&self, node: &GraphNode, goal: &GraphNode) -> f64 {
        node.position().distance(goal.position())
    }
}

/// The default [`NodeCost`]: unit edges, Euclidean heuristic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UniformCost;

impl NodeCost for UniformCost {}

/// Edge cost by step length, for graphs whose way points are unevenly spaced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DistanceCost;

impl NodeCost for DistanceCost {
    fn edge_cost(&self, from: &GraphNode, to: &GraphNode) -> Option<f64> {
        Some(from.position().distance(to.position()))
    }
}

/// Map a raw cost where negative (or NaN) means "blocked" onto an edge cost.
#[inline]
pub fn traversable(raw: f64) -> Option<f64> {
    if raw >= 0.0 { Some(raw) } else { None }
}
