//! Error types for path queries and graph construction.

use std::fmt;

use waygrid_core::Point;

use crate::node::NodeId;

/// Why a path query produced no path.
#[derive(Debug, Clone, PartialEq)]
pub enum PathError {
    /// A grid endpoint lies outside the grid.
    OutOfBounds(Point),
    /// A node handle does not belong to the graph.
    UnknownNode(NodeId),
    /// A nearest-node lookup found no node (the graph is empty).
    NoNearestNode,
    /// The search exhausted every reachable node without meeting the goal.
    Unreachable,
    /// The search was cancelled through its [`Context`](waygrid_core::Context).
    Cancelled,
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds(p) => write!(f, "position {p} is outside the grid"),
            Self::UnknownNode(id) => write!(f, "node {id} does not belong to this graph"),
            Self::NoNearestNode => f.write_str("no node near the requested position"),
            Self::Unreachable => f.write_str("goal is unreachable from start"),
            Self::Cancelled => f.write_str("search cancelled"),
        }
    }
}

impl std::error::Error for PathError {}

/// Errors that can occur while building a graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A node with the same key is already registered.
    DuplicateKey(String),
    /// A node handle does not belong to the graph.
    UnknownNode(NodeId),
    /// A node cannot be connected to itself.
    SelfLoop(NodeId),
    /// Initial grid values do not match the grid size.
    SizeMismatch { expected: usize, actual: usize },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateKey(key) => write!(f, "node key \u{201c}{key}\u{201d} is already in use"),
            Self::UnknownNode(id) => write!(f, "node {id} does not belong to this graph"),
            Self::SelfLoop(id) => write!(f, "node {id} cannot be connected to itself"),
            Self::SizeMismatch { expected, actual } => {
                write!(f, "expected {expected} grid values, got {actual}")
            }
        }
    }
}

impl std::error::Error for GraphError {}
