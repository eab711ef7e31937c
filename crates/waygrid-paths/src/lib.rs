//! A* pathfinding for games: height grids and free-form way-point graphs.
//!
//! Two graph kinds share one search driver:
//!
//! - [`GridGraph`]: a `width` × `height` field of cell values where negative
//!   cells are walls and non-negative cells are terrain heights. Cells are
//!   wired 4- or 8-way at construction; obstacles are edited in place with
//!   [`GridGraph::set_value`].
//! - [`NodeGraph`]: explicitly connected way points at arbitrary positions,
//!   priced by a pluggable [`NodeCost`] model.
//!
//! Searches return `Option<Path>`: `None` when there is no route, and a
//! (possibly empty) [`Path`] otherwise. The `try_*` variants say why a
//! search failed.
//!
//! # Trait hierarchy
//!
//! | Trait | Provides |
//! |---|---|
//! | [`Pather`] | node count, adjacency |
//! | [`WeightedPather`] : [`Pather`] | edge costs |
//! | [`AstarPather`] : [`WeightedPather`] | heuristic |
//!
//! The frontier is a [`PriorityQueue`], a binary min-heap that can re-score
//! queued entries in place.

mod adjacency;
mod config;
mod distance;
mod error;
mod graph;
mod grid;
mod heap;
mod node;
mod search;
mod simplify;
mod traits;

pub use config::{GridConfig, Strategy};
pub use distance::{Heuristic, chebyshev, euclidean, manhattan};
pub use error::{GraphError, PathError};
pub use graph::NodeGraph;
pub use grid::{GridGraph, GridNode, IMPASSABLE};
pub use heap::PriorityQueue;
pub use node::{GraphNode, NodeId};
pub use search::{Path, SearchStats};
pub use simplify::simplify;
pub use traits::{
    AstarPather, DistanceCost, NodeCost, Pather, UniformCost, WeightedPather, traversable,
};
