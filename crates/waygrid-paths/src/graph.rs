//! A* over free-form way-point graphs.

use std::collections::HashMap;

use waygrid_core::{Context, Vec2};

use crate::error::{GraphError, PathError};
use crate::node::{GraphNode, NodeId};
use crate::search::{self, Path};
use crate::traits::{AstarPather, NodeCost, Pather, UniformCost, WeightedPather, traversable};

/// A graph of arbitrarily placed, explicitly connected nodes.
///
/// Use it when the walkable world is not a uniform grid: way points on a
/// platform level, rooms of a dungeon, stations of a network. Edge costs and
/// the heuristic come from the [`NodeCost`] model `C`.
///
/// ```
/// use waygrid_core::Vec2;
/// use waygrid_paths::{GraphNode, NodeGraph};
///
/// let mut graph = NodeGraph::new();
/// let a = graph.add(GraphNode::new(10.0, 2.0)).unwrap();
/// let b = graph.add(GraphNode::new(100.0, 50.0)).unwrap();
/// let c = graph.add(GraphNode::new(250.0, 25.0)).unwrap();
/// graph.connect(a, b).unwrap();
/// graph.connect(b, c).unwrap();
///
/// let path = graph.find(a, c).unwrap();
/// assert_eq!(path.nodes(), &[a, b, c]);
///
/// let near = graph.find_near(Vec2::new(5.0, 1.0), Vec2::new(120.0, 40.0)).unwrap();
/// assert_eq!(near.nodes(), &[a, b]);
/// ```
#[derive(Debug, Clone)]
pub struct NodeGraph<C = UniformCost> {
    nodes: Vec<GraphNode>,
    keys: HashMap<String, NodeId>,
    cost: C,
    include_start: bool,
}

impl NodeGraph<UniformCost> {
    /// An empty graph with unit edge costs that includes the start node in
    /// returned paths.
    pub fn new() -> Self {
        Self::with_cost(UniformCost)
    }
}

impl<C: NodeCost + Default> Default for NodeGraph<C> {
    fn default() -> Self {
        Self::with_cost(C::default())
    }
}

impl<C: NodeCost> NodeGraph<C> {
    /// An empty graph using `cost` for edge costs and estimates.
    pub fn with_cost(cost: C) -> Self {
        Self {
            nodes: Vec::new(),
            keys: HashMap::new(),
            cost,
            include_start: true,
        }
    }

    /// Builder form of [`set_include_start`](Self::set_include_start).
    pub fn include_start(mut self, include: bool) -> Self {
        self.include_start = include;
        self
    }

    /// Whether returned paths begin with the start node.
    pub fn set_include_start(&mut self, include: bool) {
        self.include_start = include;
    }

    #[inline]
    pub fn includes_start(&self) -> bool {
        self.include_start
    }

    /// The cost model.
    #[inline]
    pub fn cost_model(&self) -> &C {
        &self.cost
    }

    /// Number of registered nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Register a node, taking ownership of it.
    ///
    /// Connections already present on `node` are discarded, since they could
    /// only refer to another graph.
    pub fn add(&mut self, mut node: GraphNode) -> Result<NodeId, GraphError> {
        if self.keys.contains_key(node.key()) {
            return Err(GraphError::DuplicateKey(node.key().to_owned()));
        }
        let id = NodeId(self.nodes.len());
        node.connections.clear();
        self.keys.insert(node.key().to_owned(), id);
        self.nodes.push(node);
        Ok(id)
    }

    /// Register a node at `(x, y)` keyed by its position.
    pub fn add_at(&mut self, x: f64, y: f64) -> Result<NodeId, GraphError> {
        self.add(GraphNode::new(x, y))
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&GraphNode> {
        self.nodes.get(id.index())
    }

    /// Mutable access to a node, e.g. to change its value between searches.
    #[inline]
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut GraphNode> {
        self.nodes.get_mut(id.index())
    }

    /// Look a node up by its key.
    pub fn by_key(&self, key: &str) -> Option<NodeId> {
        self.keys.get(key).copied()
    }

    /// All nodes with their handles, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &GraphNode)> + '_ {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    fn check(&self, id: NodeId) -> Result<(), GraphError> {
        if id.index() < self.nodes.len() {
            Ok(())
        } else {
            Err(GraphError::UnknownNode(id))
        }
    }

    /// Connect `a` and `b` in both directions.
    pub fn connect(&mut self, a: NodeId, b: NodeId) -> Result<(), GraphError> {
        self.check(a)?;
        self.check(b)?;
        if a == b {
            return Err(GraphError::SelfLoop(a));
        }
        self.nodes[a.index()].connections.push(b);
        self.nodes[b.index()].connections.push(a);
        Ok(())
    }

    /// Connect `from` to `to` only.
    pub fn connect_one_way(&mut self, from: NodeId, to: NodeId) -> Result<(), GraphError> {
        self.check(from)?;
        self.check(to)?;
        if from == to {
            return Err(GraphError::SelfLoop(from));
        }
        self.nodes[from.index()].connections.push(to);
        Ok(())
    }

    /// The node closest to `pos`, by linear scan.
    ///
    /// Returns `None` only for an empty graph. Among equally close nodes the
    /// first registered wins.
    pub fn nearest(&self, pos: Vec2) -> Option<NodeId> {
        let mut best: Option<(NodeId, f64)> = None;
        for (id, node) in self.iter() {
            let d = pos.quick_distance(node.position());
            if best.is_none_or(|(_, bd)| d < bd) {
                best = Some((id, d));
            }
        }
        best.map(|(id, _)| id)
    }

    /// Find a path from `start` to `goal`.
    ///
    /// Returns `None` if there is no path or a handle is foreign.
    pub fn find(&self, start: NodeId, goal: NodeId) -> Option<Path> {
        self.try_find(start, goal).ok()
    }

    /// Like [`find`](Self::find), reporting why no path was produced.
    pub fn try_find(&self, start: NodeId, goal: NodeId) -> Result<Path, PathError> {
        self.search(start, goal, None)
    }

    /// Like [`try_find`](Self::try_find), giving up once `ctx` is cancelled.
    pub fn find_cancellable(
        &self,
        start: NodeId,
        goal: NodeId,
        ctx: &Context,
    ) -> Result<Path, PathError> {
        self.search(start, goal, Some(ctx))
    }

    /// Find a path between the nodes nearest to two positions.
    pub fn find_near(&self, from: Vec2, to: Vec2) -> Option<Path> {
        self.try_find_near(from, to).ok()
    }

    /// Like [`find_near`](Self::find_near), reporting why no path was produced.
    pub fn try_find_near(&self, from: Vec2, to: Vec2) -> Result<Path, PathError> {
        let start = self.nearest(from).ok_or(PathError::NoNearestNode)?;
        let goal = self.nearest(to).ok_or(PathError::NoNearestNode)?;
        self.search(start, goal, None)
    }

    /// Positions of the nodes of `path`.
    pub fn positions(&self, path: &Path) -> Vec<Vec2> {
        path.iter()
            .filter_map(|id| self.node(id))
            .map(GraphNode::position)
            .collect()
    }

    fn search(&self, start: NodeId, goal: NodeId, ctx: Option<&Context>) -> Result<Path, PathError> {
        for id in [start, goal] {
            if self.check(id).is_err() {
                return Err(PathError::UnknownNode(id));
            }
        }
        search::astar(self, start, goal, self.include_start, ctx)
    }
}

impl<C: NodeCost> Pather for NodeGraph<C> {
    #[inline]
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    fn neighbors(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node.index()].connections
    }
}

impl<C: NodeCost> WeightedPather for NodeGraph<C> {
    #[inline]
    fn edge_cost(&self, from: NodeId, to: NodeId) -> Option<f64> {
        self.cost
            .edge_cost(&self.nodes[from.index()], &self.nodes[to.index()])
            .and_then(traversable)
    }
}

impl<C: NodeCost> AstarPather for NodeGraph<C> {
    #[inline]
    fn estimate(&self, from: NodeId, goal: NodeId) -> f64 {
        self.cost
            .heuristic(&self.nodes[from.index()], &self.nodes[goal.index()])
    }
}
