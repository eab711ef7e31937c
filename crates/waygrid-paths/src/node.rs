use std::fmt;

use waygrid_core::Vec2;

/// Dense handle of a node inside the graph that created it.
///
/// Handles are only meaningful for the graph that issued them, and a
/// [`GridGraph::resize`](crate::GridGraph::resize) invalidates all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in its graph's storage.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A way point of a [`NodeGraph`](crate::NodeGraph).
///
/// Nodes are built detached and handed to [`NodeGraph::add`](crate::NodeGraph::add),
/// which takes ownership. Connections are made through the graph.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphNode {
    key: String,
    position: Vec2,
    value: i32,
    pub(crate) connections: Vec<NodeId>,
}

impl GraphNode {
    /// Create a node at `(x, y)` keyed by its position (`"x_y"`).
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            key: format!("{x}_{y}"),
            position: Vec2::new(x, y),
            value: 0,
            connections: Vec::new(),
        }
    }

    /// Create a node at `(x, y)` with an explicit unique key.
    pub fn with_key(x: f64, y: f64, key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::new(x, y)
        }
    }

    /// Attach a node-local value for use by a custom [`NodeCost`](crate::NodeCost).
    pub fn with_value(mut self, value: i32) -> Self {
        self.value = value;
        self
    }

    /// Unique key of the node within its graph.
    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Set the node-local value.
    #[inline]
    pub fn set_value(&mut self, value: i32) {
        self.value = value;
    }

    /// Outgoing connections, in the order they were made.
    #[inline]
    pub fn connections(&self) -> &[NodeId] {
        &self.connections
    }
}
