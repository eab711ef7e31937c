//! The A* driver shared by [`NodeGraph`](crate::NodeGraph) and
//! [`GridGraph`](crate::GridGraph).

use waygrid_core::Context;

use crate::error::PathError;
use crate::heap::PriorityQueue;
use crate::node::NodeId;
use crate::traits::AstarPather;

/// Counters collected while a search runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Nodes popped from the frontier and closed.
    pub expanded: usize,
    /// Nodes pushed onto the frontier for the first time.
    pub discovered: usize,
    /// Frontier entries improved in place by a cheaper route.
    pub rescored: usize,
}

/// An ordered route through a graph, from start (if included) to goal.
///
/// A path for a request whose start is its goal is either empty or holds the
/// single start node, depending on the graph's include-start setting. "No
/// path" is never represented by a `Path`.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    nodes: Vec<NodeId>,
    cost: f64,
    stats: SearchStats,
}

impl Path {
    /// Node handles in travel order.
    #[inline]
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Number of nodes in the path.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn first(&self) -> Option<NodeId> {
        self.nodes.first().copied()
    }

    #[inline]
    pub fn last(&self) -> Option<NodeId> {
        self.nodes.last().copied()
    }

    /// Sum of the edge costs along the route.
    #[inline]
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Counters of the search that produced this path.
    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().copied()
    }

    /// Consume the path, keeping only its node handles.
    pub fn into_nodes(self) -> Vec<NodeId> {
        self.nodes
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a NodeId;
    type IntoIter = std::slice::Iter<'a, NodeId>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

// ---------------------------------------------------------------------------
// Bookkeeping
// ---------------------------------------------------------------------------

const NO_PARENT: usize = usize::MAX;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Visit {
    Unseen,
    Open,
    Closed,
}

/// Per-node search record, indexed by [`NodeId::index`].
#[derive(Clone, Copy)]
struct Slot {
    g: f64,
    parent: usize,
    visit: Visit,
}

impl Default for Slot {
    fn default() -> Self {
        Self {
            g: f64::INFINITY,
            parent: NO_PARENT,
            visit: Visit::Unseen,
        }
    }
}

/// Frontier entry. Compared by node only, so the queue can find it again.
#[derive(Debug, Clone, Copy)]
struct Frontier {
    node: NodeId,
    g: f64,
    h: f64,
}

impl Frontier {
    fn probe(node: NodeId) -> Self {
        Self {
            node,
            g: 0.0,
            h: 0.0,
        }
    }
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node
    }
}

/// Frontier order: lowest `f = g + h` first, then lowest `h`.
fn frontier_score(e: &Frontier) -> (f64, f64) {
    (e.g + e.h, e.h)
}

// ---------------------------------------------------------------------------
// Driver
// ---------------------------------------------------------------------------

/// Run A* from `start` to `goal`.
///
/// Both handles must be below `pather.node_count()`; callers validate them.
pub(crate) fn astar<P: AstarPather + ?Sized>(
    pather: &P,
    start: NodeId,
    goal: NodeId,
    include_start: bool,
    ctx: Option<&Context>,
) -> Result<Path, PathError> {
    if start == goal {
        let nodes = if include_start { vec![start] } else { Vec::new() };
        return Ok(Path {
            nodes,
            ..Path::default()
        });
    }

    let mut slots = vec![Slot::default(); pather.node_count()];
    let mut stats = SearchStats::default();
    let mut open = PriorityQueue::with_capacity(64, frontier_score);

    {
        let s = &mut slots[start.index()];
        s.g = 0.0;
        s.visit = Visit::Open;
    }
    open.push(Frontier {
        node: start,
        g: 0.0,
        h: pather.estimate(start, goal),
    });
    stats.discovered += 1;

    let found = 'search: loop {
        if ctx.is_some_and(|c| c.is_done()) {
            log::debug!("astar {start} -> {goal}: cancelled after {stats:?}");
            return Err(PathError::Cancelled);
        }
        let Some(current) = open.pop() else {
            break 'search false;
        };

        if current.node == goal {
            break 'search true;
        }

        slots[current.node.index()].visit = Visit::Closed;
        stats.expanded += 1;

        for &next in pather.neighbors(current.node) {
            let slot = &mut slots[next.index()];
            if slot.visit == Visit::Closed {
                continue;
            }
            let Some(step) = pather.edge_cost(current.node, next) else {
                continue;
            };
            let tentative_g = current.g + step;

            match slot.visit {
                Visit::Unseen => {
                    slot.g = tentative_g;
                    slot.parent = current.node.index();
                    slot.visit = Visit::Open;
                    open.push(Frontier {
                        node: next,
                        g: tentative_g,
                        h: pather.estimate(next, goal),
                    });
                    stats.discovered += 1;
                }
                Visit::Open if tentative_g < slot.g => {
                    slot.g = tentative_g;
                    slot.parent = current.node.index();
                    open.update(&Frontier::probe(next), |e| e.g = tentative_g);
                    stats.rescored += 1;
                }
                _ => {}
            }
        }
    };

    if !found {
        log::debug!("astar {start} -> {goal}: unreachable, {stats:?}");
        return Err(PathError::Unreachable);
    }

    // Reconstruct path.
    let mut nodes = Vec::new();
    let mut ci = goal.index();
    while ci != NO_PARENT {
        nodes.push(NodeId(ci));
        ci = slots[ci].parent;
    }
    if !include_start {
        nodes.pop();
    }
    nodes.reverse();

    let cost = slots[goal.index()].g;
    log::debug!(
        "astar {start} -> {goal}: {} nodes, cost {cost}, {stats:?}",
        nodes.len()
    );
    Ok(Path { nodes, cost, stats })
}
