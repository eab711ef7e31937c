use waygrid_core::{Point, Range};

use crate::node::NodeId;

/// Compact adjacency lists for a fixed set of nodes.
///
/// Neighbours of node `i` are `targets[offsets[i]..offsets[i + 1]]`. Built
/// once; grid edits change cell values, never connectivity.
#[derive(Debug, Clone, Default)]
pub(crate) struct Adjacency {
    offsets: Vec<usize>,
    targets: Vec<NodeId>,
}

impl Adjacency {
    /// Wire every cell of `rng` to its in-range cardinal neighbours, and to
    /// its diagonal neighbours too when `diagonal` is set.
    ///
    /// Cells are numbered row-major from `rng.min`.
    pub(crate) fn grid(rng: Range, diagonal: bool) -> Self {
        let per_cell = if diagonal { 8 } else { 4 };
        let mut offsets = Vec::with_capacity(rng.len() + 1);
        let mut targets = Vec::with_capacity(rng.len() * per_cell);
        let width = rng.width().max(0) as usize;
        let index = |q: Point| {
            let x = (q.x - rng.min.x) as usize;
            let y = (q.y - rng.min.y) as usize;
            NodeId(y * width + x)
        };

        offsets.push(0);
        for p in rng {
            for q in p.neighbors_4() {
                if rng.contains(q) {
                    targets.push(index(q));
                }
            }
            if diagonal {
                for q in p.diagonals() {
                    if rng.contains(q) {
                        targets.push(index(q));
                    }
                }
            }
            offsets.push(targets.len());
        }
        Self { offsets, targets }
    }

    /// Neighbours of `node`.
    #[inline]
    pub(crate) fn neighbors(&self, node: NodeId) -> &[NodeId] {
        let i = node.index();
        &self.targets[self.offsets[i]..self.offsets[i + 1]]
    }

    /// Number of undirected edges, each stored once per direction.
    #[inline]
    pub(crate) fn edge_count(&self) -> usize {
        self.targets.len() / 2
    }
}
