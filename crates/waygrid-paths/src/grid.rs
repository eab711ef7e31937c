//! A* over a 2D grid of height / passability values.

use waygrid_core::{Context, Point, Range};

use crate::adjacency::Adjacency;
use crate::config::{GridConfig, Strategy};
use crate::distance::Heuristic;
use crate::error::{GraphError, PathError};
use crate::node::NodeId;
use crate::search::{self, Path};
use crate::traits::{AstarPather, Pather, WeightedPather};

/// Value reported for cells outside the grid. Any negative cell value blocks
/// movement; this is the one the grid hands out.
pub const IMPASSABLE: i32 = -1;

/// A grid cell as seen by a path: its handle, position and value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridNode {
    pub id: NodeId,
    pub pos: Point,
    pub value: i32,
}

/// A `width` × `height` grid whose cells are navigation nodes.
///
/// Each cell holds a value: negative means blocked, anything else is
/// walkable and, under [`Strategy::AvoidSteps`], a terrain height. Cells are
/// wired to their neighbours once at construction; [`set_value`](Self::set_value)
/// edits obstacles and heights without touching connectivity.
///
/// ```
/// use waygrid_core::Point;
/// use waygrid_paths::{GridConfig, GridGraph};
///
/// let mut grid = GridGraph::new(GridConfig::new(5, 5));
/// for y in 0..4 {
///     grid.set_value(Point::new(2, y), -1);
/// }
/// let path = grid.find_points(Point::new(0, 0), Point::new(4, 0)).unwrap();
/// assert!(path.contains(&Point::new(2, 4)));
/// ```
#[derive(Debug, Clone)]
pub struct GridGraph {
    config: GridConfig,
    rng: Range,
    values: Vec<i32>,
    adjacency: Adjacency,
}

impl GridGraph {
    /// Build a grid with every cell set to `config.default_value`.
    pub fn new(config: GridConfig) -> Self {
        let rng = Range::sized(config.width, config.height);
        let values = vec![config.default_value; rng.len()];
        Self::build(config, rng, values)
    }

    /// Build a grid from row-major initial `values`.
    pub fn with_values(config: GridConfig, values: Vec<i32>) -> Result<Self, GraphError> {
        let rng = Range::sized(config.width, config.height);
        if values.len() != rng.len() {
            return Err(GraphError::SizeMismatch {
                expected: rng.len(),
                actual: values.len(),
            });
        }
        Ok(Self::build(config, rng, values))
    }

    fn build(config: GridConfig, rng: Range, values: Vec<i32>) -> Self {
        let adjacency = Adjacency::grid(rng, config.diagonal);
        log::debug!(
            "grid {}x{}: {} edges (diagonal: {})",
            rng.width(),
            rng.height(),
            adjacency.edge_count(),
            config.diagonal
        );
        Self {
            config,
            rng,
            values,
            adjacency,
        }
    }

    /// Options the grid was built with, reflecting later changes to size,
    /// default value and include-start.
    #[inline]
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.rng.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.rng.height()
    }

    /// The grid rectangle, anchored at the origin.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn strategy(&self) -> Strategy {
        self.config.strategy
    }

    #[inline]
    pub fn heuristic(&self) -> Heuristic {
        self.config.heuristic
    }

    /// Number of undirected edges between cells.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.adjacency.edge_count()
    }

    /// Whether returned paths begin with the start cell.
    pub fn set_include_start(&mut self, include: bool) {
        self.config.include_start = include;
    }

    #[inline]
    pub fn includes_start(&self) -> bool {
        self.config.include_start
    }

    /// Value given to cells created by a later [`resize`](Self::resize).
    pub fn set_default_value(&mut self, value: i32) {
        self.config.default_value = value;
    }

    #[inline]
    pub fn default_value(&self) -> i32 {
        self.config.default_value
    }

    // -----------------------------------------------------------------------
    // Cell access
    // -----------------------------------------------------------------------

    /// Handle of the cell at `p`, or `None` outside the grid.
    #[inline]
    pub fn node_id(&self, p: Point) -> Option<NodeId> {
        if !self.rng.contains(p) {
            return None;
        }
        Some(NodeId(p.y as usize * self.rng.width() as usize + p.x as usize))
    }

    /// Position of the cell `id`, or `None` for a foreign handle.
    #[inline]
    pub fn point(&self, id: NodeId) -> Option<Point> {
        (id.index() < self.values.len()).then(|| self.point_unchecked(id))
    }

    #[inline]
    fn point_unchecked(&self, id: NodeId) -> Point {
        let w = self.rng.width() as usize;
        Point::new((id.index() % w) as i32, (id.index() / w) as i32)
    }

    /// The cell `id` with its position and current value.
    pub fn node(&self, id: NodeId) -> Option<GridNode> {
        let pos = self.point(id)?;
        Some(GridNode {
            id,
            pos,
            value: self.values[id.index()],
        })
    }

    /// Value of the cell at `p`, or [`IMPASSABLE`] outside the grid.
    #[inline]
    pub fn value(&self, p: Point) -> i32 {
        self.node_id(p)
            .map_or(IMPASSABLE, |id| self.values[id.index()])
    }

    /// Whether `p` is inside the grid and not blocked.
    #[inline]
    pub fn is_passable(&self, p: Point) -> bool {
        self.value(p) >= 0
    }

    /// Set the value of the cell at `p`. Negative values block the cell.
    ///
    /// Returns `false`, changing nothing, if `p` is outside the grid.
    pub fn set_value(&mut self, p: Point, value: i32) -> bool {
        match self.node_id(p) {
            Some(id) => {
                self.values[id.index()] = value;
                true
            }
            None => {
                log::trace!("set_value {p} ignored: outside {}", self.rng);
                false
            }
        }
    }

    /// Set every cell to `value`.
    pub fn fill(&mut self, value: i32) {
        self.values.fill(value);
    }

    /// Row-major view of all cell values.
    #[inline]
    pub fn values(&self) -> &[i32] {
        &self.values
    }

    /// Cost of stepping from `from` to `to` under the grid's strategy.
    ///
    /// `None` if either cell is blocked or outside the grid. Adjacency is not
    /// checked.
    pub fn step_cost(&self, from: Point, to: Point) -> Option<f64> {
        self.config
            .strategy
            .step_cost(self.value(from), self.value(to))
    }

    /// Change the grid size, keeping the values of cells that remain.
    ///
    /// New cells get the default value. Connectivity is rebuilt, so every
    /// [`NodeId`] and [`Path`] obtained before the call is invalid after it.
    pub fn resize(&mut self, width: i32, height: i32) {
        let new_rng = Range::sized(width, height);
        let mut values = vec![self.config.default_value; new_rng.len()];
        let new_w = new_rng.width() as usize;
        for p in self.rng.intersect(new_rng) {
            if let Some(id) = self.node_id(p) {
                values[p.y as usize * new_w + p.x as usize] = self.values[id.index()];
            }
        }
        self.config.width = new_rng.width();
        self.config.height = new_rng.height();
        *self = Self::build(self.config, new_rng, values);
    }

    // -----------------------------------------------------------------------
    // Path queries
    // -----------------------------------------------------------------------

    /// Find a path between two cells.
    ///
    /// Returns `None` if either position is outside the grid or no path
    /// exists; use [`try_find`](Self::try_find) to tell those apart.
    pub fn find(&self, from: Point, to: Point) -> Option<Path> {
        self.try_find(from, to).ok()
    }

    /// Like [`find`](Self::find), reporting why no path was produced.
    pub fn try_find(&self, from: Point, to: Point) -> Result<Path, PathError> {
        let (start, goal) = self.endpoints(from, to)?;
        search::astar(self, start, goal, self.config.include_start, None)
    }

    /// Like [`try_find`](Self::try_find), giving up once `ctx` is cancelled.
    pub fn find_cancellable(
        &self,
        from: Point,
        to: Point,
        ctx: &Context,
    ) -> Result<Path, PathError> {
        let (start, goal) = self.endpoints(from, to)?;
        search::astar(self, start, goal, self.config.include_start, Some(ctx))
    }

    /// Find a path between two cell handles.
    pub fn find_nodes(&self, start: NodeId, goal: NodeId) -> Option<Path> {
        self.try_find_nodes(start, goal).ok()
    }

    /// Like [`find_nodes`](Self::find_nodes), reporting why no path was
    /// produced.
    pub fn try_find_nodes(&self, start: NodeId, goal: NodeId) -> Result<Path, PathError> {
        for id in [start, goal] {
            if id.index() >= self.values.len() {
                return Err(PathError::UnknownNode(id));
            }
        }
        search::astar(self, start, goal, self.config.include_start, None)
    }

    /// Find a path and return its cell positions.
    pub fn find_points(&self, from: Point, to: Point) -> Option<Vec<Point>> {
        self.find(from, to).map(|path| self.points(&path))
    }

    /// Cell positions of `path`.
    pub fn points(&self, path: &Path) -> Vec<Point> {
        path.iter().filter_map(|id| self.point(id)).collect()
    }

    fn endpoints(&self, from: Point, to: Point) -> Result<(NodeId, NodeId), PathError> {
        let start = self.node_id(from).ok_or(PathError::OutOfBounds(from))?;
        let goal = self.node_id(to).ok_or(PathError::OutOfBounds(to))?;
        Ok((start, goal))
    }
}

impl Pather for GridGraph {
    #[inline]
    fn node_count(&self) -> usize {
        self.values.len()
    }

    #[inline]
    fn neighbors(&self, node: NodeId) -> &[NodeId] {
        self.adjacency.neighbors(node)
    }
}

impl WeightedPather for GridGraph {
    #[inline]
    fn edge_cost(&self, from: NodeId, to: NodeId) -> Option<f64> {
        self.config
            .strategy
            .step_cost(self.values[from.index()], self.values[to.index()])
    }
}

impl AstarPather for GridGraph {
    #[inline]
    fn estimate(&self, from: NodeId, goal: NodeId) -> f64 {
        self.config
            .heuristic
            .estimate(self.point_unchecked(from), self.point_unchecked(goal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::manhattan;
    use rand::rngs::StdRng;
    use rand::{RngExt, SeedableRng};

    fn grid(w: i32, h: i32) -> GridGraph {
        GridGraph::new(GridConfig::new(w, h))
    }

    fn assert_connected_steps(points: &[Point], diagonal: bool) {
        for w in points.windows(2) {
            let dx = (w[0].x - w[1].x).abs();
            let dy = (w[0].y - w[1].y).abs();
            if diagonal {
                assert!(dx <= 1 && dy <= 1 && dx + dy > 0, "bad step {} -> {}", w[0], w[1]);
            } else {
                assert_eq!(dx + dy, 1, "bad step {} -> {}", w[0], w[1]);
            }
        }
    }

    #[test]
    fn cardinal_edge_count() {
        for (w, h) in [(1, 1), (2, 3), (5, 5), (7, 2)] {
            let g = grid(w, h);
            let expected = (w * (h - 1) + h * (w - 1)) as usize;
            assert_eq!(g.edge_count(), expected, "{w}x{h}");
        }
    }

    #[test]
    fn diagonal_edge_count() {
        for (w, h) in [(1, 1), (2, 3), (5, 5), (7, 2)] {
            let g = GridGraph::new(GridConfig::new(w, h).with_diagonal(true));
            let cardinal = w * (h - 1) + h * (w - 1);
            let diagonal = 2 * (w - 1) * (h - 1);
            assert_eq!(g.edge_count(), (cardinal + diagonal) as usize, "{w}x{h}");
        }
    }

    #[test]
    fn values_are_bounds_checked_per_axis() {
        let mut g = GridGraph::new(GridConfig::new(10, 3).with_default_value(4));
        assert_eq!(g.value(Point::new(9, 2)), 4);
        assert_eq!(g.value(Point::new(0, 5)), IMPASSABLE);
        assert_eq!(g.value(Point::new(-1, 0)), IMPASSABLE);
        assert_eq!(g.value(Point::new(10, 0)), IMPASSABLE);
        assert!(g.set_value(Point::new(3, 1), 9));
        assert_eq!(g.value(Point::new(3, 1)), 9);
        assert!(!g.set_value(Point::new(3, 3), 9));
        assert!(!g.set_value(Point::new(-3, 1), 9));
    }

    #[test]
    fn node_handles_map_back_to_points() {
        let g = grid(4, 3);
        for p in g.range() {
            let id = g.node_id(p).unwrap();
            assert_eq!(g.point(id), Some(p));
            assert_eq!(g.node(id).map(|n| n.pos), Some(p));
        }
        assert_eq!(g.point(NodeId(12)), None);
        assert!(g.node(NodeId(12)).is_none());
    }

    #[test]
    fn open_grid_takes_manhattan_route() {
        let g = grid(5, 5);
        let path = g.find_points(Point::new(0, 0), Point::new(4, 4)).unwrap();
        assert_eq!(path.len(), 9);
        assert_eq!(path.first(), Some(&Point::new(0, 0)));
        assert_eq!(path.last(), Some(&Point::new(4, 4)));
        assert_connected_steps(&path, false);
        assert!(path.iter().all(|&p| g.value(p) >= 0));
    }

    #[test]
    fn full_wall_blocks_every_route() {
        let mut g = grid(5, 5);
        for y in 0..5 {
            g.set_value(Point::new(2, y), -1);
        }
        assert!(g.find(Point::new(0, 0), Point::new(4, 0)).is_none());
        assert_eq!(
            g.try_find(Point::new(0, 0), Point::new(4, 0)),
            Err(PathError::Unreachable)
        );
        // A diagonal grid cannot squeeze past a full column either.
        let mut d = GridGraph::new(GridConfig::new(5, 5).with_diagonal(true));
        for y in 0..5 {
            d.set_value(Point::new(2, y), -1);
        }
        assert!(d.find(Point::new(0, 0), Point::new(4, 0)).is_none());
    }

    #[test]
    fn gap_in_wall_is_used() {
        let mut g = grid(5, 5);
        for y in 0..4 {
            g.set_value(Point::new(2, y), -1);
        }
        let path = g.find_points(Point::new(0, 0), Point::new(4, 0)).unwrap();
        assert!(path.contains(&Point::new(2, 4)));
        assert_connected_steps(&path, false);
    }

    #[test]
    fn avoid_steps_walks_around_a_hill() {
        let mut g = grid(3, 3);
        g.set_value(Point::new(1, 1), 5);
        let path = g.find_points(Point::new(0, 1), Point::new(2, 1)).unwrap();
        assert_eq!(path.len(), 5);
        assert!(!path.contains(&Point::new(1, 1)));
        assert_connected_steps(&path, false);
        assert_eq!(g.find(Point::new(0, 1), Point::new(2, 1)).unwrap().cost(), 0.0);
    }

    #[test]
    fn ignore_steps_walks_over_a_hill() {
        let mut g = GridGraph::new(GridConfig::new(3, 3).with_strategy(Strategy::IgnoreSteps));
        g.set_value(Point::new(1, 1), 5);
        let path = g.find_points(Point::new(0, 1), Point::new(2, 1)).unwrap();
        assert_eq!(
            path,
            vec![Point::new(0, 1), Point::new(1, 1), Point::new(2, 1)]
        );
    }

    #[test]
    fn avoid_steps_climbs_when_forced() {
        let mut g = grid(3, 3);
        for x in 0..3 {
            g.set_value(Point::new(x, 0), -1);
            g.set_value(Point::new(x, 2), -1);
        }
        g.set_value(Point::new(1, 1), 5);
        let path = g.find(Point::new(0, 1), Point::new(2, 1)).unwrap();
        assert_eq!(path.len(), 3);
        assert_eq!(path.cost(), 10.0);
    }

    #[test]
    fn low_hill_needs_exact_heuristic_to_be_avoided() {
        let mut g = GridGraph::new(GridConfig::new(3, 3).with_heuristic(Heuristic::Zero));
        g.set_value(Point::new(1, 1), 1);
        let path = g.find(Point::new(0, 1), Point::new(2, 1)).unwrap();
        assert_eq!(path.cost(), 0.0);
        assert!(!g.points(&path).contains(&Point::new(1, 1)));
    }

    #[test]
    fn strategies_agree_on_flat_ground() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut avoid = grid(12, 12);
        for _ in 0..30 {
            let p = Point::new(rng.random_range(0..12), rng.random_range(0..12));
            avoid.set_value(p, -1);
        }
        avoid.set_value(Point::new(0, 0), 0);
        avoid.set_value(Point::new(11, 11), 0);
        let ignore = GridGraph::with_values(
            GridConfig::new(12, 12).with_strategy(Strategy::IgnoreSteps),
            avoid.values().to_vec(),
        )
        .unwrap();

        let a = avoid.find(Point::new(0, 0), Point::new(11, 11));
        let b = ignore.find(Point::new(0, 0), Point::new(11, 11));
        match (a, b) {
            (Some(a), Some(b)) => {
                assert_eq!(a.cost(), 0.0);
                assert_eq!(b.cost(), 0.0);
                assert_eq!(a.nodes(), b.nodes());
            }
            (None, None) => {}
            (a, b) => panic!("strategies disagree: {a:?} vs {b:?}"),
        }
    }

    #[test]
    fn blocked_cells_never_on_path() {
        let mut rng = StdRng::seed_from_u64(5);
        for diagonal in [false, true] {
            let mut g = GridGraph::new(GridConfig::new(20, 20).with_diagonal(diagonal));
            for _ in 0..120 {
                let p = Point::new(rng.random_range(0..20), rng.random_range(0..20));
                g.set_value(p, -1);
            }
            let blocked: Vec<Point> = g.range().iter().filter(|&p| !g.is_passable(p)).collect();
            for &b in &blocked {
                for q in b.neighbors_4().into_iter().chain(b.diagonals()) {
                    assert_eq!(g.step_cost(q, b), None);
                    assert_eq!(g.step_cost(b, q), None);
                }
            }
            for _ in 0..20 {
                let from = Point::new(rng.random_range(0..20), rng.random_range(0..20));
                let to = Point::new(rng.random_range(0..20), rng.random_range(0..20));
                if let Some(path) = g.find_points(from, to) {
                    assert!(path.iter().all(|p| !blocked.contains(p)));
                    assert_connected_steps(&path, diagonal);
                }
            }
        }
    }

    #[test]
    fn blocked_endpoint_has_no_path() {
        let mut g = grid(4, 4);
        g.set_value(Point::new(3, 3), -2);
        assert!(g.find(Point::new(0, 0), Point::new(3, 3)).is_none());
        assert!(g.find(Point::new(3, 3), Point::new(0, 0)).is_none());
    }

    #[test]
    fn trivial_request() {
        let g = grid(3, 3);
        let p = Point::new(1, 2);
        assert_eq!(g.find_points(p, p), Some(vec![p]));

        let g = GridGraph::new(GridConfig::new(3, 3).with_include_start(false));
        let path = g.find(p, p).unwrap();
        assert!(path.is_empty());
        let moved = g.find_points(Point::new(0, 0), Point::new(2, 0)).unwrap();
        assert_eq!(moved, vec![Point::new(1, 0), Point::new(2, 0)]);
    }

    #[test]
    fn out_of_range_endpoints() {
        let g = grid(10, 3);
        assert!(g.find(Point::new(0, 0), Point::new(0, 5)).is_none());
        assert_eq!(
            g.try_find(Point::new(0, 0), Point::new(0, 5)),
            Err(PathError::OutOfBounds(Point::new(0, 5)))
        );
        assert_eq!(
            g.try_find(Point::new(-1, 0), Point::new(0, 0)),
            Err(PathError::OutOfBounds(Point::new(-1, 0)))
        );
        assert_eq!(
            g.try_find_nodes(NodeId(0), NodeId(30)),
            Err(PathError::UnknownNode(NodeId(30)))
        );
    }

    #[test]
    fn diagonal_grid_cuts_corners() {
        let g = GridGraph::new(GridConfig::new(5, 5).with_diagonal(true));
        let path = g.find_points(Point::new(0, 0), Point::new(4, 4)).unwrap();
        assert_eq!(path.len(), 5);
        assert_connected_steps(&path, true);
    }

    #[test]
    fn find_by_node_handles() {
        let g = grid(4, 1);
        let a = g.node_id(Point::new(0, 0)).unwrap();
        let b = g.node_id(Point::new(3, 0)).unwrap();
        let path = g.find_nodes(a, b).unwrap();
        assert_eq!(path.len(), 4);
        assert_eq!(g.points(&path).last(), Some(&Point::new(3, 0)));
    }

    #[test]
    fn with_values_checks_length() {
        let err = GridGraph::with_values(GridConfig::new(3, 2), vec![0; 5]).unwrap_err();
        assert_eq!(
            err,
            GraphError::SizeMismatch {
                expected: 6,
                actual: 5
            }
        );
        let g = GridGraph::with_values(GridConfig::new(3, 2), vec![0, 1, 2, 3, 4, 5]).unwrap();
        assert_eq!(g.value(Point::new(2, 1)), 5);
    }

    #[test]
    fn fill_overwrites_every_cell() {
        let mut g = grid(3, 3);
        g.set_value(Point::new(1, 1), -1);
        g.fill(2);
        assert!(g.values().iter().all(|&v| v == 2));
    }

    #[test]
    fn resize_keeps_overlap_and_rewires() {
        let mut g = grid(3, 3);
        g.set_value(Point::new(2, 2), 7);
        g.set_value(Point::new(0, 1), -1);
        g.set_default_value(1);
        g.resize(5, 2);

        assert_eq!((g.width(), g.height()), (5, 2));
        assert_eq!(g.config().width, 5);
        assert_eq!(g.value(Point::new(0, 1)), -1);
        assert_eq!(g.value(Point::new(2, 2)), IMPASSABLE);
        assert_eq!(g.value(Point::new(4, 0)), 1);
        assert_eq!(g.value(Point::new(1, 0)), 0);
        assert_eq!(g.edge_count(), 5 + 2 * 4);
        assert!(g.find(Point::new(0, 0), Point::new(4, 1)).is_some());
    }

    /// Cheapest cost from `from` to every cell by repeated relaxation.
    fn brute_force_costs(g: &GridGraph, from: Point) -> Vec<f64> {
        let mut dist = vec![f64::INFINITY; g.len()];
        dist[g.node_id(from).unwrap().index()] = 0.0;
        loop {
            let mut changed = false;
            for p in g.range() {
                let pi = g.node_id(p).unwrap().index();
                if dist[pi].is_infinite() {
                    continue;
                }
                for &q in g.neighbors(NodeId(pi)) {
                    if let Some(step) = g.edge_cost(NodeId(pi), q) {
                        if dist[pi] + step < dist[q.index()] {
                            dist[q.index()] = dist[pi] + step;
                            changed = true;
                        }
                    }
                }
            }
            if !changed {
                return dist;
            }
        }
    }

    #[test]
    fn zero_heuristic_finds_cheapest_height_route() {
        let mut rng = StdRng::seed_from_u64(42);
        let config = GridConfig::new(15, 10).with_heuristic(Heuristic::Zero);
        let values = (0..150)
            .map(|_| match rng.random_range(0..10) {
                0 => -1,
                _ => rng.random_range(0..6),
            })
            .collect();
        let mut g = GridGraph::with_values(config, values).unwrap();
        let from = Point::new(0, 0);
        g.set_value(from, 0);

        let dist = brute_force_costs(&g, from);
        for to in g.range() {
            let expected = dist[g.node_id(to).unwrap().index()];
            match g.find(from, to) {
                Some(path) => {
                    assert_eq!(path.cost(), expected, "cost to {to}");
                    let pts = g.points(&path);
                    let summed: f64 = pts
                        .windows(2)
                        .map(|w| g.step_cost(w[0], w[1]).unwrap())
                        .sum();
                    assert_eq!(summed, path.cost());
                }
                None => assert!(expected.is_infinite(), "missed path to {to}"),
            }
        }
    }

    #[test]
    fn manhattan_heuristic_is_exact_on_open_cardinal_grid() {
        let g = GridGraph::new(
            GridConfig::new(30, 30)
                .with_strategy(Strategy::IgnoreSteps)
                .with_heuristic(Heuristic::Manhattan),
        );
        let from = Point::new(3, 27);
        let to = Point::new(25, 2);
        let path = g.find_points(from, to).unwrap();
        assert_eq!(path.len() as i32, manhattan(from, to) + 1);
    }

    #[test]
    fn serpentine_walls_on_large_grid() {
        let size = 200;
        let mut g = GridGraph::new(GridConfig::new(size, size).with_heuristic(Heuristic::Zero));
        for x in (3..size).step_by(4) {
            let gap = if (x / 4) % 2 == 0 { 0 } else { size - 1 };
            for y in (0..size).filter(|&y| y != gap) {
                g.set_value(Point::new(x, y), IMPASSABLE);
            }
        }
        let path = g
            .find_points(Point::new(0, 0), Point::new(size - 1, size - 1))
            .unwrap();
        assert_connected_steps(&path, false);
        assert!(path.iter().all(|&p| g.is_passable(p)));
        // 49 corridors traversed top to bottom or back, plus the width.
        let shortest = 49 * (size - 1) + (size - 1) + 1;
        assert!(path.len() >= shortest as usize);
    }

    #[test]
    fn cancelled_search_reports_cancellation() {
        let g = grid(50, 50);
        let ctx = Context::new();
        ctx.cancel();
        assert_eq!(
            g.find_cancellable(Point::new(0, 0), Point::new(49, 49), &ctx),
            Err(PathError::Cancelled)
        );
        let live = Context::new();
        assert!(
            g.find_cancellable(Point::new(0, 0), Point::new(49, 49), &live)
                .is_ok()
        );
    }

    #[test]
    fn set_value_does_not_invalidate_handles() {
        let mut g = grid(4, 4);
        let path = g.find(Point::new(0, 0), Point::new(3, 0)).unwrap();
        g.set_value(Point::new(1, 0), 3);
        assert_eq!(g.points(&path).len(), 4);
        let id = path.nodes()[1];
        assert_eq!(g.node(id).map(|n| n.value), Some(3));
    }
}
