use waygrid_core::{Point, Vec2};

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Chebyshev (L∞) distance between two points.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

/// Euclidean (L2) distance between two points.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f64 {
    Vec2::from(a).distance(Vec2::from(b))
}

/// Remaining-cost estimate used by [`GridGraph`](crate::GridGraph) searches.
///
/// With the height strategies flat steps cost nothing, so every variant but
/// [`Zero`](Self::Zero) can overestimate; the search then favours direct
/// routes over strictly cheapest ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heuristic {
    /// Straight-line distance to the goal.
    #[default]
    Euclidean,
    /// Sum of axis distances, the exact step count on a 4-way grid.
    Manhattan,
    /// Largest axis distance, the exact step count on an 8-way grid.
    Chebyshev,
    /// No estimate at all; the search degrades to Dijkstra.
    Zero,
}

impl Heuristic {
    /// Estimate the cost from `from` to `goal`.
    #[inline]
    pub fn estimate(self, from: Point, goal: Point) -> f64 {
        match self {
            Self::Euclidean => euclidean(from, goal),
            Self::Manhattan => f64::from(manhattan(from, goal)),
            Self::Chebyshev => f64::from(chebyshev(from, goal)),
            Self::Zero => 0.0,
        }
    }
}
