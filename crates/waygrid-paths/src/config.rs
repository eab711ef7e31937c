//! Construction options for [`GridGraph`](crate::GridGraph).

use crate::distance::Heuristic;

/// How cell values turn into step costs.
///
/// Under both strategies a negative value on either side of a step blocks it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Values are heights; a step costs the height difference.
    ///
    /// Flat steps are free, so only [`Heuristic::Zero`] keeps paths on their
    /// starting level until a climb is forced. With a distance heuristic the
    /// search may cross a low hill rather than walk around it.
    #[default]
    AvoidSteps,
    /// Values only gate passability; every passable step is free.
    IgnoreSteps,
}

impl Strategy {
    /// Cost of stepping from a cell valued `from` into one valued `to`.
    #[inline]
    pub fn step_cost(self, from: i32, to: i32) -> Option<f64> {
        if from < 0 || to < 0 {
            return None;
        }
        match self {
            Self::AvoidSteps => Some((i64::from(from) - i64::from(to)).abs() as f64),
            Self::IgnoreSteps => Some(0.0),
        }
    }
}

/// Options for building a [`GridGraph`](crate::GridGraph).
///
/// ```
/// use waygrid_paths::{GridConfig, Strategy};
///
/// let config = GridConfig::new(50, 50)
///     .with_diagonal(true)
///     .with_strategy(Strategy::IgnoreSteps);
/// assert!(config.include_start);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct GridConfig {
    pub width: i32,
    pub height: i32,
    /// Also connect diagonal neighbours (8-way movement).
    pub diagonal: bool,
    /// Begin returned paths with the start cell.
    pub include_start: bool,
    pub strategy: Strategy,
    /// Value of every cell at construction.
    pub default_value: i32,
    pub heuristic: Heuristic,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            diagonal: false,
            include_start: true,
            strategy: Strategy::AvoidSteps,
            default_value: 0,
            heuristic: Heuristic::Euclidean,
        }
    }
}

impl GridConfig {
    /// Default options for a `width` × `height` grid.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn with_diagonal(mut self, diagonal: bool) -> Self {
        self.diagonal = diagonal;
        self
    }

    pub fn with_include_start(mut self, include: bool) -> Self {
        self.include_start = include;
        self
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_default_value(mut self, value: i32) -> Self {
        self.default_value = value;
        self
    }

    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }
}
