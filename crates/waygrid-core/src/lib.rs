//! **waygrid-core**: shared types for the *waygrid* pathfinding crates.
//!
//! This crate provides grid geometry ([`Point`], [`Range`]), real-valued
//! node positions ([`Vec2`]) and the cooperative cancellation token
//! ([`Context`]) polled by long searches.

pub mod context;
pub mod geom;

pub use context::Context;
pub use geom::{Point, Range, RangeIter, Vec2};
