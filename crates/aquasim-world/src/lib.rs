//! Fish tank simulation engine.
//!
//! This crate implements the bounded 2D tank, the items living in it and the
//! turn engine that advances them one synchronized cycle at a time.

pub mod behavior;
pub mod glyph;
pub mod item;
pub mod movement;
pub mod simulation;
pub mod tank;
pub mod temperature;

#[cfg(test)]
mod testing;

pub use glyph::{Glyph, GLYPH_HEIGHT, GLYPH_WIDTH};
pub use item::Item;
pub use movement::{BoundaryHit, MoveOutcome};
pub use simulation::{run_cycle, CycleReport, Simulation};
pub use tank::Tank;
pub use temperature::{Drift, Temperature};
