//! Core type definitions for the simulation.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for an item living in a tank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(pub Uuid);

impl ItemId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Cell coordinate in the tank. `y` grows downwards, row 0 is the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset by `(dx, dy)`. Each axis saturates at the `i32` limits, which
    /// always lie outside any tank.
    pub fn add(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }

    /// True when the position lies inside a `width` x `height` grid
    pub fn within(&self, width: i32, height: i32) -> bool {
        (0..width).contains(&self.x) && (0..height).contains(&self.y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Horizontal facing of a mobile item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    East,
    West,
}

impl Direction {
    /// Horizontal step taken when moving forwards
    pub fn dx(&self) -> i32 {
        match self {
            Direction::East => 1,
            Direction::West => -1,
        }
    }

    pub fn reversed(&self) -> Self {
        match self {
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// Pick East or West with equal probability
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.gen::<bool>() {
            Direction::East
        } else {
            Direction::West
        }
    }
}

/// Every kind of item the tank knows how to simulate
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Species {
    /// Sinking lump of food
    Food,
    /// Bottom-dwelling grazer; its corpse sinks
    Snail,
    /// Grazer that favours the upper water
    Surfacer,
    /// Grazer that favours the lower water
    Diver,
    /// Eats food and the two fish grazers; dies in cold water
    Predator,
    /// Wind-up toy fish with no metabolism
    Clockwork,
}

impl Species {
    pub fn all() -> [Species; 6] {
        [
            Species::Food,
            Species::Snail,
            Species::Surfacer,
            Species::Diver,
            Species::Predator,
            Species::Clockwork,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Species::Food => "food",
            Species::Snail => "snail",
            Species::Surfacer => "surfacer",
            Species::Diver => "diver",
            Species::Predator => "predator",
            Species::Clockwork => "clockwork",
        }
    }

    /// Organic items that breathe, feed and can die
    pub fn is_animal(&self) -> bool {
        matches!(
            self,
            Species::Snail | Species::Surfacer | Species::Diver | Species::Predator
        )
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
