//! Bounds-checked displacement of items within a tank.

use crate::tank::Tank;
use aquasim_core::{Error, ItemId, Position, Result};
use tracing::trace;

/// A displacement that would have left the tank
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundaryHit {
    pub from: Position,
    pub target: Position,
}

/// Result of a displacement attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved(Position),
    Blocked(BoundaryHit),
}

impl MoveOutcome {
    pub fn is_blocked(&self) -> bool {
        matches!(self, MoveOutcome::Blocked(_))
    }
}

impl Tank {
    /// Shift an item by `(dx, dy)`.
    ///
    /// Running into a wall leaves the item where it is and reports
    /// [`MoveOutcome::Blocked`]. Asking to move an item the tank does not hold
    /// is an error: the caller's handle and the registry disagree.
    pub fn attempt_move(&mut self, id: ItemId, dx: i32, dy: i32) -> Result<MoveOutcome> {
        let from = self
            .position_of(id)
            .ok_or_else(|| Error::NotResident(id.to_string()))?;
        let target = from.add(dx, dy);

        if !self.in_bounds(target) {
            trace!(item_id = %id, from = %from, target = %target, "Boundary hit");
            return Ok(MoveOutcome::Blocked(BoundaryHit { from, target }));
        }

        self.relocate(id, target);
        Ok(MoveOutcome::Moved(target))
    }

    /// Drop one row, staying put on the floor
    pub fn sink(&mut self, id: ItemId) -> Result<()> {
        self.attempt_move(id, 0, 1)?;
        Ok(())
    }

    /// Rise one row, staying put at the surface
    pub fn float_up(&mut self, id: ItemId) -> Result<()> {
        self.attempt_move(id, 0, -1)?;
        Ok(())
    }
}
