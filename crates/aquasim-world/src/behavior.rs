//! Per-species turn logic.

use crate::tank::Tank;
use aquasim_core::{Error, ItemId, Result, Species};
use rand::Rng;
use tracing::{debug, trace};

/// Predators die outright in water colder than this
pub const PREDATOR_MIN_TEMPERATURE: f64 = 15.0;

/// Take one turn for the resident item `id`
pub fn act<R: Rng + ?Sized>(tank: &mut Tank, id: ItemId, rng: &mut R) -> Result<()> {
    let (species, alive) = {
        let item = tank
            .get(id)
            .ok_or_else(|| Error::NotResident(id.to_string()))?;
        (item.species(), item.is_alive())
    };

    match species {
        Species::Food => tank.sink(id),
        Species::Clockwork => swim(tank, id, rng),
        Species::Predator if alive => {
            if tank.temperature().current() < PREDATOR_MIN_TEMPERATURE {
                if let Some(item) = tank.get_mut(id) {
                    item.kill();
                }
                debug!(
                    event = "cold_death",
                    item_id = %id,
                    temperature = tank.temperature().current(),
                    "Predator died of cold"
                );
                Ok(())
            } else {
                live(tank, id, rng)
            }
        }
        Species::Snail | Species::Surfacer | Species::Diver if alive => live(tank, id, rng),
        Species::Snail => tank.sink(id),
        Species::Surfacer | Species::Diver | Species::Predator => tank.float_up(id),
    }
}

/// Breathe, feed, swim
fn live<R: Rng + ?Sized>(tank: &mut Tank, id: ItemId, rng: &mut R) -> Result<()> {
    if let Some(item) = tank.get_mut(id) {
        item.breathe();
        if !item.is_alive() {
            debug!(event = "starved", item_id = %id, species = %item.species(), "Animal ran out of energy");
        }
    }
    feed(tank, id);
    swim(tank, id, rng)
}

/// Eat the first co-located item the diet allows, if any.
/// Returns the species eaten.
pub fn feed(tank: &mut Tank, id: ItemId) -> Option<Species> {
    let meal = {
        let eater = tank.get(id)?;
        tank.occupants_with(id).into_iter().find(|other| {
            tank.get(*other)
                .map_or(false, |item| eater.eats(item.species()))
        })?
    };

    let eaten = tank.remove(meal)?;
    let gained = eaten.energy().unwrap_or(0);
    if let Some(eater) = tank.get_mut(id) {
        eater.add_energy(gained);
    }

    debug!(
        event = "fed",
        item_id = %id,
        meal_id = %meal,
        meal = %eaten.species(),
        energy_gained = gained,
        "Item fed"
    );
    Some(eaten.species())
}

/// One step of mobile course keeping.
///
/// A first draw below `reversal` turns the item around and ends the turn.
/// Otherwise a second draw picks forward-up (below `upward`), forward-down
/// (at or above `1 - downward`) or straight ahead, with the upward test taking
/// priority when the two ranges overlap. Hitting a wall turns the item around.
pub fn swim<R: Rng + ?Sized>(tank: &mut Tank, id: ItemId, rng: &mut R) -> Result<()> {
    let item = tank
        .get(id)
        .ok_or_else(|| Error::NotResident(id.to_string()))?;
    let Some(mobile) = item.mobile().copied() else {
        return Ok(());
    };

    if rng.gen::<f64>() < mobile.reversal() {
        reverse(tank, id);
        return Ok(());
    }

    let m: f64 = rng.gen();
    let dy = if m < mobile.upward() {
        -1
    } else if m >= 1.0 - mobile.downward() {
        1
    } else {
        0
    };

    if tank.attempt_move(id, mobile.direction().dx(), dy)?.is_blocked() {
        reverse(tank, id);
    }
    Ok(())
}

fn reverse(tank: &mut Tank, id: ItemId) {
    if let Some(mobile) = tank.get_mut(id).and_then(|item| item.mobile_mut()) {
        mobile.reverse();
        trace!(item_id = %id, direction = ?mobile.direction(), "Reversed");
    }
}
