//! Two-row text glyphs for every (species, facing, alive) combination.

use crate::item::Item;
use aquasim_core::{Direction, Species};

/// Columns in every glyph row
pub const GLYPH_WIDTH: usize = 5;
/// Rows in every glyph
pub const GLYPH_HEIGHT: usize = 2;

pub type Glyph = [&'static str; GLYPH_HEIGHT];

const FOOD: Glyph = ["     ", " === "];

const SNAIL_WEST: Glyph = ["oo   ", "[_(@)"];
const SNAIL_WEST_DEAD: Glyph = ["xx   ", "[_(@)"];
const SNAIL_EAST: Glyph = ["   oo", "(@)_]"];
const SNAIL_EAST_DEAD: Glyph = ["   xx", "(@)_]"];

const SURFACER_WEST: Glyph = [r"/o \/", r")__/\"];
const SURFACER_EAST: Glyph = [r"\/ o\", r"/\__("];

const DIVER_WEST: Glyph = [r"/- \/", r")__/\"];
const DIVER_EAST: Glyph = [r"\/ -\", r"/\__("];

const FISH_WEST_DEAD: Glyph = [r"/  \/", r"\x_/\"];
const FISH_EAST_DEAD: Glyph = [r"\/  \", r"/\_x/"];

const PREDATOR_WEST: Glyph = [r"/o \/", r"::_/\"];
const PREDATOR_WEST_DEAD: Glyph = [r":: \/", r"\x_/\"];
const PREDATOR_EAST: Glyph = [r"\/ o\", r"/\_::"];
const PREDATOR_EAST_DEAD: Glyph = [r"\/ ::", r"/\_x/"];

const CLOCKWORK_WEST: Glyph = [r"/+]\/", r"\__/\"];
const CLOCKWORK_EAST: Glyph = [r"\/[+\", r"/\__/"];

/// Look up the glyph for a species facing `direction`.
/// Food ignores facing; food and clockwork ignore `alive`.
pub fn glyph(species: Species, direction: Direction, alive: bool) -> Glyph {
    use Direction::{East, West};

    match (species, direction, alive) {
        (Species::Food, _, _) => FOOD,

        (Species::Snail, West, true) => SNAIL_WEST,
        (Species::Snail, West, false) => SNAIL_WEST_DEAD,
        (Species::Snail, East, true) => SNAIL_EAST,
        (Species::Snail, East, false) => SNAIL_EAST_DEAD,

        (Species::Surfacer, West, true) => SURFACER_WEST,
        (Species::Surfacer, East, true) => SURFACER_EAST,
        (Species::Diver, West, true) => DIVER_WEST,
        (Species::Diver, East, true) => DIVER_EAST,
        (Species::Surfacer | Species::Diver, West, false) => FISH_WEST_DEAD,
        (Species::Surfacer | Species::Diver, East, false) => FISH_EAST_DEAD,

        (Species::Predator, West, true) => PREDATOR_WEST,
        (Species::Predator, West, false) => PREDATOR_WEST_DEAD,
        (Species::Predator, East, true) => PREDATOR_EAST,
        (Species::Predator, East, false) => PREDATOR_EAST_DEAD,

        (Species::Clockwork, West, _) => CLOCKWORK_WEST,
        (Species::Clockwork, East, _) => CLOCKWORK_EAST,
    }
}

impl Item {
    /// Glyph reflecting this item's current facing and alive state
    pub fn glyph(&self) -> Glyph {
        glyph(
            self.species(),
            self.direction().unwrap_or(Direction::East),
            self.is_alive(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_glyph_is_two_by_five() {
        for species in Species::all() {
            for direction in [Direction::East, Direction::West] {
                for alive in [true, false] {
                    let rows = glyph(species, direction, alive);
                    assert_eq!(rows.len(), GLYPH_HEIGHT);
                    for row in rows {
                        assert_eq!(
                            row.chars().count(),
                            GLYPH_WIDTH,
                            "{species} {direction:?} alive={alive}: {row:?}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_facing_selects_mirrored_variant() {
        for species in [
            Species::Snail,
            Species::Surfacer,
            Species::Diver,
            Species::Predator,
            Species::Clockwork,
        ] {
            assert_ne!(
                glyph(species, Direction::East, true),
                glyph(species, Direction::West, true)
            );
        }
        assert_eq!(
            glyph(Species::Food, Direction::East, true),
            glyph(Species::Food, Direction::West, true)
        );
    }

    #[test]
    fn test_item_glyph_tracks_state() {
        let mut snail = Item::snail(Direction::West);
        assert_eq!(snail.glyph(), SNAIL_WEST);
        snail.kill();
        assert_eq!(snail.glyph(), SNAIL_WEST_DEAD);
        snail.reverse();
        assert_eq!(snail.glyph(), SNAIL_EAST_DEAD);

        let mut toy = Item::clockwork(Direction::East);
        assert_eq!(toy.glyph(), CLOCKWORK_EAST);
        toy.kill();
        assert_eq!(toy.glyph(), CLOCKWORK_EAST);

        assert_eq!(Item::food(10).glyph(), FOOD);
    }
}
