//! Item state: identity plus the capability components a species combines.

use aquasim_core::{Direction, ItemId, Species};
use rand::Rng;

/// Starting energy of a snail
pub const SNAIL_ENERGY: u32 = 120;
/// Starting energy of a surfacer
pub const SURFACER_ENERGY: u32 = 300;
/// Starting energy of a diver
pub const DIVER_ENERGY: u32 = 180;
/// Starting energy of a predator
pub const PREDATOR_ENERGY: u32 = 180;
/// Default energy stored in a lump of food
pub const FOOD_ENERGY: u32 = 10;

const GRAZER_DIET: &[Species] = &[Species::Food];
const PREDATOR_DIET: &[Species] = &[Species::Food, Species::Surfacer, Species::Diver];

/// Stored nutritional value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Organic {
    pub energy: u32,
}

/// What an animal is allowed to eat
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Animal {
    diet: &'static [Species],
}

impl Animal {
    pub fn diet(&self) -> &'static [Species] {
        self.diet
    }

    pub fn eats(&self, species: Species) -> bool {
        self.diet.contains(&species)
    }
}

/// Facing plus the course-change probabilities, fixed once created
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mobile {
    direction: Direction,
    reversal: f64,
    upward: f64,
    downward: f64,
}

impl Mobile {
    pub(crate) fn new(direction: Direction, reversal: f64, upward: f64, downward: f64) -> Self {
        debug_assert!([reversal, upward, downward]
            .iter()
            .all(|p| (0.0..1.0).contains(p)));
        Self {
            direction,
            reversal,
            upward,
            downward,
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn reversal(&self) -> f64 {
        self.reversal
    }

    pub fn upward(&self) -> f64 {
        self.upward
    }

    pub fn downward(&self) -> f64 {
        self.downward
    }

    pub fn reverse(&mut self) {
        self.direction = self.direction.reversed();
    }
}

/// Anything that can occupy a tank cell and act once per cycle.
///
/// Species are expressed by which components are present rather than by a
/// type hierarchy: food is organic only, the grazers and the predator are
/// organic animals that move, and clockwork fish only move.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    id: ItemId,
    species: Species,
    organic: Option<Organic>,
    animal: Option<Animal>,
    mobile: Option<Mobile>,
}

impl Item {
    pub fn food(energy: u32) -> Self {
        Self {
            id: ItemId::new(),
            species: Species::Food,
            organic: Some(Organic { energy }),
            animal: None,
            mobile: None,
        }
    }

    pub fn snail(direction: Direction) -> Self {
        Self::creature(
            Species::Snail,
            SNAIL_ENERGY,
            GRAZER_DIET,
            Mobile::new(direction, 0.1, 0.2, 0.2),
        )
    }

    pub fn surfacer(direction: Direction) -> Self {
        Self::creature(
            Species::Surfacer,
            SURFACER_ENERGY,
            GRAZER_DIET,
            Mobile::new(direction, 0.1, 0.3, 0.1),
        )
    }

    pub fn diver(direction: Direction) -> Self {
        Self::creature(
            Species::Diver,
            DIVER_ENERGY,
            GRAZER_DIET,
            Mobile::new(direction, 0.1, 0.1, 0.3),
        )
    }

    pub fn predator(direction: Direction) -> Self {
        Self::creature(
            Species::Predator,
            PREDATOR_ENERGY,
            PREDATOR_DIET,
            Mobile::new(direction, 0.1, 0.2, 0.2),
        )
    }

    pub fn clockwork(direction: Direction) -> Self {
        Self {
            id: ItemId::new(),
            species: Species::Clockwork,
            organic: None,
            animal: None,
            mobile: Some(Mobile::new(direction, 0.0, 0.25, 0.25)),
        }
    }

    /// Create a fresh item of the given species facing a random direction
    pub fn spawn<R: Rng + ?Sized>(species: Species, food_energy: u32, rng: &mut R) -> Self {
        match species {
            Species::Food => Self::food(food_energy),
            Species::Snail => Self::snail(Direction::random(rng)),
            Species::Surfacer => Self::surfacer(Direction::random(rng)),
            Species::Diver => Self::diver(Direction::random(rng)),
            Species::Predator => Self::predator(Direction::random(rng)),
            Species::Clockwork => Self::clockwork(Direction::random(rng)),
        }
    }

    pub(crate) fn creature(
        species: Species,
        energy: u32,
        diet: &'static [Species],
        mobile: Mobile,
    ) -> Self {
        Self {
            id: ItemId::new(),
            species,
            organic: Some(Organic { energy }),
            animal: Some(Animal { diet }),
            mobile: Some(mobile),
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn species(&self) -> Species {
        self.species
    }

    pub fn animal(&self) -> Option<&Animal> {
        self.animal.as_ref()
    }

    pub fn mobile(&self) -> Option<&Mobile> {
        self.mobile.as_ref()
    }

    pub(crate) fn mobile_mut(&mut self) -> Option<&mut Mobile> {
        self.mobile.as_mut()
    }

    /// Stored energy, or `None` for items that carry none
    pub fn energy(&self) -> Option<u32> {
        self.organic.map(|o| o.energy)
    }

    pub fn direction(&self) -> Option<Direction> {
        self.mobile.map(|m| m.direction)
    }

    pub fn is_animal(&self) -> bool {
        self.animal.is_some()
    }

    /// Animals live while they hold energy; everything else never dies
    pub fn is_alive(&self) -> bool {
        match (&self.animal, &self.organic) {
            (Some(_), Some(organic)) => organic.energy > 0,
            _ => true,
        }
    }

    /// True when this item would eat an item of `species`
    pub fn eats(&self, species: Species) -> bool {
        self.animal.map_or(false, |a| a.eats(species))
    }

    /// Spend one unit of energy. No effect once energy is exhausted.
    pub fn breathe(&mut self) {
        if let Some(organic) = self.organic.as_mut() {
            organic.energy = organic.energy.saturating_sub(1);
        }
    }

    pub fn kill(&mut self) {
        if let Some(organic) = self.organic.as_mut() {
            organic.energy = 0;
        }
    }

    pub fn add_energy(&mut self, amount: u32) {
        if let Some(organic) = self.organic.as_mut() {
            organic.energy = organic.energy.saturating_add(amount);
        }
    }

    pub fn reverse(&mut self) {
        if let Some(mobile) = self.mobile.as_mut() {
            mobile.reverse();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedRng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_food_creation() {
        let food = Item::food(FOOD_ENERGY);
        assert_eq!(food.species(), Species::Food);
        assert_eq!(food.energy(), Some(10));
        assert!(food.mobile().is_none());
        assert!(!food.is_animal());
        assert!(food.is_alive());

        let food = Item::food(42);
        assert_eq!(food.energy(), Some(42));
    }

    #[test]
    fn test_species_table() {
        let cases = [
            (Item::snail(Direction::East), SNAIL_ENERGY, (0.1, 0.2, 0.2)),
            (Item::surfacer(Direction::East), SURFACER_ENERGY, (0.1, 0.3, 0.1)),
            (Item::diver(Direction::East), DIVER_ENERGY, (0.1, 0.1, 0.3)),
            (Item::predator(Direction::East), PREDATOR_ENERGY, (0.1, 0.2, 0.2)),
        ];

        for (item, energy, (reversal, upward, downward)) in cases {
            assert!(item.is_alive());
            assert!(item.is_animal());
            assert_eq!(item.energy(), Some(energy));
            let mobile = item.mobile().unwrap();
            assert_eq!(mobile.direction(), Direction::East);
            assert_eq!(mobile.reversal(), reversal);
            assert_eq!(mobile.upward(), upward);
            assert_eq!(mobile.downward(), downward);
        }
    }

    #[test]
    fn test_diets() {
        for grazer in [
            Item::snail(Direction::West),
            Item::surfacer(Direction::West),
            Item::diver(Direction::West),
        ] {
            assert_eq!(grazer.animal().unwrap().diet(), &[Species::Food]);
        }

        let predator = Item::predator(Direction::West);
        assert_eq!(predator.animal().unwrap().diet().len(), 3);
        assert!(predator.eats(Species::Food));
        assert!(predator.eats(Species::Surfacer));
        assert!(predator.eats(Species::Diver));
        assert!(!predator.eats(Species::Snail));
        assert!(!predator.eats(Species::Predator));
        assert!(!predator.eats(Species::Clockwork));

        let clockwork = Item::clockwork(Direction::West);
        assert!(!clockwork.eats(Species::Food));
    }

    #[test]
    fn test_clockwork_has_no_metabolism() {
        let mut clockwork = Item::clockwork(Direction::East);
        assert!(clockwork.energy().is_none());
        assert!(!clockwork.is_animal());
        assert!(clockwork.is_alive());

        clockwork.kill();
        clockwork.breathe();
        assert!(clockwork.is_alive());

        let mobile = clockwork.mobile().unwrap();
        assert_eq!(mobile.reversal(), 0.0);
        assert_eq!(mobile.upward(), 0.25);
        assert_eq!(mobile.downward(), 0.25);
    }

    #[test]
    fn test_breathing_floors_at_zero() {
        let mut snail = Item::snail(Direction::East);
        for _ in 0..SNAIL_ENERGY {
            assert!(snail.is_alive());
            snail.breathe();
        }
        assert_eq!(snail.energy(), Some(0));
        assert!(!snail.is_alive());

        snail.breathe();
        assert_eq!(snail.energy(), Some(0));
    }

    #[test]
    fn test_kill_and_feed() {
        let mut predator = Item::predator(Direction::West);
        predator.kill();
        assert_eq!(predator.energy(), Some(0));
        assert!(!predator.is_alive());

        predator.add_energy(10);
        assert!(predator.is_alive());
    }

    #[test]
    fn test_reverse() {
        let mut fish = Item::diver(Direction::East);
        fish.reverse();
        assert_eq!(fish.direction(), Some(Direction::West));
        fish.reverse();
        assert_eq!(fish.direction(), Some(Direction::East));

        let mut food = Item::food(10);
        food.reverse();
        assert_eq!(food.direction(), None);
    }

    #[test]
    fn test_spawn_uses_generator_for_facing() {
        let mut rng = ScriptedRng::new(&[]).with_bools(&[true, false]);
        let first = Item::spawn(Species::Snail, FOOD_ENERGY, &mut rng);
        let second = Item::spawn(Species::Predator, FOOD_ENERGY, &mut rng);
        assert_eq!(first.direction(), Some(Direction::East));
        assert_eq!(second.direction(), Some(Direction::West));

        let food = Item::spawn(Species::Food, 25, &mut rng);
        assert_eq!(food.energy(), Some(25));
    }

    #[test]
    fn test_spawned_components_match_species() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for species in Species::all() {
            let item = Item::spawn(species, FOOD_ENERGY, &mut rng);
            assert_eq!(item.species(), species);
            assert_eq!(item.is_animal(), species.is_animal(), "{species}");
        }
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Item::food(10);
        let b = Item::food(10);
        assert_ne!(a.id(), b.id());
    }
}
