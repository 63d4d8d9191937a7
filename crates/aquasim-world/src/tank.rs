//! The tank: a bounded grid and the registry of items living in it.

use crate::item::Item;
use crate::temperature::Temperature;
use aquasim_core::{Error, ItemId, Position, Result, TankConfig};
use rand::Rng;
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, trace};

/// A bounded 2D grid holding any number of items per cell.
///
/// Every key in `cells` maps to a non-empty bucket, every resident appears in
/// exactly one bucket, and `locations` mirrors the bucket that holds it.
#[derive(Debug, Clone)]
pub struct Tank {
    width: i32,
    height: i32,
    temperature: Temperature,
    cells: BTreeMap<Position, Vec<ItemId>>,
    items: HashMap<ItemId, Item>,
    locations: HashMap<ItemId, Position>,
}

impl Tank {
    pub fn new(config: &TankConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            width: config.width,
            height: config.height,
            temperature: Temperature::new(config.initial_temperature),
            cells: BTreeMap::new(),
            items: HashMap::new(),
            locations: HashMap::new(),
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn temperature(&self) -> &Temperature {
        &self.temperature
    }

    pub fn temperature_mut(&mut self) -> &mut Temperature {
        &mut self.temperature
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.within(self.width, self.height)
    }

    /// Put an item in the tank.
    ///
    /// A missing `x` is drawn uniformly across the tank and a missing `y`
    /// defaults to the surface row. An item already resident under the same
    /// id is taken out of its old cell first.
    pub fn place<R: Rng + ?Sized>(
        &mut self,
        item: Item,
        x: Option<i32>,
        y: Option<i32>,
        rng: &mut R,
    ) -> Result<ItemId> {
        let x = match x {
            Some(x) => x,
            None => rng.gen_range(0..self.width),
        };
        self.place_at(item, Position::new(x, y.unwrap_or(0)))
    }

    /// Put an item in the tank at an exact cell
    pub fn place_at(&mut self, item: Item, pos: Position) -> Result<ItemId> {
        if !self.in_bounds(pos) {
            return Err(Error::Validation(format!(
                "position {} outside {}x{} tank",
                pos, self.width, self.height
            )));
        }

        let id = item.id();
        self.detach(id);
        self.items.insert(id, item);
        self.attach(id, pos);

        debug!(item_id = %id, position = %pos, "Item placed");
        Ok(id)
    }

    /// Take an item out of the tank, handing back its record.
    /// Returns `None` if the item is not resident.
    pub fn remove(&mut self, id: ItemId) -> Option<Item> {
        self.detach(id);
        self.items.remove(&id)
    }

    /// Every other item sharing `id`'s cell, in bucket order
    pub fn occupants_with(&self, id: ItemId) -> Vec<ItemId> {
        self.locations
            .get(&id)
            .and_then(|pos| self.cells.get(pos))
            .map(|bucket| bucket.iter().copied().filter(|&other| other != id).collect())
            .unwrap_or_default()
    }

    pub fn resident_count(&self) -> usize {
        self.cells.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn clear(&mut self) {
        self.cells.clear();
        self.items.clear();
        self.locations.clear();
    }

    /// Remove every animal that has run out of energy.
    /// Returns the purged records.
    pub fn remove_dead(&mut self) -> Vec<Item> {
        let dead: Vec<ItemId> = self
            .residents()
            .into_iter()
            .filter(|id| {
                self.items
                    .get(id)
                    .map_or(false, |item| item.is_animal() && !item.is_alive())
            })
            .collect();

        let purged: Vec<Item> = dead.into_iter().filter_map(|id| self.remove(id)).collect();
        debug!(event = "dead_purged", count = purged.len(), "Removed dead animals");
        purged
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.locations.contains_key(&id)
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.get(&id)
    }

    pub fn get_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.items.get_mut(&id)
    }

    pub fn position_of(&self, id: ItemId) -> Option<Position> {
        self.locations.get(&id).copied()
    }

    /// Flat view of every resident, cell by cell in insertion order
    pub fn residents(&self) -> Vec<ItemId> {
        self.cells.values().flatten().copied().collect()
    }

    /// Iterator over occupied cells with their ordered occupants
    pub fn iter_cells(&self) -> impl Iterator<Item = (Position, &[ItemId])> + '_ {
        self.cells.iter().map(|(pos, bucket)| (*pos, bucket.as_slice()))
    }

    /// First item in a cell, the one a renderer shows
    pub fn top_occupant(&self, pos: Position) -> Option<&Item> {
        self.cells
            .get(&pos)
            .and_then(|bucket| bucket.first())
            .and_then(|id| self.items.get(id))
    }

    /// Move a resident's bucket entry without touching its record
    pub(crate) fn relocate(&mut self, id: ItemId, pos: Position) {
        self.detach(id);
        self.attach(id, pos);
        trace!(item_id = %id, position = %pos, "Item relocated");
    }

    fn attach(&mut self, id: ItemId, pos: Position) {
        self.cells.entry(pos).or_default().push(id);
        self.locations.insert(id, pos);
    }

    fn detach(&mut self, id: ItemId) {
        let Some(pos) = self.locations.remove(&id) else {
            return;
        };
        if let Some(bucket) = self.cells.get_mut(&pos) {
            bucket.retain(|&other| other != id);
            if bucket.is_empty() {
                self.cells.remove(&pos);
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn assert_consistent(&self) {
        let mut seen = std::collections::HashSet::new();
        for (pos, bucket) in &self.cells {
            assert!(!bucket.is_empty(), "empty bucket left at {pos}");
            assert!(self.in_bounds(*pos), "bucket outside tank at {pos}");
            for id in bucket {
                assert!(seen.insert(*id), "item {id} held by more than one bucket");
                assert_eq!(self.locations.get(id), Some(pos));
                assert!(self.items.contains_key(id));
            }
        }
        assert_eq!(seen.len(), self.locations.len());
        assert_eq!(seen.len(), self.items.len());
    }
}
