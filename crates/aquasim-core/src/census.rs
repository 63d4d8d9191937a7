//! Population snapshots for logging and reporting.

use crate::types::Species;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Living and dead counts for one species
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesCount {
    pub alive: u32,
    pub dead: u32,
}

/// Point-in-time summary of a tank
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Census {
    /// Number of cycles completed when the snapshot was taken
    pub cycle: u64,
    /// Water temperature (degrees)
    pub temperature: f64,
    /// Total items resident, corpses included
    pub residents: usize,
    /// Per-species counts; species with no residents are omitted
    pub species: BTreeMap<Species, SpeciesCount>,
}

impl Census {
    pub fn new(cycle: u64, temperature: f64) -> Self {
        Self {
            cycle,
            temperature,
            ..Default::default()
        }
    }

    /// Count one resident item
    pub fn record(&mut self, species: Species, alive: bool) {
        let count = self.species.entry(species).or_default();
        if alive {
            count.alive += 1;
        } else {
            count.dead += 1;
        }
        self.residents += 1;
    }

    pub fn count(&self, species: Species) -> SpeciesCount {
        self.species.get(&species).copied().unwrap_or_default()
    }

    /// Living animals across every species (food and clockwork excluded)
    pub fn animals_alive(&self) -> u32 {
        self.species
            .iter()
            .filter(|(species, _)| species.is_animal())
            .map(|(_, count)| count.alive)
            .sum()
    }

    pub fn corpses(&self) -> u32 {
        self.species.values().map(|count| count.dead).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_census_counts() {
        let mut census = Census::new(3, 16.5);
        census.record(Species::Snail, true);
        census.record(Species::Snail, false);
        census.record(Species::Food, true);
        census.record(Species::Clockwork, true);
        census.record(Species::Predator, true);

        assert_eq!(census.residents, 5);
        assert_eq!(census.count(Species::Snail), SpeciesCount { alive: 1, dead: 1 });
        assert_eq!(census.count(Species::Diver), SpeciesCount::default());
        assert_eq!(census.animals_alive(), 2);
        assert_eq!(census.corpses(), 1);
    }

    #[test]
    fn test_census_json_shape() {
        let mut census = Census::new(10, 17.0);
        census.record(Species::Diver, true);

        let json = serde_json::to_value(&census).unwrap();
        assert_eq!(json["cycle"], 10);
        assert_eq!(json["residents"], 1);
        assert_eq!(json["species"]["Diver"]["alive"], 1);
    }
}
