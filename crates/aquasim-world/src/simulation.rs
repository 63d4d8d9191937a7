//! Turn engine and the simulation facade driven by the runner.

use crate::behavior;
use crate::item::Item;
use crate::tank::Tank;
use crate::temperature::Drift;
use aquasim_core::{Census, ItemId, Result, SimulationConfig, Species};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, event, info, instrument, Level};

/// What happened during one cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleReport {
    /// Items that took their turn
    pub acted: usize,
    /// Snapshotted items removed before their turn came up
    pub skipped: usize,
    /// Temperature step applied after every item acted
    pub drift: Drift,
}

/// Advance `tank` by one time step.
///
/// Residents are snapshotted up front and each acts once against the live
/// tank, so later items see what earlier ones did. An item eaten before its
/// turn is skipped. The temperature drifts once at the end.
pub fn run_cycle<R: Rng + ?Sized>(tank: &mut Tank, rng: &mut R) -> Result<CycleReport> {
    let snapshot = tank.residents();
    let mut acted = 0;
    let mut skipped = 0;

    for id in snapshot {
        if !tank.contains(id) {
            skipped += 1;
            continue;
        }
        behavior::act(tank, id, rng)?;
        acted += 1;
    }

    let drift = tank.temperature_mut().drift(rng);

    Ok(CycleReport {
        acted,
        skipped,
        drift,
    })
}

/// Build a census of everything currently in `tank`
pub fn take_census(tank: &Tank, cycle: u64) -> Census {
    let mut census = Census::new(cycle, tank.temperature().current());
    for (_, ids) in tank.iter_cells() {
        for item in ids.iter().filter_map(|id| tank.get(*id)) {
            census.record(item.species(), item.is_alive());
        }
    }
    census
}

/// A tank paired with its own seeded random source
pub struct Simulation {
    tank: Tank,
    config: SimulationConfig,
    rng: ChaCha8Rng,
    cycle: u64,
}

impl Simulation {
    pub fn new(config: SimulationConfig) -> Result<Self> {
        let tank = Tank::new(&config.tank)?;
        let rng = ChaCha8Rng::seed_from_u64(config.seed);

        Ok(Self {
            tank,
            config,
            rng,
            cycle: 0,
        })
    }

    pub fn tank(&self) -> &Tank {
        &self.tank
    }

    /// Cycles completed so far
    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    /// Place an item; see [`Tank::place`] for how missing coordinates are filled
    pub fn place(&mut self, item: Item, x: Option<i32>, y: Option<i32>) -> Result<ItemId> {
        self.tank.place(item, x, y, &mut self.rng)
    }

    /// Create a new item of `species` and drop it in at the surface
    pub fn spawn(&mut self, species: Species) -> Result<ItemId> {
        let item = Item::spawn(species, self.config.tank.food_energy, &mut self.rng);
        let id = self.place(item, None, None)?;
        debug!(event = "spawned", item_id = %id, species = %species, "Item spawned");
        Ok(id)
    }

    pub fn remove(&mut self, id: ItemId) -> Option<Item> {
        self.tank.remove(id)
    }

    /// Purge every dead animal, returning how many were removed
    pub fn remove_dead(&mut self) -> usize {
        self.tank.remove_dead().len()
    }

    pub fn clear(&mut self) {
        self.tank.clear();
        info!(event = "tank_emptied", cycle = self.cycle, "Tank emptied");
    }

    pub fn resident_count(&self) -> usize {
        self.tank.resident_count()
    }

    pub fn warm(&mut self) {
        self.tank.temperature_mut().warm();
    }

    pub fn cool(&mut self) {
        self.tank.temperature_mut().cool();
    }

    pub fn current_temperature(&self) -> f64 {
        self.tank.temperature().current()
    }

    pub fn census(&self) -> Census {
        take_census(&self.tank, self.cycle)
    }

    /// Advance the simulation by one turn
    pub fn run_cycle(&mut self) -> Result<CycleReport> {
        let report = run_cycle(&mut self.tank, &mut self.rng)?;
        self.cycle += 1;

        event!(
            Level::TRACE,
            cycle = self.cycle,
            acted = report.acted,
            skipped = report.skipped,
            drift = ?report.drift,
            "Cycle complete"
        );

        let interval = self.config.census_interval;
        if interval > 0 && self.cycle % interval == 0 {
            self.emit_census();
        }

        Ok(report)
    }

    /// Run `cycles` turns back to back and return the final census
    #[instrument(skip(self), fields(seed = self.config.seed))]
    pub fn run(&mut self, cycles: u64) -> Result<Census> {
        info!("Starting simulation for {} cycles", cycles);

        for _ in 0..cycles {
            self.run_cycle()?;
        }

        let census = self.census();
        info!(
            event = "run_summary",
            cycles = self.cycle,
            residents = census.residents,
            animals_alive = census.animals_alive(),
            corpses = census.corpses(),
            temperature = format!("{:.1}", census.temperature),
            "Simulation run complete"
        );
        Ok(census)
    }

    fn emit_census(&self) {
        let census = self.census();
        info!(
            event = "census",
            cycle = census.cycle,
            residents = census.residents,
            animals_alive = census.animals_alive(),
            corpses = census.corpses(),
            temperature = format!("{:.1}", census.temperature),
            "Population snapshot"
        );

        for (species, count) in &census.species {
            event!(
                Level::DEBUG,
                gauge_name = "species_alive",
                species = %species,
                alive = count.alive,
                dead = count.dead,
                cycle = census.cycle,
                "Species gauge"
            );
        }
    }
}
