//! Single-key commands typed at the runner.

use aquasim_core::{Result, Species};
use aquasim_world::Simulation;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Spawn(Species),
    Cool,
    Warm,
    RemoveDead,
    Empty,
    Quit,
}

/// Whether the run loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

impl Command {
    pub fn from_key(key: char) -> Option<Self> {
        let command = match key {
            's' => Command::Spawn(Species::Surfacer),
            'd' => Command::Spawn(Species::Diver),
            'p' => Command::Spawn(Species::Predator),
            'c' => Command::Spawn(Species::Clockwork),
            'z' => Command::Spawn(Species::Snail),
            'f' => Command::Spawn(Species::Food),
            '[' => Command::Cool,
            ']' => Command::Warm,
            'r' => Command::RemoveDead,
            'e' => Command::Empty,
            'q' => Command::Quit,
            _ => return None,
        };
        Some(command)
    }
}

pub fn apply(sim: &mut Simulation, command: Command) -> Result<Flow> {
    debug!(?command, "applying command");

    match command {
        Command::Spawn(species) => {
            sim.spawn(species)?;
        }
        Command::Cool => sim.cool(),
        Command::Warm => sim.warm(),
        Command::RemoveDead => {
            let purged = sim.remove_dead();
            debug!(purged, "removed dead animals");
        }
        Command::Empty => sim.clear(),
        Command::Quit => return Ok(Flow::Quit),
    }

    Ok(Flow::Continue)
}

/// Apply every recognised key in `line`, stopping at a quit
pub fn apply_line(sim: &mut Simulation, line: &str) -> Result<Flow> {
    for command in line.chars().filter_map(Command::from_key) {
        if apply(sim, command)? == Flow::Quit {
            return Ok(Flow::Quit);
        }
    }
    Ok(Flow::Continue)
}
