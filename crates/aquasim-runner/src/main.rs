//! Interactive and headless runner for the fish tank simulation.

mod command;
mod render;
mod telemetry;

use anyhow::{Context, Result};
use aquasim_core::RunnerConfig;
use aquasim_world::Simulation;
use command::Flow;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::signal;
use tokio::time::{interval, Duration, MissedTickBehavior};
use tracing::{error, info};

const CONFIG_ENV: &str = "AQUASIM_CONFIG";
const SEED_ENV: &str = "AQUASIM_SEED";
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = load_config().await?;

    telemetry::init_telemetry(config.log_format)?;

    info!(
        seed = config.simulation.seed,
        width = config.simulation.tank.width,
        height = config.simulation.tank.height,
        "Starting aquasim"
    );

    let mut sim = Simulation::new(config.simulation.clone())?;
    for species in &config.initial_population {
        sim.spawn(*species)?;
    }

    let outcome = match config.max_cycles {
        Some(cycles) => run_headless(&mut sim, cycles),
        None => run_interactive(&mut sim, &config).await,
    };

    if let Err(e) = &outcome {
        error!(cycle = sim.cycle(), "Simulation aborted: {:#}", e);
    }
    info!(cycles = sim.cycle(), "Shutting down");
    outcome
}

async fn load_config() -> Result<RunnerConfig> {
    let mut config = match std::env::var(CONFIG_ENV) {
        Ok(path) => {
            let json = tokio::fs::read_to_string(&path)
                .await
                .with_context(|| format!("reading config file {path}"))?;
            RunnerConfig::from_json(&json).with_context(|| format!("parsing config file {path}"))?
        }
        Err(_) => RunnerConfig::default(),
    };

    if let Ok(seed) = std::env::var(SEED_ENV) {
        config.simulation.seed = seed
            .parse()
            .with_context(|| format!("{SEED_ENV} must be an unsigned integer"))?;
    }

    Ok(config)
}

fn run_headless(sim: &mut Simulation, cycles: u64) -> Result<()> {
    let census = sim.run(cycles)?;
    println!("{}", serde_json::to_string_pretty(&census)?);
    Ok(())
}

async fn run_interactive(sim: &mut Simulation, config: &RunnerConfig) -> Result<()> {
    let mut ticker = interval(Duration::from_millis(config.cycle_interval_ms.max(1)));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick completes immediately; show the initial tank instead
    ticker.tick().await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut input_open = true;

    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    draw(sim);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                sim.run_cycle()?;
                draw(sim);
            }
            line = lines.next_line(), if input_open => {
                match line? {
                    Some(line) => {
                        let flow = command::apply_line(sim, &line)?;
                        draw(sim);
                        if flow == Flow::Quit {
                            break;
                        }
                    }
                    None => {
                        info!("Input closed, continuing without commands");
                        input_open = false;
                    }
                }
            }
            _ = &mut shutdown => break,
        }
    }

    Ok(())
}

fn draw(sim: &Simulation) {
    println!("{CLEAR_SCREEN}{}", render::render(sim.tank()));
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
