use clap::Parser;
use std::{thread, time::Duration};
use wildfire_engine::config::{validate_range, ConfigError};
use wildfire_engine::{Simulation, SimulationConfig};

/// Wildfire spread simulation on a square grid
#[derive(Parser, Debug)]
#[command(name = "wildfire")]
#[command(about = "Shiflet-style wildfire cellular automaton", long_about = None)]
struct Args {
    /// Percentage of grid cells occupied by trees (1-100)
    #[arg(short, long, default_value_t = 50)]
    density: u32,

    /// Percentage of trees initially on fire (1-100)
    #[arg(short, long, default_value_t = 10)]
    burning_fraction: u32,

    /// Percent chance that a qualifying tree ignites per cycle (1-100)
    #[arg(short, long, default_value_t = 30)]
    catch_probability: u32,

    /// Minimum percentage of fire-exposed neighbors to permit ignition (0-100)
    #[arg(short, long, default_value_t = 25)]
    neighbor_threshold: u32,

    /// Number of cycles to run in non-interactive mode; 0 runs continuously
    /// until the fire goes out (0-9999)
    #[arg(short, long, default_value_t = 0)]
    print_cycles: u32,

    /// Grid size; the grid is size x size cells (5-40)
    #[arg(short, long, default_value_t = 10)]
    size: u32,

    /// Seed for the random number generator; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Delay between cycles in milliseconds
    #[arg(long, default_value_t = 500)]
    delay_ms: u64,

    /// Filename to save a JSON replay of the run to
    #[arg(long)]
    replay: Option<String>,
}

fn validate(config: &SimulationConfig, print_cycles: u32) -> Result<(), ConfigError> {
    config.validate()?;
    validate_range("print-cycles", print_cycles, 0, 9999)?;

    Ok(())
}

fn main() {
    let args = Args::parse();

    let config = SimulationConfig {
        density: args.density,
        burning_fraction: args.burning_fraction,
        catch_probability: args.catch_probability,
        neighbor_threshold: args.neighbor_threshold,
        size: args.size,
    };

    // Reject a bad configuration before any simulation state exists
    if let Err(error) = validate(&config, args.print_cycles) {
        eprintln!("{}", error);
        std::process::exit(1);
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    let mut simulation = Simulation::new(config, seed, args.replay);

    let mut state = simulation.start();
    simulation.draw();

    let mut remaining = args.print_cycles;
    while state.burning {
        // In non-interactive mode stop once the requested number of cycles
        // has been printed, even if the fire is still going
        if args.print_cycles > 0 {
            if remaining == 0 {
                break;
            }
            remaining -= 1;
        }

        // The delay is purely for animation; batch runs advance at full speed
        if args.print_cycles == 0 {
            thread::sleep(Duration::from_millis(args.delay_ms));
        }

        state = simulation.advance();
        simulation.draw();
    }

    simulation.save_replay();
}
