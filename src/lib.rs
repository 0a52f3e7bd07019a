//! # wildfire_engine
//!
//! A discrete-time cellular automaton of wildfire spread on a square grid,
//! following a variant of the Shiflet forest-fire model.

pub mod simulation;
pub use simulation::Simulation;
pub use simulation::SimulationState;

pub mod cell;
pub use cell::Cell;
pub use cell::FireAge;

pub mod config;
pub use config::ConfigError;
pub use config::SimulationConfig;

pub mod grid;
pub use grid::Grid;

mod replay;
