use crate::cell::{Cell, FireAge};
use crate::config::SimulationConfig;
use crate::grid::Grid;
use crate::replay::{create_replay_logger, ReplayLogger};
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

/// The wildfire simulation.
/// Main entry point for running the model.
pub struct Simulation {
    grid: Grid,
    config: SimulationConfig,
    cycle: usize,
    changes: usize,
    cumulative_changes: usize,
    started: bool,
    replay_logger: Box<dyn ReplayLogger>,
    rng: StdRng,
}

/// Represents the state of the simulation after a cycle.
///
/// This is everything the driver needs to render a frame: the full cell
/// snapshot plus the running counters and the continue/stop flag.
pub struct SimulationState {
    /// The number of completed `advance` calls.
    pub cycle: usize,
    /// The number of cells that changed state during the last cycle.
    pub changes: usize,
    /// The number of cells that changed state since the simulation started.
    pub cumulative_changes: usize,
    /// Whether any cell is still on fire. `false` means quiescence: further
    /// cycles will never change the grid again.
    pub burning: bool,
    /// The grid dimension; the snapshot holds `size * size` cells.
    pub size: usize,
    /// The full grid snapshot in row-major order.
    pub cells: Vec<Cell>,
}

impl Simulation {
    /// Creates a new simulation.
    ///
    /// # Arguments
    /// * `config` - The simulation parameters. Expected to be validated by
    ///   the caller; the engine does not enforce ranges itself.
    /// * `seed` - The seed for the random number generator.
    /// * `replay_filename` - The filename to save the replay of the run to.
    ///   If `None`, no replay will be saved.
    pub fn new(config: SimulationConfig, seed: u64, replay_filename: Option<String>) -> Simulation {
        let size = config.size as usize;

        Simulation {
            grid: Grid::new(size),
            config: config.clone(),
            cycle: 0,
            changes: 0,
            cumulative_changes: 0,
            started: false,
            replay_logger: create_replay_logger(replay_filename, config),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates a simulation over an already populated grid.
    ///
    /// Skips the stochastic seeding entirely, which makes hand-built
    /// scenarios reproducible cell for cell. The simulation is immediately
    /// ready to `advance`.
    pub fn from_grid(grid: Grid, config: SimulationConfig, seed: u64) -> Simulation {
        Simulation {
            grid,
            config,
            cycle: 0,
            changes: 0,
            cumulative_changes: 0,
            started: true,
            replay_logger: create_replay_logger(None, SimulationConfig::default()),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Starts the simulation by seeding the grid.
    ///
    /// Must be called once before advancing the simulation. Populates a fresh
    /// grid with trees up to the configured density, then sets the configured
    /// fraction of them on fire.
    pub fn start(&mut self) -> SimulationState {
        self.cycle = 0;
        self.changes = 0;
        self.cumulative_changes = 0;
        self.started = true;
        self.grid = Grid::new(self.config.size as usize);
        self.replay_logger.clear();

        let tree_count = self.populate_trees();
        self.ignite_initial_trees(tree_count);

        self.log_cycle();

        // Compute the initial simulation state
        self.state()
    }

    /// Advances the simulation by one cycle.
    ///
    /// Every cell transitions based on the state before this cycle began, so
    /// no cell's update can be influenced by another cell's update within the
    /// same cycle. Returns the new state; its `burning` flag is `false` once
    /// no fires remain and the grid will never change again.
    pub fn advance(&mut self) -> SimulationState {
        if !self.started {
            panic!("Simulation has not started! Call `start` to start the simulation.");
        }

        self.cycle += 1;
        self.changes = 0;

        // Transitions are computed against an immutable snapshot of the
        // previous cycle and written into a fresh grid, so the update is
        // synchronous and independent of traversal order.
        let snapshot = self.grid.clone();
        let mut next = snapshot.clone();

        for row in 0..snapshot.size() {
            for col in 0..snapshot.size() {
                match snapshot.get(row, col) {
                    Cell::Empty | Cell::Burnt => {}
                    Cell::Burning(FireAge::First) => {
                        next.set(row, col, Cell::Burning(FireAge::Second));
                    }
                    Cell::Burning(FireAge::Second) => {
                        // A fire always burns out after its second cycle
                        next.set(row, col, Cell::Burnt);
                        self.changes += 1;
                    }
                    Cell::Tree => {
                        if self.ignites(&snapshot, row, col) {
                            next.set(row, col, Cell::Burning(FireAge::First));
                            self.changes += 1;
                        }
                    }
                }
            }
        }

        self.grid = next;
        self.cumulative_changes += self.changes;

        self.log_cycle();

        let state = self.state();

        // Once the fire is out the grid can never change again, so the
        // replay is complete
        if !state.burning {
            self.replay_logger.save();
        }

        state
    }

    /// Saves the replay of the run so far, if replay logging is enabled.
    ///
    /// `advance` saves automatically when the fire goes out; drivers that
    /// stop at a cycle budget call this to keep the truncated run.
    pub fn save_replay(&self) {
        self.replay_logger.save();
    }

    /// Draws the simulation to the console.
    pub fn draw(&self) {
        self.grid
            .draw(self.cycle, self.changes, self.cumulative_changes);
    }

    fn ignites(&mut self, snapshot: &Grid, row: usize, col: usize) -> bool {
        let (trees, fires) = snapshot.neighbor_counts(row, col);

        // Without any tree or fire neighbors the exposure ratio is undefined,
        // which means ignition is impossible
        let fire_ratio = if trees + fires > 0 {
            fires as f64 / (trees + fires) as f64
        } else {
            0.0
        };

        let roll = self.rng.gen_range(0..100);

        fire_ratio > self.config.neighbor_threshold as f64 / 100.0
            && roll < self.config.catch_probability
    }

    fn populate_trees(&mut self) -> usize {
        let size = self.grid.size();
        let cells = size * size;

        // Every cell can be claimed at most once, so a target beyond the
        // cell count clamps to it rather than spinning on the re-roll loop
        let tree_count = (cells as f64 * self.config.density as f64 / 100.0)
            .round()
            .min(cells as f64) as usize;

        // Claim random cells until the target is reached, re-rolling any cell
        // that already holds a tree
        let mut remaining = tree_count;
        while remaining > 0 {
            let row = self.rng.gen_range(0..size);
            let col = self.rng.gen_range(0..size);

            if self.grid.get(row, col) == Cell::Empty {
                self.grid.set(row, col, Cell::Tree);
                remaining -= 1;
            }
        }

        tree_count
    }

    fn ignite_initial_trees(&mut self, tree_count: usize) {
        let size = self.grid.size();
        // Clamped for the same reason as the tree target: there are only
        // `tree_count` trees to set on fire
        let mut remaining = (tree_count as f64 * self.config.burning_fraction as f64 / 100.0)
            .round()
            .min(tree_count as f64) as usize;

        // Pick random cells until enough trees have been set on fire,
        // re-rolling any cell that is not a tree
        while remaining > 0 {
            let row = self.rng.gen_range(0..size);
            let col = self.rng.gen_range(0..size);

            if self.grid.get(row, col) == Cell::Tree {
                self.grid.set(row, col, Cell::Burning(FireAge::First));
                remaining -= 1;
            }
        }
    }

    fn log_cycle(&mut self) {
        self.replay_logger.log_cycle(
            self.cycle,
            self.changes,
            self.cumulative_changes,
            self.grid.count(Cell::is_burning),
            self.grid.render_rows(),
        );
    }

    fn state(&self) -> SimulationState {
        SimulationState {
            cycle: self.cycle,
            changes: self.changes,
            cumulative_changes: self.cumulative_changes,
            burning: self.grid.count(Cell::is_burning) > 0,
            size: self.grid.size(),
            cells: self.grid.cells().to_vec(),
        }
    }
}
