use crate::config::SimulationConfig;
use serde_json::json;
use std::{fs::File, io::BufWriter};

pub fn create_replay_logger(
    filename: Option<String>,
    config: SimulationConfig,
) -> Box<dyn ReplayLogger> {
    match filename {
        None => Box::new(NoOpReplayLogger {}),
        Some(filename) => Box::new(JsonReplayLogger::new(filename, config)),
    }
}

pub trait ReplayLogger {
    #[allow(unused_variables)]
    fn log_cycle(
        &mut self,
        cycle: usize,
        changes: usize,
        cumulative_changes: usize,
        burning: usize,
        grid: Vec<String>,
    ) {
    }

    fn clear(&mut self) {}

    fn save(&self) {}
}

struct Cycle {
    cycle: usize,
    changes: usize,
    cumulative_changes: usize,
    burning: usize,
    grid: Vec<String>,
}

pub struct NoOpReplayLogger;
impl ReplayLogger for NoOpReplayLogger {}

struct JsonReplayLogger {
    filename: String,
    config: SimulationConfig,
    cycles: Vec<Cycle>,
}

impl JsonReplayLogger {
    pub fn new(filename: String, config: SimulationConfig) -> Self {
        JsonReplayLogger {
            filename,
            config,
            cycles: Vec::new(),
        }
    }
}

impl ReplayLogger for JsonReplayLogger {
    fn log_cycle(
        &mut self,
        cycle: usize,
        changes: usize,
        cumulative_changes: usize,
        burning: usize,
        grid: Vec<String>,
    ) {
        self.cycles.push(Cycle {
            cycle,
            changes,
            cumulative_changes,
            burning,
            grid,
        });
    }

    fn clear(&mut self) {
        self.cycles.clear();
    }

    fn save(&self) {
        let file = File::create(&self.filename).unwrap();
        let cycles: Vec<_> = self
            .cycles
            .iter()
            .map(|cycle| {
                json!({
                    "cycle": cycle.cycle,
                    "changes": cycle.changes,
                    "cumulative_changes": cycle.cumulative_changes,
                    "burning": cycle.burning,
                    "grid": cycle.grid,
                })
            })
            .collect();

        let data = json!({
            "config": self.config,
            "cycles": cycles,
        });

        let mut writer = BufWriter::new(&file);
        serde_json::to_writer_pretty(&mut writer, &data).unwrap();
    }
}
