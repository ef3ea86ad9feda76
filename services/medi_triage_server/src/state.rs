use medi_triage::RngNoise;
use rand::rngs::StdRng;

use crate::config::ServerConfig;

/// Per-router state. Holds no mutable data; every request builds its own RNG.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub seed: Option<u64>,
}

impl AppState {
    pub fn from_config(config: &ServerConfig) -> Self {
        Self {
            seed: config.scoring.seed,
        }
    }

    pub fn noise(&self) -> RngNoise<StdRng> {
        match self.seed {
            Some(seed) => RngNoise::seeded(seed),
            None => RngNoise::from_entropy(),
        }
    }
}
