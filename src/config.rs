//! Environment-driven simulation settings.

use crate::random::RngSource;
use rand::rngs::StdRng;

/// Env var holding an optional u64 seed for reproducible runs.
pub const SEED_VAR: &str = "BRACKET_SEED";

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SimulationConfig {
    /// None means a fresh seed per run.
    pub seed: Option<u64>,
}

impl SimulationConfig {
    pub fn from_env() -> Self {
        Self {
            seed: parse_seed(std::env::var(SEED_VAR).ok().as_deref()),
        }
    }

    /// Random source for one run; an explicit `seed` wins over the configured one.
    pub fn random_source(&self, seed: Option<u64>) -> RngSource<StdRng> {
        match seed.or(self.seed) {
            Some(s) => RngSource::seeded(s),
            None => RngSource::from_entropy(),
        }
    }
}

/// Parse a seed value; blank means unset, garbage is logged and ignored.
pub fn parse_seed(raw: Option<&str>) -> Option<u64> {
    let raw = raw.map(str::trim).filter(|v| !v.is_empty())?;
    match raw.parse() {
        Ok(seed) => Some(seed),
        Err(_) => {
            log::warn!("Ignoring {}={:?}: not an unsigned integer", SEED_VAR, raw);
            None
        }
    }
}
