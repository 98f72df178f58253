//! Simulated statistics for the upload summary.
//!
//! Nothing here is derived from the uploaded file. Valid/error splits,
//! processing time, order volumes and the fallback record count are
//! placeholders for display, and summaries built from them are flagged
//! as simulated.

use crate::config::settings::SimulationSettings;
use crate::domain::ports::StatsSource;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub struct SimulatedStats {
    rng: StdRng,
    settings: SimulationSettings,
}

impl SimulatedStats {
    /// Fails when the ranges in `settings` are inverted, unbounded or not finite.
    pub fn new(settings: SimulationSettings) -> Result<Self> {
        settings.validate()?;
        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        tracing::debug!(seeded = settings.seed.is_some(), "Simulated stats source ready");
        Ok(Self { rng, settings })
    }
}

impl StatsSource for SimulatedStats {
    fn fallback_record_count(&mut self) -> usize {
        self.rng
            .gen_range(self.settings.fallback_min..=self.settings.fallback_max)
    }

    fn error_records(&mut self, total: usize) -> usize {
        let errors = self.rng.gen_range(0..=self.settings.max_error_records);
        errors.min(total)
    }

    fn processing_time_secs(&mut self) -> f64 {
        let min = self.settings.processing_time_min;
        let max = self.settings.processing_time_max;
        let secs = if min < max {
            self.rng.gen_range(min..max)
        } else {
            min
        };
        (secs * 10.0).round() / 10.0
    }

    fn order_volume(&mut self) -> u64 {
        self.rng
            .gen_range(self.settings.volume_min..=self.settings.volume_max)
    }
}
