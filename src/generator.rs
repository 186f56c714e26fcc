//! Random workload generator.
//!
//! Produces workloads for exercising the simulator. Generation is fully
//! determined by the seed, so a failing workload can always be reproduced.

use {
    crate::{Page, Workload},
    chrono::Utc,
    rand::{Rng, SeedableRng, rngs::StdRng},
};

/// Largest accepted page universe and request count limit.
pub const MAX_LIMIT: u32 = 100_000;

/// Configuration of the generator.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Upper bound of the page universe and request count for small workloads.
    pub small_limit: u32,

    /// Upper bound of the page universe and request count for big workloads.
    pub big_limit: u32,

    /// Probability of producing a big workload.
    pub big_ratio: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            small_limit: 10,
            big_limit: 500,
            big_ratio: 0.5,
        }
    }
}

/// Seeded workload generator.
#[derive(Debug)]
pub struct WorkloadGenerator {
    config: GeneratorConfig,
    rng: StdRng,
}

impl WorkloadGenerator {
    /// Creates a generator with the default configuration.
    pub fn new(seed: u64) -> Self {
        Self::with_config(seed, GeneratorConfig::default())
    }

    /// Creates a generator with the given configuration.
    ///
    /// Limits are clamped into `1..=MAX_LIMIT`.
    pub fn with_config(seed: u64, mut config: GeneratorConfig) -> Self {
        config.small_limit = config.small_limit.clamp(1, MAX_LIMIT);
        config.big_limit = config.big_limit.clamp(1, MAX_LIMIT);
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generates the next workload.
    ///
    /// The page universe holds at least two pages and the frame count is
    /// always smaller than the universe, so faults are possible. The request
    /// sequence is never empty.
    pub fn generate(&mut self) -> Workload {
        let limit = if self.rng.gen_bool(self.config.big_ratio) {
            self.config.big_limit
        } else {
            self.config.small_limit
        };

        let page_count: Page = self.rng.gen_range(2..limit.saturating_add(2));
        let frame_count = self.rng.gen_range(1..page_count) as usize;
        let request_count = self.rng.gen_range(1..=limit);
        let requests = (0..request_count)
            .map(|_| self.rng.gen_range(1..=page_count))
            .collect();

        let workload = Workload::new(frame_count, requests);
        log::debug!(
            "generated workload: {} frames, {} requests over {} pages",
            workload.frame_count,
            workload.requests.len(),
            page_count
        );
        workload
    }
}

/// Seed derived from the wall clock, for callers that did not pick one.
pub fn clock_seed() -> u64 {
    Utc::now().timestamp_nanos_opt().unwrap_or_default() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_workload() {
        let mut a = WorkloadGenerator::new(42);
        let mut b = WorkloadGenerator::new(42);
        for _ in 0..10 {
            assert_eq!(a.generate(), b.generate());
        }
    }

    #[test]
    fn generated_workloads_are_valid() {
        let mut generator = WorkloadGenerator::new(7);
        for _ in 0..200 {
            let workload = generator.generate();
            assert!(workload.frame_count >= 1);
            assert!(!workload.requests.is_empty());
            assert!(workload.requests.iter().all(|&page| page >= 1));
            assert!(workload.requests.len() <= 500);

            // Text form parses back to the same workload.
            assert_eq!(Workload::parse(&workload.to_string()).unwrap(), workload);
        }
    }

    #[test]
    fn oversized_limits_are_clamped() {
        let config = GeneratorConfig {
            small_limit: u32::MAX,
            big_limit: u32::MAX,
            big_ratio: 1.0,
        };
        let mut generator = WorkloadGenerator::with_config(3, config);
        for _ in 0..3 {
            let workload = generator.generate();
            assert!(workload.requests.len() <= MAX_LIMIT as usize);
            assert!(workload.page_count <= MAX_LIMIT + 1);
        }

        let config = GeneratorConfig {
            small_limit: 0,
            big_limit: 0,
            big_ratio: 0.0,
        };
        let workload = WorkloadGenerator::with_config(3, config).generate();
        assert_eq!(workload.frame_count, 1);
        assert_eq!(workload.requests.len(), 1);
    }

    #[test]
    fn small_only() {
        let config = GeneratorConfig {
            big_ratio: 0.0,
            ..GeneratorConfig::default()
        };
        let mut generator = WorkloadGenerator::with_config(1, config);
        for _ in 0..100 {
            let workload = generator.generate();
            assert!(workload.requests.len() <= 10);
            assert!(workload.requests.iter().all(|&page| page <= 11));
        }
    }
}
