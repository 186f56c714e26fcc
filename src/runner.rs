//! Drives a workload through every replacement policy.

use {
    crate::{
        FifoReplacer,
        LruReplacer,
        OptimalReplacer,
        Outcome,
        ReplacementPolicy,
        SimResult,
        Workload,
    },
    parking_lot::Mutex,
    std::{fmt, thread},
};

/// Supported replacement algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Algorithm {
    /// First-In-First-Out.
    Fifo,

    /// Least Recently Used.
    Lru,

    /// Optimal, evicts the page needed furthest in the future.
    Optimal,
}

impl Algorithm {
    /// All algorithms, in reporting order.
    pub const ALL: [Self; 3] = [Self::Fifo, Self::Lru, Self::Optimal];

    /// Short display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fifo => "FIFO",
            Self::Lru => "LRU",
            Self::Optimal => "OPT",
        }
    }

    /// Creates a fresh policy instance for the workload.
    ///
    /// The request sequence and page universe are only consulted by the
    /// optimal policy.
    pub fn policy(self, workload: &Workload) -> SimResult<Box<dyn ReplacementPolicy + Send>> {
        let frame_count = workload.frame_count;
        let policy: Box<dyn ReplacementPolicy + Send> = match self {
            Self::Fifo => Box::new(FifoReplacer::new(frame_count)),
            Self::Lru => Box::new(LruReplacer::new(frame_count)),
            Self::Optimal => Box::new(OptimalReplacer::with_page_count(
                frame_count,
                workload.page_count,
                &workload.requests,
            )?),
        };
        Ok(policy)
    }

    /// Runs the whole workload through a fresh instance of the policy.
    pub fn simulate(self, workload: &Workload) -> SimResult<Report> {
        let mut policy = self.policy(workload)?;
        let outcomes = policy.run(&workload.requests)?;
        let report = Report {
            algorithm: self,
            outcomes,
        };
        log::debug!(
            "{self}: {} faults over {} requests",
            report.faults(),
            workload.requests.len()
        );
        Ok(report)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-request outcomes of one algorithm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Algorithm that produced the outcomes.
    pub algorithm: Algorithm,

    /// Outcome of every request, in request order.
    pub outcomes: Vec<Outcome>,
}

impl Report {
    /// Number of requests that displaced a resident page.
    pub fn faults(&self) -> usize {
        self.outcomes.iter().filter(|outcome| outcome.is_fault()).count()
    }

    /// Outcomes in integer form: `0` for a hit, frame slot for a fault.
    pub fn answers(&self) -> Vec<usize> {
        self.outcomes.iter().map(|outcome| outcome.answer()).collect()
    }
}

/// Configuration of the runner.
#[derive(Debug, Clone, Default)]
pub struct RunnerConfig {
    /// Run every algorithm on its own thread.
    ///
    /// Policies share nothing but the read-only workload, so results are the
    /// same as with sequential execution.
    pub parallel: bool,
}

/// Runs a workload through all algorithms.
#[derive(Debug, Default)]
pub struct Runner {
    config: RunnerConfig,
}

impl Runner {
    /// Creates a runner with the given configuration.
    pub fn new(config: RunnerConfig) -> Self {
        Self { config }
    }

    /// Simulates every algorithm, returning reports in [`Algorithm::ALL`]
    /// order.
    pub fn run(&self, workload: &Workload) -> SimResult<Vec<Report>> {
        if self.config.parallel {
            Self::run_parallel(workload)
        } else {
            Algorithm::ALL
                .iter()
                .map(|algorithm| algorithm.simulate(workload))
                .collect()
        }
    }

    fn run_parallel(workload: &Workload) -> SimResult<Vec<Report>> {
        let reports = Mutex::new(Vec::with_capacity(Algorithm::ALL.len()));

        thread::scope(|scope| {
            for algorithm in Algorithm::ALL {
                let reports = &reports;
                scope.spawn(move || {
                    let report = algorithm.simulate(workload);
                    reports.lock().push((algorithm, report));
                });
            }
        });

        let mut reports = reports.into_inner();
        reports.sort_by_key(|(algorithm, _)| *algorithm);
        reports.into_iter().map(|(_, report)| report).collect()
    }
}
