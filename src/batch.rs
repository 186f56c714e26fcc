//! Batch processing of workload files.
//!
//! Every case is an input file with a workload and an output file receiving
//! the reports. Cases are independent: a failing case does not prevent the
//! others from being processed.

use {
    crate::{BatchError, BatchResult, InputError, InputResult, Runner, Workload, report},
    std::{
        fs,
        io::BufWriter,
        path::{Path, PathBuf},
    },
};

/// Output file used when a case names only its input.
pub const DEFAULT_OUTPUT: &str = "output.txt";

/// Input and output file of a single case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Case {
    /// File holding the workload.
    pub input: PathBuf,

    /// File receiving the reports.
    pub output: PathBuf,
}

impl Case {
    /// Groups file arguments into cases.
    ///
    /// Files are taken in pairs of (input, output); a trailing lone input
    /// writes into [`DEFAULT_OUTPUT`].
    pub fn from_files<P: AsRef<Path>>(files: &[P]) -> InputResult<Vec<Self>> {
        if files.is_empty() {
            return Err(InputError::NoFiles);
        }

        Ok(files
            .chunks(2)
            .map(|pair| Self {
                input: pair[0].as_ref().to_path_buf(),
                output: pair
                    .get(1)
                    .map_or_else(|| PathBuf::from(DEFAULT_OUTPUT), |p| p.as_ref().to_path_buf()),
            })
            .collect())
    }

    /// Reads the workload, simulates all algorithms and writes the reports.
    pub fn process(&self, runner: &Runner) -> BatchResult<()> {
        let text = fs::read_to_string(&self.input).map_err(|source| BatchError::Io {
            path: self.input.clone(),
            source,
        })?;
        let workload = Workload::parse(&text)?;
        let reports = runner.run(&workload)?;

        let io_err = |source| BatchError::Io {
            path: self.output.clone(),
            source,
        };
        let file = fs::File::create(&self.output).map_err(io_err)?;
        report::write_reports(BufWriter::new(file), &reports).map_err(io_err)?;
        Ok(())
    }
}

/// Outcome of a batch: errors of the failed cases, keyed by case index.
#[derive(Debug, Default)]
pub struct BatchSummary {
    /// Number of cases processed successfully.
    pub succeeded: usize,

    /// Failed cases, by zero-based index.
    pub failed: Vec<(usize, BatchError)>,
}

/// Processes all cases, continuing past failures.
pub fn process_all(cases: &[Case], runner: &Runner) -> BatchSummary {
    let mut summary = BatchSummary::default();
    for (id, case) in cases.iter().enumerate() {
        match case.process(runner) {
            Ok(()) => {
                log::info!(
                    "case {id}: {} -> {}",
                    case.input.display(),
                    case.output.display()
                );
                summary.succeeded += 1;
            }
            Err(err) => {
                log::error!("error on test case {id}: {err}");
                summary.failed.push((id, err));
            }
        }
    }
    summary
}
