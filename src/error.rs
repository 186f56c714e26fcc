use {
    crate::{FrameSlot, Page},
    std::path::PathBuf,
};

/// Replacement policy error.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum SimError {
    /// A replacement was required, but there is no resident frame to evict.
    ///
    /// Never happens with a frame count of at least one.
    #[error("Cannot evict from empty memory")]
    EvictionFromEmptyMemory,

    /// Invalid frame slot.
    #[error("Invalid frame slot: {0}")]
    InvalidFrameSlot(FrameSlot),

    /// The page is outside of the page universe known to the policy.
    #[error("Page {0} is outside of the page universe")]
    UnknownPage(Page),

    /// Explicit page universe does not cover every request.
    #[error("Page universe of size {universe} does not contain page {page}")]
    UniverseTooSmall {
        /// Declared size of the page universe.
        universe: Page,
        /// Offending request.
        page: Page,
    },

    /// Logical clock arrived at maximum value.
    #[error("Logical clock exhausted")]
    ClockExhausted,
}

/// Replacement policy result type.
pub type SimResult<T> = Result<T, SimError>;

/// Workload validation error.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum InputError {
    /// Input must consist of the frame count line and the requests line.
    #[error("Input must contain 2 lines, got {0}")]
    LineCount(usize),

    /// Frame count is not an integer.
    #[error("Number of frames must be integer: {0:?}")]
    FrameCountNotInteger(String),

    /// Frame count is less than one.
    #[error("Number of frames must be positive: {0}")]
    FrameCountNotPositive(i64),

    /// Requests line is empty.
    #[error("There are no requests")]
    NoRequests,

    /// Request token is not an integer.
    #[error("All page numbers must be integer: {0:?}")]
    PageNotInteger(String),

    /// Request is less than one.
    #[error("All page numbers must be positive: {0}")]
    PageNotPositive(i64),

    /// No input files given.
    #[error("No input files given")]
    NoFiles,
}

/// Workload validation result type.
pub type InputResult<T> = Result<T, InputError>;

/// Error of a single batch case.
#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    /// Reading the input or writing the output failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// File the operation was performed on.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// Input file holds an invalid workload.
    #[error(transparent)]
    Input(#[from] InputError),

    /// Simulation failed.
    #[error(transparent)]
    Sim(#[from] SimError),
}

/// Batch case result type.
pub type BatchResult<T> = Result<T, BatchError>;
