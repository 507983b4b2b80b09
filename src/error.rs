/// Errors from the fallible entry points: `try_run`, configuration
/// loading and trajectory export. `run` itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("gradient evaluation failed at iteration {iteration}: {error}")]
    Gradient {
        iteration: usize,
        error: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("gradient has dimension {found}, but the point has dimension {expected}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("could not parse configuration: {0}")]
    Scan(#[from] yaml_rust::ScanError),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("could not emit trajectory: {0}")]
    Emit(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
