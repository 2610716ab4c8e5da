use thiserror::Error;

/// Reasons a clustering run is rejected before any iteration runs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidConfiguration {
    #[error("no points to cluster")]
    EmptyInput,

    #[error("points must have at least one coordinate")]
    ZeroDimension,

    #[error("cluster count {k} must be between 1 and the number of points ({points})")]
    ClusterCount { k: usize, points: usize },

    #[error("expected {expected} initial centroids, got {got}")]
    CentroidCount { expected: usize, got: usize },

    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("non-finite coordinate at row {row}, axis {axis}")]
    NonFiniteCoordinate { row: usize, axis: usize },

    #[error("invalid coordinate range [{low}, {high}]")]
    InvalidRange { low: f64, high: f64 },

    #[error("iteration cap must be at least 1")]
    ZeroIterationCap,

    #[error("at least one initialization is required")]
    ZeroInitializations,

    #[error("history holds {got:?} centroid matrices, engine has {expected:?}")]
    HistoryShape {
        expected: (usize, usize),
        got: (usize, usize),
    },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClusterError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] InvalidConfiguration),
}

pub type Result<T> = std::result::Result<T, ClusterError>;
