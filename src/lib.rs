//! Lloyd's k-means clustering over points in D-dimensional Euclidean space.
//!
//! [`ClusterEngine`] owns the points and centroids and runs the
//! assign/update loop; [`kmeans`] wraps it with seeding and restarts.
//!
//! ```
//! use kmeans_lloyd::{ClusterEngine, DEFAULT_MAX_ITERATIONS};
//! use ndarray::array;
//!
//! let points = array![[0.0, 0.0], [0.0, 1.0], [10.0, 0.0], [10.0, 1.0]];
//! let mut engine = ClusterEngine::new(points, 2, array![[0.0, 0.0], [10.0, 0.0]])?;
//! let outcome = engine.run(DEFAULT_MAX_ITERATIONS)?;
//!
//! assert!(outcome.converged());
//! assert_eq!(outcome.labels, vec![0, 0, 1, 1]);
//! assert_eq!(outcome.centroids, array![[0.0, 0.5], [10.0, 0.5]]);
//! # Ok::<(), kmeans_lloyd::ClusterError>(())
//! ```

pub mod algorithm;
pub mod centroid;
pub mod config;
pub mod dataset;
pub mod distance;
pub mod engine;
pub mod error;
pub mod history;
pub mod inertia;
pub mod initialization;
pub mod logger;

pub use algorithm::kmeans;
pub use config::KMeansConfig;
pub use distance::euclidean_distance;
pub use engine::{
    ClusterEngine, EmptyCluster, RunOutcome, StepReport, Termination, DEFAULT_MAX_ITERATIONS,
};
pub use error::{ClusterError, InvalidConfiguration};
pub use history::{History, Snapshot};
pub use initialization::Initialization;
