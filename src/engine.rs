//! Lloyd's algorithm: assign every point to its nearest centroid, move every
//! centroid to the mean of its points, repeat until no label changes.

use ndarray::{Array2, ArrayView2};
use rand::Rng;

use crate::centroid::recompute_centroids;
use crate::dataset::ensure_finite;
use crate::distance::euclidean_distance;
use crate::error::{InvalidConfiguration, Result};
use crate::history::History;
use crate::inertia::calculate_inertia;
use crate::initialization::Initialization;

pub const DEFAULT_MAX_ITERATIONS: usize = 300;

/// Past this magnitude squared coordinate differences can overflow, so the
/// assignment pass compares distances between downscaled coordinates.
const LARGE_MAGNITUDE: f64 = 1e150;

/// A centroid that ended an update pass without members. Its coordinates
/// were left where they were.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmptyCluster {
    pub iteration: usize,
    pub centroid: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    Converged,
    IterationCapReached,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    /// 1-based index of the step within the engine's lifetime.
    pub iteration: usize,
    /// Points whose label differs from the previous step. Every point counts
    /// as changed on the first step.
    pub changed: usize,
    pub converged: bool,
    pub empty_clusters: Vec<EmptyCluster>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunOutcome {
    /// Centroid index of every point, in input order.
    pub labels: Vec<usize>,
    pub centroids: Array2<f64>,
    /// Steps performed by this run.
    pub iterations: usize,
    pub termination: Termination,
    pub empty_clusters: Vec<EmptyCluster>,
    pub inertia: f64,
}

impl RunOutcome {
    pub fn converged(&self) -> bool {
        self.termination == Termination::Converged
    }

    /// Point indices grouped by centroid, one (possibly empty) group per centroid.
    pub fn clusters(&self) -> Vec<Vec<usize>> {
        let mut clusters = vec![Vec::new(); self.centroids.nrows()];
        for (point, &label) in self.labels.iter().enumerate() {
            clusters[label].push(point);
        }
        clusters
    }
}

#[derive(Debug, Clone)]
pub struct ClusterEngine {
    points: Array2<f64>,
    centroids: Array2<f64>,
    assignment: Option<Vec<usize>>,
    previous_assignment: Option<Vec<usize>>,
    iteration: usize,
    point_magnitude: f64,
}

impl ClusterEngine {
    /// Validates the inputs and builds an engine that has not stepped yet.
    pub fn new(points: Array2<f64>, k: usize, centroids: Array2<f64>) -> Result<Self> {
        let (n, dim) = points.dim();
        if n == 0 {
            return Err(InvalidConfiguration::EmptyInput.into());
        }
        if dim == 0 {
            return Err(InvalidConfiguration::ZeroDimension.into());
        }
        if k == 0 || k > n {
            return Err(InvalidConfiguration::ClusterCount { k, points: n }.into());
        }
        if centroids.nrows() != k {
            return Err(InvalidConfiguration::CentroidCount {
                expected: k,
                got: centroids.nrows(),
            }
            .into());
        }
        if centroids.ncols() != dim {
            return Err(InvalidConfiguration::DimensionMismatch {
                expected: dim,
                got: centroids.ncols(),
            }
            .into());
        }
        ensure_finite(points.view())?;
        ensure_finite(centroids.view())?;

        Ok(Self {
            point_magnitude: max_magnitude(points.view()),
            points,
            centroids,
            assignment: None,
            previous_assignment: None,
            iteration: 0,
        })
    }

    /// Seeds `k` centroids with `initialization`, then builds the engine.
    pub fn seeded<R: Rng>(
        points: Array2<f64>,
        k: usize,
        initialization: &Initialization,
        rng: &mut R,
    ) -> Result<Self> {
        let centroids = initialization.centroids(points.view(), k, rng)?;
        Self::new(points, k, centroids)
    }

    pub fn k(&self) -> usize {
        self.centroids.nrows()
    }

    pub fn points(&self) -> ArrayView2<f64> {
        self.points.view()
    }

    pub fn centroids(&self) -> ArrayView2<f64> {
        self.centroids.view()
    }

    /// Current labels, `None` until the first step.
    pub fn labels(&self) -> Option<&[usize]> {
        self.assignment.as_deref()
    }

    pub fn previous_labels(&self) -> Option<&[usize]> {
        self.previous_assignment.as_deref()
    }

    /// Steps performed since construction.
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    /// One assignment pass followed by one update pass.
    pub fn step(&mut self) -> StepReport {
        self.iteration += 1;

        let labels = self.assign();
        let changed = match &self.assignment {
            Some(previous) => previous.iter().zip(&labels).filter(|(a, b)| a != b).count(),
            None => labels.len(),
        };
        let converged = self.assignment.is_some() && changed == 0;

        let empty_clusters = recompute_centroids(self.points.view(), &labels, &mut self.centroids)
            .into_iter()
            .map(|centroid| EmptyCluster {
                iteration: self.iteration,
                centroid,
            })
            .collect::<Vec<_>>();
        self.previous_assignment = self.assignment.replace(labels);

        for empty in &empty_clusters {
            log::warn!(
                "Centroid {} has no points at iteration {}, keeping its position",
                empty.centroid,
                empty.iteration
            );
        }
        log::debug!("Iteration {}: {} points changed cluster", self.iteration, changed);

        StepReport {
            iteration: self.iteration,
            changed,
            converged,
            empty_clusters,
        }
    }

    /// Index of the nearest centroid for every point. On equal distances the
    /// lowest centroid index wins.
    fn assign(&self) -> Vec<usize> {
        let magnitude = self.point_magnitude.max(max_magnitude(self.centroids.view()));
        if magnitude < LARGE_MAGNITUDE {
            return nearest_centroids(self.points.view(), self.centroids.view());
        }
        // Multiplying by a power of two keeps the order of distances.
        let scale = 2f64.powi(-600);
        let points = &self.points * scale;
        let centroids = &self.centroids * scale;
        nearest_centroids(points.view(), centroids.view())
    }

    /// Steps until convergence or until `max_iterations` steps were made.
    pub fn run(&mut self, max_iterations: usize) -> Result<RunOutcome> {
        self.run_inner(max_iterations, None)
    }

    /// Like [`run`](Self::run), appending a snapshot to `history` after every
    /// step. An empty history first receives the current centroids.
    ///
    /// A non-empty `history` must hold centroid matrices of this engine's
    /// shape, otherwise `InvalidConfiguration::HistoryShape` is returned.
    pub fn run_with_history(
        &mut self,
        max_iterations: usize,
        history: &mut History,
    ) -> Result<RunOutcome> {
        self.run_inner(max_iterations, Some(history))
    }

    fn run_inner(
        &mut self,
        max_iterations: usize,
        mut history: Option<&mut History>,
    ) -> Result<RunOutcome> {
        if max_iterations == 0 {
            return Err(InvalidConfiguration::ZeroIterationCap.into());
        }
        if let Some(history) = history.as_deref_mut() {
            if let Some(last) = history.snapshots().last() {
                if last.centroids.dim() != self.centroids.dim() {
                    return Err(InvalidConfiguration::HistoryShape {
                        expected: self.centroids.dim(),
                        got: last.centroids.dim(),
                    }
                    .into());
                }
            }
            if history.is_empty() {
                history.record(self.iteration, self.centroids.view(), self.labels());
            }
        }

        let mut termination = Termination::IterationCapReached;
        let mut empty_clusters = Vec::new();
        let mut iterations = 0;

        while iterations < max_iterations {
            let report = self.step();
            iterations += 1;
            empty_clusters.extend(report.empty_clusters);

            if let Some(history) = history.as_deref_mut() {
                history.record(self.iteration, self.centroids.view(), self.labels());
            }
            if iterations % 10 == 0 {
                log::info!("Finished iteration {}", iterations);
            }
            if report.converged {
                termination = Termination::Converged;
                break;
            }
        }

        match termination {
            Termination::Converged => log::info!("Converged after {} iterations", iterations),
            Termination::IterationCapReached => {
                log::warn!("Stopped after {} iterations without converging", iterations)
            }
        }

        let labels = self.labels().map(<[usize]>::to_vec).unwrap_or_default();
        let inertia = calculate_inertia(self.points.view(), self.centroids.view(), &labels);

        Ok(RunOutcome {
            labels,
            centroids: self.centroids.clone(),
            iterations,
            termination,
            empty_clusters,
            inertia,
        })
    }
}

fn max_magnitude(coordinates: ArrayView2<f64>) -> f64 {
    coordinates.iter().fold(0.0, |max, c| max.max(c.abs()))
}

fn nearest_centroids(points: ArrayView2<f64>, centroids: ArrayView2<f64>) -> Vec<usize> {
    points
        .outer_iter()
        .map(|point| {
            let mut closest = 0;
            let mut min_distance = f64::INFINITY;
            for (idx, centroid) in centroids.outer_iter().enumerate() {
                let distance = euclidean_distance(point, centroid);
                if distance < min_distance {
                    min_distance = distance;
                    closest = idx;
                }
            }
            closest
        })
        .collect()
}
