use itertools::Itertools;
use ndarray::{Array2, ArrayView2, Axis};
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;
use rand::{
    distributions::{Distribution, WeightedIndex},
    Rng,
};

use crate::dataset::ensure_finite;
use crate::distance::squared_euclidean_distance;
use crate::error::{InvalidConfiguration, Result};

/// How the starting centroids of a run are chosen.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Initialization {
    /// Every coordinate of every centroid drawn independently from `[low, high]`.
    ///
    /// Use the range the data was generated from. This is the naive seeding:
    /// centroids may coincide or land far from every point.
    Uniform { low: f64, high: f64 },
    /// Like `Uniform`, but per axis over the min/max of the data itself.
    #[default]
    Bounds,
    /// k-means++: each new centroid is a data point picked with probability
    /// proportional to its squared distance to the nearest chosen centroid.
    PlusPlus,
}

impl Initialization {
    pub fn centroids<R: Rng>(
        &self,
        data: ArrayView2<f64>,
        k: usize,
        rng: &mut R,
    ) -> Result<Array2<f64>> {
        if data.nrows() == 0 {
            return Err(InvalidConfiguration::EmptyInput.into());
        }
        if k == 0 || k > data.nrows() {
            return Err(InvalidConfiguration::ClusterCount {
                k,
                points: data.nrows(),
            }
            .into());
        }
        ensure_finite(data)?;
        match *self {
            Initialization::Uniform { low, high } => uniform(k, data.ncols(), low, high, rng),
            Initialization::Bounds => uniform_in_bounds(data, k, rng),
            Initialization::PlusPlus => Ok(kmeans_plusplus(data, k, rng)),
        }
    }
}

pub fn uniform<R: Rng>(
    k: usize,
    dim: usize,
    low: f64,
    high: f64,
    rng: &mut R,
) -> Result<Array2<f64>> {
    check_range(low, high)?;
    Ok(Array2::random_using((k, dim), Uniform::new_inclusive(low, high), rng))
}

/// Sampling needs ordered bounds whose width, scaled up by the largest unit
/// sample `1 - EPSILON`, still fits in an `f64`.
fn check_range(low: f64, high: f64) -> Result<()> {
    if low <= high && ((high - low) / (1.0 - f64::EPSILON)).is_finite() {
        Ok(())
    } else {
        Err(InvalidConfiguration::InvalidRange { low, high }.into())
    }
}

/// Fails with `InvalidRange` when an axis of `data` is too wide to sample from.
pub fn uniform_in_bounds<R: Rng>(
    data: ArrayView2<f64>,
    k: usize,
    rng: &mut R,
) -> Result<Array2<f64>> {
    let bounds = data
        .axis_iter(Axis(1))
        .map(|axis| match axis.iter().minmax() {
            itertools::MinMaxResult::MinMax(&lo, &hi) => (lo, hi),
            itertools::MinMaxResult::OneElement(&v) => (v, v),
            itertools::MinMaxResult::NoElements => (0.0, 0.0),
        })
        .collect_vec();
    for &(lo, hi) in &bounds {
        check_range(lo, hi)?;
    }

    Ok(Array2::from_shape_fn((k, data.ncols()), |(_, axis)| {
        let (lo, hi) = bounds[axis];
        rng.gen_range(lo..=hi)
    }))
}

pub fn kmeans_plusplus<R: Rng>(data: ArrayView2<f64>, k: usize, rng: &mut R) -> Array2<f64> {
    let mut centroids = Array2::<f64>::zeros((k, data.ncols()));

    // Randomly select the first centroid
    let first_idx = rng.gen_range(0..data.nrows());
    centroids.row_mut(0).assign(&data.row(first_idx));

    let mut min_distances = vec![f64::MAX; data.nrows()];

    for next in 1..k {
        let last = centroids.row(next - 1);
        for (min_dist, point) in min_distances.iter_mut().zip(data.outer_iter()) {
            *min_dist = (*min_dist).min(squared_euclidean_distance(point, last));
        }

        // All weights are zero once every point sits on a centroid.
        let next_idx = match WeightedIndex::new(&min_distances) {
            Ok(dist) => dist.sample(rng),
            Err(_) => rng.gen_range(0..data.nrows()),
        };
        centroids.row_mut(next).assign(&data.row(next_idx));
    }

    centroids
}
