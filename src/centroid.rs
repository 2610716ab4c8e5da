use ndarray::{Array2, ArrayView1, ArrayView2};

/// Per-cluster running means for the update pass.
///
/// Member counts are known up front so each point is divided by its
/// cluster size before it is added; no partial sum ever exceeds the largest
/// coordinate in magnitude.
#[derive(Debug, Clone)]
pub struct CentroidAccumulator {
    means: Array2<f64>,
    counts: Vec<usize>,
}

impl CentroidAccumulator {
    /// `labels` fixes the member count of each of the `k` clusters.
    pub fn new(k: usize, dim: usize, labels: &[usize]) -> Self {
        let mut counts = vec![0; k];
        for &label in labels {
            counts[label] += 1;
        }
        Self {
            means: Array2::zeros((k, dim)),
            counts,
        }
    }

    pub fn update_centroid(&mut self, label: usize, data_point: ArrayView1<f64>) {
        let count = self.counts[label] as f64;
        self.means
            .row_mut(label)
            .zip_mut_with(&data_point, |mean, &x| *mean += x / count);
    }

    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Writes the mean of every non-empty cluster into `centroids`.
    ///
    /// Centroids without members keep their coordinates; their indices are
    /// returned in ascending order.
    pub fn finalize_centroids(self, centroids: &mut Array2<f64>) -> Vec<usize> {
        let mut empty = Vec::new();
        for (idx, (mut centroid, mean)) in centroids
            .outer_iter_mut()
            .zip(self.means.outer_iter())
            .enumerate()
        {
            match self.counts[idx] {
                0 => empty.push(idx),
                _ => centroid.assign(&mean),
            }
        }
        empty
    }
}

/// The update pass: move each centroid to the mean of its assigned points.
pub fn recompute_centroids(
    points: ArrayView2<f64>,
    labels: &[usize],
    centroids: &mut Array2<f64>,
) -> Vec<usize> {
    let mut accumulator = CentroidAccumulator::new(centroids.nrows(), centroids.ncols(), labels);
    for (point, &label) in points.outer_iter().zip(labels) {
        accumulator.update_centroid(label, point);
    }
    accumulator.finalize_centroids(centroids)
}
