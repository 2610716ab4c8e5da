use ndarray::ArrayView2;

use crate::distance::squared_euclidean_distance;

/// Sum of squared distances from each point to its assigned centroid.
///
/// Saturates to infinity once squared distances exceed `f64::MAX`.
pub fn calculate_inertia(
    data: ArrayView2<f64>,
    centroids: ArrayView2<f64>,
    labels: &[usize],
) -> f64 {
    data.outer_iter()
        .zip(labels)
        .map(|(point, &label)| squared_euclidean_distance(point, centroids.row(label)))
        .sum()
}
