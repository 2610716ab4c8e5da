use ndarray::ArrayView1;
use num_traits::Float;

/// Sum of squared coordinate differences. Both views must have the same length.
pub fn squared_euclidean_distance<F: Float>(us: ArrayView1<F>, them: ArrayView1<F>) -> F {
    debug_assert_eq!(us.len(), them.len());
    us.iter()
        .zip(them.iter())
        .fold(F::zero(), |acc, (&a, &b)| {
            let diff = a - b;
            acc + diff * diff
        })
}

/// `sqrt(sum((a_i - b_i)^2))`, the only metric the engine uses.
pub fn euclidean_distance<F: Float>(us: ArrayView1<F>, them: ArrayView1<F>) -> F {
    squared_euclidean_distance(us, them).sqrt()
}
