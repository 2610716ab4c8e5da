use ndarray::{Array2, ArrayView2};
use rand::Rng;

use crate::error::{InvalidConfiguration, Result};

/// Stacks rows into a point matrix. Every row must have the length of the first.
pub fn points_from_rows(rows: &[Vec<f64>]) -> Result<Array2<f64>> {
    let dim = match rows.first() {
        Some(row) => row.len(),
        None => return Err(InvalidConfiguration::EmptyInput.into()),
    };
    if let Some(row) = rows.iter().find(|row| row.len() != dim) {
        return Err(InvalidConfiguration::DimensionMismatch {
            expected: dim,
            got: row.len(),
        }
        .into());
    }

    Ok(Array2::from_shape_fn((rows.len(), dim), |(row, axis)| rows[row][axis]))
}

/// Fails on the first NaN or infinite coordinate, in row-major order.
pub fn ensure_finite(coordinates: ArrayView2<f64>) -> Result<()> {
    match coordinates.indexed_iter().find(|(_, value)| !value.is_finite()) {
        Some(((row, axis), _)) => {
            Err(InvalidConfiguration::NonFiniteCoordinate { row, axis }.into())
        }
        None => Ok(()),
    }
}

/// One 2D point per `i` in `start..end`, each coordinate an integer drawn
/// from `[i, end]`. Later points are confined to a shrinking corner of the
/// square, so the cloud thickens toward `(end, end)`.
pub fn staggered<R: Rng>(start: i32, end: i32, rng: &mut R) -> Array2<f64> {
    let count = end.saturating_sub(start).max(0) as usize;
    Array2::from_shape_fn((count, 2), |(i, _)| rng.gen_range(start + i as i32..=end) as f64)
}

/// `count` 2D points with integer coordinates uniform in `[start, end]`.
pub fn uniform<R: Rng>(count: usize, start: i32, end: i32, rng: &mut R) -> Array2<f64> {
    let (low, high) = if start > end { (end, start) } else { (start, end) };
    Array2::from_shape_fn((count, 2), |_| rng.gen_range(low..=high) as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClusterError;
    use ndarray::array;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn rows_become_matrix() {
        let points = points_from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]).unwrap();
        assert_eq!(points.dim(), (3, 2));
        assert_eq!(points[[2, 1]], 6.0);
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = points_from_rows(&[vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert_eq!(
            err,
            ClusterError::InvalidConfiguration(InvalidConfiguration::DimensionMismatch {
                expected: 2,
                got: 1
            })
        );
        let err = points_from_rows(&[]).unwrap_err();
        assert_eq!(err, ClusterError::InvalidConfiguration(InvalidConfiguration::EmptyInput));
    }

    #[test]
    fn first_non_finite_coordinate_is_reported() {
        let points = array![[0.0, 1.0], [2.0, f64::INFINITY], [f64::NAN, 3.0]];
        assert_eq!(
            ensure_finite(points.view()),
            Err(ClusterError::InvalidConfiguration(
                InvalidConfiguration::NonFiniteCoordinate { row: 1, axis: 1 }
            ))
        );
        assert_eq!(ensure_finite(array![[f64::MAX, -f64::MAX]].view()), Ok(()));
    }

    #[test]
    fn staggered_points_respect_their_floor() {
        let mut rng = StdRng::seed_from_u64(5);
        let points = staggered(0, 50, &mut rng);
        assert_eq!(points.dim(), (50, 2));
        for (i, point) in points.outer_iter().enumerate() {
            for &c in point {
                assert!(c >= i as f64 && c <= 50.0);
                assert_eq!(c.fract(), 0.0);
            }
        }
    }

    #[test]
    fn uniform_points_in_range() {
        let mut rng = StdRng::seed_from_u64(5);
        let points = uniform(25, 25, 0, &mut rng);
        assert_eq!(points.dim(), (25, 2));
        assert!(points.iter().all(|&c| (0.0..=25.0).contains(&c)));
    }
}
