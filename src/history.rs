//! Append-only record of how centroids and assignments evolve during a run.
//!
//! Meant for renderers that animate centroid movement. The engine only ever
//! appends to a [`History`]; it never reads it back.

use ndarray::{Array1, Array2, ArrayView2};

#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Number of steps the engine had completed when the snapshot was taken.
    pub iteration: usize,
    pub centroids: Array2<f64>,
    /// `None` for the seed snapshot, before any point was assigned.
    pub assignment: Option<Vec<usize>>,
}

#[derive(Debug, Clone, Default)]
pub struct History {
    snapshots: Vec<Snapshot>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(
        &mut self,
        iteration: usize,
        centroids: ArrayView2<f64>,
        assignment: Option<&[usize]>,
    ) {
        self.snapshots.push(Snapshot {
            iteration,
            centroids: centroids.to_owned(),
            assignment: assignment.map(<[usize]>::to_vec),
        });
    }

    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Every position centroid `centroid` has held, oldest first. `None` if
    /// the index is out of range.
    pub fn centroid_trajectory(&self, centroid: usize) -> Option<Vec<Array1<f64>>> {
        self.snapshots
            .iter()
            .map(|snapshot| {
                (centroid < snapshot.centroids.nrows())
                    .then(|| snapshot.centroids.row(centroid).to_owned())
            })
            .collect()
    }

    /// The label of `point` after each recorded step, oldest first. `None` if
    /// the index is out of range.
    pub fn assignment_trajectory(&self, point: usize) -> Option<Vec<usize>> {
        self.snapshots
            .iter()
            .filter_map(|snapshot| snapshot.assignment.as_ref())
            .map(|labels| labels.get(point).copied())
            .collect()
    }
}
