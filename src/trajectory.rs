use std::ops::Range;

use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};

/// The ordered points visited by a descent, one row per iteration.
#[derive(Clone, Debug, PartialEq)]
pub struct Trajectory {
    points: Array2<f64>,
}

impl Trajectory {
    /// Storage for `num_iters` points of dimension `dimension`. Rows
    /// hold NaN until recorded.
    pub(crate) fn unvisited(num_iters: usize, dimension: usize) -> Trajectory {
        Trajectory {
            points: Array2::from_elem((num_iters, dimension), f64::NAN),
        }
    }

    pub(crate) fn record(&mut self, iteration: usize, x: ArrayView1<f64>) {
        self.points.row_mut(iteration).assign(&x);
    }

    /// Number of recorded iterations, x_0 included.
    pub fn len(&self) -> usize {
        self.points.len_of(Axis(0))
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn dimension(&self) -> usize {
        self.points.len_of(Axis(1))
    }

    /// The point at `iteration`. Panics if out of range.
    pub fn point(&self, iteration: usize) -> ArrayView1<f64> {
        self.points.row(iteration)
    }

    pub fn initial(&self) -> Option<ArrayView1<f64>> {
        if self.is_empty() {
            None
        } else {
            Some(self.point(0))
        }
    }

    pub fn last(&self) -> Option<ArrayView1<f64>> {
        match self.len() {
            0 => None,
            n => Some(self.point(n - 1)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = ArrayView1<'_, f64>> + '_ {
        self.points.outer_iter()
    }

    /// Iteration numbers, aligned with the rows.
    pub fn iterations(&self) -> Range<usize> {
        0..self.len()
    }

    /// Cost of every visited point, aligned with the rows.
    pub fn costs<F>(&self, cost: F) -> Array1<f64>
    where
        F: Fn(ArrayView1<f64>) -> f64,
    {
        self.iter().map(cost).collect()
    }

    pub fn points(&self) -> ArrayView2<f64> {
        self.points.view()
    }

    pub fn into_inner(self) -> Array2<f64> {
        self.points
    }
}
