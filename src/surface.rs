//! The Rosenbrock valley, a classic non-convex test surface.
//!
//! f(x) = (a - x_0)^2 + b (x_1 - x_0^2)^2
//!
//! The global minimum sits at `[a, a^2]` at the bottom of a long,
//! curved, nearly flat valley, which makes fixed-step descent crawl
//! (or blow up if the step is too large for the walls).
//!
//! The gradient is derived directly from the cost:
//!
//! df/dx_0 = -2 (a - x_0) - 4 b x_0 (x_1 - x_0^2)
//! df/dx_1 = 2 b (x_1 - x_0^2)

use ndarray::{arr1, Array1, ArrayView1, ArrayView2};

use crate::derivative_descent::Point;

/// Immutable surface constants. Points must be 2-dimensional; indexing
/// a shorter point panics.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rosenbrock {
    pub a: f64,
    pub b: f64,
}

impl Default for Rosenbrock {
    fn default() -> Self {
        Rosenbrock { a: 1.0, b: 100.0 }
    }
}

impl Rosenbrock {
    pub fn new(a: f64, b: f64) -> Rosenbrock {
        Rosenbrock { a, b }
    }

    pub fn cost(&self, x: ArrayView1<f64>) -> f64 {
        let valley = x[1] - x[0] * x[0];
        (self.a - x[0]).powi(2) + self.b * valley * valley
    }

    /// Cost of every row of `points`.
    pub fn costs(&self, points: ArrayView2<f64>) -> Array1<f64> {
        points.outer_iter().map(|x| self.cost(x)).collect()
    }

    pub fn gradient(&self, x: ArrayView1<f64>) -> Array1<f64> {
        let valley = x[1] - x[0] * x[0];
        arr1(&[
            -2.0 * (self.a - x[0]) - 4.0 * self.b * x[0] * valley,
            2.0 * self.b * valley,
        ])
    }

    pub fn minimum(&self) -> Point {
        arr1(&[self.a, self.a * self.a])
    }

    /// The cost as a standalone callable with the constants fixed.
    pub fn cost_fn(self) -> impl Fn(ArrayView1<f64>) -> f64 {
        move |x| self.cost(x)
    }

    /// The gradient as a standalone callable with the constants fixed.
    pub fn gradient_fn(self) -> impl Fn(ArrayView1<f64>) -> Array1<f64> {
        move |x| self.gradient(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::arr2;

    fn central_difference(surface: &Rosenbrock, x: &Array1<f64>, i: usize) -> f64 {
        let h = 1e-6;
        let mut forward = x.clone();
        let mut backward = x.clone();
        forward[i] += h;
        backward[i] -= h;
        (surface.cost(forward.view()) - surface.cost(backward.view())) / (2.0 * h)
    }

    #[test]
    fn cost_at_classic_start() {
        let surface = Rosenbrock::default();
        // (1 + 2)^2 + 100 * (2 - 4)^2
        assert_eq!(surface.cost(arr1(&[-2.0, 2.0]).view()), 409.0);
    }

    #[test]
    fn gradient_at_classic_start() {
        let surface = Rosenbrock::default();
        let g = surface.gradient(arr1(&[-2.0, 2.0]).view());
        assert_eq!(g, arr1(&[-1606.0, -400.0]));
    }

    #[test]
    fn minimum_is_stationary_with_zero_cost() {
        for &(a, b) in &[(1.0, 100.0), (2.0, 5.0), (-0.5, 1.0)] {
            let surface = Rosenbrock::new(a, b);
            let m = surface.minimum();
            assert_eq!(surface.cost(m.view()), 0.0);
            assert_eq!(surface.gradient(m.view()), Array1::<f64>::zeros(2));
        }
    }

    #[test]
    fn gradient_matches_finite_differences() {
        let surface = Rosenbrock::new(1.5, 20.0);
        let points = arr2(&[[-2.0, 2.0], [0.3, -0.7], [1.1, 1.3], [0.0, 0.0]]);
        for x in points.outer_iter() {
            let x = x.to_owned();
            let g = surface.gradient(x.view());
            for i in 0..2 {
                assert_abs_diff_eq!(g[i], central_difference(&surface, &x, i), epsilon = 1e-3);
            }
        }
    }

    #[test]
    fn batch_costs_match_pointwise() {
        let surface = Rosenbrock::default();
        let points = arr2(&[[-2.0, 2.0], [1.0, 1.0], [0.0, 1.0]]);
        let costs = surface.costs(points.view());
        assert_eq!(costs, arr1(&[409.0, 0.0, 101.0]));
    }

    #[test]
    fn bound_callables_agree_with_methods() {
        let surface = Rosenbrock::new(2.0, 7.0);
        let cost = surface.cost_fn();
        let gradient = surface.gradient_fn();
        let x = arr1(&[0.25, -1.0]);
        assert_eq!(cost(x.view()), surface.cost(x.view()));
        assert_eq!(gradient(x.view()), surface.gradient(x.view()));
    }

    #[test]
    #[should_panic]
    fn one_dimensional_point_panics() {
        Rosenbrock::default().gradient(arr1(&[1.0]).view());
    }
}
