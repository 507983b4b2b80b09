//! Plain fixed-step gradient descent.
//!
//! Each step replaces the iterate by `x - step_size * gradient(x)`.
//! Nothing is checked: a step size that is too large for the surface
//! produces infinities and NaNs, and those are reported like any other
//! iterate.

use super::*;
use crate::trajectory::Trajectory;
use crate::utils::DescentProblem;
use ndarray::{Array1, ArrayView1};

pub type Point = Array1<f64>;

/// State of a gradient descent as a StreamingIterator.
///
/// The first item is the starting point itself; every later call to
/// `advance` takes one step. The stream never ends on its own, so bound
/// it with `take`.
#[derive(Debug, Clone)]
pub struct DerivativeDescent<G>
where
    G: Fn(ArrayView1<f64>) -> Array1<f64>,
{
    pub gradient: G,
    pub step_size: f64,
    pub x: Point,
    started: bool,
}

impl<G> DerivativeDescent<G>
where
    G: Fn(ArrayView1<f64>) -> Array1<f64>,
{
    pub fn new(gradient: G, step_size: f64, x_0: Point) -> DerivativeDescent<G> {
        DerivativeDescent {
            gradient,
            step_size,
            x: x_0,
            started: false,
        }
    }
}

impl<G> StreamingIterator for DerivativeDescent<G>
where
    G: Fn(ArrayView1<f64>) -> Array1<f64>,
{
    type Item = Point;

    fn advance(&mut self) {
        if !self.started {
            self.started = true;
            return;
        }
        let direction = (self.gradient)(self.x.view());
        self.x = step(self.x.view(), &direction, self.step_size);
    }

    fn get(&self) -> Option<&Self::Item> {
        Some(&self.x)
    }
}

/// One update, always into a freshly allocated point.
fn step(x: ArrayView1<f64>, direction: &Array1<f64>, step_size: f64) -> Point {
    &x - &(direction * step_size)
}

/// Run `num_iters - 1` steps from `x_0` and return every visited point,
/// `x_0` first.
pub fn run<G>(gradient: G, step_size: f64, num_iters: usize, x_0: ArrayView1<f64>) -> Trajectory
where
    G: Fn(ArrayView1<f64>) -> Array1<f64>,
{
    let mut trajectory = Trajectory::unvisited(num_iters, x_0.len());
    let mut descent = DerivativeDescent::new(gradient, step_size, x_0.to_owned()).take(num_iters);
    let mut iteration = 0;
    while let Some(x) = descent.next() {
        trajectory.record(iteration, x.view());
        iteration += 1;
    }
    trajectory
}

/// Like `run`, for gradients that can fail. The first failure aborts
/// the whole run; no partial trajectory is returned.
pub fn try_run<G, E>(
    gradient: G,
    step_size: f64,
    num_iters: usize,
    x_0: ArrayView1<f64>,
) -> Result<Trajectory, Error>
where
    G: Fn(ArrayView1<f64>) -> Result<Array1<f64>, E>,
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    let mut trajectory = Trajectory::unvisited(num_iters, x_0.len());
    let mut x = x_0.to_owned();
    for iteration in 0..num_iters {
        trajectory.record(iteration, x.view());
        if iteration + 1 == num_iters {
            break;
        }
        let direction = gradient(x.view()).map_err(|e| Error::Gradient {
            iteration,
            error: e.into(),
        })?;
        if direction.len() != x.len() {
            return Err(Error::DimensionMismatch {
                expected: x.len(),
                found: direction.len(),
            });
        }
        x = step(x.view(), &direction, step_size);
    }
    Ok(trajectory)
}

/// Print every `every`th iterate of `problem` with its cost.
pub fn show_progress(problem: &DescentProblem, every: usize) {
    let surface = problem.surface;
    let descent = DerivativeDescent::new(
        surface.gradient_fn(),
        problem.step_size,
        problem.x_0.clone(),
    )
    .take(problem.num_iters);
    let descent = step_by(enumerate(descent), every);
    let descent = assess(descent, |numbered: &Numbered<Point>| {
        surface.cost(numbered.item.view())
    });
    let mut print_iter = tee(descent, |CostResult { result, cost }| {
        println!(
            "x_{} = {:.4}; f(x_{}) = {:.4}",
            result.count, result.item, result.count, cost
        );
    });
    while let Some(_x) = print_iter.next() {}
}
