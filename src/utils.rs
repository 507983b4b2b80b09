use crate::derivative_descent::{run, Point};
use crate::surface::Rosenbrock;
use crate::trajectory::Trajectory;
use ndarray::arr1;
use rand::distributions::Uniform;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

/// A descent to run: the surface, where to start, how far to step and
/// how many points to produce.
#[derive(Clone, Debug, PartialEq)]
pub struct DescentProblem {
    pub surface: Rosenbrock,
    pub x_0: Point,
    pub step_size: f64,
    pub num_iters: usize,
}

impl DescentProblem {
    pub fn solve(&self) -> Trajectory {
        run(
            self.surface.gradient_fn(),
            self.step_size,
            self.num_iters,
            self.x_0.view(),
        )
    }

    /// The same problem started from somewhere else.
    pub fn starting_at(&self, x_0: Point) -> DescentProblem {
        DescentProblem {
            x_0,
            ..self.clone()
        }
    }
}

/// The classic setup: a = 1, b = 100, starting at [-2, 2] with step
/// 0.02 for 100 points. This step is too large for the valley walls
/// at [-2, 2] and the run overflows.
pub fn make_valley_problem() -> DescentProblem {
    DescentProblem {
        surface: Rosenbrock::default(),
        x_0: arr1(&[-2.0, 2.0]),
        step_size: 0.02,
        num_iters: 100,
    }
}

/// The classic setup with a step small enough to make progress.
pub fn make_stable_valley_problem() -> DescentProblem {
    DescentProblem {
        step_size: 0.001,
        ..make_valley_problem()
    }
}

/// Draw `count` 2-d starting points uniformly from [low, high)^2.
///
/// The random oracle is of type `Pcg64`; pass one for reproducible
/// draws, otherwise it is seeded from entropy.
pub fn sample_starting_points(
    count: usize,
    low: f64,
    high: f64,
    custom_oracle: Option<Pcg64>,
) -> Vec<Point> {
    let mut oracle = match custom_oracle {
        Some(oracle) => oracle,
        None => Pcg64::from_entropy(),
    };
    let range = Uniform::from(low..high);
    (0..count)
        .map(|_| arr1(&[oracle.sample(&range), oracle.sample(&range)]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_samples_are_reproducible_and_bounded() {
        let first = sample_starting_points(20, -4.5, 4.5, Some(Pcg64::seed_from_u64(7)));
        let second = sample_starting_points(20, -4.5, 4.5, Some(Pcg64::seed_from_u64(7)));
        assert_eq!(first, second);
        assert_eq!(first.len(), 20);
        assert!(first
            .iter()
            .all(|x| x.len() == 2 && x.iter().all(|v| (-4.5..4.5).contains(v))));
    }

    #[test]
    fn starting_at_keeps_everything_else() {
        let p = make_valley_problem();
        let q = p.starting_at(arr1(&[0.0, 0.0]));
        assert_eq!(q.x_0, arr1(&[0.0, 0.0]));
        assert_eq!(q.surface, p.surface);
        assert_eq!(q.step_size, p.step_size);
        assert_eq!(q.num_iters, p.num_iters);
    }

    #[test]
    fn solve_uses_the_problem_surface() {
        let p = make_stable_valley_problem();
        let t = p.solve();
        assert_eq!(t.len(), p.num_iters);
        let expected = &p.x_0 - &(p.surface.gradient(p.x_0.view()) * p.step_size);
        assert_eq!(t.point(1), expected);
    }
}
