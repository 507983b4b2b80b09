//! Example from top level crate documentation
use ndarray::{arr1, ArrayView1};
use streaming_iterator::*;
use valley_descent::derivative_descent::*;
use valley_descent::surface::Rosenbrock;
use valley_descent::*;

fn main() {
    // Problem: minimize the Rosenbrock valley with a = 1, b = 100
    let surface = Rosenbrock::default();

    // An iterative solution by gradient descent
    let gradient = surface.gradient_fn();
    let step_size = 0.001;
    let x_0 = arr1(&[-2.0, 2.0]);

    // Au naturale:
    let mut x = x_0.clone();
    for i in 0..10 {
        println!("x_{} = {:.4}; f(x_{}) = {:.4}", i, x, i, surface.cost(x.view()));
        x = &x - &(gradient(x.view()) * step_size);
    }

    // Using replaceable components:
    let dd = DerivativeDescent::new(gradient, step_size, x_0);
    let dd = enumerate(dd.take(10));
    let mut dd = assess(dd, |numbered: &Numbered<Point>| {
        surface.cost(numbered.item.view())
    });
    while let Some(CostResult { result, cost }) = dd.next() {
        println!(
            "x_{} = {:.4}; f(x_{}) = {:.4}",
            result.count, result.item, result.count, cost
        );
    }

    // The whole trajectory at once, thinned for display:
    let trajectory = run(surface.gradient_fn(), step_size, 1000, arr1(&[-2.0, 2.0]).view());
    let costs = trajectory.costs(|x: ArrayView1<f64>| surface.cost(x));
    for i in trajectory.iterations().step_by(200) {
        println!("x_{} = {:.4}; f(x_{}) = {:.4}", i, trajectory.point(i), i, costs[i]);
    }
}
