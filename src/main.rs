//! Run gradient descent on the Rosenbrock valley and write the
//! trajectories for plotting.
//!
//! Usage: `valley_descent [config.yaml]`. Without a configuration the
//! classic setup is used. Set `RUST_LOG=debug` for per-run summaries.
use std::env;
use std::process;

use log::{debug, info, warn};
use valley_descent::config::Config;
use valley_descent::derivative_descent::show_progress;
use valley_descent::output;
use valley_descent::utils::sample_starting_points;
use valley_descent::Error;

/// Random starts are drawn from this square, which frames the valley.
const START_LOW: f64 = -4.5;
const START_HIGH: f64 = 4.5;

fn descend(config: &Config) -> Result<(), Error> {
    let problem = &config.problem;
    info!(
        "descending a = {}, b = {} from {} with step {} for {} points",
        problem.surface.a, problem.surface.b, problem.x_0, problem.step_size, problem.num_iters
    );
    show_progress(problem, config.report_every);

    let mut starts = vec![problem.x_0.clone()];
    if config.random_starts > 0 {
        starts.extend(sample_starting_points(
            config.random_starts,
            START_LOW,
            START_HIGH,
            config.oracle(),
        ));
    }

    let mut docs = Vec::with_capacity(starts.len());
    for x_0 in starts {
        let run = problem.starting_at(x_0);
        let trajectory = run.solve();
        match trajectory.last() {
            Some(x) if x.iter().all(|v| v.is_finite()) => debug!(
                "from {} reached {} with cost {:.6}",
                run.x_0,
                x,
                run.surface.cost(x)
            ),
            Some(x) => warn!(
                "from {} the descent left the finite range (last point {}); the step size is too large",
                run.x_0, x
            ),
            None => {}
        }
        docs.push(output::to_yaml(&run, &trajectory));
    }

    if let Some(path) = &config.output {
        output::write(path, &docs)?;
        info!("wrote {} trajectories to {}", docs.len(), path.display());
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let config = match env::args().nth(1) {
        Some(path) => Config::load(&path),
        None => Ok(Config::default()),
    };
    if let Err(error) = config.and_then(|config| descend(&config)) {
        eprintln!("{}", error);
        process::exit(1);
    }
}
