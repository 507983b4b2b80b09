//! Run configuration, read from YAML.
//!
//! ```yaml
//! surface:
//!   a: 1.0
//!   b: 100.0
//! x0: [-2.0, 2.0]
//! step_size: 0.001
//! num_iters: 100
//! report_every: 10
//! random_starts: 4
//! seed: 7
//! output: ./target/trajectory.yaml
//! ```
//!
//! Every key is optional. `output: ~` disables writing the trajectory.

use std::fs;
use std::path::{Path, PathBuf};

use rand::SeedableRng;
use rand_pcg::Pcg64;
use yaml_rust::{Yaml, YamlLoader};

use crate::derivative_descent::Point;
use crate::utils::{make_valley_problem, DescentProblem};
use crate::Error;

pub const DEFAULT_OUTPUT: &str = "./target/trajectory.yaml";

const KEYS: [&str; 8] = [
    "surface",
    "x0",
    "step_size",
    "num_iters",
    "report_every",
    "random_starts",
    "seed",
    "output",
];

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub problem: DescentProblem,
    /// Print every this many iterates.
    pub report_every: usize,
    /// Extra runs from random starting points, besides `problem.x_0`.
    pub random_starts: usize,
    pub seed: Option<u64>,
    pub output: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            problem: make_valley_problem(),
            report_every: 10,
            random_starts: 0,
            seed: None,
            output: Some(PathBuf::from(DEFAULT_OUTPUT)),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Config, Error> {
        let text = fs::read_to_string(path)?;
        Config::from_yaml_str(&text)
    }

    pub fn from_yaml_str(text: &str) -> Result<Config, Error> {
        let docs = YamlLoader::load_from_str(text)?;
        let mut config = Config::default();
        let doc = match docs.first() {
            None | Some(Yaml::Null) => return Ok(config),
            Some(doc @ Yaml::Hash(_)) => doc,
            Some(other) => return Err(invalid("the configuration", "a mapping", other)),
        };
        if let Yaml::Hash(hash) = doc {
            for key in hash.keys() {
                match key.as_str() {
                    Some(k) if KEYS.contains(&k) => {}
                    _ => return Err(Error::Config(format!("unknown key {:?}", key))),
                }
            }
        }

        let problem = &mut config.problem;
        match &doc["surface"] {
            Yaml::BadValue | Yaml::Null => {}
            Yaml::Hash(hash) => {
                for key in hash.keys() {
                    match key.as_str() {
                        Some("a") | Some("b") => {}
                        _ => return Err(Error::Config(format!("unknown key surface.{:?}", key))),
                    }
                }
                if let Some(a) = number(&doc["surface"]["a"], "surface.a")? {
                    problem.surface.a = a;
                }
                if let Some(b) = number(&doc["surface"]["b"], "surface.b")? {
                    problem.surface.b = b;
                }
            }
            other => return Err(invalid("surface", "a mapping", other)),
        }
        if let Some(x_0) = point(&doc["x0"], "x0")? {
            problem.x_0 = x_0;
        }
        if let Some(step_size) = number(&doc["step_size"], "step_size")? {
            problem.step_size = step_size;
        }
        if let Some(num_iters) = count(&doc["num_iters"], "num_iters")? {
            if num_iters == 0 {
                return Err(Error::Config("num_iters must be at least 1".to_string()));
            }
            problem.num_iters = num_iters;
        }
        if let Some(report_every) = count(&doc["report_every"], "report_every")? {
            if report_every == 0 {
                return Err(Error::Config("report_every must be at least 1".to_string()));
            }
            config.report_every = report_every;
        }
        if let Some(random_starts) = count(&doc["random_starts"], "random_starts")? {
            config.random_starts = random_starts;
        }
        if let Some(seed) = count(&doc["seed"], "seed")? {
            config.seed = Some(seed as u64);
        }
        match &doc["output"] {
            Yaml::BadValue => {}
            Yaml::Null => config.output = None,
            Yaml::String(path) => config.output = Some(PathBuf::from(path)),
            other => return Err(invalid("output", "a path", other)),
        }
        Ok(config)
    }

    /// The seeded oracle for random starts, if a seed was given.
    pub fn oracle(&self) -> Option<Pcg64> {
        self.seed.map(Pcg64::seed_from_u64)
    }
}

fn invalid(key: &str, expected: &str, found: &Yaml) -> Error {
    Error::Config(format!("{} must be {}, got {:?}", key, expected, found))
}

/// `None` when the key is absent or null.
fn number(value: &Yaml, key: &str) -> Result<Option<f64>, Error> {
    match value {
        Yaml::BadValue | Yaml::Null => Ok(None),
        Yaml::Integer(i) => Ok(Some(*i as f64)),
        Yaml::Real(_) => match value.as_f64() {
            Some(v) => Ok(Some(v)),
            None => Err(invalid(key, "a number", value)),
        },
        other => Err(invalid(key, "a number", other)),
    }
}

fn count(value: &Yaml, key: &str) -> Result<Option<usize>, Error> {
    match value {
        Yaml::BadValue | Yaml::Null => Ok(None),
        Yaml::Integer(i) if *i >= 0 => Ok(Some(*i as usize)),
        other => Err(invalid(key, "a non-negative integer", other)),
    }
}

fn point(value: &Yaml, key: &str) -> Result<Option<Point>, Error> {
    let items = match value {
        Yaml::BadValue | Yaml::Null => return Ok(None),
        Yaml::Array(items) => items,
        other => return Err(invalid(key, "a list of 2 numbers", other)),
    };
    if items.len() != 2 {
        return Err(invalid(key, "a list of 2 numbers", value));
    }
    let mut coordinates = Vec::with_capacity(items.len());
    for item in items {
        match number(item, key)? {
            Some(v) => coordinates.push(v),
            None => return Err(invalid(key, "a list of 2 numbers", value)),
        }
    }
    Ok(Some(Point::from(coordinates)))
}
