//! Trajectories as YAML documents, for plotting outside of Rust.
//!
//! One document per run:
//!
//! ```yaml
//! surface: {a: 1.0, b: 100.0}
//! step_size: 0.02
//! iteration: [0, 1, ...]
//! x: [[-2.0, 2.0], ...]
//! cost: [409.0, ...]
//! ```

use std::fs;
use std::path::Path;

use yaml_rust::yaml::{Array, Hash};
use yaml_rust::{Yaml, YamlEmitter};

use crate::trajectory::Trajectory;
use crate::utils::DescentProblem;
use crate::Error;

/// YAML spelling of a float; non-finite values use the YAML tags so
/// that they read back as floats.
fn real(v: f64) -> Yaml {
    let text = if v.is_nan() {
        ".nan".to_string()
    } else if v == f64::INFINITY {
        ".inf".to_string()
    } else if v == f64::NEG_INFINITY {
        "-.inf".to_string()
    } else {
        format!("{:?}", v)
    };
    Yaml::Real(text)
}

fn key(k: &str) -> Yaml {
    Yaml::String(k.to_string())
}

pub fn to_yaml(problem: &DescentProblem, trajectory: &Trajectory) -> Yaml {
    let mut surface = Hash::new();
    surface.insert(key("a"), real(problem.surface.a));
    surface.insert(key("b"), real(problem.surface.b));

    let iteration: Array = trajectory
        .iterations()
        .map(|i| Yaml::Integer(i as i64))
        .collect();
    let x: Array = trajectory
        .iter()
        .map(|p| Yaml::Array(p.iter().map(|v| real(*v)).collect()))
        .collect();
    let cost: Array = trajectory
        .costs(problem.surface.cost_fn())
        .iter()
        .map(|c| real(*c))
        .collect();

    let mut doc = Hash::new();
    doc.insert(key("surface"), Yaml::Hash(surface));
    doc.insert(key("step_size"), real(problem.step_size));
    doc.insert(key("iteration"), Yaml::Array(iteration));
    doc.insert(key("x"), Yaml::Array(x));
    doc.insert(key("cost"), Yaml::Array(cost));
    Yaml::Hash(doc)
}

/// Render documents one after another, each opened by `---`.
pub fn emit(docs: &[Yaml]) -> Result<String, Error> {
    let mut out = String::new();
    for doc in docs {
        let mut text = String::new();
        YamlEmitter::new(&mut text)
            .dump(doc)
            .map_err(|e| Error::Emit(format!("{:?}", e)))?;
        out.push_str(&text);
        out.push('\n');
    }
    Ok(out)
}

/// Write the documents to `path`, creating missing parent directories.
pub fn write<P: AsRef<Path>>(path: P, docs: &[Yaml]) -> Result<(), Error> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, emit(docs)?)?;
    Ok(())
}
