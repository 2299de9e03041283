use super::{compare_paths, WorkloadKind};
use crate::config::BenchConfig;
use crate::data::generate_doubles;
use crate::error::{BenchError, Result};
use crate::report::WorkloadReport;
use rayon::prelude::*;

/// `sqrt(x^3 + sqrt(x))`. Negative input is a domain error on both paths.
pub fn transform(index: usize, x: f64) -> Result<f64> {
    if x < 0.0 {
        return Err(BenchError::Domain { index, value: x });
    }
    Ok((x.powi(3) + x.sqrt()).sqrt())
}

pub fn sequential(data: &[f64]) -> Result<Vec<f64>> {
    data.iter()
        .enumerate()
        .map(|(i, &x)| transform(i, x))
        .collect()
}

pub fn parallel(data: &[f64]) -> Result<Vec<f64>> {
    data.par_iter()
        .enumerate()
        .map(|(i, &x)| transform(i, x))
        .collect()
}

fn bitwise_equal(a: &[f64], b: &[f64]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.to_bits() == y.to_bits())
}

pub fn run(config: &BenchConfig) -> Result<WorkloadReport> {
    let data = generate_doubles(config.math.count, config.math.seed);

    compare_paths(
        WorkloadKind::Math,
        config.verify,
        || sequential(&data),
        || parallel(&data),
        |seq, par| bitwise_equal(seq, par),
    )
}
