use super::{compare_paths, WorkloadKind};
use crate::config::BenchConfig;
use crate::data::generate_ints;
use crate::error::Result;
use crate::report::WorkloadReport;
use rayon::prelude::*;

fn keep(x: i32) -> bool {
    x % 2 == 0 && x > 1000
}

/// Even values above 1000, largest first.
pub fn sequential(data: &[i32]) -> Vec<i32> {
    let mut kept: Vec<i32> = data.iter().copied().filter(|&x| keep(x)).collect();
    kept.sort_unstable_by(|a, b| b.cmp(a));
    kept
}

pub fn parallel(data: &[i32]) -> Vec<i32> {
    let mut kept: Vec<i32> = data.par_iter().copied().filter(|&x| keep(x)).collect();
    kept.par_sort_unstable_by(|a, b| b.cmp(a));
    kept
}

pub fn run(config: &BenchConfig) -> Result<WorkloadReport> {
    let data = generate_ints(config.filter_sort.count, config.filter_sort.seed);

    compare_paths(
        WorkloadKind::FilterSort,
        config.verify,
        || Ok(sequential(&data)),
        || Ok(parallel(&data)),
        |seq, par| seq == par,
    )
}
