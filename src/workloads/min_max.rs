use super::{compare_paths, WorkloadKind};
use crate::config::BenchConfig;
use crate::data::generate_ints;
use crate::error::Result;
use crate::report::WorkloadReport;
use rayon::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinMax {
    pub min: i32,
    pub max: i32,
}

/// `None` means the dataset was empty.
pub fn sequential(data: &[i32]) -> Option<MinMax> {
    let min = data.iter().copied().min()?;
    let max = data.iter().copied().max()?;
    Some(MinMax { min, max })
}

pub fn parallel(data: &[i32]) -> Option<MinMax> {
    let min = data.par_iter().copied().min()?;
    let max = data.par_iter().copied().max()?;
    Some(MinMax { min, max })
}

pub fn run(config: &BenchConfig) -> Result<WorkloadReport> {
    let data = generate_ints(config.min_max.count, config.min_max.seed);

    compare_paths(
        WorkloadKind::MinMax,
        config.verify,
        || Ok(sequential(&data)),
        || Ok(parallel(&data)),
        |seq, par| seq == par,
    )
}
