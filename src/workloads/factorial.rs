use super::{compare_paths, WorkloadKind};
use crate::config::BenchConfig;
use crate::error::Result;
use crate::report::WorkloadReport;
use num_bigint::BigUint;
use rayon::prelude::*;

/// n! in arbitrary precision. `factorial(0) == 1`.
pub fn factorial(n: u32) -> BigUint {
    (2..=n).fold(BigUint::from(1u32), |acc, i| acc * i)
}

pub fn sequential(nums: &[u32]) -> Vec<BigUint> {
    nums.iter().map(|&n| factorial(n)).collect()
}

pub fn parallel(nums: &[u32]) -> Vec<BigUint> {
    nums.par_iter().map(|&n| factorial(n)).collect()
}

pub fn run(config: &BenchConfig) -> Result<WorkloadReport> {
    let nums: Vec<u32> = (1..=config.factorial.max).collect();

    compare_paths(
        WorkloadKind::Factorial,
        config.verify,
        || Ok(sequential(&nums)),
        || Ok(parallel(&nums)),
        |seq, par| seq == par,
    )
}
