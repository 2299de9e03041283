use super::{compare_paths, WorkloadKind};
use crate::config::BenchConfig;
use crate::data::generate_ints;
use crate::error::Result;
use crate::report::WorkloadReport;
use rayon::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SumAverage {
    pub sum: i64,
    pub average: f64,
}

/// Widening sum and mean of one array. An empty array yields `(0, 0.0)`.
pub fn sum_average(values: &[i32]) -> SumAverage {
    let sum: i64 = values.iter().map(|&x| x as i64).sum();
    let average = if values.is_empty() {
        0.0
    } else {
        sum as f64 / values.len() as f64
    };
    SumAverage { sum, average }
}

pub fn sequential(arrays: &[Vec<i32>]) -> Vec<SumAverage> {
    arrays.iter().map(|arr| sum_average(arr)).collect()
}

/// One task per array; the arrays themselves are summed serially.
pub fn parallel(arrays: &[Vec<i32>]) -> Vec<SumAverage> {
    arrays.par_iter().map(|arr| sum_average(arr)).collect()
}

pub fn run(config: &BenchConfig) -> Result<WorkloadReport> {
    let cfg = &config.sum_average;
    let arrays: Vec<Vec<i32>> = (0..cfg.arrays)
        .map(|i| generate_ints(cfg.length, cfg.seed_base.wrapping_add(i as u64)))
        .collect();

    compare_paths(
        WorkloadKind::SumAverage,
        config.verify,
        || Ok(sequential(&arrays)),
        || Ok(parallel(&arrays)),
        |seq, par| seq == par,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_to_five() {
        let result = sum_average(&[1, 2, 3, 4, 5]);
        assert_eq!(result.sum, 15);
        assert_eq!(result.average, 3.0);
    }

    #[test]
    fn test_paths_agree_per_array() {
        let arrays = vec![vec![1, 2, 3, 4, 5], vec![], vec![-10, 10, 7]];
        let seq = sequential(&arrays);
        assert_eq!(seq, parallel(&arrays));
        assert_eq!(seq[0], SumAverage { sum: 15, average: 3.0 });
    }

    #[test]
    fn test_empty_array_policy() {
        assert_eq!(sum_average(&[]), SumAverage { sum: 0, average: 0.0 });
    }

    #[test]
    fn test_no_overflow() {
        let values = vec![i32::MAX; 4];
        let result = sum_average(&values);
        assert_eq!(result.sum, i32::MAX as i64 * 4);
        assert_eq!(result.average, i32::MAX as f64);
    }

    #[test]
    fn test_seed_base_near_max_wraps() {
        let mut config = crate::config::BenchConfig::default();
        config.sum_average.arrays = 3;
        config.sum_average.length = 10;
        config.sum_average.seed_base = u64::MAX - 1;
        let report = run(&config).unwrap();
        assert_eq!(report.kind, WorkloadKind::SumAverage);
    }

    #[test]
    fn test_no_arrays() {
        assert!(sequential(&[]).is_empty());
        assert!(parallel(&[]).is_empty());
    }
}
