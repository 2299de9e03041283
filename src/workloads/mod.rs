//! The six sequential-versus-parallel workloads.
//!
//! Every workload module exposes a pure `sequential` and `parallel` function over the same
//! input plus a `run` that generates data, times both paths and (optionally) checks that they
//! agree. Verification happens outside the timed region.

pub mod factorial;
pub mod filter_sort;
pub mod math;
pub mod min_max;
pub mod sum_average;
pub mod text;

use crate::config::BenchConfig;
use crate::error::{BenchError, Result};
use crate::report::{TimingSample, WorkloadReport};
use crate::timing::{measure, Measured};
use serde::Deserialize;
use std::fmt;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkloadKind {
    FilterSort,
    Factorial,
    MinMax,
    Text,
    SumAverage,
    Math,
}

impl WorkloadKind {
    pub const ALL: [WorkloadKind; 6] = [
        WorkloadKind::FilterSort,
        WorkloadKind::Factorial,
        WorkloadKind::MinMax,
        WorkloadKind::Text,
        WorkloadKind::SumAverage,
        WorkloadKind::Math,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            WorkloadKind::FilterSort => "filter_sort",
            WorkloadKind::Factorial => "factorial",
            WorkloadKind::MinMax => "min_max",
            WorkloadKind::Text => "text",
            WorkloadKind::SumAverage => "sum_average",
            WorkloadKind::Math => "math",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WorkloadKind::FilterSort => "Task 1: Filter + sort large dataset",
            WorkloadKind::Factorial => "Task 2: Factorials",
            WorkloadKind::MinMax => "Task 3: Min/Max in large array",
            WorkloadKind::Text => "Task 4: Remove vowels from big text file",
            WorkloadKind::SumAverage => "Task 5: Sum + average for multiple arrays",
            WorkloadKind::Math => "Task 6: Complex math operations over array",
        }
    }
}

impl fmt::Display for WorkloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

pub fn run_workload(kind: WorkloadKind, config: &BenchConfig) -> Result<WorkloadReport> {
    info!(workload = %kind, "starting");
    let report = match kind {
        WorkloadKind::FilterSort => filter_sort::run(config),
        WorkloadKind::Factorial => factorial::run(config),
        WorkloadKind::MinMax => min_max::run(config),
        WorkloadKind::Text => text::run(config),
        WorkloadKind::SumAverage => sum_average::run(config),
        WorkloadKind::Math => math::run(config),
    }?;
    info!(
        workload = %kind,
        sequential_ms = report.sample.sequential_ms,
        parallel_ms = report.sample.parallel_ms,
        "finished"
    );
    Ok(report)
}

/// Runs the configured workloads in order, handing each report to `on_report` as soon as it
/// is ready. The first failure aborts the run.
pub fn run_all(
    config: &BenchConfig,
    mut on_report: impl FnMut(&WorkloadReport),
) -> Result<Vec<WorkloadReport>> {
    config
        .workloads
        .iter()
        .map(|&kind| {
            let report = run_workload(kind, config)?;
            on_report(&report);
            Ok(report)
        })
        .collect()
}

/// Times `sequential` then `parallel` and, when `verify` is set, compares the two results
/// with `agree`.
pub(crate) fn compare_paths<T>(
    kind: WorkloadKind,
    verify: bool,
    sequential: impl FnOnce() -> Result<T>,
    parallel: impl FnOnce() -> Result<T>,
    agree: impl FnOnce(&T, &T) -> bool,
) -> Result<WorkloadReport> {
    let Measured {
        value: seq_value,
        elapsed_ms: sequential_ms,
    } = measure(sequential)?;
    let Measured {
        value: par_value,
        elapsed_ms: parallel_ms,
    } = measure(parallel)?;

    if verify {
        if !agree(&seq_value, &par_value) {
            return Err(BenchError::Mismatch {
                workload: kind.key(),
            });
        }
        debug!(workload = %kind, "sequential and parallel results agree");
    }

    Ok(WorkloadReport::new(
        kind,
        TimingSample::new(sequential_ms, parallel_ms),
    ))
}
