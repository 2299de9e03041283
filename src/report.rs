use crate::workloads::WorkloadKind;
use colored::Colorize;
use std::fmt;

/// Sequential and parallel timings of one workload run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingSample {
    pub sequential_ms: u64,
    pub parallel_ms: u64,
}

impl TimingSample {
    pub fn new(sequential_ms: u64, parallel_ms: u64) -> Self {
        Self {
            sequential_ms,
            parallel_ms,
        }
    }

    /// sequential / parallel, or 0 when the parallel run took under a millisecond.
    pub fn speedup(&self) -> f64 {
        if self.parallel_ms == 0 {
            0.0
        } else {
            self.sequential_ms as f64 / self.parallel_ms as f64
        }
    }
}

impl fmt::Display for TimingSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Sequential: {} ms", self.sequential_ms)?;
        writeln!(f, "Parallel  : {} ms", self.parallel_ms)?;
        write!(f, "Speedup   : {:.2}x", self.speedup())
    }
}

pub fn render_timing(sample: &TimingSample) -> String {
    sample.to_string()
}

pub fn report(sequential_ms: u64, parallel_ms: u64) {
    println!("{}", render_timing(&TimingSample::new(sequential_ms, parallel_ms)));
}

/// Outcome of one workload, ready to print.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkloadReport {
    pub kind: WorkloadKind,
    pub sample: TimingSample,
    pub detail: Option<String>,
}

impl WorkloadReport {
    pub fn new(kind: WorkloadKind, sample: TimingSample) -> Self {
        Self {
            kind,
            sample,
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn print(&self) {
        println!("{}", self.kind.label().bold().cyan());
        report(self.sample.sequential_ms, self.sample.parallel_ms);
        if let Some(detail) = &self.detail {
            println!("{}", detail);
        }
        println!();
    }
}
