//! # parbench
//!
//! Sequential versus data-parallel timings for six small workloads: filter + sort,
//! factorials, min/max, vowel stripping over a text file, per-array sum/average and
//! elementwise math. Parallel execution is delegated to `rayon`.
//!
//! ## Running
//!
//! ```bash
//! cargo run --release
//! PARBENCH_CONFIG=bench.toml RUST_LOG=info cargo run --release
//! ```
//!
//! ## Key Dependencies
//!
//! - `rayon` - Parallel iterators and the worker pool
//! - `rand` - Seeded data generation
//! - `num-bigint` - Arbitrary precision factorials
//! - `thiserror` - Error enum
//! - `toml` / `serde` - Configuration file
//! - `tracing` - Diagnostics on stderr

pub mod config;
pub mod data;
pub mod error;
pub mod logging;
pub mod report;
pub mod timing;
pub mod workloads;

pub use config::BenchConfig;
pub use error::{BenchError, Result};
pub use report::{report, TimingSample, WorkloadReport};
pub use timing::{measure, measure_ms, Measured};
pub use workloads::{run_all, run_workload, WorkloadKind};
