use crate::error::{BenchError, Result};
use crate::workloads::WorkloadKind;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming an optional TOML configuration file.
pub const CONFIG_ENV: &str = "PARBENCH_CONFIG";

// =============================================================================
// Per-workload sections
// =============================================================================

/// A seeded dataset table. Each workload gets its own type so that keys missing from a
/// present table fall back to that workload's sizes, not a shared generic default.
macro_rules! dataset_table {
    ($name:ident, $count:expr, $seed:expr) => {
        #[derive(Debug, Clone, PartialEq, Deserialize)]
        #[serde(default, deny_unknown_fields)]
        pub struct $name {
            pub count: usize,
            pub seed: u64,
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    count: $count,
                    seed: $seed,
                }
            }
        }
    };
}

dataset_table!(FilterSortConfig, 5_000_000, 1);
dataset_table!(MinMaxConfig, 5_000_000, 2);
dataset_table!(MathConfig, 3_000_000, 5);

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FactorialConfig {
    pub max: u32,
}

impl Default for FactorialConfig {
    fn default() -> Self {
        Self { max: 20 }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TextConfig {
    pub lines: usize,
    pub file_name: String,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            lines: 100_000,
            file_name: "parbench_big_text.txt".to_string(),
        }
    }
}

impl TextConfig {
    /// Corpus location under the platform temp directory.
    pub fn corpus_path(&self) -> PathBuf {
        env::temp_dir().join(&self.file_name)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SumAverageConfig {
    pub arrays: usize,
    pub length: usize,
    pub seed_base: u64,
}

impl Default for SumAverageConfig {
    fn default() -> Self {
        Self {
            arrays: 5,
            length: 1_000_000,
            seed_base: 100,
        }
    }
}

// =============================================================================
// Top-level configuration
// =============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BenchConfig {
    pub log_level: String,
    pub threads: Option<usize>,
    pub verify: bool,
    pub pause_on_exit: bool,
    pub workloads: Vec<WorkloadKind>,
    pub filter_sort: FilterSortConfig,
    pub factorial: FactorialConfig,
    pub min_max: MinMaxConfig,
    pub text: TextConfig,
    pub sum_average: SumAverageConfig,
    pub math: MathConfig,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            threads: None,
            verify: true,
            pause_on_exit: true,
            workloads: WorkloadKind::ALL.to_vec(),
            filter_sort: FilterSortConfig::default(),
            factorial: FactorialConfig::default(),
            min_max: MinMaxConfig::default(),
            text: TextConfig::default(),
            sum_average: SumAverageConfig::default(),
            math: MathConfig::default(),
        }
    }
}

impl BenchConfig {
    /// Loads from the file named by `PARBENCH_CONFIG`, or returns defaults when unset.
    pub fn load() -> Result<Self> {
        match env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_file(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| BenchError::io(path, e))?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: BenchConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.threads == Some(0) {
            return Err(BenchError::config("threads must be at least 1"));
        }
        if self.workloads.is_empty() {
            return Err(BenchError::config("at least one workload must be selected"));
        }
        if self.text.file_name.trim().is_empty() {
            return Err(BenchError::config("text.file_name must not be empty"));
        }
        // The corpus must stay inside the temp directory
        let name = Path::new(&self.text.file_name);
        if name.is_absolute() || name.components().count() != 1 || name.file_name().is_none() {
            return Err(BenchError::config(
                "text.file_name must be a bare file name without directories",
            ));
        }
        Ok(())
    }
}
