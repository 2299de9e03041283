use super::{compare_paths, WorkloadKind};
use crate::config::BenchConfig;
use crate::data::ensure_text_corpus;
use crate::error::{BenchError, Result};
use crate::report::WorkloadReport;
use rayon::prelude::*;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Latin and Cyrillic vowels, both cases.
pub const VOWELS: &str = "aeiouAEIOUаеёиоуыэюяАЕЁИОУЫЭЮЯ";

pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(c)
}

pub fn remove_vowels(s: &str) -> String {
    s.chars().filter(|&c| !is_vowel(c)).collect()
}

fn open_lines(path: &Path) -> Result<std::io::Lines<BufReader<File>>> {
    let file = File::open(path).map_err(|e| BenchError::io(path, e))?;
    Ok(BufReader::new(file).lines())
}

/// Reads `path` lazily and strips vowels from each line, keeping file order.
pub fn sequential(path: &Path) -> Result<Vec<String>> {
    open_lines(path)?
        .map(|line| {
            line.map(|l| remove_vowels(&l))
                .map_err(|e| BenchError::io(path, e))
        })
        .collect()
}

/// Same per-line transform, fed to the pool straight from the lazy reader.
/// Output order is unspecified.
pub fn parallel(path: &Path) -> Result<Vec<String>> {
    open_lines(path)?
        .par_bridge()
        .map(|line| {
            line.map(|l| remove_vowels(&l))
                .map_err(|e| BenchError::io(path, e))
        })
        .collect()
}

fn same_lines(seq: &[String], par: &[String]) -> bool {
    if seq.len() != par.len() {
        return false;
    }
    let mut seq = seq.to_vec();
    let mut par = par.to_vec();
    seq.par_sort_unstable();
    par.par_sort_unstable();
    seq == par
}

pub fn run(config: &BenchConfig) -> Result<WorkloadReport> {
    let path = config.text.corpus_path();
    ensure_text_corpus(&path, config.text.lines)?;

    let report = compare_paths(
        WorkloadKind::Text,
        config.verify,
        || sequential(&path),
        || parallel(&path),
        |seq, par| same_lines(seq, par),
    )?;
    Ok(report.with_detail(format!("Text file used: {}", path.display())))
}
