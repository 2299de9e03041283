//! Deterministic synthetic inputs for the workloads.

use crate::error::{BenchError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Non-negative integers in `0..i32::MAX`. Same `(count, seed)` gives the same sequence.
pub fn generate_ints(count: usize, seed: u64) -> Vec<i32> {
    debug!(count, seed, "generating integers");
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| rng.gen_range(0..i32::MAX)).collect()
}

/// Floats in `[0, 1000)`. Same `(count, seed)` gives the same sequence.
pub fn generate_doubles(count: usize, seed: u64) -> Vec<f64> {
    debug!(count, seed, "generating doubles");
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| rng.gen::<f64>() * 1000.0).collect()
}

/// One corpus line. Carries Latin and Cyrillic vowels in both cases.
pub fn corpus_line(index: usize) -> String {
    format!(
        "This is a sample line number {} with some random vowels aeio uAEIOU аеиоу АЕЁИОУ.",
        index
    )
}

/// Writes `line_count` synthetic lines to `path` unless a file is already there.
///
/// Returns `true` when the file was created by this call.
pub fn ensure_text_corpus(path: &Path, line_count: usize) -> Result<bool> {
    if path.exists() {
        debug!(path = %path.display(), "reusing existing text corpus");
        return Ok(false);
    }

    let file = File::create(path).map_err(|e| BenchError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    for i in 0..line_count {
        writeln!(writer, "{}", corpus_line(i)).map_err(|e| BenchError::io(path, e))?;
    }
    writer.flush().map_err(|e| BenchError::io(path, e))?;

    debug!(path = %path.display(), lines = line_count, "created text corpus");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::fs;
    use std::sync::{Arc, Mutex};
    use tempfile::tempdir;

    #[test]
    fn test_generate_ints_length_and_range() {
        let data = generate_ints(10_000, 7);
        assert_eq!(data.len(), 10_000);
        assert!(data.iter().all(|&x| x >= 0));
    }

    #[test]
    fn test_generate_doubles_range() {
        let data = generate_doubles(10_000, 7);
        assert_eq!(data.len(), 10_000);
        assert!(data.iter().all(|&x| (0.0..1000.0).contains(&x)));
    }

    #[test]
    fn test_different_seeds_differ() {
        assert_ne!(generate_ints(100, 1), generate_ints(100, 2));
    }

    #[test]
    fn test_zero_count_is_empty() {
        assert!(generate_ints(0, 1).is_empty());
        assert!(generate_doubles(0, 1).is_empty());
    }

    #[test]
    fn test_corpus_line_contents() {
        let line = corpus_line(42);
        assert!(line.contains("42"));
        assert!(line.contains('a'));
        assert!(line.contains('а'));
        assert!(line.contains('Ё'));
    }

    #[test]
    fn test_ensure_text_corpus_creates_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("corpus.txt");

        assert!(ensure_text_corpus(&path, 3).unwrap());

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], corpus_line(0));
        assert_eq!(lines[2], corpus_line(2));
    }

    #[test]
    fn test_ensure_text_corpus_is_idempotent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("corpus.txt");

        ensure_text_corpus(&path, 5).unwrap();
        let first = fs::read(&path).unwrap();

        // Different line count must not rewrite an existing file
        assert!(!ensure_text_corpus(&path, 50).unwrap());
        assert_eq!(fs::read(&path).unwrap(), first);
    }

    #[test]
    fn test_ensure_text_corpus_keeps_foreign_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("corpus.txt");
        fs::write(&path, "hand written\n").unwrap();

        assert!(!ensure_text_corpus(&path, 10).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "hand written\n");
    }

    #[test]
    fn test_ensure_text_corpus_unwritable_location() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("corpus.txt");

        let err = ensure_text_corpus(&path, 1).unwrap_err();
        assert!(matches!(err, BenchError::Io { .. }));
    }

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_generators_emit_debug_events() {
        let capture = Capture::default();
        let writer = capture.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            generate_ints(3, 11);
            generate_doubles(4, 12);
        });

        let output = String::from_utf8(capture.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("generating integers"));
        assert!(output.contains("count=3"));
        assert!(output.contains("seed=11"));
        assert!(output.contains("generating doubles"));
        assert!(output.contains("seed=12"));
    }

    proptest! {
        #[test]
        fn test_generate_ints_deterministic(count in 0usize..2_000, seed: u64) {
            prop_assert_eq!(generate_ints(count, seed), generate_ints(count, seed));
        }

        #[test]
        fn test_generate_doubles_deterministic(count in 0usize..2_000, seed: u64) {
            let a = generate_doubles(count, seed);
            let b = generate_doubles(count, seed);
            prop_assert_eq!(a.len(), count);
            prop_assert!(a.iter().zip(&b).all(|(x, y)| x.to_bits() == y.to_bits()));
        }
    }
}
