use std::hint::black_box;
use std::time::Instant;

/// Value produced by a timed action together with its wall-clock cost.
#[derive(Debug, Clone, PartialEq)]
pub struct Measured<T> {
    pub value: T,
    pub elapsed_ms: u64,
}

/// Runs `action` once and times it in whole milliseconds.
///
/// An `Err` from the action is returned unchanged and no timing is produced.
pub fn measure<T, E>(action: impl FnOnce() -> Result<T, E>) -> Result<Measured<T>, E> {
    let start = Instant::now();
    let value = black_box(action()?);
    let elapsed_ms = start.elapsed().as_millis() as u64;
    Ok(Measured { value, elapsed_ms })
}

/// Infallible variant that keeps only the elapsed time.
pub fn measure_ms<T>(action: impl FnOnce() -> T) -> u64 {
    let start = Instant::now();
    black_box(action());
    start.elapsed().as_millis() as u64
}
