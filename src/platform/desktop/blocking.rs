use std::time::Instant;

/// Runs `f` on the UI thread and logs how long it held it.
pub fn run_blocking<F, T>(label: &str, f: F) -> T
where
    F: FnOnce() -> T,
{
    let started = Instant::now();
    let result = f();
    tracing::debug!(
        task = label,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "blocking task finished"
    );
    result
}
