use std::{fmt::Display, future::Future, time::Instant};

/// Awaits `future` and logs how long it took
///
/// Successful results are logged at `debug`, errors at `warn` along with the error itself.
/// The result is returned unchanged.
pub async fn measure<T, E, F>(label: &str, future: F) -> Result<T, E>
where
    F: Future<Output = Result<T, E>>,
    E: Display,
{
    let start = Instant::now();
    let result = future.await;
    let elapsed_ms = start.elapsed().as_millis();

    match &result {
        Ok(_) => tracing::debug!("{} completed in {} ms", label, elapsed_ms),
        Err(e) => tracing::warn!("{} failed after {} ms: {}", label, elapsed_ms, e),
    }

    result
}

/// Awaits an infallible `future` and logs how long it took at `debug`
pub async fn measure_value<T, F>(label: &str, future: F) -> T
where
    F: Future<Output = T>,
{
    let start = Instant::now();
    let value = future.await;

    tracing::debug!("{} completed in {} ms", label, start.elapsed().as_millis());

    value
}
