use std::time::Duration;

pub const DEFAULT_PACING_MS: u64 = 1000;

/// Delay between two consecutive moves.
pub trait PacingService {
    fn wait(&mut self, millis: i64);
}

/// Zero or negative requests fall back to [`DEFAULT_PACING_MS`] instead of skipping the wait.
pub fn effective_delay(millis: i64) -> Duration {
    match u64::try_from(millis) {
        Ok(millis) if millis > 0 => Duration::from_millis(millis),
        _ => Duration::from_millis(DEFAULT_PACING_MS),
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadSleepPacing;

impl PacingService for ThreadSleepPacing {
    fn wait(&mut self, millis: i64) {
        std::thread::sleep(effective_delay(millis));
    }
}

/// Returns immediately. Used for simulations and benches.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoPacing;

impl PacingService for NoPacing {
    fn wait(&mut self, _millis: i64) {}
}
