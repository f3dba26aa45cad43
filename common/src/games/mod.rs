mod output;
mod pacing;
mod session_rng;

pub mod tictactoe;

pub use output::{ConsoleOutput, OutputSink};
pub use pacing::{DEFAULT_PACING_MS, NoPacing, PacingService, ThreadSleepPacing, effective_delay};
pub use session_rng::SessionRng;
