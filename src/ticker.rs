use std::time::{Duration, Instant};

/// Countdown re-evaluation period: group tiers may be up to this stale
pub const COUNTDOWN_TICK: Duration = Duration::from_secs(1);

/// Default period between full data refreshes
pub const DEFAULT_REFRESH: Duration = Duration::from_secs(60);

/// Resize re-render debounce window (single-flight)
pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(250);

/// Input poll timeout for the event loop
pub const POLL_TIMEOUT: Duration = Duration::from_millis(250);

/// A fixed-period timer driven by the event loop. The countdown tick and
/// the refresh tick are independent instances with no shared state;
/// dropping a ticker when the loop exits is its cancellation.
#[derive(Debug)]
pub struct Ticker {
    period: Duration,
    last: Instant,
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            last: Instant::now(),
        }
    }

    /// True once per elapsed period; firing resets the deadline
    pub fn due(&mut self) -> bool {
        if self.last.elapsed() >= self.period {
            self.last = Instant::now();
            true
        } else {
            false
        }
    }

    /// Restart the period from now (after an out-of-band refresh)
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }
}
