use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};

/// A cooperative repeating task. Each call to [tick](Ticker::tick) resolves once the next tick
/// is due; a tick is never requested before the previous one has been handled.
pub trait Ticker {
    fn tick(&mut self) -> impl Future<Output = ()>;

    /// Re-arms the ticker so the next tick is one full period away. Called when a playback
    /// starts, so a ticker can be reused across playbacks.
    fn restart(&mut self) {}
}

/// Ticks on a fixed period using the tokio timer. The first tick fires one period after
/// creation or after the last [restart](Ticker::restart). Must be created inside a tokio runtime.
#[derive(Debug)]
pub struct IntervalTicker {
    interval: Interval,
}

impl IntervalTicker {
    pub fn new(period: Duration) -> IntervalTicker {
        let mut interval = interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        IntervalTicker { interval }
    }

    pub fn period(&self) -> Duration {
        self.interval.period()
    }
}

impl Ticker for IntervalTicker {
    async fn tick(&mut self) {
        self.interval.tick().await;
    }

    fn restart(&mut self) {
        self.interval.reset();
    }
}

/// Ticks complete immediately; for headless hosts that want the result without the animation.
#[derive(Clone, Copy, Debug, Default)]
pub struct ImmediateTicker;

impl Ticker for ImmediateTicker {
    async fn tick(&mut self) {}
}

/// Shared flag that aborts a running playback at its next tick. Clones observe the same flag.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> CancelToken {
        CancelToken::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}
