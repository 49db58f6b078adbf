use {
    crate::app::AppEvent,
    std::time::Duration,
    tokio::{sync::mpsc, task::JoinHandle},
};

/// Fixed animation tick interval (~60 Hz).
pub const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Default count-up duration when a caller does not supply one.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(2000);

/// A numeric value that counts up from 0 to a target over a fixed duration.
///
/// The counter is advanced by [`Counter::tick`], one call per 16 ms tick.
/// The per-tick increment is computed once at start; the emitted value is
/// the floor of the accumulated total until it would meet or pass the
/// target, at which point it snaps to exactly the target and the counter
/// deactivates. No overshoot is ever emitted and the value never decreases.
#[derive(Debug, Clone)]
pub struct Counter {
    current: f64,
    value: u64,
    target: u64,
    increment: f64,
    active: bool,
}

impl Counter {
    /// Start a fresh count from 0 to `target` over `duration`.
    ///
    /// A duration shorter than one tick (including zero) snaps to the
    /// target on the first tick.
    pub fn new(target: u64, duration: Duration) -> Self {
        let ticks = duration.as_millis() as f64 / TICK_INTERVAL.as_millis() as f64;
        let increment = if ticks < 1.0 {
            target as f64
        } else {
            target as f64 / ticks
        };

        Self {
            current: 0.0,
            value: 0,
            target,
            increment,
            active: true,
        }
    }

    /// Advance by one tick. Returns `false` once the counter has stopped.
    pub fn tick(&mut self) -> bool {
        if !self.active {
            return false;
        }

        self.current += self.increment;
        if self.current >= self.target as f64 {
            self.value = self.target;
            self.active = false;
        } else {
            self.value = self.current as u64;
        }
        true
    }

    /// The currently emitted value.
    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    /// Whether the logical timer behind this counter still runs.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Cancel the running sequence and begin a new one from 0 with the
    /// given parameters. The previous sequence emits nothing further.
    pub fn restart(&mut self, target: u64, duration: Duration) {
        *self = Self::new(target, duration);
    }
}

/// Owned handle to the repeating 16 ms tick task.
///
/// The task feeds [`AppEvent::Tick`] into the app loop for as long as the
/// handle lives; dropping the handle aborts the task, so a periodic
/// callback can never outlive its owner. The app holds at most one.
pub struct Ticker {
    handle: JoinHandle<()>,
}

impl Ticker {
    pub fn spawn(event_tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(TICK_INTERVAL);
            // The first tick of a tokio interval fires immediately.
            interval.tick().await;
            loop {
                interval.tick().await;
                if event_tx.send(AppEvent::Tick).is_err() {
                    break;
                }
            }
        });

        Self { handle }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
