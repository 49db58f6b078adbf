use {crate::counter::TICK_INTERVAL, std::time::Duration};

/// A fire-once entrance transition for one visual block.
///
/// A reveal is created disarmed and armed by [`Reveal::trigger`] the first
/// time its block becomes visible in the viewport; later calls are no-ops.
/// Once armed it waits out its stagger delay, then eases from 0 to 1 over
/// its duration. Progress uses cubic ease-out to match the section's
/// entrance timing.
#[derive(Debug, Clone)]
pub struct Reveal {
    delay: u32,
    duration: u32,
    elapsed: u32,
    armed: bool,
}

fn to_ticks(duration: Duration) -> u32 {
    (duration.as_millis() as u64).div_ceil(TICK_INTERVAL.as_millis() as u64) as u32
}

fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

impl Reveal {
    pub fn new(delay: Duration, duration: Duration) -> Self {
        Self {
            delay: to_ticks(delay),
            duration: to_ticks(duration),
            elapsed: 0,
            armed: false,
        }
    }

    /// Arm the transition. Only the first call has any effect.
    pub fn trigger(&mut self) {
        self.armed = true;
    }

    /// Disarm and rewind, ready to fire again on the next visibility.
    pub fn reset(&mut self) {
        self.elapsed = 0;
        self.armed = false;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Advance by one tick. Returns `true` if the transition moved,
    /// including the tick on which it completes, so the settled frame
    /// still gets rendered.
    pub fn tick(&mut self) -> bool {
        if !self.armed || self.is_complete() {
            return false;
        }
        self.elapsed += 1;
        true
    }

    pub fn is_complete(&self) -> bool {
        self.armed && self.elapsed >= self.delay + self.duration
    }

    /// Eased progress in `0.0..=1.0`. Zero until armed and through the
    /// stagger delay; exactly 1 once complete.
    pub fn progress(&self) -> f64 {
        if !self.armed || self.elapsed <= self.delay {
            return 0.0;
        }
        if self.duration == 0 || self.is_complete() {
            return 1.0;
        }
        let t = f64::from(self.elapsed - self.delay) / f64::from(self.duration);
        ease_out_cubic(t.min(1.0))
    }
}
