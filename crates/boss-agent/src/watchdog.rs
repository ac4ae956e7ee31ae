/// Time-since-last-transition monitor.
///
/// Jump, fall, and dash exits depend on physics feedback (ground contact,
/// bounds crossing) that can fail to materialize under unusual geometry or
/// misconfiguration. The watchdog guarantees the agent never locks into a
/// non-terminal state: past the threshold, the owner force-transitions to a
/// safe state and resets the counter.
#[derive(Debug, Clone, Copy)]
pub struct Watchdog {
    elapsed: f32,
    threshold: f32,
}

impl Watchdog {
    pub fn new(threshold: f32) -> Self {
        Self {
            elapsed: 0.0,
            threshold,
        }
    }

    /// Advance by `dt`; returns `true` once the threshold is exceeded.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.elapsed += dt;
        self.elapsed > self.threshold
    }

    /// Reset on every successful transition, forced recoveries included.
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }
}
