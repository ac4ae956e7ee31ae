/// Per-tick simulation context.
///
/// One `TickContext` describes one discrete simulation step; everything an
/// agent does within a step sees the same tick index and delta time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickContext {
    pub tick: u64,
    pub dt_seconds: f32,
}

impl TickContext {
    pub fn new(tick: u64, dt_seconds: f32) -> Self {
        Self { tick, dt_seconds }
    }
}
