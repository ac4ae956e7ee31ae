#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// A small, allocation-friendly trace record.
///
/// Deliberately "dumb data": two integer arguments whose meaning is given by
/// the tag, so events can be recorded during simulation and rendered later by
/// tooling without the tooling knowing agent internals. State ids go in as
/// integers; health values may be negative, hence `i64`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TraceEvent {
    pub tick: u64,
    pub tag: Cow<'static, str>,
    pub args: [i64; 2],
}

impl TraceEvent {
    pub fn new(tick: u64, tag: impl Into<Cow<'static, str>>) -> Self {
        Self {
            tick,
            tag: tag.into(),
            args: [0, 0],
        }
    }

    pub fn with_args(mut self, a: i64, b: i64) -> Self {
        self.args = [a, b];
        self
    }
}

pub trait TraceSink {
    fn emit(&mut self, event: TraceEvent);
}

/// Discards everything.
#[derive(Debug, Default)]
pub struct NullTraceSink;

impl TraceSink for NullTraceSink {
    fn emit(&mut self, _event: TraceEvent) {}
}

/// Records everything in order.
#[derive(Debug, Default)]
pub struct VecTraceSink {
    pub events: Vec<TraceEvent>,
}

impl VecTraceSink {
    pub fn tagged(&self, tag: &'static str) -> impl Iterator<Item = &TraceEvent> + '_ {
        self.events.iter().filter(move |e| e.tag == tag)
    }
}

impl TraceSink for VecTraceSink {
    fn emit(&mut self, event: TraceEvent) {
        self.events.push(event);
    }
}
