//! Observability primitives for the deterministic boss combat agent.
//!
//! Recoverable anomalies (watchdog recoveries, absent targets) and state
//! transitions are reported as trace events rather than by interrupting the
//! tick loop. Hosts that do not care pass a [`NullTraceSink`]; tests and
//! debug tooling record into a [`VecTraceSink`].

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod trace;

pub use trace::{NullTraceSink, TraceEvent, TraceSink, VecTraceSink};
