//! Deterministic, engine-agnostic kernel primitives for the boss combat agent.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod math;
pub mod rng;
pub mod tick;

pub use math::{move_toward, Vec2};
pub use rng::{DeterministicRng, SplitMix64};
pub use tick::TickContext;
