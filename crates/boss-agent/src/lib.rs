//! Tick-driven boss combat agent.
//!
//! The boss is a deterministic finite-state machine stepped once per
//! simulation tick. Three concerns interact frame over frame and are kept
//! consistent here:
//!
//! - multi-phase combat behavior (the [`BossState`] machine),
//! - a bounded floor-contact override that defeats the host physics engine's
//!   ground snapping during jump initiation ([`FloorOverride`]),
//! - a time-since-last-transition watchdog that recovers the agent from
//!   states whose exit conditions never materialize ([`Watchdog`]).
//!
//! The host engine is consumed through the [`CombatWorld`] trait: a target
//! position, a collision-resolving move primitive, collision/snap toggles,
//! and an optional feedback-cue query. Each boss instance owns its state
//! exclusively; ticking is synchronous and single-threaded.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod boss;
pub mod config;
pub mod floor;
pub mod state;
pub mod tracker;
pub mod watchdog;
pub mod world;

pub use boss::{Boss, Facing, TRACE_DAMAGE, TRACE_TRANSITION, TRACE_WATCHDOG};
pub use config::BossConfig;
pub use floor::FloorOverride;
pub use state::BossState;
pub use tracker::TargetTracker;
pub use watchdog::Watchdog;
pub use world::{CombatWorld, Cue, MoveOutcome};
