#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Combat states of the boss.
///
/// Transition graph:
/// `Ready → ReadyDrop → Idle ⇄ {Move, Jump}`; `Jump → Fall → Idle`;
/// `Idle → RoarPrep → Roar → Idle`; `Dash → DashStop → Idle`;
/// any non-terminal state `→ Hurt → Idle` on surviving damage, and
/// `→ Die → Dead` on lethal damage. `Die` and `Dead` are terminal: the
/// agent no longer takes damage, moves, or is watched by the watchdog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BossState {
    /// Pre-combat pose; holds briefly before committing to gravity.
    Ready,
    /// Initial fall into the arena.
    ReadyDrop,
    Idle,
    Move,
    Jump,
    Fall,
    Dash,
    DashStop,
    RoarPrep,
    Roar,
    Hurt,
    /// Death feedback playing; already terminal for every external purpose.
    Die,
    /// Fully inert.
    Dead,
}

impl BossState {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Die | Self::Dead)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Ready => "ready",
            Self::ReadyDrop => "ready_drop",
            Self::Idle => "idle",
            Self::Move => "move",
            Self::Jump => "jump",
            Self::Fall => "fall",
            Self::Dash => "dash",
            Self::DashStop => "dash_stop",
            Self::RoarPrep => "roar_prep",
            Self::Roar => "roar",
            Self::Hurt => "hurt",
            Self::Die => "die",
            Self::Dead => "dead",
        }
    }

    /// Stable integer id for trace payloads.
    pub fn stable_id(self) -> i64 {
        match self {
            Self::Ready => 0,
            Self::ReadyDrop => 1,
            Self::Idle => 2,
            Self::Move => 3,
            Self::Jump => 4,
            Self::Fall => 5,
            Self::Dash => 6,
            Self::DashStop => 7,
            Self::RoarPrep => 8,
            Self::Roar => 9,
            Self::Hurt => 10,
            Self::Die => 11,
            Self::Dead => 12,
        }
    }
}
