use boss_core::Vec2;

/// Feedback cues the agent gates certain transitions on.
///
/// A cue is an external, queryable "is this feedback sequence still active"
/// signal (a timed roar effect, a death sequence, ...). The agent never
/// starts or stops cues itself; hosts observe state entry and drive their
/// own playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    RoarPrep,
    Roar,
    DashStop,
    Hurt,
    Death,
}

/// Result of one collision-resolving move step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveOutcome {
    /// Position after collision resolution.
    pub position: Vec2,
    /// Whether the step ended in floor contact (including ground snapping,
    /// when the host's snap distance is non-zero).
    pub on_floor: bool,
}

/// The boundary between the agent and its host engine.
///
/// The agent owns its position and velocity; the world owns collision
/// geometry, the combat target, and feedback playback. Every method is safe
/// to call once per tick per agent.
pub trait CombatWorld {
    /// Current target position, or `None` when no valid target exists.
    /// Queried at most once per tick.
    fn target_position(&self) -> Option<Vec2>;

    /// Move `from` by `motion`, resolving collisions, and report where the
    /// agent ended up and whether it is standing on the floor.
    fn move_and_collide(&mut self, from: Vec2, motion: Vec2) -> MoveOutcome;

    /// Enable or disable the agent's collision shape.
    fn set_collision_enabled(&mut self, enabled: bool);

    /// Set the ground-snap tolerance applied by `move_and_collide`.
    fn set_snap_distance(&mut self, distance: f32);

    /// One-way contact-damage notification to the target. No response.
    fn apply_hit(&mut self, damage: i32, source: Vec2);

    /// Whether a feedback cue is still playing. Hosts without a feedback
    /// system keep the default, which makes every cue-gated transition
    /// immediate.
    fn cue_active(&self, _cue: Cue) -> bool {
        false
    }
}
