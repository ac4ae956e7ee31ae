use boss_core::Vec2;

use crate::CombatWorld;

/// Caches the combat target's position once per tick.
///
/// The agent holds no ownership of the target. When the handle goes away the
/// tracker degrades to the last known position (zero before the first valid
/// sample) so facing and steering never fail destructively.
#[derive(Debug, Default, Clone, Copy)]
pub struct TargetTracker {
    last_known: Vec2,
    live: bool,
}

impl TargetTracker {
    pub fn sample<W: CombatWorld>(&mut self, world: &W) -> Vec2 {
        match world.target_position() {
            Some(position) => {
                self.last_known = position;
                self.live = true;
                position
            }
            None => {
                self.live = false;
                self.last_known
            }
        }
    }

    /// Whether the most recent sample came from a live target.
    pub fn has_target(&self) -> bool {
        self.live
    }

    pub fn last_known(&self) -> Vec2 {
        self.last_known
    }
}
