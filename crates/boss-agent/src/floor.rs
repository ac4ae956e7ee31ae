use crate::CombatWorld;

/// Bounded suppression of ground snapping and collision.
///
/// A physics engine that snaps characters to nearby ground will re-attach a
/// jumping agent on the same tick it launches, because one tick of launch
/// displacement is smaller than the snap tolerance. Engaging the override
/// zeroes the snap distance and disables the collision shape for a counted
/// number of ticks, guaranteeing airborne classification for that window
/// independent of the true distance to the floor.
///
/// Represented as an explicit countdown plus an `engaged` flag so the
/// restore runs exactly once no matter how disengagement is reached
/// (counter expiry, confirmed landing, watchdog recovery, or death).
#[derive(Debug, Default, Clone, Copy)]
pub struct FloorOverride {
    remaining: u32,
    engaged: bool,
}

impl FloorOverride {
    pub fn active(&self) -> bool {
        self.engaged
    }

    /// Suppress snapping and collision for `ticks` ticks.
    pub fn engage<W: CombatWorld>(&mut self, world: &mut W, ticks: u32) {
        world.set_snap_distance(0.0);
        world.set_collision_enabled(false);
        self.remaining = ticks;
        self.engaged = true;
    }

    /// Per-tick countdown; restores on expiry.
    pub fn tick<W: CombatWorld>(&mut self, world: &mut W, snap_distance: f32) {
        if !self.engaged {
            return;
        }
        if self.remaining > 0 {
            self.remaining -= 1;
        }
        if self.remaining == 0 {
            self.restore(world, snap_distance);
        }
    }

    /// Restore default collision and snapping. Idempotent.
    pub fn restore<W: CombatWorld>(&mut self, world: &mut W, snap_distance: f32) {
        if !self.engaged {
            return;
        }
        self.engaged = false;
        self.remaining = 0;
        world.set_collision_enabled(true);
        world.set_snap_distance(snap_distance);
    }
}
