use boss_core::Vec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Construction-time configuration for one boss instance.
///
/// Everything the agent needs arrives here explicitly; nothing is read from
/// ambient globals. Distances are in pixels, times in seconds, speeds in
/// pixels per second.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BossConfig {
    /// Left arena bound constraining dash travel.
    pub left_x: f32,
    /// Right arena bound constraining dash travel.
    pub right_x: f32,

    pub gravity: f32,
    pub walk_speed: f32,
    /// Horizontal acceleration used to steer toward walk speed and to damp
    /// idle drift.
    pub ground_accel: f32,
    pub jump_horizontal_speed: f32,
    pub jump_vertical_speed: f32,
    pub dash_speed: f32,
    pub dash_deceleration: f32,

    pub max_health: i32,
    /// Damage dealt when the target overlaps the hit volume.
    pub contact_damage: i32,
    /// Half extents of the passive hit volume around the boss position.
    pub hit_half_extents: Vec2,

    /// Hold time of the pre-combat pose.
    pub ready_duration: f32,
    /// Grounded time before Idle commits to Move or Jump.
    pub idle_decision_time: f32,
    /// Patrol commitment; Move returns to Idle when it expires.
    pub move_duration: f32,
    /// Grounded time Fall requires before finalizing a landing. A single
    /// grounded sample immediately after touchdown can be noisy.
    pub land_confirm_time: f32,
    /// Stagger length when running without cues.
    pub hurt_duration: f32,
    /// Death feedback length when running without cues.
    pub die_duration: f32,

    /// Forces `Change(Idle)` when no transition happened for this long.
    pub watchdog_threshold: f32,
    /// Ticks the floor-contact override stays engaged after a jump launch.
    pub jump_detach_ticks: u32,
    /// Snap tolerance restored when the override disengages.
    pub ground_snap_distance: f32,

    /// Treat every cue-gated transition as immediately complete. Set by
    /// hosts without a feedback-cue system.
    pub run_without_cues: bool,
}

impl Default for BossConfig {
    fn default() -> Self {
        Self {
            left_x: 64.0,
            right_x: 960.0,
            gravity: 980.0,
            walk_speed: 120.0,
            ground_accel: 900.0,
            jump_horizontal_speed: 160.0,
            jump_vertical_speed: 420.0,
            dash_speed: 600.0,
            dash_deceleration: 1_200.0,
            max_health: 300,
            contact_damage: 10,
            hit_half_extents: Vec2::new(48.0, 48.0),
            ready_duration: 0.6,
            idle_decision_time: 0.5,
            move_duration: 1.5,
            land_confirm_time: 0.08,
            hurt_duration: 0.35,
            die_duration: 1.2,
            watchdog_threshold: 5.0,
            jump_detach_ticks: 4,
            ground_snap_distance: 8.0,
            run_without_cues: false,
        }
    }
}
