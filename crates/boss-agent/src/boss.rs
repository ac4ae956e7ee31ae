use boss_core::{move_toward, DeterministicRng, SplitMix64, TickContext, Vec2};
use boss_tools::{TraceEvent, TraceSink};

use crate::{BossConfig, BossState, CombatWorld, Cue, FloorOverride, TargetTracker, Watchdog};

/// Emitted on every state transition; args are `[from, to]` stable ids.
pub const TRACE_TRANSITION: &str = "boss.transition";
/// Emitted when the watchdog forces a recovery; args are `[stuck_state, 0]`.
pub const TRACE_WATCHDOG: &str = "boss.watchdog";
/// Emitted on damage reception; args are `[amount, health_after]`.
pub const TRACE_DAMAGE: &str = "boss.damage";

/// Horizontal facing, derived from the sign of the offset to the target.
///
/// The last derived value persists only as the neutral fallback for the
/// exact-overlap and absent-target cases, and as the dash direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Left,
    Right,
}

impl Facing {
    pub fn sign(self) -> f32 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }

    /// `None` when the offset is exactly zero.
    pub fn from_offset(dx: f32) -> Option<Self> {
        if dx > 0.0 {
            Some(Self::Right)
        } else if dx < 0.0 {
            Some(Self::Left)
        } else {
            None
        }
    }
}

/// One boss instance.
///
/// Stepped by [`Boss::tick`] exactly once per simulation step. All mutable
/// state is owned here; the host engine is reached only through
/// [`CombatWorld`]. See the crate docs for the tick pipeline.
pub struct Boss {
    config: BossConfig,
    state: BossState,
    state_entry: bool,
    health: i32,
    position: Vec2,
    velocity: Vec2,
    facing: Facing,
    grounded: bool,
    /// Per-state scratch timer; reinitialized by each state's entry logic.
    timer: f32,
    last_tick: u64,
    tracker: TargetTracker,
    floor_override: FloorOverride,
    watchdog: Watchdog,
    rng: SplitMix64,
}

impl Boss {
    pub fn new(config: BossConfig, position: Vec2, seed: u64) -> Self {
        let watchdog = Watchdog::new(config.watchdog_threshold);
        Self {
            health: config.max_health,
            config,
            state: BossState::Ready,
            state_entry: true,
            position,
            velocity: Vec2::ZERO,
            facing: Facing::Right,
            grounded: false,
            timer: 0.0,
            last_tick: 0,
            tracker: TargetTracker::default(),
            floor_override: FloorOverride::default(),
            watchdog,
            rng: SplitMix64::new(seed),
        }
    }

    pub fn state(&self) -> BossState {
        self.state
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn grounded(&self) -> bool {
        self.grounded
    }

    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    /// True on exactly the tick that runs a state's entry logic.
    pub fn is_state_entry(&self) -> bool {
        self.state_entry
    }

    pub fn config(&self) -> &BossConfig {
        &self.config
    }

    /// Advance one simulation step.
    ///
    /// Pipeline: refresh the target sample, advance the floor-contact
    /// override, run the watchdog, dispatch the current state's handler
    /// (which applies locomotion itself), then the passive hit volume.
    pub fn tick<W: CombatWorld>(
        &mut self,
        ctx: &TickContext,
        world: &mut W,
        trace: &mut dyn TraceSink,
    ) {
        self.last_tick = ctx.tick;
        let target = self.tracker.sample(world);

        self.floor_override
            .tick(world, self.config.ground_snap_distance);

        let entering = self.state_entry;
        self.state_entry = false;

        if !self.is_terminal() && self.watchdog.tick(ctx.dt_seconds) {
            trace.emit(
                TraceEvent::new(ctx.tick, TRACE_WATCHDOG)
                    .with_args(self.state.stable_id(), 0),
            );
            self.velocity = Vec2::ZERO;
            self.floor_override
                .restore(world, self.config.ground_snap_distance);
            self.change(BossState::Idle, trace);
            return;
        }

        match self.state {
            BossState::Ready => self.ready(entering, target, ctx, trace),
            BossState::ReadyDrop => self.ready_drop(ctx, world, trace),
            BossState::Idle => self.idle(entering, ctx, world, trace),
            BossState::Move => self.patrol(entering, target, ctx, world, trace),
            BossState::Jump => self.jump(entering, target, ctx, world, trace),
            BossState::Fall => self.fall(entering, ctx, world, trace),
            BossState::Dash => self.dash(entering, ctx, world, trace),
            BossState::DashStop => self.dash_stop(ctx, world, trace),
            BossState::RoarPrep => self.roar_prep(entering, target, ctx, world, trace),
            BossState::Roar => self.roar(ctx, world, trace),
            BossState::Hurt => self.hurt(entering, ctx, world, trace),
            BossState::Die => self.die(entering, ctx, world, trace),
            BossState::Dead => {}
        }

        if !self.is_terminal() {
            self.contact_damage(target, world);
        }
    }

    /// Entry point for external damage sources. No-op once terminal.
    pub fn take_damage(&mut self, amount: i32, trace: &mut dyn TraceSink) {
        if self.is_terminal() {
            return;
        }
        self.health -= amount;
        trace.emit(
            TraceEvent::new(self.last_tick, TRACE_DAMAGE)
                .with_args(amount as i64, self.health as i64),
        );
        if self.health <= 0 {
            self.change(BossState::Die, trace);
        } else {
            self.change(BossState::Hurt, trace);
        }
    }

    /// Host-triggered phase entry: commit to a dash along the current facing.
    pub fn begin_dash(&mut self, trace: &mut dyn TraceSink) {
        if !self.is_terminal() {
            self.change(BossState::Dash, trace);
        }
    }

    /// Host-triggered phase entry: roar at the target.
    pub fn begin_roar(&mut self, trace: &mut dyn TraceSink) {
        if !self.is_terminal() {
            self.change(BossState::RoarPrep, trace);
        }
    }

    /// The single transition operation. Resets the watchdog and the scratch
    /// timer and arms entry logic for the next tick.
    fn change(&mut self, next: BossState, trace: &mut dyn TraceSink) {
        trace.emit(
            TraceEvent::new(self.last_tick, TRACE_TRANSITION)
                .with_args(self.state.stable_id(), next.stable_id()),
        );
        self.state = next;
        self.state_entry = true;
        self.timer = 0.0;
        self.watchdog.reset();
    }

    /// Gravity plus the collision-resolving move primitive.
    ///
    /// Ground contact reported by the world is masked while the floor
    /// override is engaged: during that window the agent is
    /// airborne-classified regardless of geometry.
    fn apply_locomotion<W: CombatWorld>(&mut self, ctx: &TickContext, world: &mut W, gravity: bool) {
        if gravity && !self.grounded {
            self.velocity.y += self.config.gravity * ctx.dt_seconds;
        }
        let outcome = world.move_and_collide(self.position, self.velocity * ctx.dt_seconds);
        self.position = outcome.position;
        if outcome.on_floor && self.velocity.y > 0.0 {
            self.velocity.y = 0.0;
        }
        self.grounded = outcome.on_floor && !self.floor_override.active();
    }

    fn face(&mut self, target: Vec2) {
        if let Some(facing) = Facing::from_offset(target.x - self.position.x) {
            self.facing = facing;
        }
    }

    fn cue_done<W: CombatWorld>(&self, world: &W, cue: Cue) -> bool {
        self.config.run_without_cues || !world.cue_active(cue)
    }

    /// Timer when running without cues, cue completion otherwise.
    fn timed_cue_done<W: CombatWorld>(&self, world: &W, cue: Cue) -> bool {
        if self.config.run_without_cues {
            self.timer <= 0.0
        } else {
            !world.cue_active(cue)
        }
    }

    fn contact_damage<W: CombatWorld>(&mut self, target: Vec2, world: &mut W) {
        if !self.tracker.has_target() {
            return;
        }
        let offset = target - self.position;
        let extents = self.config.hit_half_extents;
        if offset.x.abs() <= extents.x && offset.y.abs() <= extents.y {
            world.apply_hit(self.config.contact_damage, self.position);
        }
    }

    fn ready(&mut self, entering: bool, target: Vec2, ctx: &TickContext, trace: &mut dyn TraceSink) {
        if entering {
            self.face(target);
            self.timer = self.config.ready_duration;
        }
        self.timer -= ctx.dt_seconds;
        if self.timer <= 0.0 {
            self.change(BossState::ReadyDrop, trace);
        }
    }

    fn ready_drop<W: CombatWorld>(
        &mut self,
        ctx: &TickContext,
        world: &mut W,
        trace: &mut dyn TraceSink,
    ) {
        self.apply_locomotion(ctx, world, true);
        if self.grounded {
            self.change(BossState::Idle, trace);
        }
    }

    fn idle<W: CombatWorld>(
        &mut self,
        entering: bool,
        ctx: &TickContext,
        world: &mut W,
        trace: &mut dyn TraceSink,
    ) {
        if entering {
            self.timer = self.config.idle_decision_time;
        }
        self.velocity.x = move_toward(
            self.velocity.x,
            0.0,
            self.config.ground_accel * ctx.dt_seconds,
        );
        self.apply_locomotion(ctx, world, true);
        self.timer -= ctx.dt_seconds;
        if self.grounded && self.timer <= 0.0 {
            if self.rng.coin_flip() {
                self.change(BossState::Move, trace);
            } else {
                self.change(BossState::Jump, trace);
            }
        }
    }

    fn patrol<W: CombatWorld>(
        &mut self,
        entering: bool,
        target: Vec2,
        ctx: &TickContext,
        world: &mut W,
        trace: &mut dyn TraceSink,
    ) {
        if entering {
            self.face(target);
            self.timer = self.config.move_duration;
        }
        self.velocity.x = move_toward(
            self.velocity.x,
            self.facing.sign() * self.config.walk_speed,
            self.config.ground_accel * ctx.dt_seconds,
        );
        self.apply_locomotion(ctx, world, true);
        self.timer -= ctx.dt_seconds;
        // Patrol commitment: the timer ends the walk wherever it reached.
        if self.timer <= 0.0 {
            self.change(BossState::Idle, trace);
        }
    }

    fn jump<W: CombatWorld>(
        &mut self,
        entering: bool,
        target: Vec2,
        ctx: &TickContext,
        world: &mut W,
        trace: &mut dyn TraceSink,
    ) {
        if entering {
            // Detach cleanly: suppress snap/collision, then run one
            // locomotion step to clear any stale floor-contact flag before
            // the launch velocity is applied.
            self.floor_override
                .engage(world, self.config.jump_detach_ticks);
            self.apply_locomotion(ctx, world, false);

            let direction =
                Facing::from_offset(target.x - self.position.x).unwrap_or(Facing::Right);
            self.facing = direction;
            self.velocity = Vec2::new(
                direction.sign() * self.config.jump_horizontal_speed,
                -self.config.jump_vertical_speed,
            );
            // No gravity on the launch tick; the launch velocity must reach
            // the first airborne step undamped.
            return;
        }

        self.apply_locomotion(ctx, world, true);
        if !self.grounded && self.velocity.y > 0.0 {
            self.change(BossState::Fall, trace);
        } else if self.grounded && !self.floor_override.active() {
            // Short hop: contact while still jump-classified, after the
            // detach window has fully lapsed.
            self.change(BossState::Idle, trace);
        }
    }

    fn fall<W: CombatWorld>(
        &mut self,
        entering: bool,
        ctx: &TickContext,
        world: &mut W,
        trace: &mut dyn TraceSink,
    ) {
        if entering {
            self.timer = self.config.land_confirm_time;
        }
        self.apply_locomotion(ctx, world, true);
        if self.grounded {
            self.timer -= ctx.dt_seconds;
            if self.timer <= 0.0 {
                self.floor_override
                    .restore(world, self.config.ground_snap_distance);
                self.change(BossState::Idle, trace);
            }
        } else {
            // Contact lost before confirmation; re-arm the debounce.
            self.timer = self.config.land_confirm_time;
        }
    }

    fn dash<W: CombatWorld>(
        &mut self,
        entering: bool,
        ctx: &TickContext,
        world: &mut W,
        trace: &mut dyn TraceSink,
    ) {
        if entering {
            self.velocity.x = self.facing.sign() * self.config.dash_speed;
        }
        self.apply_locomotion(ctx, world, true);
        if self.position.x <= self.config.left_x || self.position.x >= self.config.right_x {
            self.position.x = self.position.x.clamp(self.config.left_x, self.config.right_x);
            self.change(BossState::DashStop, trace);
        }
    }

    fn dash_stop<W: CombatWorld>(
        &mut self,
        ctx: &TickContext,
        world: &mut W,
        trace: &mut dyn TraceSink,
    ) {
        self.velocity.x = move_toward(
            self.velocity.x,
            0.0,
            self.config.dash_deceleration * ctx.dt_seconds,
        );
        self.apply_locomotion(ctx, world, true);
        if self.velocity.x == 0.0 && self.cue_done(world, Cue::DashStop) {
            self.change(BossState::Idle, trace);
        }
    }

    fn roar_prep<W: CombatWorld>(
        &mut self,
        entering: bool,
        target: Vec2,
        ctx: &TickContext,
        world: &mut W,
        trace: &mut dyn TraceSink,
    ) {
        if entering {
            self.face(target);
            self.velocity.x = 0.0;
        }
        self.apply_locomotion(ctx, world, true);
        if self.cue_done(world, Cue::RoarPrep) {
            self.change(BossState::Roar, trace);
        }
    }

    fn roar<W: CombatWorld>(
        &mut self,
        ctx: &TickContext,
        world: &mut W,
        trace: &mut dyn TraceSink,
    ) {
        self.apply_locomotion(ctx, world, true);
        if self.cue_done(world, Cue::Roar) {
            self.change(BossState::Idle, trace);
        }
    }

    fn hurt<W: CombatWorld>(
        &mut self,
        entering: bool,
        ctx: &TickContext,
        world: &mut W,
        trace: &mut dyn TraceSink,
    ) {
        if entering {
            self.timer = self.config.hurt_duration;
            self.velocity.x = 0.0;
        }
        self.apply_locomotion(ctx, world, true);
        self.timer -= ctx.dt_seconds;
        if self.timed_cue_done(world, Cue::Hurt) {
            self.change(BossState::Idle, trace);
        }
    }

    fn die<W: CombatWorld>(
        &mut self,
        entering: bool,
        ctx: &TickContext,
        world: &mut W,
        trace: &mut dyn TraceSink,
    ) {
        if entering {
            self.velocity = Vec2::ZERO;
            self.floor_override
                .restore(world, self.config.ground_snap_distance);
            self.timer = self.config.die_duration;
        }
        self.timer -= ctx.dt_seconds;
        if self.timed_cue_done(world, Cue::Death) {
            self.change(BossState::Dead, trace);
        }
    }
}
