use boss_agent::{Boss, BossConfig, BossState, CombatWorld, Cue, MoveOutcome};
use boss_core::{TickContext, Vec2};
use boss_tools::NullTraceSink;

const DT: f32 = 1.0 / 60.0;

struct FlatWorld {
    floor_y: f32,
    target: Option<Vec2>,
    collision_enabled: bool,
    snap_distance: f32,
    active_cues: Vec<Cue>,
}

impl FlatWorld {
    fn new(floor_y: f32) -> Self {
        Self {
            floor_y,
            target: None,
            collision_enabled: true,
            snap_distance: 8.0,
            active_cues: Vec::new(),
        }
    }
}

impl CombatWorld for FlatWorld {
    fn target_position(&self) -> Option<Vec2> {
        self.target
    }

    fn move_and_collide(&mut self, from: Vec2, motion: Vec2) -> MoveOutcome {
        let mut position = from + motion;
        let mut on_floor = false;
        if self.collision_enabled {
            if position.y >= self.floor_y {
                position.y = self.floor_y;
                on_floor = true;
            } else if motion.y >= 0.0 && self.floor_y - position.y <= self.snap_distance {
                position.y = self.floor_y;
                on_floor = true;
            }
        }
        MoveOutcome { position, on_floor }
    }

    fn set_collision_enabled(&mut self, enabled: bool) {
        self.collision_enabled = enabled;
    }

    fn set_snap_distance(&mut self, distance: f32) {
        self.snap_distance = distance;
    }

    fn apply_hit(&mut self, _damage: i32, _source: Vec2) {}

    fn cue_active(&self, cue: Cue) -> bool {
        self.active_cues.contains(&cue)
    }
}

/// Land the boss and get it into Idle, before any decision fires.
fn settle(boss: &mut Boss, world: &mut FlatWorld, tick: &mut u64) {
    let mut sink = NullTraceSink;
    for _ in 0..10_000 {
        if boss.state() == BossState::Idle {
            return;
        }
        boss.tick(&TickContext::new(*tick, DT), world, &mut sink);
        *tick += 1;
    }
    panic!("boss never settled into idle");
}

#[test]
fn dash_stops_at_the_right_bound() {
    let mut world = FlatWorld::new(300.0);
    let mut boss = Boss::new(BossConfig::default(), Vec2::new(500.0, 300.0), 21);
    let mut sink = NullTraceSink;
    let mut tick = 0;
    settle(&mut boss, &mut world, &mut tick);

    // Default facing is right.
    boss.begin_dash(&mut sink);
    assert_eq!(boss.state(), BossState::Dash);

    let right_x = boss.config().right_x;
    let per_tick = boss.config().dash_speed * DT;
    let expected_max = ((right_x - 500.0) / per_tick).ceil() as u64 + 4;
    let mut ticks_in_dash = 0;
    while boss.state() == BossState::Dash {
        boss.tick(&TickContext::new(tick, DT), &mut world, &mut sink);
        tick += 1;
        ticks_in_dash += 1;
        // The bound is never exceeded by more than one tick's displacement.
        assert!(boss.position().x <= right_x + per_tick);
        assert!(ticks_in_dash <= expected_max, "dash overran its bound");
    }

    assert_eq!(boss.state(), BossState::DashStop);
    assert_eq!(boss.position().x, right_x);
}

#[test]
fn dash_respects_the_left_bound_when_facing_left() {
    let mut world = FlatWorld::new(300.0);
    world.target = Some(Vec2::new(-1_000.0, 300.0));
    let mut config = BossConfig::default();
    config.run_without_cues = true;
    let mut boss = Boss::new(config, Vec2::new(500.0, 300.0), 22);
    let mut sink = NullTraceSink;
    let mut tick = 0;
    settle(&mut boss, &mut world, &mut tick);

    // RoarPrep entry faces the target; the cue-less roar resolves in two
    // ticks and leaves the boss facing left.
    boss.begin_roar(&mut sink);
    for _ in 0..2 {
        boss.tick(&TickContext::new(tick, DT), &mut world, &mut sink);
        tick += 1;
    }

    boss.begin_dash(&mut sink);
    for _ in 0..10_000 {
        if boss.state() != BossState::Dash {
            break;
        }
        boss.tick(&TickContext::new(tick, DT), &mut world, &mut sink);
        tick += 1;
    }
    assert_eq!(boss.state(), BossState::DashStop);
    assert_eq!(boss.position().x, boss.config().left_x);
}

#[test]
fn dash_stop_decelerates_to_zero_then_idles() {
    let mut world = FlatWorld::new(300.0);
    let mut boss = Boss::new(BossConfig::default(), Vec2::new(500.0, 300.0), 23);
    let mut sink = NullTraceSink;
    let mut tick = 0;
    settle(&mut boss, &mut world, &mut tick);

    boss.begin_dash(&mut sink);
    for _ in 0..10_000 {
        if boss.state() == BossState::Idle {
            break;
        }
        boss.tick(&TickContext::new(tick, DT), &mut world, &mut sink);
        tick += 1;
    }
    assert_eq!(boss.state(), BossState::Idle);
    assert_eq!(boss.velocity().x, 0.0);
}

#[test]
fn dash_stop_holds_while_its_cue_plays() {
    let mut world = FlatWorld::new(300.0);
    world.active_cues = vec![Cue::DashStop];
    let mut boss = Boss::new(BossConfig::default(), Vec2::new(500.0, 300.0), 24);
    let mut sink = NullTraceSink;
    let mut tick = 0;
    settle(&mut boss, &mut world, &mut tick);

    boss.begin_dash(&mut sink);
    for _ in 0..10_000 {
        if boss.state() == BossState::DashStop && boss.velocity().x == 0.0 {
            break;
        }
        boss.tick(&TickContext::new(tick, DT), &mut world, &mut sink);
        tick += 1;
    }

    for _ in 0..30 {
        boss.tick(&TickContext::new(tick, DT), &mut world, &mut sink);
        tick += 1;
    }
    assert_eq!(boss.state(), BossState::DashStop, "held by the stop cue");

    world.active_cues.clear();
    boss.tick(&TickContext::new(tick, DT), &mut world, &mut sink);
    assert_eq!(boss.state(), BossState::Idle);
}
