//! Property tests over the simulation core
//!
//! These drive `tick` directly with synthetic deltas and timestamps; no
//! display surface is involved.

use glam::Vec2;
use proptest::prelude::*;

use pot_shot::consts::*;
use pot_shot::sim::{Bullet, BotBullet, Camera, GameState, TickInput, tick};

fn viewport() -> Vec2 {
    Vec2::new(VIEW_WIDTH, VIEW_HEIGHT)
}

fn world() -> Vec2 {
    Vec2::new(WORLD_WIDTH, WORLD_HEIGHT)
}

/// One frame of synthetic input plus its delta scale
fn frame_strategy() -> impl Strategy<Value = (TickInput, f32)> {
    (
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        0.0f32..3.0,
        0.0f32..VIEW_WIDTH,
        0.0f32..VIEW_HEIGHT,
    )
        .prop_map(
            |(up, down, left, right, fire_held, cash_out_held, delta, px, py)| {
                (
                    TickInput {
                        up,
                        down,
                        left,
                        right,
                        fire_held,
                        steer_held: false,
                        cash_out_held,
                        pointer: Vec2::new(px, py),
                    },
                    delta,
                )
            },
        )
}

proptest! {
    /// After every tick: health stays in [0, max], the pot is nonzero exactly
    /// while a round is active, and no entity survives past its destruction
    /// condition.
    #[test]
    fn health_and_pot_invariants(frames in prop::collection::vec(frame_strategy(), 1..200)) {
        let mut state = GameState::new(1234, viewport());
        state.insert_and_spawn(0.0);
        let mut now = 0.0;
        for (input, delta) in frames {
            now += delta as f64 * TICK_MS;
            tick(&mut state, &input, delta, now);

            prop_assert!(state.player.health >= 0);
            prop_assert!(state.player.health <= state.player.max_health);
            for bot in &state.bots {
                prop_assert!(bot.health > 0);
                prop_assert!(bot.health <= bot.max_health);
            }
            prop_assert_eq!(state.pot != 0.0, state.active);
            prop_assert!(state.bullets.iter().all(|b| b.life > 0.0));
            prop_assert!(state.bot_bullets.iter().all(|b| b.life > 0.0));
            prop_assert!(state.particles.iter().all(|p| p.alpha > 0.0));
        }
    }

    /// The camera target is always `clamp(player - viewport/2, 0, world - viewport)`
    #[test]
    fn camera_target_is_clamped(px in 0.0f32..WORLD_WIDTH, py in 0.0f32..WORLD_HEIGHT) {
        let target = Camera::target_for(Vec2::new(px, py), viewport(), world());
        prop_assert!(target.x >= 0.0);
        prop_assert!(target.y >= 0.0);
        prop_assert!(target.x <= WORLD_WIDTH - VIEW_WIDTH);
        prop_assert!(target.y <= WORLD_HEIGHT - VIEW_HEIGHT);

        let centered = Vec2::new(px, py) - viewport() * 0.5;
        if centered.x >= 0.0 && centered.x <= WORLD_WIDTH - VIEW_WIDTH {
            prop_assert_eq!(target.x, centered.x);
        }
        if centered.y >= 0.0 && centered.y <= WORLD_HEIGHT - VIEW_HEIGHT {
            prop_assert_eq!(target.y, centered.y);
        }
    }

    /// Smoothing converges monotonically and never overshoots for any
    /// sequence of nonnegative deltas
    #[test]
    fn camera_follow_never_overshoots(
        sx in -1000.0f32..3000.0,
        sy in -1000.0f32..3000.0,
        tx in 0.0f32..1500.0,
        ty in 0.0f32..1000.0,
        deltas in prop::collection::vec(0.0f32..3.0, 1..60),
    ) {
        let mut cam = Camera { pos: Vec2::new(sx, sy) };
        let target = Vec2::new(tx, ty);
        let mut dist = cam.pos.distance(target);
        for delta in deltas {
            cam.follow(target, delta);
            let next = cam.pos.distance(target);
            prop_assert!(next <= dist + 1e-3);
            dist = next;
        }
    }

    /// Barrier contact over `t1` then `t2` damages the same as one contact of
    /// `t1 + t2`, and the total matches `floor(rate * t)` up to the
    /// floor-rounding at the segment boundary.
    #[test]
    fn barrier_damage_accumulates_additively(n1 in 1u32..90, n2 in 1u32..90) {
        let corner = Vec2::splat(BARRIER_THICKNESS + PLAYER_RADIUS);
        let input = TickInput { up: true, left: true, ..Default::default() };

        let mut split = GameState::new(5, viewport());
        split.insert_and_spawn(0.0);
        split.player.pos = corner;
        let mut now = 0.0;
        for _ in 0..n1 {
            now += TICK_MS;
            tick(&mut split, &input, 1.0, now);
        }
        for _ in 0..n2 {
            now += TICK_MS;
            tick(&mut split, &input, 1.0, now);
        }

        let mut single = GameState::new(5, viewport());
        single.insert_and_spawn(0.0);
        single.player.pos = corner;
        let mut now = 0.0;
        for _ in 0..(n1 + n2) {
            now += TICK_MS;
            tick(&mut single, &input, 1.0, now);
        }

        prop_assert_eq!(split.player.health, single.player.health);

        let seconds = (n1 + n2) as f32 / 60.0;
        let expected = (BARRIER_DAMAGE_PER_SECOND * seconds).floor() as i32;
        let lost = PLAYER_MAX_HEALTH - single.player.health;
        prop_assert!((lost - expected).abs() <= 1);
    }

    /// A round outside the world rectangle (with margin) is removed by the
    /// next tick regardless of remaining lifetime
    #[test]
    fn out_of_bounds_rounds_are_culled(
        x in -5000.0f32..5000.0,
        y in -5000.0f32..5000.0,
        life in 1.0f32..500.0,
    ) {
        let pos = Vec2::new(x, y);
        prop_assume!(
            pos.x < -BULLET_CULL_MARGIN
                || pos.x > WORLD_WIDTH + BULLET_CULL_MARGIN
                || pos.y < -BULLET_CULL_MARGIN
                || pos.y > WORLD_HEIGHT + BULLET_CULL_MARGIN
        );

        let mut state = GameState::new(6, viewport());
        state.insert_and_spawn(0.0);
        state.bullets.push(Bullet { pos, vel: Vec2::ZERO, life });
        state.bot_bullets.push(BotBullet { pos, vel: Vec2::ZERO, life });

        tick(&mut state, &TickInput::default(), 1.0, TICK_MS);
        prop_assert!(state.bullets.is_empty());
        prop_assert!(state.bot_bullets.is_empty());
    }
}
