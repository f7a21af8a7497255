//! Per-frame simulation step
//!
//! `tick` advances the whole game by one logical step. `delta` is a
//! dimensionless multiple of the 1/60 s reference tick; `now_ms` is a
//! monotonic wall-clock timestamp sampled once per frame. Hold/cooldown and
//! fire-rate timers use `now_ms`; lifetimes and motion scale by `delta`.
//!
//! Step order matters: the cash-out machine runs first so a completed hold
//! pays out before this frame's damage, and combat damage lands before the
//! terminal checks that read it.

use glam::Vec2;

use super::camera::Camera;
use super::collision::{clamp_to_arena, outside_world, point_in_circle, point_in_rect};
use super::state::{Bullet, BotBullet, CashOut, GameState, Tint};
use crate::consts::*;

/// Input intent for a single frame. The driver samples the host's key-set
/// and pointer once per frame; only the latest state matters.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Left pointer button held: keep firing at the pointer
    pub fire_held: bool,
    /// Right pointer button held: steer toward the pointer
    pub steer_held: bool,
    /// Cash-out key held
    pub cash_out_held: bool,
    /// Pointer position in canvas pixels
    pub pointer: Vec2,
}

/// Advance the game state by one logical step
pub fn tick(state: &mut GameState, input: &TickInput, delta: f32, now_ms: f64) {
    let delta = delta.clamp(0.0, MAX_DELTA);

    update_cash_out(state, input, now_ms);

    if state.active {
        move_player(state, input, delta, now_ms);
        steer_toward_pointer(state, input, delta, now_ms);
    }
    // Barrier damage during movement may have ended the round already
    if state.active {
        update_turrets(state, now_ms);
        if input.fire_held {
            try_shoot(state, input, now_ms);
        }
        update_bullets(state, delta);
        update_bot_bullets(state, delta, now_ms);
        check_victory(state);
    }

    // Particles and the camera keep animating over the post-round overlay
    update_particles(state, delta);
    let target = Camera::target_for(state.player.pos, state.viewport, state.world());
    state.camera.follow(target, delta);
}

/// Idle -> Holding on key press (unless cooling down), Holding -> completion
/// after the hold threshold, Holding -> Idle on release. Damage elsewhere
/// moves the machine to CoolingDown; expiry returns to Idle, or straight
/// back to Holding when the key is still depressed.
fn update_cash_out(state: &mut GameState, input: &TickInput, now_ms: f64) {
    if !state.active {
        if matches!(state.cash_out, CashOut::Holding { .. }) {
            state.cash_out = CashOut::Idle;
        }
        return;
    }

    match state.cash_out {
        CashOut::Holding { since_ms } => {
            if !input.cash_out_held {
                state.cash_out = CashOut::Idle;
            } else if now_ms - since_ms >= CASH_OUT_HOLD_MS {
                state.complete_cash_out();
            }
        }
        CashOut::CoolingDown { until_ms } => {
            if now_ms >= until_ms {
                state.cash_out = if input.cash_out_held {
                    CashOut::Holding { since_ms: now_ms }
                } else {
                    CashOut::Idle
                };
            }
        }
        CashOut::Idle => {
            if input.cash_out_held {
                state.cash_out = CashOut::Holding { since_ms: now_ms };
            }
        }
    }
}

/// Abort any active hold and impose (or extend) the re-hold cooldown
fn interrupt_cash_out(state: &mut GameState, now_ms: f64) {
    let until_ms = now_ms + CASH_OUT_COOLDOWN_MS;
    state.cash_out = match state.cash_out {
        CashOut::CoolingDown { until_ms: existing } => CashOut::CoolingDown {
            until_ms: existing.max(until_ms),
        },
        _ => CashOut::CoolingDown { until_ms },
    };
}

/// Keyboard movement: normalized direction so diagonals carry no speed bonus
fn move_player(state: &mut GameState, input: &TickInput, delta: f32, now_ms: f64) {
    let mut dir = Vec2::ZERO;
    if input.up {
        dir.y -= 1.0;
    }
    if input.down {
        dir.y += 1.0;
    }
    if input.left {
        dir.x -= 1.0;
    }
    if input.right {
        dir.x += 1.0;
    }
    if dir == Vec2::ZERO {
        return;
    }
    let candidate = state.player.pos + dir.normalize() * state.player.speed * delta;
    apply_player_constraints(state, candidate, delta, now_ms);
}

/// Right-button stride: walk toward the pointer's world position, capped at
/// the remaining distance so the ship never orbits the cursor.
fn steer_toward_pointer(state: &mut GameState, input: &TickInput, delta: f32, now_ms: f64) {
    if !input.steer_held {
        return;
    }
    let target = state.camera.screen_to_world(input.pointer);
    let to_target = target - state.player.pos;
    let distance = to_target.length();
    if distance < 1.0 {
        return;
    }
    let step = (state.player.speed * delta).min(distance);
    let candidate = state.player.pos + to_target / distance * step;
    apply_player_constraints(state, candidate, delta, now_ms);
}

/// Clamp into the playable rectangle; pressing against the barrier accrues
/// fractional damage into a carry buffer.
fn apply_player_constraints(state: &mut GameState, candidate: Vec2, delta: f32, now_ms: f64) {
    let (clamped, touched) = clamp_to_arena(
        candidate,
        state.player.radius,
        state.world(),
        BARRIER_THICKNESS,
    );
    state.player.pos = clamped;
    if touched {
        accrue_barrier_damage(state, delta, now_ms);
    }
}

/// Whole points are deducted as they accumulate; the fractional remainder
/// carries to the next contact so total damage over an interval only depends
/// on its length.
fn accrue_barrier_damage(state: &mut GameState, delta: f32, now_ms: f64) {
    let seconds = delta / 60.0;
    state.barrier_damage_buffer += BARRIER_DAMAGE_PER_SECOND * seconds;
    if state.barrier_damage_buffer >= 1.0 {
        let damage = state.barrier_damage_buffer.floor();
        state.barrier_damage_buffer -= damage;
        let pos = state.player.pos;
        state.spawn_burst(pos, Tint::Ember, 3);
        apply_player_hit(state, damage as i32, now_ms);
    }
}

/// Each turret fires on its own wall-clock cooldown, aimed at the player's
/// position at the moment of firing (no lead).
fn update_turrets(state: &mut GameState, now_ms: f64) {
    let player_pos = state.player.pos;
    for bot in &mut state.bots {
        if now_ms - bot.last_shot_ms < BOT_SHOOT_INTERVAL_MS {
            continue;
        }
        bot.last_shot_ms = now_ms;
        let center = bot.center();
        let dir = (player_pos - center).normalize_or(Vec2::Y);
        state.bot_bullets.push(BotBullet::new(center, dir));
    }
}

/// Rate-limited player fire toward the pointer, with a muzzle spark burst
fn try_shoot(state: &mut GameState, input: &TickInput, now_ms: f64) {
    if now_ms - state.last_shot_ms < SHOOT_INTERVAL_MS {
        return;
    }
    state.last_shot_ms = now_ms;
    let aim = state.camera.screen_to_world(input.pointer);
    let dir = (aim - state.player.pos).normalize_or(Vec2::X);
    let muzzle = state.player.pos + dir * (state.player.radius + 6.0);
    state.bullets.push(Bullet::new(muzzle, dir));
    state.spawn_burst(muzzle, Tint::Magenta, 4);
}

/// Integrate player rounds and resolve them against turrets. A round
/// connects with the first turret (list order) containing it and is spent
/// on that single hit.
fn update_bullets(state: &mut GameState, delta: f32) {
    let world = state.world();
    let mut i = 0;
    'rounds: while i < state.bullets.len() {
        let bullet = &mut state.bullets[i];
        bullet.pos += bullet.vel * delta;
        bullet.life -= delta;
        if bullet.life <= 0.0 || outside_world(bullet.pos, world, BULLET_CULL_MARGIN) {
            state.bullets.remove(i);
            continue;
        }
        let pos = bullet.pos;
        for j in 0..state.bots.len() {
            if point_in_rect(pos, state.bots[j].pos, state.bots[j].size) {
                state.bullets.remove(i);
                let tint = state.bots[j].tint;
                state.bots[j].health = (state.bots[j].health - BULLET_DAMAGE).max(0);
                state.spawn_burst(pos, tint, 6);
                if state.bots[j].health == 0 {
                    state.bots.remove(j);
                }
                continue 'rounds;
            }
        }
        i += 1;
    }
}

/// Integrate turret rounds and resolve them against the player hull
fn update_bot_bullets(state: &mut GameState, delta: f32, now_ms: f64) {
    let world = state.world();
    let mut i = 0;
    while i < state.bot_bullets.len() {
        let bullet = &mut state.bot_bullets[i];
        bullet.pos += bullet.vel * delta;
        bullet.life -= delta;
        if bullet.life <= 0.0 || outside_world(bullet.pos, world, BULLET_CULL_MARGIN) {
            state.bot_bullets.remove(i);
            continue;
        }
        if point_in_circle(bullet.pos, state.player.pos, state.player.radius) {
            state.bot_bullets.remove(i);
            apply_player_hit(state, BOT_BULLET_DAMAGE, now_ms);
            continue;
        }
        i += 1;
    }
}

/// Damage to the player: clamp health at zero, abort any cash-out hold, and
/// run the defeat transition when health is exhausted.
fn apply_player_hit(state: &mut GameState, damage: i32, now_ms: f64) {
    if !state.active {
        return;
    }
    state.player.health = (state.player.health - damage).max(0);
    interrupt_cash_out(state, now_ms);
    let pos = state.player.pos;
    state.spawn_burst(pos, Tint::Magenta, 6);
    if state.player.health == 0 {
        state.handle_defeat();
    }
}

fn check_victory(state: &mut GameState) {
    if state.active && state.bots.is_empty() {
        state.handle_victory();
    }
}

fn update_particles(state: &mut GameState, delta: f32) {
    for particle in &mut state.particles {
        particle.pos += particle.vel * delta;
        particle.alpha -= PARTICLE_FADE * delta;
    }
    state.particles.retain(|p| p.alpha > 0.0);
}
