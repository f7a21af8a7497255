//! Game state and entity records
//!
//! Everything the simulation mutates lives in one `GameState` value owned by
//! the loop driver. `tick` takes it by mutable borrow, the renderer by shared
//! borrow; there are no ambient globals.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::camera::Camera;
use crate::consts::*;

/// Palette slot for an entity or particle burst. The renderer owns the actual
/// colors so the sim stays platform-free.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tint {
    /// Player hull cyan
    Player,
    /// Neon magenta (muzzle flashes, hit sparks, first turret)
    Magenta,
    /// Second turret
    Amber,
    /// Third turret
    Violet,
    /// Barrier scorch
    Ember,
}

/// The player-controlled ship
#[derive(Debug, Clone)]
pub struct Player {
    /// Center position in world units
    pub pos: Vec2,
    /// Circular hit extent
    pub radius: f32,
    /// World units covered per reference tick
    pub speed: f32,
    pub health: i32,
    pub max_health: i32,
}

impl Player {
    /// Fresh ship at the round spawn point near the bottom barrier
    pub fn spawn() -> Self {
        Self {
            pos: Vec2::new(
                WORLD_WIDTH / 2.0,
                WORLD_HEIGHT - BARRIER_THICKNESS - 200.0,
            ),
            radius: PLAYER_RADIUS,
            speed: PLAYER_SPEED,
            health: PLAYER_MAX_HEALTH,
            max_health: PLAYER_MAX_HEALTH,
        }
    }
}

/// A static turret with a rectangular hit extent
#[derive(Debug, Clone)]
pub struct Bot {
    /// Top-left corner in world units
    pub pos: Vec2,
    pub size: Vec2,
    pub health: i32,
    pub max_health: i32,
    pub tint: Tint,
    /// Wall-clock timestamp of the last round fired
    pub last_shot_ms: f64,
}

impl Bot {
    pub fn new(pos: Vec2, tint: Tint, now_ms: f64) -> Self {
        Self {
            pos,
            size: Vec2::splat(BOT_SIZE),
            health: BOT_MAX_HEALTH,
            max_health: BOT_MAX_HEALTH,
            tint,
            last_shot_ms: now_ms,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }
}

/// A player-fired round
#[derive(Debug, Clone)]
pub struct Bullet {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Remaining lifetime in reference ticks
    pub life: f32,
}

impl Bullet {
    pub fn new(pos: Vec2, dir: Vec2) -> Self {
        Self {
            pos,
            vel: dir * BULLET_SPEED,
            life: BULLET_LIFE,
        }
    }
}

/// A turret-fired round; slower and longer-lived than the player's
#[derive(Debug, Clone)]
pub struct BotBullet {
    pub pos: Vec2,
    pub vel: Vec2,
    pub life: f32,
}

impl BotBullet {
    pub fn new(pos: Vec2, dir: Vec2) -> Self {
        Self {
            pos,
            vel: dir * BOT_BULLET_SPEED,
            life: BOT_BULLET_LIFE,
        }
    }
}

/// Cosmetic spark; no gameplay effect
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub alpha: f32,
    pub size: f32,
    pub tint: Tint,
}

/// Cash-out hold state machine
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CashOut {
    Idle,
    /// Hold key depressed since this timestamp
    Holding { since_ms: f64 },
    /// A hit interrupted a hold; no new hold may start before `until_ms`
    CoolingDown { until_ms: f64 },
}

/// Pending modal content; `None` while the overlay is hidden
#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    pub title: String,
    pub message: String,
    /// Show the pre-round instructional list instead of the rejoin hint
    pub show_list: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,

    /// Session wallet; resets on reload by design
    pub wallet: f64,
    /// Stake for the current round; zero exactly when no round is active
    pub pot: f64,
    pub active: bool,
    pub game_over: bool,

    pub player: Player,
    pub bots: Vec<Bot>,
    pub bullets: Vec<Bullet>,
    pub bot_bullets: Vec<BotBullet>,
    pub particles: Vec<Particle>,

    pub cash_out: CashOut,
    /// Wall-clock timestamp of the player's last shot
    pub last_shot_ms: f64,
    /// Fractional barrier damage carried between ticks
    pub barrier_damage_buffer: f32,

    pub camera: Camera,
    /// Visible viewport in world units (canvas pixels map 1:1)
    pub viewport: Vec2,

    pub overlay: Option<Overlay>,
    /// Particle cap, set from the quality preset
    pub max_particles: usize,
}

impl GameState {
    /// Create a pre-round state: bots placed, overlay showing the intro,
    /// wallet loaded, no round active.
    pub fn new(seed: u64, viewport: Vec2) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            wallet: STARTING_WALLET,
            pot: 0.0,
            active: false,
            game_over: false,
            player: Player::spawn(),
            bots: Vec::new(),
            bullets: Vec::new(),
            bot_bullets: Vec::new(),
            particles: Vec::new(),
            cash_out: CashOut::Idle,
            last_shot_ms: 0.0,
            barrier_damage_buffer: 0.0,
            camera: Camera::default(),
            viewport,
            overlay: None,
            max_particles: MAX_PARTICLES,
        };
        state.reset_round(0.0);
        state.show_intro_overlay();
        state
    }

    /// World extent as a vector
    #[inline]
    pub fn world(&self) -> Vec2 {
        Vec2::new(WORLD_WIDTH, WORLD_HEIGHT)
    }

    /// Reset all round-scoped state: player at spawn with full health, entity
    /// lists cleared, cash-out idle, camera snapped onto the spawn point,
    /// turrets back at the fixed layout.
    pub fn reset_round(&mut self, now_ms: f64) {
        self.player = Player::spawn();
        self.bullets.clear();
        self.bot_bullets.clear();
        self.particles.clear();
        self.cash_out = CashOut::Idle;
        self.last_shot_ms = 0.0;
        self.barrier_damage_buffer = 0.0;
        self.camera.snap_to(Camera::target_for(
            self.player.pos,
            self.viewport,
            self.world(),
        ));
        self.spawn_bots(now_ms);
    }

    /// Place the turrets at the fixed spawn layout
    pub fn spawn_bots(&mut self, now_ms: f64) {
        let tints = [Tint::Magenta, Tint::Amber, Tint::Violet];
        let spots = [
            Vec2::new(WORLD_WIDTH * 0.28, BARRIER_THICKNESS + 260.0),
            Vec2::new(WORLD_WIDTH * 0.5 - BOT_SIZE / 2.0, WORLD_HEIGHT * 0.36),
            Vec2::new(WORLD_WIDTH * 0.72, BARRIER_THICKNESS + 520.0),
        ];
        self.bots.clear();
        for i in 0..BOT_COUNT {
            self.bots.push(Bot::new(
                spots[i % spots.len()],
                tints[i % tints.len()],
                now_ms,
            ));
        }
    }

    /// Emit a small burst of sparks at `pos`. Oldest particles are recycled
    /// once the quality cap is reached.
    pub fn spawn_burst(&mut self, pos: Vec2, tint: Tint, count: usize) {
        for _ in 0..count {
            if self.particles.len() >= self.max_particles {
                self.particles.remove(0);
            }
            let vel = Vec2::new(
                self.rng.random_range(-1.5..1.5),
                self.rng.random_range(-1.5..1.5),
            );
            let size = self.rng.random_range(2.0..6.0);
            self.particles.push(Particle {
                pos,
                vel,
                alpha: 1.0,
                size,
                tint,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{VIEW_HEIGHT, VIEW_WIDTH};

    fn viewport() -> Vec2 {
        Vec2::new(VIEW_WIDTH, VIEW_HEIGHT)
    }

    #[test]
    fn test_new_state_is_inactive_with_intro() {
        let state = GameState::new(1, viewport());
        assert!(!state.active);
        assert_eq!(state.pot, 0.0);
        assert_eq!(state.wallet, STARTING_WALLET);
        assert_eq!(state.bots.len(), BOT_COUNT);
        assert!(state.overlay.as_ref().is_some_and(|o| o.show_list));
    }

    #[test]
    fn test_reset_round_clears_round_scoped_state() {
        let mut state = GameState::new(2, viewport());
        state.player.health = 5;
        state.bullets.push(Bullet::new(Vec2::ZERO, Vec2::X));
        state.bot_bullets.push(BotBullet::new(Vec2::ZERO, Vec2::X));
        state.spawn_burst(Vec2::ZERO, Tint::Magenta, 4);
        state.cash_out = CashOut::Holding { since_ms: 10.0 };
        state.barrier_damage_buffer = 0.7;

        state.reset_round(100.0);
        assert_eq!(state.player.health, PLAYER_MAX_HEALTH);
        assert!(state.bullets.is_empty());
        assert!(state.bot_bullets.is_empty());
        assert!(state.particles.is_empty());
        assert_eq!(state.cash_out, CashOut::Idle);
        assert_eq!(state.barrier_damage_buffer, 0.0);
        assert!(state.bots.iter().all(|b| b.last_shot_ms == 100.0));
    }

    #[test]
    fn test_spawn_burst_respects_cap() {
        let mut state = GameState::new(3, viewport());
        state.max_particles = 8;
        state.spawn_burst(Vec2::ZERO, Tint::Ember, 20);
        assert_eq!(state.particles.len(), 8);
    }

    #[test]
    fn test_camera_snapped_onto_spawn() {
        let state = GameState::new(4, viewport());
        let target = Camera::target_for(state.player.pos, state.viewport, state.world());
        assert_eq!(state.camera.pos, target);
    }
}
