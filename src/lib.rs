//! Pot Shot - a wagered top-down arena shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, combat, economy, camera)
//! - `renderer`: Canvas 2D rendering (wasm32 only)
//! - `settings`: Render quality presets persisted in LocalStorage

#[cfg(target_arch = "wasm32")]
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{QualityPreset, Settings};

/// Game configuration constants
pub mod consts {
    /// Reference tick length; per-frame `delta` is elapsed time divided by this
    pub const TICK_MS: f64 = 1000.0 / 60.0;
    /// Largest delta a single frame may carry (tab-switch catch-up guard)
    pub const MAX_DELTA: f32 = 3.0;

    /// Arena dimensions (world units)
    pub const WORLD_WIDTH: f32 = 2400.0;
    pub const WORLD_HEIGHT: f32 = 1600.0;
    /// Damaging margin bounding the playable rectangle
    pub const BARRIER_THICKNESS: f32 = 120.0;
    /// Health drained while pressed against the barrier (hp per second)
    pub const BARRIER_DAMAGE_PER_SECOND: f32 = 25.0;

    /// Canvas viewport; world units map 1:1 onto canvas pixels
    pub const VIEW_WIDTH: f32 = 960.0;
    pub const VIEW_HEIGHT: f32 = 640.0;
    /// Camera smoothing constant per reference tick
    pub const CAMERA_SMOOTHING: f32 = 0.12;

    /// Player defaults
    pub const PLAYER_RADIUS: f32 = 18.0;
    pub const PLAYER_SPEED: f32 = 2.8; // world units per reference tick
    pub const PLAYER_MAX_HEALTH: i32 = 100;
    /// Minimum interval between player shots (wall-clock ms)
    pub const SHOOT_INTERVAL_MS: f64 = 180.0;
    pub const BULLET_SPEED: f32 = 7.0;
    pub const BULLET_LIFE: f32 = 70.0; // reference ticks
    pub const BULLET_DAMAGE: i32 = 20;

    /// Turret defaults
    pub const BOT_COUNT: usize = 3;
    pub const BOT_SIZE: f32 = 44.0;
    pub const BOT_MAX_HEALTH: i32 = 60;
    pub const BOT_SHOOT_INTERVAL_MS: f64 = 5000.0;
    pub const BOT_BULLET_SPEED: f32 = 4.5;
    pub const BOT_BULLET_LIFE: f32 = 160.0;
    pub const BOT_BULLET_DAMAGE: i32 = 20;
    /// How far past the world rectangle a round may fly before it is culled
    pub const BULLET_CULL_MARGIN: f32 = 20.0;

    /// Particle fade per reference tick
    pub const PARTICLE_FADE: f32 = 0.02;
    /// Particle cap when no quality preset overrides it
    pub const MAX_PARTICLES: usize = 256;

    /// Economy
    pub const ENTRY_COST: f64 = 1.0;
    pub const BOT_CONTRIBUTION: f64 = 1.0;
    pub const STARTING_WALLET: f64 = 10.0;

    /// Cash-out timing (wall-clock ms)
    pub const CASH_OUT_HOLD_MS: f64 = 3000.0;
    pub const CASH_OUT_COOLDOWN_MS: f64 = 2000.0;
}

/// Format a currency amount the way the HUD and overlays display it
#[inline]
pub fn format_money(amount: f64) -> String {
    format!("${amount:.2}")
}
