//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Timers derive from the timestamp and delta passed into `tick`
//! - No rendering or platform dependencies

pub mod camera;
pub mod collision;
pub mod economy;
pub mod state;
pub mod tick;

pub use camera::Camera;
pub use collision::{clamp_to_arena, outside_world, point_in_circle, point_in_rect};
pub use economy::{INTRO_MESSAGE, INTRO_TITLE};
pub use state::{
    Bot, BotBullet, Bullet, CashOut, GameState, Overlay, Particle, Player, Tint,
};
pub use tick::{TickInput, tick};
