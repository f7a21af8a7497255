//! Canvas 2D rendering
//!
//! A pure read of `GameState`: nothing in here mutates gameplay state. The
//! frame is painted in three passes: camera-relative background, the
//! world-space pass translated by the negative camera offset, then the
//! screen-space HUD and minimap.

pub mod hud;
pub mod scene;
pub mod sprites;

use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::Settings;
use crate::sim::{GameState, Tint};
use sprites::SpriteAtlas;

/// Neon palette shared by the scene and HUD passes
pub(crate) fn tint_css(tint: Tint) -> &'static str {
    match tint {
        Tint::Player => "#3cfbff",
        Tint::Magenta => "#ff3cac",
        Tint::Amber => "#ffb74d",
        Tint::Violet => "#9575cd",
        Tint::Ember => "#ff8e53",
    }
}

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    /// Procedural sprite art; `None` falls back to built-in vector shapes
    sprites: Option<SpriteAtlas>,
    grid_enabled: bool,
}

impl CanvasRenderer {
    pub fn new(canvas: &HtmlCanvasElement, settings: &Settings) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let sprites = match sprites::build() {
            Ok(atlas) => Some(atlas),
            Err(err) => {
                log::warn!("sprite atlas unavailable, using vector shapes: {err:?}");
                None
            }
        };

        Ok(Self {
            ctx,
            sprites,
            grid_enabled: settings.quality.grid_enabled(),
        })
    }

    /// Paint one frame. `pointer` is the pointer position in canvas pixels
    /// (used to face the ship); `now_ms` drives the cash-out bar.
    pub fn render(&self, state: &GameState, pointer: Vec2, now_ms: f64) {
        let ctx = &self.ctx;

        scene::draw_background(ctx, state, self.grid_enabled);

        ctx.save();
        let _ = ctx.translate(-state.camera.pos.x as f64, -state.camera.pos.y as f64);
        scene::draw_barrier(ctx);
        scene::draw_bots(ctx, state, self.sprites.as_ref());
        let aim = state.camera.screen_to_world(pointer);
        scene::draw_player(ctx, state, aim, self.sprites.as_ref());
        scene::draw_particles(ctx, state);
        scene::draw_bullets(ctx, state);
        ctx.restore();

        hud::draw(ctx, state, now_ms);
        hud::draw_minimap(ctx, state);
    }
}
