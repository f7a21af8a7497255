//! Procedural sprite generation
//!
//! Ship and turret art is drawn once into offscreen canvases at startup and
//! blitted each frame. This is an optional capability: any failure here is
//! reported to the caller, which falls back to drawing the same silhouettes
//! with plain canvas shapes.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

use crate::consts::BOT_SIZE;
use crate::sim::Tint;

use super::tint_css;

/// Ship sprite canvas size; the hull is drawn centered
pub const SHIP_SPRITE_W: f64 = 48.0;
pub const SHIP_SPRITE_H: f64 = 40.0;

pub struct SpriteAtlas {
    pub ship: HtmlCanvasElement,
    /// One pre-tinted turret canvas per palette slot used by the spawn layout
    turrets: Vec<(Tint, HtmlCanvasElement)>,
}

impl SpriteAtlas {
    pub fn turret(&self, tint: Tint) -> Option<&HtmlCanvasElement> {
        self.turrets
            .iter()
            .find(|(t, _)| *t == tint)
            .map(|(_, canvas)| canvas)
    }
}

/// Build the atlas, or explain why it could not be built
pub fn build() -> Result<SpriteAtlas, JsValue> {
    let document = web_sys::window()
        .ok_or_else(|| JsValue::from_str("no window"))?
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let (ship, ctx) = offscreen(&document, SHIP_SPRITE_W as u32, SHIP_SPRITE_H as u32)?;
    draw_ship(&ctx);

    let mut turrets = Vec::new();
    for tint in [Tint::Magenta, Tint::Amber, Tint::Violet] {
        let (canvas, ctx) = offscreen(&document, BOT_SIZE as u32, BOT_SIZE as u32)?;
        draw_turret(&ctx, tint);
        turrets.push((tint, canvas));
    }

    Ok(SpriteAtlas { ship, turrets })
}

fn offscreen(
    document: &Document,
    width: u32,
    height: u32,
) -> Result<(HtmlCanvasElement, CanvasRenderingContext2d), JsValue> {
    let canvas = document
        .create_element("canvas")?
        .dyn_into::<HtmlCanvasElement>()?;
    canvas.set_width(width);
    canvas.set_height(height);
    let ctx = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("offscreen canvas has no 2d context"))?
        .dyn_into::<CanvasRenderingContext2d>()?;
    Ok((canvas, ctx))
}

/// Hull facing +x, centered in the sprite rectangle
fn draw_ship(ctx: &CanvasRenderingContext2d) {
    let (cx, cy) = (SHIP_SPRITE_W / 2.0, SHIP_SPRITE_H / 2.0);

    ctx.set_fill_style_str("#0b0411");
    ctx.fill_rect(cx - 20.0, cy - 16.0, 40.0, 32.0);

    ctx.set_fill_style_str(tint_css(Tint::Player));
    ctx.fill_rect(cx - 16.0, cy - 12.0, 32.0, 24.0);

    // Cannon
    ctx.set_fill_style_str(tint_css(Tint::Magenta));
    ctx.fill_rect(cx + 8.0, cy - 6.0, 20.0, 12.0);

    // Engine vents
    ctx.set_fill_style_str("#f5ff5c");
    ctx.fill_rect(cx - 12.0, cy - 8.0, 8.0, 6.0);
    ctx.fill_rect(cx - 12.0, cy + 2.0, 8.0, 6.0);
}

fn draw_turret(ctx: &CanvasRenderingContext2d, tint: Tint) {
    ctx.set_fill_style_str("#101221");
    ctx.fill_rect(0.0, 0.0, BOT_SIZE as f64, BOT_SIZE as f64);

    ctx.set_fill_style_str(tint_css(tint));
    ctx.fill_rect(8.0, 8.0, 28.0, 12.0);
    ctx.fill_rect(10.0, 22.0, 24.0, 14.0);

    // Sensor dome
    ctx.set_fill_style_str("#ffde59");
    ctx.fill_rect(30.0, 4.0, 10.0, 8.0);
}
