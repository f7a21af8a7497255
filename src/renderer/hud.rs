//! Screen-space HUD: status panel, cash-out bar, minimap
//!
//! Drawn after the camera translation is restored, so coordinates are canvas
//! pixels.

use web_sys::CanvasRenderingContext2d;

use crate::consts::*;
use crate::format_money;
use crate::sim::{CashOut, GameState, Tint};

use super::tint_css;

const FONT_LG: &str = "20px \"Press Start 2P\", monospace";
const FONT_MD: &str = "16px \"Press Start 2P\", monospace";
const FONT_SM: &str = "12px \"Press Start 2P\", monospace";
const FONT_XS: &str = "10px \"Press Start 2P\", monospace";
const FONT_XXS: &str = "8px \"Press Start 2P\", monospace";

/// Status panel in the bottom-left corner plus the cash-out bar
pub fn draw(ctx: &CanvasRenderingContext2d, state: &GameState, now_ms: f64) {
    let h = state.viewport.y as f64;
    ctx.save();

    ctx.set_fill_style_str("rgba(12, 6, 23, 0.5)");
    ctx.fill_rect(24.0, h - 70.0, 240.0, 46.0);
    ctx.set_stroke_style_str("rgba(60, 251, 255, 0.4)");
    ctx.stroke_rect(24.0, h - 70.0, 240.0, 46.0);

    ctx.set_fill_style_str(tint_css(Tint::Magenta));
    ctx.set_font(FONT_MD);
    let _ = ctx.fill_text("BOTS LEFT", 40.0, h - 42.0);
    ctx.set_fill_style_str("#f5ff5c");
    ctx.set_font(FONT_LG);
    let _ = ctx.fill_text(&format!("{:02}", state.bots.len()), 40.0, h - 18.0);

    ctx.set_fill_style_str(tint_css(Tint::Player));
    ctx.set_font(FONT_SM);
    let _ = ctx.fill_text(&format!("POT: {}", format_money(state.pot)), 150.0, h - 36.0);
    let _ = ctx.fill_text(&format!("HP: {}", state.player.health.max(0)), 150.0, h - 20.0);

    if state.active {
        ctx.set_fill_style_str("#f5ff5c");
        ctx.set_font(FONT_XS);
        let _ = ctx.fill_text("CASH OUT [G]", 40.0, h - 4.0);
        draw_cash_out_bar(ctx, state, now_ms, h);
    }
    ctx.restore();
}

/// Exactly one of three visual states: holding progress, cooldown recovery,
/// or ready.
fn draw_cash_out_bar(ctx: &CanvasRenderingContext2d, state: &GameState, now_ms: f64, h: f64) {
    let (bar_x, bar_y) = (150.0, h - 14.0);
    let (bar_w, bar_h) = (104.0, 6.0);
    ctx.set_fill_style_str("rgba(12, 6, 23, 0.7)");
    ctx.fill_rect(bar_x, bar_y, bar_w, bar_h);

    ctx.set_font(FONT_XXS);
    match state.cash_out {
        CashOut::Holding { since_ms } => {
            let progress = ((now_ms - since_ms) / CASH_OUT_HOLD_MS).clamp(0.0, 1.0);
            ctx.set_fill_style_str(tint_css(Tint::Player));
            ctx.fill_rect(bar_x, bar_y, bar_w * progress, bar_h);
            ctx.set_fill_style_str(tint_css(Tint::Magenta));
            let _ = ctx.fill_text("HOLDING...", bar_x, bar_y - 2.0);
        }
        CashOut::CoolingDown { until_ms } if until_ms > now_ms => {
            let remaining = ((until_ms - now_ms) / CASH_OUT_COOLDOWN_MS).clamp(0.0, 1.0);
            ctx.set_fill_style_str(tint_css(Tint::Magenta));
            ctx.fill_rect(bar_x, bar_y, bar_w * remaining, bar_h);
            let _ = ctx.fill_text("HIT! RECOVERING", bar_x, bar_y - 2.0);
        }
        _ => {
            ctx.set_fill_style_str(tint_css(Tint::Player));
            ctx.fill_rect(bar_x, bar_y, bar_w, bar_h);
            let _ = ctx.fill_text("READY", bar_x, bar_y - 2.0);
        }
    }

    ctx.set_stroke_style_str("rgba(60, 251, 255, 0.8)");
    ctx.stroke_rect(bar_x, bar_y, bar_w, bar_h);
}

/// Whole-world overview in the top-right corner: barrier shading, safe-zone
/// outline, turret and player blips, and the current viewport rectangle.
pub fn draw_minimap(ctx: &CanvasRenderingContext2d, state: &GameState) {
    let (map_w, map_h) = (220.0, 160.0);
    let padding = 24.0;
    let x = state.viewport.x as f64 - map_w - padding;
    let y = padding;
    let inner_padding = 12.0;

    let (world_w, world_h) = (WORLD_WIDTH as f64, WORLD_HEIGHT as f64);
    let thickness = BARRIER_THICKNESS as f64;

    ctx.save();
    ctx.set_fill_style_str("rgba(12, 6, 23, 0.7)");
    ctx.fill_rect(x, y, map_w, map_h);
    ctx.set_stroke_style_str("rgba(60, 251, 255, 0.45)");
    ctx.stroke_rect(x, y, map_w, map_h);

    let inner_w = map_w - inner_padding * 2.0;
    let inner_h = map_h - inner_padding * 2.0;
    let scale = (inner_w / world_w).min(inner_h / world_h);
    let offset_x = x + inner_padding + (inner_w - world_w * scale) / 2.0;
    let offset_y = y + inner_padding + (inner_h - world_h * scale) / 2.0;

    ctx.set_fill_style_str("rgba(6, 3, 12, 0.95)");
    ctx.fill_rect(offset_x, offset_y, world_w * scale, world_h * scale);

    // Barrier shading
    let barrier_scaled = thickness * scale;
    ctx.set_fill_style_str("rgba(255, 95, 0, 0.28)");
    ctx.fill_rect(offset_x, offset_y, world_w * scale, barrier_scaled);
    ctx.fill_rect(
        offset_x,
        offset_y + world_h * scale - barrier_scaled,
        world_w * scale,
        barrier_scaled,
    );
    ctx.fill_rect(offset_x, offset_y, barrier_scaled, world_h * scale);
    ctx.fill_rect(
        offset_x + world_w * scale - barrier_scaled,
        offset_y,
        barrier_scaled,
        world_h * scale,
    );

    // Safe-zone outline
    ctx.set_stroke_style_str("rgba(255, 168, 0, 0.6)");
    ctx.set_line_width(2.0);
    ctx.stroke_rect(
        offset_x + barrier_scaled,
        offset_y + barrier_scaled,
        (world_w - thickness * 2.0) * scale,
        (world_h - thickness * 2.0) * scale,
    );

    for bot in &state.bots {
        let center = bot.center();
        ctx.set_fill_style_str(tint_css(bot.tint));
        ctx.fill_rect(
            offset_x + center.x as f64 * scale - 3.0,
            offset_y + center.y as f64 * scale - 3.0,
            6.0,
            6.0,
        );
    }

    ctx.set_fill_style_str(tint_css(Tint::Player));
    ctx.begin_path();
    let _ = ctx.arc(
        offset_x + state.player.pos.x as f64 * scale,
        offset_y + state.player.pos.y as f64 * scale,
        5.0,
        0.0,
        std::f64::consts::TAU,
    );
    ctx.fill();
    ctx.set_stroke_style_str("rgba(60, 251, 255, 0.8)");
    ctx.stroke();

    // Current viewport
    ctx.set_stroke_style_str("rgba(245, 255, 92, 0.6)");
    ctx.set_line_width(1.0);
    ctx.stroke_rect(
        offset_x + state.camera.pos.x as f64 * scale,
        offset_y + state.camera.pos.y as f64 * scale,
        (state.viewport.x as f64).min(world_w) * scale,
        (state.viewport.y as f64).min(world_h) * scale,
    );

    ctx.restore();
}
