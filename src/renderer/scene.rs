//! World-space drawing: background grid, barrier, entities
//!
//! Everything here except `draw_background` is called inside the camera
//! translation, so coordinates are world units.

use glam::Vec2;
use web_sys::CanvasRenderingContext2d;

use crate::consts::*;
use crate::sim::{GameState, Tint};

use super::sprites::{SHIP_SPRITE_H, SHIP_SPRITE_W, SpriteAtlas};
use super::tint_css;

const GRID_SPACING: f64 = 96.0;

/// Flat backdrop plus a grid that scrolls with the camera (drawn in screen
/// space, offset by the camera modulo the spacing).
pub fn draw_background(ctx: &CanvasRenderingContext2d, state: &GameState, grid_enabled: bool) {
    let (w, h) = (state.viewport.x as f64, state.viewport.y as f64);
    ctx.save();
    ctx.set_fill_style_str("#0c0617");
    ctx.fill_rect(0.0, 0.0, w, h);

    if grid_enabled {
        let offset_x = -(state.camera.pos.x as f64 % GRID_SPACING);
        let offset_y = -(state.camera.pos.y as f64 % GRID_SPACING);
        ctx.set_stroke_style_str("rgba(255, 60, 172, 0.12)");
        ctx.set_line_width(1.0);
        let mut x = offset_x;
        while x < w {
            ctx.begin_path();
            ctx.move_to(x, 0.0);
            ctx.line_to(x, h);
            ctx.stroke();
            x += GRID_SPACING;
        }
        let mut y = offset_y;
        while y < h {
            ctx.begin_path();
            ctx.move_to(0.0, y);
            ctx.line_to(w, y);
            ctx.stroke();
            y += GRID_SPACING;
        }
    }
    ctx.restore();
}

struct Edge {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    horizontal: bool,
}

/// The damaging margin framing the arena: hazard gradient plus tick marks
pub fn draw_barrier(ctx: &CanvasRenderingContext2d) {
    let (world_w, world_h) = (WORLD_WIDTH as f64, WORLD_HEIGHT as f64);
    let thickness = BARRIER_THICKNESS as f64;
    let edges = [
        Edge { x: 0.0, y: 0.0, width: world_w, height: thickness, horizontal: true },
        Edge { x: 0.0, y: world_h - thickness, width: world_w, height: thickness, horizontal: true },
        Edge { x: 0.0, y: 0.0, width: thickness, height: world_h, horizontal: false },
        Edge { x: world_w - thickness, y: 0.0, width: thickness, height: world_h, horizontal: false },
    ];

    for edge in &edges {
        let gradient = if edge.horizontal {
            ctx.create_linear_gradient(edge.x, edge.y, edge.x, edge.y + edge.height)
        } else {
            ctx.create_linear_gradient(edge.x, edge.y, edge.x + edge.width, edge.y)
        };
        let _ = gradient.add_color_stop(0.0, "rgba(255, 118, 20, 0.85)");
        let _ = gradient.add_color_stop(0.5, "rgba(255, 45, 104, 0.9)");
        let _ = gradient.add_color_stop(1.0, "rgba(255, 199, 0, 0.8)");
        ctx.set_fill_style_canvas_gradient(&gradient);
        ctx.fill_rect(edge.x, edge.y, edge.width, edge.height);

        // Hazard ticks
        ctx.set_fill_style_str("rgba(255, 255, 255, 0.16)");
        let step = 18.0;
        if edge.horizontal {
            let mut i = 0.0;
            while i < edge.width {
                ctx.fill_rect(edge.x + i, edge.y + (i % (step * 2.0)), 6.0, 6.0);
                i += step;
            }
        } else {
            let mut i = 0.0;
            while i < edge.height {
                ctx.fill_rect(edge.x + (i % (step * 2.0)), edge.y + i, 6.0, 6.0);
                i += step;
            }
        }
    }
}

pub fn draw_bots(ctx: &CanvasRenderingContext2d, state: &GameState, sprites: Option<&SpriteAtlas>) {
    for bot in &state.bots {
        let (x, y) = (bot.pos.x as f64, bot.pos.y as f64);
        match sprites.and_then(|atlas| atlas.turret(bot.tint)) {
            Some(sprite) => {
                let _ = ctx.draw_image_with_html_canvas_element(sprite, x, y);
            }
            None => {
                // Vector fallback: body block with a tinted core
                ctx.set_fill_style_str("#101221");
                ctx.fill_rect(x, y, bot.size.x as f64, bot.size.y as f64);
                ctx.set_fill_style_str(tint_css(bot.tint));
                ctx.fill_rect(x + 8.0, y + 8.0, bot.size.x as f64 - 16.0, bot.size.y as f64 - 16.0);
            }
        }
        let center = bot.center();
        draw_health_bar(
            ctx,
            center.x,
            bot.pos.y - 12.0,
            bot.health,
            bot.max_health,
        );
    }
}

pub fn draw_player(
    ctx: &CanvasRenderingContext2d,
    state: &GameState,
    aim: Vec2,
    sprites: Option<&SpriteAtlas>,
) {
    let player = &state.player;
    let to_aim = aim - player.pos;
    let angle = (to_aim.y as f64).atan2(to_aim.x as f64);

    ctx.save();
    let _ = ctx.translate(player.pos.x as f64, player.pos.y as f64);
    let _ = ctx.rotate(angle);
    match sprites {
        Some(atlas) => {
            let _ = ctx.draw_image_with_html_canvas_element(
                &atlas.ship,
                -SHIP_SPRITE_W / 2.0,
                -SHIP_SPRITE_H / 2.0,
            );
        }
        None => {
            ctx.set_fill_style_str("#0b0411");
            ctx.fill_rect(-20.0, -16.0, 40.0, 32.0);
            ctx.set_fill_style_str(tint_css(Tint::Player));
            ctx.fill_rect(-16.0, -12.0, 32.0, 24.0);
            ctx.set_fill_style_str(tint_css(Tint::Magenta));
            ctx.fill_rect(8.0, -6.0, 20.0, 12.0);
        }
    }
    ctx.restore();

    draw_health_bar(
        ctx,
        player.pos.x,
        player.pos.y + 30.0,
        player.health,
        player.max_health,
    );
}

fn draw_health_bar(ctx: &CanvasRenderingContext2d, cx: f32, y: f32, value: i32, max_value: i32) {
    let width = 60.0;
    let height = 6.0;
    let x = cx as f64 - width / 2.0;
    let y = y as f64;
    ctx.save();
    ctx.set_fill_style_str("rgba(12, 6, 23, 0.7)");
    ctx.fill_rect(x, y, width, height);
    ctx.set_fill_style_str(tint_css(Tint::Player));
    ctx.fill_rect(x, y, width * value.max(0) as f64 / max_value as f64, height);
    ctx.set_stroke_style_str("rgba(60, 251, 255, 0.8)");
    ctx.stroke_rect(x, y, width, height);
    ctx.restore();
}

pub fn draw_particles(ctx: &CanvasRenderingContext2d, state: &GameState) {
    for particle in &state.particles {
        ctx.save();
        ctx.set_global_alpha(particle.alpha.clamp(0.0, 1.0) as f64);
        ctx.set_fill_style_str(tint_css(particle.tint));
        ctx.fill_rect(
            particle.pos.x as f64,
            particle.pos.y as f64,
            particle.size as f64,
            particle.size as f64,
        );
        ctx.restore();
    }
}

/// Rounds draw as short motion streaks opposite their velocity
pub fn draw_bullets(ctx: &CanvasRenderingContext2d, state: &GameState) {
    ctx.save();
    ctx.set_stroke_style_str(tint_css(Tint::Magenta));
    ctx.set_line_width(3.0);
    for bullet in &state.bullets {
        ctx.begin_path();
        ctx.move_to(bullet.pos.x as f64, bullet.pos.y as f64);
        ctx.line_to(
            (bullet.pos.x - bullet.vel.x * 2.0) as f64,
            (bullet.pos.y - bullet.vel.y * 2.0) as f64,
        );
        ctx.stroke();
    }

    ctx.set_stroke_style_str(tint_css(Tint::Amber));
    ctx.set_line_width(2.0);
    for bullet in &state.bot_bullets {
        ctx.begin_path();
        ctx.move_to(bullet.pos.x as f64, bullet.pos.y as f64);
        ctx.line_to(
            (bullet.pos.x - bullet.vel.x * 3.0) as f64,
            (bullet.pos.y - bullet.vel.y * 3.0) as f64,
        );
        ctx.stroke();
    }
    ctx.restore();
}
