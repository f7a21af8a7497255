//! Hit-extent containment tests and the arena constraint

use glam::Vec2;

/// Strict interior test used for player rounds vs turret bodies. A round
/// exactly on the edge does not connect, matching the original tuning.
#[inline]
pub fn point_in_rect(point: Vec2, rect_pos: Vec2, rect_size: Vec2) -> bool {
    point.x > rect_pos.x
        && point.x < rect_pos.x + rect_size.x
        && point.y > rect_pos.y
        && point.y < rect_pos.y + rect_size.y
}

/// Circle containment used for turret rounds vs the player hull
#[inline]
pub fn point_in_circle(point: Vec2, center: Vec2, radius: f32) -> bool {
    point.distance_squared(center) <= radius * radius
}

/// True once a round has left the world rectangle by more than `margin`
#[inline]
pub fn outside_world(pos: Vec2, world: Vec2, margin: f32) -> bool {
    pos.x < -margin || pos.x > world.x + margin || pos.y < -margin || pos.y > world.y + margin
}

/// Clamp `candidate` into the playable rectangle: world bounds inset by the
/// barrier thickness and the entity radius. Returns the clamped point and
/// whether clamping moved it (i.e. the entity pressed against the barrier).
pub fn clamp_to_arena(candidate: Vec2, radius: f32, world: Vec2, barrier: f32) -> (Vec2, bool) {
    let inset = Vec2::splat(barrier + radius);
    let clamped = candidate.clamp(inset, world - inset);
    (clamped, clamped != candidate)
}
