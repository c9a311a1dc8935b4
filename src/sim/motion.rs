//! Entity motion
//!
//! Pure integrators: no hidden engine state, every input is explicit.

use super::state::{ObstaclePair, Player};

/// Vertical state after `dt` seconds of constant downward acceleration
///
/// Uses the closed-form step `y + v·dt + ½·g·dt²`, so any partition of a
/// time span lands on the same position as one big step.
#[inline]
pub fn integrate_fall(y: f32, vel_y: f32, gravity: f32, dt: f32) -> (f32, f32) {
    let y = y + vel_y * dt + 0.5 * gravity * dt * dt;
    (y, vel_y + gravity * dt)
}

/// Apply gravity to the player. Horizontal position never changes.
pub fn integrate_player(player: &mut Player, gravity: f32, max_fall_speed: Option<f32>, dt: f32) {
    let (y, vel_y) = integrate_fall(player.pos.y, player.vel_y, gravity, dt);
    player.pos.y = y;
    player.vel_y = match max_fall_speed {
        Some(cap) => vel_y.min(cap),
        None => vel_y,
    };
}

/// Scroll every member of a pair by its own horizontal velocity
pub fn scroll_pair(pair: &mut ObstaclePair, dt: f32) {
    pair.top.bounds.translate_x(pair.top.vel_x * dt);
    pair.bottom.bounds.translate_x(pair.bottom.vel_x * dt);
    pair.zone.bounds.translate_x(pair.zone.vel_x * dt);
}
