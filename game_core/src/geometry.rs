//! Small vector helpers shared by the collision systems

use glam::Vec2;

/// Scale `vel` down so its length is at most `max_speed`.
///
/// Never increases the magnitude and keeps the direction.
pub fn clamp_speed(vel: Vec2, max_speed: f32) -> Vec2 {
    let speed = vel.length();
    if speed > max_speed && speed > 0.0 {
        vel * (max_speed / speed)
    } else {
        vel
    }
}

/// Map a relative hit position in `[-1, 1]` linearly onto
/// `[-max_angle, max_angle]` radians off the horizontal.
pub fn rebound_angle(hit_pos: f32, max_angle: f32) -> f32 {
    hit_pos.clamp(-1.0, 1.0) * max_angle
}
