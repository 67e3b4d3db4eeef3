use glam::Vec2;

use crate::geometry::{clamp_speed, rebound_angle};
use crate::{Ball, Config, EffectTimers, Events, Paddle, ParticleBurst, Params};

/// Bounce the ball off the top and bottom walls.
///
/// The ball edge is put back exactly on the wall so no overshoot is kept.
/// Returns `true` when a bounce happened.
pub fn resolve_wall_collision(
    ball: &mut Ball,
    config: &Config,
    effects: &mut EffectTimers,
    events: &mut Events,
) -> bool {
    let radius = config.ball_radius;

    if ball.pos.y - radius <= 0.0 {
        ball.pos.y = radius;
        ball.vel.y = ball.vel.y.abs();
    } else if ball.pos.y + radius >= config.field_height {
        ball.pos.y = config.field_height - radius;
        ball.vel.y = -ball.vel.y.abs();
    } else {
        return false;
    }

    effects.screen_shake = Params::SCREEN_SHAKE_TICKS;
    events.ball_hit_wall = true;
    events.bursts.push(ParticleBurst {
        origin: ball.pos,
        color: ball.color,
        count: Params::WALL_BURST,
    });
    true
}

/// Bounce the ball off `paddle` if its leading edge is inside the paddle's
/// horizontal band and its centre is level with the paddle.
///
/// The outgoing angle depends on where the ball struck: the centre sends it
/// straight back, the tips send it off at `max_bounce_angle`. Each hit
/// speeds the ball up, capped at `max_ball_speed`. Returns `true` on a hit.
pub fn resolve_paddle_collision(
    ball: &mut Ball,
    paddle: &Paddle,
    config: &Config,
    effects: &mut EffectTimers,
    events: &mut Events,
) -> bool {
    let side = paddle.side;
    let away = side.away();
    let radius = config.ball_radius;
    let face_left = config.paddle_x(side);
    let face_right = face_left + config.paddle_width;

    // Only a ball travelling toward the paddle can hit it
    if ball.vel.x * away >= 0.0 {
        return false;
    }

    let leading_edge = ball.pos.x - away * radius;
    let in_band = leading_edge >= face_left && leading_edge <= face_right;
    let level = ball.pos.y >= paddle.y && ball.pos.y <= paddle.y + config.paddle_height;
    if !(in_band && level) {
        return false;
    }

    // Flush against the face so the same contact cannot fire next tick
    ball.pos.x = if away > 0.0 {
        face_right + radius
    } else {
        face_left - radius
    };

    let half_height = config.paddle_height / 2.0;
    let hit_pos = (ball.pos.y - (paddle.y + half_height)) / half_height;
    let angle = rebound_angle(hit_pos, config.max_bounce_angle);

    let speed = (ball.speed() * config.ball_speed_increase).min(config.max_ball_speed);
    let vel = Vec2::new(away * speed * angle.cos().abs(), speed * angle.sin());
    ball.vel = clamp_speed(vel, config.max_ball_speed);
    ball.color = ball.color.next_ball_color();

    effects.paddle_glow = Params::PADDLE_GLOW_TICKS;
    effects.ball_glow = Params::BALL_GLOW_TICKS;
    events.ball_hit_paddle = Some(side);
    events.bursts.push(ParticleBurst {
        origin: ball.pos,
        color: side.color(),
        count: Params::PADDLE_BURST,
    });

    log::trace!("{:?} paddle hit at {:+.2}, speed {:.2}", side, hit_pos, speed);
    true
}
