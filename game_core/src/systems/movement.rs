use crate::{Ball, Config, ControlIntent, Paddle};

/// Apply the player's control intent to their paddle
pub fn apply_player_control(paddle: &mut Paddle, intent: Option<ControlIntent>, config: &Config) {
    match intent {
        Some(ControlIntent::Directional { up, down }) => {
            let dir = down as i8 - up as i8;
            paddle.y += dir as f32 * config.paddle_speed;
        }
        Some(ControlIntent::Pointer { target_y }) => {
            let target = target_y - config.paddle_height / 2.0;
            paddle.y += (target - paddle.y) * config.pointer_smoothing;
        }
        None => {}
    }

    // Clamp to field bounds
    paddle.y = config.clamp_paddle_y(paddle.y);
}

/// Move ball by one tick of velocity and record the new position in its trail
pub fn integrate_ball(ball: &mut Ball) {
    ball.pos += ball.vel;
    ball.trail.push(ball.pos);
}
