//! AI opponent
//!
//! The AI does not track the ball continuously. Every `ai_reaction_delay + 1`
//! ticks it samples the ball height plus uniform noise and then chases that
//! stale target at a fixed speed, which is what makes it beatable.

use rand::Rng;

use crate::{Ball, Config, GameRng, Paddle};

/// AI controller memory
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AiState {
    /// Where the AI wants its paddle centre to be
    pub target_y: f32,
    /// Ticks since the last re-target
    pub reaction_counter: u32,
}

impl AiState {
    pub fn new(config: &Config) -> Self {
        Self {
            target_y: config.field_height / 2.0,
            reaction_counter: 0,
        }
    }

    /// Forget the current pursuit and aim at the field centre
    pub fn recenter(&mut self, config: &Config) {
        self.target_y = config.field_height / 2.0;
    }

    /// Re-sample the target once the reaction delay has elapsed.
    ///
    /// Returns `true` on the ticks where the target changed.
    pub fn update_target(&mut self, ball: &Ball, config: &Config, rng: &mut GameRng) -> bool {
        self.reaction_counter += 1;
        if self.reaction_counter <= config.ai_reaction_delay {
            return false;
        }

        let noise = (rng.0.gen::<f32>() - 0.5) * config.ai_error_range;
        self.target_y = ball.pos.y + noise;
        self.reaction_counter = 0;
        log::trace!("AI re-targeted to y={:.1}", self.target_y);
        true
    }
}

/// Move the AI paddle toward its target by at most `ai_speed`.
///
/// Differences inside the dead zone are ignored and the step never carries
/// the paddle centre past the target.
pub fn steer_paddle(paddle: &mut Paddle, ai: &AiState, config: &Config) {
    let center = paddle.y + config.paddle_height / 2.0;
    let diff = ai.target_y - center;

    if diff.abs() > config.ai_dead_zone {
        let step = config.ai_speed.min(diff.abs());
        paddle.y += diff.signum() * step;
    }

    paddle.y = config.clamp_paddle_y(paddle.y);
}

/// Run the AI controller for one tick
pub fn update_ai(
    paddle: &mut Paddle,
    ai: &mut AiState,
    ball: &Ball,
    config: &Config,
    rng: &mut GameRng,
) {
    ai.update_target(ball, config, rng);
    steer_paddle(paddle, ai, config);
}
