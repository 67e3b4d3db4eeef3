use glam::Vec2;
use rand::Rng;

use crate::{
    AiState, Ball, Config, ConfigError, EffectTimers, Events, FrameView, GameRng, Paddle,
    Particle, Side,
};

/// Complete game state, owned by the host loop and passed by reference into
/// the systems each tick
pub struct GameState {
    pub config: Config,
    pub player: Paddle,
    pub ai: Paddle,
    pub ball: Ball,
    pub ai_state: AiState,
    pub effects: EffectTimers,
    pub particles: Vec<Particle>,
    pub paused: bool,
    /// Simulation ticks run so far (paused frames excluded)
    pub tick: u64,
    pub events: Events,
    pub rng: GameRng,
}

impl GameState {
    /// Validate `config` and set up a fresh game with the ball served in a
    /// random direction
    pub fn new(config: Config, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let paddle_y = config.centered_paddle_y();
        let mut state = Self {
            player: Paddle::new(Side::Player, paddle_y),
            ai: Paddle::new(Side::Ai, paddle_y),
            ball: Ball::new(config.center(), Vec2::ZERO, config.trail_capacity),
            ai_state: AiState::new(&config),
            effects: EffectTimers::new(),
            particles: Vec::new(),
            paused: false,
            tick: 0,
            events: Events::new(),
            rng: GameRng::new(seed),
            config,
        };
        state.reset_ball(0);

        log::info!(
            "New game: {}x{} field, seed {}",
            state.config.field_width,
            state.config.field_height,
            seed
        );
        Ok(state)
    }

    /// Re-centre the ball and serve it at a random angle within
    /// `±serve_angle` of the horizontal.
    ///
    /// A positive `direction` serves toward the AI, negative toward the
    /// player, zero picks a side at random.
    pub fn reset_ball(&mut self, direction: i8) {
        let config = &self.config;
        let rng = &mut self.rng.0;

        let angle = (rng.gen::<f32>() - 0.5) * 2.0 * config.serve_angle;
        let dir = match direction.signum() {
            0 => {
                if rng.gen_bool(0.5) {
                    1.0
                } else {
                    -1.0
                }
            }
            d => d as f32,
        };

        self.ball.pos = config.center();
        self.ball.vel = Vec2::new(angle.cos() * dir, angle.sin()) * config.ball_speed;
        self.ball.trail.clear();
        self.ball.color = Default::default();
        self.ai_state.recenter(config);

        log::debug!("Ball served toward {:+}", dir);
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Player => &mut self.player,
            Side::Ai => &mut self.ai,
        }
    }

    /// (player, ai)
    pub fn scores(&self) -> (u32, u32) {
        (self.player.score, self.ai.score)
    }

    pub fn view(&self) -> FrameView<'_> {
        FrameView {
            config: &self.config,
            player: &self.player,
            ai: &self.ai,
            ball: &self.ball,
            effects: self.effects,
            particles: &self.particles,
            paused: self.paused,
            tick: self.tick,
            scored: self.events.scored,
        }
    }
}
