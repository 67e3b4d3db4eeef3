use glam::Vec2;

use crate::{Color, ControlIntent, Side};

/// Random number generator
///
/// The only randomness source in the simulation; a fixed seed replays a
/// game exactly.
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Everything the host feeds into one tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// `None` means no movement this tick
    pub intent: Option<ControlIntent>,
    /// Edge event: flips the paused flag once
    pub pause_toggled: bool,
}

/// Score change reported to the score sink
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreEvent {
    pub player_score: u32,
    pub ai_score: u32,
    pub scorer: Side,
}

/// Request for a cosmetic particle explosion
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleBurst {
    pub origin: Vec2,
    pub color: Color,
    pub count: usize,
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub ball_hit_wall: bool,
    pub ball_hit_paddle: Option<Side>,
    pub scored: Option<ScoreEvent>,
    pub bursts: Vec<ParticleBurst>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.ball_hit_wall = false;
        self.ball_hit_paddle = None;
        self.scored = None;
        self.bursts.clear();
    }
}

/// Cosmetic countdowns (in ticks) consumed by the renderer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EffectTimers {
    pub paddle_glow: u32,
    pub ball_glow: u32,
    pub screen_shake: u32,
}

impl EffectTimers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every running timer down by one tick
    pub fn decay(&mut self) {
        self.paddle_glow = self.paddle_glow.saturating_sub(1);
        self.ball_glow = self.ball_glow.saturating_sub(1);
        self.screen_shake = self.screen_shake.saturating_sub(1);
    }

    pub fn is_idle(&self) -> bool {
        self.paddle_glow == 0 && self.ball_glow == 0 && self.screen_shake == 0
    }
}
