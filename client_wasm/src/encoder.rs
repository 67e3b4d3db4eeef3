//! Renderer that packs each frame into the wire format for the JS canvas
//! painter

use game_core::{Color, Config, FrameView, Renderer, ScoreEvent, Side};
use proto::{BallP, EffectsP, Frame, Layout, ParticleP, RenderMsg, ScoreP, Scorer, Tint};

pub fn tint(color: Color) -> Tint {
    match color {
        Color::Blue => Tint::Blue,
        Color::Pink => Tint::Pink,
        Color::Green => Tint::Green,
        Color::Purple => Tint::Purple,
        Color::Orange => Tint::Orange,
    }
}

pub fn layout(config: &Config) -> Layout {
    Layout {
        field_width: config.field_width,
        field_height: config.field_height,
        paddle_width: config.paddle_width,
        paddle_height: config.paddle_height,
        player_x: config.paddle_x(Side::Player),
        ai_x: config.paddle_x(Side::Ai),
        ball_radius: config.ball_radius,
    }
}

fn score(event: &ScoreEvent) -> ScoreP {
    ScoreP {
        player: event.player_score,
        ai: event.ai_score,
        scorer: match event.scorer {
            Side::Player => Scorer::Player,
            Side::Ai => Scorer::Ai,
        },
    }
}

/// Build the wire frame for a view
pub fn encode_frame(view: &FrameView<'_>) -> Frame {
    let ball = view.ball;
    Frame {
        tick: view.tick,
        paused: view.paused,
        player_y: view.player.y,
        ai_y: view.ai.y,
        score_player: view.player.score,
        score_ai: view.ai.score,
        ball: BallP {
            x: ball.pos.x,
            y: ball.pos.y,
            vx: ball.vel.x,
            vy: ball.vel.y,
            tint: tint(ball.color),
            trail: ball.trail.iter().map(|p| [p.x, p.y]).collect(),
        },
        effects: EffectsP {
            paddle_glow: view.effects.paddle_glow,
            ball_glow: view.effects.ball_glow,
            screen_shake: view.effects.screen_shake,
        },
        particles: view
            .particles
            .iter()
            .map(|p| ParticleP {
                x: p.pos.x,
                y: p.pos.y,
                size: p.size,
                life: p.life,
                tint: tint(p.color),
            })
            .collect(),
        scored: view.scored.as_ref().map(score),
    }
}

/// Keeps the most recent frame, ready to hand to JS
#[derive(Debug, Clone)]
pub struct FrameEncoder {
    last: Frame,
}

impl FrameEncoder {
    pub fn new(initial: &FrameView<'_>) -> Self {
        Self {
            last: encode_frame(initial),
        }
    }

    pub fn last_frame(&self) -> &Frame {
        &self.last
    }

    /// Serialize the most recent frame
    pub fn to_bytes(&self) -> Result<Vec<u8>, postcard::Error> {
        RenderMsg::Frame(self.last.clone()).to_bytes()
    }
}

impl Renderer for FrameEncoder {
    fn render(&mut self, frame: &FrameView<'_>) {
        self.last = encode_frame(frame);
    }
}
