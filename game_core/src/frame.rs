//! Render and score seams
//!
//! The core never draws or formats text. Once per frame the host hands a
//! [`FrameView`] to a [`Renderer`]; score changes go to a [`ScoreSink`].

use crate::{Ball, Config, EffectTimers, Paddle, Particle, ScoreEvent};

/// Read-only view of everything a renderer needs for one frame
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    pub config: &'a Config,
    pub player: &'a Paddle,
    pub ai: &'a Paddle,
    pub ball: &'a Ball,
    pub effects: EffectTimers,
    pub particles: &'a [Particle],
    pub paused: bool,
    pub tick: u64,
    /// Score change of the tick just run, if any
    pub scored: Option<ScoreEvent>,
}

/// Paints a frame; called also while paused so overlays still show
pub trait Renderer {
    fn render(&mut self, frame: &FrameView<'_>);
}

/// Receives every score change
pub trait ScoreSink {
    fn score_changed(&mut self, event: &ScoreEvent);
}

impl<F: FnMut(&ScoreEvent)> ScoreSink for F {
    fn score_changed(&mut self, event: &ScoreEvent) {
        self(event)
    }
}
