use game_core::{
    frame, step, Config, ConfigError, FrameView, GameState, Params, Renderer, ScoreSink,
    TickInput,
};
use proto::{Frame, Layout};

use crate::encoder::{self, FrameEncoder};
use crate::input::InputState;

/// Single-player game driven by the browser's animation callback
pub struct LocalGame {
    pub state: GameState,
    pub input: InputState,
    encoder: FrameEncoder,
    accumulator: f32,
}

impl LocalGame {
    pub fn new(config: Config, seed: u64) -> Result<Self, ConfigError> {
        let state = GameState::new(config, seed)?;
        let encoder = FrameEncoder::new(&state.view());
        Ok(Self {
            state,
            input: InputState::new(),
            encoder,
            accumulator: 0.0,
        })
    }

    pub fn layout(&self) -> Layout {
        encoder::layout(&self.state.config)
    }

    /// Run exactly one tick and render it
    pub fn tick(&mut self, sink: &mut dyn ScoreSink) -> &Frame {
        let input = self.input.take_tick_input();
        self.tick_with(&input, sink)
    }

    /// Run one tick with input from outside the browser event handlers
    pub fn tick_with(&mut self, input: &TickInput, sink: &mut dyn ScoreSink) -> &Frame {
        frame(&mut self.state, input, &mut self.encoder, sink);
        self.latest()
    }

    /// Run as many whole fixed-rate ticks as `elapsed` seconds cover, then
    /// render once.
    ///
    /// Gaps longer than `Params::MAX_DT` are clamped so a backgrounded tab
    /// does not fast-forward the rally; a non-finite gap counts as zero. The
    /// rendered frame carries the last goal of this batch, if any. Returns
    /// the number of ticks run.
    pub fn advance(&mut self, elapsed: f32, sink: &mut dyn ScoreSink) -> u32 {
        let elapsed = if elapsed.is_finite() { elapsed } else { 0.0 };
        self.accumulator += elapsed.clamp(0.0, Params::MAX_DT);

        let mut ticks = 0;
        let mut scored = None;
        while self.accumulator >= Params::FIXED_DT {
            self.accumulator -= Params::FIXED_DT;
            let input = self.input.take_tick_input();
            if let Some(event) = step(&mut self.state, &input) {
                sink.score_changed(&event);
                scored = Some(event);
            }
            ticks += 1;
        }

        self.encoder.render(&FrameView {
            scored,
            ..self.state.view()
        });
        ticks
    }

    /// Most recently rendered frame
    pub fn latest(&self) -> &Frame {
        self.encoder.last_frame()
    }

    pub fn frame_bytes(&self) -> Result<Vec<u8>, postcard::Error> {
        self.encoder.to_bytes()
    }
}
