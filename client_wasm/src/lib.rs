//! Browser front end for the Pong core
//!
//! The JS page owns the canvas and the DOM. Each animation frame it forwards
//! input events here, calls [`WasmGame::advance`] or [`WasmGame::tick`] and
//! paints the returned postcard-encoded [`proto::RenderMsg`].

pub mod encoder;
pub mod input;
pub mod simulation;

pub use encoder::FrameEncoder;
pub use input::InputState;
pub use simulation::LocalGame;

#[cfg(target_arch = "wasm32")]
mod web {
    use game_core::{Config, ScoreEvent, Side};
    use proto::{InputMsg, RenderMsg};
    use wasm_bindgen::prelude::*;
    use web_sys::KeyboardEvent;

    use crate::input::{get_code_from_event, tick_input_from_msg};
    use crate::LocalGame;

    #[wasm_bindgen(start)]
    pub fn start() {
        console_error_panic_hook::set_once();
        // A second init (hot reload) is harmless
        let _ = console_log::init_with_level(log::Level::Info);
    }

    fn js_err(e: impl std::fmt::Display) -> JsValue {
        JsValue::from_str(&e.to_string())
    }

    /// Game handle exported to JS
    #[wasm_bindgen]
    pub struct WasmGame {
        game: LocalGame,
        on_score: Option<js_sys::Function>,
    }

    #[wasm_bindgen]
    impl WasmGame {
        /// Start a game; `config_toml` overrides the default tuning
        #[wasm_bindgen(constructor)]
        pub fn new(seed: u32, config_toml: Option<String>) -> Result<WasmGame, JsValue> {
            let config = match config_toml {
                Some(doc) => Config::from_toml_str(&doc).map_err(js_err)?,
                None => Config::new(),
            };
            let game = LocalGame::new(config, u64::from(seed)).map_err(js_err)?;
            Ok(Self {
                game,
                on_score: None,
            })
        }

        /// Called as `callback(playerScore, aiScore, scorer)` on every goal
        pub fn set_score_callback(&mut self, callback: js_sys::Function) {
            self.on_score = Some(callback);
        }

        /// Encoded `RenderMsg::Layout`
        pub fn layout(&self) -> Result<Vec<u8>, JsValue> {
            RenderMsg::Layout(self.game.layout())
                .to_bytes()
                .map_err(js_err)
        }

        /// Returns `true` when the key is bound, so JS can `preventDefault`
        pub fn key_down(&mut self, event: &KeyboardEvent) -> bool {
            self.game
                .input
                .handle_key_down(&get_code_from_event(event), event.repeat())
        }

        pub fn key_up(&mut self, event: &KeyboardEvent) -> bool {
            self.game.input.handle_key_up(&get_code_from_event(event))
        }

        /// Pointer height relative to the top of the canvas
        pub fn pointer_move(&mut self, y: f32) {
            self.game.input.handle_pointer(y);
        }

        /// One tick per call; returns the encoded frame
        pub fn tick(&mut self) -> Result<Vec<u8>, JsValue> {
            let on_score = self.on_score.clone();
            let mut sink = |event: &ScoreEvent| notify(on_score.as_ref(), event);
            self.game.tick(&mut sink);
            self.game.frame_bytes().map_err(js_err)
        }

        /// Fixed-rate ticks for `elapsed_ms` of wall time; returns the
        /// encoded frame
        pub fn advance(&mut self, elapsed_ms: f64) -> Result<Vec<u8>, JsValue> {
            let on_score = self.on_score.clone();
            let mut sink = |event: &ScoreEvent| notify(on_score.as_ref(), event);
            self.game.advance((elapsed_ms / 1000.0) as f32, &mut sink);
            self.game.frame_bytes().map_err(js_err)
        }

        /// One tick driven by an encoded `InputMsg` instead of DOM events
        pub fn step_encoded(&mut self, input: &[u8]) -> Result<Vec<u8>, JsValue> {
            let msg = InputMsg::from_bytes(input).map_err(js_err)?;
            let on_score = self.on_score.clone();
            let mut sink = |event: &ScoreEvent| notify(on_score.as_ref(), event);
            self.game.tick_with(&tick_input_from_msg(&msg), &mut sink);
            self.game.frame_bytes().map_err(js_err)
        }
    }

    fn notify(callback: Option<&js_sys::Function>, event: &ScoreEvent) {
        let Some(callback) = callback else {
            return;
        };
        let scorer = match event.scorer {
            Side::Player => "player",
            Side::Ai => "ai",
        };
        if let Err(e) = callback.call3(
            &JsValue::NULL,
            &JsValue::from(event.player_score),
            &JsValue::from(event.ai_score),
            &JsValue::from_str(scorer),
        ) {
            log::warn!("Score callback failed: {:?}", e);
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::WasmGame;
