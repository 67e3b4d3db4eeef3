//! Keyboard and pointer input handling
//!
//! Browser events arrive at any time; [`InputState::take_tick_input`] turns
//! whatever is held or pending into exactly one [`TickInput`] per tick.

use game_core::{ControlIntent, TickInput};
use proto::{InputMsg, Intent};

/// Held keys, last pointer position and any pending pause press
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
    pub pointer_y: Option<f32>,
    pause_pending: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle key down event (`code` as in `KeyboardEvent.code`).
    ///
    /// Returns `true` when the key is bound, so the caller can suppress the
    /// browser default (scrolling).
    pub fn handle_key_down(&mut self, code: &str, repeat: bool) -> bool {
        match code {
            "ArrowUp" | "KeyW" => {
                self.up = true;
                self.pointer_y = None;
            }
            "ArrowDown" | "KeyS" => {
                self.down = true;
                self.pointer_y = None;
            }
            "Space" => {
                // Auto-repeat must not flip the pause state again
                if !repeat {
                    self.pause_pending = !self.pause_pending;
                }
            }
            _ => return false,
        }
        true
    }

    /// Handle key up event
    pub fn handle_key_up(&mut self, code: &str) -> bool {
        match code {
            "ArrowUp" | "KeyW" => self.up = false,
            "ArrowDown" | "KeyS" => self.down = false,
            "Space" => {}
            _ => return false,
        }
        true
    }

    /// Pointer moved to `y` in field coordinates
    pub fn handle_pointer(&mut self, y: f32) {
        self.pointer_y = Some(y);
    }

    /// Intent for the current tick without consuming the pause press
    pub fn intent(&self) -> Option<ControlIntent> {
        if self.up || self.down {
            Some(ControlIntent::Directional {
                up: self.up,
                down: self.down,
            })
        } else {
            self.pointer_y
                .map(|target_y| ControlIntent::Pointer { target_y })
        }
    }

    /// Build this tick's input; a pending pause press is consumed
    pub fn take_tick_input(&mut self) -> TickInput {
        TickInput {
            intent: self.intent(),
            pause_toggled: std::mem::take(&mut self.pause_pending),
        }
    }
}

/// Convert a wire input message into a tick input
pub fn tick_input_from_msg(msg: &InputMsg) -> TickInput {
    let intent = match msg.intent {
        Intent::Idle => None,
        Intent::Keys { up, down } => Some(ControlIntent::Directional { up, down }),
        Intent::Pointer { y } => Some(ControlIntent::Pointer { target_y: y }),
    };
    TickInput {
        intent,
        pause_toggled: msg.pause_toggled,
    }
}

/// Extract the physical key code from keyboard event
#[cfg(target_arch = "wasm32")]
pub fn get_code_from_event(event: &web_sys::KeyboardEvent) -> String {
    event.code()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys_map_to_directional_intent() {
        let mut input = InputState::new();
        assert!(input.handle_key_down("ArrowUp", false));
        assert_eq!(
            input.take_tick_input().intent,
            Some(ControlIntent::Directional {
                up: true,
                down: false
            })
        );

        input.handle_key_up("ArrowUp");
        assert_eq!(input.take_tick_input().intent, None);
    }

    #[test]
    fn test_unbound_key_is_ignored() {
        let mut input = InputState::new();
        assert!(!input.handle_key_down("KeyQ", false));
        assert!(!input.handle_key_up("KeyQ"));
        assert_eq!(input.take_tick_input(), TickInput::default());
    }

    #[test]
    fn test_pause_is_edge_triggered() {
        let mut input = InputState::new();
        input.handle_key_down("Space", false);
        input.handle_key_down("Space", true);
        input.handle_key_down("Space", true);

        assert!(input.take_tick_input().pause_toggled);
        assert!(!input.take_tick_input().pause_toggled, "consumed once");

        input.handle_key_up("Space");
        assert!(!input.take_tick_input().pause_toggled);
    }

    #[test]
    fn test_two_presses_between_ticks_cancel() {
        let mut input = InputState::new();
        input.handle_key_down("Space", false);
        input.handle_key_up("Space");
        input.handle_key_down("Space", false);
        assert!(!input.take_tick_input().pause_toggled);
    }

    #[test]
    fn test_pointer_persists_until_key_pressed() {
        let mut input = InputState::new();
        input.handle_pointer(120.0);
        assert_eq!(
            input.take_tick_input().intent,
            Some(ControlIntent::Pointer { target_y: 120.0 })
        );
        assert_eq!(
            input.take_tick_input().intent,
            Some(ControlIntent::Pointer { target_y: 120.0 })
        );

        input.handle_key_down("KeyS", false);
        input.handle_key_up("KeyS");
        assert_eq!(input.take_tick_input().intent, None);
    }

    #[test]
    fn test_held_keys_override_pointer() {
        let mut input = InputState::new();
        input.handle_key_down("ArrowDown", false);
        input.handle_pointer(50.0);
        assert_eq!(
            input.intent(),
            Some(ControlIntent::Directional {
                up: false,
                down: true
            })
        );
    }

    #[test]
    fn test_wire_message_conversion() {
        let msg = InputMsg {
            intent: Intent::Pointer { y: 333.0 },
            pause_toggled: true,
        };
        let input = tick_input_from_msg(&msg);
        assert_eq!(
            input.intent,
            Some(ControlIntent::Pointer { target_y: 333.0 })
        );
        assert!(input.pause_toggled);

        let idle = tick_input_from_msg(&InputMsg {
            intent: Intent::Idle,
            pause_toggled: false,
        });
        assert_eq!(idle, TickInput::default());
    }
}
