//! Wire format between the Pong core and its browser front end
//!
//! Uses postcard for compact binary serialization. The JS side sends
//! [`InputMsg`] once per animation frame and receives [`RenderMsg`] back.

use postcard::{from_bytes, to_allocvec};
use serde::{Deserialize, Serialize};

// ============================================================================
// Input (front end -> core)
// ============================================================================

/// Paddle control collected since the previous frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Intent {
    /// No movement this frame
    Idle,
    /// Held keys
    Keys { up: bool, down: bool },
    /// Pointer height in field coordinates
    Pointer { y: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputMsg {
    pub intent: Intent,
    /// Edge event, true on exactly one frame per press
    pub pause_toggled: bool,
}

// ============================================================================
// Render (core -> front end)
// ============================================================================

/// Colour token; the front end maps these to its neon palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tint {
    Blue,
    Pink,
    Green,
    Purple,
    Orange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scorer {
    Player,
    Ai,
}

/// Static geometry, sent once and again whenever the config changes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub field_width: f32,
    pub field_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub player_x: f32,
    pub ai_x: f32,
    pub ball_radius: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BallP {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub tint: Tint,
    /// Oldest first
    pub trail: Vec<[f32; 2]>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParticleP {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub life: f32,
    pub tint: Tint,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EffectsP {
    pub paddle_glow: u32,
    pub ball_glow: u32,
    pub screen_shake: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreP {
    pub player: u32,
    pub ai: u32,
    pub scorer: Scorer,
}

/// Everything needed to paint one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub tick: u64,
    pub paused: bool,
    pub player_y: f32,
    pub ai_y: f32,
    pub score_player: u32,
    pub score_ai: u32,
    pub ball: BallP,
    pub effects: EffectsP,
    pub particles: Vec<ParticleP>,
    /// Set on the frame where the score changed
    pub scored: Option<ScoreP>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RenderMsg {
    Layout(Layout),
    Frame(Frame),
}

// ============================================================================
// Serialization Helpers
// ============================================================================

impl InputMsg {
    /// Serialize input message to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, postcard::Error> {
        to_allocvec(self)
    }

    /// Deserialize input message from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, postcard::Error> {
        from_bytes(bytes)
    }
}

impl RenderMsg {
    /// Serialize render message to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, postcard::Error> {
        to_allocvec(self)
    }

    /// Deserialize render message from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, postcard::Error> {
        from_bytes(bytes)
    }
}
