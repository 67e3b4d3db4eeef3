use glam::Vec2;
use serde::Deserialize;

use crate::{ConfigError, Params, Side};

/// Game configuration
///
/// Every field has a default taken from [`Params`], so a TOML document only
/// needs to name the values it overrides.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub field_width: f32,
    pub field_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_inset: f32,
    pub paddle_speed: f32,
    pub pointer_smoothing: f32,
    pub ball_radius: f32,
    pub ball_speed: f32,
    pub max_ball_speed: f32,
    pub ball_speed_increase: f32,
    pub max_bounce_angle: f32,
    pub serve_angle: f32,
    pub trail_capacity: usize,
    pub ai_speed: f32,
    pub ai_reaction_delay: u32,
    pub ai_error_range: f32,
    pub ai_dead_zone: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_inset: Params::PADDLE_INSET,
            paddle_speed: Params::PADDLE_SPEED,
            pointer_smoothing: Params::POINTER_SMOOTHING,
            ball_radius: Params::BALL_RADIUS,
            ball_speed: Params::BALL_SPEED,
            max_ball_speed: Params::BALL_SPEED_MAX,
            ball_speed_increase: Params::BALL_SPEED_INCREASE,
            max_bounce_angle: Params::MAX_BOUNCE_ANGLE,
            serve_angle: Params::SERVE_ANGLE,
            trail_capacity: Params::TRAIL_CAPACITY,
            ai_speed: Params::AI_SPEED,
            ai_reaction_delay: Params::AI_REACTION_DELAY,
            ai_error_range: Params::AI_ERROR_RANGE,
            ai_dead_zone: Params::AI_DEAD_ZONE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a TOML document and validate the result
    pub fn from_toml_str(doc: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(doc)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants the simulation relies on.
    ///
    /// A config that passes keeps every speed strictly positive, so the
    /// rebound math never sees a zero-length velocity.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("ball_radius", self.ball_radius),
            ("ball_speed", self.ball_speed),
            ("max_ball_speed", self.max_ball_speed),
            ("ai_speed", self.ai_speed),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NonPositive { field });
            }
        }

        let non_negative = [
            ("paddle_inset", self.paddle_inset),
            ("ai_error_range", self.ai_error_range),
            ("ai_dead_zone", self.ai_dead_zone),
        ];
        for (field, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::OutOfRange { field });
            }
        }

        if !(self.pointer_smoothing > 0.0 && self.pointer_smoothing <= 1.0) {
            return Err(ConfigError::OutOfRange {
                field: "pointer_smoothing",
            });
        }
        if !(self.ball_speed_increase.is_finite() && self.ball_speed_increase >= 1.0) {
            return Err(ConfigError::OutOfRange {
                field: "ball_speed_increase",
            });
        }
        if !(self.max_bounce_angle > 0.0 && self.max_bounce_angle < std::f32::consts::FRAC_PI_2) {
            return Err(ConfigError::OutOfRange {
                field: "max_bounce_angle",
            });
        }
        if !(self.serve_angle >= 0.0 && self.serve_angle < std::f32::consts::FRAC_PI_2) {
            return Err(ConfigError::OutOfRange {
                field: "serve_angle",
            });
        }
        if self.ball_speed > self.max_ball_speed {
            return Err(ConfigError::BallSpeedAboveMax {
                ball_speed: self.ball_speed,
                max_ball_speed: self.max_ball_speed,
            });
        }
        if self.paddle_height >= self.field_height || 2.0 * self.ball_radius >= self.field_height
        {
            return Err(ConfigError::PaddleTooTall {
                paddle_height: self.paddle_height,
                field_height: self.field_height,
            });
        }
        let occupied = 2.0 * (self.paddle_inset + self.paddle_width + 2.0 * self.ball_radius);
        if occupied >= self.field_width {
            return Err(ConfigError::FieldTooNarrow {
                field_width: self.field_width,
            });
        }
        Ok(())
    }

    /// Left edge of the paddle on the given side
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Player => self.paddle_inset,
            Side::Ai => self.field_width - self.paddle_inset - self.paddle_width,
        }
    }

    /// Largest legal paddle top-edge offset
    pub fn max_paddle_y(&self) -> f32 {
        self.field_height - self.paddle_height
    }

    /// Clamp paddle top edge to field bounds
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.max_paddle_y())
    }

    /// Paddle top edge that centres it vertically
    pub fn centered_paddle_y(&self) -> f32 {
        self.max_paddle_y() / 2.0
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.field_width / 2.0, self.field_height / 2.0)
    }
}
