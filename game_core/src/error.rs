use thiserror::Error;

/// Reasons a [`Config`](crate::Config) is rejected before a game starts
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("`{field}` must be a positive, finite number")]
    NonPositive { field: &'static str },

    #[error("`{field}` is out of range")]
    OutOfRange { field: &'static str },

    #[error("ball_speed ({ball_speed}) exceeds max_ball_speed ({max_ball_speed})")]
    BallSpeedAboveMax { ball_speed: f32, max_ball_speed: f32 },

    #[error("paddle_height ({paddle_height}) does not fit a field of height {field_height}")]
    PaddleTooTall {
        paddle_height: f32,
        field_height: f32,
    },

    #[error("field width {field_width} leaves no room between the paddles")]
    FieldTooNarrow { field_width: f32 },

    #[error("invalid config document: {0}")]
    Parse(#[from] toml::de::Error),
}
