/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 16.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_INSET: f32 = 30.0; // Gap between side wall and paddle
    pub const PADDLE_SPEED: f32 = 8.0; // units per tick
    pub const POINTER_SMOOTHING: f32 = 0.1; // Fraction of pointer distance covered per tick

    // Ball
    pub const BALL_RADIUS: f32 = 12.0;
    pub const BALL_SPEED: f32 = 5.5;
    pub const BALL_SPEED_MAX: f32 = 9.0;
    pub const BALL_SPEED_INCREASE: f32 = 1.05; // Multiply speed on paddle hit
    pub const MAX_BOUNCE_ANGLE: f32 = std::f32::consts::FRAC_PI_4;
    pub const SERVE_ANGLE: f32 = std::f32::consts::FRAC_PI_6; // Serve within ±30°
    pub const TRAIL_CAPACITY: usize = 8;

    // AI
    pub const AI_SPEED: f32 = 3.0;
    pub const AI_REACTION_DELAY: u32 = 20; // ticks between re-targets
    pub const AI_ERROR_RANGE: f32 = 80.0;
    pub const AI_DEAD_ZONE: f32 = 5.0;

    // Effects (ticks)
    pub const PADDLE_GLOW_TICKS: u32 = 15;
    pub const BALL_GLOW_TICKS: u32 = 10;
    pub const SCREEN_SHAKE_TICKS: u32 = 5;

    // Particles
    pub const WALL_BURST: usize = 6;
    pub const PADDLE_BURST: usize = 8;
    pub const GOAL_BURST: usize = 12;
    pub const MAX_PARTICLES: usize = 256;

    // Host loop
    pub const FIXED_DT: f32 = 1.0 / 60.0; // One tick per 60 Hz frame
    pub const MAX_DT: f32 = 0.1; // Clamp to prevent large jumps
}
