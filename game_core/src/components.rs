use std::collections::VecDeque;

use glam::Vec2;

/// Which end of the field a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Left paddle, driven by the human player
    Player,
    /// Right paddle, driven by the AI controller
    Ai,
}

impl Side {
    /// Horizontal sign pointing away from this side's paddle (into the field)
    pub fn away(self) -> f32 {
        match self {
            Side::Player => 1.0,
            Side::Ai => -1.0,
        }
    }

    pub fn opponent(self) -> Self {
        match self {
            Side::Player => Side::Ai,
            Side::Ai => Side::Player,
        }
    }

    pub fn color(self) -> Color {
        match self {
            Side::Player => Color::Blue,
            Side::Ai => Color::Pink,
        }
    }
}

/// Cosmetic colour token; the renderer owns the actual palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    Blue,
    Pink,
    #[default]
    Green,
    Purple,
    Orange,
}

impl Color {
    /// Next ball colour after a paddle hit (Green -> Purple -> Orange -> Green)
    pub fn next_ball_color(self) -> Self {
        match self {
            Color::Green => Color::Purple,
            Color::Purple => Color::Orange,
            _ => Color::Green,
        }
    }
}

/// Paddle - represents one side's paddle and its score
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub y: f32, // Top edge (clamped to field)
    pub score: u32,
}

impl Paddle {
    pub fn new(side: Side, y: f32) -> Self {
        Self { side, y, score: 0 }
    }
}

/// Bounded history of recent ball centres, oldest first
#[derive(Debug, Clone, Default)]
pub struct Trail {
    points: VecDeque<Vec2>,
    capacity: usize,
}

impl Trail {
    pub fn new(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a point, evicting the oldest once over capacity
    pub fn push(&mut self, point: Vec2) {
        if self.capacity == 0 {
            return;
        }
        while self.points.len() >= self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(point);
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vec2> {
        self.points.iter()
    }
}

/// Ball - the pong ball
#[derive(Debug, Clone)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub color: Color,
    pub trail: Trail,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, trail_capacity: usize) -> Self {
        Self {
            pos,
            vel,
            color: Color::default(),
            trail: Trail::new(trail_capacity),
        }
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }
}

/// Player paddle control for one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlIntent {
    /// Held keys; both held cancels out
    Directional { up: bool, down: bool },
    /// Desired paddle centre, e.g. from mouse or touch
    Pointer { target_y: f32 },
}
