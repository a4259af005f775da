//! Game state and core simulation types
//!
//! Everything the render side reads after a tick lives here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::sampler::DirectionSampler;
use crate::consts::*;

/// Which half of the field a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "Left",
            Side::Right => "Right",
        }
    }

    pub fn opponent(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// A player's paddle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner
    pub position: Vec2,
    pub width: f32,
    pub height: f32,
    /// Vertical displacement per tick while moving
    pub speed: f32,
}

impl Paddle {
    /// Create a paddle at its starting spot for the given side, vertically centered
    pub fn new(side: Side) -> Self {
        let x = match side {
            Side::Left => PADDLE_WIDTH,
            Side::Right => FIELD_WIDTH - PADDLE_WIDTH * 2.0,
        };
        Self {
            position: Vec2::new(x, FIELD_HEIGHT / 2.0 - PADDLE_HEIGHT / 2.0),
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            speed: PADDLE_SPEED,
        }
    }

    /// Bounding box used for collision and drawing
    pub fn rect(&self) -> Rect {
        Rect::new(self.position.x, self.position.y, self.width, self.height)
    }

    /// Largest legal y for the top edge
    #[inline]
    pub fn max_y(&self) -> f32 {
        FIELD_HEIGHT - self.height
    }
}

/// The ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Center
    pub position: Vec2,
    /// Per-tick direction, scaled by `speed`. Not normalized.
    pub direction: Vec2,
    pub speed: f32,
    pub radius: f32,
}

impl Ball {
    /// Create a ball at center field heading in `direction`
    pub fn new(direction: Vec2) -> Self {
        Self {
            position: field_center(),
            direction,
            speed: BALL_START_SPEED,
            radius: BALL_RADIUS,
        }
    }

    /// Displacement applied on the next tick
    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.direction * self.speed
    }

    /// Put the ball back at center field with a fresh direction and base speed
    pub fn reset(&mut self, sampler: &mut dyn DirectionSampler) {
        self.position = field_center();
        self.direction = sampler.sample();
        self.speed = BALL_START_SPEED;
    }
}

/// Points won by each side. Only ever incremented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub left: u32,
    pub right: u32,
}

impl Scoreboard {
    pub fn award(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// Complete simulation state, owned by the host loop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub left: Paddle,
    pub right: Paddle,
    pub ball: Ball,
    pub score: Scoreboard,
}

impl GameState {
    /// Fresh match: paddles centered, ball served from center, score 0-0
    pub fn new(sampler: &mut dyn DirectionSampler) -> Self {
        Self {
            left: Paddle::new(Side::Left),
            right: Paddle::new(Side::Right),
            ball: Ball::new(sampler.sample()),
            score: Scoreboard::default(),
        }
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

/// Center of the field, where every rally starts
#[inline]
pub fn field_center() -> Vec2 {
    Vec2::new(FIELD_WIDTH / 2.0, FIELD_HEIGHT / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::sampler::FixedSampler;

    #[test]
    fn test_paddle_start_positions() {
        let left = Paddle::new(Side::Left);
        let right = Paddle::new(Side::Right);
        assert_eq!(left.position, Vec2::new(10.0, 175.0));
        assert_eq!(right.position, Vec2::new(780.0, 175.0));
        assert_eq!(left.max_y(), 350.0);
    }

    #[test]
    fn test_new_game() {
        let mut sampler = FixedSampler::new(Vec2::new(0.4, 0.6));
        let state = GameState::new(&mut sampler);
        assert_eq!(state.score, Scoreboard::default());
        assert_eq!(state.ball.position, Vec2::new(400.0, 225.0));
        assert_eq!(state.ball.direction, Vec2::new(0.4, 0.6));
        assert_eq!(state.ball.speed, BALL_START_SPEED);
        assert_eq!(state.ball.radius, BALL_RADIUS);
    }

    #[test]
    fn test_ball_reset() {
        let mut ball = Ball::new(Vec2::new(-1.0, 0.0));
        ball.position = Vec2::new(-7.0, 100.0);
        ball.speed = 12.5;

        let mut sampler = FixedSampler::new(Vec2::new(0.5, 0.3));
        ball.reset(&mut sampler);
        assert_eq!(ball.position, field_center());
        assert_eq!(ball.direction, Vec2::new(0.5, 0.3));
        assert_eq!(ball.speed, 8.0);
    }

    #[test]
    fn test_scoreboard_award() {
        let mut score = Scoreboard::default();
        score.award(Side::Right);
        score.award(Side::Right);
        score.award(Side::Left);
        assert_eq!(score.get(Side::Left), 1);
        assert_eq!(score.get(Side::Right), 2);
        assert_eq!(Side::Left.opponent(), Side::Right);
    }
}
