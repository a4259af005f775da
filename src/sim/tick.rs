//! Per-frame simulation tick
//!
//! One call to [`tick`] moves both paddles according to the held keys, then
//! advances the ball and applies wall bounce, paddle bounce and scoring.
//! There is no delta time: every tick moves things by a fixed amount.

use super::collision::circle_rect_overlap;
use super::sampler::DirectionSampler;
use super::state::{Ball, GameState, Paddle, Side};
use crate::consts::*;

/// Held keys for one side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SideInput {
    pub up: bool,
    pub down: bool,
}

impl SideInput {
    /// Candidate top-edge y for `paddle`, if either key is held.
    /// Up wins when both are held.
    pub fn intent(&self, paddle: &Paddle) -> Option<f32> {
        if self.up {
            Some(paddle.position.y - paddle.speed)
        } else if self.down {
            Some(paddle.position.y + paddle.speed)
        } else {
            None
        }
    }
}

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: SideInput,
    pub right: SideInput,
}

impl TickInput {
    pub fn side(&self, side: Side) -> SideInput {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// Move the paddle's top edge to `candidate_y` if the whole paddle stays on
/// the field. Out-of-range candidates are dropped, not clamped to the edge.
pub fn try_move(paddle: &mut Paddle, candidate_y: f32) {
    if candidate_y < 0.0 || candidate_y > paddle.max_y() {
        return;
    }
    paddle.position.y = candidate_y;
}

/// Advance the ball one tick. Returns the side that scored, if any.
pub fn advance_ball(state: &mut GameState, sampler: &mut dyn DirectionSampler) -> Option<Side> {
    let ball = &mut state.ball;
    let new_pos = ball.position + ball.velocity();
    ball.position = new_pos;

    // Top/bottom walls: flip only, the ball may sit past the edge for a tick
    if new_pos.y < 0.0 || new_pos.y > FIELD_HEIGHT - ball.radius {
        ball.direction.y = -ball.direction.y;
    }

    // A hit on either paddle (or both) is a single bounce
    if hits_paddle(ball, &state.left) || hits_paddle(ball, &state.right) {
        ball.direction.x = -ball.direction.x;
        ball.speed += PADDLE_SPEEDUP;
    }

    // Exit test uses the integrated position, regardless of any bounce above
    let conceded = if new_pos.x < 0.0 {
        Some(Side::Left)
    } else if new_pos.x > FIELD_WIDTH {
        Some(Side::Right)
    } else {
        None
    };
    let scorer = conceded.map(Side::opponent);

    if let Some(side) = scorer {
        state.score.award(side);
        reset_ball(ball, sampler);
    }

    scorer
}

/// Serve a new rally from center field
pub fn reset_ball(ball: &mut Ball, sampler: &mut dyn DirectionSampler) {
    ball.reset(sampler);
}

fn hits_paddle(ball: &Ball, paddle: &Paddle) -> bool {
    circle_rect_overlap(ball.position, ball.radius, &paddle.rect())
}

/// Advance the game state by one tick
pub fn tick(
    state: &mut GameState,
    input: &TickInput,
    sampler: &mut dyn DirectionSampler,
) -> Option<Side> {
    for side in [Side::Left, Side::Right] {
        let paddle = state.paddle_mut(side);
        if let Some(candidate) = input.side(side).intent(paddle) {
            try_move(paddle, candidate);
        }
    }

    advance_ball(state, sampler)
}
