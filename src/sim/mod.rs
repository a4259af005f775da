//! Simulation module
//!
//! All gameplay logic lives here:
//! - One tick per frame, constant displacement per tick
//! - Randomness only through an injected `DirectionSampler`
//! - No rendering, timing or platform dependencies

pub mod collision;
pub mod rect;
pub mod sampler;
pub mod state;
pub mod tick;

pub use collision::circle_rect_overlap;
pub use rect::Rect;
pub use sampler::{DirectionSampler, FixedSampler, RandomSampler};
pub use state::{Ball, GameState, Paddle, Scoreboard, Side, field_center};
pub use tick::{SideInput, TickInput, advance_ball, reset_ball, tick, try_move};
