//! Platform abstraction layer
//!
//! Boundary types for the host:
//! - Keyboard state as reported by the windowing backend
//! - Mapping held keys to per-tick paddle input
//! - Fixed-cadence frame clock

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};
use crate::settings::KeyBindings;
use crate::sim::{SideInput, TickInput};

/// Keys the game can be bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    W,
    S,
    ArrowUp,
    ArrowDown,
}

/// Keys currently held down
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    held: HashSet<Key>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        self.held.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.held.remove(&key);
    }

    pub fn is_down(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    /// Release everything (e.g. on focus loss)
    pub fn clear(&mut self) {
        self.held.clear();
    }
}

/// Sample the bound keys for one tick
pub fn read_input(keys: &KeyState, bindings: &KeyBindings) -> TickInput {
    TickInput {
        left: SideInput {
            up: keys.is_down(bindings.left_up),
            down: keys.is_down(bindings.left_down),
        },
        right: SideInput {
            up: keys.is_down(bindings.right_up),
            down: keys.is_down(bindings.right_down),
        },
    }
}

/// Converts wall-clock frame time into a whole number of simulation ticks
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    accumulator: f32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `dt` seconds of real time and return how many ticks to run now.
    /// Long frames are capped so a stall never triggers a burst of catch-up.
    pub fn advance(&mut self, dt: f32) -> u32 {
        self.accumulator += dt.clamp(0.0, MAX_FRAME_DT);

        let mut ticks = 0;
        while self.accumulator >= SIM_DT && ticks < MAX_SUBSTEPS {
            self.accumulator -= SIM_DT;
            ticks += 1;
        }
        if ticks == MAX_SUBSTEPS {
            // Drop the backlog rather than carry it into the next frame
            self.accumulator = self.accumulator.min(SIM_DT);
        }
        ticks
    }
}
