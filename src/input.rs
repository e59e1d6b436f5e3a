//! Keyboard-state sampler boundary
//!
//! The host (browser shell, test harness, demo driver) owns the real
//! keyboard events and mirrors them into a [`KeyState`]: held keys are
//! level-sampled every tick, the fire button is a latched edge consumed
//! once per press. The engines never see raw key events.

use serde::{Deserialize, Serialize};

/// Logical keys the engines care about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Jump,
    Fire,
}

/// Currently-held key set plus the fire edge latch
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct KeyState {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub jump: bool,
    fire_held: bool,
    fire_edge: bool,
}

impl KeyState {
    /// Mirror a key-down/key-up event from the host
    pub fn set_held(&mut self, key: Key, held: bool) {
        match key {
            Key::Left => self.left = held,
            Key::Right => self.right = held,
            Key::Up => self.up = held,
            Key::Down => self.down = held,
            Key::Jump => self.jump = held,
            Key::Fire => {
                // Latch the rising edge; auto-repeat key-downs don't re-latch
                if held && !self.fire_held {
                    self.fire_edge = true;
                }
                self.fire_held = held;
            }
        }
    }

    pub fn is_held(&self, key: Key) -> bool {
        match key {
            Key::Left => self.left,
            Key::Right => self.right,
            Key::Up => self.up,
            Key::Down => self.down,
            Key::Jump => self.jump,
            Key::Fire => self.fire_held,
        }
    }

    /// Consume the fire edge, if one is pending
    pub fn take_fire_edge(&mut self) -> bool {
        std::mem::take(&mut self.fire_edge)
    }
}
