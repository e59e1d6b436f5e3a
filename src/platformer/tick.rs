//! Platformer fixed-timestep tick (25 ms)
//!
//! Euler integration against the tile grid: velocity from held keys and
//! gravity, then floor/ceiling resolution at the actor's lower and upper
//! edges, then the terminal checks. The whole tick is one atomic
//! transition; nothing is committed on a terminal outcome except the
//! goal-landing snap.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::level::Tile;
use super::state::{Outcome, PlatformerState};
use crate::consts::*;
use crate::input::KeyState;

/// Held keys for a single platformer tick
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

impl TickInput {
    /// Sample the keys the platformer cares about
    pub fn from_keys(keys: &KeyState) -> Self {
        Self {
            left: keys.left,
            right: keys.right,
            jump: keys.jump,
        }
    }
}

/// Advance the platformer by one tick
pub fn tick(state: &mut PlatformerState, input: &TickInput) {
    if state.outcome.is_terminal() {
        return;
    }
    state.time_ticks += 1;

    let mut vel = state.body.vel;

    // Horizontal velocity is set outright each tick; opposed keys cancel
    vel.x = match (input.left, input.right) {
        (true, false) => -RUN_SPEED,
        (false, true) => RUN_SPEED,
        _ => 0.0,
    };

    // Jump while grounded. Held jump re-triggers on every grounded tick;
    // that hold-to-bounce feel is intended, not an oversight.
    if input.jump && state.body.grounded {
        vel.y = JUMP_SPEED;
    }

    vel.y += GRAVITY;

    let mut pos = state.body.pos + vel;
    pos.x = pos.x.clamp(0.0, (state.grid.width() - 1) as f32);

    let col = pos.x.round() as i32;
    let mut grounded = false;

    // Floor: sample the tile under the actor's lower edge. The landing
    // decision uses the pre-collapse tile; the collapse itself happens
    // after the snap is computed.
    let foot_row = (pos.y + 0.5).floor() as i32;
    let foot_tile = state.grid.tile(col, foot_row);
    if vel.y >= 0.0 && foot_tile.is_floor() {
        pos.y = foot_row as f32 - 0.5;
        vel.y = 0.0;
        grounded = true;
        state.grid.collapse(col, foot_row);
    } else if vel.y < 0.0 {
        // Ceiling: snap just below the blocking tile and push down a
        // little so the actor doesn't stick to it
        let head_row = (pos.y - 0.5).floor() as i32;
        if state.grid.tile(col, head_row).blocks_head() {
            pos.y = head_row as f32 + 1.5;
            vel.y = CEILING_BOUNCE;
        }
    }

    // Hazard at the resolved lower edge kills before anything commits
    let resolved_foot = (pos.y + 0.5).floor() as i32;
    if state.grid.tile(col, resolved_foot) == Tile::Hazard {
        state.outcome = Outcome::Dead;
        log::info!("actor died on a hazard at tick {}", state.time_ticks);
        return;
    }

    // Landing on the goal wins; the snapped resting position is kept so
    // the actor is shown standing on it
    if grounded && foot_tile == Tile::Goal {
        state.body.pos = pos;
        state.body.vel = Vec2::ZERO;
        state.body.grounded = true;
        state.outcome = Outcome::Win;
        log::info!("goal reached at tick {}", state.time_ticks);
        return;
    }

    // Fell out of the level
    if pos.y > state.grid.height() as f32 {
        state.outcome = Outcome::Dead;
        log::info!("actor fell out at tick {}", state.time_ticks);
        return;
    }

    state.body.pos = pos;
    state.body.vel = vel;
    state.body.grounded = grounded;
}
