//! Boss attack patterns
//!
//! Each pattern is a named projectile-spawn script. Three spawn their
//! shots synchronously on dispatch; `Vwave` and `Tidal` stagger rows of
//! shots over the following two seconds via the pending-wave queue.
//!
//! The dispatch order is scripted: the fight opens Tidal, Vwave, Tidal,
//! then cycles uniformly through all five patterns.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::BattleState;
use crate::consts::*;

/// The five attack scripts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttackPattern {
    /// A row of shots falling from the arena top
    Horizontal,
    /// A column of shots sweeping in from the left edge
    Vertical,
    /// Three horizontal streams at staggered heights, alternating direction
    Hwave,
    /// Three rising rows, each with one safe gap column
    Vwave,
    /// Three dense waves in a 1-2-3-2-1 column profile, alternating ends
    Tidal,
}

impl AttackPattern {
    /// Cycle order after the scripted prelude
    pub const ALL: [AttackPattern; 5] = [
        AttackPattern::Horizontal,
        AttackPattern::Vertical,
        AttackPattern::Hwave,
        AttackPattern::Vwave,
        AttackPattern::Tidal,
    ];

    /// Pattern for a given cursor value: fixed three-step prelude
    /// (Tidal, Vwave, Tidal), then a uniform cycle
    pub fn for_cursor(cursor: u32) -> AttackPattern {
        match cursor {
            0 | 2 => AttackPattern::Tidal,
            1 => AttackPattern::Vwave,
            n => Self::ALL[((n - 3) % 5) as usize],
        }
    }
}

/// One delayed row/wave of a staggered pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubWave {
    /// Rising Vwave row; the gap column is drawn when the row spawns
    VwaveRow,
    /// Tidal wave rising from below the arena
    TidalRising,
    /// Tidal wave crashing down from above the arena
    TidalCrashing,
}

/// Vwave sub-wave offsets in ticks (0/600/1200 ms)
const VWAVE_DELAYS: [u64; 3] = [0, 36, 72];
/// Tidal sub-wave offsets in ticks (400/1200/2000 ms)
const TIDAL_DELAYS: [u64; 3] = [24, 72, 120];
/// Shots per column for a tidal wave, left to right
const TIDAL_PROFILE: [u32; 5] = [1, 2, 3, 2, 1];

/// Spawn or schedule one pattern's projectiles
pub fn launch(state: &mut BattleState, pattern: AttackPattern) {
    match pattern {
        AttackPattern::Horizontal => spawn_horizontal(state),
        AttackPattern::Vertical => spawn_vertical(state),
        AttackPattern::Hwave => spawn_hwave(state),
        AttackPattern::Vwave => {
            for delay in VWAVE_DELAYS {
                state.schedule_wave(delay, SubWave::VwaveRow);
            }
        }
        AttackPattern::Tidal => {
            state.schedule_wave(TIDAL_DELAYS[0], SubWave::TidalRising);
            state.schedule_wave(TIDAL_DELAYS[1], SubWave::TidalCrashing);
            state.schedule_wave(TIDAL_DELAYS[2], SubWave::TidalRising);
        }
    }
}

/// Spawn a due sub-wave
pub fn spawn_sub_wave(state: &mut BattleState, wave: SubWave) {
    match wave {
        SubWave::VwaveRow => spawn_vwave_row(state),
        SubWave::TidalRising => spawn_tidal_wave(state, true),
        SubWave::TidalCrashing => spawn_tidal_wave(state, false),
    }
}

fn spawn_horizontal(state: &mut BattleState) {
    let spacing = ARENA.w / 5.0;
    for i in 0..4 {
        let pos = Vec2::new(ARENA.x + spacing * (i + 1) as f32, ARENA.y);
        state.push_boss_shot(pos, Vec2::new(0.0, BOSS_SHOT_SPEED));
    }
}

fn spawn_vertical(state: &mut BattleState) {
    let spacing = ARENA.h / 4.0;
    for i in 0..3 {
        let pos = Vec2::new(ARENA.x, ARENA.y + spacing * (i as f32 + 0.5));
        state.push_boss_shot(pos, Vec2::new(BOSS_SHOT_SPEED, 0.0));
    }
}

fn spawn_hwave(state: &mut BattleState) {
    for (row, frac) in [0.25_f32, 0.5, 0.75].into_iter().enumerate() {
        let y = ARENA.y + ARENA.h * frac;
        // Even rows sweep right, odd rows sweep left
        let vx = if row % 2 == 0 {
            BOSS_SHOT_SPEED * 0.7
        } else {
            -BOSS_SHOT_SPEED * 0.7
        };
        for j in 0..6 {
            let pos = Vec2::new(ARENA.x + j as f32 * ARENA.w / 5.0, y);
            state.push_boss_shot(pos, Vec2::new(vx, 0.0));
        }
    }
}

fn spawn_vwave_row(state: &mut BattleState) {
    // One safe column per row. The original never gaps the last column;
    // kept as-is so veteran players' dodge routes still work.
    let gap = state.rng.random_range(0..4u32);
    let y = ARENA.bottom();
    for col in 0..5u32 {
        if col == gap {
            continue;
        }
        let x = ARENA.x + col as f32 * ARENA.w / 5.0 + ARENA.w / 10.0;
        state.push_boss_shot(Vec2::new(x, y), Vec2::new(0.0, -BOSS_SHOT_SPEED * 1.2));
    }
}

fn spawn_tidal_wave(state: &mut BattleState, rising: bool) {
    for (col, &count) in TIDAL_PROFILE.iter().enumerate() {
        let x = ARENA.x + col as f32 * ARENA.w / 5.0 + ARENA.w / 10.0;
        for i in 0..count {
            let offset = 20.0 + i as f32 * 15.0;
            let (y, vy) = if rising {
                (ARENA.bottom() + offset, -BOSS_SHOT_SPEED * 1.3)
            } else {
                (ARENA.y - offset, BOSS_SHOT_SPEED * 1.3)
            };
            state.push_boss_shot(Vec2::new(x, y), Vec2::new(0.0, vy));
        }
    }
}
