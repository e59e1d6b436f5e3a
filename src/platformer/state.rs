//! Platformer state
//!
//! One actor, one working grid, one outcome flag. Positions are in
//! grid-cell units with y growing downward; resting on top of tile row
//! `r` puts the actor's center at `r - 0.5`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::level::{Grid, Level, Tile};

/// Lifecycle of a run; `Win`/`Dead` are terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Playing,
    Win,
    Dead,
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Playing)
    }
}

/// The actor's kinematic state
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerBody {
    /// Center position in cell units
    pub pos: Vec2,
    /// Velocity in cells per tick
    pub vel: Vec2,
    /// Standing on a floor tile as of the last resolved tick
    pub grounded: bool,
}

/// Complete platformer state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformerState {
    level: Level,
    pub grid: Grid,
    pub body: PlayerBody,
    pub outcome: Outcome,
    pub time_ticks: u64,
}

impl PlatformerState {
    pub fn new(level: Level) -> Self {
        let grid = level.make_grid();
        let body = spawn_body(&level);
        Self {
            level,
            grid,
            body,
            outcome: Outcome::Playing,
            time_ticks: 0,
        }
    }

    /// Restore the original tile layout (un-collapsing fragile floors)
    /// and put the actor back at spawn with zero velocity
    pub fn reset(&mut self) {
        self.grid = self.level.make_grid();
        self.body = spawn_body(&self.level);
        self.outcome = Outcome::Playing;
        self.time_ticks = 0;
        log::info!("platformer reset");
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    /// Immutable per-tick view for the render layer
    pub fn snapshot(&self) -> PlatformSnapshot<'_> {
        PlatformSnapshot {
            outcome: self.outcome,
            tick: self.time_ticks,
            pos: self.body.pos,
            vel: self.body.vel,
            grounded: self.body.grounded,
            grid_width: self.grid.width(),
            grid_height: self.grid.height(),
            tiles: self.grid.tiles(),
        }
    }
}

fn spawn_body(level: &Level) -> PlayerBody {
    let (col, row) = level.spawn();
    PlayerBody {
        pos: Vec2::new(col as f32, row as f32),
        vel: Vec2::ZERO,
        grounded: false,
    }
}

/// Render-layer view of one platformer tick
#[derive(Debug, Clone, Serialize)]
pub struct PlatformSnapshot<'a> {
    pub outcome: Outcome,
    pub tick: u64,
    pub pos: Vec2,
    pub vel: Vec2,
    pub grounded: bool,
    pub grid_width: usize,
    pub grid_height: usize,
    pub tiles: &'a [Tile],
}
