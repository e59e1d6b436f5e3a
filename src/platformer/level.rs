//! Tile levels for the platformer
//!
//! A [`Level`] is the immutable authored layout; a [`Grid`] is the
//! working copy the simulation runs against (fragile tiles collapse in
//! the grid, never in the level). Construction validates the layout and
//! rejects authoring mistakes outright instead of clamping them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One cell of the tile grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Tile {
    #[default]
    Empty,
    Solid,
    Hazard,
    Goal,
    /// Collapses to `Empty` the first time an actor lands on it
    Fragile,
}

impl Tile {
    /// Tiles an actor can stand on
    pub fn is_floor(&self) -> bool {
        matches!(self, Tile::Solid | Tile::Goal | Tile::Fragile)
    }

    /// Tiles that stop upward movement
    pub fn blocks_head(&self) -> bool {
        matches!(self, Tile::Solid | Tile::Fragile)
    }

    pub fn from_char(ch: char) -> Option<Tile> {
        match ch {
            '.' | ' ' => Some(Tile::Empty),
            '#' => Some(Tile::Solid),
            '^' => Some(Tile::Hazard),
            'G' => Some(Tile::Goal),
            'F' => Some(Tile::Fragile),
            _ => None,
        }
    }
}

/// Level construction failures; authoring bugs stay visible
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LevelError {
    #[error("level has no rows")]
    Empty,
    #[error("row {row} is {got} tiles wide, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        got: usize,
    },
    #[error("unknown tile {ch:?} at row {row}, column {col}")]
    UnknownTile { row: usize, col: usize, ch: char },
    #[error("spawn cell ({col}, {row}) is outside the {width}x{height} grid")]
    SpawnOutOfBounds {
        col: usize,
        row: usize,
        width: usize,
        height: usize,
    },
    #[error("spawn cell ({col}, {row}) is not walkable")]
    SpawnBlocked { col: usize, row: usize },
    #[error("level has no goal tile")]
    NoGoal,
}

/// An authored level: tile layout plus the actor's spawn cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
    spawn: (usize, usize),
}

impl Level {
    /// Parse a level from glyph rows (`.` empty, `#` solid, `^` hazard,
    /// `G` goal, `F` fragile), top row first
    pub fn parse(rows: &[&str], spawn: (usize, usize)) -> Result<Level, LevelError> {
        let height = rows.len();
        if height == 0 {
            return Err(LevelError::Empty);
        }
        let width = rows[0].chars().count();
        if width == 0 {
            return Err(LevelError::Empty);
        }

        let mut tiles = Vec::with_capacity(width * height);
        for (row, line) in rows.iter().enumerate() {
            let got = line.chars().count();
            if got != width {
                return Err(LevelError::RaggedRow {
                    row,
                    expected: width,
                    got,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                let tile =
                    Tile::from_char(ch).ok_or(LevelError::UnknownTile { row, col, ch })?;
                tiles.push(tile);
            }
        }

        let (col, row) = spawn;
        if col >= width || row >= height {
            return Err(LevelError::SpawnOutOfBounds {
                col,
                row,
                width,
                height,
            });
        }
        if tiles[row * width + col] != Tile::Empty {
            return Err(LevelError::SpawnBlocked { col, row });
        }
        if !tiles.contains(&Tile::Goal) {
            return Err(LevelError::NoGoal);
        }

        log::info!("loaded {width}x{height} level, spawn at ({col}, {row})");
        Ok(Level {
            width,
            height,
            tiles,
            spawn,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Spawn cell as (column, row)
    pub fn spawn(&self) -> (usize, usize) {
        self.spawn
    }

    /// Fresh working grid with the original layout
    pub fn make_grid(&self) -> Grid {
        Grid {
            width: self.width,
            height: self.height,
            tiles: self.tiles.clone(),
        }
    }
}

/// Mutable tile grid the simulation runs against
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grid {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}

impl Grid {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Tile at (col, row); anything outside the grid reads as `Empty`
    pub fn tile(&self, col: i32, row: i32) -> Tile {
        if col < 0 || row < 0 {
            return Tile::Empty;
        }
        let (col, row) = (col as usize, row as usize);
        if col >= self.width || row >= self.height {
            return Tile::Empty;
        }
        self.tiles[row * self.width + col]
    }

    /// Collapse a fragile cell to empty; a no-op on anything else
    pub fn collapse(&mut self, col: i32, row: i32) {
        if col < 0 || row < 0 {
            return;
        }
        let (col, row) = (col as usize, row as usize);
        if col >= self.width || row >= self.height {
            return;
        }
        let idx = row * self.width + col;
        if self.tiles[idx] == Tile::Fragile {
            self.tiles[idx] = Tile::Empty;
            log::debug!("fragile tile at ({col}, {row}) collapsed");
        }
    }

    /// Row-major tile slice, for the render layer
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROWS: &[&str] = &[
        "........",
        "...G....",
        "..###...",
        "........",
        "^^^^^^^^",
    ];

    #[test]
    fn test_parse_valid_level() {
        let level = Level::parse(ROWS, (1, 3)).unwrap();
        assert_eq!(level.width(), 8);
        assert_eq!(level.height(), 5);
        let grid = level.make_grid();
        assert_eq!(grid.tile(3, 1), Tile::Goal);
        assert_eq!(grid.tile(2, 2), Tile::Solid);
        assert_eq!(grid.tile(0, 4), Tile::Hazard);
        assert_eq!(grid.tile(0, 0), Tile::Empty);
    }

    #[test]
    fn test_out_of_grid_reads_empty() {
        let grid = Level::parse(ROWS, (1, 3)).unwrap().make_grid();
        assert_eq!(grid.tile(-1, 0), Tile::Empty);
        assert_eq!(grid.tile(0, -1), Tile::Empty);
        assert_eq!(grid.tile(100, 0), Tile::Empty);
        assert_eq!(grid.tile(0, 100), Tile::Empty);
    }

    #[test]
    fn test_reject_empty() {
        assert_eq!(Level::parse(&[], (0, 0)), Err(LevelError::Empty));
    }

    #[test]
    fn test_reject_ragged_rows() {
        let err = Level::parse(&["...G", "....." ], (0, 0)).unwrap_err();
        assert_eq!(
            err,
            LevelError::RaggedRow {
                row: 1,
                expected: 4,
                got: 5
            }
        );
    }

    #[test]
    fn test_reject_unknown_glyph() {
        let err = Level::parse(&["..X.", "...G"], (0, 0)).unwrap_err();
        assert_eq!(
            err,
            LevelError::UnknownTile {
                row: 0,
                col: 2,
                ch: 'X'
            }
        );
    }

    #[test]
    fn test_reject_bad_spawn() {
        let err = Level::parse(ROWS, (99, 0)).unwrap_err();
        assert!(matches!(err, LevelError::SpawnOutOfBounds { .. }));
        let err = Level::parse(ROWS, (2, 2)).unwrap_err();
        assert_eq!(err, LevelError::SpawnBlocked { col: 2, row: 2 });
    }

    #[test]
    fn test_reject_goalless() {
        let err = Level::parse(&["....", "####"], (0, 0)).unwrap_err();
        assert_eq!(err, LevelError::NoGoal);
    }

    #[test]
    fn test_collapse_only_fragile() {
        let mut grid = Level::parse(&["F#.G"], (2, 0)).unwrap().make_grid();
        grid.collapse(0, 0);
        assert_eq!(grid.tile(0, 0), Tile::Empty);
        grid.collapse(1, 0);
        assert_eq!(grid.tile(1, 0), Tile::Solid);
        grid.collapse(3, 0);
        assert_eq!(grid.tile(3, 0), Tile::Goal);
        // Out of bounds is a no-op
        grid.collapse(-1, 5);
    }
}
