//! Tile-physics platformer engine
//!
//! A deterministic fixed-timestep (40 Hz) side-view simulation: one
//! actor running and jumping across a tile grid with solid floors,
//! hazards, a goal, and fragile tiles that collapse after being stood
//! on. Positions are in cell units; the grid is the mutable working
//! copy of an immutable authored [`Level`].

pub mod level;
pub mod state;
pub mod tick;

pub use level::{Grid, Level, LevelError, Tile};
pub use state::{Outcome, PlatformSnapshot, PlatformerState, PlayerBody};
pub use tick::{TickInput, tick};
