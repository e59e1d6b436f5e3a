//! CyberSlayers arcade engines
//!
//! Core modules:
//! - `battle`: Bullet-pattern boss-fight simulation (scripted attack waves)
//! - `platformer`: Tile-grid platformer simulation (collapsing floors)
//! - `input`: Keyboard-state sampler boundary shared by both engines
//! - `geom`: Axis-aligned rectangle primitives
//!
//! Both engines are pure, deterministic state machines: fixed timestep,
//! seeded RNG, no wall-clock reads, no rendering or platform dependencies.
//! The display layer drives them once per tick and reads snapshots back.

pub mod battle;
pub mod geom;
pub mod input;
pub mod platformer;

pub use geom::Rect;
pub use input::{Key, KeyState};

/// Game tuning constants
pub mod consts {
    use crate::geom::Rect;

    // === Battle engine (display-synchronized, 60 Hz nominal) ===

    /// Battle simulation rate; the cooldown constants below assume this.
    pub const BATTLE_TICK_HZ: u32 = 60;

    /// Full playfield, for reference (the boss sprite lives above the arena)
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// The battle box the player moves within
    pub const ARENA: Rect = Rect::new(250.0, 300.0, 300.0, 250.0);
    /// Fixed region where player shots damage the boss
    pub const BOSS_HITBOX: Rect = Rect::new(300.0, 0.0, 200.0, 200.0);
    /// Boss shots are culled this far outside the arena
    pub const ARENA_CULL_MARGIN: f32 = 20.0;

    pub const PLAYER_WIDTH: f32 = 15.0;
    pub const PLAYER_HEIGHT: f32 = 30.0;
    /// Player movement per tick while a directional key is held
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const PLAYER_MAX_HEALTH: i32 = 7;
    pub const BOSS_MAX_HEALTH: i32 = 100;

    /// Upward speed of player shots (pixels per tick)
    pub const PLAYER_SHOT_SPEED: f32 = 8.0;
    /// Base speed of boss shots (pixels per tick)
    pub const BOSS_SHOT_SPEED: f32 = 2.5;
    /// Boss shots are points with this collision radius against the player
    pub const SHOT_SIZE: f32 = 6.0;

    /// Damage per player shot that reaches the boss hit region
    pub const BOSS_HIT_DAMAGE: i32 = 2;

    /// Minimum ticks between player shots (200 ms)
    pub const SHOT_COOLDOWN_TICKS: u64 = 12;
    /// Minimum ticks between boss attack dispatches (2000 ms)
    pub const ATTACK_COOLDOWN_TICKS: u64 = 120;
    /// Player invulnerability window after a hit (1000 ms)
    pub const INVULN_TICKS: u32 = 60;

    // === Platformer engine (fixed 25 ms tick, 40 Hz) ===

    pub const PLATFORM_TICK_MS: u32 = 25;

    /// Horizontal speed while a key is held (cells per tick)
    pub const RUN_SPEED: f32 = 0.18;
    /// Downward acceleration (cells per tick squared)
    pub const GRAVITY: f32 = 0.045;
    /// Jump impulse (negative is up)
    pub const JUMP_SPEED: f32 = -0.55;
    /// Small downward push after a head bump, prevents ceiling sticking
    pub const CEILING_BOUNCE: f32 = 0.05;
}
