//! Bullet-pattern boss battle engine
//!
//! A deterministic fixed-timestep (60 Hz) simulation of the final boss
//! fight: the player dodges scripted projectile patterns inside a
//! bounded arena while returning fire at the boss hit region above it.
//! All behavior lives in pure state transitions; rendering and input
//! devices stay outside the crate.

pub mod patterns;
pub mod state;
pub mod tick;

pub use patterns::{AttackPattern, SubWave};
pub use state::{Actor, BattlePhase, BattleSnapshot, BattleState, PendingWave, Projectile};
pub use tick::{TickInput, tick};
