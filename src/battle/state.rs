//! Battle engine state and entity types
//!
//! The whole fight is one serializable value: actors, projectiles, the
//! attack-pattern cursor, every cooldown, and the RNG. Replaying the same
//! inputs against the same seed reproduces the fight exactly.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::patterns::SubWave;
use crate::consts::*;
use crate::geom::Rect;

/// Lifecycle of a battle; `Won`/`Lost` are terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattlePhase {
    Playing,
    Won,
    Lost,
}

impl BattlePhase {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, BattlePhase::Playing)
    }
}

/// A combatant: the player inside the arena, or the boss above it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub health: i32,
    pub max_health: i32,
    /// Ticks of hit immunity remaining (0 = vulnerable)
    pub invuln_ticks: u32,
}

impl Actor {
    pub fn new(pos: Vec2, size: Vec2, max_health: i32) -> Self {
        Self {
            pos,
            size,
            health: max_health,
            max_health,
            invuln_ticks: 0,
        }
    }

    pub fn alive(&self) -> bool {
        self.health > 0
    }

    pub fn is_invulnerable(&self) -> bool {
        self.invuln_ticks > 0
    }

    /// Health as 0-100, for the boss health bar
    pub fn health_percent(&self) -> f32 {
        100.0 * self.health.max(0) as f32 / self.max_health as f32
    }

    pub fn hitbox(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size.x, self.size.y)
    }
}

/// A projectile in flight; ownership is which list it lives in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub spawn_tick: u64,
    /// Auto-expire this many ticks after spawn (None = bounds-culled only)
    pub lifetime_ticks: Option<u32>,
}

impl Projectile {
    pub fn expired(&self, now: u64) -> bool {
        match self.lifetime_ticks {
            Some(life) => now.saturating_sub(self.spawn_tick) > u64::from(life),
            None => false,
        }
    }
}

/// A sub-wave scheduled for a future tick
///
/// Tagged with the epoch it was scheduled under; waves from a previous
/// epoch are dropped unspawned, so a reset can never be hit by leftovers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendingWave {
    pub due_tick: u64,
    pub epoch: u32,
    pub wave: SubWave,
}

/// Complete battle state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BattleState {
    /// Seed for reproducibility; `reset` restores the RNG from it
    pub seed: u64,
    pub rng: Pcg32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub phase: BattlePhase,
    pub player: Actor,
    pub boss: Actor,
    pub player_shots: Vec<Projectile>,
    pub boss_shots: Vec<Projectile>,
    /// Tick of the last player shot (None = never fired)
    pub last_shot: Option<u64>,
    /// Tick of the last attack dispatch (None = never attacked)
    pub last_attack: Option<u64>,
    /// Position in the attack script (prelude, then cycle)
    pub pattern_cursor: u32,
    /// Scheduled future sub-waves
    pub pending: Vec<PendingWave>,
    /// Generation counter, bumped on reset
    pub epoch: u32,
    next_id: u32,
}

impl BattleState {
    pub fn new(seed: u64) -> Self {
        let player_size = Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT);
        let player_pos = Vec2::new(
            ARENA.x + ARENA.w / 2.0 - PLAYER_WIDTH / 2.0,
            ARENA.y + ARENA.h / 2.0,
        );
        let boss_pos = Vec2::new(BOSS_HITBOX.x, BOSS_HITBOX.y);
        let boss_size = Vec2::new(BOSS_HITBOX.w, BOSS_HITBOX.h);

        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            time_ticks: 0,
            phase: BattlePhase::Playing,
            player: Actor::new(player_pos, player_size, PLAYER_MAX_HEALTH),
            boss: Actor::new(boss_pos, boss_size, BOSS_MAX_HEALTH),
            player_shots: Vec::new(),
            boss_shots: Vec::new(),
            last_shot: None,
            last_attack: None,
            pattern_cursor: 0,
            pending: Vec::new(),
            epoch: 0,
            next_id: 1,
        }
    }

    /// Restore every entity and counter to initial values
    ///
    /// The epoch advances so any sub-wave scheduled before the reset is
    /// invalidated even if a stale copy of it survives somewhere.
    pub fn reset(&mut self) {
        let epoch = self.epoch.wrapping_add(1);
        *self = BattleState::new(self.seed);
        self.epoch = epoch;
        log::info!("battle reset (epoch {epoch})");
    }

    /// Allocate a new projectile ID
    pub fn next_projectile_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Fire one player shot, rate-limited to one per cooldown window
    ///
    /// Called on the fire-key edge, outside the per-tick update. Returns
    /// whether a shot actually spawned.
    pub fn fire(&mut self) -> bool {
        if self.phase.is_terminal() {
            return false;
        }
        if let Some(last) = self.last_shot
            && self.time_ticks.saturating_sub(last) < SHOT_COOLDOWN_TICKS
        {
            return false;
        }
        self.last_shot = Some(self.time_ticks);

        // Muzzle at top-center of the player sprite
        let pos = Vec2::new(
            self.player.pos.x + PLAYER_WIDTH / 2.0 - 2.0,
            self.player.pos.y,
        );
        let id = self.next_projectile_id();
        self.player_shots.push(Projectile {
            id,
            pos,
            vel: Vec2::new(0.0, -PLAYER_SHOT_SPEED),
            spawn_tick: self.time_ticks,
            lifetime_ticks: None,
        });
        true
    }

    /// Queue a boss shot spawning immediately
    pub fn push_boss_shot(&mut self, pos: Vec2, vel: Vec2) {
        let id = self.next_projectile_id();
        self.boss_shots.push(Projectile {
            id,
            pos,
            vel,
            spawn_tick: self.time_ticks,
            lifetime_ticks: None,
        });
    }

    /// Schedule a sub-wave to spawn `delay_ticks` from now
    pub fn schedule_wave(&mut self, delay_ticks: u64, wave: SubWave) {
        self.pending.push(PendingWave {
            due_tick: self.time_ticks + delay_ticks,
            epoch: self.epoch,
            wave,
        });
    }

    /// Immutable per-tick view for the render layer
    pub fn snapshot(&self) -> BattleSnapshot<'_> {
        BattleSnapshot {
            phase: self.phase,
            tick: self.time_ticks,
            player_pos: self.player.pos,
            player_health: self.player.health,
            player_invulnerable: self.player.is_invulnerable(),
            boss_health_percent: self.boss.health_percent(),
            player_shots: &self.player_shots,
            boss_shots: &self.boss_shots,
        }
    }
}

/// Render-layer view of one battle tick
#[derive(Debug, Clone, Serialize)]
pub struct BattleSnapshot<'a> {
    pub phase: BattlePhase,
    pub tick: u64,
    pub player_pos: Vec2,
    pub player_health: i32,
    pub player_invulnerable: bool,
    pub boss_health_percent: f32,
    pub player_shots: &'a [Projectile],
    pub boss_shots: &'a [Projectile],
}
