//! Battle engine fixed-timestep tick
//!
//! One call advances the whole fight by one display frame: player
//! movement, both projectile populations, collision, scheduled sub-waves,
//! the attack dispatcher, and terminal evaluation — in that order, as a
//! single atomic transition over the state.

use serde::{Deserialize, Serialize};

use super::patterns::{self, AttackPattern};
use super::state::{BattlePhase, BattleState};
use crate::consts::*;
use crate::input::KeyState;

/// Held directional keys for a single battle tick
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl TickInput {
    /// Sample the keys the battle engine cares about
    pub fn from_keys(keys: &KeyState) -> Self {
        Self {
            left: keys.left,
            right: keys.right,
            up: keys.up,
            down: keys.down,
        }
    }
}

/// Advance the battle by one tick
///
/// No-op once the phase is terminal; the driver is expected to stop
/// calling, but a stray call must not mutate anything.
pub fn tick(state: &mut BattleState, input: &TickInput) {
    if state.phase.is_terminal() {
        return;
    }

    state.time_ticks += 1;

    if state.player.invuln_ticks > 0 {
        state.player.invuln_ticks -= 1;
    }

    move_player(state, input);
    advance_player_shots(state);
    advance_boss_shots(state);
    resolve_player_hit(state);
    dispatch_attack(state);
    spawn_due_waves(state);

    // Terminal evaluation last; boss defeat wins even on a mutual-kill tick
    if !state.boss.alive() {
        state.phase = BattlePhase::Won;
        log::info!("boss defeated on tick {}", state.time_ticks);
    } else if !state.player.alive() {
        state.phase = BattlePhase::Lost;
        log::info!("player defeated on tick {}", state.time_ticks);
    }
}

/// Step 1: player movement from held keys, clamped to the arena
fn move_player(state: &mut BattleState, input: &TickInput) {
    let player = &mut state.player;
    if input.left {
        player.pos.x -= PLAYER_SPEED;
    }
    if input.right {
        player.pos.x += PLAYER_SPEED;
    }
    if input.up {
        player.pos.y -= PLAYER_SPEED;
    }
    if input.down {
        player.pos.y += PLAYER_SPEED;
    }
    player.pos = ARENA.clamp_box(player.pos, player.size);
}

/// Step 2: player shots fly upward; any inside the boss hit region land
/// simultaneously and their damage sums
fn advance_player_shots(state: &mut BattleState) {
    for shot in &mut state.player_shots {
        shot.pos += shot.vel;
    }

    let mut hits = 0;
    state.player_shots.retain(|shot| {
        if shot.pos.y <= 0.0 {
            return false;
        }
        if BOSS_HITBOX.contains(shot.pos) {
            hits += 1;
            return false;
        }
        true
    });

    if hits > 0 {
        state.boss.health = (state.boss.health - hits * BOSS_HIT_DAMAGE).max(0);
        log::debug!(
            "{hits} shot(s) connected, boss at {:.0}%",
            state.boss.health_percent()
        );
    }
}

/// Step 3: boss shots advance by their velocity; expired or escaped
/// shots are culled against the padded arena boundary
fn advance_boss_shots(state: &mut BattleState) {
    let now = state.time_ticks;
    let bounds = ARENA.expanded(ARENA_CULL_MARGIN);
    state.boss_shots.retain_mut(|shot| {
        if shot.expired(now) {
            return false;
        }
        shot.pos += shot.vel;
        bounds.contains(shot.pos)
    });
}

/// Step 4: first boss shot overlapping the player lands; the hit opens a
/// timed invulnerability window during which further overlaps are ignored
fn resolve_player_hit(state: &mut BattleState) {
    if state.player.is_invulnerable() {
        return;
    }
    let hurtbox = state.player.hitbox().expanded(SHOT_SIZE);
    let Some(idx) = state
        .boss_shots
        .iter()
        .position(|shot| hurtbox.contains(shot.pos))
    else {
        return;
    };
    state.boss_shots.remove(idx);
    state.player.health = (state.player.health - 1).max(0);
    state.player.invuln_ticks = INVULN_TICKS;
    log::debug!(
        "player hit on tick {}, {} health left",
        state.time_ticks,
        state.player.health
    );
}

/// Step 5: the attack dispatcher; a no-op until the cooldown since the
/// last dispatch has elapsed
fn dispatch_attack(state: &mut BattleState) {
    if let Some(last) = state.last_attack
        && state.time_ticks.saturating_sub(last) < ATTACK_COOLDOWN_TICKS
    {
        return;
    }
    state.last_attack = Some(state.time_ticks);

    let pattern = AttackPattern::for_cursor(state.pattern_cursor);
    state.pattern_cursor += 1;
    log::info!(
        "dispatching {:?} (cursor {}) on tick {}",
        pattern,
        state.pattern_cursor - 1,
        state.time_ticks
    );
    patterns::launch(state, pattern);
}

/// Step 6: spawn sub-waves that have come due; waves scheduled under an
/// older epoch (before a reset) are dropped
fn spawn_due_waves(state: &mut BattleState) {
    let now = state.time_ticks;
    let epoch = state.epoch;
    let mut due = Vec::new();
    state.pending.retain(|wave| {
        if wave.epoch != epoch {
            return false;
        }
        if wave.due_tick <= now {
            due.push(wave.wave);
            return false;
        }
        true
    });
    for wave in due {
        patterns::spawn_sub_wave(state, wave);
    }
}
