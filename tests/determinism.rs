//! Property tests: determinism and hard spatial invariants

use cyberslayers_arcade::battle::{self, BattleState};
use cyberslayers_arcade::consts::*;
use cyberslayers_arcade::platformer::{self, Level, PlatformerState};
use proptest::prelude::*;

fn battle_input() -> impl Strategy<Value = battle::TickInput> {
    (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
        |(left, right, up, down)| battle::TickInput {
            left,
            right,
            up,
            down,
        },
    )
}

fn platform_input() -> impl Strategy<Value = platformer::TickInput> {
    (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(left, right, jump)| {
        platformer::TickInput { left, right, jump }
    })
}

fn open_level() -> Level {
    Level::parse(
        &[
            "............",
            "............",
            "............",
            "...##..#..G.",
            "##......####",
        ],
        (0, 3),
    )
    .unwrap()
}

proptest! {
    #[test]
    fn prop_player_never_leaves_arena(
        seed in any::<u64>(),
        inputs in proptest::collection::vec(battle_input(), 1..300),
    ) {
        let mut state = BattleState::new(seed);
        for input in &inputs {
            battle::tick(&mut state, input);
            let hitbox = state.player.hitbox();
            prop_assert!(hitbox.x >= ARENA.x);
            prop_assert!(hitbox.right() <= ARENA.right());
            prop_assert!(hitbox.y >= ARENA.y);
            prop_assert!(hitbox.bottom() <= ARENA.bottom());
        }
    }

    #[test]
    fn prop_fire_respects_cooldown(
        seed in any::<u64>(),
        attempts in proptest::collection::vec(any::<bool>(), 1..300),
    ) {
        let mut state = BattleState::new(seed);
        let mut accepted = Vec::new();
        for try_fire in &attempts {
            battle::tick(&mut state, &battle::TickInput::default());
            if *try_fire && state.fire() {
                accepted.push(state.time_ticks);
            }
        }
        for pair in accepted.windows(2) {
            prop_assert!(pair[1] - pair[0] >= SHOT_COOLDOWN_TICKS);
        }
    }

    #[test]
    fn prop_same_seed_same_fight(
        seed in any::<u64>(),
        inputs in proptest::collection::vec(battle_input(), 1..200),
    ) {
        let mut a = BattleState::new(seed);
        let mut b = BattleState::new(seed);
        for input in &inputs {
            battle::tick(&mut a, input);
            battle::tick(&mut b, input);
        }
        prop_assert_eq!(
            serde_json::to_string(&a.snapshot()).unwrap(),
            serde_json::to_string(&b.snapshot()).unwrap()
        );
    }

    #[test]
    fn prop_actor_stays_in_columns(
        inputs in proptest::collection::vec(platform_input(), 1..400),
    ) {
        let mut state = PlatformerState::new(open_level());
        let max_x = (state.grid.width() - 1) as f32;
        for input in &inputs {
            platformer::tick(&mut state, input);
            prop_assert!(state.body.pos.x >= 0.0);
            prop_assert!(state.body.pos.x <= max_x);
            prop_assert!(state.body.pos.y.is_finite());
        }
    }

    #[test]
    fn prop_terminal_outcome_freezes_actor(
        inputs in proptest::collection::vec(platform_input(), 1..400),
    ) {
        let mut state = PlatformerState::new(open_level());
        let mut frozen_at = None;
        for input in &inputs {
            platformer::tick(&mut state, input);
            if let Some(pos) = frozen_at {
                prop_assert_eq!(state.body.pos, pos);
            } else if state.outcome.is_terminal() {
                frozen_at = Some(state.body.pos);
            }
        }
    }
}
