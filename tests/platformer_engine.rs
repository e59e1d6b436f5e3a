//! End-to-end platformer scenarios

use cyberslayers_arcade::platformer::{tick, Level, Outcome, PlatformerState, Tile, TickInput};

const RUN_RIGHT: TickInput = TickInput {
    left: false,
    right: true,
    jump: false,
};

fn run_until_terminal(state: &mut PlatformerState, input: &TickInput, max_ticks: u32) {
    for _ in 0..max_ticks {
        tick(state, input);
        if state.outcome.is_terminal() {
            return;
        }
    }
    panic!("no terminal outcome within {max_ticks} ticks");
}

#[test]
fn test_walk_the_floor_to_the_goal() {
    let level = Level::parse(
        &[
            "........",
            "........",
            "#######G",
        ],
        (0, 1),
    )
    .unwrap();
    let mut state = PlatformerState::new(level);
    run_until_terminal(&mut state, &RUN_RIGHT, 400);
    assert_eq!(state.outcome, Outcome::Win);
    assert_eq!(state.body.pos.y, 1.5);
    // Won the moment the goal column was reached
    assert_eq!(state.body.pos.x.round(), 7.0);
}

#[test]
fn test_walk_into_hazard() {
    let level = Level::parse(
        &[
            "....G...",
            "........",
            "##^^^^^^",
        ],
        (0, 1),
    )
    .unwrap();
    let mut state = PlatformerState::new(level);
    run_until_terminal(&mut state, &RUN_RIGHT, 400);
    assert_eq!(state.outcome, Outcome::Dead);
    // Died at the edge of the solid ledge, not somewhere deep in the pit
    assert!(state.body.pos.x < 3.0);
}

#[test]
fn test_fragile_perch_gives_way() {
    // The actor drops onto a lone fragile tile, stands for exactly one
    // resolved tick, then falls through the hole it made and out of the
    // level
    let level = Level::parse(
        &[
            "......G..",
            ".........",
            ".........",
            ".........",
            ".........",
            ".........",
            ".........",
            ".........",
            "...F..#..",
        ],
        (3, 0),
    )
    .unwrap();
    let mut state = PlatformerState::new(level);

    // Fall until the landing
    for _ in 0..100 {
        tick(&mut state, &TickInput::default());
        if state.body.grounded {
            break;
        }
    }
    assert!(state.body.grounded);
    assert_eq!(state.body.pos, glam::Vec2::new(3.0, 7.5));
    assert_eq!(state.grid.tile(3, 8), Tile::Empty);
    assert_eq!(state.level().make_grid().tile(3, 8), Tile::Fragile);

    // With the floor gone the actor resumes falling from (3, 7.5) and
    // eventually leaves the grid
    run_until_terminal(&mut state, &TickInput::default(), 200);
    assert_eq!(state.outcome, Outcome::Dead);

    // Reset restores both the tile and the actor
    state.reset();
    assert_eq!(state.grid.tile(3, 8), Tile::Fragile);
    assert_eq!(state.outcome, Outcome::Playing);
    assert_eq!(state.body.pos, glam::Vec2::new(3.0, 0.0));
}

#[test]
fn test_state_serde_round_trip_mid_flight() {
    let level = Level::parse(
        &[
            "..........",
            "..........",
            "..........",
            "####.###.G",
        ],
        (1, 2),
    )
    .unwrap();
    let mut state = PlatformerState::new(level);
    for _ in 0..30 {
        tick(&mut state, &RUN_RIGHT);
    }

    let json = serde_json::to_string(&state).unwrap();
    let mut restored: PlatformerState = serde_json::from_str(&json).unwrap();

    for _ in 0..30 {
        tick(&mut state, &RUN_RIGHT);
        tick(&mut restored, &RUN_RIGHT);
    }
    assert_eq!(state.body.pos, restored.body.pos);
    assert_eq!(state.body.vel, restored.body.vel);
    assert_eq!(state.outcome, restored.outcome);
    assert_eq!(state.time_ticks, restored.time_ticks);
}

#[test]
fn test_two_runs_agree_tick_for_tick() {
    let level = || {
        Level::parse(
            &[
                "..........",
                "..........",
                "......##.G",
                "####......",
            ],
            (0, 2),
        )
        .unwrap()
    };
    let script = |t: u64| TickInput {
        left: false,
        right: true,
        jump: t % 30 < 4,
    };

    let mut a = PlatformerState::new(level());
    let mut b = PlatformerState::new(level());
    for t in 0..500 {
        tick(&mut a, &script(t));
        tick(&mut b, &script(t));
        assert_eq!(a.body.pos, b.body.pos, "diverged at tick {t}");
        assert_eq!(a.outcome, b.outcome);
    }
}
