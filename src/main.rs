//! Headless demo driver
//!
//! Runs both engines with a scripted pilot and prints JSON snapshots,
//! which is handy for eyeballing determinism: the same seed always
//! prints the same transcript.
//!
//! Usage: `arcade-demo [seed]`

use cyberslayers_arcade::battle::{self, BattleState};
use cyberslayers_arcade::input::{Key, KeyState};
use cyberslayers_arcade::platformer::{self, Level, PlatformerState};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0xC1BE5);

    run_battle(seed);
    run_platformer();
}

/// Drive the boss fight with a simple pilot: strafe back and forth along
/// the arena floor and fire on every cooldown window
fn run_battle(seed: u64) {
    log::info!("battle demo, seed {seed}");
    let mut state = BattleState::new(seed);
    let mut keys = KeyState::default();
    keys.set_held(Key::Down, true);

    let max_ticks = 10_000;
    for t in 0..max_ticks {
        // Strafe direction flips every second
        let strafe_right = (t / 60) % 2 == 0;
        keys.set_held(Key::Right, strafe_right);
        keys.set_held(Key::Left, !strafe_right);

        // Tap fire each tick; the latch plus the engine cooldown turn
        // this into one shot per window
        keys.set_held(Key::Fire, true);
        keys.set_held(Key::Fire, false);
        if keys.take_fire_edge() {
            state.fire();
        }

        battle::tick(&mut state, &battle::TickInput::from_keys(&keys));
        if state.phase.is_terminal() {
            break;
        }
        if state.time_ticks % 600 == 0 {
            print_snapshot(&state.snapshot());
        }
    }
    print_snapshot(&state.snapshot());
}

/// Drive the platformer across a built-in level: run right, jump
/// whenever grounded
fn run_platformer() {
    let level = Level::parse(
        &[
            "..................",
            "..................",
            "...............G..",
            "..........####....",
            ".......FF.........",
            "...###............",
            "##.........^^^^^^^",
        ],
        (0, 5),
    )
    .unwrap_or_else(|err| {
        log::error!("bad built-in level: {err}");
        std::process::exit(1);
    });

    log::info!("platformer demo");
    let mut state = PlatformerState::new(level);
    let mut keys = KeyState::default();
    keys.set_held(Key::Right, true);

    let max_ticks = 4_000;
    for _ in 0..max_ticks {
        keys.set_held(Key::Jump, state.body.grounded);
        platformer::tick(&mut state, &platformer::TickInput::from_keys(&keys));
        if state.outcome.is_terminal() {
            break;
        }
        if state.time_ticks % 40 == 0 {
            print_snapshot(&state.snapshot());
        }
    }
    print_snapshot(&state.snapshot());
}

fn print_snapshot<S: serde::Serialize>(snapshot: &S) {
    match serde_json::to_string(snapshot) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("snapshot serialization failed: {err}"),
    }
}
