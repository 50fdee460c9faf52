//! Pass Line entry point
//!
//! Native build runs a headless autoplay session and logs what happens.
//! Usage: `pass-line [tuning.json] [seed]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::path::PathBuf;

    use glam::Vec2;
    use pass_line::consts::SIM_DT;
    use pass_line::sim::{Arena, GameEvent, InputEvent};
    use pass_line::{Game, Tuning};

    /// Launches attempted before the session ends
    const LAUNCHES: u32 = 10;
    /// Frames a body may coast before we give up waiting for it
    const MAX_COAST_FRAMES: u32 = 60 * 10;
    /// Frames the drag is held, at 60 fps
    const HOLD_FRAMES: u32 = 20;
    const FRAME_DT: f32 = 1.0 / 60.0;

    env_logger::init();
    log::info!("Pass Line (native) starting...");

    let mut args = std::env::args().skip(1);
    let tuning = match args.next() {
        Some(path) => Tuning::load_or_default(&PathBuf::from(path)),
        None => Tuning::default(),
    };
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(1);

    let mut game = Game::with_reference_solver(tuning, Arena::default(), seed);
    let mut launcher = 0;

    for attempt in 0..LAUNCHES {
        // Wait for the restart if the last launch ended the round
        while !game.round.state.is_playing() {
            game.update(FRAME_DT);
        }
        game.drain_events();

        let bodies = &game.round.bodies;
        let launched = &bodies[launcher];
        let gates: Vec<Vec2> = bodies
            .iter()
            .filter(|b| b.id != launcher)
            .map(|b| b.pos)
            .collect();
        let midpoint = (gates[0] + gates[1]) * 0.5;
        let aim = (midpoint - launched.pos).normalize_or_zero();
        let start = launched.pos;

        game.push_input(InputEvent::PressStarted(start));
        for frame in 1..=HOLD_FRAMES {
            let t = frame as f32 / HOLD_FRAMES as f32;
            game.push_input(InputEvent::PointerMove(start + aim * t));
            game.update(FRAME_DT);
        }
        game.push_input(InputEvent::PressReleased(start + aim));

        for _ in 0..MAX_COAST_FRAMES {
            game.update(FRAME_DT);
            let events = game.drain_events();
            for event in &events {
                match event {
                    GameEvent::ScoreChanged(score) => println!("attempt {attempt}: score {score}"),
                    GameEvent::NearMiss { gate, .. } => {
                        println!("attempt {attempt}: near miss on body {gate}")
                    }
                    GameEvent::GameOver => println!("attempt {attempt}: game over"),
                    _ => {}
                }
            }
            let settled = game.round.bodies.iter().all(|b| !b.is_moving);
            if settled || !game.round.state.is_playing() {
                break;
            }
        }

        launcher = (launcher + 1) % game.round.bodies.len();
    }

    println!(
        "Final score: {} after {:.1}s of sim time (tick {SIM_DT:.4}s)",
        game.round.score.value(),
        game.round.time
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Web hosts drive `pass_line::Game` directly
}
