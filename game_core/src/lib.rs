//! Deterministic Pong simulation core
//!
//! One call to [`step`] advances the game by one fixed tick: player paddle,
//! AI paddle, ball integration, wall and paddle collisions, scoring, then
//! cosmetic effects. Rendering and input collection live outside this crate
//! and talk to it through [`TickInput`], [`FrameView`] and [`ScoreSink`].

pub mod ai;
pub mod components;
pub mod config;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod params;
pub mod particles;
pub mod resources;
pub mod state;
pub mod systems;

pub use ai::*;
pub use components::*;
pub use config::*;
pub use error::*;
pub use frame::*;
pub use params::*;
pub use particles::Particle;
pub use resources::*;
pub use state::*;

use systems::*;

/// Run one tick of the Pong simulation.
///
/// A pause toggle flips the paused flag first; while paused nothing else
/// changes. Returns the score change of this tick, if any.
pub fn step(state: &mut GameState, input: &TickInput) -> Option<ScoreEvent> {
    // Clear events at start of tick
    state.events.clear();

    if input.pause_toggled {
        state.paused = !state.paused;
        log::info!("{}", if state.paused { "Paused" } else { "Resumed" });
    }
    if state.paused {
        return None;
    }

    state.tick += 1;

    // 1. Player paddle from input
    apply_player_control(&mut state.player, input.intent, &state.config);

    // 2. AI paddle
    update_ai(
        &mut state.ai,
        &mut state.ai_state,
        &state.ball,
        &state.config,
        &mut state.rng,
    );

    // 3. Move ball
    integrate_ball(&mut state.ball);

    // 4. Collisions (walls, then both paddles)
    resolve_wall_collision(
        &mut state.ball,
        &state.config,
        &mut state.effects,
        &mut state.events,
    );
    for paddle in [&state.player, &state.ai] {
        resolve_paddle_collision(
            &mut state.ball,
            paddle,
            &state.config,
            &mut state.effects,
            &mut state.events,
        );
    }

    // 5. Scoring (ball exited past a goal line)
    let scored = resolve_scoring(state);

    // 6. Cosmetics
    update_effects(state);

    scored
}

/// Run one host frame: a tick, the score sink if the score moved, then the
/// renderer (which also runs while paused)
pub fn frame<R, S>(
    state: &mut GameState,
    input: &TickInput,
    renderer: &mut R,
    sink: &mut S,
) -> Option<ScoreEvent>
where
    R: Renderer + ?Sized,
    S: ScoreSink + ?Sized,
{
    let scored = step(state, input);
    if let Some(event) = &scored {
        sink.score_changed(event);
    }
    renderer.render(&state.view());
    scored
}
